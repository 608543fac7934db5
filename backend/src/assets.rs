// Client for the external image host. Uploads go out as multipart forms,
// the host answers with the public URL of the stored file.

use crate::conf::AssetsConf;
use secrecy::{ExposeSecret, Secret};

pub static NEWS_FOLDER: &str = "news-images";
pub static POPUP_FOLDER: &str = "popup-news-images";

/// Banner images are normalized server-side to a fixed landscape frame.
pub static POPUP_CROP: Crop = Crop {
    width: 800,
    height: 400,
};

#[derive(Debug, Clone, Copy)]
pub struct Crop {
    pub width: u32,
    pub height: u32,
}

pub struct ImageHost {
    http_client: reqwest::Client,
    base_url: url::Url,
    api_key: Secret<String>,
}

impl ImageHost {
    pub fn new(conf: &AssetsConf) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(conf.timeout())
            .build()
            .unwrap();

        Self {
            http_client,
            base_url: url::Url::parse(&conf.base_url).expect("valid assets base_url"),
            api_key: conf.api_key.clone(),
        }
    }

    #[tracing::instrument(name = "Upload image", skip(self, data))]
    pub async fn upload(
        &self,
        folder: &str,
        filename: &str,
        data: Vec<u8>,
        crop: Option<Crop>,
    ) -> Result<String, anyhow::Error> {
        let part = reqwest::multipart::Part::bytes(data).file_name(filename.to_owned());
        let form = reqwest::multipart::Form::new()
            .text("folder", folder.to_owned())
            .part("file", part);

        let form = match crop {
            Some(crop) => form
                .text("width", crop.width.to_string())
                .text("height", crop.height.to_string())
                .text("crop", "fill"),
            None => form,
        };

        let response = self
            .http_client
            .post(self.base_url.join("upload")?)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let uploaded = response.json::<UploadResponse>().await?;
        Ok(uploaded.url)
    }
}

#[derive(serde::Deserialize)]
struct UploadResponse {
    url: String,
}
