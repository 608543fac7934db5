use crate::imports::*;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PopupNews {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub video_link: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PopupNewsWithId {
    pub id: String,
    #[serde(flatten)]
    pub body: PopupNews,
}

impl PopupNews {
    pub fn timestamp(&self) -> std::time::SystemTime {
        humantime::parse_rfc3339(&self.created_at).unwrap()
    }

    pub fn formatted_now() -> String {
        let system_time = std::time::SystemTime::now();
        humantime::format_rfc3339_nanos(system_time).to_string()
    }
}

impl PopupNewsWithId {
    pub fn body(&self) -> &PopupNews {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut PopupNews {
        &mut self.body
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PopupNewsForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub video_link: Option<String>,
    pub is_active: Option<bool>,
}
