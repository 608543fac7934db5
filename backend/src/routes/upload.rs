use crate::assets;
use crate::routes::imports::*;
use axum::extract::multipart::MultipartRejection;

pub async fn upload_popup_image(
    Extension(image_host): Extension<Arc<ImageHost>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<interfacing::UploadedImage>> {
    let mut multipart = multipart.map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        if field.name() == Some("image") {
            let filename = field.file_name().unwrap_or("image").to_owned();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(e.to_string()))?;
            if !data.is_empty() {
                image = Some((filename, data));
            }
        }
    }

    let (filename, data) = match image {
        Some(image) => image,
        None => return Err(ApiError::Validation("No image file provided".into())),
    };

    let image_url = image_host
        .upload(
            assets::POPUP_FOLDER,
            &filename,
            data.to_vec(),
            Some(assets::POPUP_CROP),
        )
        .await?;

    Ok(Json(interfacing::UploadedImage { image_url }))
}
