use crate::routes::imports::*;
use itertools::Itertools;

pub async fn popup_news_list(
    Extension(db): Extension<cozo::DbInstance>,
) -> ApiResult<Json<Vec<interfacing::PopupNewsWithId>>> {
    let popups = db::q::find_popup_news(&db)?;

    let popups = popups
        .into_iter()
        .sorted_by_key(|popup| popup.body().timestamp())
        .rev()
        .collect_vec();

    Ok(Json(popups))
}

/// `null` body when no banner is active.
pub async fn active_popup_news(
    Extension(db): Extension<cozo::DbInstance>,
) -> ApiResult<Json<Option<interfacing::PopupNewsWithId>>> {
    let popup = db::q::find_active_popup_news(&db)?;
    Ok(Json(popup))
}

pub async fn create_popup_news(
    Extension(db): Extension<cozo::DbInstance>,
    body: Result<Json<interfacing::PopupNewsForm>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(form) = body?;

    let (title, description) = match (non_empty(form.title), non_empty(form.description)) {
        (Some(title), Some(description)) => (title, description),
        _ => {
            return Err(ApiError::Validation(
                "Title and description are required".into(),
            ))
        }
    };

    let now = interfacing::PopupNews::formatted_now();
    let popup = interfacing::PopupNews {
        title,
        description,
        image_url: form.image_url,
        link: form.link,
        video_link: form.video_link,
        is_active: form.is_active.unwrap_or(false),
        created_at: now.clone(),
        updated_at: now,
    };

    let id = uuid::Uuid::new_v4();
    if popup.is_active {
        db::q::put_popup_news_activating(&db, id, &popup)?;
    } else {
        db::q::put_popup_news(&db, id, &popup)?;
    }

    Ok((
        StatusCode::CREATED,
        Json(interfacing::PopupNewsWithId {
            id: id.to_string(),
            body: popup,
        }),
    ))
}

pub async fn update_popup_news(
    Extension(db): Extension<cozo::DbInstance>,
    Path(id): Path<String>,
    body: Result<Json<interfacing::PopupNewsForm>, JsonRejection>,
) -> ApiResult<Json<interfacing::PopupNewsWithId>> {
    let id = parse_id(&id)?;

    let mut popup = match db::q::find_popup_news_by_id(&db, id)? {
        None => return Err(ApiError::NotFound("Popup news not found")),
        Some(popup) => popup,
    };

    let Json(form) = body?;

    // present fields overwrite, absent fields keep the stored value
    {
        let popup = popup.body_mut();

        if let Some(title) = form.title {
            popup.title = title;
        }
        if let Some(description) = form.description {
            popup.description = description;
        }
        if form.image_url.is_some() {
            popup.image_url = form.image_url;
        }
        if form.link.is_some() {
            popup.link = form.link;
        }
        if form.video_link.is_some() {
            popup.video_link = form.video_link;
        }
        if let Some(is_active) = form.is_active {
            popup.is_active = is_active;
        }
        popup.updated_at = interfacing::PopupNews::formatted_now();
    }

    if form.is_active == Some(true) {
        db::q::put_popup_news_activating(&db, id, popup.body())?;
    } else {
        db::q::put_popup_news(&db, id, popup.body())?;
    }

    Ok(Json(popup))
}

pub async fn activate_popup_news(
    Extension(db): Extension<cozo::DbInstance>,
    Path(id): Path<String>,
) -> ApiResult<Json<interfacing::PopupNewsWithId>> {
    let id = parse_id(&id)?;

    let mut popup = match db::q::find_popup_news_by_id(&db, id)? {
        None => return Err(ApiError::NotFound("Popup news not found")),
        Some(popup) => popup,
    };

    {
        let popup = popup.body_mut();
        popup.is_active = true;
        popup.updated_at = interfacing::PopupNews::formatted_now();
    }

    db::q::put_popup_news_activating(&db, id, popup.body())?;

    Ok(Json(popup))
}

pub async fn delete_popup_news(
    Extension(db): Extension<cozo::DbInstance>,
    Path(id): Path<String>,
) -> ApiResult<Json<interfacing::Ack>> {
    let id = parse_id(&id)?;

    match db::q::find_popup_news_by_id(&db, id)? {
        None => Err(ApiError::NotFound("Popup news not found")),
        Some(_) => {
            db::q::rm_popup_news(&db, id)?;
            Ok(Json(interfacing::Ack {
                message: "Popup news deleted".into(),
            }))
        }
    }
}

fn parse_id(value: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(value).map_err(|_| ApiError::NotFound("Popup news not found"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
