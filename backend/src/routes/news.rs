use crate::assets;
use crate::routes::imports::*;
use axum::extract::FromRequest;
use bytes::Bytes;
use hyper::{Body, Request};
use itertools::Itertools;

#[derive(Deserialize, Debug)]
pub struct ListParams {
    page: Option<String>,
    limit: Option<String>,
    category: Option<String>,
    breaking: Option<String>,
    sort: Option<String>,
    order: Option<String>,
}

enum SortField {
    CreatedAt,
    Title,
    Category,
}

impl SortField {
    fn parse(value: Option<&str>) -> Result<Self, ApiError> {
        match value {
            None | Some("createdAt") => Ok(Self::CreatedAt),
            Some("title") => Ok(Self::Title),
            Some("category") => Ok(Self::Category),
            Some(other) => Err(ApiError::Validation(format!(
                "Unsupported sort field: {other}"
            ))),
        }
    }
}

enum Order {
    Asc,
    Desc,
}

impl Order {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

pub async fn news_list(
    Extension(db): Extension<cozo::DbInstance>,
    Extension(conf): Extension<Conf>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<interfacing::NewsPage>> {
    let page = parse_positive(params.page.as_deref(), 1, "page")?;
    let limit = parse_positive(params.limit.as_deref(), 10, "limit")?.min(conf.news.page_size_cap);

    let sort = SortField::parse(params.sort.as_deref())?;
    let order = Order::parse(params.order.as_deref());

    let news = match &params.category {
        Some(category) => db::q::find_news_by_category(&db, category)?,
        None => db::q::find_news(&db)?,
    };

    let news = match params.breaking.as_deref() {
        Some("true") => news
            .into_iter()
            .filter(|item| item.body().is_breaking)
            .collect_vec(),
        _ => news,
    };

    let total = news.len();
    let news = sort_news(news, sort, order)
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect_vec();

    Ok(Json(interfacing::NewsPage {
        total,
        current_page: page,
        total_pages: page_count(total, limit),
        news,
    }))
}

pub async fn news_categories(
    Extension(db): Extension<cozo::DbInstance>,
) -> ApiResult<Json<interfacing::Categories>> {
    let categories = db::q::news_categories(&db)?;
    Ok(Json(interfacing::Categories { categories }))
}

pub async fn news_by_id(
    Extension(db): Extension<cozo::DbInstance>,
    Path(id): Path<String>,
) -> ApiResult<Json<interfacing::NewsWithId>> {
    let id = parse_id(&id)?;

    match db::q::find_news_by_id(&db, id)? {
        None => Err(ApiError::NotFound("News not found")),
        Some(news) => Ok(Json(news)),
    }
}

pub async fn create_news(
    Extension(db): Extension<cozo::DbInstance>,
    Extension(image_host): Extension<Arc<ImageHost>>,
    request: Request<Body>,
) -> ApiResult<impl IntoResponse> {
    let (form, image) = news_request(request).await?;

    let (title, body) = match (non_empty(form.title), non_empty(form.body)) {
        (Some(title), Some(body)) => (title, body),
        _ => return Err(ApiError::Validation("Title and body are required".into())),
    };

    let image_url = match image {
        Some((filename, data)) => Some(
            image_host
                .upload(assets::NEWS_FOLDER, &filename, data.to_vec(), None)
                .await?,
        ),
        None => None,
    };

    let news = interfacing::News {
        title,
        body,
        category: non_empty(form.category).unwrap_or_else(|| "general".into()),
        image_url,
        is_breaking: form.is_breaking.unwrap_or(false),
        breaking_url: form.breaking_url.unwrap_or_default(),
        created_at: interfacing::News::formatted_now(),
    };

    let id = uuid::Uuid::new_v4();
    db::q::put_news(&db, id, &news)?;

    Ok((
        StatusCode::CREATED,
        Json(interfacing::NewsCreated {
            message: "News uploaded".into(),
            news: interfacing::NewsWithId {
                id: id.to_string(),
                body: news,
            },
        }),
    ))
}

pub async fn update_news(
    Extension(db): Extension<cozo::DbInstance>,
    Extension(image_host): Extension<Arc<ImageHost>>,
    Path(id): Path<String>,
    request: Request<Body>,
) -> ApiResult<Json<interfacing::NewsUpdated>> {
    let id = parse_id(&id)?;

    let mut news = match db::q::find_news_by_id(&db, id)? {
        None => return Err(ApiError::NotFound("News not found")),
        Some(news) => news,
    };

    let (form, image) = news_request(request).await?;

    {
        let news = news.body_mut();

        if let Some(title) = non_empty(form.title) {
            news.title = title;
        }
        if let Some(body) = non_empty(form.body) {
            news.body = body;
        }
        if let Some(category) = non_empty(form.category) {
            news.category = category;
        }
        if let Some(is_breaking) = form.is_breaking {
            news.is_breaking = is_breaking;
        }
        if let Some(breaking_url) = non_empty(form.breaking_url) {
            news.breaking_url = breaking_url;
        }
        if let Some((filename, data)) = image {
            news.image_url = Some(
                image_host
                    .upload(assets::NEWS_FOLDER, &filename, data.to_vec(), None)
                    .await?,
            );
        }
    }

    db::q::put_news(&db, id, news.body())?;

    Ok(Json(interfacing::NewsUpdated {
        message: "News updated".into(),
        updated_news: news,
    }))
}

pub async fn delete_news(
    Extension(db): Extension<cozo::DbInstance>,
    Path(id): Path<String>,
) -> ApiResult<Json<interfacing::Ack>> {
    let id = parse_id(&id)?;

    match db::q::find_news_by_id(&db, id)? {
        None => Err(ApiError::NotFound("News not found")),
        Some(_) => {
            db::q::rm_news(&db, id)?;
            Ok(Json(interfacing::Ack {
                message: "News deleted successfully".into(),
            }))
        }
    }
}

/// Reads either a JSON document or a multipart form into the partial news
/// payload. Multipart is the only way to attach an image file.
async fn news_request(
    request: Request<Body>,
) -> Result<(interfacing::NewsForm, Option<(String, Bytes)>), ApiError> {
    let content_type = request
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let mut form = interfacing::NewsForm::default();
        let mut image = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))?
        {
            let name = match field.name() {
                Some(name) => name.to_owned(),
                None => continue,
            };

            match name.as_str() {
                "title" => form.title = Some(field_text(field).await?),
                "body" => form.body = Some(field_text(field).await?),
                "category" => form.category = Some(field_text(field).await?),
                "isBreaking" => {
                    form.is_breaking = Some(interfacing::truthy_flag(&field_text(field).await?))
                }
                "breakingUrl" => form.breaking_url = Some(field_text(field).await?),
                "image" => {
                    let filename = field.file_name().unwrap_or("image").to_owned();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::Validation(e.to_string()))?;
                    if !data.is_empty() {
                        image = Some((filename, data));
                    }
                }
                _ => (),
            }
        }

        Ok((form, image))
    } else {
        let body = hyper::body::to_bytes(request.into_body())
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let form = if body.is_empty() {
            interfacing::NewsForm::default()
        } else {
            serde_json::from_slice(&body).map_err(|e| ApiError::Validation(e.to_string()))?
        };

        Ok((form, None))
    }
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))
}

fn parse_id(value: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(value).map_err(|_| ApiError::NotFound("News not found"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn parse_positive(value: Option<&str>, default: usize, name: &str) -> Result<usize, ApiError> {
    match value {
        None => Ok(default),
        Some(value) => match value.parse::<usize>() {
            Ok(number) if number > 0 => Ok(number),
            _ => Err(ApiError::Validation(format!(
                "Parameter {name} must be a positive integer"
            ))),
        },
    }
}

fn page_count(total: usize, limit: usize) -> usize {
    if total == 0 {
        0
    } else {
        (total + limit - 1) / limit
    }
}

fn sort_news(
    news: Vec<interfacing::NewsWithId>,
    field: SortField,
    order: Order,
) -> Vec<interfacing::NewsWithId> {
    let sorted = match field {
        SortField::CreatedAt => news
            .into_iter()
            .sorted_by_key(|item| item.body().timestamp())
            .collect_vec(),
        SortField::Title => news
            .into_iter()
            .sorted_by(|a, b| a.body().title.cmp(&b.body().title))
            .collect_vec(),
        SortField::Category => news
            .into_iter()
            .sorted_by(|a, b| a.body().category.cmp(&b.body().category))
            .collect_vec(),
    };

    match order {
        Order::Asc => sorted,
        Order::Desc => sorted.into_iter().rev().collect_vec(),
    }
}
