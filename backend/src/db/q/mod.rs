mod utils;

use imports::*;

mod imports {
    pub use super::utils::{Error, *};
    pub use cozo::*;
    pub use itertools::Itertools;
    pub use std::collections::BTreeMap;
}

#[tracing::instrument(name = "Create news table", skip_all)]
pub fn create_news_table(db: &DbInstance) -> OpResult {
    let script = include_str!("news/create_table.cozo");
    let result = db.run_script(script, Default::default(), ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Ensure news table", skip_all)]
pub fn ensure_news_table(db: &DbInstance) -> OpResult {
    let script = include_str!("news/ensure_table.cozo");
    let result = db.run_script(script, Default::default(), ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Put news", skip_all)]
pub fn put_news(db: &DbInstance, id: uuid::Uuid, news: &interfacing::News) -> OpResult {
    let script = include_str!("news/put.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => DataValue::Uuid(UuidWrapper(id)),
        "title".into() => news.title.clone().into(),
        "body".into() => news.body.clone().into(),
        "category".into() => news.category.clone().into(),
        "image_url".into() => str_or_null(&news.image_url),
        "is_breaking".into() => news.is_breaking.into(),
        "breaking_url".into() => news.breaking_url.clone().into(),
        "created_at".into() => news.created_at.clone().into(),
    };

    let result = db.run_script(script, params, ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Find news", skip_all)]
pub fn find_news(db: &DbInstance) -> Result<Vec<interfacing::NewsWithId>> {
    let script = include_str!("news/find.cozo");
    let result = db
        .run_script(script, Default::default(), ScriptMutability::Mutable)
        .map_err(Error::EngineError)?;

    news_rows(result)
}

#[tracing::instrument(name = "Find news by category", skip(db))]
pub fn find_news_by_category(
    db: &DbInstance,
    category: &str,
) -> Result<Vec<interfacing::NewsWithId>> {
    let script = include_str!("news/find_by_category.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "category".into() => category.into()
    };
    let result = db
        .run_script(script, params, ScriptMutability::Mutable)
        .map_err(Error::EngineError)?;

    news_rows(result)
}

// all rows must comply to format, if any does not - return error
fn news_rows(result: NamedRows) -> Result<Vec<interfacing::NewsWithId>> {
    let headers = result.headers.iter().map(String::as_str).collect_vec();
    let rows = result.rows.iter().map(Vec::as_slice).collect_vec();

    match &headers[..] {
        ["id", "title", "body", "category", "image_url", "is_breaking", "breaking_url", "created_at"] =>
        {}
        _ => return Err(Error::ResultError(result)),
    }

    let mut res = vec![];
    for row in rows {
        match &row[..] {
            [DataValue::Uuid(UuidWrapper(id)), DataValue::Str(title), DataValue::Str(body), DataValue::Str(category), image_url, DataValue::Bool(is_breaking), DataValue::Str(breaking_url), DataValue::Str(created_at)] =>
            {
                let image_url = match opt_str(image_url) {
                    Some(image_url) => image_url,
                    None => return Err(Error::ResultError(result)),
                };
                res.push(interfacing::NewsWithId {
                    id: id.to_string(),
                    body: interfacing::News {
                        title: title.to_string(),
                        body: body.to_string(),
                        category: category.to_string(),
                        image_url,
                        is_breaking: *is_breaking,
                        breaking_url: breaking_url.to_string(),
                        created_at: created_at.to_string(),
                    },
                });
            }
            _ => return Err(Error::ResultError(result)),
        }
    }

    Ok(res)
}

#[tracing::instrument(name = "Find news by id", skip(db))]
pub fn find_news_by_id(db: &DbInstance, id: uuid::Uuid) -> Result<Option<interfacing::NewsWithId>> {
    let script = include_str!("news/find_by_id.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => DataValue::Uuid(UuidWrapper(id))
    };
    let result = db
        .run_script(script, params, ScriptMutability::Mutable)
        .map_err(Error::EngineError)?;

    let mut rows = news_rows(result)?;
    Ok(rows.pop())
}

#[tracing::instrument(name = "Find news categories", skip_all)]
pub fn news_categories(db: &DbInstance) -> Result<Vec<String>> {
    let script = include_str!("news/categories.cozo");
    let result = db
        .run_script(script, Default::default(), ScriptMutability::Mutable)
        .map_err(Error::EngineError)?;

    let headers = result.headers.iter().map(String::as_str).collect_vec();
    let rows = result.rows.iter().map(Vec::as_slice).collect_vec();

    match &headers[..] {
        ["category"] => {}
        _ => return Err(Error::ResultError(result)),
    }

    let mut res = vec![];
    for row in rows {
        match &row[..] {
            [DataValue::Str(category)] => res.push(category.to_string()),
            _ => return Err(Error::ResultError(result)),
        }
    }

    Ok(res)
}

#[tracing::instrument(name = "Remove news", skip(db))]
pub fn rm_news(db: &DbInstance, id: uuid::Uuid) -> OpResult {
    let script = include_str!("news/rm.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => DataValue::Uuid(UuidWrapper(id)),
    };
    let result = db.run_script(script, params, ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Create popup_news table", skip_all)]
pub fn create_popup_news_table(db: &DbInstance) -> OpResult {
    let script = include_str!("popup_news/create_table.cozo");
    let result = db.run_script(script, Default::default(), ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Ensure popup_news table", skip_all)]
pub fn ensure_popup_news_table(db: &DbInstance) -> OpResult {
    let script = include_str!("popup_news/ensure_table.cozo");
    let result = db.run_script(script, Default::default(), ScriptMutability::Mutable);
    op_result(result)
}

fn popup_news_params(id: uuid::Uuid, popup: &interfacing::PopupNews) -> BTreeMap<String, DataValue> {
    map_macro::btree_map! {
        "id".into() => DataValue::Uuid(UuidWrapper(id)),
        "title".into() => popup.title.clone().into(),
        "description".into() => popup.description.clone().into(),
        "image_url".into() => str_or_null(&popup.image_url),
        "link".into() => str_or_null(&popup.link),
        "video_link".into() => str_or_null(&popup.video_link),
        "is_active".into() => popup.is_active.into(),
        "created_at".into() => popup.created_at.clone().into(),
        "updated_at".into() => popup.updated_at.clone().into(),
    }
}

#[tracing::instrument(name = "Put popup news", skip_all)]
pub fn put_popup_news(db: &DbInstance, id: uuid::Uuid, popup: &interfacing::PopupNews) -> OpResult {
    let script = include_str!("popup_news/put.cozo");
    let result = db.run_script(script, popup_news_params(id, popup), ScriptMutability::Mutable);
    op_result(result)
}

/// Deactivates every stored banner and puts this one active, in one transaction.
#[tracing::instrument(name = "Put popup news activating", skip_all)]
pub fn put_popup_news_activating(
    db: &DbInstance,
    id: uuid::Uuid,
    popup: &interfacing::PopupNews,
) -> OpResult {
    let script = include_str!("popup_news/put_activating.cozo");
    let result = db.run_script(script, popup_news_params(id, popup), ScriptMutability::Mutable);
    op_result(result)
}

#[tracing::instrument(name = "Find popup news", skip_all)]
pub fn find_popup_news(db: &DbInstance) -> Result<Vec<interfacing::PopupNewsWithId>> {
    let script = include_str!("popup_news/find.cozo");
    let result = db
        .run_script(script, Default::default(), ScriptMutability::Mutable)
        .map_err(Error::EngineError)?;

    popup_news_rows(result)
}

// all rows must comply to format, if any does not - return error
fn popup_news_rows(result: NamedRows) -> Result<Vec<interfacing::PopupNewsWithId>> {
    let headers = result.headers.iter().map(String::as_str).collect_vec();
    let rows = result.rows.iter().map(Vec::as_slice).collect_vec();

    match &headers[..] {
        ["id", "title", "description", "image_url", "link", "video_link", "is_active", "created_at", "updated_at"] =>
        {}
        _ => return Err(Error::ResultError(result)),
    }

    let mut res = vec![];
    for row in rows {
        match &row[..] {
            [DataValue::Uuid(UuidWrapper(id)), DataValue::Str(title), DataValue::Str(description), image_url, link, video_link, DataValue::Bool(is_active), DataValue::Str(created_at), DataValue::Str(updated_at)] =>
            {
                let parts = (opt_str(image_url), opt_str(link), opt_str(video_link));
                let (image_url, link, video_link) = match parts {
                    (Some(image_url), Some(link), Some(video_link)) => (image_url, link, video_link),
                    _ => return Err(Error::ResultError(result)),
                };
                res.push(interfacing::PopupNewsWithId {
                    id: id.to_string(),
                    body: interfacing::PopupNews {
                        title: title.to_string(),
                        description: description.to_string(),
                        image_url,
                        link,
                        video_link,
                        is_active: *is_active,
                        created_at: created_at.to_string(),
                        updated_at: updated_at.to_string(),
                    },
                });
            }
            _ => return Err(Error::ResultError(result)),
        }
    }

    Ok(res)
}

#[tracing::instrument(name = "Find popup news by id", skip(db))]
pub fn find_popup_news_by_id(
    db: &DbInstance,
    id: uuid::Uuid,
) -> Result<Option<interfacing::PopupNewsWithId>> {
    let script = include_str!("popup_news/find_by_id.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => DataValue::Uuid(UuidWrapper(id))
    };
    let result = db
        .run_script(script, params, ScriptMutability::Mutable)
        .map_err(Error::EngineError)?;

    let mut rows = popup_news_rows(result)?;
    Ok(rows.pop())
}

/// At most one banner is active at any time, so at most one row comes back.
#[tracing::instrument(name = "Find active popup news", skip_all)]
pub fn find_active_popup_news(db: &DbInstance) -> Result<Option<interfacing::PopupNewsWithId>> {
    let script = include_str!("popup_news/find_active.cozo");
    let result = db
        .run_script(script, Default::default(), ScriptMutability::Mutable)
        .map_err(Error::EngineError)?;

    if result.rows.len() > 1 {
        return Err(Error::ResultError(result));
    }

    let mut rows = popup_news_rows(result)?;
    Ok(rows.pop())
}

#[tracing::instrument(name = "Remove popup news", skip(db))]
pub fn rm_popup_news(db: &DbInstance, id: uuid::Uuid) -> OpResult {
    let script = include_str!("popup_news/rm.cozo");
    let params: BTreeMap<String, DataValue> = map_macro::btree_map! {
        "id".into() => DataValue::Uuid(UuidWrapper(id)),
    };
    let result = db.run_script(script, params, ScriptMutability::Mutable);
    op_result(result)
}
