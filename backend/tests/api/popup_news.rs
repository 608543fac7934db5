use crate::helpers::spawn_app;
use hyper::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_requires_title_and_description() {
    let app = spawn_app().await;

    for body in [
        json!({}),
        json!({ "title": "Only a title" }),
        json!({ "title": "", "description": "Present" }),
    ] {
        let response = app.post_popup_news(&body).await;

        assert_eq!(StatusCode::BAD_REQUEST, response.status(), "{:?}", body);
        let value = response.json::<Value>().await.unwrap();
        assert_eq!(value["message"], "Title and description are required");
    }
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(app.api_path("/popup-news"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn inactive_banner_does_not_show_up_as_active() {
    let app = spawn_app().await;

    let response = app
        .post_popup_news(&json!({
            "title": "Subscribe",
            "description": "Subscribe to our newsletter",
        }))
        .await;

    assert_eq!(StatusCode::CREATED, response.status());
    let created = response
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();
    assert!(!created.body().is_active);
    assert!(!created.id.is_empty());

    let response = app.get_active_popup().await;
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(response.text().await.unwrap(), "null");
}

#[tokio::test]
async fn creating_an_active_banner_deactivates_the_rest() {
    let app = spawn_app().await;

    let first = app
        .post_popup_news(&json!({
            "title": "First",
            "description": "First banner",
            "isActive": true,
        }))
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    let second = app
        .post_popup_news(&json!({
            "title": "Second",
            "description": "Second banner",
            "isActive": true,
        }))
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    let active = app
        .get_active_popup()
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();
    assert_eq!(active.id, second.id);

    let all = backend::db::q::find_popup_news(&app.db).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.iter().filter(|popup| popup.body().is_active).count(), 1);

    let first_now = backend::db::q::find_popup_news_by_id(
        &app.db,
        first.id.parse().unwrap(),
    )
    .unwrap()
    .unwrap();
    assert!(!first_now.body().is_active);
}

#[tokio::test]
async fn activate_endpoint_switches_the_banner() {
    let app = spawn_app().await;

    let first = app
        .post_popup_news(&json!({
            "title": "First",
            "description": "First banner",
            "isActive": true,
        }))
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    let second = app
        .post_popup_news(&json!({
            "title": "Second",
            "description": "Second banner",
        }))
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    let response = app
        .api_client
        .patch(app.api_path(&format!("/popup-news/{}/activate", second.id)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let activated = response
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();
    assert!(activated.body().is_active);
    assert!(activated.body().updated_at > activated.body().created_at);

    let active = app
        .get_active_popup()
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();
    assert_eq!(active.id, second.id);
    assert_ne!(active.id, first.id);
}

#[tokio::test]
async fn activating_a_missing_banner_is_404() {
    let app = spawn_app().await;

    app.post_popup_news(&json!({
        "title": "Live",
        "description": "The only banner",
        "isActive": true,
    }))
    .await;

    let response = app
        .api_client
        .patch(app.api_path(&format!(
            "/popup-news/{}/activate",
            uuid::Uuid::new_v4()
        )))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::NOT_FOUND, response.status());
    let value = response.json::<Value>().await.unwrap();
    assert_eq!(value["message"], "Popup news not found");

    // the stored state is untouched
    let active = app
        .get_active_popup()
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();
    assert_eq!(active.body().title, "Live");
}

#[tokio::test]
async fn update_overwrites_present_fields() {
    let app = spawn_app().await;

    let created = app
        .post_popup_news(&json!({
            "title": "Original",
            "description": "Original description",
            "link": "https://example.org/one",
        }))
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    let response = app
        .api_client
        .put(app.api_path(&format!("/popup-news/{}", created.id)))
        .json(&json!({ "title": "Renamed", "link": "" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let updated = response
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    assert_eq!(updated.body().title, "Renamed");
    // unlike the news endpoint, present-but-empty overwrites here
    assert_eq!(updated.body().link.as_deref(), Some(""));
    assert_eq!(updated.body().description, "Original description");
    assert!(updated.body().updated_at > updated.body().created_at);
}

#[tokio::test]
async fn update_with_is_active_true_deactivates_the_rest() {
    let app = spawn_app().await;

    let first = app
        .post_popup_news(&json!({
            "title": "First",
            "description": "First banner",
            "isActive": true,
        }))
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    let second = app
        .post_popup_news(&json!({
            "title": "Second",
            "description": "Second banner",
        }))
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    app.api_client
        .put(app.api_path(&format!("/popup-news/{}", second.id)))
        .json(&json!({ "isActive": true }))
        .send()
        .await
        .expect("Failed to execute request.");

    let all = backend::db::q::find_popup_news(&app.db).unwrap();
    assert_eq!(all.iter().filter(|popup| popup.body().is_active).count(), 1);

    let active = app
        .get_active_popup()
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();
    assert_eq!(active.id, second.id);
    assert_ne!(active.id, first.id);
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = spawn_app().await;

    for title in ["First", "Second", "Third"] {
        app.post_popup_news(&json!({
            "title": title,
            "description": format!("{} banner", title),
        }))
        .await;
    }

    let response = app
        .get(static_routes::routes().api.popup_news)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let popups = response
        .json::<Vec<interfacing::PopupNewsWithId>>()
        .await
        .unwrap();

    let titles = popups
        .iter()
        .map(|popup| popup.body().title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn delete_removes_the_banner() {
    let app = spawn_app().await;

    let created = app
        .post_popup_news(&json!({
            "title": "Doomed",
            "description": "Not long for this world",
        }))
        .await
        .json::<interfacing::PopupNewsWithId>()
        .await
        .unwrap();

    let response = app
        .api_client
        .delete(app.api_path(&format!("/popup-news/{}", created.id)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let value = response.json::<Value>().await.unwrap();
    assert_eq!(value["message"], "Popup news deleted");

    assert!(backend::db::q::find_popup_news(&app.db).unwrap().is_empty());

    let response = app
        .api_client
        .delete(app.api_path(&format!("/popup-news/{}", created.id)))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}
