use crate::helpers::{spawn_app, spawn_app_with};
use backend::conf;
use hyper::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_requires_title_and_body() {
    let app = spawn_app().await;

    for body in [
        json!({}),
        json!({ "title": "Only a title" }),
        json!({ "body": "Only a body" }),
        json!({ "title": "", "body": "Present" }),
    ] {
        let response = app.post_news(&body).await;

        assert_eq!(StatusCode::BAD_REQUEST, response.status(), "{:?}", body);
        let value = response.json::<Value>().await.unwrap();
        assert_eq!(value["message"], "Title and body are required");
    }
}

#[tokio::test]
async fn created_news_round_trips_through_fetch() {
    let app = spawn_app().await;

    let response = app
        .post_news(&json!({
            "title": "Hurricane nears the coast",
            "body": "Full report",
            "category": "weather",
            "isBreaking": "on",
            "breakingUrl": "https://example.org/live",
        }))
        .await;

    assert_eq!(StatusCode::CREATED, response.status());
    let value = response.json::<Value>().await.unwrap();
    assert_eq!(value["message"], "News uploaded");

    let id = value["news"]["id"].as_str().unwrap();
    assert_eq!(value["news"]["isBreaking"], true);

    let response = app
        .api_client
        .get(app.api_path(&format!("/news/{}", id)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let fetched = response.json::<interfacing::NewsWithId>().await.unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.body().title, "Hurricane nears the coast");
    assert_eq!(fetched.body().category, "weather");
    assert_eq!(fetched.body().breaking_url, "https://example.org/live");
}

#[tokio::test]
async fn create_fills_in_defaults() {
    let app = spawn_app().await;

    let response = app
        .post_news(&json!({ "title": "Plain", "body": "Nothing special" }))
        .await;

    assert_eq!(StatusCode::CREATED, response.status());
    let value = response.json::<Value>().await.unwrap();

    assert_eq!(value["news"]["category"], "general");
    assert_eq!(value["news"]["isBreaking"], false);
    assert_eq!(value["news"]["breakingUrl"], "");
    assert!(value["news"]["imageUrl"].is_null());
}

#[tokio::test]
async fn multipart_create_uploads_the_image() {
    let app = spawn_app().await;

    let form = reqwest::multipart::Form::new()
        .text("title", "With a photo")
        .text("body", "Look at this")
        .text("category", "technology")
        .text("isBreaking", "on")
        .part(
            "image",
            reqwest::multipart::Part::bytes(vec![0xFF, 0xD8, 0xFF]).file_name("photo.png"),
        );

    let response = app
        .api_client
        .post(app.api_path("/news"))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::CREATED, response.status());
    let value = response.json::<Value>().await.unwrap();

    assert_eq!(value["news"]["isBreaking"], true);
    assert_eq!(
        value["news"]["imageUrl"],
        "https://assets.test/news-images/photo.png"
    );
}

#[tokio::test]
async fn category_page_is_filtered_sorted_and_paged() {
    let app = spawn_app().await;

    for i in 1..=10 {
        app.seed_news(&format!("Tech story #{}", i), "technology", false);
    }
    for i in 1..=3 {
        app.seed_news(&format!("Sports story #{}", i), "sports", false);
    }

    let response = app
        .api_client
        .get(app.api_path("/news"))
        .query(&[("category", "technology"), ("page", "2"), ("limit", "6")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let page = response.json::<interfacing::NewsPage>().await.unwrap();

    assert_eq!(page.total, 10);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 2);

    // newest first, so the second page holds the four oldest
    let titles = page
        .news
        .iter()
        .map(|news| news.body().title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        titles,
        [
            "Tech story #4",
            "Tech story #3",
            "Tech story #2",
            "Tech story #1"
        ]
    );
}

#[tokio::test]
async fn empty_store_pages_to_zero() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(app.api_path("/news"))
        .send()
        .await
        .expect("Failed to execute request.");

    let page = response.json::<interfacing::NewsPage>().await.unwrap();

    assert_eq!(page.total, 0);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 0);
    assert!(page.news.is_empty());
}

#[tokio::test]
async fn page_size_is_capped() {
    let mut env_conf = conf::EnvConf::test_default();
    env_conf.news.page_size_cap = 5;
    let app = spawn_app_with(env_conf).await;

    for i in 1..=8 {
        app.seed_news(&format!("Story #{}", i), "general", false);
    }

    let response = app
        .api_client
        .get(app.api_path("/news"))
        .query(&[("limit", "100")])
        .send()
        .await
        .expect("Failed to execute request.");

    let page = response.json::<interfacing::NewsPage>().await.unwrap();

    assert_eq!(page.news.len(), 5);
    assert_eq!(page.total, 8);
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn garbage_pagination_params_are_rejected() {
    let app = spawn_app().await;

    for (name, value) in [("page", "0"), ("page", "abc"), ("limit", "-1")] {
        let response = app
            .api_client
            .get(app.api_path("/news"))
            .query(&[(name, value)])
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            response.status(),
            "{}={}",
            name,
            value
        );
        let message = response.json::<Value>().await.unwrap()["message"]
            .as_str()
            .unwrap()
            .to_owned();
        assert_eq!(
            message,
            format!("Parameter {} must be a positive integer", name)
        );
    }
}

#[tokio::test]
async fn unsupported_sort_field_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(app.api_path("/news"))
        .query(&[("sort", "views")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    let value = response.json::<Value>().await.unwrap();
    assert_eq!(value["message"], "Unsupported sort field: views");
}

#[tokio::test]
async fn sorting_by_title_works_both_ways() {
    let app = spawn_app().await;

    app.seed_news("banana", "general", false);
    app.seed_news("apple", "general", false);
    app.seed_news("cherry", "general", false);

    let titles = |order: &'static str| {
        let app = &app;
        async move {
            let response = app
                .api_client
                .get(app.api_path("/news"))
                .query(&[("sort", "title"), ("order", order)])
                .send()
                .await
                .expect("Failed to execute request.");

            let page = response.json::<interfacing::NewsPage>().await.unwrap();
            page.news
                .into_iter()
                .map(|news| news.body.title)
                .collect::<Vec<_>>()
        }
    };

    assert_eq!(titles("asc").await, ["apple", "banana", "cherry"]);
    assert_eq!(titles("desc").await, ["cherry", "banana", "apple"]);
}

#[tokio::test]
async fn breaking_filter_keeps_only_breaking_news() {
    let app = spawn_app().await;

    app.seed_news("Calm story", "general", false);
    app.seed_news("Alarm #1", "general", true);
    app.seed_news("Another calm one", "general", false);
    app.seed_news("Alarm #2", "general", true);

    let response = app
        .api_client
        .get(app.api_path("/news"))
        .query(&[("breaking", "true")])
        .send()
        .await
        .expect("Failed to execute request.");

    let page = response.json::<interfacing::NewsPage>().await.unwrap();

    assert_eq!(page.total, 2);
    assert!(page.news.iter().all(|news| news.body().is_breaking));
}

#[tokio::test]
async fn missing_news_is_404() {
    let app = spawn_app().await;

    for id in [uuid::Uuid::new_v4().to_string(), "not-a-uuid".to_owned()] {
        let response = app
            .api_client
            .get(app.api_path(&format!("/news/{}", id)))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(StatusCode::NOT_FOUND, response.status(), "{}", id);
        let value = response.json::<Value>().await.unwrap();
        assert_eq!(value["message"], "News not found");
    }
}

#[tokio::test]
async fn update_merges_only_provided_fields() {
    let app = spawn_app().await;
    let id = app.seed_news("Original title", "general", false);

    let response = app
        .api_client
        .put(app.api_path(&format!("/news/{}", id)))
        .json(&json!({ "title": "Amended title", "isBreaking": true }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let value = response.json::<Value>().await.unwrap();
    assert_eq!(value["message"], "News updated");
    assert_eq!(value["updatedNews"]["title"], "Amended title");
    assert_eq!(value["updatedNews"]["isBreaking"], true);
    assert_eq!(value["updatedNews"]["body"], "Original title body");
}

#[tokio::test]
async fn empty_strings_do_not_overwrite_on_update() {
    let app = spawn_app().await;
    let id = app.seed_news("Keep me", "general", false);

    let response = app
        .api_client
        .put(app.api_path(&format!("/news/{}", id)))
        .json(&json!({ "title": "", "body": "" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let value = response.json::<Value>().await.unwrap();
    assert_eq!(value["updatedNews"]["title"], "Keep me");
}

#[tokio::test]
async fn updating_missing_news_is_404() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .put(app.api_path(&format!("/news/{}", uuid::Uuid::new_v4())))
        .json(&json!({ "title": "Whatever" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn delete_removes_the_article() {
    let app = spawn_app().await;
    let id = app.seed_news("Doomed", "general", false);

    let response = app
        .api_client
        .delete(app.api_path(&format!("/news/{}", id)))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let value = response.json::<Value>().await.unwrap();
    assert_eq!(value["message"], "News deleted successfully");

    let response = app
        .api_client
        .get(app.api_path(&format!("/news/{}", id)))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let response = app
        .api_client
        .delete(app.api_path(&format!("/news/{}", id)))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn categories_are_distinct_and_sorted() {
    let app = spawn_app().await;

    app.seed_news("A", "sports", false);
    app.seed_news("B", "business", false);
    app.seed_news("C", "sports", false);

    let response = app
        .get(static_routes::routes().api.news.categories)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    let value = response.json::<interfacing::Categories>().await.unwrap();
    assert_eq!(value.categories, ["business", "sports"]);
}
