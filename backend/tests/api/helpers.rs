use backend::conf;
use backend::startup::Application;
use backend::trace;
use once_cell::sync::Lazy;
use reqwest::RequestBuilder;
use static_routes::*;

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = trace::TracingSubscriber::new("testing");

    if std::env::var("TEST_LOG").is_ok() {
        trace::init_global_default(subscriber.build(std::io::stdout));
    } else {
        trace::init_global_default(subscriber.build(std::io::sink));
    };
});

pub async fn spawn_app() -> TestApp {
    let mut env_conf = conf::EnvConf::test_default();
    env_conf.assets.base_url = spawn_asset_host().await;

    spawn_app_with(env_conf).await
}

pub async fn spawn_app_with(env_conf: conf::EnvConf) -> TestApp {
    Lazy::force(&TRACING);

    let conf = conf::Conf::new(conf::Env::Local, env_conf);

    let application = Application::build(&conf).await;

    let host = application.host().to_owned();
    let port = application.port();
    let address = format!("http://{}:{}", host, port);

    let db = application.db();
    let _ = tokio::spawn(application.server());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        port,
        api_client,
        db,
    }
}

/// Stand-in for the image host. Echoes back a deterministic URL built from
/// the form fields, so tests can assert on folder and crop handling.
async fn spawn_asset_host() -> String {
    async fn upload(mut multipart: axum::extract::Multipart) -> axum::Json<serde_json::Value> {
        let mut folder = String::new();
        let mut filename = String::new();
        let mut width = None;
        let mut height = None;
        let mut crop = None;

        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_owned();
            match name.as_str() {
                "folder" => folder = field.text().await.unwrap(),
                "file" => {
                    filename = field.file_name().unwrap_or("file").to_owned();
                    let _ = field.bytes().await.unwrap();
                }
                "width" => width = Some(field.text().await.unwrap()),
                "height" => height = Some(field.text().await.unwrap()),
                "crop" => crop = Some(field.text().await.unwrap()),
                _ => (),
            }
        }

        let url = match (width, height, crop) {
            (Some(width), Some(height), Some(crop)) => {
                format!("https://assets.test/{folder}/{width}x{height}-{crop}-{filename}")
            }
            _ => format!("https://assets.test/{folder}/{filename}"),
        };

        axum::Json(serde_json::json!({ "url": url }))
    }

    let router = axum::Router::new().route("/upload", axum::routing::post(upload));

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());
    let _ = tokio::spawn(server);

    format!("http://{}", address)
}

pub struct TestApp {
    pub address: String,
    #[allow(dead_code)]
    pub port: u16,
    pub api_client: reqwest::Client,
    pub db: cozo::DbInstance,
}

impl TestApp {
    pub fn get(&self, static_path: impl Get) -> RequestBuilder {
        self.api_client
            .get(static_path.get().with_base(&self.address).complete())
    }

    pub fn post(&self, static_path: impl Post) -> RequestBuilder {
        self.api_client
            .post(static_path.post().with_base(&self.address).complete())
    }

    /// Full URL for api paths that carry dynamic segments.
    pub fn api_path(&self, postfix: &str) -> String {
        format!("{}/api{}", self.address, postfix)
    }

    pub async fn post_news<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.post(routes().api.news)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_popup_news<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.post(routes().api.popup_news)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_active_popup(&self) -> reqwest::Response {
        self.get(routes().api.popup_news.active)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Puts an article straight into the store, skipping the http layer.
    pub fn seed_news(&self, title: &str, category: &str, breaking: bool) -> String {
        let id = uuid::Uuid::new_v4();
        let news = interfacing::News {
            title: title.into(),
            body: format!("{} body", title),
            category: category.into(),
            image_url: None,
            is_breaking: breaking,
            breaking_url: String::new(),
            created_at: interfacing::News::formatted_now(),
        };
        backend::db::q::put_news(&self.db, id, &news).unwrap();
        id.to_string()
    }
}
