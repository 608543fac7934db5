use crate::assets::ImageHost;
use crate::conf::Conf;
use crate::serve_files;
use crate::trace;
use static_routes::*;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{add_extension::AddExtensionLayer, compression::CompressionLayer};

pub fn router(conf: Conf, db: cozo::DbInstance, image_host: Arc<ImageHost>) -> Router {
    use crate::routes::*;

    let routes = routes().api;

    let api_router = Router::new()
        .route(routes.health_check.get().postfix(), get(health_check))
        .route(routes.news.get().postfix(), get(news_list))
        .route(routes.news.post().postfix(), post(create_news))
        .route(routes.news.categories.get().postfix(), get(news_categories))
        .route("/news/:id", get(news_by_id))
        .route("/news/:id", put(update_news))
        .route("/news/:id", delete(delete_news))
        .route(routes.popup_news.get().postfix(), get(popup_news_list))
        .route(routes.popup_news.post().postfix(), post(create_popup_news))
        .route(
            routes.popup_news.active.get().postfix(),
            get(active_popup_news),
        )
        .route("/popup-news/:id", put(update_popup_news))
        .route("/popup-news/:id", delete(delete_popup_news))
        .route("/popup-news/:id/activate", patch(activate_popup_news))
        .route(
            routes.upload_popup_image.post().postfix(),
            post(upload_popup_image),
        );

    let serve_cache = serve_files::Cache::new(conf.serve.lru_size());

    Router::new()
        .nest("/api", api_router)
        .fallback(serve_files::fallback::fallback)
        .layer(AddExtensionLayer::new(db))
        .layer(AddExtensionLayer::new(conf))
        .layer(AddExtensionLayer::new(image_host))
        .layer(AddExtensionLayer::new(serve_cache))
        .layer(trace::request_trace_layer())
        .layer(CompressionLayer::new())
}

pub struct Application {
    port: u16,
    host: String,
    db: cozo::DbInstance,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = hyper::Result<()>> + Send>>,
}

impl Application {
    pub async fn build(conf: &Conf) -> Self {
        let address = format!("{}:{}", conf.host, conf.port);
        let listener = std::net::TcpListener::bind(&address).unwrap();
        tracing::info!("Listening on http://{}", address);
        let host = conf.host.clone();
        let port = listener.local_addr().unwrap().port();

        let db = conf.db.db_instance();
        crate::db::init_db(&db);

        let image_host = Arc::new(ImageHost::new(&conf.assets));

        let app = router(conf.clone(), db.clone(), image_host);

        let server = axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service());

        Self {
            port,
            host,
            db,
            server: Box::pin(server),
        }
    }

    // needs to consume to produce 1 server max
    pub fn server(self) -> impl std::future::Future<Output = hyper::Result<()>> + Send {
        self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn db(&self) -> cozo::DbInstance {
        self.db.clone()
    }
}
