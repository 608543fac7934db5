// Static file serving with an in-memory cache. Request paths go through
// a bounded LRU, resolved disk files stay cached for the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug)]
pub struct StaticFile {
    pub contents: Vec<u8>,
    pub path: Box<std::path::PathBuf>,
    pub modified: std::time::SystemTime,
}

pub fn file_response(file: &StaticFile) -> axum::response::Response {
    use axum::response::IntoResponse;
    let last_modified = httpdate::fmt_http_date(file.modified);
    let mime_type = mime_guess::from_path(file.path.as_ref()).first_or_text_plain();

    axum::http::Response::builder()
        .status(axum::http::StatusCode::OK)
        .header(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_str(mime_type.as_ref()).unwrap(),
        )
        .header(axum::http::header::LAST_MODIFIED, last_modified)
        .body(axum::body::boxed(axum::body::Full::<bytes::Bytes>::from(
            file.contents.clone(),
        )))
        .unwrap_or_else(|_| axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[derive(Clone)]
pub struct Cache {
    by_request_path: Arc<Mutex<clru::CLruCache<String, Arc<StaticFile>>>>,
    // no lru, every resolved file stays cached
    by_disk_path: Arc<RwLock<HashMap<Box<std::path::PathBuf>, Arc<StaticFile>>>>,
}

impl Cache {
    pub fn new(lru_size: std::num::NonZeroUsize) -> Self {
        Self {
            by_request_path: Arc::new(Mutex::new(clru::CLruCache::new(lru_size))),
            by_disk_path: Default::default(),
        }
    }

    async fn lookup_request_path(&self, path: &str) -> Option<Arc<StaticFile>> {
        self.by_request_path
            .lock()
            .await
            .get(path)
            .map(Clone::clone)
    }

    async fn lookup_disk_path(&self, path: &std::path::PathBuf) -> Option<Arc<StaticFile>> {
        self.by_disk_path.read().await.get(path).map(Clone::clone)
    }

    async fn store(&self, request_path: String, file: Arc<StaticFile>) {
        self.by_request_path
            .lock()
            .await
            .put(request_path, file.clone());
        self.by_disk_path
            .write()
            .await
            .insert(file.path.clone(), file);
    }
}

fn read_file(mut file: std::fs::File, path: std::path::PathBuf) -> StaticFile {
    use std::io::Read;
    let modified = file.metadata().unwrap().modified().unwrap();
    let mut contents = vec![];
    file.read_to_end(&mut contents).unwrap();
    StaticFile {
        contents,
        path: Box::new(path),
        modified,
    }
}

pub mod fallback {
    use crate::conf::Conf;
    use axum::{response::IntoResponse, Extension};

    use super::*;

    pub async fn fallback(
        uri: axum::http::Uri,
        Extension(cache): Extension<Cache>,
        Extension(conf): Extension<Conf>,
    ) -> axum::response::Response {
        let request_path = uri.path().trim_start_matches('/').trim().to_string();

        // no parent-dir escapes
        if request_path.split('/').any(|segment| segment == "..") {
            return hyper::StatusCode::NOT_FOUND.into_response();
        }

        if let Some(file) = cache.lookup_request_path(&request_path).await {
            tracing::debug!("request path cache hit: {request_path:?}");
            return file_response(&file);
        }

        let dir = std::path::Path::new(&conf.serve.dir);
        let file_path = dir.join(&request_path);

        tracing::debug!("Trying to serve: {:?}", file_path);

        let file_path = if file_path.is_file() {
            file_path
        } else {
            match &conf.serve.fallback {
                Some(fallback_path) => {
                    let fallback_path = std::path::Path::new(fallback_path);

                    if fallback_path.is_file() {
                        fallback_path.to_path_buf()
                    } else {
                        return hyper::StatusCode::INTERNAL_SERVER_ERROR.into_response();
                    }
                }
                None => return hyper::StatusCode::NOT_FOUND.into_response(),
            }
        };

        match cache.lookup_disk_path(&file_path).await {
            None => {
                tracing::debug!("disk path cache miss: {file_path:?}");

                let file = std::fs::File::open(&file_path).expect("opens when exists");
                let file = read_file(file, file_path);

                let response = file_response(&file);
                cache.store(request_path, Arc::new(file)).await;
                response
            }
            Some(cached) => {
                // do not go to disk, reuse cached value
                cache.store(request_path, cached.clone()).await;
                file_response(&cached)
            }
        }
    }
}
