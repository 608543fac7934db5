pub use crate::{
    assets::ImageHost,
    conf::Conf,
    db,
    error::{ApiError, ApiResult},
};

pub use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
