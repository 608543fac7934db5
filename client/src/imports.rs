pub use interfacing::{NewsPage, NewsWithId, PopupNews, PopupNewsWithId};
pub use static_routes::*;

pub use async_trait::async_trait;
