#[allow(unused_imports)]
use crate::primitives::{Get, Post, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub health_check: HealthCheck,
    pub news: News,
    pub popup_news: PopupNews,
    pub upload_popup_image: UploadPopupImage,
}

#[derive(Default, Get)]
pub struct HealthCheck;

impl Url for HealthCheck {
    fn postfix(&self) -> &str {
        "/health_check"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default, Get, Post)]
pub struct News {
    pub categories: NewsCategories,
}

impl Url for News {
    fn postfix(&self) -> &str {
        "/news"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default, Get)]
pub struct NewsCategories;

impl Url for NewsCategories {
    fn postfix(&self) -> &str {
        "/news/categories"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default, Get, Post)]
pub struct PopupNews {
    pub active: PopupNewsActive,
}

impl Url for PopupNews {
    fn postfix(&self) -> &str {
        "/popup-news"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default, Get)]
pub struct PopupNewsActive;

impl Url for PopupNewsActive {
    fn postfix(&self) -> &str {
        "/popup-news/active"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default, Post)]
pub struct UploadPopupImage;

impl Url for UploadPopupImage {
    fn postfix(&self) -> &str {
        "/upload-popup-image"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}
