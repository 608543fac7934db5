use crate::category_page::NewsFeed;
use crate::imports::*;
use crate::popup::PopupFeed;

/// `reqwest`-backed implementation of the feed traits against the backend api.
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl NewsFeed for ApiClient {
    async fn category_page(
        &self,
        category: &str,
        page: usize,
        limit: usize,
    ) -> Result<NewsPage, anyhow::Error> {
        let url = routes().api.news.get().complete_with_base(&self.base_url);

        let news_page = self
            .http_client
            .get(url)
            .query(&[
                ("page", page.to_string()),
                ("limit", limit.to_string()),
                ("category", category.to_owned()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<NewsPage>()
            .await?;

        Ok(news_page)
    }

    async fn trending(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<NewsWithId>, anyhow::Error> {
        let url = routes().api.news.get().complete_with_base(&self.base_url);

        let news_page = self
            .http_client
            .get(url)
            .query(&[
                ("limit", limit.to_string()),
                ("category", category.to_owned()),
                ("sort", "createdAt".to_owned()),
                ("order", "desc".to_owned()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<NewsPage>()
            .await?;

        Ok(news_page.news)
    }
}

#[async_trait]
impl PopupFeed for ApiClient {
    async fn active_popup(&self) -> Result<Option<PopupNewsWithId>, anyhow::Error> {
        let url = routes()
            .api
            .popup_news
            .active
            .get()
            .complete_with_base(&self.base_url);

        let popup = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Option<PopupNewsWithId>>()
            .await?;

        Ok(popup)
    }
}
