use crate::fallback::{self, FallbackCard};
use crate::imports::*;

/// Page size of the main news grid.
pub const GRID_PAGE_SIZE: usize = 6;
/// Article count of the trending rail.
pub const TRENDING_SIZE: usize = 3;

/// Read side of the news api, as the category page sees it.
#[async_trait]
pub trait NewsFeed {
    async fn category_page(
        &self,
        category: &str,
        page: usize,
        limit: usize,
    ) -> Result<NewsPage, anyhow::Error>;

    /// Latest articles of a category, newest first.
    async fn trending(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<NewsWithId>, anyhow::Error>;
}

/// What the grid or the trending rail currently displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Loading,
    News(Vec<NewsWithId>),
    Fallback(FallbackCard),
    Error(String),
}

/// State of the pager under the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub label: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

pub struct CategoryPageController<F> {
    feed: F,
    category: String,
    current_page: usize,
    total_pages: usize,
    search_query: String,
    grid: Section,
    trending: Section,
}

impl<F: NewsFeed> CategoryPageController<F> {
    pub fn new(feed: F, category: impl Into<String>) -> Self {
        Self {
            feed,
            category: category.into(),
            current_page: 1,
            total_pages: 1,
            search_query: String::new(),
            grid: Section::Loading,
            trending: Section::Loading,
        }
    }

    /// First render of the page: the paged grid and the trending rail.
    pub async fn load(&mut self) {
        self.load_grid().await;
        self.load_trending().await;
    }

    async fn load_grid(&mut self) {
        self.grid = Section::Loading;

        match self
            .feed
            .category_page(&self.category, self.current_page, GRID_PAGE_SIZE)
            .await
        {
            Ok(page) => {
                // an empty store reports zero pages, the pager still says "Page 1 of 1"
                self.current_page = page.current_page.max(1);
                self.total_pages = page.total_pages.max(1);
                self.grid = if page.news.is_empty() {
                    Section::Fallback(fallback::grid_fallback(&self.category))
                } else {
                    Section::News(page.news)
                };
            }
            Err(_) => {
                self.grid = Section::Error("Failed to load news. Please try again later.".into());
            }
        }
    }

    async fn load_trending(&mut self) {
        match self.feed.trending(&self.category, TRENDING_SIZE).await {
            Ok(news) => {
                self.trending = if news.is_empty() {
                    Section::Fallback(fallback::trending_fallback(&self.category))
                } else {
                    Section::News(news)
                };
            }
            Err(_) => {
                self.trending =
                    Section::Error(format!("Failed to load trending {} news", self.category));
            }
        }
    }

    /// Advances the grid one page and refetches. No-op on the last page.
    pub async fn next_page(&mut self) {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            self.load_grid().await;
        }
    }

    /// No-op on the first page.
    pub async fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.load_grid().await;
        }
    }

    /// A changed query resets the grid to the first page and refetches.
    /// The query itself stays client-side, the api call does not carry it.
    pub async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query != self.search_query {
            self.search_query = query.to_owned();
            self.current_page = 1;
            self.load_grid().await;
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            label: format!("Page {} of {}", self.current_page, self.total_pages),
            prev_disabled: self.current_page <= 1,
            next_disabled: self.current_page >= self.total_pages,
        }
    }

    pub fn grid(&self) -> &Section {
        &self.grid
    }

    pub fn trending(&self) -> &Section {
        &self.trending
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}
