use crate::imports::*;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub title: String,
    pub body: String,
    pub category: String,
    pub image_url: Option<String>,
    pub is_breaking: bool,
    pub breaking_url: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NewsWithId {
    pub id: String,
    #[serde(flatten)]
    pub body: News,
}

impl News {
    pub fn timestamp(&self) -> std::time::SystemTime {
        humantime::parse_rfc3339(&self.created_at).unwrap()
    }

    pub fn formatted_now() -> String {
        let system_time = std::time::SystemTime::now();
        humantime::format_rfc3339_nanos(system_time).to_string()
    }
}

impl NewsWithId {
    pub fn body(&self) -> &News {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut News {
        &mut self.body
    }
}

/// Partial payload shared by the create and update endpoints. Flag fields
/// accept both booleans and checkbox strings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsForm {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "de_flag")]
    pub is_breaking: Option<bool>,
    pub breaking_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsCreated {
    pub message: String,
    pub news: NewsWithId,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsUpdated {
    pub message: String,
    pub updated_news: NewsWithId,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub news: Vec<NewsWithId>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Categories {
    pub categories: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ack {
    pub message: String,
}
