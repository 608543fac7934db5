mod imports;

mod news;
mod popup_news;
mod uploads;

pub use imports::truthy_flag;
pub use news::{Ack, Categories, News, NewsCreated, NewsForm, NewsPage, NewsUpdated, NewsWithId};
pub use popup_news::{PopupNews, PopupNewsForm, PopupNewsWithId};
pub use uploads::UploadedImage;
