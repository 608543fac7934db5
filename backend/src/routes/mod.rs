mod imports;

mod health_check;
mod news;
mod popup_news;
mod upload;
pub use health_check::*;
pub use news::*;
pub use popup_news::*;
pub use upload::*;
