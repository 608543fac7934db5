pub mod api;
pub mod category_page;
pub mod fallback;
pub mod popup;
pub mod session;

mod imports;
