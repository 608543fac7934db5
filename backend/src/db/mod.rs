use cozo::*;
pub mod q;

pub fn init_db(db: &DbInstance) {
    {
        // News
        if q::ensure_news_table(db).is_err() {
            let result = q::create_news_table(db);
            assert!(result.is_ok());
        }
    }

    {
        // Popup news
        if q::ensure_popup_news_table(db).is_err() {
            let result = q::create_popup_news_table(db);
            assert!(result.is_ok());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // most likely query syntax error
    #[error("Engine error: {0}")]
    EngineError(miette::ErrReport),
    // returned results don't cover expected cases
    #[error("Result error")]
    ResultError(NamedRows),
}

pub type Result<T> = std::result::Result<T, Error>;

pub type OpResult = Result<()>;
