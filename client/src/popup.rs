use crate::imports::*;
use crate::session::SessionFlags;

/// Session flag marking that the popup already ran this session.
pub static SESSION_KEY: &str = "popupNewsShownInSession";

/// Read side of the popup api.
#[async_trait]
pub trait PopupFeed {
    async fn active_popup(&self) -> Result<Option<PopupNewsWithId>, anyhow::Error>;
}

/// What the popup overlay renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub video_link: Option<String>,
    pub date: String,
}

impl PopupContent {
    /// Shown when no banner is stored or the api is unreachable.
    fn default_payload() -> Self {
        Self {
            title: "Welcome to Newsdesk!".into(),
            description: "Stay updated with the latest breaking news, politics, technology, \
                          sports, and more. Your trusted source for reliable journalism."
                .into(),
            image_url: Some("/assets/logo.png".into()),
            link: Some("/".into()),
            video_link: None,
            date: PopupNews::formatted_now(),
        }
    }
}

impl From<PopupNewsWithId> for PopupContent {
    fn from(popup: PopupNewsWithId) -> Self {
        let body = popup.body;
        Self {
            title: body.title,
            description: body.description,
            image_url: body.image_url,
            link: body.link,
            video_link: body.video_link,
            date: body.created_at,
        }
    }
}

/// Ways the overlay can be closed. All of them behave the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    CloseButton,
    OverlayClick,
    EscapeKey,
}

/// Show-once-per-session popup state.
pub struct PopupController<F, S> {
    feed: F,
    session: S,
    visible: bool,
    content: Option<PopupContent>,
}

impl<F: PopupFeed, S: SessionFlags> PopupController<F, S> {
    pub fn new(feed: F, session: S) -> Self {
        Self {
            feed,
            session,
            visible: false,
            content: None,
        }
    }

    /// Runs on page load. Fetches the active banner and shows it, unless the
    /// popup already ran this session. An absent banner or a failed request
    /// falls back to the default payload.
    pub async fn on_page_load(&mut self) {
        if self.session.is_set(SESSION_KEY) {
            return;
        }

        let content = match self.feed.active_popup().await {
            Ok(Some(popup)) if popup.body.is_active => PopupContent::from(popup),
            _ => PopupContent::default_payload(),
        };

        self.content = Some(content);
        self.visible = true;
        self.session.set(SESSION_KEY);
    }

    /// Hides the overlay. The session flag stays set, so the popup does not
    /// come back until the next session.
    pub fn dismiss(&mut self, _: Dismiss) {
        self.visible = false;
    }

    /// Clears the shown-this-session flag, letting the popup run again.
    pub fn reset_session(&mut self) {
        self.session.clear(SESSION_KEY);
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&PopupContent> {
        self.content.as_ref()
    }
}
