use chrono::{DateTime, Utc};

/// Title given to every new conversation.
pub const DEFAULT_TITLE: &str = "New Chat";

const PREVIEW_CHARS: usize = 50;

/// An entry in the session history (the sidebar of past conversations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    title: String,
    preview: String,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(id: impl Into<String>, first_message: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: DEFAULT_TITLE.to_string(),
            preview: preview(first_message),
            created_at: now,
            last_activity: now,
        }
    }

    /// Records activity: the preview follows the latest message.
    pub fn touch(&mut self, latest_message: &str, at: DateTime<Utc>) {
        self.preview = preview(latest_message);
        self.last_activity = at;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }
}

/// First 50 characters of `text`, with `...` appended when cut.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
