//! Toast-style feedback attached to a view.

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Severity, which doubles as the template style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    pub fn style_name(&self) -> &'static str {
        match self {
            MessageLevel::Info => "info",
            MessageLevel::Success => "success",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.style_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

impl Message {
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Message {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Message::new(MessageLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Message::new(MessageLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Message::new(MessageLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Message::new(MessageLevel::Error, text)
    }
}

/// Input mistakes (bad filter labels, unknown dimensions, form errors) are
/// warnings; everything else is an error.
impl From<&PanelError> for Message {
    fn from(err: &PanelError) -> Self {
        match err {
            PanelError::Seeker(_) | PanelError::Validation(_) | PanelError::NotFound { .. } => {
                Message::warning(err.to_string())
            }
            _ => Message::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospitality_seeker::SeekerError;

    #[test]
    fn serializes_level_as_style_name() {
        let json = serde_json::to_string(&Message::success("Bed bed-07 released")).unwrap();
        assert_eq!(json, r#"{"level":"success","text":"Bed bed-07 released"}"#);
        assert_eq!(MessageLevel::Warning.to_string(), "warning");
    }

    #[test]
    fn errors_map_to_levels() {
        let bad_filter = PanelError::Seeker(SeekerError::UnknownDimension("colour".into()));
        assert_eq!(Message::from(&bad_filter).level, MessageLevel::Warning);

        let down = PanelError::Status {
            method: "GET".into(),
            url: "http://api/logs".into(),
            status: 502,
            body: String::new(),
        };
        let message = Message::from(&down);
        assert_eq!(message.level, MessageLevel::Error);
        assert!(message.text.contains("502"));
    }
}
