//! Shared contract types between the desktop window manager runtime and its content panels.
//!
//! Panels are mounted by content id through a registry owned by the runtime. Each mount receives
//! a [`PanelMountContext`] carrying the hosting window's identity, a [`PanelHost`] command
//! channel back into the window manager, and the [`PanelServices`] bundle for data access.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content;
mod panel;
pub mod settings;

use serde::{Deserialize, Serialize};

pub use content::{load_content_document, ContentDocument, ContentError};
pub use panel::{
    ContentLoad, PanelCommand, PanelHost, PanelModule, PanelMountContext, PanelMountFn,
    PanelServices,
};
pub use settings::{DesktopSettings, ThemeMode, Wallpaper, SETTINGS_PREFS_KEY};

/// Stable identifier for a desktop application, doubling as its window identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Returns an app id when `raw` is a lowercase slug (`a-z`, `0-9`, `-`).
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_slug(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!("invalid app id `{raw}`; expected a lowercase slug"))
        }
    }

    /// Creates an id without validation for trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque key resolved by the runtime registry to a content panel.
///
/// Any string is accepted; unresolved keys render a placeholder instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Wraps a raw content key.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_slug(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 32 {
        return false;
    }
    let bytes = raw.as_bytes();
    bytes[0].is_ascii_lowercase()
        && !raw.ends_with('-')
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_requires_a_lowercase_slug() {
        assert!(AppId::new("resume").is_ok());
        assert!(AppId::new("leetcode").is_ok());
        assert!(AppId::new("dev-notes2").is_ok());
        assert!(AppId::new("").is_err());
        assert!(AppId::new("Resume").is_err());
        assert!(AppId::new("2fa").is_err());
        assert!(AppId::new("chat-").is_err());
        assert!(AppId::new("system.chat").is_err());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let encoded = serde_json::to_string(&AppId::trusted("skills")).expect("encode");
        assert_eq!(encoded, "\"skills\"");
        let decoded: ContentId = serde_json::from_str("\"SkillsView\"").expect("decode");
        assert_eq!(decoded.as_str(), "SkillsView");
    }
}
