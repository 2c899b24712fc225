//! Platform names and the single style table every renderer reads.
//!
//! DESIGN
//! ======
//! Platform is free text in the editor's select, so the type keeps unknown
//! values verbatim in [`Platform::Other`]. Styling is a total lookup: known
//! platforms hit [`PLATFORM_STYLES`], everything else gets [`DEFAULT_STYLE`].

#[cfg(test)]
#[path = "platform_test.rs"]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Social platform a link points at.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    #[default]
    GitHub,
    Twitter,
    LinkedIn,
    Website,
    /// Any value outside the known set, kept as the user typed it.
    Other(String),
}

impl Platform {
    /// Platforms offered by the editor's select, in display order.
    pub const KNOWN: [Platform; 4] = [Platform::GitHub, Platform::Twitter, Platform::LinkedIn, Platform::Website];

    /// Parse a raw platform name. Known names match case-insensitively and
    /// are canonicalized; anything else becomes [`Platform::Other`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self::KNOWN
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Other(raw.to_owned()))
    }

    /// Canonical display name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::GitHub => "GitHub",
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
            Self::Website => "Website",
            Self::Other(raw) => raw,
        }
    }

    /// Style entry for this platform.
    #[must_use]
    pub fn style(&self) -> &'static PlatformStyle {
        match self {
            Self::Other(_) => &DEFAULT_STYLE,
            known => PLATFORM_STYLES
                .iter()
                .find(|s| s.name == known.as_str())
                .unwrap_or(&DEFAULT_STYLE),
        }
    }
}

impl From<String> for Platform {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for Platform {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon drawn next to a link. Rendered through CSS classes by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    Twitter,
    LinkedIn,
    Globe,
    Link,
}

impl Icon {
    /// Stable slug used in class names (`icon--{slug}`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::Globe => "globe",
            Self::Link => "link",
        }
    }
}

/// Visual treatment for one platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformStyle {
    pub name: &'static str,
    pub icon: Icon,
    /// Card background (hex).
    pub background: &'static str,
    /// Text and icon color on top of `background` (hex).
    pub foreground: &'static str,
    /// Host that bare handles are resolved against, if the platform has one.
    pub host: Option<&'static str>,
}

/// Styles for the known platforms.
pub static PLATFORM_STYLES: [PlatformStyle; 4] = [
    PlatformStyle { name: "GitHub", icon: Icon::GitHub, background: "#1a1a1a", foreground: "#ffffff", host: Some("github.com") },
    PlatformStyle { name: "Twitter", icon: Icon::Twitter, background: "#3b82f6", foreground: "#ffffff", host: Some("twitter.com") },
    PlatformStyle { name: "LinkedIn", icon: Icon::LinkedIn, background: "#1d4ed8", foreground: "#ffffff", host: Some("linkedin.com") },
    PlatformStyle { name: "Website", icon: Icon::Globe, background: "#d1d5db", foreground: "#111827", host: None },
];

/// Fallback for unrecognized platforms: generic link icon on neutral grey.
pub static DEFAULT_STYLE: PlatformStyle =
    PlatformStyle { name: "Other", icon: Icon::Link, background: "#f3f4f6", foreground: "#111827", host: None };

/// Build the href a rendered link should open.
///
/// Absolute `http(s)` URLs pass through. Bare handles on a platform with a
/// host become `https://{host}/{handle}`; anything else gets `https://`.
#[must_use]
pub fn resolve_href(platform: &Platform, link: &str) -> String {
    let link = link.trim();
    let lower = link.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        return link.to_owned();
    }
    if let Some(host) = platform.style().host {
        let handle = link.trim_start_matches('@').trim_start_matches('/');
        if !handle.contains('.') && !handle.is_empty() {
            return format!("https://{host}/{handle}");
        }
    }
    format!("https://{link}")
}
