//! Preview rendering model and the query-string preview pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preview page has two inputs. The canonical one is the stored
//! profile. The other is an ad-hoc hand-off where the editor encodes the
//! avatar and a JSON link list into `?image=..&links=..`; that pipeline
//! never touches storage and a malformed `links` value degrades to an empty
//! list (logged, not surfaced).

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::link::LinkLike;
use crate::platform::{Platform, PlatformStyle, resolve_href};

pub const IMAGE_PARAM: &str = "image";
pub const LINKS_PARAM: &str = "links";

/// Link shape carried in the `links` query parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLink {
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub link: String,
}

impl LinkLike for PreviewLink {
    fn platform(&self) -> &Platform {
        &self.platform
    }
    fn url(&self) -> &str {
        &self.link
    }
}

/// Decoded query-string preview input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewQuery {
    pub image: Option<String>,
    pub links: Vec<PreviewLink>,
}

/// Build the `image=..&links=..` query for a preview hand-off.
#[must_use]
pub fn encode_preview_query<L: LinkLike>(image: Option<&str>, links: &[L]) -> String {
    let payload: Vec<PreviewLink> = links
        .iter()
        .map(|l| PreviewLink { platform: l.platform().clone(), link: l.url().to_owned() })
        .collect();
    let links_json = serde_json::to_string(&payload).unwrap_or_else(|_| "[]".to_owned());

    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(image) = image.filter(|i| !i.is_empty()) {
        query.append_pair(IMAGE_PARAM, image);
    }
    query.append_pair(LINKS_PARAM, &links_json);
    query.finish()
}

/// Build a preview from already-decoded parameters (router query maps).
#[must_use]
pub fn from_params(image: Option<String>, links: Option<String>) -> PreviewQuery {
    PreviewQuery {
        image: image.filter(|i| !i.is_empty()),
        links: links.as_deref().map(parse_preview_links).unwrap_or_default(),
    }
}

/// Parse the JSON link list; malformed input is logged and yields no links.
#[must_use]
pub fn parse_preview_links(raw: &str) -> Vec<PreviewLink> {
    match serde_json::from_str::<Vec<PreviewLink>>(raw) {
        Ok(links) => links,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse preview links");
            Vec::new()
        }
    }
}

/// One rendered row of the phone mock-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewItem {
    pub label: String,
    pub href: String,
    pub style: &'static PlatformStyle,
}

impl PreviewItem {
    #[must_use]
    pub fn from_link<L: LinkLike>(link: &L) -> Self {
        let platform = link.platform();
        Self {
            label: platform.as_str().to_owned(),
            href: resolve_href(platform, link.url()),
            style: platform.style(),
        }
    }
}

/// Rows for a list of links, skipping entries with no URL yet.
#[must_use]
pub fn preview_items<L: LinkLike>(links: &[L]) -> Vec<PreviewItem> {
    links
        .iter()
        .filter(|l| !l.url().trim().is_empty())
        .map(PreviewItem::from_link)
        .collect()
}
