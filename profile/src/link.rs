//! Link entries and the profile they belong to.
//!
//! DESIGN
//! ======
//! Editor links carry small integer ids that only need to be unique inside
//! one profile. Records coming back from the link API carry the server's
//! string id instead, so they get their own [`RemoteLink`] type; renderers
//! accept either through [`LinkLike`].

#[cfg(test)]
#[path = "link_test.rs"]
mod tests;

use serde::{Deserialize, Deserializer, Serialize};

use crate::platform::Platform;

/// Editor-local link identifier.
pub type LinkId = u64;

/// Placeholder for ids that could not be read; replaced by
/// [`ProfileData::assign_missing_ids`].
pub const UNASSIGNED_LINK_ID: LinkId = 0;

/// One (platform, URL) row in the editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(default, deserialize_with = "deserialize_link_id")]
    pub id: LinkId,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub link: String,
}

impl LinkEntry {
    /// A fresh entry with the default platform and an empty URL.
    #[must_use]
    pub fn new(id: LinkId) -> Self {
        Self { id, platform: Platform::default(), link: String::new() }
    }
}

/// Editable field of a [`LinkEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkField {
    Platform,
    Link,
}

/// Next id for a new entry: one past the current maximum, or 1 when empty.
#[must_use]
pub fn next_link_id(links: &[LinkEntry]) -> LinkId {
    links.iter().map(|l| l.id).max().map_or(1, |max| max.saturating_add(1))
}

/// Link record as returned by `GET /api/links`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLink {
    #[serde(rename = "_id")]
    pub id: String,
    pub platform: Platform,
    pub link: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "__v", default)]
    pub version: i64,
}

/// Anything that renders as a platform + URL pair.
pub trait LinkLike {
    fn platform(&self) -> &Platform;
    fn url(&self) -> &str;
}

impl LinkLike for LinkEntry {
    fn platform(&self) -> &Platform {
        &self.platform
    }
    fn url(&self) -> &str {
        &self.link
    }
}

impl LinkLike for RemoteLink {
    fn platform(&self) -> &Platform {
        &self.platform
    }
    fn url(&self) -> &str {
        &self.link
    }
}

/// Everything the editor persists for one user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    /// Avatar as a `data:` URL.
    pub image: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub links: Vec<LinkEntry>,
    /// Snapshot of `links` taken at the last save; drives the phone mock-up.
    pub saved_links: Vec<LinkEntry>,
}

impl ProfileData {
    /// Give every link whose id could not be read a fresh one.
    pub fn assign_missing_ids(&mut self) {
        assign_ids(&mut self.links);
        assign_ids(&mut self.saved_links);
    }

    /// "First Last", trimmed; empty when neither name is set.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }

    /// Up to two uppercase initials for the avatar fallback.
    #[must_use]
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Ids arrive as numbers or strings; anything that is not a positive
/// integer becomes [`UNASSIGNED_LINK_ID`] instead of failing the record.
fn deserialize_link_id<'de, D>(deserializer: D) -> Result<LinkId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let id = match value {
        serde_json::Value::Number(number) => number.as_u64(),
        serde_json::Value::String(raw) => raw.trim().parse::<LinkId>().ok(),
        _ => None,
    };
    Ok(id.unwrap_or(UNASSIGNED_LINK_ID))
}

fn assign_ids(links: &mut [LinkEntry]) {
    let mut next = next_link_id(links);
    for entry in links.iter_mut().filter(|l| l.id == UNASSIGNED_LINK_ID) {
        entry.id = next;
        next = next.saturating_add(1);
    }
}
