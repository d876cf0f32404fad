//! Dashboard record types and their collection policies.
//!
//! Each type mirrors one backend table. Text columns are nullable on the
//! server, so every string decodes leniently to `""`.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::collection::{Entity, EntityKind, Facet};
use crate::net::types::deserialize_string_or_empty as lenient;
use crate::util::images;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_CLIENT: &str = "Self";
pub const DEFAULT_PROVIDER: &str = "Other";

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { default.to_owned() } else { trimmed.to_owned() }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Bookmarked website.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub category: String,
}

impl Entity for Website {
    const KIND: EntityKind = EntityKind::Websites;
    const FACETS: &'static [Facet] = &[Facet::Category];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn has_required_fields(&self) -> bool {
        filled(&self.name) && filled(&self.link)
    }

    fn facet_values(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Category => vec![or_default(&self.category, DEFAULT_CATEGORY)],
            _ => Vec::new(),
        }
    }
}

/// A machine the user manages for themselves or a client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub server_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub provider: String,
    #[serde(default, deserialize_with = "lenient")]
    pub provider_link: String,
    #[serde(default, deserialize_with = "lenient")]
    pub client: String,
    #[serde(default, deserialize_with = "lenient")]
    pub server_ip: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
}

impl Entity for Server {
    const KIND: EntityKind = EntityKind::Servers;
    const FACETS: &'static [Facet] = &[Facet::Client, Facet::Provider];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn has_required_fields(&self) -> bool {
        filled(&self.server_name)
    }

    fn facet_values(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Client => vec![or_default(&self.client, DEFAULT_CLIENT)],
            Facet::Provider => vec![or_default(&self.provider, DEFAULT_PROVIDER)],
            _ => Vec::new(),
        }
    }
}

/// Task lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    OnHold,
}

impl TaskStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Completed, Self::OnHold];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }

    /// Parse a display label; anything unrecognized is `Pending`.
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
            .unwrap_or_default()
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A to-do item, optionally tied to a client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub task_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient")]
    pub client: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "lenient")]
    pub date_created: String,
    #[serde(default, deserialize_with = "lenient")]
    pub date_completed: String,
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Tasks;
    const FACETS: &'static [Facet] = &[Facet::Status, Facet::Client, Facet::Category];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn has_required_fields(&self) -> bool {
        filled(&self.task_name)
    }

    fn facet_values(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Status => vec![self.status.as_str().to_owned()],
            Facet::Client => vec![or_default(&self.client, DEFAULT_CLIENT)],
            Facet::Category => vec![or_default(&self.category, DEFAULT_CATEGORY)],
            _ => Vec::new(),
        }
    }

    fn stamp(&mut self, today: &str, is_new: bool) {
        if is_new && !filled(&self.date_created) {
            self.date_created = today.to_owned();
        }
        if self.status == TaskStatus::Completed && !filled(&self.date_completed) {
            self.date_completed = today.to_owned();
        }
    }
}

/// Free-form note with comma-separated tags and pasted screenshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: String,
    #[serde(default, deserialize_with = "lenient")]
    pub ref_link: String,
    /// JSON-encoded array of image data-URLs.
    #[serde(default = "images::empty", deserialize_with = "lenient")]
    pub images: String,
    #[serde(default, deserialize_with = "lenient")]
    pub date_created: String,
}

impl Default for Note {
    fn default() -> Self {
        Self {
            id: None,
            content: String::new(),
            tags: String::new(),
            ref_link: String::new(),
            images: images::empty(),
            date_created: String::new(),
        }
    }
}

impl Note {
    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    pub fn image_list(&self) -> Vec<String> {
        images::decode(&self.images)
    }

    pub fn push_image(&mut self, data_url: &str) {
        self.images = images::append(&self.images, data_url);
    }

    pub fn remove_image(&mut self, index: usize) {
        self.images = images::remove(&self.images, index);
    }
}

impl Entity for Note {
    const KIND: EntityKind = EntityKind::Notes;
    const FACETS: &'static [Facet] = &[Facet::Tag];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn has_required_fields(&self) -> bool {
        filled(&self.content)
    }

    fn facet_values(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Tag => self.tag_list(),
            _ => Vec::new(),
        }
    }

    fn stamp(&mut self, today: &str, is_new: bool) {
        if is_new && !filled(&self.date_created) {
            self.date_created = today.to_owned();
        }
        self.images = images::encode(&images::decode(&self.images));
    }
}

/// Split a comma-separated tag string into trimmed, non-empty, unique tags,
/// keeping first-seen order.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_owned());
        }
    }
    tags
}
