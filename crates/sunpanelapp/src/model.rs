//! # Domain Model: Collections and Ordered Records
//!
//! Every piece of editable site content (a service card, a testimonial, a nav
//! link) is a [`Record`] living in one [`Collection`]. Records in the same
//! collection are *siblings*: they share one ordering domain, expressed by the
//! integer `order_index` field.
//!
//! ## Record Shape
//!
//! ```text
//! {
//!   "id": "2b1f…",            <-- assigned by the store, never changes
//!   "order_index": 3,         <-- display position among siblings
//!   "created_at": "…",
//!   "updated_at": "…",
//!   "fields": {               <-- editor-owned content, opaque to ordering
//!     "title": "Rooftop installs",
//!     "icon": "sun"
//!   }
//! }
//! ```
//!
//! ## Missing Order Values
//!
//! Older documents may lack `order_index` entirely (or carry it under the
//! legacy key `order`). A missing value is kept as `None` so the store never
//! invents data, but every ordering computation reads it as `0`. See
//! [`Record::order_or_default`].
//!
//! ## Required Fields
//!
//! Each collection names the fields its editor cannot do without
//! ([`Collection::required_fields`]). Creation rejects records missing them and
//! edits reject blanking them. `order_index` is never part of validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Result, SunpanelError};

/// Editor-owned content of a record.
pub type Fields = serde_json::Map<String, Value>;

/// Keys tried, in order, when a record needs a human-readable label.
const LABEL_KEYS: [&str; 5] = ["title", "label", "name", "author", "slug"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    Services,
    AdditionalServices,
    ProjectCategories,
    Projects,
    Testimonials,
    BlogPosts,
    HeroSlides,
    NavItems,
    FooterLinks,
}

impl Collection {
    pub const ALL: [Collection; 9] = [
        Collection::Services,
        Collection::AdditionalServices,
        Collection::ProjectCategories,
        Collection::Projects,
        Collection::Testimonials,
        Collection::BlogPosts,
        Collection::HeroSlides,
        Collection::NavItems,
        Collection::FooterLinks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Services => "services",
            Collection::AdditionalServices => "additional-services",
            Collection::ProjectCategories => "project-categories",
            Collection::Projects => "projects",
            Collection::Testimonials => "testimonials",
            Collection::BlogPosts => "blog-posts",
            Collection::HeroSlides => "hero-slides",
            Collection::NavItems => "nav-items",
            Collection::FooterLinks => "footer-links",
        }
    }

    /// Fields that must be present and non-empty on every record.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Collection::Services | Collection::AdditionalServices => &["title"],
            Collection::ProjectCategories => &["name"],
            Collection::Projects => &["title", "category"],
            Collection::Testimonials => &["author", "quote"],
            Collection::BlogPosts => &["title", "slug"],
            Collection::HeroSlides => &["title"],
            Collection::NavItems | Collection::FooterLinks => &["label", "href"],
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Collection::ALL
            .iter()
            .copied()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Collection::ALL.iter().map(|c| c.name()).collect();
                format!(
                    "Unknown collection '{}'. Known collections: {}",
                    s,
                    known.join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    #[serde(default, alias = "order", skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fields: Fields,
}

impl Record {
    pub fn new(order_index: u32, fields: Fields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            order_index: Some(order_index),
            created_at: now,
            updated_at: now,
            fields,
        }
    }

    /// The order value used for every comparison. Missing reads as `0`.
    pub fn order_or_default(&self) -> u32 {
        self.order_index.unwrap_or(0)
    }

    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Best-effort label for listings and messages.
    pub fn label(&self) -> String {
        LABEL_KEYS
            .iter()
            .find_map(|key| self.field_str(key).filter(|s| !s.trim().is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| "(untitled)".to_string())
    }
}

/// Input to `Gateway::create`: the caller picks the order value, the store
/// picks the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub order_index: u32,
    pub fields: Fields,
}

/// Partial update. Absent parts are left untouched; a `null` field value
/// removes that key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub order_index: Option<u32>,
    pub fields: Fields,
}

impl RecordPatch {
    pub fn order(order_index: u32) -> Self {
        Self {
            order_index: Some(order_index),
            fields: Fields::new(),
        }
    }

    pub fn fields(fields: Fields) -> Self {
        Self {
            order_index: None,
            fields,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order_index.is_none() && self.fields.is_empty()
    }

    pub fn apply_to(&self, record: &mut Record) {
        if let Some(order_index) = self.order_index {
            record.order_index = Some(order_index);
        }
        for (key, value) in &self.fields {
            if value.is_null() {
                record.fields.remove(key);
            } else {
                record.fields.insert(key.clone(), value.clone());
            }
        }
        record.updated_at = Utc::now();
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn reject_order_keys(fields: &Fields) -> Result<()> {
    if fields.contains_key("order_index") || fields.contains_key("order") {
        return Err(SunpanelError::Api(
            "Order is managed by reordering, not by editing fields".to_string(),
        ));
    }
    Ok(())
}

/// Checks a full set of fields for a new record.
pub fn validate_new_fields(collection: Collection, fields: &Fields) -> Result<()> {
    reject_order_keys(fields)?;

    let missing: Vec<&str> = collection
        .required_fields()
        .iter()
        .copied()
        .filter(|key| fields.get(*key).is_none_or(is_blank))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SunpanelError::Api(format!(
            "Missing required field(s) for {}: {}",
            collection,
            missing.join(", ")
        )))
    }
}

/// Checks an edit: required fields may change but not be blanked or removed.
pub fn validate_field_patch(collection: Collection, fields: &Fields) -> Result<()> {
    reject_order_keys(fields)?;

    let blanked: Vec<&str> = collection
        .required_fields()
        .iter()
        .copied()
        .filter(|key| fields.get(*key).is_some_and(is_blank))
        .collect();

    if blanked.is_empty() {
        Ok(())
    } else {
        Err(SunpanelError::Api(format!(
            "Required field(s) cannot be empty for {}: {}",
            collection,
            blanked.join(", ")
        )))
    }
}
