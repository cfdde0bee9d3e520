//! User-created text annotations and the machinery that keeps them valid
//! across regeneration and re-rendering.

pub mod realign;
pub mod validate;

pub use realign::realign;
pub use validate::{Validation, ValidationError, validate};

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user highlight over the rendered text of one message.
///
/// Invariant: when not `broken`, `rendered[start..end] == text` holds for
/// the current rendered text of the owning message. Offsets are byte
/// offsets. The three flags are transient realignment state and are never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: Uuid,
    /// Exact quoted substring at creation time.
    pub text: String,
    pub color: String,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
    /// Content-drift fingerprint of the rendered text at creation time.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message_hash: Option<String>,
    #[serde(skip)]
    pub broken: bool,
    #[serde(skip)]
    pub realigned: bool,
    #[serde(skip)]
    pub partial_match: bool,
}

impl Highlight {
    pub fn new(text: impl Into<String>, color: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            color: color.into(),
            start,
            end,
            note: None,
            message_hash: None,
            broken: false,
            realigned: false,
            partial_match: false,
        }
    }

    /// Stamps the content-drift fingerprint of the owning message.
    pub fn with_hash(mut self, rendered: &str) -> Self {
        self.message_hash = Some(content_hash(rendered));
        self
    }
}

/// Fingerprint of a rendered text, for cheap drift detection.
pub fn content_hash(rendered: &str) -> String {
    let mut hasher = DefaultHasher::new();
    rendered.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
