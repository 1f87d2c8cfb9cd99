//! Catalog record model.

use serde::{Deserialize, Serialize};

use crate::category::{Category, PreviewType};

/// Documentation for a single prop accepted by a component.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub description: String,
}

/// An immutable catalog entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnimationRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Display name of the component that implements this animation.
    pub component: String,
    /// Canonical usage snippet, copied verbatim.
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_type: Option<PreviewType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<PropDoc>,
}

impl AnimationRecord {
    /// Short self-closing form shown on catalog cards, e.g. `<FadeInUp />`.
    pub fn tag_snippet(&self) -> String {
        format!("<{} />", self.component)
    }

    /// Preview shell, defaulting to a plain box.
    #[inline]
    pub fn preview(&self) -> PreviewType {
        self.preview_type.unwrap_or(PreviewType::Box)
    }

    /// True when the demo reacts to the pointer instead of playing on a timer.
    pub fn is_user_driven(&self) -> bool {
        self.category.is_user_driven() || self.preview_type == Some(PreviewType::Interactive)
    }

    pub(crate) fn matches_lowered(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.name().to_lowercase().contains(needle)
    }
}
