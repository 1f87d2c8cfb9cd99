//! Closed enumerations used by catalog records: categories and preview shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Catalog category. Serialized as its display name (e.g. "Page Transitions").
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Entrance,
    Exit,
    Hover,
    Loop,
    Stagger,
    Cards,
    Buttons,
    Icons,
    Images,
    Forms,
    Loaders,
    #[serde(rename = "Page Transitions")]
    PageTransitions,
    Modals,
    Interactive,
}

impl Category {
    /// Every category in declaration order. Drives the filter bar.
    pub const ALL: [Category; 14] = [
        Category::Entrance,
        Category::Exit,
        Category::Hover,
        Category::Loop,
        Category::Stagger,
        Category::Cards,
        Category::Buttons,
        Category::Icons,
        Category::Images,
        Category::Forms,
        Category::Loaders,
        Category::PageTransitions,
        Category::Modals,
        Category::Interactive,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entrance => "Entrance",
            Self::Exit => "Exit",
            Self::Hover => "Hover",
            Self::Loop => "Loop",
            Self::Stagger => "Stagger",
            Self::Cards => "Cards",
            Self::Buttons => "Buttons",
            Self::Icons => "Icons",
            Self::Images => "Images",
            Self::Forms => "Forms",
            Self::Loaders => "Loaders",
            Self::PageTransitions => "Page Transitions",
            Self::Modals => "Modals",
            Self::Interactive => "Interactive",
        }
    }

    /// Hover and interactive animations are driven by the pointer, not by a timer.
    #[inline]
    pub fn is_user_driven(&self) -> bool {
        matches!(self, Self::Hover | Self::Interactive)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Exact match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or(())
    }
}

/// Generic preview shell used to render a record's live demo.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewType {
    Box,
    Text,
    Button,
    Card,
    List,
    Icon,
    Modal,
    Image,
    Interactive,
    Custom,
}

impl PreviewType {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Text => "text",
            Self::Button => "button",
            Self::Card => "card",
            Self::List => "list",
            Self::Icon => "icon",
            Self::Modal => "modal",
            Self::Image => "image",
            Self::Interactive => "interactive",
            Self::Custom => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for c in Category::ALL {
            assert_eq!(c.name().parse::<Category>(), Ok(c));
        }
        assert!("page transitions".parse::<Category>().is_err());
        assert!("Unknown".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_display_names() {
        let s = serde_json::to_string(&Category::PageTransitions).unwrap();
        assert_eq!(s, "\"Page Transitions\"");
        let p: PreviewType = serde_json::from_str("\"interactive\"").unwrap();
        assert_eq!(p, PreviewType::Interactive);
    }

    #[test]
    fn user_driven_categories() {
        assert!(Category::Hover.is_user_driven());
        assert!(Category::Interactive.is_user_driven());
        assert!(!Category::Entrance.is_user_driven());
        assert!(!Category::Loop.is_user_driven());
    }
}
