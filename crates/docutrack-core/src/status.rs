//! Status Badges
//!
//! Maps an extraction status to the badge shown in the table.

use crate::models::ExtractionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Amber,
    Blue,
    Gray,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Green => "badge badge-green",
            BadgeTone::Amber => "badge badge-amber",
            BadgeTone::Blue => "badge badge-blue",
            BadgeTone::Gray => "badge badge-gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
    /// Empty for the neutral fallback badge
    pub icon: &'static str,
}

impl ExtractionStatus {
    pub fn badge(&self) -> StatusBadge {
        let (label, tone, icon) = match self {
            ExtractionStatus::AutoExtracted => ("Auto", BadgeTone::Green, "✓"),
            ExtractionStatus::ManualRequired => ("Manual", BadgeTone::Amber, "!"),
            ExtractionStatus::ManuallyEdited => ("Edited", BadgeTone::Blue, "✎"),
            ExtractionStatus::Unknown(raw) => (raw.as_str(), BadgeTone::Gray, ""),
        };
        StatusBadge {
            label: label.to_string(),
            tone,
            icon,
        }
    }
}
