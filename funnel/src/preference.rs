//! Taste preference tags captured on the "Tastes & Routine" step.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalised preference tag (`VEG`, `CALORIE_SMART`, ...).
///
/// Tags are trimmed, upper-cased and have inner whitespace/dashes folded to
/// `_`, so `"veg"`, `" Veg "` and `"VEG"` are the same tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct PreferenceTag(String);

impl PreferenceTag {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw
            .as_ref()
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty tag carries no preference and is ignored by toggles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PreferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PreferenceTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PreferenceTag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<PreferenceTag> for String {
    fn from(value: PreferenceTag) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_normalized() {
        assert_eq!(PreferenceTag::new(" veg ").as_str(), "VEG");
        assert_eq!(PreferenceTag::new("calorie smart").as_str(), "CALORIE_SMART");
        assert_eq!(PreferenceTag::new("family-friendly").as_str(), "FAMILY_FRIENDLY");
        assert_eq!(PreferenceTag::from("Veg"), PreferenceTag::from("VEG"));
    }

    #[test]
    fn blank_tag_is_empty() {
        assert!(PreferenceTag::new("   ").is_empty());
        assert!(!PreferenceTag::new("VEG").is_empty());
    }

    #[test]
    fn deserializing_normalizes() {
        let tag: PreferenceTag = serde_json::from_str("\"quick meals\"").unwrap();
        assert_eq!(tag.as_str(), "QUICK_MEALS");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"QUICK_MEALS\"");
    }
}
