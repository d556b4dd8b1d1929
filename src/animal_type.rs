//! Animal Type Tags
//!
//! TigerStyle: Closed classification set with a total description mapping.
//!
//! Only `Dog` and `Cat` have concrete variants. `Bird` and `Fish` are
//! classification tags and never match a registered animal.

use serde::{Deserialize, Serialize};

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Fallback description for tags without a dedicated entry
pub const UNKNOWN_DESCRIPTION: &str = "Unknown animal";

// =============================================================================
// Animal Type
// =============================================================================

/// Classification tag for animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum AnimalType {
    /// Dogs
    Dog,
    /// Cats
    Cat,
    /// Birds (tag only)
    Bird,
    /// Fish (tag only)
    Fish,
}

impl AnimalType {
    /// Get the human-readable description.
    #[must_use]
    #[allow(unreachable_patterns)]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Dog => "A loyal companion",
            Self::Cat => "An independent spirit",
            Self::Bird => "A feathered friend",
            Self::Fish => "An aquatic pet",
            _ => UNKNOWN_DESCRIPTION,
        }
    }

    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
            Self::Fish => "fish",
        }
    }

    /// Parse from string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dog" => Some(Self::Dog),
            "cat" => Some(Self::Cat),
            "bird" => Some(Self::Bird),
            "fish" => Some(Self::Fish),
            _ => None,
        }
    }

    /// Get all animal types in declaration order.
    #[must_use]
    pub fn all() -> &'static [AnimalType] {
        &[Self::Dog, Self::Cat, Self::Bird, Self::Fish]
    }
}

impl std::fmt::Display for AnimalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
