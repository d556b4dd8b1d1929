//! Cat variant

use serde::{Deserialize, Serialize};

use super::{AnimalError, Profile};
use crate::activity_log::ActivityLog;
use crate::feedable::Feedable;

/// Species recorded for every cat
pub const CAT_SPECIES: &str = "Feline";

/// Lives every cat starts (and stays) with
pub const CAT_LIVES: u8 = 9;

/// A cat.
///
/// Cats report hunger unconditionally: feeding records a line but never
/// changes [`Feedable::is_hungry`]. This differs from [`super::Dog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CatRecord")]
pub struct Cat {
    #[serde(flatten)]
    profile: Profile,
    indoor: bool,
    lives_left: u8,
}

/// Serialized form of a cat. Species and lives are not read back.
#[derive(Deserialize)]
struct CatRecord {
    name: String,
    age: u32,
    indoor: bool,
}

impl From<CatRecord> for Cat {
    fn from(record: CatRecord) -> Self {
        Self::new(record.name, record.age, record.indoor)
    }
}

impl Cat {
    /// Create a new cat with all nine lives
    pub fn new(name: impl Into<String>, age: u32, indoor: bool) -> Self {
        Self {
            profile: Profile::new(name.into(), age, CAT_SPECIES),
            indoor,
            lives_left: CAT_LIVES,
        }
    }

    /// Name and age
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Mutable name and age
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// Always "Meow!"
    pub fn make_sound(&self) -> &'static str {
        "Meow!"
    }

    /// Whether the cat lives indoors
    pub fn is_indoor(&self) -> bool {
        self.indoor
    }

    /// Always [`CAT_LIVES`]
    pub fn lives_left(&self) -> u8 {
        self.lives_left
    }
}

impl Feedable for Cat {
    /// Any food is accepted, including an empty string.
    fn feed(&mut self, food: &str, log: &dyn ActivityLog) -> Result<(), AnimalError> {
        log.record(&format!("{} eats {}", self.profile.name(), food));
        Ok(())
    }

    fn is_hungry(&self) -> bool {
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
