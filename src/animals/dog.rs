//! Dog variant

use serde::{Deserialize, Serialize};

use super::{AnimalError, Profile};
use crate::activity_log::ActivityLog;
use crate::feedable::Feedable;

/// Species recorded for every dog
pub const DOG_SPECIES: &str = "Canine";

/// A dog. Starts hungry; stays fed once fed with real food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DogRecord")]
pub struct Dog {
    #[serde(flatten)]
    profile: Profile,
    breed: String,
    hungry: bool,
    tricks: Vec<String>,
}

/// Serialized form of a dog. Species is not read back.
#[derive(Deserialize)]
struct DogRecord {
    name: String,
    age: u32,
    breed: String,
    #[serde(default = "starts_hungry")]
    hungry: bool,
    #[serde(default)]
    tricks: Vec<String>,
}

fn starts_hungry() -> bool {
    true
}

impl From<DogRecord> for Dog {
    fn from(record: DogRecord) -> Self {
        Self {
            profile: Profile::new(record.name, record.age, DOG_SPECIES),
            breed: record.breed,
            hungry: record.hungry,
            tricks: record.tricks,
        }
    }
}

impl Dog {
    /// Create a new, hungry dog with no tricks
    pub fn new(name: impl Into<String>, age: u32, breed: impl Into<String>) -> Self {
        Self {
            profile: Profile::new(name.into(), age, DOG_SPECIES),
            breed: breed.into(),
            hungry: true,
            tricks: Vec::new(),
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

    /// Always "Woof!"
    pub fn make_sound(&self) -> &'static str {
        "Woof!"
    }

    /// Get the breed
    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// Tricks in the order they were learned
    pub fn tricks(&self) -> &[String] {
        &self.tricks
    }

    /// Learn a trick. Empty tricks are ignored without error or output.
    pub fn learn_trick(&mut self, trick: &str, log: &dyn ActivityLog) {
        if trick.is_empty() {
            return;
        }
        self.tricks.push(trick.to_string());
        log.record(&format!("{} learned: {}", self.profile.name(), trick));
    }
}

impl Feedable for Dog {
    fn feed(&mut self, food: &str, log: &dyn ActivityLog) -> Result<(), AnimalError> {
        if food.is_empty() {
            return Err(AnimalError::InvalidArgument(
                "food cannot be empty".to_string(),
            ));
        }

        log.record(&format!("{} eats {}", self.profile.name(), food));
        self.hungry = false;

        Ok(())
    }

    fn is_hungry(&self) -> bool {
        self.hungry
    }
}

// =============================================================================
// Tests
// =============================================================================
