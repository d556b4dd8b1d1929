//! Animals
//!
//! TigerStyle: Closed sum type over concrete variants, no runtime type probing.
//!
//! Every variant embeds a [`Profile`] carrying the shared identity
//! (name, age, species). Classification and capability queries are
//! resolved by matching on the variant tag.

mod cat;
mod dog;

pub use cat::{Cat, CAT_LIVES, CAT_SPECIES};
pub use dog::{Dog, DOG_SPECIES};

use serde::{Deserialize, Serialize};

use crate::animal_type::AnimalType;
use crate::feedable::Feedable;

// =============================================================================
// Profile
// =============================================================================

/// Identity shared by every animal variant.
///
/// Only serialized; each variant rebuilds its profile when deserializing so
/// the species always matches the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    name: String,
    age: u32,
    /// Fixed per variant, no accessor
    species: String,
}

impl Profile {
    pub(crate) fn new(name: String, age: u32, species: &str) -> Self {
        Self {
            name,
            age,
            species: species.to_string(),
        }
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name (no validation)
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the age in years
    pub fn age(&self) -> u32 {
        self.age
    }
}

// =============================================================================
// Animal
// =============================================================================

/// A registered animal, tagged by its concrete variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Animal {
    /// A dog
    Dog(Dog),
    /// A cat
    Cat(Cat),
}

impl Animal {
    /// Shared identity of this animal
    pub fn profile(&self) -> &Profile {
        match self {
            Self::Dog(dog) => dog.profile(),
            Self::Cat(cat) => cat.profile(),
        }
    }

    fn profile_mut(&mut self) -> &mut Profile {
        match self {
            Self::Dog(dog) => dog.profile_mut(),
            Self::Cat(cat) => cat.profile_mut(),
        }
    }

    /// Get the name
    pub fn name(&self) -> &str {
        self.profile().name()
    }

    /// Replace the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.profile_mut().set_name(name);
    }

    /// Get the age in years
    pub fn age(&self) -> u32 {
        self.profile().age()
    }

    /// The sound this variant makes
    pub fn make_sound(&self) -> &'static str {
        match self {
            Self::Dog(dog) => dog.make_sound(),
            Self::Cat(cat) => cat.make_sound(),
        }
    }

    /// Strictly older than `other`; always false when `other` is absent.
    pub fn is_older_than(&self, other: Option<&Animal>) -> bool {
        other.is_some_and(|other| self.age() > other.age())
    }

    /// Classification tag of the concrete variant
    pub fn kind(&self) -> AnimalType {
        match self {
            Self::Dog(_) => AnimalType::Dog,
            Self::Cat(_) => AnimalType::Cat,
        }
    }

    /// Feeding capability, if this variant has one.
    ///
    /// Every current variant is feedable; variants added later may return
    /// `None`, and bulk feeding skips them.
    pub fn feedable(&self) -> Option<&dyn Feedable> {
        match self {
            Self::Dog(dog) => Some(dog),
            Self::Cat(cat) => Some(cat),
        }
    }

    /// Mutable feeding capability, if this variant has one
    pub fn feedable_mut(&mut self) -> Option<&mut dyn Feedable> {
        match self {
            Self::Dog(dog) => Some(dog),
            Self::Cat(cat) => Some(cat),
        }
    }

    /// Get the dog variant
    pub fn as_dog(&self) -> Option<&Dog> {
        match self {
            Self::Dog(dog) => Some(dog),
            Self::Cat(_) => None,
        }
    }

    /// Get the dog variant mutably
    pub fn as_dog_mut(&mut self) -> Option<&mut Dog> {
        match self {
            Self::Dog(dog) => Some(dog),
            Self::Cat(_) => None,
        }
    }

    /// Get the cat variant
    pub fn as_cat(&self) -> Option<&Cat> {
        match self {
            Self::Cat(cat) => Some(cat),
            Self::Dog(_) => None,
        }
    }
}

impl From<Dog> for Animal {
    fn from(dog: Dog) -> Self {
        Self::Dog(dog)
    }
}

impl From<Cat> for Animal {
    fn from(cat: Cat) -> Self {
        Self::Cat(cat)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Animal-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// =============================================================================
// Tests
// =============================================================================
