//! Menagerie - In-Memory Animal Registry
//!
//! TigerStyle domain model: an animal sum type, a feeding capability,
//! a closed classification tag, and a registry answering lookups.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              AnimalService                   │
//! │  register · feed_all · find · by type       │
//! ├─────────────────────────────────────────────┤
//! │  Animal { Dog | Cat }   │ Feedable           │
//! │  AnimalType tags        │ ActivityLog sink   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! All observable output goes through [`ActivityLog`], so tests can
//! capture it with [`MemoryLog`].
//!
//! # Usage
//!
//! ```rust
//! use menagerie::{AnimalService, AnimalType, Cat, Dog};
//!
//! let mut service = AnimalService::new();
//! service.register_animal(Dog::new("Rex", 3, "Labrador"));
//! service.register_animal(Cat::new("Whiskers", 2, true));
//!
//! let report = service.feed_all("food").unwrap();
//! assert_eq!(report.fed, vec!["Rex", "Whiskers"]);
//! assert_eq!(service.get_animals_by_type(AnimalType::Dog).len(), 1);
//! ```

#![warn(clippy::all)]

pub mod activity_log;
pub mod animal_type;
pub mod animals;
pub mod feedable;
pub mod service;

// Re-export common types
pub use activity_log::{ActivityLog, MemoryLog, SharedActivityLog, TracingLog};
pub use animal_type::AnimalType;
pub use animals::{Animal, AnimalError, Cat, Dog, Profile};
pub use feedable::Feedable;
pub use service::{
    new_shared_service, AnimalService, FeedFailure, FeedPolicy, FeedReport, RegistrySnapshot,
    ServiceConfig, ServiceError, SharedAnimalService,
};
