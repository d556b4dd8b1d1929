//! Animal Service
//!
//! TigerStyle: In-memory registry with explicit, testable batch policy.
//!
//! The registry owns its animals in insertion order. Duplicate names are
//! allowed; lookups return the first match. There is no removal.
//!
//! Bulk feeding visits every animal once, in order, and feeds those that
//! have the feeding capability and are currently hungry. What happens when
//! one feed fails is decided by [`FeedPolicy`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::activity_log::{SharedActivityLog, TracingLog};
use crate::animal_type::AnimalType;
use crate::animals::{Animal, AnimalError};

// =============================================================================
// Configuration
// =============================================================================

/// How bulk feeding reacts to a failed feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedPolicy {
    /// Stop at the first failure and return it
    #[default]
    AbortOnError,
    /// Record the failure and keep going
    ContinueOnError,
}

/// Registry configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Policy used by [`AnimalService::feed_all`]
    #[serde(default)]
    pub feed_policy: FeedPolicy,
}

// =============================================================================
// Feed Report
// =============================================================================

/// A feed that failed during a tolerant bulk feeding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedFailure {
    /// Name of the animal that could not be fed
    pub name: String,
    /// Why it failed
    pub error: AnimalError,
}

/// Outcome of a bulk feeding, names in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedReport {
    /// Animals that were fed
    pub fed: Vec<String>,
    /// Animals without the capability, or not hungry
    pub skipped: Vec<String>,
    /// Failed feeds (only populated under [`FeedPolicy::ContinueOnError`])
    pub failures: Vec<FeedFailure>,
}

impl FeedReport {
    /// Whether every attempted feed succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Serializable copy of a registry's contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Animals in insertion order
    pub animals: Vec<Animal>,
}

impl RegistrySnapshot {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ServiceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// Animal Service
// =============================================================================

/// In-memory animal registry
pub struct AnimalService {
    /// Animals in insertion order
    animals: Vec<Animal>,
    config: ServiceConfig,
    log: SharedActivityLog,
}

impl std::fmt::Debug for AnimalService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimalService")
            .field("animals", &self.animals)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for AnimalService {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimalService {
    /// Create an empty registry logging through `tracing`
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default(), Arc::new(TracingLog))
    }

    /// Create an empty registry with explicit configuration and sink
    pub fn with_config(config: ServiceConfig, log: SharedActivityLog) -> Self {
        Self {
            animals: Vec::new(),
            config,
            log,
        }
    }

    /// Rebuild a registry from a snapshot.
    ///
    /// Restored animals are not announced as registrations.
    pub fn from_snapshot(
        snapshot: RegistrySnapshot,
        config: ServiceConfig,
        log: SharedActivityLog,
    ) -> Self {
        tracing::debug!(count = snapshot.animals.len(), "Restoring registry");
        Self {
            animals: snapshot.animals,
            config,
            log,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Register an animal at the end of the registry
    pub fn register_animal(&mut self, animal: impl Into<Animal>) {
        let animal = animal.into();
        self.log.record(&format!("Registered: {}", animal.name()));
        self.animals.push(animal);
    }

    /// Feed every hungry, feedable animal using the configured policy
    pub fn feed_all(&mut self, food: &str) -> Result<FeedReport, ServiceError> {
        self.feed_all_with(food, self.config.feed_policy)
    }

    /// Feed every hungry, feedable animal using an explicit policy.
    ///
    /// Under [`FeedPolicy::AbortOnError`] animals fed before the failure
    /// keep their new state and later animals are not visited.
    pub fn feed_all_with(
        &mut self,
        food: &str,
        policy: FeedPolicy,
    ) -> Result<FeedReport, ServiceError> {
        let mut report = FeedReport::default();
        let log = Arc::clone(&self.log);

        for animal in &mut self.animals {
            let name = animal.name().to_string();

            // Unreachable until a variant without the capability is added
            let Some(feedable) = animal.feedable_mut() else {
                tracing::debug!(%name, "Skipping animal without feeding capability");
                report.skipped.push(name);
                continue;
            };

            if !feedable.is_hungry() {
                report.skipped.push(name);
                continue;
            }

            match feedable.feed(food, log.as_ref()) {
                Ok(()) => report.fed.push(name),
                Err(error) => match policy {
                    FeedPolicy::AbortOnError => {
                        return Err(ServiceError::Feed {
                            name,
                            source: error,
                        });
                    }
                    FeedPolicy::ContinueOnError => {
                        tracing::warn!(%name, %error, "Feeding failed, continuing");
                        report.failures.push(FeedFailure { name, error });
                    }
                },
            }
        }

        Ok(report)
    }

    /// First animal (in insertion order) whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Animal> {
        self.animals.iter().find(|animal| animal.name() == name)
    }

    /// Mutable access to the first animal whose name matches exactly
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Animal> {
        self.animals.iter_mut().find(|animal| animal.name() == name)
    }

    /// All animals of the given type, in insertion order
    pub fn get_animals_by_type(&self, kind: AnimalType) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|animal| animal.kind() == kind)
            .collect()
    }

    /// Number of registered animals
    pub fn get_animal_count(&self) -> usize {
        self.animals.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Iterate in insertion order
    pub fn animals(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }

    /// Copy the registry contents
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            animals: self.animals.clone(),
        }
    }
}

/// Thread-safe animal service
pub type SharedAnimalService = Arc<RwLock<AnimalService>>;

/// Create a new shared animal service
pub fn new_shared_service(config: ServiceConfig, log: SharedActivityLog) -> SharedAnimalService {
    Arc::new(RwLock::new(AnimalService::with_config(config, log)))
}

// =============================================================================
// Errors
// =============================================================================

/// Service-related errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to feed {name}: {source}")]
    Feed {
        name: String,
        #[source]
        source: AnimalError,
    },

    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

// =============================================================================
// Tests
// =============================================================================
