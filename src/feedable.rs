//! Feedable Capability
//!
//! Behavioral contract for animals that can be fed and asked whether they
//! are hungry. Hunger semantics are variant-specific.

use crate::activity_log::ActivityLog;
use crate::animals::AnimalError;

/// Something that can be fed.
pub trait Feedable {
    /// Feed with the given food, recording an `"<name> eats <food>"` line.
    fn feed(&mut self, food: &str, log: &dyn ActivityLog) -> Result<(), AnimalError>;

    /// Report the current hunger state.
    fn is_hungry(&self) -> bool;
}
