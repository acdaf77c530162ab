//! The public value object of the template.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named counter that appears in generated documentation.
///
/// Both fields are public: this type is a plain data carrier, and callers are
/// expected to read `name` and `value` directly.
///
/// # Examples
///
/// ```
/// use visibility_recipe::PublicEntity;
///
/// let entity = PublicEntity::with_value("Alice", 5);
/// assert_eq!(entity.greet(), "Hello from Alice!");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicEntity {
    /// Display name embedded in the greeting.
    pub name: String,
    /// Counter state, advanced by [`PublicEntity::increment_by`].
    pub value: i64,
}

impl PublicEntity {
    /// Creates a new entity with the counter starting at zero.
    ///
    /// # Arguments
    /// * `name` - Display name for this instance.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_value(name, 0)
    }

    /// Creates a new entity with an explicit starting counter.
    ///
    /// # Arguments
    /// * `name` - Display name for this instance.
    /// * `value` - Initial counter value.
    pub fn with_value(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns a greeting message including the instance name.
    pub fn greet(&self) -> String {
        format!("Hello from {}!", self.name)
    }

    /// Advances the counter by one and returns the new value.
    pub fn increment(&mut self) -> i64 {
        self.increment_by(1)
    }

    /// Advances the counter by `amount` and returns the new value.
    ///
    /// # Notes
    /// The counter is a plain `i64`; no bounds are enforced.
    pub fn increment_by(&mut self, amount: i64) -> i64 {
        self.value += amount;
        debug!(name = %self.name, amount, value = self.value, "Incremented");
        self.value
    }
}
