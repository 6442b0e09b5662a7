//! Filter criteria read by the engine on every filter pass.

use serde::{Deserialize, Serialize};

/// `(text, wall type, vegetation)` filter tuple.
///
/// An empty component means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively against all attributes.
    pub text: String,
    /// Exact wall type, or empty.
    pub wall_type: String,
    /// Exact vegetation cover, or empty.
    pub vegetation: String,
}

impl FilterCriteria {
    pub fn new(
        text: impl Into<String>,
        wall_type: impl Into<String>,
        vegetation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            wall_type: wall_type.into(),
            vegetation: vegetation.into(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_wall_type(mut self, wall_type: impl Into<String>) -> Self {
        self.wall_type = wall_type.into();
        self
    }

    pub fn with_vegetation(mut self, vegetation: impl Into<String>) -> Self {
        self.vegetation = vegetation.into();
        self
    }

    /// Returns whether no component constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.text.is_empty() && self.wall_type.is_empty() && self.vegetation.is_empty()
    }

    /// Clears every component back to "no constraint".
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
