//! Slot-routing category classification for `Value`.
//!
//! This module defines only the coarse routing categories consumed by the
//! slot selector. It does not define scalar capabilities.

use std::fmt::{self, Display};

/// Number of categories in the closed enumeration.
pub const CATEGORY_COUNT: usize = 5;

///
/// ValueCategory
///
/// Coarse value classification used only for slot routing.
/// This classification MUST NOT be used to infer ordering support,
/// arithmetic support, or keyability.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueCategory {
    Number,   // Int, Uint, Float64
    Text,     // Text
    Temporal, // Date, Timestamp, Duration
    Spatial,  // Point
    Other,    // Bool, Blob, Ulid, List, Null
}

impl ValueCategory {
    pub const ALL: [Self; CATEGORY_COUNT] = [
        Self::Number,
        Self::Text,
        Self::Temporal,
        Self::Spatial,
        Self::Other,
    ];

    /// Stable discriminant used to index fixed-size routing tables.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Number => 0,
            Self::Text => 1,
            Self::Temporal => 2,
            Self::Spatial => 3,
            Self::Other => 4,
        }
    }
}

impl Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::Temporal => "temporal",
            Self::Spatial => "spatial",
            Self::Other => "other",
        };
        write!(f, "{label}")
    }
}
