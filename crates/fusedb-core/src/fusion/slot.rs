use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Number of slots in the closed enumeration.
pub const SLOT_COUNT: usize = 5;

///
/// IndexSlot
///
/// One specialized (or the fallback) category of backing index.
///
/// Declaration order is the fan-out order for every aggregate operation and
/// must remain fixed: merged results are only reproducible across runs
/// because alive slots are always visited in this order.
///
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum IndexSlot {
    /// Catch-all slot, alive in every topology. Owns composite keys and
    /// values no specialized slot handles.
    Generic,
    Number,
    Text,
    Spatial,
    Temporal,
}

impl IndexSlot {
    /// Every slot, in declared fan-out order.
    pub const ALL: [Self; SLOT_COUNT] = [
        Self::Generic,
        Self::Number,
        Self::Text,
        Self::Spatial,
        Self::Temporal,
    ];

    /// Stable discriminant used to index fixed-size instance tables.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Generic => 0,
            Self::Number => 1,
            Self::Text => 2,
            Self::Spatial => 3,
            Self::Temporal => 4,
        }
    }
}

impl Display for IndexSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Generic => "generic",
            Self::Number => "number",
            Self::Text => "text",
            Self::Spatial => "spatial",
            Self::Temporal => "temporal",
        };
        write!(f, "{label}")
    }
}
