use crate::fusion::{selector::SlotSelector, slot::IndexSlot};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// FusionVersion
///
/// Named deployment generation of the fusion layout. Older generations
/// instantiate fewer specialized slots; the fallback slot is alive in all
/// of them. Versions are persisted with the store, so variants must never
/// be renumbered or removed.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum FusionVersion {
    /// Fallback slot only.
    V1,
    /// Fallback plus a dedicated text slot.
    V2,
    /// Fully specialized layout.
    V3,
}

impl FusionVersion {
    /// Slots instantiated by this generation, in declared fan-out order.
    #[must_use]
    pub const fn alive_slots(self) -> &'static [IndexSlot] {
        match self {
            Self::V1 => &[IndexSlot::Generic],
            Self::V2 => &[IndexSlot::Generic, IndexSlot::Text],
            Self::V3 => &[
                IndexSlot::Generic,
                IndexSlot::Number,
                IndexSlot::Text,
                IndexSlot::Spatial,
                IndexSlot::Temporal,
            ],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2 => "2",
            Self::V3 => "3",
        }
    }
}

impl Display for FusionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// FusionTopology
///
/// Immutable description of which slots are alive for one deployment
/// generation, created once at provider construction. Multiple topologies
/// may coexist in a running process during rolling format upgrades.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FusionTopology {
    version: FusionVersion,
}

impl FusionTopology {
    #[must_use]
    pub const fn new(version: FusionVersion) -> Self {
        Self { version }
    }

    #[must_use]
    pub const fn version(self) -> FusionVersion {
        self.version
    }

    /// Alive slots in declared fan-out order. Always contains the fallback.
    #[must_use]
    pub const fn alive_slots(self) -> &'static [IndexSlot] {
        self.version.alive_slots()
    }

    #[must_use]
    pub fn is_alive(self, slot: IndexSlot) -> bool {
        self.alive_slots().contains(&slot)
    }

    /// Slot selector bound to this generation.
    #[must_use]
    pub fn slot_selector(self) -> SlotSelector {
        SlotSelector::for_topology(self)
    }
}
