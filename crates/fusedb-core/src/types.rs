//! Scalar newtypes used by the value model.
//!
//! These are opaque carriers: the routing layer classifies them but never
//! interprets their contents.

use derive_more::{Add, AddAssign, Display};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

///
/// Float64
///
/// Total-ordered wrapper over `f64` so floats can participate in an `Eq`
/// value model. Equality and ordering follow `f64::total_cmp`, so NaN is
/// equal to itself and ordered after all finite values.
///

#[derive(Clone, Copy, Debug, Default, Display, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Float64 {}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.to_bits());
    }
}

///
/// Timestamp
/// (in seconds)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// Date
/// Civil day count relative to the epoch; may be negative.
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Date(i64);

impl Date {
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self(days)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

///
/// Duration
/// (in seconds)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Duration(u64);

impl Duration {
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// Point
///
/// Planar point for spatial values. Coordinate reference interpretation is
/// owned by the spatial backing index, not by this layer.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Float64,
    pub y: Float64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: Float64::new(x),
            y: Float64::new(y),
        }
    }
}

///
/// EntityId
/// Opaque identity of an indexed entity.
///

#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct EntityId(u64);

impl EntityId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
