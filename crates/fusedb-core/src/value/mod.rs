mod category;

#[cfg(test)]
mod tests;

use crate::types::{Date, Duration, Float64, Point, Timestamp};
use ulid::Ulid;

// re-exports
pub use category::{CATEGORY_COUNT, ValueCategory};

///
/// Value
///
/// Closed enumeration of application values addressable by an index key.
///
/// Null → the field's value is absent (i.e. SQL NULL); indexable but
/// never specialized.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float64(Float64),
    Text(String),
    Blob(Vec<u8>),
    Date(Date),
    Timestamp(Timestamp),
    Duration(Duration),
    Point(Point),
    Ulid(Ulid),
    /// Ordered list of values. Lists are opaque to routing and always
    /// classify as [`ValueCategory::Other`].
    List(Vec<Self>),
    Null,
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    ///
    /// CLASSIFICATION
    ///

    /// Routing category of this value.
    ///
    /// Pure, total, and deterministic: the same value always classifies
    /// identically within a process run, independent of slot topology.
    /// Callers may cache on this assumption.
    #[must_use]
    pub const fn category(&self) -> ValueCategory {
        match self {
            Self::Int(_) | Self::Uint(_) | Self::Float64(_) => ValueCategory::Number,
            Self::Text(_) => ValueCategory::Text,
            Self::Date(_) | Self::Timestamp(_) | Self::Duration(_) => ValueCategory::Temporal,
            Self::Point(_) => ValueCategory::Spatial,
            Self::Bool(_) | Self::Blob(_) | Self::Ulid(_) | Self::List(_) | Self::Null => {
                ValueCategory::Other
            }
        }
    }

    ///
    /// TYPES
    ///

    /// Returns true if the value is Text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool      => Bool,
    i8        => Int,
    i16       => Int,
    i32       => Int,
    i64       => Int,
    u8        => Uint,
    u16       => Uint,
    u32       => Uint,
    u64       => Uint,
    f64       => Float64,
    &str      => Text,
    String    => Text,
    Vec<u8>   => Blob,
    Date      => Date,
    Timestamp => Timestamp,
    Duration  => Duration,
    Point     => Point,
    Ulid      => Ulid,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}
