use crate::{
    error::FusionError,
    fusion::{sample::IndexSample, state::IndexState},
    types::EntityId,
    value::Value,
};
use serde::Serialize;
use std::fmt::{self, Display};

///
/// ProviderDescriptor
///
/// Stable identity (name + version) of a backing index implementation,
/// used for diagnostic tagging in aggregated failure reports.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ProviderDescriptor {
    pub name: &'static str,
    pub version: &'static str,
}

impl ProviderDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

impl Display for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}

///
/// IndexDescriptor
///
/// Schema metadata threaded through the blessing chain. Each backing
/// implementation may return a transformed copy or reject it outright.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct IndexDescriptor {
    pub entity: &'static str,
    pub fields: &'static [&'static str],
    pub unique: bool,
}

impl IndexDescriptor {
    #[must_use]
    pub const fn new(entity: &'static str, fields: &'static [&'static str], unique: bool) -> Self {
        Self {
            entity,
            fields,
            unique,
        }
    }
}

impl Display for IndexDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.join(", ");

        if self.unique {
            write!(f, "UNIQUE {}({})", self.entity, fields)
        } else {
            write!(f, "{}({})", self.entity, fields)
        }
    }
}

///
/// IndexUpdate
///
/// Incremental write addressed by value key(s). Keys may be composite;
/// routing treats them wholesale.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IndexUpdate {
    Add {
        key: Vec<Value>,
        id: EntityId,
    },
    Change {
        before: Vec<Value>,
        after: Vec<Value>,
        id: EntityId,
    },
    Remove {
        key: Vec<Value>,
        id: EntityId,
    },
}

///
/// IndexProvider
///
/// Boundary contract every backing index implementation satisfies.
/// Implementations own their internal concurrency control and any blocking
/// I/O; callers may invoke any method reentrantly.
///

pub trait IndexProvider: Send + Sync {
    /// Stable identity used for diagnostic tagging.
    fn descriptor(&self) -> ProviderDescriptor;

    /// Current lifecycle state. Idempotent and cheap.
    fn initial_state(&self, index: &IndexDescriptor) -> IndexState;

    /// Failure detail, defined when and only when the lifecycle state is
    /// Failed. A healthy index answers with [`FusionError::NotFailed`].
    fn population_failure(&self, index: &IndexDescriptor) -> Result<String, FusionError>;

    /// Point-in-time statistics sample. May be approximate per
    /// implementation, but fields are non-negative and internally
    /// consistent (`sample_size <= index_size` where defined).
    fn sample(&self, index: &IndexDescriptor) -> Result<IndexSample, FusionError>;

    /// Validate ("bless") a schema descriptor, possibly transforming it.
    fn bless(&self, index: IndexDescriptor) -> Result<IndexDescriptor, FusionError>;

    /// Apply one incremental update.
    fn apply(&self, index: &IndexDescriptor, update: IndexUpdate) -> Result<(), FusionError>;

    /// Read the entity ids currently indexed under `key`.
    fn lookup(&self, index: &IndexDescriptor, key: &[Value]) -> Result<Vec<EntityId>, FusionError>;
}

///
/// EmptyIndexProvider
///
/// No-op sentinel bound to slots outside the active topology so instance
/// lookups never fail. Never part of any fan-out: aggregate operations
/// iterate alive slots only.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyIndexProvider;

impl EmptyIndexProvider {
    pub const DESCRIPTOR: ProviderDescriptor = ProviderDescriptor::new("empty", "0");
}

impl IndexProvider for EmptyIndexProvider {
    fn descriptor(&self) -> ProviderDescriptor {
        Self::DESCRIPTOR
    }

    fn initial_state(&self, _index: &IndexDescriptor) -> IndexState {
        IndexState::Online
    }

    fn population_failure(&self, _index: &IndexDescriptor) -> Result<String, FusionError> {
        Err(FusionError::NotFailed)
    }

    fn sample(&self, _index: &IndexDescriptor) -> Result<IndexSample, FusionError> {
        Ok(IndexSample::EMPTY)
    }

    fn bless(&self, index: IndexDescriptor) -> Result<IndexDescriptor, FusionError> {
        Ok(index)
    }

    fn apply(&self, _index: &IndexDescriptor, _update: IndexUpdate) -> Result<(), FusionError> {
        Ok(())
    }

    fn lookup(
        &self,
        _index: &IndexDescriptor,
        _key: &[Value],
    ) -> Result<Vec<EntityId>, FusionError> {
        Ok(Vec::new())
    }
}
