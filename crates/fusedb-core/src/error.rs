use crate::fusion::{IndexSlot, ProviderDescriptor};
use thiserror::Error as ThisError;

///
/// FusionError
///
/// Runtime error surface of the routing/aggregation layer.
/// Nothing here retries automatically; retries, if any, belong to the
/// backing indexes or the caller.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FusionError {
    /// Routing defect: rejected immediately, never forwarded to a backing
    /// index.
    #[error("index key must contain at least one value")]
    EmptyKey,

    /// Operational failure forwarded from a backing index, tagged with its
    /// stable identity.
    #[error("{provider}: {message}")]
    Backend {
        provider: ProviderDescriptor,
        message: String,
    },

    /// The "no failure" signal: the index is not in a failed state.
    ///
    /// A backing index answers the failure query with this when healthy.
    /// The façade returns it for the aggregate query only when no alive
    /// member is failed, which is a caller contract violation — lifecycle
    /// state must be checked first.
    #[error("index is not in a failed state")]
    NotFailed,

    /// Blessing chain rejection; carries the rejecting instance's specific
    /// reason. The chain aborts at the rejecting instance.
    #[error("schema rejected by {provider}: {reason}")]
    SchemaRejected {
        provider: ProviderDescriptor,
        reason: String,
    },
}

///
/// TopologyError
///
/// Construction-time registration defects. These fail fast when a fusion
/// provider is built and can never surface at lookup time.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum TopologyError {
    #[error("slot {0} registered more than once")]
    DuplicateSlot(IndexSlot),

    #[error("slot {0} is not alive in this topology")]
    SlotNotAlive(IndexSlot),

    #[error("no backing index registered for alive slot {0}")]
    MissingSlot(IndexSlot),
}
