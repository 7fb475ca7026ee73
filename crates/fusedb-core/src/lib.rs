//! Core runtime for fusedb: the value model, slot routing, and the fusion
//! façade that presents heterogeneous backing indexes as one logical index.
#![warn(unreachable_pub)]

pub mod error;
pub mod fusion;
pub mod obs;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, selectors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        fusion::{
            FusionIndexProvider, FusionVersion, IndexDescriptor, IndexProvider, IndexSlot,
            IndexState,
        },
        value::{Value, ValueCategory},
    };
}
