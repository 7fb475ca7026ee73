//! Slot routing and the fusion façade: the layer that makes N independent
//! backing indexes behave as one logical index.

mod contracts;
mod instances;
mod provider;
mod sample;
mod selector;
mod slot;
mod state;
mod topology;


// re-exports
pub use contracts::{
    EmptyIndexProvider, IndexDescriptor, IndexProvider, IndexUpdate, ProviderDescriptor,
};
pub use instances::InstanceSelector;
pub use provider::FusionIndexProvider;
pub use sample::{IndexSample, combine_samples};
pub use selector::SlotSelector;
pub use slot::{IndexSlot, SLOT_COUNT};
pub use state::{IndexState, merge_states};
pub use topology::{FusionTopology, FusionVersion};
