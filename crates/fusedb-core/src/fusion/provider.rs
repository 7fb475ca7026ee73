use crate::{
    error::{FusionError, TopologyError},
    fusion::{
        contracts::{
            EmptyIndexProvider, IndexDescriptor, IndexProvider, IndexUpdate, ProviderDescriptor,
        },
        instances::InstanceSelector,
        sample::{IndexSample, combine_samples},
        selector::SlotSelector,
        slot::IndexSlot,
        state::{IndexState, merge_states},
        topology::{FusionTopology, FusionVersion},
    },
    obs::{self, FanOutKind, MetricsEvent},
    types::EntityId,
    value::Value,
};
use std::sync::Arc;

///
/// FusionIndexProvider
///
/// Façade presenting one backing index implementation per alive slot as a
/// single logical index. Single-key operations route to exactly one slot;
/// aggregate operations fan out over the alive slots in declared order and
/// merge the results.
///
/// The provider holds no mutable state beyond the immutable instance map,
/// so every operation is reentrant without coordination at this layer.
/// Backing instances own their internal locking.
///
/// Implements [`IndexProvider`] itself, so fusions compose.
///

pub struct FusionIndexProvider {
    topology: FusionTopology,
    selector: SlotSelector,
    instances: InstanceSelector<Arc<dyn IndexProvider>>,
}

impl std::fmt::Debug for FusionIndexProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FusionIndexProvider")
            .field("topology", &self.topology)
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

impl FusionIndexProvider {
    /// Construct the façade for one deployment generation.
    ///
    /// Every slot alive in `version` must be registered in `backing`
    /// exactly once; slots outside the topology are bound to the no-op
    /// sentinel. Registration defects surface here, never at lookup.
    pub fn new(
        version: FusionVersion,
        backing: Vec<(IndexSlot, Arc<dyn IndexProvider>)>,
    ) -> Result<Self, TopologyError> {
        let topology = FusionTopology::new(version);
        let instances = InstanceSelector::try_from_entries(topology, backing, || {
            Arc::new(EmptyIndexProvider) as Arc<dyn IndexProvider>
        })?;

        Ok(Self {
            topology,
            selector: topology.slot_selector(),
            instances,
        })
    }

    #[must_use]
    pub const fn topology(&self) -> FusionTopology {
        self.topology
    }

    /// Slot that owns `key` under this provider's topology.
    pub fn slot_of(&self, key: &[Value]) -> Result<IndexSlot, FusionError> {
        let slot = self.selector.select_slot(key, Value::category)?;
        obs::record_event(MetricsEvent::Routed { slot });
        Ok(slot)
    }

    fn owner(&self, key: &[Value]) -> Result<&dyn IndexProvider, FusionError> {
        Ok(self.instances.select(self.slot_of(key)?).as_ref())
    }

    fn alive(&self) -> impl Iterator<Item = (IndexSlot, &Arc<dyn IndexProvider>)> + '_ {
        self.instances.alive(self.topology)
    }
}

impl IndexProvider for FusionIndexProvider {
    fn descriptor(&self) -> ProviderDescriptor {
        ProviderDescriptor::new("fusion", self.topology.version().as_str())
    }

    /// Merged lifecycle state: Failed dominates Populating dominates
    /// Online, over the alive slots only.
    fn initial_state(&self, index: &IndexDescriptor) -> IndexState {
        obs::record_event(MetricsEvent::FanOut {
            kind: FanOutKind::State,
        });

        merge_states(
            self.alive()
                .map(|(_, provider)| provider.initial_state(index)),
        )
    }

    /// Aggregated failure report across every alive slot.
    ///
    /// A member answering [`FusionError::NotFailed`] is healthy and is
    /// skipped, not propagated: other members may genuinely be failed, and
    /// seeing every broken constituent at once outweighs brevity. Any other
    /// member error aborts the query. If no member is failed the aggregate
    /// call itself answers `NotFailed` — the caller should have checked the
    /// lifecycle state first.
    fn population_failure(&self, index: &IndexDescriptor) -> Result<String, FusionError> {
        obs::record_event(MetricsEvent::FanOut {
            kind: FanOutKind::Failure,
        });

        let mut failures = Vec::new();
        for (slot, provider) in self.alive() {
            match provider.population_failure(index) {
                Ok(detail) => {
                    failures.push(format!("[{slot}: {}] {detail}", provider.descriptor()));
                }
                Err(FusionError::NotFailed) => {}
                Err(err) => return Err(err),
            }
        }

        if failures.is_empty() {
            return Err(FusionError::NotFailed);
        }

        Ok(failures.join(" "))
    }

    /// Field-wise additive combination of every alive slot's sample.
    fn sample(&self, index: &IndexDescriptor) -> Result<IndexSample, FusionError> {
        obs::record_event(MetricsEvent::FanOut {
            kind: FanOutKind::Sample,
        });

        let mut samples = Vec::new();
        for (_, provider) in self.alive() {
            samples.push(provider.sample(index)?);
        }

        Ok(combine_samples(samples))
    }

    /// Thread the descriptor through every alive slot in declared order.
    ///
    /// Each instance receives the descriptor produced by the previous one;
    /// the first rejection aborts the chain with that instance's specific
    /// error and no further instance is consulted.
    fn bless(&self, index: IndexDescriptor) -> Result<IndexDescriptor, FusionError> {
        obs::record_event(MetricsEvent::FanOut {
            kind: FanOutKind::Bless,
        });

        let mut blessed = index;
        for (slot, provider) in self.alive() {
            blessed = provider.bless(blessed).inspect_err(|_| {
                obs::record_event(MetricsEvent::BlessRejected { slot });
            })?;
        }

        Ok(blessed)
    }

    /// Forward one update to the slot that owns its key, unchanged.
    ///
    /// A `Change` whose before/after keys route to different slots migrates
    /// ownership: the old slot sees a `Remove`, the new slot an `Add`.
    fn apply(&self, index: &IndexDescriptor, update: IndexUpdate) -> Result<(), FusionError> {
        match update {
            IndexUpdate::Add { key, id } => {
                let slot = self.slot_of(&key)?;
                self.instances
                    .select(slot)
                    .apply(index, IndexUpdate::Add { key, id })
            }
            IndexUpdate::Remove { key, id } => {
                let slot = self.slot_of(&key)?;
                self.instances
                    .select(slot)
                    .apply(index, IndexUpdate::Remove { key, id })
            }
            IndexUpdate::Change { before, after, id } => {
                let from = self.slot_of(&before)?;
                let to = self.slot_of(&after)?;

                if from == to {
                    self.instances
                        .select(to)
                        .apply(index, IndexUpdate::Change { before, after, id })
                } else {
                    self.instances
                        .select(from)
                        .apply(index, IndexUpdate::Remove { key: before, id })?;
                    self.instances
                        .select(to)
                        .apply(index, IndexUpdate::Add { key: after, id })
                }
            }
        }
    }

    /// Forward one read to the slot that owns `key`, unchanged.
    fn lookup(&self, index: &IndexDescriptor, key: &[Value]) -> Result<Vec<EntityId>, FusionError> {
        self.owner(key)?.lookup(index, key)
    }
}
