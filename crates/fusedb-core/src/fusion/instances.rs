use crate::{
    error::TopologyError,
    fusion::{
        slot::{IndexSlot, SLOT_COUNT},
        topology::FusionTopology,
    },
};
use std::array;

///
/// InstanceSelector
///
/// Keyed container mapping every slot in the closed enumeration to one
/// component instance. Backed by a fixed array indexed by slot ordinal, so
/// lookups are total and O(1) by construction. Generic over the component
/// type so the same container serves providers, accessors, and other
/// per-slot resources.
///

#[derive(Debug)]
pub struct InstanceSelector<T> {
    instances: [T; SLOT_COUNT],
}

impl<T> InstanceSelector<T> {
    /// Populate every enumeration member exactly once from a factory.
    ///
    /// The array representation makes "registered twice" and "omitted a
    /// slot" unrepresentable on this path.
    pub fn build<E>(mut factory: impl FnMut(IndexSlot) -> Result<T, E>) -> Result<Self, E> {
        let mut instances = Vec::with_capacity(SLOT_COUNT);
        for slot in IndexSlot::ALL {
            instances.push(factory(slot)?);
        }

        let instances: [T; SLOT_COUNT] = match instances.try_into() {
            Ok(instances) => instances,
            // Vec length equals SLOT_COUNT by construction.
            Err(_) => unreachable!("one instance per slot"),
        };

        Ok(Self { instances })
    }

    /// Open registration path used at provider construction.
    ///
    /// Every slot alive in `topology` must appear in `entries` exactly
    /// once; slots outside the topology are bound to the sentinel produced
    /// by `empty`. Registration defects fail fast here, never at lookup.
    pub fn try_from_entries(
        topology: FusionTopology,
        entries: Vec<(IndexSlot, T)>,
        mut empty: impl FnMut() -> T,
    ) -> Result<Self, TopologyError> {
        let mut registered: [Option<T>; SLOT_COUNT] = array::from_fn(|_| None);

        for (slot, instance) in entries {
            if !topology.is_alive(slot) {
                return Err(TopologyError::SlotNotAlive(slot));
            }
            if registered[slot.ordinal()].is_some() {
                return Err(TopologyError::DuplicateSlot(slot));
            }
            registered[slot.ordinal()] = Some(instance);
        }

        for slot in topology.alive_slots() {
            if registered[slot.ordinal()].is_none() {
                return Err(TopologyError::MissingSlot(*slot));
            }
        }

        let instances = array::from_fn(|i| registered[i].take().unwrap_or_else(|| empty()));

        Ok(Self { instances })
    }

    /// Total O(1) lookup. Slots outside the active topology resolve to the
    /// sentinel they were bound to at construction.
    #[must_use]
    pub const fn select(&self, slot: IndexSlot) -> &T {
        &self.instances[slot.ordinal()]
    }

    /// Derive a new per-slot resource from this one.
    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(IndexSlot, &T) -> U) -> InstanceSelector<U> {
        InstanceSelector {
            instances: array::from_fn(|i| f(IndexSlot::ALL[i], &self.instances[i])),
        }
    }

    /// Alive instances in declared fan-out order. Sentinel instances never
    /// appear here.
    pub fn alive(
        &self,
        topology: FusionTopology,
    ) -> impl Iterator<Item = (IndexSlot, &T)> + '_ {
        topology
            .alive_slots()
            .iter()
            .map(move |slot| (*slot, self.select(*slot)))
    }
}
