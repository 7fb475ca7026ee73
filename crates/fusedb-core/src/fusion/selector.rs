use crate::{
    error::FusionError,
    fusion::{slot::IndexSlot, topology::FusionTopology},
    value::{CATEGORY_COUNT, Value, ValueCategory},
};

///
/// SlotSelector
///
/// Pure routing function binding one topology generation to a total
/// key → slot mapping. Holds no instances and no mutable state; concurrent
/// callers share it freely.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlotSelector {
    /// Specialized slot per category, `None` where the key falls back to
    /// the generic slot. Indexed by `ValueCategory::ordinal`.
    by_category: [Option<IndexSlot>; CATEGORY_COUNT],
}

impl SlotSelector {
    /// Specialized slot for a category, independent of topology.
    const fn specialized(category: ValueCategory) -> Option<IndexSlot> {
        match category {
            ValueCategory::Number => Some(IndexSlot::Number),
            ValueCategory::Text => Some(IndexSlot::Text),
            ValueCategory::Temporal => Some(IndexSlot::Temporal),
            ValueCategory::Spatial => Some(IndexSlot::Spatial),
            ValueCategory::Other => None,
        }
    }

    #[must_use]
    pub(crate) fn for_topology(topology: FusionTopology) -> Self {
        let mut by_category = [None; CATEGORY_COUNT];
        for category in ValueCategory::ALL {
            by_category[category.ordinal()] =
                Self::specialized(category).filter(|slot| topology.is_alive(*slot));
        }
        Self { by_category }
    }

    /// Route a (possibly composite) index key to the single slot that owns
    /// it wholesale.
    ///
    /// - A single value routes to the specialized slot for its category,
    ///   falling back to [`IndexSlot::Generic`] when none is alive.
    /// - Composite keys always route to the fallback slot. Keys are never
    ///   decomposed: a key must be wholly owned by exactly one backing
    ///   index, and composite keys mix categories unpredictably.
    /// - An empty key is a caller defect and is rejected up front.
    pub fn select_slot<F>(&self, values: &[Value], classify: F) -> Result<IndexSlot, FusionError>
    where
        F: Fn(&Value) -> ValueCategory,
    {
        match values {
            [] => Err(FusionError::EmptyKey),
            [single] => {
                let category = classify(single);
                Ok(self.by_category[category.ordinal()].unwrap_or(IndexSlot::Generic))
            }
            _ => Ok(IndexSlot::Generic),
        }
    }
}
