use derive_more::{Add, AddAssign, Sum};
use serde::{Deserialize, Serialize};

///
/// IndexSample
///
/// Additive triple describing an index's size/cardinality/sampling
/// statistics. Combination across backing indexes is field-wise sum and
/// nothing else: no weighting, no deduplication.
///

#[derive(
    Add, AddAssign, Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, Sum,
)]
pub struct IndexSample {
    pub index_size: u64,
    pub unique_values: u64,
    pub sample_size: u64,
}

impl IndexSample {
    /// The all-zero sample; identity of combination.
    pub const EMPTY: Self = Self {
        index_size: 0,
        unique_values: 0,
        sample_size: 0,
    };

    #[must_use]
    pub const fn new(index_size: u64, unique_values: u64, sample_size: u64) -> Self {
        Self {
            index_size,
            unique_values,
            sample_size,
        }
    }
}

/// Field-wise sum over any number of contributors.
///
/// Zero contributors yield the all-zero sample; a single contributor passes
/// through unchanged.
#[must_use]
pub fn combine_samples<I>(samples: I) -> IndexSample
where
    I: IntoIterator<Item = IndexSample>,
{
    samples.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_strategy() -> impl Strategy<Value = IndexSample> {
        (0u64..1_000_000, 0u64..1_000_000, 0u64..1_000_000)
            .prop_map(|(index_size, unique_values, sample_size)| {
                IndexSample::new(index_size, unique_values, sample_size)
            })
    }

    proptest! {
        #[test]
        fn combination_is_commutative(a in sample_strategy(), b in sample_strategy()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn combination_is_associative(
            a in sample_strategy(),
            b in sample_strategy(),
            c in sample_strategy(),
        ) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn combination_ignores_contributor_order(
            mut samples in proptest::collection::vec(sample_strategy(), 0..6),
        ) {
            let forward = combine_samples(samples.clone());
            samples.reverse();
            prop_assert_eq!(forward, combine_samples(samples));
        }

        #[test]
        fn single_contributor_passes_through(a in sample_strategy()) {
            prop_assert_eq!(combine_samples([a]), a);
        }
    }

    #[test]
    fn zero_contributors_combine_to_zero() {
        let none: [IndexSample; 0] = [];
        assert_eq!(combine_samples(none), IndexSample::EMPTY);
    }

    #[test]
    fn combination_is_field_wise_sum() {
        let combined = combine_samples([
            IndexSample::new(10, 5, 5),
            IndexSample::new(20, 15, 10),
        ]);
        assert_eq!(combined, IndexSample::new(30, 20, 15));
    }
}
