use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// IndexState
///
/// Lifecycle state reported by a backing index. The façade does not own
/// these semantics; it only merges per-slot observations.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum IndexState {
    Online,
    Populating,
    Failed,
}

impl Display for IndexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Online => "online",
            Self::Populating => "populating",
            Self::Failed => "failed",
        };
        write!(f, "{label}")
    }
}

/// Merge per-slot observations into one logical state.
///
/// Failed dominates Populating dominates Online: the logical index cannot
/// be ready while any constituent is still building, and a broken
/// constituent outranks one still catching up.
///
/// Empty input merges to Online. No topology produces an empty alive set
/// (the fallback slot is always present), but the function stays total.
#[must_use]
pub fn merge_states<I>(states: I) -> IndexState
where
    I: IntoIterator<Item = IndexState>,
{
    let mut merged = IndexState::Online;
    for state in states {
        match state {
            IndexState::Failed => return IndexState::Failed,
            IndexState::Populating => merged = IndexState::Populating,
            IndexState::Online => {}
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state_strategy() -> impl Strategy<Value = IndexState> {
        prop_oneof![
            Just(IndexState::Online),
            Just(IndexState::Populating),
            Just(IndexState::Failed),
        ]
    }

    proptest! {
        #[test]
        fn precedence_holds_for_every_combination(
            states in proptest::collection::vec(state_strategy(), 2..=5),
        ) {
            let merged = merge_states(states.iter().copied());

            let expected = if states.contains(&IndexState::Failed) {
                IndexState::Failed
            } else if states.contains(&IndexState::Populating) {
                IndexState::Populating
            } else {
                IndexState::Online
            };

            prop_assert_eq!(merged, expected);
        }

        #[test]
        fn merge_ignores_observation_order(
            mut states in proptest::collection::vec(state_strategy(), 2..=5),
        ) {
            let forward = merge_states(states.iter().copied());
            states.reverse();
            prop_assert_eq!(forward, merge_states(states));
        }
    }

    #[test]
    fn single_observation_passes_through() {
        for state in [IndexState::Online, IndexState::Populating, IndexState::Failed] {
            assert_eq!(merge_states([state]), state);
        }
    }

    #[test]
    fn empty_input_is_online() {
        let none: [IndexState; 0] = [];
        assert_eq!(merge_states(none), IndexState::Online);
    }
}
