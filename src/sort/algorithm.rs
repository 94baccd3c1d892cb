use serde::{Deserialize, Serialize};

use super::{bubble_sort, insertion_sort, merge_sort, selection_sort};

/// Sorting algorithm selectable in the control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
    ];

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
        }
    }

    /// Sort `data` in place, calling `on_step` with the whole array after
    /// every state-changing operation.
    pub fn run<F: FnMut(&[u8])>(&self, data: &mut [u8], on_step: F) {
        match self {
            Self::Bubble => bubble_sort(data, on_step),
            Self::Selection => selection_sort(data, on_step),
            Self::Insertion => insertion_sort(data, on_step),
            Self::Merge => merge_sort(data, on_step),
        }
    }

    /// Sort a private copy of `input` and collect every intermediate state.
    pub fn steps(&self, input: &[u8]) -> Vec<Vec<u8>> {
        let mut working = input.to_vec();
        let mut steps = Vec::new();
        self.run(&mut working, |snapshot| steps.push(snapshot.to_vec()));
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lot::{CarSizes, PARKING_SPOTS};
    use crate::sort::testing::{is_sorted, same_multiset};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted_copy(alg: Algorithm, input: &[u8]) -> Vec<u8> {
        let mut data = input.to_vec();
        alg.run(&mut data, |_| {});
        data
    }

    #[test]
    fn sorts_reference_input() {
        let input = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        for alg in Algorithm::ALL {
            assert_eq!(
                sorted_copy(alg, &input),
                vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9],
                "{}",
                alg.name()
            );
        }
    }

    #[test]
    fn random_lots_end_sorted_and_conserved() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let lot = CarSizes::random_with(&mut rng);
            for alg in Algorithm::ALL {
                let out = sorted_copy(alg, lot.as_slice());
                assert_eq!(out.len(), PARKING_SPOTS);
                assert!(is_sorted(&out), "{}: {:?}", alg.name(), out);
                assert!(same_multiset(&out, lot.as_slice()));
            }
        }
    }

    #[test]
    fn every_step_is_a_permutation_and_last_step_is_sorted() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let lot = CarSizes::random_with(&mut rng);
            for alg in Algorithm::ALL {
                let steps = alg.steps(lot.as_slice());
                // Insertion shifts duplicate a value until the key lands,
                // so only the other sorts conserve values at every step.
                if alg != Algorithm::Insertion {
                    for step in &steps {
                        assert!(same_multiset(step, lot.as_slice()), "{}", alg.name());
                    }
                }
                if let Some(last) = steps.last() {
                    assert!(is_sorted(last), "{}: {:?}", alg.name(), last);
                    assert_eq!(last, &sorted_copy(alg, lot.as_slice()));
                }
            }
        }
    }

    #[test]
    fn sorted_input_is_never_reordered() {
        let input = [1, 1, 2, 2, 3, 3, 4, 4, 5, 5];
        for alg in Algorithm::ALL {
            assert_eq!(sorted_copy(alg, &input), input.to_vec());
            for step in alg.steps(&input) {
                assert_eq!(step, input.to_vec(), "{}", alg.name());
            }
        }
        assert!(Algorithm::Bubble.steps(&input).is_empty());
        assert!(Algorithm::Insertion.steps(&input).is_empty());
    }

    #[test]
    fn steps_leave_input_untouched() {
        let input = vec![5, 4, 3, 2, 1];
        let steps = Algorithm::Merge.steps(&input);
        assert_eq!(input, vec![5, 4, 3, 2, 1]);
        assert_eq!(steps.last(), Some(&vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn names_are_distinct() {
        let names: std::collections::HashSet<_> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), 4);
        assert_eq!(Algorithm::default(), Algorithm::Bubble);
    }
}
