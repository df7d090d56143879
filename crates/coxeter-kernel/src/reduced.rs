//! Reduced words and redundancy witnesses.
//!
//! A word `ω` is reduced when `ℓ(eval(ω)) = len(ω)`. That equality is the
//! definition and is checked against the length oracle, never derived from
//! inversion sequences. The inversion sequences are used the other way:
//!
//! - for a reduced word, every entry of `ris(ω)` is a right inversion of
//!   `eval(ω)`, every entry of `lis(ω)` a left inversion, and neither
//!   sequence repeats an entry;
//! - for a word whose `ris` repeats an entry at `j < j'`, erasing both
//!   letters leaves a word of length `len(ω) - 2` with the same value.
//!
//! [`ReducedWord`] is the only way to reach the reduced-word guarantees.
//! It is produced by [`CoxeterSystem::certify`], so the reducedness
//! precondition cannot be skipped.

use crate::error::{CoxeterError, Result};
use crate::group::{CoxeterSystem, Group, LengthOracle};
use crate::inversion::InversionSequence;
use crate::word::Word;
use serde::Serialize;

/// A word certified reduced in a specific system.
#[derive(Debug, Clone)]
pub struct ReducedWord<'s, G: Group> {
    system: &'s CoxeterSystem<G>,
    word: Word,
    element: G::Element,
}

impl<'s, G: LengthOracle> ReducedWord<'s, G> {
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// `eval(ω)`.
    pub fn element(&self) -> &G::Element {
        &self.element
    }

    /// `len(ω) = ℓ(eval(ω))`.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn into_word(self) -> Word {
        self.word
    }

    pub fn right_inversions(&self) -> InversionSequence<G::Element> {
        self.system.right_inversions_unchecked(self.word.letters())
    }

    pub fn left_inversions(&self) -> InversionSequence<G::Element> {
        self.system.left_inversions_unchecked(self.word.letters())
    }

    /// Every `t ∈ ris(ω)` satisfies `ℓ(eval(ω) · t) < ℓ(eval(ω))`.
    pub fn right_inversions_are_inversions(&self) -> bool {
        self.right_inversions()
            .iter()
            .all(|t| self.system.is_right_inversion(&self.element, t))
    }

    /// Every `t ∈ lis(ω)` satisfies `ℓ(t · eval(ω)) < ℓ(eval(ω))`.
    pub fn left_inversions_are_inversions(&self) -> bool {
        self.left_inversions()
            .iter()
            .all(|t| self.system.is_left_inversion(&self.element, t))
    }

    /// Neither inversion sequence repeats an entry.
    pub fn inversions_are_distinct(&self) -> bool {
        self.right_inversions().is_duplicate_free() && self.left_inversions().is_duplicate_free()
    }
}

/// Two positions of a word whose right inversions coincide.
///
/// With `ω = a · x · b · y · c` and positions of `x`, `y` at `first`,
/// `second`, the coincidence forces `s_x · eval(b) = eval(b) · s_y`, so
/// `eval(ω) = eval(a · b · c)`: both letters are redundant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Redundancy<E> {
    pub first: usize,
    pub second: usize,
    /// The repeated reflection.
    pub reflection: E,
    /// `ω` with positions `first` and `second` erased.
    pub shortened: Word,
}

impl<G: Group> CoxeterSystem<G> {
    /// Locate a repeated right inversion and the shortened word it yields.
    ///
    /// Returns `None` when `ris(ω)` is duplicate-free, which happens exactly
    /// when `ω` is reduced.
    pub fn find_redundancy(&self, word: &Word) -> Result<Option<Redundancy<G::Element>>> {
        let ris = self.right_inversions(word)?;
        let Some((first, second)) = ris.first_duplicate() else {
            return Ok(None);
        };

        let shortened = word.erase_at(second)?.erase_at(first)?;
        let reflection = ris.get(first)?.value().clone();
        tracing::debug!(%word, first, second, %shortened, "located redundant letters");
        Ok(Some(Redundancy {
            first,
            second,
            reflection,
            shortened,
        }))
    }
}

impl<G: LengthOracle> CoxeterSystem<G> {
    /// Every entry of `ris(ω)` and `lis(ω)` is a reflection: its tag
    /// evaluates to its value, and `recognize` finds the value
    /// independently. Holds for every word, reduced or not.
    pub fn all_reflections(&self, word: &Word) -> Result<bool> {
        let ris = self.right_inversions(word)?;
        let lis = self.left_inversions(word)?;
        Ok(ris
            .iter()
            .chain(lis.iter())
            .all(|t| self.tag_is_consistent(t) && self.is_reflection(t.value())))
    }

    /// `ℓ(eval(ω)) = len(ω)`.
    pub fn is_reduced(&self, word: &Word) -> Result<bool> {
        let w = self.eval(word)?;
        Ok(self.length(&w) == word.len())
    }

    /// Certify `ω` as reduced, or report why it is not.
    pub fn certify(&self, word: &Word) -> Result<ReducedWord<'_, G>> {
        let element = self.eval(word)?;
        let length = self.length(&element);
        if length != word.len() {
            tracing::debug!(%word, length, "word is not reduced");
            return Err(CoxeterError::PreconditionViolated {
                operation: "certify",
                reason: format!(
                    "word {word} of length {} evaluates to an element of length {length}",
                    word.len()
                ),
            });
        }
        tracing::debug!(%word, "word certified reduced");
        Ok(ReducedWord {
            system: self,
            word: word.clone(),
            element,
        })
    }

    /// `ris(ω)` and `lis(ω)` are duplicate-free. Requires `ω` reduced.
    pub fn no_duplicates(&self, word: &Word) -> Result<bool> {
        Ok(self
            .certify(word)
            .map_err(|e| rename_operation(e, "no_duplicates"))?
            .inversions_are_distinct())
    }

    /// Every `t ∈ ris(ω)` is a right inversion of `eval(ω)`. Requires `ω`
    /// reduced.
    pub fn right_inversion_membership(&self, word: &Word) -> Result<bool> {
        Ok(self
            .certify(word)
            .map_err(|e| rename_operation(e, "right_inversion_membership"))?
            .right_inversions_are_inversions())
    }

    /// Every `t ∈ lis(ω)` is a left inversion of `eval(ω)`. Requires `ω`
    /// reduced.
    pub fn left_inversion_membership(&self, word: &Word) -> Result<bool> {
        Ok(self
            .certify(word)
            .map_err(|e| rename_operation(e, "left_inversion_membership"))?
            .left_inversions_are_inversions())
    }
}

fn rename_operation(err: CoxeterError, operation: &'static str) -> CoxeterError {
    match err {
        CoxeterError::PreconditionViolated { reason, .. } => {
            CoxeterError::PreconditionViolated { operation, reason }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DihedralGroup, SymmetricGroup};

    #[test]
    fn longest_word_of_i2_3_is_reduced() {
        let system = DihedralGroup::new(3).system().unwrap();
        let word = Word::new(vec![0, 1, 0]);
        assert!(system.is_reduced(&word).unwrap());

        let reduced = system.certify(&word).unwrap();
        assert_eq!(reduced.len(), 3);
        assert!(reduced.inversions_are_distinct());
        assert!(reduced.right_inversions_are_inversions());
        assert!(reduced.left_inversions_are_inversions());
        assert_eq!(system.find_redundancy(&word).unwrap(), None);
    }

    #[test]
    fn full_braid_cycle_is_not_reduced() {
        let system = DihedralGroup::new(3).system().unwrap();
        let word = Word::alternating(0, 1, 6);
        assert_eq!(system.eval(&word).unwrap(), system.group().one());
        assert!(!system.is_reduced(&word).unwrap());
        assert!(!system.right_inversions(&word).unwrap().is_duplicate_free());

        let redundancy = system.find_redundancy(&word).unwrap().unwrap();
        assert!(redundancy.first < redundancy.second);
        assert_eq!(redundancy.shortened.len(), 4);
        assert_eq!(
            system.eval(&redundancy.shortened).unwrap(),
            system.eval(&word).unwrap()
        );
    }

    #[test]
    fn precondition_is_enforced() {
        let system = SymmetricGroup::new(3).system().unwrap();
        let word = Word::new(vec![0, 0]);
        match system.no_duplicates(&word).unwrap_err() {
            CoxeterError::PreconditionViolated { operation, .. } => {
                assert_eq!(operation, "no_duplicates")
            }
            other => panic!("expected precondition error, got {other:?}"),
        }
        assert!(matches!(
            system.right_inversion_membership(&word),
            Err(CoxeterError::PreconditionViolated {
                operation: "right_inversion_membership",
                ..
            })
        ));
        assert!(matches!(
            system.certify(&word),
            Err(CoxeterError::PreconditionViolated { .. })
        ));
    }

    #[test]
    fn square_of_generator_collapses() {
        let system = SymmetricGroup::new(4).system().unwrap();
        for i in 0..system.rank() {
            let word = Word::new(vec![i, i]);
            let redundancy = system.find_redundancy(&word).unwrap().unwrap();
            assert_eq!((redundancy.first, redundancy.second), (0, 1));
            assert_eq!(&redundancy.reflection, system.simple(i).unwrap());
            assert!(redundancy.shortened.is_empty());
        }
    }

    #[test]
    fn invalid_generator_beats_precondition() {
        let system = DihedralGroup::new(3).system().unwrap();
        assert!(matches!(
            system.no_duplicates(&Word::new(vec![4])),
            Err(CoxeterError::InvalidGenerator { index: 4, .. })
        ));
    }

    #[test]
    fn empty_word_is_reduced() {
        let system = DihedralGroup::new(0).system().unwrap();
        assert!(system.no_duplicates(&Word::empty()).unwrap());
        assert!(system.right_inversion_membership(&Word::empty()).unwrap());
        assert!(system.left_inversion_membership(&Word::empty()).unwrap());
    }

    #[test]
    fn inversion_entries_are_reflections() {
        let system = SymmetricGroup::new(4).system().unwrap();
        for letters in [vec![], vec![0, 1, 0, 2, 1, 0], vec![2, 2, 1], vec![1, 0, 2, 1, 1]] {
            assert!(system.all_reflections(&Word::new(letters)).unwrap());
        }
        let system = DihedralGroup::new(0).system().unwrap();
        assert!(system.all_reflections(&Word::alternating(1, 0, 7)).unwrap());
        assert!(matches!(
            system.all_reflections(&Word::new(vec![2])),
            Err(CoxeterError::InvalidGenerator { index: 2, .. })
        ));
    }
}
