//! Left and right inversion sequences of a word.
//!
//! For a word `ω = [i₁, …, i_k]`:
//!
//! ```text
//! ris([])          = []
//! ris([i] ++ rest) = [eval(rest)⁻¹ · s_i · eval(rest)] ++ ris(rest)
//! ris(ω ++ [i])    = map(s_i · _ · s_i, ris(ω)) ++ [s_i]
//!
//! lis([])          = []
//! lis([i] ++ rest) = [s_i] ++ map(s_i · _ · s_i, lis(rest))
//! lis(ω ++ [i])    = lis(ω) ++ [eval(ω) · s_i · eval(ω)⁻¹]
//! ```
//!
//! The loop forms ([`CoxeterSystem::right_inversions`],
//! [`CoxeterSystem::left_inversions`]) keep the running suffix or prefix
//! product instead of re-evaluating it. The structural forms
//! ([`CoxeterSystem::right_inversions_recursive`],
//! [`CoxeterSystem::left_inversions_recursive`]) follow the cons recursion
//! literally. Both must agree value for value.
//!
//! Laws:
//!
//! - `len(ris(ω)) = len(lis(ω)) = len(ω)`
//! - `ris(reverse(ω)) = reverse(lis(ω))`
//! - `product(ris(ω)) = product(lis(ω)) = eval(ω)⁻¹`
//! - `eval(ω) · ris(ω)[j] = eval(erase_at(ω, j)) = lis(ω)[j] · eval(ω)`
//! - `ris(drop(ω, j)) = drop(ris(ω), j)` and `lis(take(ω, j)) = take(lis(ω), j)`

use crate::error::{CoxeterError, Result};
use crate::group::{CoxeterSystem, Group};
use crate::reflection::Reflection;
use crate::word::Word;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// An ordered sequence of reflections, indexed like the word it came from.
///
/// Read-only once produced. If the word changes, recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InversionSequence<E> {
    entries: Vec<Reflection<E>>,
}

impl<E> InversionSequence<E> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, j: usize) -> Result<&Reflection<E>> {
        self.entries.get(j).ok_or(CoxeterError::IndexOutOfRange {
            index: j,
            len: self.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reflection<E>> {
        self.entries.iter()
    }

    /// The group elements, in order.
    pub fn values(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(Reflection::value)
    }
}

impl<E: Clone> InversionSequence<E> {
    pub fn reversed(&self) -> Self {
        Self {
            entries: self.entries.iter().rev().cloned().collect(),
        }
    }

    /// All but the first `n` entries.
    pub fn drop(&self, n: usize) -> Self {
        Self {
            entries: self.entries.iter().skip(n).cloned().collect(),
        }
    }

    /// The first `n` entries.
    pub fn take(&self, n: usize) -> Self {
        Self {
            entries: self.entries.iter().take(n).cloned().collect(),
        }
    }
}

impl<E: Eq + Hash> InversionSequence<E> {
    /// The first pair of positions `j < j'` holding the same reflection,
    /// ordered by `j'`.
    pub fn first_duplicate(&self) -> Option<(usize, usize)> {
        let mut seen: HashMap<&E, usize> = HashMap::with_capacity(self.len());
        for (j, t) in self.entries.iter().enumerate() {
            if let Some(&first) = seen.get(t.value()) {
                return Some((first, j));
            }
            seen.insert(t.value(), j);
        }
        None
    }

    pub fn is_duplicate_free(&self) -> bool {
        self.first_duplicate().is_none()
    }

    pub fn contains(&self, t: &E) -> bool {
        self.values().any(|v| v == t)
    }
}

impl<'a, E> IntoIterator for &'a InversionSequence<E> {
    type Item = &'a Reflection<E>;
    type IntoIter = std::slice::Iter<'a, Reflection<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<G: Group> CoxeterSystem<G> {
    /// `ris(ω)`, computed right to left with a running suffix product.
    pub fn right_inversions(&self, word: &Word) -> Result<InversionSequence<G::Element>> {
        word.validate(self.rank())?;
        Ok(self.right_inversions_unchecked(word.letters()))
    }

    /// `lis(ω)`, computed left to right with a running prefix product.
    pub fn left_inversions(&self, word: &Word) -> Result<InversionSequence<G::Element>> {
        word.validate(self.rank())?;
        Ok(self.left_inversions_unchecked(word.letters()))
    }

    /// `ris(ω)` by literal cons recursion, re-evaluating each suffix.
    pub fn right_inversions_recursive(
        &self,
        word: &Word,
    ) -> Result<InversionSequence<G::Element>> {
        word.validate(self.rank())?;
        let g = self.group();
        let mut entries = Vec::with_capacity(word.len());
        let mut rest = word.letters();
        while let Some((&i, tail)) = rest.split_first() {
            let suffix = self.eval_letters(tail);
            entries.push(self.generator_reflection(&g.inv(&suffix), i));
            rest = tail;
        }
        Ok(InversionSequence { entries })
    }

    /// `lis(ω)` by literal cons recursion on the head letter.
    pub fn left_inversions_recursive(
        &self,
        word: &Word,
    ) -> Result<InversionSequence<G::Element>> {
        word.validate(self.rank())?;
        let mut sequence = InversionSequence {
            entries: Vec::new(),
        };
        for &i in word.letters().iter().rev() {
            sequence = self.prepend_left(i, &sequence)?;
        }
        Ok(sequence)
    }

    /// `ris(ω ++ [i])` from `ris(ω)`.
    pub fn append_right(
        &self,
        ris: &InversionSequence<G::Element>,
        i: usize,
    ) -> Result<InversionSequence<G::Element>> {
        let s = self.simple(i)?;
        let mut entries: Vec<_> = ris
            .iter()
            .map(|t| self.conjugate_reflection(s, t))
            .collect();
        entries.push(self.simple_reflection(i)?);
        Ok(InversionSequence { entries })
    }

    /// `lis([i] ++ ω)` from `lis(ω)`.
    pub fn prepend_left(
        &self,
        i: usize,
        lis: &InversionSequence<G::Element>,
    ) -> Result<InversionSequence<G::Element>> {
        let s = self.simple(i)?;
        let mut entries = Vec::with_capacity(lis.len() + 1);
        entries.push(self.simple_reflection(i)?);
        entries.extend(lis.iter().map(|t| self.conjugate_reflection(s, t)));
        Ok(InversionSequence { entries })
    }

    /// `ris(ω)[j] = eval(drop(ω, j+1))⁻¹ · s_{ω[j]} · eval(drop(ω, j+1))`,
    /// without materializing the sequence.
    pub fn right_inversion_at(&self, word: &Word, j: usize) -> Result<Reflection<G::Element>> {
        word.validate(self.rank())?;
        let i = word.get(j)?;
        let suffix = self.eval_letters(&word.letters()[j + 1..]);
        Ok(self.generator_reflection(&self.group().inv(&suffix), i))
    }

    /// `lis(ω)[j] = eval(take(ω, j)) · s_{ω[j]} · eval(take(ω, j))⁻¹`.
    pub fn left_inversion_at(&self, word: &Word, j: usize) -> Result<Reflection<G::Element>> {
        word.validate(self.rank())?;
        let i = word.get(j)?;
        let prefix = self.eval_letters(&word.letters()[..j]);
        Ok(self.generator_reflection(&prefix, i))
    }

    /// Left-to-right product of the entries.
    pub fn product(&self, sequence: &InversionSequence<G::Element>) -> G::Element {
        let g = self.group();
        sequence
            .values()
            .fold(g.one(), |acc, t| g.mul(&acc, t))
    }

    pub(crate) fn right_inversions_unchecked(&self, letters: &[usize]) -> InversionSequence<G::Element> {
        let g = self.group();
        let mut suffix = g.one();
        let mut entries = Vec::with_capacity(letters.len());
        for &i in letters.iter().rev() {
            entries.push(self.generator_reflection(&g.inv(&suffix), i));
            suffix = g.mul(&self.generators()[i], &suffix);
        }
        entries.reverse();
        InversionSequence { entries }
    }

    pub(crate) fn left_inversions_unchecked(&self, letters: &[usize]) -> InversionSequence<G::Element> {
        let g = self.group();
        let mut prefix = g.one();
        let mut entries = Vec::with_capacity(letters.len());
        for &i in letters {
            entries.push(self.generator_reflection(&prefix, i));
            prefix = g.mul(&prefix, &self.generators()[i]);
        }
        InversionSequence { entries }
    }

    /// `c · s_i · c⁻¹` for an index already known to be in range.
    fn generator_reflection(&self, conjugator: &G::Element, i: usize) -> Reflection<G::Element> {
        let value = self.conjugate(conjugator, &self.generators()[i]);
        Reflection::new(i, conjugator.clone(), value)
    }
}
