//! Words over the simple generators, and their evaluation.
//!
//! A word `ω = [i₁, …, i_k]` is a finite sequence of generator indices. It
//! evaluates to `s_{i₁} · … · s_{i_k}` by a left fold of `mul` starting from
//! `one`; the empty word evaluates to `one`.
//!
//! Words are immutable values. Every derivation (`drop`, `take`,
//! `erase_at`, `push`, `cons`, `concat`, `reverse`) returns a new word.

use crate::error::{CoxeterError, Result};
use crate::group::{CoxeterSystem, Group};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A finite sequence of generator indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(Vec<usize>);

impl Word {
    pub fn new(letters: Vec<usize>) -> Self {
        Self(letters)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The alternating word `[i, j, i, j, …]` of length `m`.
    pub fn alternating(i: usize, j: usize, m: usize) -> Self {
        Self((0..m).map(|k| if k % 2 == 0 { i } else { j }).collect())
    }

    /// Both sides of the braid relation of bond order `m`:
    /// `[i, j, i, …]` and `[j, i, j, …]`, each of length `m`.
    pub fn braid_words(i: usize, j: usize, m: usize) -> (Self, Self) {
        (Self::alternating(i, j, m), Self::alternating(j, i, m))
    }

    pub fn letters(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, j: usize) -> Result<usize> {
        self.0.get(j).copied().ok_or(CoxeterError::IndexOutOfRange {
            index: j,
            len: self.len(),
        })
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn reverse(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// All but the first `n` letters (empty if `n ≥ len`).
    pub fn drop(&self, n: usize) -> Self {
        Self(self.0.iter().skip(n).copied().collect())
    }

    /// The first `n` letters (the whole word if `n ≥ len`).
    pub fn take(&self, n: usize) -> Self {
        Self(self.0.iter().take(n).copied().collect())
    }

    /// The word with the letter at position `j` removed.
    pub fn erase_at(&self, j: usize) -> Result<Self> {
        self.get(j)?;
        let mut letters = self.0.clone();
        letters.remove(j);
        Ok(Self(letters))
    }

    /// `ω ++ [i]`.
    pub fn push(&self, i: usize) -> Self {
        let mut letters = self.0.clone();
        letters.push(i);
        Self(letters)
    }

    /// `[i] ++ ω`.
    pub fn cons(&self, i: usize) -> Self {
        let mut letters = Vec::with_capacity(self.len() + 1);
        letters.push(i);
        letters.extend_from_slice(&self.0);
        Self(letters)
    }

    /// `ω ++ other`.
    pub fn concat(&self, other: &Word) -> Self {
        let mut letters = self.0.clone();
        letters.extend_from_slice(&other.0);
        Self(letters)
    }

    /// Check every letter against the rank of a system.
    pub fn validate(&self, rank: usize) -> Result<()> {
        match self.0.iter().position(|&i| i >= rank) {
            Some(position) => {
                let index = self.0[position];
                tracing::trace!(position, index, rank, "word references unknown generator");
                Err(CoxeterError::InvalidGenerator { index, rank })
            }
            None => Ok(()),
        }
    }
}

impl From<Vec<usize>> for Word {
    fn from(letters: Vec<usize>) -> Self {
        Self(letters)
    }
}

impl FromIterator<usize> for Word {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, i) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{i}")?;
        }
        write!(f, "]")
    }
}

/// Parses `"0 1 0"`, `"0,1,0"`, or `"[0, 1, 0]"`.
impl std::str::FromStr for Word {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
        inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| format!("invalid generator index: {token}"))
            })
            .collect()
    }
}

impl<G: Group> CoxeterSystem<G> {
    /// Evaluate a word: `s_{i₁} · … · s_{i_k}`, with `[]` ↦ `one`.
    pub fn eval(&self, word: &Word) -> Result<G::Element> {
        word.validate(self.rank())?;
        Ok(self.eval_letters(word.letters()))
    }

    /// Evaluation over letters already known to be in range.
    pub(crate) fn eval_letters(&self, letters: &[usize]) -> G::Element {
        let g = self.group();
        let generators = self.generators();
        letters
            .iter()
            .fold(g.one(), |acc, &i| g.mul(&acc, &generators[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DihedralGroup, SymmetricGroup};

    #[test]
    fn empty_word_is_one() {
        let system = DihedralGroup::new(3).system().unwrap();
        assert_eq!(system.eval(&Word::empty()).unwrap(), system.group().one());
    }

    #[test]
    fn eval_is_left_to_right() {
        let system = SymmetricGroup::new(3).system().unwrap();
        let g = system.group();
        let w = system.eval(&Word::new(vec![0, 1])).unwrap();
        let expected = g.mul(system.simple(0).unwrap(), system.simple(1).unwrap());
        assert_eq!(w, expected);
    }

    #[test]
    fn eval_rejects_unknown_generator() {
        let system = DihedralGroup::new(4).system().unwrap();
        let err = system.eval(&Word::new(vec![0, 1, 2])).unwrap_err();
        assert_eq!(err, CoxeterError::InvalidGenerator { index: 2, rank: 2 });
        insta::assert_snapshot!(err, @"invalid generator 2: system has rank 2");
    }

    #[test]
    fn eval_is_a_homomorphism_on_concat() {
        let system = SymmetricGroup::new(4).system().unwrap();
        let g = system.group();
        let a = Word::new(vec![0, 2, 1]);
        let b = Word::new(vec![1, 0]);
        assert_eq!(
            system.eval(&a.concat(&b)).unwrap(),
            g.mul(&system.eval(&a).unwrap(), &system.eval(&b).unwrap())
        );
    }

    #[test]
    fn braid_words_agree() {
        let system = DihedralGroup::new(5).system().unwrap();
        let (left, right) = Word::braid_words(0, 1, 5);
        assert_eq!(left, Word::new(vec![0, 1, 0, 1, 0]));
        assert_eq!(system.eval(&left).unwrap(), system.eval(&right).unwrap());
    }

    #[test]
    fn drop_take_erase() {
        let w = Word::new(vec![3, 1, 4, 1, 5]);
        assert_eq!(w.drop(2), Word::new(vec![4, 1, 5]));
        assert_eq!(w.take(2), Word::new(vec![3, 1]));
        assert_eq!(w.drop(9), Word::empty());
        assert_eq!(w.take(9), w);
        assert_eq!(w.erase_at(1).unwrap(), Word::new(vec![3, 4, 1, 5]));
        assert_eq!(
            w.erase_at(5).unwrap_err(),
            CoxeterError::IndexOutOfRange { index: 5, len: 5 }
        );
        assert_eq!(w.cons(9).push(2), Word::new(vec![9, 3, 1, 4, 1, 5, 2]));
        assert_eq!(w.reverse(), Word::new(vec![5, 1, 4, 1, 3]));
    }

    #[test]
    fn parse_and_display() {
        let w: Word = "0 1,0".parse().unwrap();
        assert_eq!(w, Word::new(vec![0, 1, 0]));
        assert_eq!(w.to_string(), "[0, 1, 0]");
        assert_eq!(w.to_string().parse::<Word>().unwrap(), w);
        assert_eq!("".parse::<Word>().unwrap(), Word::empty());
        assert!("0 x".parse::<Word>().is_err());
    }
}
