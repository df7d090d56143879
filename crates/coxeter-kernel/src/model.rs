//! Reference models of Coxeter groups with exact length oracles.
//!
//! The kernel treats `W` and `ℓ` as external collaborators. These two
//! models satisfy the group and length-oracle contracts exactly, so they
//! serve as test oracles and as the backends of the `coxeter` CLI.
//!
//! ## Models
//!
//! - **SymmetricGroup**: type `A_{n-1}` as permutations of `n` points in
//!   one-line notation. `s_i` swaps `i` and `i + 1`; `ℓ` counts inversions.
//!
//! - **DihedralGroup**: type `I_2(m)` as `r^k f^ε` with `f r f = r⁻¹`.
//!   `s_0 = f`, `s_1 = r⁻¹ f`, so `s_0 s_1 = r`. Order `0` is the infinite
//!   dihedral group, where rotations are unbounded integers.

use crate::error::Result;
use crate::group::{CoxeterSystem, Group, LengthOracle};
use crate::matrix::CoxeterMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── SymmetricGroup ─────────────────────────────────────────────────────────

/// A permutation of `0..n` in one-line notation: `w[x]` is the image of `x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Wrap a list of images, or `None` if it is not a permutation.
    pub fn from_images(images: Vec<usize>) -> Option<Self> {
        let mut seen = vec![false; images.len()];
        for &x in &images {
            if x >= images.len() || std::mem::replace(&mut seen[x], true) {
                return None;
            }
        }
        Some(Self(images))
    }

    pub fn images(&self) -> &[usize] {
        &self.0
    }

    /// Number of pairs `x < y` with `w[x] > w[y]`.
    pub fn inversions(&self) -> usize {
        let w = &self.0;
        (0..w.len())
            .map(|x| ((x + 1)..w.len()).filter(|&y| w[x] > w[y]).count())
            .sum()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

/// The symmetric group on `degree` points, as a Coxeter group of type
/// `A_{degree-1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetricGroup {
    degree: usize,
}

impl SymmetricGroup {
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The adjacent transpositions `(i i+1)`.
    pub fn simple_generators(&self) -> Vec<Permutation> {
        (1..self.degree)
            .map(|i| {
                let mut images: Vec<usize> = (0..self.degree).collect();
                images.swap(i - 1, i);
                Permutation(images)
            })
            .collect()
    }

    /// Bundle this group with the matrix of type `A_{degree-1}`.
    pub fn system(self) -> Result<CoxeterSystem<Self>> {
        let matrix = CoxeterMatrix::a(self.degree.saturating_sub(1))?;
        let generators = self.simple_generators();
        CoxeterSystem::new(matrix, self, generators)
    }
}

impl Group for SymmetricGroup {
    type Element = Permutation;

    fn one(&self) -> Permutation {
        Permutation::identity(self.degree)
    }

    fn mul(&self, a: &Permutation, b: &Permutation) -> Permutation {
        Permutation(b.0.iter().map(|&x| a.0[x]).collect())
    }

    fn inv(&self, a: &Permutation) -> Permutation {
        let mut images = vec![0; a.0.len()];
        for (x, &y) in a.0.iter().enumerate() {
            images[y] = x;
        }
        Permutation(images)
    }
}

impl LengthOracle for SymmetricGroup {
    fn length(&self, w: &Permutation) -> usize {
        w.inversions()
    }
}

// ─── DihedralGroup ──────────────────────────────────────────────────────────

/// The element `r^rotation · f^flip` of a dihedral group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DihedralElement {
    pub rotation: i64,
    pub flip: bool,
}

impl DihedralElement {
    pub fn rotation(k: i64) -> Self {
        Self {
            rotation: k,
            flip: false,
        }
    }

    pub fn reflection(k: i64) -> Self {
        Self {
            rotation: k,
            flip: true,
        }
    }
}

impl fmt::Display for DihedralElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rotation, self.flip) {
            (0, false) => write!(f, "1"),
            (0, true) => write!(f, "f"),
            (1, false) => write!(f, "r"),
            (1, true) => write!(f, "r·f"),
            (k, false) => write!(f, "r^{k}"),
            (k, true) => write!(f, "r^{k}·f"),
        }
    }
}

/// The dihedral group of order `2m`, or the infinite dihedral group when
/// `m = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DihedralGroup {
    order: u32,
}

impl DihedralGroup {
    pub fn new(order: u32) -> Self {
        Self { order }
    }

    /// The bond order `m` (`0` for `∞`).
    pub fn order(&self) -> u32 {
        self.order
    }

    /// `s_0 = f` and `s_1 = r⁻¹ f`.
    pub fn simple_generators(&self) -> Vec<DihedralElement> {
        vec![
            DihedralElement::reflection(0),
            DihedralElement::reflection(self.normalize(-1)),
        ]
    }

    /// Bundle this group with the matrix of type `I_2(m)`.
    pub fn system(self) -> Result<CoxeterSystem<Self>> {
        let matrix = CoxeterMatrix::i2(self.order)?;
        let generators = self.simple_generators();
        CoxeterSystem::new(matrix, self, generators)
    }

    fn normalize(&self, k: i64) -> i64 {
        if self.order == 0 {
            k
        } else {
            k.rem_euclid(i64::from(self.order))
        }
    }
}

impl Group for DihedralGroup {
    type Element = DihedralElement;

    fn one(&self) -> DihedralElement {
        DihedralElement::rotation(0)
    }

    fn mul(&self, a: &DihedralElement, b: &DihedralElement) -> DihedralElement {
        // f r^k = r^-k f
        let shift = if a.flip { -b.rotation } else { b.rotation };
        DihedralElement {
            rotation: self.normalize(a.rotation + shift),
            flip: a.flip ^ b.flip,
        }
    }

    fn inv(&self, a: &DihedralElement) -> DihedralElement {
        if a.flip {
            *a
        } else {
            DihedralElement::rotation(self.normalize(-a.rotation))
        }
    }
}

impl LengthOracle for DihedralGroup {
    fn length(&self, w: &DihedralElement) -> usize {
        let k = self.normalize(w.rotation);
        let len = if self.order == 0 {
            match (w.flip, k >= 0) {
                (false, _) => 2 * k.abs(),
                (true, true) => 2 * k + 1,
                (true, false) => -2 * k - 1,
            }
        } else {
            let m = i64::from(self.order);
            if w.flip {
                (2 * k + 1).min(2 * (m - k) - 1)
            } else {
                (2 * k).min(2 * (m - k))
            }
        };
        len as usize
    }
}
