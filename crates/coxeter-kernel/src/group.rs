//! The group interface and the Coxeter system context.
//!
//! The kernel never implements a group. It consumes one through two
//! contracts:
//!
//! 1. [`Group`]: `one`, associative `mul`, and `inv` with
//!    `inv(inv(w)) = w` and `w * inv(w) = one`.
//! 2. [`LengthOracle`]: the Coxeter length `ℓ`, satisfying `ℓ(one) = 0`,
//!    sub-additivity, the reflection parity law, and the right-descent
//!    characterization.
//!
//! A [`CoxeterSystem`] bundles a validated [`CoxeterMatrix`], a group, and
//! the table of simple generators. It is passed explicitly to every kernel
//! operation; there is no ambient "current system".

use crate::error::{CoxeterError, Result};
use crate::matrix::CoxeterMatrix;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An abstract group with decidable equality.
pub trait Group {
    /// Group elements are plain values: cheap to clone, comparable, hashable.
    type Element: Clone + Eq + Hash + Debug + Display + Serialize;

    fn one(&self) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn inv(&self, a: &Self::Element) -> Self::Element;
}

/// The Coxeter length function `ℓ: W → ℕ`, consumed as an oracle.
///
/// Implementations must agree with minimal word length over the simple
/// generators of the system they are paired with. The kernel trusts this
/// contract and never recomputes `ℓ`.
pub trait LengthOracle: Group {
    fn length(&self, w: &Self::Element) -> usize;
}

/// A Coxeter system `(W, S)`: matrix, group, and simple generators.
///
/// Read-only once constructed. `CoxeterSystem<G>` is `Send + Sync` whenever
/// `G` and its elements are, so one system can serve many threads.
#[derive(Debug, Clone)]
pub struct CoxeterSystem<G: Group> {
    matrix: CoxeterMatrix,
    group: G,
    generators: Vec<G::Element>,
}

impl<G: Group> CoxeterSystem<G> {
    /// Bundle a matrix, a group, and a generator table.
    ///
    /// Checks that there is one generator per matrix row, that every
    /// generator is a non-trivial involution, and that `s_i s_j` has order
    /// exactly `M(i, j)` for every finite bond.
    pub fn new(matrix: CoxeterMatrix, group: G, generators: Vec<G::Element>) -> Result<Self> {
        if generators.len() != matrix.rank() {
            return Err(CoxeterError::RankMismatch {
                expected: matrix.rank(),
                actual: generators.len(),
            });
        }

        let system = Self {
            matrix,
            group,
            generators,
        };
        system.check_relations()?;

        tracing::debug!(rank = system.rank(), "coxeter system constructed");
        Ok(system)
    }

    pub fn matrix(&self) -> &CoxeterMatrix {
        &self.matrix
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    /// Number of simple generators.
    pub fn rank(&self) -> usize {
        self.generators.len()
    }

    /// The simple generator `s_i`.
    pub fn simple(&self, i: usize) -> Result<&G::Element> {
        self.generators.get(i).ok_or(CoxeterError::InvalidGenerator {
            index: i,
            rank: self.rank(),
        })
    }

    /// All simple generators, in index order.
    pub fn generators(&self) -> &[G::Element] {
        &self.generators
    }

    /// `w · t · w⁻¹`.
    pub fn conjugate(&self, w: &G::Element, t: &G::Element) -> G::Element {
        let g = &self.group;
        g.mul(&g.mul(w, t), &g.inv(w))
    }

    fn check_relations(&self) -> Result<()> {
        let g = &self.group;
        let one = g.one();

        for (i, s) in self.generators.iter().enumerate() {
            if *s == one {
                return Err(CoxeterError::RelationViolated {
                    relation: format!("s{i} ≠ 1"),
                });
            }
            if g.mul(s, s) != one {
                return Err(CoxeterError::RelationViolated {
                    relation: format!("s{i}^2 = 1"),
                });
            }
        }

        let horizon = self.infinite_bond_horizon();
        for i in 0..self.rank() {
            for j in (i + 1)..self.rank() {
                let product = g.mul(&self.generators[i], &self.generators[j]);
                match self.matrix.bond(i, j)?.order() {
                    Some(m) => {
                        if order_up_to(g, &product, m) != Some(m) {
                            return Err(CoxeterError::RelationViolated {
                                relation: format!("(s{i} s{j})^{m} = 1 with order exactly {m}"),
                            });
                        }
                    }
                    None => {
                        if let Some(k) = order_up_to(g, &product, horizon) {
                            return Err(CoxeterError::RelationViolated {
                                relation: format!(
                                    "(s{i} s{j}) of infinite order, found order {k}"
                                ),
                            });
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Infinite bonds are checked for a finite order up to this many powers,
/// or up to the largest finite bond of the matrix if that is larger.
pub const INFINITE_BOND_HORIZON: u32 = 64;

impl<G: Group> CoxeterSystem<G> {
    fn infinite_bond_horizon(&self) -> u32 {
        self.matrix
            .rows()
            .flat_map(|row| row.iter().filter_map(|bond| bond.order()))
            .fold(INFINITE_BOND_HORIZON, u32::max)
    }
}

/// The order of `a` if it is at most `bound`.
fn order_up_to<G: Group>(g: &G, a: &G::Element, bound: u32) -> Option<u32> {
    let one = g.one();
    let mut power = a.clone();
    for k in 1..=bound {
        if power == one {
            return Some(k);
        }
        power = g.mul(&power, a);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::BondOrder;
    use crate::model::{DihedralElement, DihedralGroup, SymmetricGroup};

    #[test]
    fn rank_mismatch_is_rejected() {
        let group = DihedralGroup::new(3);
        let s0 = DihedralElement::reflection(0);
        let err = CoxeterSystem::new(CoxeterMatrix::i2(3).unwrap(), group, vec![s0]).unwrap_err();
        assert_eq!(
            err,
            CoxeterError::RankMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn wrong_bond_order_is_rejected() {
        // The generators of I2(3) do not satisfy (s0 s1)^4 with exact order 4.
        let group = DihedralGroup::new(3);
        let generators = group.simple_generators();
        let err = CoxeterSystem::new(CoxeterMatrix::i2(4).unwrap(), group, generators).unwrap_err();
        assert!(matches!(err, CoxeterError::RelationViolated { .. }));
    }

    #[test]
    fn trivial_generator_is_rejected() {
        let group = DihedralGroup::new(2);
        let generators = vec![group.one(), DihedralElement::reflection(1)];
        let err = CoxeterSystem::new(CoxeterMatrix::i2(2).unwrap(), group, generators).unwrap_err();
        assert!(matches!(err, CoxeterError::RelationViolated { .. }));
    }

    #[test]
    fn simple_out_of_range() {
        let system = SymmetricGroup::new(3).system().unwrap();
        assert_eq!(system.rank(), 2);
        assert!(system.simple(1).is_ok());
        assert_eq!(
            system.simple(2).unwrap_err(),
            CoxeterError::InvalidGenerator { index: 2, rank: 2 }
        );
    }

    #[test]
    fn identical_generators_under_infinite_bond_are_rejected() {
        let group = DihedralGroup::new(3);
        let s = DihedralElement::reflection(0);
        let err = CoxeterSystem::new(CoxeterMatrix::i2(0).unwrap(), group, vec![s, s]).unwrap_err();
        assert!(matches!(err, CoxeterError::RelationViolated { .. }));
    }

    #[test]
    fn finite_dihedral_under_infinite_bond_is_rejected() {
        // s0 s1 has order 3 here, but I2(inf) demands infinite order.
        let group = DihedralGroup::new(3);
        let generators = group.simple_generators();
        let err = CoxeterSystem::new(CoxeterMatrix::i2(0).unwrap(), group, generators).unwrap_err();
        match err {
            CoxeterError::RelationViolated { relation } => {
                assert!(relation.contains("found order 3"), "{relation}")
            }
            other => panic!("expected relation error, got {other:?}"),
        }
    }

    #[test]
    fn infinite_dihedral_passes_infinite_bond_check() {
        let system = DihedralGroup::new(0).system().unwrap();
        assert_eq!(system.matrix().bond(0, 1).unwrap(), BondOrder::INFINITE);
    }

    #[test]
    fn horizon_covers_largest_finite_bond() {
        let system = DihedralGroup::new(100).system().unwrap();
        assert_eq!(system.infinite_bond_horizon(), 100);
        let system = SymmetricGroup::new(4).system().unwrap();
        assert_eq!(system.infinite_bond_horizon(), INFINITE_BOND_HORIZON);
    }
}
