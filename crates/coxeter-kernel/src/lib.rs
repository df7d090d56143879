//! # Coxeter Kernel
//!
//! Reflections and inversion sequences of words in a Coxeter system.
//!
//! Given a word `ω` over the simple generators, the kernel evaluates it,
//! derives its left and right inversion sequences, and uses them to
//! certify that `ω` is reduced or to locate the letters that make it
//! redundant.
//!
//! This crate is **group-agnostic**: it does not prescribe how elements of
//! `W` are represented, and it never computes the length function `ℓ`. Both
//! are consumed through the [`Group`] and [`LengthOracle`] contracts.
//!
//! ## Architecture
//!
//! ```text
//! CoxeterMatrix         ← Validated bond orders M(i, j)
//!     │
//! CoxeterSystem<G>      ← Matrix + group + simple generators s_i
//!     │
//! Word / eval           ← ω ↦ s_{i₁} ⋯ s_{i_k}
//!     │
//! Reflection            ← Tagged conjugates c · s_i · c⁻¹, inversions
//!     │
//! InversionSequence     ← ris(ω), lis(ω) and their laws
//!     │
//! ReducedWord           ← ℓ(eval(ω)) = len(ω), nodup, redundancy witness
//! ```

pub mod error;
pub mod group;
pub mod inversion;
pub mod matrix;
pub mod model;
pub mod reduced;
pub mod reflection;
pub mod witness;
pub mod word;

pub use error::CoxeterError;
pub use group::{CoxeterSystem, Group, LengthOracle};
pub use inversion::InversionSequence;
pub use matrix::{BondOrder, CartanType, CoxeterMatrix};
pub use model::{DihedralElement, DihedralGroup, Permutation, SymmetricGroup};
pub use reduced::{Redundancy, ReducedWord};
pub use reflection::Reflection;
pub use witness::{RedundancySummary, VerificationReport, compute_witness_id};
pub use word::Word;
