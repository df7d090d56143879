//! Reflections, descents, and inversions.
//!
//! A reflection is a conjugate `w · s_i · w⁻¹` of a simple generator. Rather
//! than re-deriving that existential at every use site, the kernel carries
//! reflections as a tagged [`Reflection`] holding the generator index, the
//! conjugator, and the value. Closure under conjugation is then a
//! constructor ([`CoxeterSystem::conjugate_reflection`]) instead of a proof.
//!
//! Laws relied on throughout:
//!
//! - `t · t = 1`, hence `t⁻¹ = t`
//! - `ℓ(w · t) ≢ ℓ(w) (mod 2)`, hence `ℓ(t)` is odd
//! - `IsRightInversion(w, t) ⇔ ℓ(w · t) < ℓ(w)`
//! - `IsLeftInversion(w, t) ⇔ ℓ(t · w) < ℓ(w)`

use crate::error::Result;
use crate::group::{CoxeterSystem, Group, LengthOracle};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// A reflection `t = conjugator · s_generator · conjugator⁻¹`.
///
/// Equality and hashing look at `value` only: the same reflection arises
/// from many (generator, conjugator) pairs.
#[derive(Debug, Clone, Serialize)]
pub struct Reflection<E> {
    generator: usize,
    conjugator: E,
    value: E,
}

impl<E> Reflection<E> {
    pub(crate) fn new(generator: usize, conjugator: E, value: E) -> Self {
        Self {
            generator,
            conjugator,
            value,
        }
    }

    /// Index of the simple generator this reflection is conjugate to.
    pub fn generator(&self) -> usize {
        self.generator
    }

    pub fn conjugator(&self) -> &E {
        &self.conjugator
    }

    /// The group element `t` itself.
    pub fn value(&self) -> &E {
        &self.value
    }

    pub fn into_value(self) -> E {
        self.value
    }
}

impl<E: PartialEq> PartialEq for Reflection<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E: Eq> Eq for Reflection<E> {}

impl<E: Hash> Hash for Reflection<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<G: Group> CoxeterSystem<G> {
    /// The simple reflection `s_i`, with identity conjugator.
    pub fn simple_reflection(&self, i: usize) -> Result<Reflection<G::Element>> {
        Ok(Reflection {
            generator: i,
            conjugator: self.group().one(),
            value: self.simple(i)?.clone(),
        })
    }

    /// The reflection `w · s_i · w⁻¹`.
    pub fn reflection(&self, conjugator: G::Element, i: usize) -> Result<Reflection<G::Element>> {
        let value = self.conjugate(&conjugator, self.simple(i)?);
        Ok(Reflection {
            generator: i,
            conjugator,
            value,
        })
    }

    /// `w · t · w⁻¹` is again a reflection.
    pub fn conjugate_reflection(
        &self,
        w: &G::Element,
        t: &Reflection<G::Element>,
    ) -> Reflection<G::Element> {
        Reflection {
            generator: t.generator,
            conjugator: self.group().mul(w, &t.conjugator),
            value: self.conjugate(w, &t.value),
        }
    }

    /// Check `t · t = 1`.
    pub fn is_involution(&self, t: &Reflection<G::Element>) -> bool {
        let g = self.group();
        g.mul(&t.value, &t.value) == g.one()
    }

    /// Check the tag against the value: `conjugator · s_generator ·
    /// conjugator⁻¹ = value`.
    pub fn tag_is_consistent(&self, t: &Reflection<G::Element>) -> bool {
        self.simple(t.generator)
            .is_ok_and(|s| self.conjugate(&t.conjugator, s) == t.value)
    }
}

impl<G: LengthOracle> CoxeterSystem<G> {
    pub fn length(&self, w: &G::Element) -> usize {
        self.group().length(w)
    }

    pub fn length_is_odd(&self, t: &Reflection<G::Element>) -> bool {
        self.length(&t.value) % 2 == 1
    }

    /// `ℓ(w · t) < ℓ(w)`.
    pub fn is_right_inversion(&self, w: &G::Element, t: &Reflection<G::Element>) -> bool {
        self.length(&self.group().mul(w, &t.value)) < self.length(w)
    }

    /// `ℓ(t · w) < ℓ(w)`.
    pub fn is_left_inversion(&self, w: &G::Element, t: &Reflection<G::Element>) -> bool {
        self.length(&self.group().mul(&t.value, w)) < self.length(w)
    }

    /// `ℓ(w · s_i) < ℓ(w)`.
    pub fn is_right_descent(&self, w: &G::Element, i: usize) -> Result<bool> {
        let ws = self.group().mul(w, self.simple(i)?);
        Ok(self.length(&ws) < self.length(w))
    }

    /// `ℓ(s_i · w) < ℓ(w)`.
    pub fn is_left_descent(&self, w: &G::Element, i: usize) -> Result<bool> {
        let sw = self.group().mul(self.simple(i)?, w);
        Ok(self.length(&sw) < self.length(w))
    }

    pub fn right_descents(&self, w: &G::Element) -> Vec<usize> {
        let g = self.group();
        let len = self.length(w);
        self.generators()
            .iter()
            .enumerate()
            .filter(|(_, s)| self.length(&g.mul(w, s)) < len)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn left_descents(&self, w: &G::Element) -> Vec<usize> {
        let g = self.group();
        let len = self.length(w);
        self.generators()
            .iter()
            .enumerate()
            .filter(|(_, s)| self.length(&g.mul(s, w)) < len)
            .map(|(i, _)| i)
            .collect()
    }


    /// Decide whether `t` is a reflection, returning a certificate if so.
    ///
    /// Conjugates by a right descent `s` with `ℓ(s t s) = ℓ(t) - 2` until a
    /// simple generator is reached. Every success is a genuine certificate:
    /// the returned conjugator `c` and generator `i` satisfy
    /// `t = c · s_i · c⁻¹`.
    pub fn recognize(&self, t: &G::Element) -> Option<Reflection<G::Element>> {
        let g = self.group();
        let mut current = t.clone();
        let mut conjugator = g.one();

        loop {
            let len = self.length(&current);
            if len % 2 == 0 {
                return None;
            }
            if len == 1 {
                let generator = self.generators().iter().position(|s| *s == current)?;
                tracing::trace!(generator, "recognized reflection");
                return Some(Reflection {
                    generator,
                    conjugator,
                    value: t.clone(),
                });
            }

            let (s, shorter) = self.right_descents(&current).into_iter().find_map(|i| {
                let s = &self.generators()[i];
                let candidate = g.mul(&g.mul(s, &current), s);
                (self.length(&candidate) + 2 == len).then(|| (s.clone(), candidate))
            })?;

            // t = c · current · c⁻¹ = (c · s) · (s · current · s) · (c · s)⁻¹
            conjugator = g.mul(&conjugator, &s);
            current = shorter;
        }
    }

    pub fn is_reflection(&self, t: &G::Element) -> bool {
        self.recognize(t).is_some()
    }
}
