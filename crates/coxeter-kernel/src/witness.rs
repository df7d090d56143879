//! Verification reports with deterministic witness identifiers.
//!
//! Two runs given the same word in the same system MUST produce identical
//! witness IDs.
//!
//! Algorithm:
//! 1. Build the canonical witness key (schema, class, word, elementLength,
//!    redundancy)
//! 2. Serialize it canonically: sorted keys, no whitespace, integer numbers
//! 3. witnessId = "w1_" || base32hex_lower(SHA256(keyBytes))

use crate::error::Result;
use crate::group::{CoxeterSystem, LengthOracle};
use crate::word::Word;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Witness classes.
pub mod class {
    pub const REDUCED: &str = "reduced_word";
    pub const NOT_REDUCED: &str = "non_reduced_word";
}

/// Compute a witness ID from the canonical key fields.
pub fn compute_witness_id(
    class: &str,
    word: &Word,
    element_length: usize,
    redundancy: Option<&Value>,
) -> String {
    let key = canonical_witness_key(class, word, element_length, redundancy);
    let hash = Sha256::digest(canonical_bytes(&key));
    format!("w1_{}", base32hex_lower_no_pad(&hash))
}

fn canonical_witness_key(
    class: &str,
    word: &Word,
    element_length: usize,
    redundancy: Option<&Value>,
) -> Value {
    let mut map = serde_json::Map::new();
    map.insert("schema".to_string(), Value::Number(1.into()));
    map.insert("class".to_string(), Value::String(class.to_string()));
    map.insert(
        "word".to_string(),
        Value::Array(word.iter().map(|i| Value::Number(i.into())).collect()),
    );
    map.insert(
        "elementLength".to_string(),
        Value::Number(element_length.into()),
    );
    map.insert(
        "redundancy".to_string(),
        redundancy.cloned().unwrap_or(Value::Null),
    );
    Value::Object(map)
}

/// Canonical JSON bytes: object keys sorted lexicographically, no
/// insignificant whitespace.
fn canonical_bytes(value: &Value) -> Vec<u8> {
    match value {
        Value::Null => b"null".to_vec(),
        Value::Bool(true) => b"true".to_vec(),
        Value::Bool(false) => b"false".to_vec(),
        Value::Number(n) => n.to_string().into_bytes(),
        Value::String(s) => escape_string(s),
        Value::Array(items) => {
            let mut buf = vec![b'['];
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                buf.extend_from_slice(&canonical_bytes(item));
            }
            buf.push(b']');
            buf
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let mut buf = vec![b'{'];
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                buf.extend_from_slice(&escape_string(key));
                buf.push(b':');
                buf.extend_from_slice(&canonical_bytes(&map[*key]));
            }
            buf.push(b'}');
            buf
        }
    }
}

fn escape_string(s: &str) -> Vec<u8> {
    // Display on a JSON string value yields its escaped, quoted form.
    Value::String(s.to_string()).to_string().into_bytes()
}

/// RFC 4648 base32hex encoding, lowercase, without padding.
fn base32hex_lower_no_pad(data: &[u8]) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuv";

    let mut result = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut bits: u64 = 0;
    let mut num_bits: u32 = 0;

    for &byte in data {
        bits = (bits << 8) | u64::from(byte);
        num_bits += 8;

        while num_bits >= 5 {
            num_bits -= 5;
            let idx = ((bits >> num_bits) & 0x1f) as usize;
            result.push(ALPHABET[idx] as char);
        }
    }

    if num_bits > 0 {
        let idx = ((bits << (5 - num_bits)) & 0x1f) as usize;
        result.push(ALPHABET[idx] as char);
    }

    result
}

/// Serializable summary of a [`crate::reduced::Redundancy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedundancySummary {
    pub first: usize,
    pub second: usize,
    /// The repeated reflection, rendered with the element's `Display`.
    pub reflection: String,
    pub shortened: Word,
}

/// Outcome of running every reduced-word check on one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Deterministic witness ID.
    pub witness_id: String,

    /// Witness class: [`class::REDUCED`] or [`class::NOT_REDUCED`].
    pub class: String,

    pub word: Word,

    /// `ℓ(eval(ω))`.
    pub element_length: usize,

    pub reduced: bool,

    pub right_inversions_distinct: bool,

    pub left_inversions_distinct: bool,

    /// Inversion membership of both sequences. Only checked for reduced
    /// words, where it is guaranteed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inversions_verified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redundancy: Option<RedundancySummary>,
}

impl VerificationReport {
    /// A reduced word must pass every check; a non-reduced one must carry
    /// a redundancy.
    pub fn is_consistent(&self) -> bool {
        if self.reduced {
            self.right_inversions_distinct
                && self.left_inversions_distinct
                && self.inversions_verified == Some(true)
                && self.redundancy.is_none()
        } else {
            self.redundancy.is_some()
        }
    }
}

impl<G: LengthOracle> CoxeterSystem<G> {
    /// Run every reduced-word check on `ω` and bundle the outcome.
    pub fn verify(&self, word: &Word) -> Result<VerificationReport> {
        let element = self.eval(word)?;
        let element_length = self.length(&element);
        let reduced = element_length == word.len();

        let ris = self.right_inversions(word)?;
        let lis = self.left_inversions(word)?;

        let inversions_verified = if reduced {
            let certified = self.certify(word)?;
            Some(
                certified.right_inversions_are_inversions()
                    && certified.left_inversions_are_inversions(),
            )
        } else {
            None
        };

        let redundancy = self
            .find_redundancy(word)?
            .map(|r| RedundancySummary {
                first: r.first,
                second: r.second,
                reflection: r.reflection.to_string(),
                shortened: r.shortened,
            });

        let witness_class = if reduced {
            class::REDUCED
        } else {
            class::NOT_REDUCED
        };
        let redundancy_key = redundancy.as_ref().map(|r| {
            serde_json::json!({
                "first": r.first,
                "second": r.second,
                "shortened": r.shortened,
            })
        });
        let witness_id =
            compute_witness_id(witness_class, word, element_length, redundancy_key.as_ref());

        tracing::debug!(%word, reduced, %witness_id, "verification complete");
        Ok(VerificationReport {
            witness_id,
            class: witness_class.to_string(),
            word: word.clone(),
            element_length,
            reduced,
            right_inversions_distinct: ris.is_duplicate_free(),
            left_inversions_distinct: lis.is_duplicate_free(),
            inversions_verified,
            redundancy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DihedralGroup;

    #[test]
    fn witness_id_is_deterministic() {
        let word = Word::new(vec![0, 1, 0]);
        let a = compute_witness_id(class::REDUCED, &word, 3, None);
        let b = compute_witness_id(class::REDUCED, &word, 3, None);
        assert_eq!(a, b);
        assert!(a.starts_with("w1_"));
        // 256 bits in 5-bit groups.
        assert_eq!(a.len(), 3 + 52);
    }

    #[test]
    fn witness_id_depends_on_every_key_field() {
        let word = Word::new(vec![0, 1, 0]);
        let base = compute_witness_id(class::REDUCED, &word, 3, None);
        assert_ne!(base, compute_witness_id(class::NOT_REDUCED, &word, 3, None));
        assert_ne!(base, compute_witness_id(class::REDUCED, &word, 1, None));
        assert_ne!(
            base,
            compute_witness_id(class::REDUCED, &Word::new(vec![1, 0, 1]), 3, None)
        );
        assert_ne!(
            base,
            compute_witness_id(class::REDUCED, &word, 3, Some(&serde_json::json!({})))
        );
    }

    #[test]
    fn canonical_bytes_sort_keys() {
        let value = serde_json::json!({"b": 1, "a": [true, null, "x"]});
        assert_eq!(
            canonical_bytes(&value),
            br#"{"a":[true,null,"x"],"b":1}"#.to_vec()
        );
    }

    #[test]
    fn base32hex_known_vectors() {
        // RFC 4648 §10 test vectors, lowercased and unpadded.
        assert_eq!(base32hex_lower_no_pad(b""), "");
        assert_eq!(base32hex_lower_no_pad(b"f"), "co");
        assert_eq!(base32hex_lower_no_pad(b"fo"), "cpng");
        assert_eq!(base32hex_lower_no_pad(b"foobar"), "cpnmuoj1e8");
    }

    #[test]
    fn reports_are_consistent() {
        let system = DihedralGroup::new(3).system().unwrap();
        let reduced = system.verify(&Word::new(vec![0, 1, 0])).unwrap();
        assert!(reduced.reduced);
        assert_eq!(reduced.class, class::REDUCED);
        assert!(reduced.is_consistent());

        let cycle = system.verify(&Word::alternating(0, 1, 6)).unwrap();
        assert!(!cycle.reduced);
        assert_eq!(cycle.element_length, 0);
        assert!(!cycle.right_inversions_distinct);
        assert!(!cycle.left_inversions_distinct);
        assert_eq!(cycle.inversions_verified, None);
        assert!(cycle.is_consistent());
        assert_ne!(reduced.witness_id, cycle.witness_id);
    }

    #[test]
    fn report_round_trips_through_json() {
        let system = DihedralGroup::new(4).system().unwrap();
        let report = system.verify(&Word::new(vec![1, 0, 0])).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: VerificationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
