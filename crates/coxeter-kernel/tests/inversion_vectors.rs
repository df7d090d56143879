//! Integration tests: run the inversion-sequence test vectors.
//!
//! Each fixture in tests/fixtures/ has:
//! - case.json: the system name and the word
//! - expect.json: the expected inversion sequences and verdict
//!
//! These tests load the fixtures, build the named system, compute both
//! inversion sequences and the verification report, and compare the
//! output to the expected result, including the exact redundancy located.

use coxeter_kernel::{CoxeterSystem, DihedralGroup, LengthOracle, SymmetricGroup, Word};
use serde_json::{Value, json};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn summarize<G: LengthOracle>(system: &CoxeterSystem<G>, word: &Word) -> Value {
    let ris = system.right_inversions(word).expect("right inversions");
    let lis = system.left_inversions(word).expect("left inversions");
    let report = system.verify(word).expect("verification report");
    assert!(report.is_consistent(), "inconsistent report for {word}");

    json!({
        "reduced": report.reduced,
        "elementLength": report.element_length,
        "rightInversions": ris.values().map(ToString::to_string).collect::<Vec<_>>(),
        "leftInversions": lis.values().map(ToString::to_string).collect::<Vec<_>>(),
        "redundancy": report.redundancy.map(|r| json!({
            "first": r.first,
            "second": r.second,
            "shortened": r.shortened,
        })),
    })
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);

    let case_path = dir.join("case.json");
    let expect_path = dir.join("expect.json");

    let case_str = std::fs::read_to_string(&case_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", case_path.display()));
    let expect_str = std::fs::read_to_string(&expect_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", expect_path.display()));

    let case: Value = serde_json::from_str(&case_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", case_path.display()));
    let expected: Value = serde_json::from_str(&expect_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", expect_path.display()));

    let word: Word = serde_json::from_value(case["word"].clone())
        .unwrap_or_else(|e| panic!("failed to parse word in {}: {e}", case_path.display()));

    let system_name = case["system"].as_str().expect("missing system field");
    let result = if let Some(degree) = system_name.strip_prefix('S') {
        let degree: usize = degree.parse().expect("symmetric degree");
        summarize(&SymmetricGroup::new(degree).system().unwrap(), &word)
    } else {
        let order = match system_name.trim_start_matches("I2(").trim_end_matches(')') {
            "inf" => 0,
            m => m.parse().expect("dihedral order"),
        };
        summarize(&DihedralGroup::new(order).system().unwrap(), &word)
    };

    assert_eq!(
        result,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&result).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

#[test]
fn golden_dihedral3_longest() {
    run_fixture("golden_dihedral3_longest");
}

#[test]
fn golden_dihedral5_reduced() {
    run_fixture("golden_dihedral5_reduced");
}

#[test]
fn golden_empty_word() {
    run_fixture("golden_empty_word");
}

#[test]
fn golden_infinite_dihedral() {
    run_fixture("golden_infinite_dihedral");
}

#[test]
fn golden_s4_longest() {
    run_fixture("golden_s4_longest");
}

#[test]
fn adversarial_dihedral3_full_cycle() {
    run_fixture("adversarial_dihedral3_full_cycle");
}

#[test]
fn adversarial_s4_square() {
    run_fixture("adversarial_s4_square");
}

#[test]
fn adversarial_s4_hidden_braid() {
    run_fixture("adversarial_s4_hidden_braid");
}
