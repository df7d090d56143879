use crate::config::LoadedSystem;
use crate::support::{exit_with, load_system_or_exit, parse_word_or_exit, print_json, yes_no};
use coxeter_kernel::{CoxeterSystem, LengthOracle, Word};
use serde_json::json;

pub fn run(system: String, word: Vec<String>, json_output: bool) {
    let loaded = load_system_or_exit(&system);
    let word = parse_word_or_exit(&word);
    match &loaded {
        LoadedSystem::Symmetric(s) => render(s, &system, &word, json_output),
        LoadedSystem::Dihedral(s) => render(s, &system, &word, json_output),
    }
}

fn render<G: LengthOracle>(system: &CoxeterSystem<G>, label: &str, word: &Word, json_output: bool) {
    let report = system.verify(word).unwrap_or_else(|e| exit_with(e));
    if !report.is_consistent() {
        tracing::warn!(%word, "verification report is internally inconsistent");
    }

    if json_output {
        print_json(&json!({
            "system": label,
            "report": report,
        }));
    } else {
        println!("coxeter verify {word} --system {label}");
        println!("  Witness: {}", report.witness_id);
        println!("  Element length: {}", report.element_length);
        println!("  Reduced: {}", yes_no(report.reduced));
        println!(
            "  Right inversions distinct: {}",
            yes_no(report.right_inversions_distinct)
        );
        println!(
            "  Left inversions distinct: {}",
            yes_no(report.left_inversions_distinct)
        );
        if let Some(verified) = report.inversions_verified {
            println!("  Inversion membership: {}", yes_no(verified));
        }
        if let Some(redundancy) = &report.redundancy {
            println!(
                "  Redundant letters: positions {} and {} (reflection {})",
                redundancy.first, redundancy.second, redundancy.reflection
            );
            println!("  Shortened word: {}", redundancy.shortened);
        }
    }
}
