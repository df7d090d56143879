use crate::config::LoadedSystem;
use crate::support::{display_all, exit_with, load_system_or_exit, parse_word_or_exit, print_json};
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
    let element = system.eval(word).unwrap_or_else(|e| exit_with(e));
    let ris = system.right_inversions(word).unwrap_or_else(|e| exit_with(e));
    let lis = system.left_inversions(word).unwrap_or_else(|e| exit_with(e));
    let element_length = system.length(&element);
    let right = display_all(ris.values());
    let left = display_all(lis.values());

    if json_output {
        print_json(&json!({
            "system": label,
            "word": word,
            "element": element.to_string(),
            "elementLength": element_length,
            "reduced": element_length == word.len(),
            "rightInversions": right,
            "leftInversions": left,
            "rightFirstDuplicate": ris.first_duplicate(),
            "leftFirstDuplicate": lis.first_duplicate(),
        }));
    } else {
        println!("coxeter inversions {word} --system {label}");
        println!("  Element: {element} (length {element_length})");
        println!("  Right inversions:");
        for (j, t) in right.iter().enumerate() {
            println!("    {j}: {t}");
        }
        println!("  Left inversions:");
        for (j, t) in left.iter().enumerate() {
            println!("    {j}: {t}");
        }
    }
}
