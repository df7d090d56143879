use crate::config::LoadedSystem;
use crate::support::{exit_with, load_system_or_exit, parse_word_or_exit, print_json, yes_no};
use coxeter_kernel::{CoxeterSystem, LengthOracle, Word};
use serde_json::{Value, json};

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
    let element_length = system.length(&element);
    let certificate = system.recognize(&element);

    if json_output {
        let certificate = certificate.as_ref().map_or(Value::Null, |t| {
            json!({
                "generator": t.generator(),
                "conjugator": t.conjugator().to_string(),
            })
        });
        print_json(&json!({
            "system": label,
            "word": word,
            "element": element.to_string(),
            "elementLength": element_length,
            "isReflection": !certificate.is_null(),
            "certificate": certificate,
        }));
    } else {
        println!("coxeter reflection {word} --system {label}");
        println!("  Element: {element} (length {element_length})");
        println!("  Reflection: {}", yes_no(certificate.is_some()));
        if let Some(t) = certificate {
            println!(
                "  Certificate: {} · s{} · {}⁻¹",
                t.conjugator(),
                t.generator(),
                t.conjugator()
            );
        }
    }
}
