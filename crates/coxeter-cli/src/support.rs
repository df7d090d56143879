use crate::config::{LoadedSystem, SystemConfig};
use coxeter_kernel::Word;
use serde::Serialize;

pub fn load_system_or_exit(spec: &str) -> LoadedSystem {
    let config = SystemConfig::resolve(spec).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    config.build().unwrap_or_else(|e| {
        eprintln!("error: failed to build {config}: {e}");
        std::process::exit(1);
    })
}

/// Join positional arguments so `0 1 0`, `0,1,0` and `[0, 1, 0]` all parse.
pub fn parse_word_or_exit(args: &[String]) -> Word {
    args.join(" ").parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn exit_with<E: std::fmt::Display>(err: E) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

pub fn print_json<T: Serialize + ?Sized>(payload: &T) {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => println!("{text}"),
        Err(e) => exit_with(format!("json serialization: {e}")),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn display_all<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    items.into_iter().map(|item| item.to_string()).collect()
}
