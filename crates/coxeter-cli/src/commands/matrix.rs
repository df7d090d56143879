use crate::config::load_matrix;
use crate::support::{exit_with, print_json};
use coxeter_kernel::{CartanType, CoxeterMatrix};
use serde_json::json;
use std::path::Path;

pub fn run(cartan: Option<String>, file: Option<String>, json_output: bool) {
    let (label, matrix) = match (cartan, file) {
        (_, Some(path)) => {
            let matrix = load_matrix(Path::new(&path)).unwrap_or_else(|e| exit_with(e));
            (path, matrix)
        }
        (Some(name), None) => {
            let cartan: CartanType = name.parse().unwrap_or_else(|e| exit_with(e));
            let matrix = cartan.matrix().unwrap_or_else(|e| exit_with(e));
            (cartan.to_string(), matrix)
        }
        (None, None) => exit_with("either a Cartan type or --file is required"),
    };

    if json_output {
        print_json(&json!({
            "source": label,
            "rank": matrix.rank(),
            "matrix": matrix,
            "infiniteBonds": infinite_bonds(&matrix),
        }));
    } else {
        println!("coxeter matrix {label}");
        println!("  Rank: {}", matrix.rank());
        for row in matrix.to_string().lines() {
            println!("  {row}");
        }
    }
}

/// Pairs `i < j` with no braid relation.
fn infinite_bonds(matrix: &CoxeterMatrix) -> Vec<[usize; 2]> {
    matrix
        .rows()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .skip(i + 1)
                .filter(|(_, bond)| bond.is_infinite())
                .map(move |(j, _)| [i, j])
        })
        .collect()
}
