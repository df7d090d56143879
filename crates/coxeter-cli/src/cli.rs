use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "coxeter",
    about = "Coxeter: inversion sequences and reduced-word checks over reference Coxeter systems",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and validate a Coxeter matrix
    Matrix {
        /// Cartan type name (A3, B4, D5, E8, F4, G2, H3, I2(5), ~A2)
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        cartan: Option<String>,

        /// Path to a TOML or JSON file with a `matrix` table of bond orders
        #[arg(long)]
        file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the right and left inversion sequences of a word
    Inversions {
        /// System: S<n>, I2(<m>), I2(inf), or a TOML/JSON config path
        #[arg(long)]
        system: String,

        /// Generator indices, space- or comma-separated
        word: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every reduced-word check and print the verification report
    Verify {
        /// System: S<n>, I2(<m>), I2(inf), or a TOML/JSON config path
        #[arg(long)]
        system: String,

        /// Generator indices, space- or comma-separated
        word: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recognize the value of a word as a reflection
    Reflection {
        /// System: S<n>, I2(<m>), I2(inf), or a TOML/JSON config path
        #[arg(long)]
        system: String,

        /// Generator indices, space- or comma-separated
        word: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
