//! System and matrix configuration: short names and TOML/JSON files.
//!
//! A system file names one reference model:
//!
//! ```toml
//! model = "symmetric"
//! degree = 4
//! ```
//!
//! ```json
//! {"model": "dihedral", "order": 5}
//! ```
//!
//! A matrix file holds a square `matrix` table of bond orders, `0` for `∞`.

use coxeter_kernel::{CoxeterError, CoxeterMatrix, CoxeterSystem, DihedralGroup, SymmetricGroup};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("unsupported config extension for {0} (expected .toml or .json)")]
    UnsupportedExtension(String),

    #[error("unknown system `{0}` (expected S<n>, I2(<m>), I2(inf), or a config path)")]
    UnknownSystem(String),

    #[error(transparent)]
    Kernel(#[from] CoxeterError),
}

/// One of the reference models the kernel ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum SystemConfig {
    /// `S_degree`, type `A_{degree-1}`.
    Symmetric { degree: usize },
    /// `I_2(order)`; `order = 0` is the infinite dihedral group.
    Dihedral { order: u32 },
}

impl SystemConfig {
    /// Resolve a `--system` argument: a short name first, then a file path.
    pub fn resolve(spec: &str) -> Result<Self, ConfigError> {
        if let Some(config) = Self::parse_name(spec) {
            return Ok(config);
        }
        let path = Path::new(spec);
        if path.is_file() {
            return load(path);
        }
        Err(ConfigError::UnknownSystem(spec.to_string()))
    }

    fn parse_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(degree) = name.strip_prefix(['S', 's']) {
            return degree
                .parse()
                .ok()
                .map(|degree| Self::Symmetric { degree });
        }
        let inner = name
            .strip_prefix("I2(")
            .or_else(|| name.strip_prefix("i2("))?
            .strip_suffix(')')?;
        let order = match inner.trim() {
            "inf" | "∞" => 0,
            other => other.parse().ok()?,
        };
        Some(Self::Dihedral { order })
    }

    pub fn build(self) -> Result<LoadedSystem, CoxeterError> {
        let loaded = match self {
            Self::Symmetric { degree } => {
                LoadedSystem::Symmetric(SymmetricGroup::new(degree).system()?)
            }
            Self::Dihedral { order } => LoadedSystem::Dihedral(DihedralGroup::new(order).system()?),
        };
        tracing::debug!(system = %self, rank = loaded.rank(), "system loaded");
        Ok(loaded)
    }
}

impl std::fmt::Display for SystemConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symmetric { degree } => write!(f, "S{degree}"),
            Self::Dihedral { order: 0 } => write!(f, "I2(inf)"),
            Self::Dihedral { order } => write!(f, "I2({order})"),
        }
    }
}

/// A constructed reference system.
pub enum LoadedSystem {
    Symmetric(CoxeterSystem<SymmetricGroup>),
    Dihedral(CoxeterSystem<DihedralGroup>),
}

impl LoadedSystem {
    pub fn rank(&self) -> usize {
        match self {
            Self::Symmetric(system) => system.rank(),
            Self::Dihedral(system) => system.rank(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MatrixFile {
    matrix: CoxeterMatrix,
}

/// Load and validate a matrix file. Validation runs during deserialization.
pub fn load_matrix(path: &Path) -> Result<CoxeterMatrix, ConfigError> {
    load::<MatrixFile>(path).map(|file| file.matrix)
}

fn load<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: display,
            source,
        }),
        Some("json") => serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: display,
            source,
        }),
        _ => Err(ConfigError::UnsupportedExtension(display)),
    }
}
