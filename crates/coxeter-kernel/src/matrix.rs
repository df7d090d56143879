//! Coxeter matrices and bond orders.
//!
//! A Coxeter matrix M over generators `0..n` is a symmetric table with
//! `M(i, i) = 1` and `M(i, j) ≥ 2` off the diagonal. The entry encodes the
//! relation `(s_i s_j)^M(i, j) = 1`. The bond order `0` stands for `∞`:
//! no relation between `s_i` and `s_j` at all.
//!
//! Matrices are validated once, at construction. Downstream code never
//! re-checks them.
//!
//! Matrices are dense and every finite bond is checked by repeated
//! multiplication when a system is built, so both the rank and the finite
//! bond orders are capped ([`MAX_RANK`], [`MAX_BOND_ORDER`]).

use crate::error::{CoxeterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest rank a matrix may have.
pub const MAX_RANK: usize = 1024;

/// Largest finite bond order a matrix may carry.
pub const MAX_BOND_ORDER: u32 = 1 << 16;

/// The order of `s_i s_j`, with `0` as the sentinel for `∞`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BondOrder(pub u32);

impl BondOrder {
    /// `(s_i s_j)^k ≠ 1` for every `k > 0`.
    pub const INFINITE: Self = Self(0);

    /// The finite order, or `None` for `∞`.
    pub fn order(self) -> Option<u32> {
        if self.is_infinite() {
            None
        } else {
            Some(self.0)
        }
    }

    pub fn is_infinite(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order() {
            Some(m) => write!(f, "{m}"),
            None => write!(f, "∞"),
        }
    }
}

/// A validated Coxeter matrix.
///
/// Serializes as a square array of bond orders. Deserialization runs the
/// same validation as [`CoxeterMatrix::new`], so a malformed table never
/// becomes a value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<BondOrder>>", into = "Vec<Vec<BondOrder>>")]
pub struct CoxeterMatrix {
    entries: Vec<Vec<BondOrder>>,
}

impl CoxeterMatrix {
    /// Validate a bond-order table.
    ///
    /// Rejects non-square tables, diagonal entries other than 1, asymmetric
    /// entries, and off-diagonal entries equal to 1.
    pub fn new(entries: Vec<Vec<BondOrder>>) -> Result<Self> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// Build from plain integer rows (`0` = `∞`).
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|row| row.as_ref().iter().copied().map(BondOrder).collect())
                .collect(),
        )
    }

    /// Build an `n × n` matrix where every unlisted pair commutes (bond 2).
    pub fn from_edges(n: usize, edges: &[(usize, usize, u32)]) -> Result<Self> {
        check_rank(n)?;
        let mut entries = vec![vec![BondOrder(2); n]; n];
        for (i, row) in entries.iter_mut().enumerate() {
            row[i] = BondOrder(1);
        }
        for &(i, j, m) in edges {
            if i >= n || j >= n {
                return Err(CoxeterError::MalformedCoxeterMatrix {
                    row: i,
                    col: j,
                    reason: format!("edge endpoint outside rank {n}"),
                });
            }
            entries[i][j] = BondOrder(m);
            entries[j][i] = BondOrder(m);
        }
        Self::new(entries)
    }

    /// Number of simple generators.
    pub fn rank(&self) -> usize {
        self.entries.len()
    }

    /// The bond order `M(i, j)`.
    pub fn bond(&self, i: usize, j: usize) -> Result<BondOrder> {
        let rank = self.rank();
        for index in [i, j] {
            if index >= rank {
                return Err(CoxeterError::InvalidGenerator { index, rank });
            }
        }
        Ok(self.entries[i][j])
    }

    /// Rows of the table, in generator order.
    pub fn rows(&self) -> impl Iterator<Item = &[BondOrder]> {
        self.entries.iter().map(Vec::as_slice)
    }

    /// Type `A_n`: a path of `n` nodes.
    pub fn a(n: usize) -> Result<Self> {
        check_rank(n)?;
        let edges: Vec<_> = (1..n).map(|i| (i - 1, i, 3)).collect();
        Self::from_edges(n, &edges)
    }

    /// Type `B_n` (equivalently `C_n`): a path whose last bond is 4.
    pub fn b(n: usize) -> Result<Self> {
        if n < 2 {
            return Err(CoxeterError::UnknownCartanType(format!("B{n}")));
        }
        check_rank(n)?;
        let edges: Vec<_> = (1..n)
            .map(|i| (i - 1, i, if i == n - 1 { 4 } else { 3 }))
            .collect();
        Self::from_edges(n, &edges)
    }

    /// Type `D_n`: a path of `n - 1` nodes with a fork at node `n - 3`.
    pub fn d(n: usize) -> Result<Self> {
        if n < 4 {
            return Err(CoxeterError::UnknownCartanType(format!("D{n}")));
        }
        check_rank(n)?;
        let mut edges: Vec<_> = (1..n - 1).map(|i| (i - 1, i, 3)).collect();
        edges.push((n - 3, n - 1, 3));
        Self::from_edges(n, &edges)
    }

    /// Type `E_n` for `n ∈ {6, 7, 8}`, in Bourbaki labelling.
    pub fn e(n: usize) -> Result<Self> {
        if !(6..=8).contains(&n) {
            return Err(CoxeterError::UnknownCartanType(format!("E{n}")));
        }
        let edges: Vec<_> = [(0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)]
            .into_iter()
            .filter(|&(_, j)| j < n)
            .map(|(i, j)| (i, j, 3))
            .collect();
        Self::from_edges(n, &edges)
    }

    pub fn f4() -> Result<Self> {
        Self::from_edges(4, &[(0, 1, 3), (1, 2, 4), (2, 3, 3)])
    }

    pub fn g2() -> Result<Self> {
        Self::i2(6)
    }

    /// Type `H_n` for `n ∈ {3, 4}`.
    pub fn h(n: usize) -> Result<Self> {
        match n {
            3 => Self::from_edges(3, &[(0, 1, 5), (1, 2, 3)]),
            4 => Self::from_edges(4, &[(0, 1, 5), (1, 2, 3), (2, 3, 3)]),
            _ => Err(CoxeterError::UnknownCartanType(format!("H{n}"))),
        }
    }

    /// The dihedral type `I_2(m)`; `m = 0` is the infinite dihedral group.
    pub fn i2(m: u32) -> Result<Self> {
        Self::from_edges(2, &[(0, 1, m)])
    }

    /// Affine type `Ã_n`: a cycle of `n + 1` nodes.
    ///
    /// `Ã_1` is the infinite dihedral group.
    pub fn affine_a(n: usize) -> Result<Self> {
        match n {
            0 => Err(CoxeterError::UnknownCartanType("~A0".to_string())),
            1 => Self::i2(0),
            _ => {
                check_rank(n.saturating_add(1))?;
                let edges: Vec<_> = (0..=n).map(|i| (i, (i + 1) % (n + 1), 3)).collect();
                Self::from_edges(n + 1, &edges)
            }
        }
    }
}

impl TryFrom<Vec<Vec<BondOrder>>> for CoxeterMatrix {
    type Error = CoxeterError;

    fn try_from(entries: Vec<Vec<BondOrder>>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<CoxeterMatrix> for Vec<Vec<BondOrder>> {
    fn from(matrix: CoxeterMatrix) -> Self {
        matrix.entries
    }
}

impl fmt::Display for CoxeterMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, bond) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{bond}")?;
            }
        }
        Ok(())
    }
}

fn check_rank(n: usize) -> Result<()> {
    if n > MAX_RANK {
        return Err(CoxeterError::LimitExceeded {
            what: "rank",
            value: n as u64,
            limit: MAX_RANK as u64,
        });
    }
    Ok(())
}

fn validate(entries: &[Vec<BondOrder>]) -> Result<()> {
    let n = entries.len();
    check_rank(n)?;
    for (row, r) in entries.iter().enumerate() {
        if r.len() != n {
            return Err(CoxeterError::MalformedCoxeterMatrix {
                row,
                col: r.len(),
                reason: format!("row has {} entries, expected {n}", r.len()),
            });
        }
    }

    for i in 0..n {
        if entries[i][i] != BondOrder(1) {
            return Err(CoxeterError::MalformedCoxeterMatrix {
                row: i,
                col: i,
                reason: format!("diagonal entry must be 1, found {}", entries[i][i]),
            });
        }
        for j in (i + 1)..n {
            let (upper, lower) = (entries[i][j], entries[j][i]);
            if upper != lower {
                return Err(CoxeterError::MalformedCoxeterMatrix {
                    row: i,
                    col: j,
                    reason: format!("asymmetric entry: {upper} vs {lower} at ({j}, {i})"),
                });
            }
            if upper == BondOrder(1) {
                return Err(CoxeterError::MalformedCoxeterMatrix {
                    row: i,
                    col: j,
                    reason: "off-diagonal entry must not be 1".to_string(),
                });
            }
            if upper.0 > MAX_BOND_ORDER {
                return Err(CoxeterError::LimitExceeded {
                    what: "bond order",
                    value: u64::from(upper.0),
                    limit: u64::from(MAX_BOND_ORDER),
                });
            }
        }
    }

    Ok(())
}

// ─── Cartan types ───────────────────────────────────────────────────────────

/// Named Coxeter types, parsed from short names such as `A3`, `I2(5)`,
/// `E8` or `~A2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartanType {
    A(usize),
    B(usize),
    D(usize),
    E(usize),
    F4,
    G2,
    H(usize),
    /// Dihedral type; `0` is `I_2(∞)`.
    I2(u32),
    AffineA(usize),
}

impl CartanType {
    /// Build the Coxeter matrix of this type.
    pub fn matrix(self) -> Result<CoxeterMatrix> {
        match self {
            Self::A(n) => CoxeterMatrix::a(n),
            Self::B(n) => CoxeterMatrix::b(n),
            Self::D(n) => CoxeterMatrix::d(n),
            Self::E(n) => CoxeterMatrix::e(n),
            Self::F4 => CoxeterMatrix::f4(),
            Self::G2 => CoxeterMatrix::g2(),
            Self::H(n) => CoxeterMatrix::h(n),
            Self::I2(m) => CoxeterMatrix::i2(m),
            Self::AffineA(n) => CoxeterMatrix::affine_a(n),
        }
    }
}

impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(n) => write!(f, "A{n}"),
            Self::B(n) => write!(f, "B{n}"),
            Self::D(n) => write!(f, "D{n}"),
            Self::E(n) => write!(f, "E{n}"),
            Self::F4 => write!(f, "F4"),
            Self::G2 => write!(f, "G2"),
            Self::H(n) => write!(f, "H{n}"),
            Self::I2(0) => write!(f, "I2(inf)"),
            Self::I2(m) => write!(f, "I2({m})"),
            Self::AffineA(n) => write!(f, "~A{n}"),
        }
    }
}

impl std::str::FromStr for CartanType {
    type Err = CoxeterError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || CoxeterError::UnknownCartanType(s.to_string());
        let trimmed = s.trim();

        if let Some(rest) = trimmed.strip_prefix('~') {
            let rank = rest
                .strip_prefix(['A', 'a'])
                .ok_or_else(unknown)?
                .parse()
                .map_err(|_| unknown())?;
            return Ok(Self::AffineA(rank));
        }

        if let Some(rest) = trimmed
            .strip_prefix("I2(")
            .or_else(|| trimmed.strip_prefix("i2("))
        {
            let inner = rest.strip_suffix(')').ok_or_else(unknown)?;
            let m = match inner.trim() {
                "inf" | "∞" => 0,
                other => other.parse().map_err(|_| unknown())?,
            };
            return Ok(Self::I2(m));
        }

        let mut chars = trimmed.chars();
        let family = chars.next().ok_or_else(unknown)?.to_ascii_uppercase();
        let rank: usize = chars.as_str().parse().map_err(|_| unknown())?;
        match (family, rank) {
            ('A', n) => Ok(Self::A(n)),
            ('B' | 'C', n) => Ok(Self::B(n)),
            ('D', n) => Ok(Self::D(n)),
            ('E', n) => Ok(Self::E(n)),
            ('F', 4) => Ok(Self::F4),
            ('G', 2) => Ok(Self::G2),
            ('H', n) => Ok(Self::H(n)),
            _ => Err(unknown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dihedral_matrix_is_valid() {
        let m = CoxeterMatrix::i2(3).unwrap();
        assert_eq!(m.rank(), 2);
        assert_eq!(m.bond(0, 1).unwrap(), BondOrder(3));
        assert_eq!(m.bond(1, 0).unwrap(), BondOrder(3));
        assert_eq!(m.bond(0, 0).unwrap(), BondOrder(1));
    }

    #[test]
    fn rejects_bad_diagonal() {
        let err = CoxeterMatrix::from_rows(&[[1, 3], [3, 2]]).unwrap_err();
        match err {
            CoxeterError::MalformedCoxeterMatrix { row: 1, col: 1, .. } => {}
            other => panic!("expected diagonal error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_asymmetric() {
        let err = CoxeterMatrix::from_rows(&[[1, 3], [4, 1]]).unwrap_err();
        match err {
            CoxeterError::MalformedCoxeterMatrix { row: 0, col: 1, .. } => {}
            other => panic!("expected symmetry error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_off_diagonal_one() {
        assert!(CoxeterMatrix::i2(1).is_err());
    }

    #[test]
    fn rejects_non_square() {
        let rows: Vec<Vec<u32>> = vec![vec![1, 2], vec![2]];
        assert!(CoxeterMatrix::from_rows(&rows).is_err());
    }

    #[test]
    fn bond_out_of_range() {
        let m = CoxeterMatrix::a(2).unwrap();
        assert_eq!(
            m.bond(0, 2).unwrap_err(),
            CoxeterError::InvalidGenerator { index: 2, rank: 2 }
        );
    }

    #[test]
    fn infinite_bond() {
        let m = CoxeterMatrix::affine_a(1).unwrap();
        let bond = m.bond(0, 1).unwrap();
        assert!(bond.is_infinite());
        assert_eq!(bond.order(), None);
        assert_eq!(bond.to_string(), "∞");
    }

    #[test]
    fn b3_rendering() {
        insta::assert_snapshot!(CoxeterMatrix::b(3).unwrap().to_string(), @r"
        1 3 2
        3 1 4
        2 4 1
        ");
    }

    #[test]
    fn d4_has_a_fork() {
        let m = CoxeterMatrix::d(4).unwrap();
        assert_eq!(m.bond(0, 1).unwrap(), BondOrder(3));
        assert_eq!(m.bond(1, 2).unwrap(), BondOrder(3));
        assert_eq!(m.bond(1, 3).unwrap(), BondOrder(3));
        assert_eq!(m.bond(2, 3).unwrap(), BondOrder(2));
    }

    #[test]
    fn e8_branch_node() {
        let m = CoxeterMatrix::e(8).unwrap();
        let branch: Vec<usize> = (0..8)
            .filter(|&j| m.bond(3, j).unwrap() == BondOrder(3))
            .collect();
        assert_eq!(branch, vec![1, 2, 4]);
    }

    #[test]
    fn affine_a_is_a_cycle() {
        let m = CoxeterMatrix::affine_a(3).unwrap();
        assert_eq!(m.rank(), 4);
        assert_eq!(m.bond(3, 0).unwrap(), BondOrder(3));
        assert_eq!(m.bond(0, 2).unwrap(), BondOrder(2));
    }

    #[test]
    fn cartan_parse() {
        assert_eq!("A3".parse::<CartanType>().unwrap(), CartanType::A(3));
        assert_eq!("c4".parse::<CartanType>().unwrap(), CartanType::B(4));
        assert_eq!("I2(5)".parse::<CartanType>().unwrap(), CartanType::I2(5));
        assert_eq!("I2(inf)".parse::<CartanType>().unwrap(), CartanType::I2(0));
        assert_eq!("~A2".parse::<CartanType>().unwrap(), CartanType::AffineA(2));
        assert_eq!("F4".parse::<CartanType>().unwrap(), CartanType::F4);
        assert!("F5".parse::<CartanType>().is_err());
        assert!("Z3".parse::<CartanType>().is_err());
        assert!("".parse::<CartanType>().is_err());
    }

    #[test]
    fn cartan_display_round_trips() {
        for name in ["A3", "B2", "D5", "E7", "F4", "G2", "H4", "I2(7)", "I2(inf)", "~A3"] {
            let ty: CartanType = name.parse().unwrap();
            assert_eq!(ty.to_string(), name);
            assert!(ty.matrix().is_ok(), "{name} should build");
        }
    }

    #[test]
    fn deserialize_validates() {
        let ok: CoxeterMatrix = serde_json::from_str("[[1,0],[0,1]]").unwrap();
        assert_eq!(ok, CoxeterMatrix::i2(0).unwrap());
        assert!(serde_json::from_str::<CoxeterMatrix>("[[1,2],[3,1]]").is_err());
    }

    #[test]
    fn oversized_matrices_are_rejected() {
        assert!(CoxeterMatrix::a(MAX_RANK).is_ok());
        assert_eq!(
            CoxeterMatrix::a(100_000).unwrap_err(),
            CoxeterError::LimitExceeded {
                what: "rank",
                value: 100_000,
                limit: MAX_RANK as u64,
            }
        );
        assert!(CoxeterMatrix::affine_a(usize::MAX).is_err());
        assert!(matches!(
            CoxeterMatrix::i2(4_000_000_000),
            Err(CoxeterError::LimitExceeded { what: "bond order", .. })
        ));
        assert!(CoxeterMatrix::i2(MAX_BOND_ORDER).is_ok());
    }
}
