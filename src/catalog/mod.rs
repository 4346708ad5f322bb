//! Brand Catalog
//!
//! A fixed, ordered set of brand names plus a symmetric similarity matrix
//! indexed by brand position. The set of brands never changes after
//! construction; only similarity flags are added, through
//! [`BrandCatalog::connect_similar_brands`].

pub mod loader;

use std::collections::HashSet;
use tracing::debug;

use crate::error::{Error, Result};

pub use loader::{load_catalog, parse_catalog};

/// Fixed brand set with a dense N×N similarity matrix
#[derive(Debug, Clone)]
pub struct BrandCatalog {
    names: Vec<String>,
    // Row-major, `names.len()` squared.
    similar: Vec<bool>,
}

impl BrandCatalog {
    /// Build a catalog from brand names and their similarity rows.
    ///
    /// Rejects empty or duplicate names, a matrix that is not N×N, and an
    /// asymmetric matrix. Diagonal entries are accepted and ignored.
    pub fn new(names: Vec<String>, matrix: Vec<Vec<bool>>) -> Result<Self> {
        if let Some(message) = name_defect(&names) {
            return Err(Error::invalid_argument(message));
        }

        let n = names.len();
        if matrix.len() != n || matrix.iter().any(|row| row.len() != n) {
            return Err(Error::invalid_argument(format!(
                "similarity matrix must be {n}x{n}"
            )));
        }

        if let Some((i, j)) = first_asymmetry(&matrix) {
            return Err(Error::invalid_argument(asymmetry_message(&names, i, j)));
        }

        Ok(Self::from_checked_rows(names, matrix))
    }

    /// Assemble a catalog whose names and N×N symmetric rows were already checked
    pub(crate) fn from_checked_rows(names: Vec<String>, matrix: Vec<Vec<bool>>) -> Self {
        Self {
            names,
            similar: matrix.into_iter().flatten().collect(),
        }
    }

    /// Catalog with no similarities recorded yet
    pub fn with_brands<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let n = names.len();
        Self::new(names, vec![vec![false; n]; n])
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Brand names in catalog order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Whether brands `a` and `b` are flagged similar.
    ///
    /// A brand is never similar to itself, and out-of-range indices are never similar.
    pub fn is_similar(&self, a: usize, b: usize) -> bool {
        let n = self.len();
        a != b && a < n && b < n && self.similar[a * n + b]
    }

    /// Names of the brands similar to the brand at `index`, in catalog order
    pub fn similar_to(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.names
            .iter()
            .enumerate()
            .filter(move |(other, _)| self.is_similar(index, *other))
            .map(|(_, name)| name.as_str())
    }

    /// Mark two brands as similar, in both directions.
    ///
    /// Unknown names and a brand paired with itself are rejected and leave
    /// the matrix unchanged.
    pub fn connect_similar_brands(&mut self, brand_a: &str, brand_b: &str) -> Result<()> {
        let a = self.require_index(brand_a)?;
        let b = self.require_index(brand_b)?;
        if a == b {
            return Err(Error::invalid_argument(format!(
                "brand '{}' cannot be similar to itself",
                brand_a
            )));
        }

        let n = self.len();
        self.similar[a * n + b] = true;
        self.similar[b * n + a] = true;
        debug!(brand_a, brand_b, "Linked similar brands");
        Ok(())
    }

    fn require_index(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| Error::invalid_argument(format!("unknown brand '{}'", name)))
    }
}

/// Why a list of brand names cannot form a catalog, if it cannot
pub(crate) fn name_defect(names: &[String]) -> Option<String> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if name.is_empty() {
            return Some("brand names must not be empty".to_string());
        }
        if !seen.insert(name.as_str()) {
            return Some(format!("duplicate brand name '{}'", name));
        }
    }
    None
}

/// First `(i, j)` with `i < j` where the square `matrix` disagrees with its transpose
pub(crate) fn first_asymmetry(matrix: &[Vec<bool>]) -> Option<(usize, usize)> {
    let n = matrix.len();
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .find(|&(i, j)| matrix[i][j] != matrix[j][i])
}

pub(crate) fn asymmetry_message(names: &[String], i: usize, j: usize) -> String {
    format!(
        "similarity between '{}' and '{}' is not symmetric",
        names[i], names[j]
    )
}
