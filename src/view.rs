//! Read-only views for presentation layers
//!
//! Snapshots of a user or a brand, detached from the graph so they can be
//! rendered or serialized without holding a borrow on it.

use serde::Serialize;

use crate::catalog::BrandCatalog;
use crate::error::{Error, Result};
use crate::graph::User;

/// A user's name with ordered friend and followed-brand names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub name: String,
    pub friends: Vec<String>,
    pub brands: Vec<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            friends: user.friends().map(str::to_string).collect(),
            brands: user.brands().map(str::to_string).collect(),
        }
    }
}

/// A brand's name, catalog index and similar brands in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandView {
    pub name: String,
    pub index: usize,
    pub similar: Vec<String>,
}

impl BrandView {
    pub fn from_catalog(catalog: &BrandCatalog, name: &str) -> Result<Self> {
        let index = catalog
            .index_of(name)
            .ok_or_else(|| Error::invalid_argument(format!("unknown brand '{}'", name)))?;
        Ok(Self {
            name: name.to_string(),
            index,
            similar: catalog.similar_to(index).map(str::to_string).collect(),
        })
    }
}
