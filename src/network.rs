//! Social network facade
//!
//! [`SocialNetwork`] owns the one user directory and the one brand catalog and
//! exposes every graph operation through a single `&mut self` receiver. Borrow
//! rules therefore serialize queries and mutations; sharing a network across
//! threads means wrapping the whole value in one lock.

use tracing::{info, instrument};

use crate::catalog::{self, BrandCatalog};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::graph::{ConnectivityEngine, User, UserDirectory};
use crate::recommendation::RecommendationEngine;
use crate::view::{BrandView, UserView};

/// Users, friendships, followed brands and the brand catalog
#[derive(Debug, Clone)]
pub struct SocialNetwork {
    directory: UserDirectory,
    catalog: BrandCatalog,
    recommender: RecommendationEngine,
}

impl SocialNetwork {
    pub fn new(catalog: BrandCatalog) -> Self {
        Self {
            directory: UserDirectory::new(),
            catalog,
            recommender: RecommendationEngine::default(),
        }
    }

    pub fn with_engine(catalog: BrandCatalog, recommender: RecommendationEngine) -> Self {
        Self {
            directory: UserDirectory::new(),
            catalog,
            recommender,
        }
    }

    /// Build an empty network around the catalog file named in `config`
    #[instrument(skip_all)]
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = config.catalog.path.as_ref().ok_or(Error::InvalidConfig {
            key: "BRANDGRAPH_CATALOG_PATH",
            message: "no brand catalog configured".into(),
        })?;
        let catalog = catalog::load_catalog(path, config.catalog.size)?;
        info!(brands = catalog.len(), "Social network ready");

        Ok(Self::with_engine(
            catalog,
            RecommendationEngine::new(&config.recommendation),
        ))
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn catalog(&self) -> &BrandCatalog {
        &self.catalog
    }

    pub fn connectivity(&self) -> ConnectivityEngine<'_> {
        ConnectivityEngine::new(&self.directory)
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.directory.user(name)
    }

    // ========================================================================
    // Users and friendships
    // ========================================================================

    pub fn create_user(&mut self, name: &str) -> Result<&User> {
        self.directory.create_user(name)
    }

    pub fn delete_user(&mut self, name: &str) -> Result<()> {
        self.directory.delete_user(name)
    }

    pub fn add_friend(&mut self, a: &str, b: &str) -> Result<()> {
        self.directory.add_friend(a, b)
    }

    pub fn remove_friend(&mut self, a: &str, b: &str) -> Result<()> {
        self.directory.remove_friend(a, b)
    }

    pub fn mutual_friends(&self, a: &str, b: &str) -> Result<usize> {
        self.directory.mutual_friends(a, b)
    }

    pub fn degrees_of_connection(&self, a: &str, b: &str) -> Result<Option<usize>> {
        self.connectivity().degrees_of_connection(a, b)
    }

    pub fn connection_path(&self, a: &str, b: &str) -> Result<Option<Vec<String>>> {
        self.connectivity().connection_path(a, b)
    }

    // ========================================================================
    // Brands
    // ========================================================================

    pub fn follow_brand(&mut self, user: &str, brand: &str) -> Result<()> {
        self.directory.follow_brand(&self.catalog, user, brand)
    }

    pub fn unfollow_brand(&mut self, user: &str, brand: &str) -> Result<()> {
        self.directory.unfollow_brand(&self.catalog, user, brand)
    }

    pub fn connect_similar_brands(&mut self, brand_a: &str, brand_b: &str) -> Result<()> {
        self.catalog.connect_similar_brands(brand_a, brand_b)
    }

    // ========================================================================
    // Recommendations
    // ========================================================================

    pub fn suggested_friend(&self, user: &str) -> Result<Option<&User>> {
        let suggestion = self.recommender.suggested_friend(&self.directory, user)?;
        Ok(suggestion.and_then(|s| self.directory.user(&s.name)))
    }

    pub fn add_suggested_friends(&mut self, user: &str, n: usize) -> Result<usize> {
        self.recommender
            .add_suggested_friends(&mut self.directory, user, n)
    }

    pub fn follow_suggested_brands(&mut self, user: &str, n: usize) -> Result<usize> {
        self.recommender
            .follow_suggested_brands(&mut self.directory, &self.catalog, user, n)
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn user_view(&self, name: &str) -> Result<UserView> {
        self.directory.require(name).map(UserView::from)
    }

    pub fn brand_view(&self, name: &str) -> Result<BrandView> {
        BrandView::from_catalog(&self.catalog, name)
    }
}
