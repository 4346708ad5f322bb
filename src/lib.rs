//! BrandGraph library crate
//!
//! An in-memory social graph of users, their friendships and the brands they
//! follow, with connectivity queries and greedy friend/brand recommendations.

pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod network;
pub mod recommendation;
pub mod telemetry;
pub mod view;

// Re-export commonly used types
pub use catalog::BrandCatalog;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use graph::{ConnectivityEngine, User, UserDirectory};
pub use network::SocialNetwork;
pub use recommendation::{RecommendationEngine, ScoredBrand, ScoredFriend};
pub use view::{BrandView, UserView};
