//! Recommendation Module
//!
//! Greedy friend and brand suggestions for BrandGraph users.
//!
//! ## Algorithm Overview
//!
//! - **Friend suggestion**: every registered user who is neither the user nor
//!   already a friend is scored by the number of brands both follow. The highest
//!   score wins; ties go to the name that sorts last.
//! - **Brand suggestion**: every unfollowed brand is scored by how many of the
//!   user's followed brands are flagged similar to it. A score of zero is still
//!   a valid pick when nothing scores higher; ties go to the name that sorts last.

pub mod engine;
pub mod metrics;

pub use engine::{RecommendationEngine, ScoredBrand, ScoredFriend};
