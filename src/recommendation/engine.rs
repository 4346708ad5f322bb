//! Recommendation Engine
//!
//! Greedy suggestion algorithms over the user directory and brand catalog:
//! - Friend suggestion ranks non-friends by the number of brands both users follow
//! - Brand suggestion ranks unfollowed brands by similarity to the brands already followed
//!
//! Both break ties in favour of the name that sorts last byte-wise, so results
//! never depend on the order in which candidates are scanned.

use serde::Serialize;
use std::cmp::Ordering;
use std::time::Duration;
use tracing::{debug, instrument};

use super::metrics::PerformanceTimer;
use crate::catalog::BrandCatalog;
use crate::config::RecommendationConfig;
use crate::error::{Error, Result};
use crate::graph::edge_list::compare_keys;
use crate::graph::{User, UserDirectory};

/// A friend candidate and its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredFriend {
    pub name: String,
    /// Brands followed by both users
    pub shared_brands: usize,
}

/// A brand candidate and its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredBrand {
    pub name: String,
    pub index: usize,
    /// Followed brands flagged similar to this one
    pub similarity: usize,
}

/// Main recommendation engine
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    slow_threshold: Duration,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(&RecommendationConfig::default())
    }
}

impl RecommendationEngine {
    pub fn new(config: &RecommendationConfig) -> Self {
        Self {
            slow_threshold: config.slow_suggestion,
        }
    }

    /// Best friend suggestion for `user`, or `None` when every other user is already a friend
    #[instrument(skip(self, directory))]
    pub fn suggested_friend(
        &self,
        directory: &UserDirectory,
        user: &str,
    ) -> Result<Option<ScoredFriend>> {
        let _timer = PerformanceTimer::new("suggested_friend", self.slow_threshold);
        let me = directory.require(user)?;

        let mut best: Option<ScoredFriend> = None;
        for candidate in Self::friend_candidates(directory, me) {
            let score = Self::shared_brand_count(me, candidate);
            let wins = match &best {
                None => true,
                Some(current) => Self::outranks(
                    (score, candidate.name()),
                    (current.shared_brands, current.name.as_str()),
                ),
            };
            if wins {
                best = Some(ScoredFriend {
                    name: candidate.name().to_string(),
                    shared_brands: score,
                });
            }
        }

        debug!(suggestion = ?best.as_ref().map(|s| &s.name), "Friend suggestion computed");
        Ok(best)
    }

    /// Every friend candidate for `user`, best first
    pub fn rank_friend_candidates(
        &self,
        directory: &UserDirectory,
        user: &str,
    ) -> Result<Vec<ScoredFriend>> {
        let me = directory.require(user)?;
        let mut ranked: Vec<ScoredFriend> = Self::friend_candidates(directory, me)
            .map(|candidate| ScoredFriend {
                name: candidate.name().to_string(),
                shared_brands: Self::shared_brand_count(me, candidate),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.shared_brands
                .cmp(&a.shared_brands)
                .then_with(|| compare_keys(&b.name, &a.name))
        });
        Ok(ranked)
    }

    /// Befriend up to `n` suggested users, one suggestion at a time.
    ///
    /// Stops early when no candidate is left and returns how many friendships were made.
    #[instrument(skip(self, directory))]
    pub fn add_suggested_friends(
        &self,
        directory: &mut UserDirectory,
        user: &str,
        n: usize,
    ) -> Result<usize> {
        directory.require(user)?;
        if n == 0 {
            return Err(Error::invalid_argument("suggestion count must be positive"));
        }

        let mut added = 0;
        while added < n {
            let Some(suggestion) = self.suggested_friend(directory, user)? else {
                break;
            };
            directory.link(user, &suggestion.name);
            added += 1;
        }

        debug!(added, requested = n, "Added suggested friends");
        Ok(added)
    }

    /// Best unfollowed brand for `user`, or `None` when every brand is followed
    pub fn suggested_brand(
        &self,
        directory: &UserDirectory,
        catalog: &BrandCatalog,
        user: &str,
    ) -> Result<Option<ScoredBrand>> {
        let followed = Self::followed_markers(catalog, directory.require(user)?);
        Ok(Self::best_brand(catalog, &followed))
    }

    /// Follow up to `n` suggested brands, one suggestion at a time.
    ///
    /// Brands followed earlier in the run count towards the similarity of
    /// later picks. Returns how many brands were followed.
    #[instrument(skip(self, directory, catalog))]
    pub fn follow_suggested_brands(
        &self,
        directory: &mut UserDirectory,
        catalog: &BrandCatalog,
        user: &str,
        n: usize,
    ) -> Result<usize> {
        let _timer = PerformanceTimer::new("follow_suggested_brands", self.slow_threshold);
        let mut followed = Self::followed_markers(catalog, directory.require(user)?);
        if n == 0 {
            return Err(Error::invalid_argument("suggestion count must be positive"));
        }

        let mut count = 0;
        for _ in 0..n {
            let Some(pick) = Self::best_brand(catalog, &followed) else {
                break;
            };
            directory.insert_brand(user, &pick.name);
            followed[pick.index] = true;
            count += 1;
            debug!(brand = %pick.name, similarity = pick.similarity, "Followed suggested brand");
        }

        Ok(count)
    }

    // ---- Scoring helpers (pure functions) ----

    fn friend_candidates<'d>(
        directory: &'d UserDirectory,
        me: &'d User,
    ) -> impl Iterator<Item = &'d User> + 'd {
        directory
            .users()
            .filter(move |other| other.name() != me.name() && !me.is_friend(other.name()))
    }

    fn shared_brand_count(me: &User, other: &User) -> usize {
        me.brands().filter(|brand| other.follows(brand)).count()
    }

    /// Higher score wins; equal scores go to the name that sorts last
    fn outranks(candidate: (usize, &str), current: (usize, &str)) -> bool {
        match candidate.0.cmp(&current.0) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => compare_keys(candidate.1, current.1) == Ordering::Greater,
        }
    }

    fn followed_markers(catalog: &BrandCatalog, user: &User) -> Vec<bool> {
        let mut followed = vec![false; catalog.len()];
        for idx in user.brands().filter_map(|brand| catalog.index_of(brand)) {
            followed[idx] = true;
        }
        followed
    }

    fn best_brand(catalog: &BrandCatalog, followed: &[bool]) -> Option<ScoredBrand> {
        let mut best: Option<ScoredBrand> = None;

        for (index, name) in catalog.names().iter().enumerate() {
            if followed[index] {
                continue;
            }
            let similarity = (0..catalog.len())
                .filter(|&other| followed[other] && catalog.is_similar(index, other))
                .count();

            let wins = match &best {
                None => true,
                Some(current) => {
                    Self::outranks(
                        (similarity, name.as_str()),
                        (current.similarity, current.name.as_str()),
                    )
                }
            };
            if wins {
                best = Some(ScoredBrand {
                    name: name.clone(),
                    index,
                    similarity,
                });
            }
        }

        best
    }
}
