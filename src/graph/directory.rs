//! User Directory
//!
//! The registry of every user on the platform. The directory exclusively owns
//! each [`User`]; friendships are stored by name on both endpoints, so removing
//! a user is a matter of scrubbing that name from the other friend lists.

use tracing::debug;

use super::edge_list::{EdgeKey, OrderedEdgeList};
use crate::catalog::BrandCatalog;
use crate::error::{Error, Result};

/// A registered user with ordered friend and followed-brand lists
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    friends: OrderedEdgeList<String>,
    brands: OrderedEdgeList<String>,
}

impl EdgeKey for User {
    fn edge_key(&self) -> &str {
        &self.name
    }
}

impl User {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            friends: OrderedEdgeList::new(),
            brands: OrderedEdgeList::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Friend names in ascending order
    pub fn friends(&self) -> impl Iterator<Item = &str> + '_ {
        self.friends.keys()
    }

    /// Followed brand names in ascending order
    pub fn brands(&self) -> impl Iterator<Item = &str> + '_ {
        self.brands.keys()
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    pub fn is_friend(&self, name: &str) -> bool {
        self.friends.contains(name)
    }

    pub fn follows(&self, brand: &str) -> bool {
        self.brands.contains(brand)
    }
}

/// Registry of all users, ordered by name
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: OrderedEdgeList<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.users.contains(name)
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    /// All users in ascending name order
    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.users.iter()
    }

    /// Look up a registered user, failing with `NotFound`
    pub fn require(&self, name: &str) -> Result<&User> {
        self.users
            .get(name)
            .ok_or_else(|| Error::not_found("user", name))
    }

    /// Register a new user with no friends and no followed brands
    pub fn create_user(&mut self, name: &str) -> Result<&User> {
        if name.is_empty() {
            return Err(Error::invalid_argument("user name must not be empty"));
        }
        if !self.users.insert(User::new(name)) {
            debug!(user = name, "Rejected duplicate user");
            return Err(Error::already_exists("user", name));
        }
        debug!(user = name, "Created user");
        self.require(name)
    }

    /// Remove a user and every friendship that points at them.
    ///
    /// Nothing here can fail once the user is known to be registered, so the
    /// cascade always runs to completion.
    pub fn delete_user(&mut self, name: &str) -> Result<()> {
        self.require(name)?;

        for other in self.users.iter_mut() {
            if other.name != name {
                other.friends.remove(name);
            }
        }
        // Dropping the record releases its own friend and brand lists.
        self.users.remove(name);

        debug!(user = name, "Deleted user");
        Ok(())
    }

    /// Befriend two distinct users, recording the edge on both sides
    pub fn add_friend(&mut self, a: &str, b: &str) -> Result<()> {
        let user_a = self.require(a)?;
        let user_b = self.require(b)?;
        if a == b {
            return Err(Error::invalid_argument(format!(
                "user '{}' cannot befriend themself",
                a
            )));
        }
        // Either side alone counts, so a half-linked pair is never extended.
        if user_a.is_friend(b) || user_b.is_friend(a) {
            return Err(Error::already_exists("friendship", format!("{a}/{b}")));
        }

        self.link(a, b);
        debug!(user = a, friend = b, "Added friendship");
        Ok(())
    }

    /// Remove a mutual friendship from both sides
    pub fn remove_friend(&mut self, a: &str, b: &str) -> Result<()> {
        let user_a = self.require(a)?;
        let user_b = self.require(b)?;
        if !user_a.is_friend(b) || !user_b.is_friend(a) {
            return Err(Error::not_found("friendship", format!("{a}/{b}")));
        }

        if let Some(user) = self.users.get_mut(a) {
            user.friends.remove(b);
        }
        if let Some(user) = self.users.get_mut(b) {
            user.friends.remove(a);
        }
        debug!(user = a, friend = b, "Removed friendship");
        Ok(())
    }

    /// Follow a brand that exists in `catalog`
    pub fn follow_brand(&mut self, catalog: &BrandCatalog, user: &str, brand: &str) -> Result<()> {
        if self.require(user)?.follows(brand) {
            return Err(Error::already_exists("brand follow", format!("{user}->{brand}")));
        }
        if !catalog.contains(brand) {
            return Err(Error::invalid_argument(format!("unknown brand '{}'", brand)));
        }

        self.insert_brand(user, brand);
        debug!(user, brand, "Followed brand");
        Ok(())
    }

    /// Stop following a brand
    pub fn unfollow_brand(
        &mut self,
        catalog: &BrandCatalog,
        user: &str,
        brand: &str,
    ) -> Result<()> {
        let record = self.require(user)?;
        if !catalog.contains(brand) {
            return Err(Error::invalid_argument(format!("unknown brand '{}'", brand)));
        }
        if !record.follows(brand) {
            return Err(Error::not_found("brand follow", format!("{user}->{brand}")));
        }

        if let Some(record) = self.users.get_mut(user) {
            record.brands.remove(brand);
        }
        debug!(user, brand, "Unfollowed brand");
        Ok(())
    }

    /// Number of users present in both friend lists
    pub fn mutual_friends(&self, a: &str, b: &str) -> Result<usize> {
        let user_a = self.require(a)?;
        let user_b = self.require(b)?;
        Ok(user_a.friends().filter(|f| user_b.is_friend(f)).count())
    }

    // Both endpoints must be registered; callers check before linking.
    pub(crate) fn link(&mut self, a: &str, b: &str) {
        if let Some(user) = self.users.get_mut(a) {
            user.friends.insert(b.to_string());
        }
        if let Some(user) = self.users.get_mut(b) {
            user.friends.insert(a.to_string());
        }
    }

    pub(crate) fn insert_brand(&mut self, user: &str, brand: &str) -> bool {
        self.users
            .get_mut(user)
            .map(|record| record.brands.insert(brand.to_string()))
            .unwrap_or(false)
    }
}
