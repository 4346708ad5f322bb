//! Connectivity Engine
//!
//! Breadth-first queries over the friendship graph. Visited state lives in the
//! traversal itself, so queries never observe leftovers from earlier calls.

use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

use super::directory::{User, UserDirectory};
use crate::error::Result;

/// Read-only graph queries over a [`UserDirectory`]
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityEngine<'a> {
    directory: &'a UserDirectory,
}

impl<'a> ConnectivityEngine<'a> {
    pub fn new(directory: &'a UserDirectory) -> Self {
        Self { directory }
    }

    /// Minimum number of friendship hops from `a` to `b`.
    ///
    /// `Ok(Some(0))` when both names are the same user, `Ok(None)` when no
    /// chain of friendships joins them.
    #[instrument(skip(self))]
    pub fn degrees_of_connection(&self, a: &str, b: &str) -> Result<Option<usize>> {
        let start = self.directory.require(a)?;
        self.directory.require(b)?;
        if a == b {
            return Ok(Some(0));
        }

        let mut visited: HashSet<&str> = HashSet::from([start.name()]);
        let mut frontier: Vec<&User> = vec![start];
        let mut hops = 0;

        while !frontier.is_empty() {
            hops += 1;
            let mut next = Vec::new();
            for user in frontier {
                for friend in user.friends() {
                    if friend == b {
                        debug!(hops, "Connection found");
                        return Ok(Some(hops));
                    }
                    if visited.insert(friend) {
                        if let Some(record) = self.directory.user(friend) {
                            next.push(record);
                        }
                    }
                }
            }
            frontier = next;
        }

        debug!(visited = visited.len(), "No connection");
        Ok(None)
    }

    /// One shortest chain of users from `a` to `b`, both ends included.
    ///
    /// Friends are expanded in name order, so among equally short chains the
    /// one found first through alphabetically earlier friends wins.
    #[instrument(skip(self))]
    pub fn connection_path(&self, a: &str, b: &str) -> Result<Option<Vec<String>>> {
        let start = self.directory.require(a)?;
        self.directory.require(b)?;
        if a == b {
            return Ok(Some(vec![a.to_string()]));
        }

        let mut parents: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::from([start.name()]);
        let mut frontier: Vec<&User> = vec![start];

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for user in frontier {
                for friend in user.friends() {
                    if !visited.insert(friend) {
                        continue;
                    }
                    parents.insert(friend, user.name());
                    if friend == b {
                        return Ok(Some(Self::unwind(&parents, a, b)));
                    }
                    if let Some(record) = self.directory.user(friend) {
                        next.push(record);
                    }
                }
            }
            frontier = next;
        }

        Ok(None)
    }

    /// Number of users present in both friend lists
    pub fn mutual_friends(&self, a: &str, b: &str) -> Result<usize> {
        self.directory.mutual_friends(a, b)
    }

    fn unwind(parents: &HashMap<&str, &str>, a: &str, b: &str) -> Vec<String> {
        let mut path = vec![b.to_string()];
        let mut cur = b;
        while cur != a {
            match parents.get(cur) {
                Some(parent) => {
                    path.push(parent.to_string());
                    cur = *parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}
