//! Friendship graph
//!
//! - **edge_list** - ordered, duplicate-free lists keyed by name
//! - **directory** - the user registry and its edge-maintenance operations
//! - **connectivity** - breadth-first queries (degrees of connection, paths)

pub mod connectivity;
pub mod directory;
pub mod edge_list;

pub use connectivity::ConnectivityEngine;
pub use directory::{User, UserDirectory};
pub use edge_list::{EdgeKey, OrderedEdgeList};
