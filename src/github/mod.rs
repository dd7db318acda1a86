//! GitHub release API: repository identifiers, response types and the
//! release source used by the server.

mod client;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, GetReleases, GitHub};
#[cfg(test)]
pub use client::MockGetReleases;
pub use repo::{RepoError, RepoId};
pub use types::{Actor, Asset, Release};
