//! Release selection.
//!
//! Pure functions over a decoded release list: pick the newest release and
//! resolve an asset by its exact filename.

mod asset;
mod latest;

pub use asset::{AssetError, find_asset};
pub use latest::{find_latest, published_unix};
