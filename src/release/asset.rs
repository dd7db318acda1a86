use crate::github::Release;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("release filename is empty")]
    EmptyName,
    #[error("asset list is empty")]
    NoAssets,
    #[error("not found")]
    NotFound,
}

/// Returns the download URL of the first asset named exactly `name`.
pub fn find_asset<'a>(release: &'a Release, name: &str) -> Result<&'a str, AssetError> {
    if name.is_empty() {
        return Err(AssetError::EmptyName);
    }
    if release.assets.is_empty() {
        return Err(AssetError::NoAssets);
    }

    release
        .assets
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.browser_download_url.as_str())
        .ok_or(AssetError::NotFound)
}
