//! Helpers for constructing URLs to data and image files that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/wiki` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths, so the hash-routed index and the
/// standalone character page resolve the same files.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Whether the current document is the standalone character page.
#[must_use]
pub fn is_character_page(pathname: &str) -> bool {
    pathname
        .trim_end_matches('/')
        .ends_with("characters/character.html")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
