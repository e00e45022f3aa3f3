/// Absolute URL of an uploaded asset.
///
/// The backend stores paths such as `/uploads/x.png` relative to its own
/// origin. Absolute and `blob:` URLs pass through untouched.
pub fn resolve_image_url(asset_origin: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("blob:") {
        return Some(path.to_string());
    }
    let origin = asset_origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Some(format!("{origin}/{path}"))
}

/// Origin that serves uploads: the API base without its `/api` suffix.
pub fn asset_origin(api_base: &str) -> &str {
    let base = api_base.trim_end_matches('/');
    base.strip_suffix("/api").unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_origin_once() {
        let origin = asset_origin("http://localhost:8080/api/");
        assert_eq!(origin, "http://localhost:8080");
        assert_eq!(
            resolve_image_url(origin, "/uploads/a.png").as_deref(),
            Some("http://localhost:8080/uploads/a.png")
        );
        assert_eq!(
            resolve_image_url(origin, "uploads/a.png").as_deref(),
            Some("http://localhost:8080/uploads/a.png")
        );
    }

    #[test]
    fn absolute_and_empty() {
        assert_eq!(resolve_image_url("http://x", ""), None);
        assert_eq!(
            resolve_image_url("http://x", "https://cdn.test/a.png").as_deref(),
            Some("https://cdn.test/a.png")
        );
        assert_eq!(
            resolve_image_url("http://x", "blob:abc").as_deref(),
            Some("blob:abc")
        );
    }
}
