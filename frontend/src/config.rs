pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const GITHUB_APP_INFO_PATH: &str = "/api/github-app-info";

// Baked in at build time, e.g. `BACKEND_URL=https://api.brainlybot.dev trunk build --release`
pub fn get_backend_url() -> &'static str {
    resolve_backend_url(option_env!("BACKEND_URL"))
}

pub fn resolve_backend_url(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_BACKEND_URL,
    }
}

pub fn github_app_info_url(backend_url: &str) -> String {
    format!("{}{}", backend_url, GITHUB_APP_INFO_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_loopback_when_unset() {
        assert_eq!(resolve_backend_url(None), "http://localhost:8000");
        assert_eq!(
            github_app_info_url(resolve_backend_url(None)),
            "http://localhost:8000/api/github-app-info"
        );
    }

    #[test]
    fn blank_override_counts_as_unset() {
        assert_eq!(resolve_backend_url(Some("   ")), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn override_drops_trailing_slash() {
        let url = resolve_backend_url(Some("https://api.example.com/"));
        assert_eq!(url, "https://api.example.com");
        assert_eq!(
            github_app_info_url(url),
            "https://api.example.com/api/github-app-info"
        );
    }
}
