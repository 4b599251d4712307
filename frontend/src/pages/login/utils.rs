use leptos_router::NavigateOptions;

/// Where a successful login lands when no prior destination was recorded.
pub const DEFAULT_REDIRECT_PATH: &str = "/dashboard/overview";

/// Fixed, cause-agnostic message shown for every failed attempt. The real
/// failure detail goes to the console log only.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Try admin / boss";

/// Resolve the post-login destination from the guard's `redirect` query
/// parameter. Only site-internal absolute paths are honored; anything
/// else (external URLs, scheme-relative `//` paths, empty values) falls
/// back to the default dashboard.
pub fn redirect_target(raw: Option<String>) -> String {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => DEFAULT_REDIRECT_PATH.to_string(),
    }
}

/// Navigation options for the post-login redirect: replace the history
/// entry so the back button does not return to the login screen.
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_defaults_to_dashboard_overview() {
        assert_eq!(redirect_target(None), "/dashboard/overview");
    }

    #[test]
    fn redirect_target_honors_internal_paths() {
        assert_eq!(
            redirect_target(Some("/dashboard/reports".into())),
            "/dashboard/reports"
        );
    }

    #[test]
    fn redirect_target_rejects_external_and_malformed_paths() {
        assert_eq!(
            redirect_target(Some("https://evil.example".into())),
            DEFAULT_REDIRECT_PATH
        );
        assert_eq!(
            redirect_target(Some("//evil.example".into())),
            DEFAULT_REDIRECT_PATH
        );
        assert_eq!(redirect_target(Some(String::new())), DEFAULT_REDIRECT_PATH);
    }

    #[test]
    fn post_login_navigation_replaces_history() {
        let options = replace_navigation();
        assert!(options.replace);
    }
}
