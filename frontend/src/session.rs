//! The admin credential, modeled as an explicitly passed value.
//!
//! Screens never reach for a global token: `App` builds one `AdminSession`
//! at startup and threads it through component properties, so the fetch and
//! mutation logic stays testable without a live login flow.

const TOKEN_STORAGE_KEY: &str = "bridge_admin_token";

/// Base URL of the collaborator REST backend plus the bearer token the
/// login flow left behind.
#[derive(Clone, PartialEq)]
pub struct AdminSession {
    pub api_base: String,
    pub token: String,
}

impl AdminSession {
    /// Builds the session from the browser environment: the API lives on
    /// the page's own origin, the token in `localStorage`. Missing pieces
    /// become empty strings and surface later as 401 banners rather than
    /// panics.
    pub fn from_window() -> Self {
        let window = web_sys::window();
        let api_base = window
            .as_ref()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let token = window
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
            .unwrap_or_default();
        Self { api_base, token }
    }

    /// Value of the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::AdminSession;

    #[test]
    fn bearer_header_wraps_the_raw_token() {
        let session = AdminSession {
            api_base: "https://admin.example.org".to_string(),
            token: "tok-123".to_string(),
        };
        assert_eq!(session.bearer(), "Bearer tok-123");
    }
}
