//! Credential contract between the API client and whatever stores the token.

/// Supplies the bearer token for authenticated requests.
///
/// `current_token` is called synchronously right before a request goes out.
/// `handle_unauthenticated` is called when the API rejects the token.
pub trait CredentialProvider {
    fn current_token(&self) -> Option<String>;
    /// `expires_at` is the expiry in Unix seconds, when the API sent one.
    fn store_token(&self, token: &str, expires_at: Option<i64>);
    fn handle_unauthenticated(&self);

    fn authorization_header(&self) -> Option<String> {
        self.current_token().map(|token| format!("Bearer {token}"))
    }
}

/// Whether a token with the given expiry (Unix seconds) is still usable at
/// `now`. Tokens without an expiry never expire on the client side.
pub fn token_is_live(expires_at: Option<i64>, now: i64) -> bool {
    expires_at.is_none_or(|expires_at| now < expires_at)
}
