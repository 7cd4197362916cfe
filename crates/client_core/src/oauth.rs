//! External OAuth handoff.
//!
//! The identity provider redirects back with the issued bearer token in the
//! `token` query parameter. The token is read once and the location is rebuilt
//! without it; only the scrubbed location may be logged or kept around.

use url::Url;

pub const GOOGLE_AUTH_PATH: &str = "/auth/google";
pub const TOKEN_QUERY_PARAM: &str = "token";

pub fn google_auth_url(api_base: &str) -> String {
    format!("{}{GOOGLE_AUTH_PATH}", api_base.trim_end_matches('/'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCallback {
    token: String,
    scrubbed_location: Url,
}

impl OAuthCallback {
    /// Parses a redirect location. Returns `Ok(None)` when it carries no token.
    pub fn consume(location: &str) -> Result<Option<Self>, url::ParseError> {
        let mut url = Url::parse(location.trim())?;

        let mut token = None;
        let mut remaining = Vec::new();
        for (key, value) in url.query_pairs() {
            if key == TOKEN_QUERY_PARAM {
                if token.is_none() && !value.trim().is_empty() {
                    token = Some(value.trim().to_string());
                }
            } else {
                remaining.push((key.into_owned(), value.into_owned()));
            }
        }

        let Some(token) = token else {
            return Ok(None);
        };

        if remaining.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(remaining);
        }

        Ok(Some(Self {
            token,
            scrubbed_location: url,
        }))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn scrubbed_location(&self) -> &Url {
        &self.scrubbed_location
    }

    pub fn into_token(self) -> String {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_google_entry_point() {
        assert_eq!(
            google_auth_url("http://localhost:8000/"),
            "http://localhost:8000/auth/google"
        );
    }

    #[test]
    fn extracts_token_and_scrubs_location() {
        let callback = OAuthCallback::consume("bighouse://callback?lang=en&token=abc.def&x=1")
            .expect("parse")
            .expect("token present");
        assert_eq!(callback.token(), "abc.def");
        assert_eq!(
            callback.scrubbed_location().as_str(),
            "bighouse://callback?lang=en&x=1"
        );
        assert!(!callback.scrubbed_location().as_str().contains("abc.def"));
    }

    #[test]
    fn drops_empty_query_entirely() {
        let callback = OAuthCallback::consume("http://localhost:5173/?token=t0k")
            .expect("parse")
            .expect("token present");
        assert_eq!(callback.scrubbed_location().as_str(), "http://localhost:5173/");
        assert_eq!(callback.into_token(), "t0k");
    }

    #[test]
    fn location_without_token_is_not_a_callback() {
        assert!(OAuthCallback::consume("http://localhost:5173/?token=")
            .expect("parse")
            .is_none());
        assert!(OAuthCallback::consume("http://localhost:5173/")
            .expect("parse")
            .is_none());
        assert!(OAuthCallback::consume("not a url").is_err());
    }
}
