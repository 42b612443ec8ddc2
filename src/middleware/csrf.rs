use base64::{ engine::general_purpose::URL_SAFE_NO_PAD, Engine as _ };
use ring::{ hmac, rand::{ SecureRandom, SystemRandom } };
use tower_cookies::Cookies;
use tracing::{ debug, warn };

use crate::{ config::ConfigError, middleware::cookies::{ get_csrf_nonce, set_csrf_nonce } };

const NONCE_LENGTH: usize = 32;

/// Form intent the edit-form tokens are bound to.
pub const POST_EDIT_INTENT: &str = "post_edit";

/// Double-submit anti-forgery tokens for HTML forms.
///
/// Each browser gets a random nonce in an `HttpOnly` cookie. The token placed
/// in the form is `HMAC-SHA256(secret, intent || ":" || nonce)`, so a forged
/// form can only carry a valid token if it can read the victim's cookie.
#[derive(Clone)]
pub struct CsrfGuard {
    key: hmac::Key,
    enabled: bool,
    secure_cookie: bool,
}

impl CsrfGuard {
    pub fn new(secret: &[u8], enabled: bool) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret),
            enabled,
            secure_cookie: false,
        }
    }

    /// Guard keyed with a fresh random secret; tokens do not survive a restart.
    pub fn random(enabled: bool) -> Result<Self, ConfigError> {
        let rng = SystemRandom::new();
        let key = hmac::Key
            ::generate(hmac::HMAC_SHA256, &rng)
            .map_err(|_| ConfigError::Config("Failed to generate CSRF key".to_string()))?;

        Ok(Self { key, enabled, secure_cookie: false })
    }

    /// Only send the nonce cookie over HTTPS.
    pub fn with_secure_cookie(mut self, secure: bool) -> Self {
        self.secure_cookie = secure;
        self
    }

    pub fn disabled() -> Self {
        Self::new(b"csrf-protection-disabled", false)
    }

    /// Token for `intent`, creating the nonce cookie when the browser has none.
    /// Returns `None` when protection is switched off.
    pub fn issue(&self, cookies: &Cookies, intent: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let nonce = match get_csrf_nonce(cookies) {
            Some(nonce) if !nonce.is_empty() => nonce,
            _ => {
                let nonce = generate_nonce()?;
                set_csrf_nonce(cookies, nonce.clone(), self.secure_cookie);
                nonce
            }
        };

        Some(self.token_for(intent, &nonce))
    }

    /// Check a submitted token against the browser's nonce cookie.
    pub fn verify(&self, cookies: &Cookies, intent: &str, token: Option<&str>) -> bool {
        if !self.enabled {
            return true;
        }

        let (Some(nonce), Some(token)) = (get_csrf_nonce(cookies), token) else {
            debug!(intent, "csrf token or nonce cookie missing");
            return false;
        };

        let valid = self.verify_token(intent, &nonce, token);
        if !valid {
            warn!(intent, "rejected form submission with an invalid csrf token");
        }
        valid
    }

    pub fn token_for(&self, intent: &str, nonce: &str) -> String {
        let tag = hmac::sign(&self.key, message(intent, nonce).as_bytes());
        URL_SAFE_NO_PAD.encode(tag.as_ref())
    }

    pub fn verify_token(&self, intent: &str, nonce: &str, token: &str) -> bool {
        let Ok(tag) = URL_SAFE_NO_PAD.decode(token.trim()) else {
            return false;
        };

        hmac::verify(&self.key, message(intent, nonce).as_bytes(), &tag).is_ok()
    }
}

fn message(intent: &str, nonce: &str) -> String {
    format!("{}:{}", intent, nonce)
}

fn generate_nonce() -> Option<String> {
    let mut bytes = [0u8; NONCE_LENGTH];
    match SystemRandom::new().fill(&mut bytes) {
        Ok(()) => Some(URL_SAFE_NO_PAD.encode(bytes)),
        Err(_) => {
            warn!("system random generator failed, no csrf nonce issued");
            None
        }
    }
}
