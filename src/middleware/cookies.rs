use tower_cookies::{ CookieManagerLayer, Cookies, Cookie };
use time::Duration;
use cookie::SameSite;

pub const CSRF_COOKIE_NAME: &str = "post_editor_csrf";
const CSRF_COOKIE_MAX_AGE: i64 = 7200; // 2 hours in seconds

/// Expose cookie middleware layer
pub fn cookie_layer() -> CookieManagerLayer {
    CookieManagerLayer::new()
}

pub struct CookieOptions {
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age: Option<Duration>,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            http_only: true,
            secure: false,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age: None,
        }
    }
}

pub fn set_cookie(cookies: &Cookies, name: String, value: String, options: CookieOptions) {
    let mut cookie = Cookie::new(name, value);
    cookie.set_http_only(options.http_only);
    cookie.set_secure(options.secure);
    cookie.set_same_site(options.same_site);
    cookie.set_path(options.path);

    if let Some(max_age) = options.max_age {
        cookie.set_max_age(max_age);
    }

    cookies.add(cookie);
}

pub fn set_csrf_nonce(cookies: &Cookies, nonce: String, secure: bool) {
    let options = CookieOptions {
        secure,
        path: "/posts".to_string(),
        max_age: Some(Duration::seconds(CSRF_COOKIE_MAX_AGE)),
        ..Default::default()
    };
    set_cookie(cookies, CSRF_COOKIE_NAME.to_string(), nonce, options);
}

pub fn get_csrf_nonce(cookies: &Cookies) -> Option<String> {
    cookies.get(CSRF_COOKIE_NAME).map(|c| c.value().to_string())
}
