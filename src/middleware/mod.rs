pub mod csrf;
pub mod cookies;
pub mod error_pages;
pub mod security_headers;
