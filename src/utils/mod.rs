//! Utility functions and helpers.

pub mod text;
pub mod url;

pub use text::{capitalize, dom_id, paragraphs, same_tag, truncate_words};
pub use self::url::{PLACEHOLDER_HREF, get_domain, is_http_location};
