// URL handling utilities
pub mod url_parser;
pub mod query_string;

pub use url_parser::hostname_from_url;
pub use query_string::build_query_string;
