//! Best-effort parsing of research document headers and titles.

pub mod header;
pub mod title;

pub use header::parse_header;
pub use title::extract_title;
