//! ESPN API access: HTTP client and wire-format types.

pub mod http;
pub mod types;
