//! API resource endpoints
//!
//! One module per resource type. Every operation here is a thin
//! instantiation of the same exchange: serialize, build the path, send,
//! validate the one expected status, decode.

pub mod detectors;
pub mod tokens;

pub use detectors::Detectors;
pub use tokens::Tokens;
