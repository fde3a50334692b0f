//! Wire data structures
//!
//! Plain records mirroring the service's documented JSON schema. Every field
//! is optional on the wire and omitted when unset, except where the service
//! mandates presence (see [`Detector::package_specification`]).

pub mod detector;
pub mod token;

pub use detector::{
    AuthorizedWriters, CreateUpdateDetectorRequest, Detector, DetectorSearchResults, Rule,
    Severity, Time, Visualization,
};
pub use token::{CreateUpdateTokenRequest, Notification, Token, TokenLimits, TokenSearchResults};
