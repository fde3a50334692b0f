//! Org token types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An organization access token.
///
/// All fields are optional on the wire; fields the caller did not set are
/// omitted from the serialized object rather than sent as zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The time the token was created, in milliseconds since the Unix epoch
    /// (UTC). Always set by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// User ID of the creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Description of the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the token is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Expiry time in milliseconds since the Unix epoch (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,

    /// System-defined identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The last time the token was updated, in milliseconds since the Unix
    /// epoch (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,

    /// User ID of the last updater
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,

    /// Usage limits attached to this token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<TokenLimits>,

    /// The token name, unique within the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Notification destinations for limit warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Notification>>,

    /// The secret value of the token. Only returned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Usage quotas attached to an org token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenLimits {
    /// Per-category usage quotas, keyed by category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_quota: Option<HashMap<String, i64>>,

    /// Datapoints-per-minute quota
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpm_quota: Option<i32>,
}

/// A notification destination.
///
/// The service's notification objects are polymorphic: a `type` discriminant
/// plus type-specific properties. The extra properties are carried as an
/// opaque JSON map so arbitrary destination shapes survive round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Destination type discriminant, e.g. `"Email"` or `"Webhook"`
    #[serde(rename = "type")]
    pub kind: String,

    /// Type-specific properties, preserved as-is
    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Request body for creating or updating an org token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateTokenRequest {
    /// Description of the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the token should be disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Expiry time in milliseconds since the Unix epoch (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,

    /// Usage limits to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<TokenLimits>,

    /// The token name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Notification destinations for limit warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Notification>>,
}

/// One page of token search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSearchResults {
    /// Total number of matching tokens, across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// The tokens on this page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<Token>,
}
