//! Detector types
//!
//! Detectors define rules for identifying conditions of interest and the
//! notifications to send when those conditions occur or stop occurring.

use serde::{Deserialize, Serialize};

use super::token::Notification;

/// A detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detector {
    /// Teams and users allowed to modify the detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_writers: Option<AuthorizedWriters>,

    /// Creation time in milliseconds since the Unix epoch (UTC). Always set
    /// by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// User ID of the initial creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// User-defined JSON object containing metadata. Opaque to this client;
    /// any caller-supplied structure survives round-trip unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<serde_json::Value>,

    /// Description of the detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// System-defined identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Label resolution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_resolution: Option<i64>,

    /// Last update time in milliseconds since the Unix epoch (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,

    /// User ID of the last updater; the system uses a fixed sentinel ID for
    /// its own updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,

    /// If `true`, the detector cannot be modified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    /// Milliseconds to wait for late datapoints before rejecting them.
    /// 0 asks the service to pick a value automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delay: Option<i32>,

    /// The displayed name of the detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether one or more statements matched too many time series and the
    /// matched set was forcefully limited
    #[serde(rename = "overMTSLimit", skip_serializing_if = "Option::is_none")]
    pub over_mts_limit: Option<bool>,

    /// The package spec. The service mandates this field is always present
    /// on the wire, so it serializes even when empty.
    #[serde(rename = "packageSpecifications", default)]
    pub package_specification: String,

    /// The analytics program that populates the detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_text: Option<String>,

    /// Alerting rules, one per detect label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,

    /// Keywords for filtering detectors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// IDs of teams associated with this detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,

    /// Options controlling the detector's appearance in the web UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization_options: Option<Visualization>,
}

/// Teams and users allowed to modify a detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizedWriters {
    /// Team IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,

    /// User IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
}

/// An alerting rule attached to a detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Description shown with alerts fired by this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The publish label of the detect statement this rule applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_label: Option<String>,

    /// Whether the rule is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Notification destinations for alerts from this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Notification>>,

    /// Custom notification message body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameterized_body: Option<String>,

    /// Custom notification message subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameterized_subject: Option<String>,

    /// URL of a runbook for handling alerts from this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runbook_url: Option<String>,

    /// Alert severity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Plain-text tip shown with alerts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// Alert severity of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Critical severity
    Critical,
    /// Warning severity
    Warning,
    /// Major severity
    Major,
    /// Minor severity
    Minor,
    /// Informational severity
    Info,
}

/// Options controlling a detector's appearance in the web UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    /// Disable sampling of the displayed signal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_sampling: Option<bool>,

    /// Show markers on datapoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_data_markers: Option<bool>,

    /// Show vertical lines at event times
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_event_lines: Option<bool>,

    /// Time window to display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,
}

/// Displayed time window, either absolute (`start`/`end`) or relative
/// (`range`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Time {
    /// Window end in milliseconds since the Unix epoch (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,

    /// Relative window length in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<i64>,

    /// Window start in milliseconds since the Unix epoch (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,

    /// Window type, `"absolute"` or `"relative"`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Request body for creating or updating a detector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateDetectorRequest {
    /// Teams and users allowed to modify the detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_writers: Option<AuthorizedWriters>,

    /// User-defined JSON metadata, preserved as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<serde_json::Value>,

    /// Description of the detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Milliseconds to wait for late datapoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delay: Option<i32>,

    /// The displayed name of the detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The analytics program that populates the detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_text: Option<String>,

    /// Alerting rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,

    /// Keywords for filtering detectors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// IDs of teams associated with this detector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,

    /// Options controlling the detector's appearance in the web UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization_options: Option<Visualization>,
}

/// One page of detector search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorSearchResults {
    /// Total number of matching detectors, across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// The detectors on this page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<Detector>,
}
