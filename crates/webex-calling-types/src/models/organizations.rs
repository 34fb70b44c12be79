//! Organisation model (`organizations`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Webex organisation. `calling_data` fields are only present when requested.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub xsi_actions_endpoint: Option<String>,
    pub xsi_events_endpoint: Option<String>,
    pub xsi_events_channel_endpoint: Option<String>,
    pub xsi_domain: Option<String>,
}
