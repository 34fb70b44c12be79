//! Call forwarding of call queues, hunt groups, and auto attendants.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Unconditional forwarding.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardAlways {
    pub enabled: Option<bool>,
    pub destination: Option<String>,
    pub ring_reminder_enabled: Option<bool>,
    pub send_to_voicemail_enabled: Option<bool>,
}

/// Forwarding driven by the selective rules.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardSelective {
    pub enabled: Option<bool>,
    pub destination: Option<String>,
    pub ring_reminder_enabled: Option<bool>,
    pub destination_voicemail_enabled: Option<bool>,
}

/// Summary of a selective forwarding rule.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingRule {
    pub id: Option<String>,
    pub name: Option<String>,
    pub call_from: Option<String>,
    pub calls_to: Option<String>,
    pub forward_to: Option<String>,
    pub enabled: Option<bool>,
}

/// Always/selective forwarding plus rule list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallForwardingSettings {
    pub always: Option<ForwardAlways>,
    pub selective: Option<ForwardSelective>,
    pub rules: Option<Vec<ForwardingRule>>,
}

/// Wrapper object returned by the `callForwarding` endpoints.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallForwarding {
    pub call_forwarding: Option<CallForwardingSettings>,
}

impl CallForwarding {
    /// Forwarding that sends every call to `destination`.
    pub fn always_to(destination: impl Into<String>) -> Self {
        Self {
            call_forwarding: Some(CallForwardingSettings {
                always: Some(ForwardAlways {
                    enabled: Some(true),
                    destination: Some(destination.into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        }
    }
}
