//! Webhook models (`webhooks`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

string_enum! {
    /// Resource a webhook observes.
    pub enum WebhookResource {
        AttachmentActions => "attachmentActions",
        CallMemberships => "callMemberships",
        Calls => "calls",
        Memberships => "memberships",
        Messages => "messages",
        Rooms => "rooms",
        TelephonyCalls => "telephony_calls",
        TelephonyConference => "telephony_conference",
        TelephonyMwi => "telephony_mwi",
        ConvergedRecordings => "convergedRecordings",
        DataSources => "dataSources",
    }
}

string_enum! {
    /// Event a webhook fires on.
    pub enum WebhookEvent {
        Created => "created",
        Updated => "updated",
        Deleted => "deleted",
        Started => "started",
        Ended => "ended",
        All => "all",
    }
}

string_enum! {
    /// Whether the webhook is delivering.
    pub enum WebhookStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

/// Registered webhook. Also used as create and update body.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: Option<String>,
    pub name: Option<String>,
    pub target_url: Option<String>,
    pub resource: Option<WebhookResource>,
    pub event: Option<WebhookEvent>,
    pub filter: Option<String>,
    pub secret: Option<String>,
    pub status: Option<WebhookStatus>,
    pub created: Option<DateTime<Utc>>,
    pub org_id: Option<String>,
    pub created_by: Option<String>,
    pub app_id: Option<String>,
    pub owned_by: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_telephony_resource_values() {
        let hook: Webhook = serde_json::from_value(json!({
            "id": "wh1",
            "targetUrl": "https://example.com/hook",
            "resource": "telephony_calls",
            "event": "all",
            "status": "active"
        }))
        .unwrap();

        assert_eq!(hook.resource, Some(WebhookResource::TelephonyCalls));
        assert_eq!(hook.event, Some(WebhookEvent::All));
        assert_eq!(hook.status, Some(WebhookStatus::Active));
    }

    #[test]
    fn test_webhook_with_timestamp_round_trip() {
        let hook = Webhook {
            id: Some("w1".to_string()),
            name: Some("calls".to_string()),
            target_url: Some("https://example.com/hook".to_string()),
            resource: Some(WebhookResource::TelephonyCalls),
            event: Some(WebhookEvent::All),
            status: Some(WebhookStatus::Active),
            created: Some("2026-02-11T17:44:14.018Z".parse::<DateTime<Utc>>().unwrap()),
            ..Default::default()
        };

        let value = serde_json::to_value(&hook).unwrap();
        assert!(value.get("secret").is_none());
        assert_eq!(serde_json::from_value::<Webhook>(value).unwrap(), hook);
    }
}
