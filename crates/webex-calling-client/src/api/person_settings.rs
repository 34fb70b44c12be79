//! Per-person calling features (`people/{person_id}/features/...`).

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use webex_calling_types::{
    BargeIn, CallRecording, CallWaiting, CallerId, DoNotDisturb, Hoteling, Intercept,
    OutgoingPermissions, PersonForwarding, PersonNumbers, Privacy, VoicemailSettings,
};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::params::QueryParams;
use crate::session::RestSession;

pub struct PersonSettingsApi {
    child: ApiChild,
    telephony: ApiChild,
}

macro_rules! person_feature {
    ($($(#[$meta:meta])* $read:ident, $configure:ident => $feature:literal, $model:ty;)+) => {
        impl PersonSettingsApi {
            $(
                $(#[$meta])*
                pub async fn $read(&self, person_id: &str, org_id: Option<&str>) -> Result<$model> {
                    self.read(person_id, $feature, org_id).await
                }

                pub async fn $configure(
                    &self,
                    person_id: &str,
                    settings: &$model,
                    org_id: Option<&str>,
                ) -> Result<()> {
                    self.configure(person_id, $feature, settings, org_id).await
                }
            )+
        }
    };
}

impl PersonSettingsApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self {
            child: ApiChild::new(Arc::clone(&session), "people"),
            telephony: ApiChild::new(session, "telephony/config/people"),
        }
    }

    fn feature_url(&self, person_id: &str, feature: &str) -> String {
        self.child.ep(Some(&format!("{person_id}/features/{feature}")))
    }

    async fn read<T: DeserializeOwned>(&self, person_id: &str, feature: &str, org_id: Option<&str>) -> Result<T> {
        self.child.get(&self.feature_url(person_id, feature), &QueryParams::org_id(org_id)).await
    }

    async fn configure<T: Serialize>(
        &self,
        person_id: &str,
        feature: &str,
        settings: &T,
        org_id: Option<&str>,
    ) -> Result<()> {
        self.child
            .put_empty(&self.feature_url(person_id, feature), &QueryParams::org_id(org_id), settings)
            .await
    }

    /// Primary and alternate numbers of a person.
    pub async fn read_numbers(&self, person_id: &str, org_id: Option<&str>) -> Result<PersonNumbers> {
        let url = self.telephony.ep(Some(&format!("{person_id}/numbers")));
        self.telephony.get(&url, &QueryParams::org_id(org_id)).await
    }
}

person_feature! {
    /// Always, busy, no-answer and business continuity forwarding.
    read_forwarding, configure_forwarding => "callForwarding", PersonForwarding;
    read_call_waiting, configure_call_waiting => "callWaiting", CallWaiting;
    read_dnd, configure_dnd => "doNotDisturb", DoNotDisturb;
    read_caller_id, configure_caller_id => "callerId", CallerId;
    read_voicemail, configure_voicemail => "voicemail", VoicemailSettings;
    /// Permissions per outgoing call type.
    read_outgoing_permissions, configure_outgoing_permissions => "outgoingPermission", OutgoingPermissions;
    read_barge_in, configure_barge_in => "bargeIn", BargeIn;
    read_call_recording, configure_call_recording => "callRecording", CallRecording;
    read_privacy, configure_privacy => "privacy", Privacy;
    read_hoteling, configure_hoteling => "hoteling", Hoteling;
    read_intercept, configure_intercept => "intercept", Intercept;
}
