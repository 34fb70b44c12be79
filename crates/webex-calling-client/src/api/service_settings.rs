//! Organisation-wide calling service settings (`telephony/config`).

use std::sync::Arc;

use webex_calling_types::{AnnouncementLanguage, OrgCallRecording, OrgVoicemailSettings, VoicemailRules};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::params::QueryParams;
use crate::session::RestSession;

pub struct CallingServiceSettingsApi {
    child: ApiChild,
}

impl CallingServiceSettingsApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "telephony/config") }
    }

    pub async fn announcement_languages(&self) -> Result<Vec<AnnouncementLanguage>> {
        self.child
            .get_list(&self.child.ep(Some("announcementLanguages")), &QueryParams::new(), "languages")
            .await
    }

    pub async fn read_voicemail_rules(&self, org_id: Option<&str>) -> Result<VoicemailRules> {
        self.child.get(&self.child.ep(Some("voicemail/rules")), &QueryParams::org_id(org_id)).await
    }

    pub async fn update_voicemail_rules(&self, rules: &VoicemailRules, org_id: Option<&str>) -> Result<()> {
        let body = VoicemailRules { default_voicemail_pin_rules: None, ..rules.clone() };
        self.child
            .put_empty(&self.child.ep(Some("voicemail/rules")), &QueryParams::org_id(org_id), &body)
            .await
    }

    pub async fn read_voicemail_settings(&self, org_id: Option<&str>) -> Result<OrgVoicemailSettings> {
        self.child.get(&self.child.ep(Some("voicemail/settings")), &QueryParams::org_id(org_id)).await
    }

    pub async fn update_voicemail_settings(
        &self,
        settings: &OrgVoicemailSettings,
        org_id: Option<&str>,
    ) -> Result<()> {
        self.child
            .put_empty(&self.child.ep(Some("voicemail/settings")), &QueryParams::org_id(org_id), settings)
            .await
    }

    pub async fn read_call_recording(&self, org_id: Option<&str>) -> Result<OrgCallRecording> {
        self.child.get(&self.child.ep(Some("callRecording")), &QueryParams::org_id(org_id)).await
    }

    /// Only `enabled` is writable.
    pub async fn update_call_recording(&self, enabled: bool, org_id: Option<&str>) -> Result<()> {
        let body = OrgCallRecording { enabled: Some(enabled), ..Default::default() };
        self.child
            .put_empty(&self.child.ep(Some("callRecording")), &QueryParams::org_id(org_id), &body)
            .await
    }
}
