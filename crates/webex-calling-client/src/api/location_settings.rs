//! Calling settings of locations (`telephony/config/locations`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use webex_calling_types::{
    AnnouncementLanguageChange, InternalDialing, Location, LocationCallingDetails,
    LocationVoicemailSettings, ValidateExtensionsResponse,
};

use crate::api_child::ApiChild;
use crate::error::{ClientError, Result};
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

/// Filters of [`LocationCallSettingsApi::list_calling_locations`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallingLocationListParams {
    pub name: Option<String>,
    /// Sort order, e.g. `name-asc`
    pub order: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct GeneratePasswordBody<'a> {
    generate: Option<&'a [String]>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedPassword {
    example_sip_password: Option<String>,
}

#[derive(Serialize)]
struct ValidateExtensionsBody<'a> {
    extensions: &'a [String],
}

pub struct LocationCallSettingsApi {
    child: ApiChild,
}

impl LocationCallSettingsApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "telephony/config/locations") }
    }

    /// Enable an existing location for Webex Calling and return its ID.
    pub async fn enable_for_calling(&self, location: &Location, org_id: Option<&str>) -> Result<String> {
        self.child.post_for_id(&self.child.ep(None), &QueryParams::org_id(org_id), location).await
    }

    pub fn list_calling_locations(&self, params: &CallingLocationListParams) -> ItemStream<Location> {
        self.child.paginate_filtered(self.child.ep(None), params, "locations")
    }

    pub async fn details(&self, location_id: &str, org_id: Option<&str>) -> Result<LocationCallingDetails> {
        self.child.get(&self.child.ep(Some(location_id)), &QueryParams::org_id(org_id)).await
    }

    pub async fn update(
        &self,
        location_id: &str,
        settings: &LocationCallingDetails,
        org_id: Option<&str>,
    ) -> Result<()> {
        let body = LocationCallingDetails { id: None, ..settings.clone() };
        self.child
            .put_empty(&self.child.ep(Some(location_id)), &QueryParams::org_id(org_id), &body)
            .await
    }

    /// Change the announcement language of the location and optionally of its
    /// existing users and features.
    pub async fn change_announcement_language(
        &self,
        location_id: &str,
        language_code: &str,
        agent_enabled: Option<bool>,
        entity_enabled: Option<bool>,
        org_id: Option<&str>,
    ) -> Result<()> {
        let body = AnnouncementLanguageChange {
            announcement_language_code: Some(language_code.to_string()),
            agent_enabled,
            entity_enabled,
        };
        let url = self.child.ep(Some(&format!(
            "{location_id}/actions/modifyAnnouncementLanguage/invoke"
        )));
        self.child.put_empty(&url, &QueryParams::org_id(org_id), &body).await
    }

    pub async fn read_internal_dialing(&self, location_id: &str, org_id: Option<&str>) -> Result<InternalDialing> {
        let url = self.child.ep(Some(&format!("{location_id}/internalDialing")));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    pub async fn update_internal_dialing(
        &self,
        location_id: &str,
        settings: &InternalDialing,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.child.ep(Some(&format!("{location_id}/internalDialing")));
        self.child.put_empty(&url, &QueryParams::org_id(org_id), settings).await
    }

    pub async fn read_voicemail_policy(
        &self,
        location_id: &str,
        org_id: Option<&str>,
    ) -> Result<LocationVoicemailSettings> {
        let url = self.child.ep(Some(&format!("{location_id}/voicemail")));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    pub async fn update_voicemail_policy(
        &self,
        location_id: &str,
        settings: &LocationVoicemailSettings,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.child.ep(Some(&format!("{location_id}/voicemail")));
        self.child.put_empty(&url, &QueryParams::org_id(org_id), settings).await
    }

    /// Ask the server for a SIP password satisfying the location's rules.
    pub async fn generate_password(
        &self,
        location_id: &str,
        generate: Option<&[String]>,
        org_id: Option<&str>,
    ) -> Result<String> {
        let url = self.child.ep(Some(&format!("{location_id}/actions/generatePassword/invoke")));
        let body = GeneratePasswordBody { generate };
        let generated: GeneratedPassword = self.child.post(&url, &QueryParams::org_id(org_id), &body).await?;
        generated
            .example_sip_password
            .ok_or_else(|| ClientError::InvalidResponse("no exampleSipPassword in response".to_string()))
    }

    pub async fn validate_extensions(
        &self,
        location_id: &str,
        extensions: &[String],
        org_id: Option<&str>,
    ) -> Result<ValidateExtensionsResponse> {
        let url = self.child.ep(Some(&format!("{location_id}/actions/validateExtensions/invoke")));
        let body = ValidateExtensionsBody { extensions };
        self.child.post(&url, &QueryParams::org_id(org_id), &body).await
    }
}
