#![doc = include_str!("../README.md")]

pub mod api;
mod api_child;
mod config;
mod error;
mod pagination;
mod params;
mod session;

use std::sync::Arc;

pub use api_child::ApiChild;
pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use pagination::ItemStream;
pub use params::QueryParams;
pub use session::RestSession;
pub use webex_calling_types as types;

use api::{
    AutoAttendantApi, CallControlsApi, CallParkApi, CallPickupApi, CallQueueApi,
    CallingServiceSettingsApi, DetailedCallHistoryApi, DevicesApi, HuntGroupApi, LicensesApi,
    LocationCallSettingsApi, LocationsApi, NumbersApi, OrganizationsApi, PagingGroupApi, PeopleApi,
    PersonSettingsApi, PremisePstnApi, ScheduleApi, TelephonyDevicesApi, VoicemailGroupApi,
    WebhooksApi, WorkspacesApi,
};

/// Entry point: one shared session and a client per resource group.
pub struct WebexCallingApi {
    session: Arc<RestSession>,
    pub call_controls: CallControlsApi,
    pub locations: LocationsApi,
    pub location_settings: LocationCallSettingsApi,
    pub people: PeopleApi,
    pub licenses: LicensesApi,
    pub numbers: NumbersApi,
    pub call_queue: CallQueueApi,
    pub hunt_group: HuntGroupApi,
    pub auto_attendant: AutoAttendantApi,
    pub paging_group: PagingGroupApi,
    pub voicemail_group: VoicemailGroupApi,
    pub call_park: CallParkApi,
    pub call_pickup: CallPickupApi,
    pub person_settings: PersonSettingsApi,
    pub workspaces: WorkspacesApi,
    pub devices: DevicesApi,
    pub telephony_devices: TelephonyDevicesApi,
    pub schedules: ScheduleApi,
    pub premise_pstn: PremisePstnApi,
    pub service_settings: CallingServiceSettingsApi,
    pub webhooks: WebhooksApi,
    pub cdr: DetailedCallHistoryApi,
    pub organizations: OrganizationsApi,
}

impl WebexCallingApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_session(Arc::new(RestSession::new(config)?)))
    }

    /// Configure from `WEBEX_ACCESS_TOKEN` and friends, see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn with_session(session: Arc<RestSession>) -> Self {
        let s = || Arc::clone(&session);
        Self {
            call_controls: CallControlsApi::new(s()),
            locations: LocationsApi::new(s()),
            location_settings: LocationCallSettingsApi::new(s()),
            people: PeopleApi::new(s()),
            licenses: LicensesApi::new(s()),
            numbers: NumbersApi::new(s()),
            call_queue: CallQueueApi::new(s()),
            hunt_group: HuntGroupApi::new(s()),
            auto_attendant: AutoAttendantApi::new(s()),
            paging_group: PagingGroupApi::new(s()),
            voicemail_group: VoicemailGroupApi::new(s()),
            call_park: CallParkApi::new(s()),
            call_pickup: CallPickupApi::new(s()),
            person_settings: PersonSettingsApi::new(s()),
            workspaces: WorkspacesApi::new(s()),
            devices: DevicesApi::new(s()),
            telephony_devices: TelephonyDevicesApi::new(s()),
            schedules: ScheduleApi::new(s()),
            premise_pstn: PremisePstnApi::new(s()),
            service_settings: CallingServiceSettingsApi::new(s()),
            webhooks: WebhooksApi::new(s()),
            cdr: DetailedCallHistoryApi::new(s()),
            organizations: OrganizationsApi::new(s()),
            session,
        }
    }

    pub fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}
