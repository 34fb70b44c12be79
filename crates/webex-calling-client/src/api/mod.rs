//! Resource-group clients. Each wraps an [`ApiChild`](crate::ApiChild) for one
//! REST base path and shares the session of the [`WebexCallingApi`](crate::WebexCallingApi).

#[macro_use]
mod feature;

mod call_controls;
mod call_park;
mod call_queue;
mod cdr;
mod devices;
mod location_settings;
mod locations;
mod numbers;
mod organizations;
mod paging;
mod people;
mod person_settings;
mod premise_pstn;
mod schedules;
mod service_settings;
mod webhooks;
mod workspaces;

pub use call_controls::CallControlsApi;
pub use call_park::{
    AvailableAgentListParams, CallParkApi, CallParkExtensionListParams, CallPickupApi,
};
pub use call_queue::{AutoAttendantApi, CallQueueApi, HuntGroupApi};
pub use cdr::DetailedCallHistoryApi;
pub use devices::{DeviceListParams, DevicesApi, TelephonyDevicesApi};
pub use feature::FeatureListParams;
pub use location_settings::{CallingLocationListParams, LocationCallSettingsApi};
pub use locations::{LocationListParams, LocationsApi};
pub use numbers::{NumberListParams, NumbersApi};
pub use organizations::OrganizationsApi;
pub use paging::{PagingGroupApi, VoicemailGroupApi};
pub use people::{LicensesApi, PeopleApi, PeopleListParams};
pub use person_settings::PersonSettingsApi;
pub use premise_pstn::{
    DialPlanListParams, PremisePstnApi, RouteGroupListParams, RouteListListParams, TrunkListParams,
};
pub use schedules::ScheduleApi;
pub use service_settings::CallingServiceSettingsApi;
pub use webhooks::WebhooksApi;
pub use workspaces::{WorkspaceListParams, WorkspacesApi};
