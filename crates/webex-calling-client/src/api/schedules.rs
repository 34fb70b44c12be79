//! Location schedules (`telephony/config/locations/{location_id}/schedules`).

use std::sync::Arc;

use webex_calling_types::{Schedule, ScheduleDetails, ScheduleEvent, ScheduleType};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

pub struct ScheduleApi {
    child: ApiChild,
}

impl ScheduleApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "telephony/config/locations") }
    }

    fn url(&self, location_id: &str, path: Option<String>) -> String {
        match path {
            Some(path) => self.child.ep(Some(&format!("{location_id}/schedules/{path}"))),
            None => self.child.ep(Some(&format!("{location_id}/schedules"))),
        }
    }

    pub fn list(
        &self,
        location_id: &str,
        schedule_type: Option<ScheduleType>,
        name: Option<&str>,
        org_id: Option<&str>,
    ) -> ItemStream<Schedule> {
        let params = QueryParams::new()
            .with_opt("type", schedule_type)
            .with_opt("name", name)
            .with_opt("orgId", org_id);
        self.child.paginate(self.url(location_id, None), params, "schedules")
    }

    pub async fn details(
        &self,
        location_id: &str,
        schedule_type: &ScheduleType,
        schedule_id: &str,
        org_id: Option<&str>,
    ) -> Result<ScheduleDetails> {
        let url = self.url(location_id, Some(format!("{schedule_type}/{schedule_id}")));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    pub async fn create(&self, location_id: &str, schedule: &ScheduleDetails, org_id: Option<&str>) -> Result<String> {
        self.child
            .post_for_id(&self.url(location_id, None), &QueryParams::org_id(org_id), schedule)
            .await
    }

    /// Update a schedule. Renaming changes the ID, so the new ID is returned.
    pub async fn update(
        &self,
        location_id: &str,
        schedule_type: &ScheduleType,
        schedule_id: &str,
        schedule: &ScheduleDetails,
        org_id: Option<&str>,
    ) -> Result<String> {
        let url = self.url(location_id, Some(format!("{schedule_type}/{schedule_id}")));
        self.child.put_for_id(&url, &QueryParams::org_id(org_id), schedule).await
    }

    pub async fn delete(
        &self,
        location_id: &str,
        schedule_type: &ScheduleType,
        schedule_id: &str,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.url(location_id, Some(format!("{schedule_type}/{schedule_id}")));
        self.child.delete(&url, &QueryParams::org_id(org_id)).await
    }

    fn event_url(
        &self,
        location_id: &str,
        schedule_type: &ScheduleType,
        schedule_id: &str,
        event_id: Option<&str>,
    ) -> String {
        let path = match event_id {
            Some(event_id) => format!("{schedule_type}/{schedule_id}/events/{event_id}"),
            None => format!("{schedule_type}/{schedule_id}/events"),
        };
        self.url(location_id, Some(path))
    }

    pub async fn event_details(
        &self,
        location_id: &str,
        schedule_type: &ScheduleType,
        schedule_id: &str,
        event_id: &str,
        org_id: Option<&str>,
    ) -> Result<ScheduleEvent> {
        let url = self.event_url(location_id, schedule_type, schedule_id, Some(event_id));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    pub async fn event_create(
        &self,
        location_id: &str,
        schedule_type: &ScheduleType,
        schedule_id: &str,
        event: &ScheduleEvent,
        org_id: Option<&str>,
    ) -> Result<String> {
        let url = self.event_url(location_id, schedule_type, schedule_id, None);
        self.child.post_for_id(&url, &QueryParams::org_id(org_id), event).await
    }

    pub async fn event_update(
        &self,
        location_id: &str,
        schedule_type: &ScheduleType,
        schedule_id: &str,
        event_id: &str,
        event: &ScheduleEvent,
        org_id: Option<&str>,
    ) -> Result<String> {
        let url = self.event_url(location_id, schedule_type, schedule_id, Some(event_id));
        self.child.put_for_id(&url, &QueryParams::org_id(org_id), event).await
    }

    pub async fn event_delete(
        &self,
        location_id: &str,
        schedule_type: &ScheduleType,
        schedule_id: &str,
        event_id: &str,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.event_url(location_id, schedule_type, schedule_id, Some(event_id));
        self.child.delete(&url, &QueryParams::org_id(org_id)).await
    }
}
