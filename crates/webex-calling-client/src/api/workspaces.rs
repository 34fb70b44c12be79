//! Workspaces (`workspaces`).

use std::sync::Arc;

use serde::Serialize;
use serde_with::skip_serializing_none;
use webex_calling_types::{Workspace, WorkspaceCallingType, WorkspaceType};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

/// Filters of [`WorkspacesApi::list`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceListParams {
    pub display_name: Option<String>,
    pub location_id: Option<String>,
    pub workspace_location_id: Option<String>,
    pub floor_id: Option<String>,
    #[serde(rename = "type")]
    pub workspace_type: Option<WorkspaceType>,
    pub capacity: Option<i64>,
    pub calling: Option<WorkspaceCallingType>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

pub struct WorkspacesApi {
    child: ApiChild,
}

impl WorkspacesApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "workspaces") }
    }

    pub fn list(&self, params: &WorkspaceListParams) -> ItemStream<Workspace> {
        self.child.paginate_filtered(self.child.ep(None), params, "items")
    }

    pub async fn details(&self, workspace_id: &str) -> Result<Workspace> {
        self.child.get(&self.child.ep(Some(workspace_id)), &QueryParams::new()).await
    }

    pub async fn create(&self, settings: &Workspace, org_id: Option<&str>) -> Result<Workspace> {
        let mut body = settings.clone();
        if let Some(org_id) = org_id {
            body.org_id = Some(org_id.to_string());
        }
        self.child.post(&self.child.ep(None), &QueryParams::new(), &body).await
    }

    pub async fn update(&self, workspace_id: &str, settings: &Workspace) -> Result<Workspace> {
        let body = Workspace { id: None, created: None, ..settings.clone() };
        self.child.put(&self.child.ep(Some(workspace_id)), &QueryParams::new(), &body).await
    }

    pub async fn delete(&self, workspace_id: &str) -> Result<()> {
        self.child.delete(&self.child.ep(Some(workspace_id)), &QueryParams::new()).await
    }
}
