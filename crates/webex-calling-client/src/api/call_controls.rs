//! Call control for the authenticated user (`telephony/calls`).

use std::sync::Arc;

use webex_calling_types::{
    AnswerBody, Call, CallHistoryRecord, CallHistoryType, CallIdBody, DialBody, DialResponse,
    DivertBody, ParkBody, ParkResponse, RejectAction, RejectBody, TargetBody, TransferBody,
    TransmitDtmfBody,
};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::params::QueryParams;
use crate::session::RestSession;

pub struct CallControlsApi {
    child: ApiChild,
}

impl CallControlsApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "telephony/calls") }
    }

    async fn action<B: serde::Serialize>(&self, action: &str, body: &B) -> Result<()> {
        self.child.post_empty(&self.child.ep(Some(action)), &QueryParams::new(), Some(body)).await
    }

    fn call(call_id: Option<&str>) -> CallIdBody {
        CallIdBody { call_id: call_id.map(str::to_string) }
    }

    /// Start a call to `destination` (number, SIP URI or extension).
    pub async fn dial(&self, destination: &str, endpoint_id: Option<&str>) -> Result<DialResponse> {
        let body = DialBody {
            destination: Some(destination.to_string()),
            endpoint_id: endpoint_id.map(str::to_string),
        };
        self.child.post(&self.child.ep(Some("dial")), &QueryParams::new(), &body).await
    }

    pub async fn answer(&self, call_id: &str, endpoint_id: Option<&str>) -> Result<()> {
        let body = AnswerBody {
            call_id: Some(call_id.to_string()),
            endpoint_id: endpoint_id.map(str::to_string),
        };
        self.action("answer", &body).await
    }

    pub async fn reject(&self, call_id: &str, action: Option<RejectAction>) -> Result<()> {
        let body = RejectBody { call_id: Some(call_id.to_string()), action };
        self.action("reject", &body).await
    }

    pub async fn hangup(&self, call_id: &str) -> Result<()> {
        self.action("hangup", &Self::call(Some(call_id))).await
    }

    pub async fn hold(&self, call_id: &str) -> Result<()> {
        self.action("hold", &Self::call(Some(call_id))).await
    }

    pub async fn resume(&self, call_id: &str) -> Result<()> {
        self.action("resume", &Self::call(Some(call_id))).await
    }

    /// Divert an incoming or connected call to a destination or to voicemail.
    pub async fn divert(
        &self,
        call_id: &str,
        destination: Option<&str>,
        to_voicemail: Option<bool>,
    ) -> Result<()> {
        let body = DivertBody {
            call_id: Some(call_id.to_string()),
            destination: destination.map(str::to_string),
            to_voicemail,
        };
        self.action("divert", &body).await
    }

    /// Attended transfer between two calls, or blind transfer to `destination`.
    pub async fn transfer(
        &self,
        call_id1: Option<&str>,
        call_id2: Option<&str>,
        destination: Option<&str>,
    ) -> Result<()> {
        let body = TransferBody {
            call_id1: call_id1.map(str::to_string),
            call_id2: call_id2.map(str::to_string),
            destination: destination.map(str::to_string),
        };
        self.action("transfer", &body).await
    }

    pub async fn park(
        &self,
        call_id: &str,
        destination: Option<&str>,
        is_group_park: Option<bool>,
    ) -> Result<ParkResponse> {
        let body = ParkBody {
            call_id: Some(call_id.to_string()),
            destination: destination.map(str::to_string),
            is_group_park,
        };
        self.child.post(&self.child.ep(Some("park")), &QueryParams::new(), &body).await
    }

    /// Retrieve a parked call.
    pub async fn retrieve(
        &self,
        destination: Option<&str>,
        endpoint_id: Option<&str>,
    ) -> Result<DialResponse> {
        let body = DialBody {
            destination: destination.map(str::to_string),
            endpoint_id: endpoint_id.map(str::to_string),
        };
        self.child.post(&self.child.ep(Some("retrieve")), &QueryParams::new(), &body).await
    }

    pub async fn start_recording(&self, call_id: Option<&str>) -> Result<()> {
        self.action("startRecording", &Self::call(call_id)).await
    }

    pub async fn stop_recording(&self, call_id: Option<&str>) -> Result<()> {
        self.action("stopRecording", &Self::call(call_id)).await
    }

    pub async fn pause_recording(&self, call_id: Option<&str>) -> Result<()> {
        self.action("pauseRecording", &Self::call(call_id)).await
    }

    pub async fn resume_recording(&self, call_id: Option<&str>) -> Result<()> {
        self.action("resumeRecording", &Self::call(call_id)).await
    }

    pub async fn transmit_dtmf(&self, call_id: Option<&str>, dtmf: Option<&str>) -> Result<()> {
        let body = TransmitDtmfBody {
            call_id: call_id.map(str::to_string),
            dtmf: dtmf.map(str::to_string),
        };
        self.action("transmitDtmf", &body).await
    }

    /// Push a call from the Webex app to the user's desk phone.
    pub async fn push(&self, call_id: Option<&str>) -> Result<()> {
        self.action("push", &Self::call(call_id)).await
    }

    pub async fn pickup(&self, target: Option<&str>, endpoint_id: Option<&str>) -> Result<DialResponse> {
        let body = TargetBody {
            target: target.map(str::to_string),
            endpoint_id: endpoint_id.map(str::to_string),
        };
        self.child.post(&self.child.ep(Some("pickup")), &QueryParams::new(), &body).await
    }

    pub async fn barge_in(&self, target: &str, endpoint_id: Option<&str>) -> Result<DialResponse> {
        let body = TargetBody {
            target: Some(target.to_string()),
            endpoint_id: endpoint_id.map(str::to_string),
        };
        self.child.post(&self.child.ep(Some("bargeIn")), &QueryParams::new(), &body).await
    }

    /// Active calls of the user. Not paginated.
    pub async fn list_calls(&self) -> Result<Vec<Call>> {
        self.child.get_list(&self.child.ep(None), &QueryParams::new(), "items").await
    }

    pub async fn call_details(&self, call_id: &str) -> Result<Call> {
        self.child.get(&self.child.ep(Some(call_id)), &QueryParams::new()).await
    }

    pub async fn list_call_history(
        &self,
        history_type: Option<CallHistoryType>,
    ) -> Result<Vec<CallHistoryRecord>> {
        let params = QueryParams::new().with_opt("type", history_type);
        self.child.get_list(&self.child.ep(Some("history")), &params, "items").await
    }
}
