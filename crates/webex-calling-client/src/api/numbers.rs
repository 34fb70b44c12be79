//! Phone numbers (`telephony/config/numbers`, `telephony/config/locations/{id}/numbers`).

use std::sync::Arc;

use serde::Serialize;
use serde_with::skip_serializing_none;
use webex_calling_types::{
    NumberListItem, NumberState, NumberType, NumbersBody, OwnerType, PhoneNumberKind, ValidateNumbersResponse,
};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

/// Filters of [`NumbersApi::list`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberListParams {
    pub location_id: Option<String>,
    /// Comma separated numbers
    pub phone_number: Option<String>,
    pub available: Option<bool>,
    pub order: Option<String>,
    pub owner_name: Option<String>,
    pub owner_id: Option<String>,
    pub owner_type: Option<OwnerType>,
    pub extension: Option<String>,
    pub number_type: Option<NumberType>,
    pub phone_number_type: Option<PhoneNumberKind>,
    pub state: Option<NumberState>,
    pub toll_free_numbers: Option<bool>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateNumbersBody<'a> {
    phone_numbers: &'a [String],
}

pub struct NumbersApi {
    child: ApiChild,
}

impl NumbersApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "telephony/config") }
    }

    pub fn list(&self, params: &NumberListParams) -> ItemStream<NumberListItem> {
        self.child.paginate_filtered(self.child.ep(Some("numbers")), params, "phoneNumbers")
    }

    fn location_numbers(&self, location_id: &str) -> String {
        self.child.ep(Some(&format!("locations/{location_id}/numbers")))
    }

    /// Add PSTN numbers to a location, inactive unless `state` says otherwise.
    pub async fn add(
        &self,
        location_id: &str,
        phone_numbers: &[String],
        number_type: Option<NumberType>,
        state: Option<NumberState>,
        org_id: Option<&str>,
    ) -> Result<()> {
        let body = NumbersBody {
            phone_numbers: phone_numbers.to_vec(),
            number_type,
            state,
        };
        self.child
            .post_empty(&self.location_numbers(location_id), &QueryParams::org_id(org_id), Some(&body))
            .await
    }

    pub async fn activate(&self, location_id: &str, phone_numbers: &[String], org_id: Option<&str>) -> Result<()> {
        let body = NumbersBody { phone_numbers: phone_numbers.to_vec(), ..Default::default() };
        self.child
            .put_empty(&self.location_numbers(location_id), &QueryParams::org_id(org_id), &body)
            .await
    }

    pub async fn remove(&self, location_id: &str, phone_numbers: &[String], org_id: Option<&str>) -> Result<()> {
        let body = NumbersBody { phone_numbers: phone_numbers.to_vec(), ..Default::default() };
        self.child
            .delete_with_body(&self.location_numbers(location_id), &QueryParams::org_id(org_id), &body)
            .await
    }

    pub async fn validate(&self, phone_numbers: &[String], org_id: Option<&str>) -> Result<ValidateNumbersResponse> {
        let url = self.child.ep(Some("actions/validateNumbers/invoke"));
        self.child
            .post(&url, &QueryParams::org_id(org_id), &ValidateNumbersBody { phone_numbers })
            .await
    }
}
