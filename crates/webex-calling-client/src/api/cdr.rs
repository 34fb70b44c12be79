//! Detailed call history (`cdr_feed` on the analytics host).

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use webex_calling_types::CallDetailRecord;

use crate::api_child::ApiChild;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

const CDR_FEED_URL: &str = "https://analytics-calling.webexapis.com/v1/cdr_feed";

pub struct DetailedCallHistoryApi {
    child: ApiChild,
}

impl DetailedCallHistoryApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self::with_base(session, CDR_FEED_URL)
    }

    /// Use another feed URL, e.g. a regional host.
    pub fn with_base(session: Arc<RestSession>, base: &str) -> Self {
        Self { child: ApiChild::new(session, base) }
    }

    /// Records between `start_time` and `end_time`, optionally limited to location names.
    pub fn get(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        locations: Option<&[String]>,
        max: Option<u32>,
    ) -> ItemStream<CallDetailRecord> {
        let params = QueryParams::new()
            .with("startTime", format_time(&start_time))
            .with("endTime", format_time(&end_time))
            .with_opt("locations", locations.map(|l| l.join(",")))
            .with_opt("max", max);
        self.child.paginate(self.child.ep(None), params, "items")
    }
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_format_has_millis_and_z() {
        let Some(time) = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 5).single() else {
            panic!("valid timestamp");
        };
        assert_eq!(format_time(&time), "2026-03-01T10:00:05.000Z");
    }
}
