//! Location schedule models (`telephony/config/locations/{id}/schedules`).
//!
//! Schedule IDs are only unique together with their type, so every schedule
//! operation takes a [`ScheduleType`] next to the ID.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

string_enum! {
    /// Kind of schedule.
    pub enum ScheduleType {
        BusinessHours => "businessHours",
        Holidays => "holidays",
    }
}

string_enum! {
    /// Month of a yearly recurrence.
    pub enum Month {
        January => "JANUARY",
        February => "FEBRUARY",
        March => "MARCH",
        April => "APRIL",
        May => "MAY",
        June => "JUNE",
        July => "JULY",
        August => "AUGUST",
        September => "SEPTEMBER",
        October => "OCTOBER",
        November => "NOVEMBER",
        December => "DECEMBER",
    }
}

/// Weekly recurrence flags.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurWeekly {
    pub sunday: Option<bool>,
    pub monday: Option<bool>,
    pub tuesday: Option<bool>,
    pub wednesday: Option<bool>,
    pub thursday: Option<bool>,
    pub friday: Option<bool>,
    pub saturday: Option<bool>,
}

impl RecurWeekly {
    /// Monday to Friday.
    pub fn weekdays() -> Self {
        Self {
            sunday: Some(false),
            monday: Some(true),
            tuesday: Some(true),
            wednesday: Some(true),
            thursday: Some(true),
            friday: Some(true),
            saturday: Some(false),
        }
    }
}

/// Yearly recurrence on a fixed date.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurYearlyByDate {
    pub day_of_month: Option<u32>,
    pub month: Option<Month>,
}

/// Recurrence of a schedule event.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    pub recur_for_ever: Option<bool>,
    pub recur_end_date: Option<NaiveDate>,
    pub recur_end_occurrence: Option<u32>,
    pub recur_daily: Option<serde_json::Value>,
    pub recur_weekly: Option<RecurWeekly>,
    pub recur_yearly_by_date: Option<RecurYearlyByDate>,
}

/// Event within a schedule. Times are `HH:MM` strings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Current name when renaming through an update
    pub new_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub all_day_enabled: Option<bool>,
    pub recurrence: Option<Recurrence>,
}

/// Schedule summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub schedule_type: Option<ScheduleType>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
}

/// Schedule with its events.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Current name when renaming through an update
    pub new_name: Option<String>,
    #[serde(rename = "type")]
    pub schedule_type: Option<ScheduleType>,
    pub events: Option<Vec<ScheduleEvent>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_dates_are_iso() {
        let event = ScheduleEvent {
            name: Some("Open".to_string()),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 5),
            start_time: Some("09:00".to_string()),
            end_time: Some("17:00".to_string()),
            recurrence: Some(Recurrence {
                recur_for_ever: Some(true),
                recur_weekly: Some(RecurWeekly::weekdays()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["startDate"], json!("2026-01-05"));
        assert_eq!(value["recurrence"]["recurWeekly"]["saturday"], json!(false));
        assert!(value.get("allDayEnabled").is_none());
    }

    #[test]
    fn test_schedule_type_field() {
        let schedule: Schedule =
            serde_json::from_value(json!({"id": "s1", "name": "Holidays", "type": "holidays"}))
                .unwrap();
        assert_eq!(schedule.schedule_type, Some(ScheduleType::Holidays));
    }

    #[test]
    fn test_details_with_dates_round_trip() {
        let schedule = ScheduleDetails {
            id: Some("s1".to_string()),
            name: Some("Holidays".to_string()),
            schedule_type: Some(ScheduleType::Holidays),
            events: Some(vec![ScheduleEvent {
                name: Some("New Year".to_string()),
                start_date: NaiveDate::from_ymd_opt(2027, 1, 1),
                end_date: NaiveDate::from_ymd_opt(2027, 1, 1),
                all_day_enabled: Some(true),
                recurrence: Some(Recurrence {
                    recur_for_ever: Some(true),
                    recur_yearly_by_date: Some(RecurYearlyByDate {
                        day_of_month: Some(1),
                        month: Some(Month::January),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let value = serde_json::to_value(&schedule).unwrap();
        assert_eq!(value["events"][0]["startDate"], json!("2027-01-01"));
        assert_eq!(serde_json::from_value::<ScheduleDetails>(value).unwrap(), schedule);
    }
}
