//! Auto attendant models (`telephony/config/autoAttendants`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AlternateNumber, AudioFile, DialingScope, Greeting};

string_enum! {
    /// Key on the caller's dial pad.
    pub enum MenuKey {
        Digit0 => "0",
        Digit1 => "1",
        Digit2 => "2",
        Digit3 => "3",
        Digit4 => "4",
        Digit5 => "5",
        Digit6 => "6",
        Digit7 => "7",
        Digit8 => "8",
        Digit9 => "9",
        Star => "*",
        Hash => "#",
    }
}

string_enum! {
    /// Action bound to a menu key.
    pub enum MenuAction {
        TransferWithoutPrompt => "TRANSFER_WITHOUT_PROMPT",
        TransferWithPrompt => "TRANSFER_WITH_PROMPT",
        TransferToOperator => "TRANSFER_TO_OPERATOR",
        NameDialing => "NAME_DIALING",
        ExtensionDialing => "EXTENSION_DIALING",
        RepeatMenu => "REPEAT_MENU",
        Exit => "EXIT",
        TransferToMailbox => "TRANSFER_TO_MAILBOX",
        ReturnToPreviousMenu => "RETURN_TO_PREVIOUS_MENU",
    }
}

/// Auto attendant summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoAttendant {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub toll_free_number: Option<bool>,
}

/// Key binding of a menu.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyConfiguration {
    pub key: Option<MenuKey>,
    pub action: Option<MenuAction>,
    pub description: Option<String>,
    /// Destination number for transfer actions
    pub value: Option<String>,
    pub audio_announcement_file: Option<AudioFile>,
}

/// Business hours or after hours menu.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoAttendantMenu {
    pub greeting: Option<Greeting>,
    pub extension_enabled: Option<bool>,
    pub audio_announcement_file: Option<AudioFile>,
    pub key_configurations: Option<Vec<KeyConfiguration>>,
}

/// Full configuration of an auto attendant.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoAttendantDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub toll_free_number: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub alternate_numbers: Option<Vec<AlternateNumber>>,
    pub language: Option<String>,
    pub language_code: Option<String>,
    /// Name of the business hours schedule
    pub business_schedule: Option<String>,
    /// Name of the holiday schedule
    pub holiday_schedule: Option<String>,
    pub extension_dialing: Option<DialingScope>,
    pub name_dialing: Option<DialingScope>,
    pub time_zone: Option<String>,
    pub business_hours_menu: Option<AutoAttendantMenu>,
    pub after_hours_menu: Option<AutoAttendantMenu>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_menu_keys_parse() {
        let menu: AutoAttendantMenu = serde_json::from_value(json!({
            "greeting": "DEFAULT",
            "extensionEnabled": true,
            "keyConfigurations": [
                {"key": "0", "action": "TRANSFER_TO_OPERATOR", "value": "1000"},
                {"key": "#", "action": "REPEAT_MENU"},
                {"key": "1", "action": "PLAY_ANNOUNCEMENT"}
            ]
        }))
        .unwrap();

        let keys = menu.key_configurations.unwrap();
        assert_eq!(keys[0].key, Some(MenuKey::Digit0));
        assert_eq!(keys[1].key, Some(MenuKey::Hash));
        assert_eq!(keys[2].action, Some(MenuAction::Unrecognized("PLAY_ANNOUNCEMENT".to_string())));
    }
}
