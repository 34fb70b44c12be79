//! Organisation-wide calling settings (`telephony/config`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Language available for announcements.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementLanguage {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// Default PIN assigned to new voicemail boxes.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultVoicemailPin {
    pub enabled: Option<bool>,
    pub pin: Option<String>,
}

/// Passcode expiry rule.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirePasscode {
    pub enabled: Option<bool>,
    pub number_of_days: Option<u32>,
}

/// Forced change after a number of days.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasscode {
    pub enabled: Option<bool>,
    pub number_of_days: Option<u32>,
}

/// Reuse guard for previous passcodes.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPreviousPasscodes {
    pub enabled: Option<bool>,
    pub number_of_passcodes: Option<u32>,
}

/// Toggle-only passcode rule.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasscodeRuleToggle {
    pub enabled: Option<bool>,
}

/// Limit on repeated digits.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRepeatedDigits {
    pub enabled: Option<bool>,
    pub max: Option<u32>,
}

/// Limit on ascending or descending digit runs.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockContiguousSequences {
    pub enabled: Option<bool>,
    pub number_of_ascending_digits: Option<u32>,
    pub number_of_descending_digits: Option<u32>,
}

/// Passcode length limits.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasscodeLength {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// Composition rules for voicemail passcodes.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasscodeRule {
    pub block_repeated_patterns_enabled: Option<bool>,
    pub block_repeated_digits: Option<BlockRepeatedDigits>,
    pub block_contiguous_sequences: Option<BlockContiguousSequences>,
    pub length: Option<PasscodeLength>,
    pub block_reversed_user_number_enabled: Option<bool>,
    pub block_user_number: Option<PasscodeRuleToggle>,
    pub block_reversed_old_passcode: Option<PasscodeRuleToggle>,
    pub block_previous_passcodes: Option<BlockPreviousPasscodes>,
}

/// Organisation voicemail PIN rules.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailRules {
    pub default_voicemail_pin_rules: Option<DefaultVoicemailPin>,
    /// Write only: new default PIN
    pub default_voicemail_pin: Option<String>,
    pub default_voicemail_pin_enabled: Option<bool>,
    pub expire_passcode: Option<ExpirePasscode>,
    pub change_passcode: Option<ChangePasscode>,
    pub block_previous_passcodes: Option<BlockPreviousPasscodes>,
    pub passcode_rule: Option<PasscodeRule>,
}

/// Organisation voicemail message expiry.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgVoicemailSettings {
    pub message_expiry_enabled: Option<bool>,
    pub number_of_days_for_message_expiry: Option<u32>,
    pub strict_deletion_enabled: Option<bool>,
    pub voice_message_forwarding_enabled: Option<bool>,
}

/// Organisation call recording vendor settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgCallRecording {
    pub enabled: Option<bool>,
    pub vendor_id: Option<String>,
    pub vendor_name: Option<String>,
    pub terms_of_service_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_voicemail_rules_partial_update() {
        let rules = VoicemailRules {
            expire_passcode: Some(ExpirePasscode { enabled: Some(true), number_of_days: Some(90) }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&rules).unwrap(),
            json!({"expirePasscode": {"enabled": true, "numberOfDays": 90}})
        );
    }
}
