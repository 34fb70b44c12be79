//! Paging groups and voicemail groups.

use webex_calling_types::{
    PagingGroup, PagingGroupDetails, PagingGroupUpdate, VoicemailGroup, VoicemailGroupDetails,
};

location_feature_api! {
    /// Paging groups (`telephony/config/paging`).
    ///
    /// Create and update take [`PagingGroupUpdate`], which lists originators
    /// and targets by ID; see [`PagingGroupDetails::for_update`].
    PagingGroupApi {
        collection: "paging",
        list_key: "locationPaging",
        summary: PagingGroup,
        details: PagingGroupDetails,
        body: PagingGroupUpdate,
    }
}

location_feature_api! {
    /// Voicemail groups (`telephony/config/voicemailGroups`).
    VoicemailGroupApi {
        collection: "voicemailGroups",
        list_key: "voicemailGroups",
        summary: VoicemailGroup,
        details: VoicemailGroupDetails,
        body: VoicemailGroupDetails,
    }
}
