//! Call queues, hunt groups and auto attendants.

use webex_calling_types::{
    AutoAttendant, AutoAttendantDetails, CallQueue, CallQueueDetails, HuntGroup, HuntGroupDetails,
};

location_feature_api! {
    /// Call queues (`telephony/config/queues`).
    CallQueueApi {
        collection: "queues",
        list_key: "queues",
        summary: CallQueue,
        details: CallQueueDetails,
        body: CallQueueDetails,
    }
}
feature_forwarding!(CallQueueApi);

location_feature_api! {
    /// Hunt groups (`telephony/config/huntGroups`).
    HuntGroupApi {
        collection: "huntGroups",
        list_key: "huntGroups",
        summary: HuntGroup,
        details: HuntGroupDetails,
        body: HuntGroupDetails,
    }
}
feature_forwarding!(HuntGroupApi);

location_feature_api! {
    /// Auto attendants (`telephony/config/autoAttendants`).
    AutoAttendantApi {
        collection: "autoAttendants",
        list_key: "autoAttendants",
        summary: AutoAttendant,
        details: AutoAttendantDetails,
        body: AutoAttendantDetails,
    }
}
feature_forwarding!(AutoAttendantApi);
