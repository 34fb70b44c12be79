//! Webex Calling models, one module per resource group.
//!
//! Every module is re-exported flat, so type names are unique across modules.

pub mod auto_attendant;
pub mod call_controls;
pub mod call_park;
pub mod call_queue;
pub mod cdr;
pub mod common;
pub mod devices;
pub mod forwarding;
pub mod hunt_group;
pub mod locations;
pub mod numbers;
pub mod organizations;
pub mod paging_group;
pub mod people;
pub mod person_settings;
pub mod premise_pstn;
pub mod schedules;
pub mod service_settings;
pub mod voicemail_group;
pub mod webhooks;
pub mod workspaces;

pub use auto_attendant::*;
pub use call_controls::*;
pub use call_park::*;
pub use call_queue::*;
pub use cdr::*;
pub use common::*;
pub use devices::*;
pub use forwarding::*;
pub use hunt_group::*;
pub use locations::*;
pub use numbers::*;
pub use organizations::*;
pub use paging_group::*;
pub use people::*;
pub use person_settings::*;
pub use premise_pstn::*;
pub use schedules::*;
pub use service_settings::*;
pub use voicemail_group::*;
pub use webhooks::*;
pub use workspaces::*;
