//! # Webex Calling Types
//!
//! Request and response models for the Webex Calling configuration API.
//!
//! This crate provides the data layer of the SDK:
//!
//! - **`models`** - One record type per JSON object shape, grouped by resource
//! - **`string_enum!`** - Open string vocabularies that never fail to parse
//!
//! ## Architecture Role
//!
//! ```text
//!         webex-calling-types (this crate)
//!                    │
//!                    ▼
//!         webex-calling-client
//!                    │
//!                    ▼
//!           webex-calling-cli
//! ```
//!
//! All models are designed to be:
//! - **Partial**: every field is optional and unset fields are never serialized
//! - **camelCase on the wire**, snake_case in Rust
//! - **Tolerant**: unknown JSON keys are ignored, unknown enum values are kept

#[macro_use]
mod macros;

pub mod models;

pub use models::*;
