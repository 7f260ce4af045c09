//! Error handling for the API client
//!
//! This module defines the normalized error taxonomy every consumer receives.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorCode, ErrorPayload};
pub use types::{ClientError, Result, SERVER_STARTING_MESSAGE};
