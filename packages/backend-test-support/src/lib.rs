//! Backend test support utilities
//!
//! Unified logging initialization and assertions for the in-band failure
//! payload, shared by the backend's unit and integration tests.

pub mod in_band;
pub mod logging;
