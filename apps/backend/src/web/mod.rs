//! Web boundary helpers shared by middleware, extractors and error rendering.

pub mod trace_ctx;
