//! Simulated remote loading.
//!
//! There is no backend; startup data comes from an explicit async fetch that
//! resolves after a configured delay unless the caller's cancellation token
//! fires first, in which case the produced data is discarded and no store is
//! touched.

pub mod fetch;
pub mod sample;

pub use fetch::fetch_after_delay;
