//! kbase sync - external query engine client
//!
//! The local store can be mirrored into an external SQL query engine
//! for advanced query capability. This crate speaks the engine's
//! request/response protocol; the response body is treated as an
//! opaque success signal and never parsed.

pub mod client;

pub use client::{QueryRequest, SyncClient};
