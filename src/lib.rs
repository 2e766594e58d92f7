//! Support Triage — rule-based enrichment for support email queues.

pub mod config;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod queue;
pub mod render;
