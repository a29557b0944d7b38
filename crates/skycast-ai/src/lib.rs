//! Natural-language weather summaries for SkyCast
//!
//! Renders a fixed prompt from a structured forecast snapshot and submits
//! it to a chat-completions service, validating the reply against a
//! `{summary: string}` schema. The structured input keeps the prompt
//! contract stable while the upstream forecast shape evolves.

pub mod client;
pub mod prompt;
pub mod types;

pub use client::SummaryClient;
pub use types::{DailyEntry, HourlyEntry, SummaryInput};
