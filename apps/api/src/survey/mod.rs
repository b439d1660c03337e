//! Survey pipeline: AI-response normalization and heuristic enrichment.
//!
//! Flow for recommendations:
//!   raw AI text → json_extract → parser → enrich → (image attachment) → UI
//! Flow for roadmaps:
//!   raw AI text → roadmap::parse_steps → roadmap::enrich_roadmap → UI
//!
//! Everything below `handlers` is a pure, synchronous transformation over
//! immutable inputs — no I/O, no shared state, no failure paths.

pub mod enrich;
pub mod handlers;
pub mod json_extract;
pub mod markdown;
pub mod parser;
pub mod prompts;
pub mod roadmap;
pub mod types;
