//! journey-insights: structured insight generation with Hexagonal Architecture.
//!
//! Session summaries, sentiment analysis and personal-growth insights from an
//! OpenAI-compatible endpoint, with a deterministic fallback for every failure.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
