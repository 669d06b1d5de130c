//! Infrastructure adapters. Implement outbound ports.
//!
//! Completion endpoints only. Map errors to DomainError.

pub mod ai;
