//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the routing layer into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::InsightPort;
pub use outbound::{CompletionPort, CompletionRequest};
