//! omg-common - Shared domain types for the OMG playlist manager
//!
//! Contains the wire types exchanged with the playlist API and pure
//! ordering logic used by the UI. No I/O lives here.

pub mod channel_order;
pub mod models;

pub use channel_order::*;
pub use models::*;
