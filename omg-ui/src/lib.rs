//! omg-ui - Shared UI components and state stores for the OMG playlist
//! manager.
//!
//! Contains the state slices, pure view components, and form validation
//! used by the web app. Nothing here talks to the network.

pub mod components;
pub mod stores;
pub mod timers;
pub mod validate;

pub use components::*;
