//! Network layer - HTTP access to the amphibians endpoint
//!
//! The repository sits on top of the client and is the substitution point
//! the view model depends on.

pub mod client;
pub mod repository;

pub use client::AmphibianApi;
pub use repository::{AmphibiansRepository, NetworkAmphibiansRepository};
