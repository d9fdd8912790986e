//! Core types for setup-ipfs: error taxonomy, platform resolution,
//! version normalization, directory paths, and the install state shared
//! between the install and cleanup runs.

pub mod error;
pub mod paths;
pub mod platform;
pub mod state;
pub mod version;

pub use error::{Error, Result};
