//! panocube CLI library.
//!
//! This crate provides the command implementations behind the `panocube`
//! binary: panorama-to-cubemap conversion and panorama inspection.

pub mod commands;
pub mod paths;
