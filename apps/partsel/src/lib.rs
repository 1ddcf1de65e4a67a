//! # partsel
//!
//! The binary's library half: HTTP API, CLI commands and configuration over
//! `partsel-core`. Split out so integration tests can drive the router.

pub mod api;
pub mod cli;
pub mod config;
