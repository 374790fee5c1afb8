//! Shared test utilities for the files workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each grow their own fake file system. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`mock`]: [`MockContext`], an in-memory capability that records calls
//! - [`sandbox`]: [`Sandbox`], a temporary on-disk root for live tests

pub mod mock;
pub mod sandbox;

pub use mock::{Endpoint, MockContext};
pub use sandbox::Sandbox;
