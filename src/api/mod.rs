//! API Layer
//!
//! HTTP access to the scheduler backend.

pub mod client;

pub use client::*;
