//! Shared fixtures for integration tests
//!
//! In-memory stand-ins for the catalog and the REST backend, a scripted local
//! HTTP server, plus builders for test books.

#![allow(dead_code)]

pub mod canned_server;
pub mod factories;
pub mod fakes;

pub use canned_server::*;
pub use factories::*;
pub use fakes::*;
