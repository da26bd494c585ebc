//! # API Layer
//!
//! Transport adapters. The REST API is the only one.

pub mod rest;
