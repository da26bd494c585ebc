//! # Infrastructure Layer
//!
//! Adapters for storage. Only `persistence` exists today.

pub mod persistence;
