//! # Domain Models
//!
//! This crate contains pure catalog types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod models;
pub mod registry;
