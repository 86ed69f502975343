//! Kernel utilities shared across slices and apps.
//! Keep this crate lightweight; it re-exports the domain and provides layered config loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! # #[cfg(not(target_arch = "wasm32"))]
//! # {
//! use pcat_kernel::config::load_config;
//! use pcat_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("catalog")).unwrap_or_default();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use pcat_domain as domain;
