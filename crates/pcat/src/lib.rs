//! Facade crate for the product catalog.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `pcat` with the `client` feature to get the Dioxus components.
//! - Call [`init`] to build the registered feature slices.

pub use pcat_catalog as catalog;
pub use pcat_domain as domain;
pub use pcat_kernel as kernel;

use domain::registry::InitializedSlice;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "catalog",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init() -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Catalog
    slices.push(catalog::init()?);

    Ok(slices)
}

/// Looks up an initialized slice by its concrete type.
#[must_use]
pub fn slice<T: domain::registry::FeatureSlice>(slices: &[InitializedSlice]) -> Option<&T> {
    slices.iter().find_map(InitializedSlice::downcast_ref::<T>)
}
