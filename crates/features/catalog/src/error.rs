use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[pcat_derive::pcat_error]
pub enum CatalogError {
    /// Seed data could not be decoded.
    #[error("Catalog seed decode error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// Seed data decoded but violates an invariant (e.g. duplicate ids).
    #[error("Catalog data error{}: {message}", format_context(.context))]
    Data { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
