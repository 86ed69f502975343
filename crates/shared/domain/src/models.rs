//! Catalog records and the enriched product view.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

id_newtype!(
    /// Identifier of a [`User`].
    UserId
);
id_newtype!(
    /// Identifier of a [`Category`].
    CategoryId
);
id_newtype!(
    /// Identifier of a [`Product`].
    ProductId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

/// A [`Product`] joined with its category and, through the category, its owner.
///
/// Either side of the join may be absent when a foreign key does not resolve.
/// `user` is always `None` when `category` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl EnrichedProduct {
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Name of the resolved owner, if any.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
