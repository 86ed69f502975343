#![allow(dead_code)]

use pcat_catalog::{Catalog, Category, CategoryId, Product, ProductId, Sex, User, UserId};

pub fn user(id: u32, name: &str, sex: Sex) -> User {
    User { id: UserId(id), name: name.to_owned(), sex }
}

pub fn category(id: u32, title: &str, icon: &str, owner: u32) -> Category {
    Category { id: CategoryId(id), title: title.to_owned(), icon: icon.to_owned(), owner_id: UserId(owner) }
}

pub fn product(id: u32, name: &str, category: u32) -> Product {
    Product { id: ProductId(id), name: name.to_owned(), category_id: CategoryId(category) }
}

/// Furniture catalog with one product per join outcome:
/// fully resolved (Table, Chair), dangling owner (Lamp), dangling category (Sofa).
pub fn furniture() -> Catalog {
    Catalog::from_parts(
        vec![user(1, "Max", Sex::Male), user(2, "Anna", Sex::Female)],
        vec![
            category(10, "Dining", "🍽", 1),
            category(20, "Seating", "🪑", 2),
            category(30, "Lighting", "💡", 99),
        ],
        vec![
            product(1, "Table", 10),
            product(2, "Chair", 20),
            product(3, "Lamp", 30),
            product(4, "Sofa", 404),
            product(5, "Side table", 20),
        ],
    )
    .expect("fixture catalog is valid")
}

pub fn seeded() -> Catalog {
    Catalog::seeded().expect("embedded seed decodes")
}

pub fn names(products: &[pcat_catalog::EnrichedProduct]) -> Vec<&str> {
    products.iter().map(|p| p.name()).collect()
}
