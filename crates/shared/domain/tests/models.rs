use pcat_domain::models::{Category, CategoryId, Product, Sex, User, UserId};
use pcat_domain::registry::{FeatureSlice, InitializedSlice};
use serde_json::json;
use std::any::Any;

#[test]
fn records_decode_from_camel_case_json() {
    let user: User =
        serde_json::from_value(json!({ "id": 1, "name": "Roma", "sex": "m" })).expect("user");
    assert_eq!(user.id, UserId(1));
    assert_eq!(user.sex, Sex::Male);

    let category: Category = serde_json::from_value(
        json!({ "id": 3, "title": "Fruits", "icon": "🍏", "ownerId": 2 }),
    )
    .expect("category");
    assert_eq!(category.owner_id, UserId(2));

    let product: Product =
        serde_json::from_value(json!({ "id": 8, "name": "Apple", "categoryId": 3 })).expect("product");
    assert_eq!(product.category_id, CategoryId(3));
}

#[test]
fn unknown_sex_is_rejected() {
    let result = serde_json::from_value::<User>(json!({ "id": 1, "name": "X", "sex": "x" }));
    assert!(result.is_err());
}

#[derive(Debug)]
struct Dummy(u8);

impl FeatureSlice for Dummy {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn initialized_slice_downcasts_to_concrete_state() {
    let slice = InitializedSlice::new(Dummy(7));
    assert_eq!(slice.id, std::any::TypeId::of::<Dummy>());
    assert_eq!(slice.downcast_ref::<Dummy>().map(|d| d.0), Some(7));
}
