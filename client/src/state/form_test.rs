use super::*;
use crate::net::types::ProductId;

fn basil() -> ProductForm {
    ProductForm {
        title: "Basil Plant".to_owned(),
        description: "Fragrant and easy to grow".to_owned(),
        category: "herbs".to_owned(),
        price: "12.50".to_owned(),
        image: "https://example.test/basil.png".to_owned(),
    }
}

#[test]
fn set_updates_only_the_named_field() {
    let mut form = basil();
    form.set(ProductField::Category, "kitchen".to_owned());

    assert_eq!(form.category, "kitchen");
    assert_eq!(form.title, "Basil Plant");
    assert_eq!(form.price, "12.50");
}

#[test]
fn get_reads_back_every_field() {
    let mut form = ProductForm::default();
    for field in ProductField::ALL {
        form.set(field, field.name().to_uppercase());
    }
    for field in ProductField::ALL {
        assert_eq!(form.get(field), field.name().to_uppercase());
    }
}

#[test]
fn field_names_match_json_keys() {
    let json = serde_json::to_value(basil()).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), ProductField::ALL.len());
    for field in ProductField::ALL {
        assert!(object.contains_key(field.name()), "missing key {}", field.name());
    }
}

#[test]
fn from_product_copies_editable_fields() {
    let product = Product {
        id: ProductId::from("7"),
        title: "Fern".to_owned(),
        description: "Shade loving".to_owned(),
        category: "ferns".to_owned(),
        price: "8.00".to_owned(),
        image: "https://example.test/fern.png".to_owned(),
        rating: None,
    };
    let form = ProductForm::from(&product);

    assert_eq!(form.title, "Fern");
    assert_eq!(form.description, "Shade loving");
    assert_eq!(form.category, "ferns");
    assert_eq!(form.price, "8.00");
    assert_eq!(form.image, "https://example.test/fern.png");
}
