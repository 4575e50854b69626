use super::*;

#[test]
fn create_layout_requires_every_field() {
    for field in FormLayout::Create.fields() {
        assert!(FormLayout::Create.is_required(field), "{field:?} should be required");
    }
}

#[test]
fn edit_layout_leaves_image_optional() {
    assert!(!FormLayout::Edit.is_required(ProductField::Image));
    assert!(FormLayout::Edit.is_required(ProductField::Title));
}

#[test]
fn both_layouts_cover_all_fields_once() {
    for layout in [FormLayout::Create, FormLayout::Edit] {
        let fields = layout.fields();
        for field in ProductField::ALL {
            assert_eq!(fields.iter().filter(|f| **f == field).count(), 1);
        }
    }
}

#[test]
fn edit_price_is_numeric_with_cent_steps() {
    assert_eq!(FormLayout::Edit.input_type(ProductField::Price), "number");
    assert_eq!(FormLayout::Edit.step(ProductField::Price), Some("0.01"));
    assert_eq!(FormLayout::Create.input_type(ProductField::Price), "text");
    assert_eq!(FormLayout::Create.step(ProductField::Price), None);
}

#[test]
fn only_edit_description_is_a_textarea() {
    assert!(FormLayout::Edit.uses_textarea(ProductField::Description));
    assert!(!FormLayout::Create.uses_textarea(ProductField::Description));
    assert!(!FormLayout::Edit.uses_textarea(ProductField::Title));
}

#[test]
fn placeholders_only_on_create() {
    assert_eq!(FormLayout::Create.placeholder(ProductField::Image), Some("Enter an image url"));
    assert_eq!(FormLayout::Edit.placeholder(ProductField::Image), None);
}

#[test]
fn edit_image_label_mentions_url() {
    assert_eq!(FormLayout::Edit.label(ProductField::Image), "Image URL");
    assert_eq!(FormLayout::Create.label(ProductField::Image), "Image");
}
