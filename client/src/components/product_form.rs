//! Product form fields shared by the add and edit screens.
//!
//! The two screens differ only in presentation: field order, placeholders,
//! control types, and whether the image URL is required.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use leptos::prelude::*;

use crate::state::form::{ProductField, ProductForm};

/// Which screen the fields are rendered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormLayout {
    Create,
    Edit,
}

impl FormLayout {
    #[must_use]
    pub fn fields(self) -> [ProductField; 5] {
        match self {
            FormLayout::Create => ProductField::ALL,
            FormLayout::Edit => [
                ProductField::Title,
                ProductField::Price,
                ProductField::Description,
                ProductField::Category,
                ProductField::Image,
            ],
        }
    }

    #[must_use]
    pub fn label(self, field: ProductField) -> &'static str {
        match (self, field) {
            (FormLayout::Edit, ProductField::Image) => "Image URL",
            _ => field.label(),
        }
    }

    #[must_use]
    pub fn placeholder(self, field: ProductField) -> Option<&'static str> {
        match self {
            FormLayout::Edit => None,
            FormLayout::Create => Some(match field {
                ProductField::Title => "Enter a title",
                ProductField::Description => "Enter a description",
                ProductField::Category => "Enter a category",
                ProductField::Price => "Enter a price",
                ProductField::Image => "Enter an image url",
            }),
        }
    }

    #[must_use]
    pub fn input_type(self, field: ProductField) -> &'static str {
        match (self, field) {
            (FormLayout::Edit, ProductField::Price) => "number",
            _ => "text",
        }
    }

    #[must_use]
    pub fn step(self, field: ProductField) -> Option<&'static str> {
        (self.input_type(field) == "number").then_some("0.01")
    }

    #[must_use]
    pub fn uses_textarea(self, field: ProductField) -> bool {
        self == FormLayout::Edit && field == ProductField::Description
    }

    #[must_use]
    pub fn is_required(self, field: ProductField) -> bool {
        !(self == FormLayout::Edit && field == ProductField::Image)
    }
}

/// All five labelled inputs, bound to `form` and reporting edits through `on_input`.
#[component]
pub fn ProductFormFields(
    form: Signal<ProductForm>,
    on_input: Callback<(ProductField, String)>,
    layout: FormLayout,
) -> impl IntoView {
    layout
        .fields()
        .into_iter()
        .map(|field| view! { <FormField field=field form=form on_input=on_input layout=layout/> })
        .collect_view()
}

#[component]
fn FormField(
    field: ProductField,
    form: Signal<ProductForm>,
    on_input: Callback<(ProductField, String)>,
    layout: FormLayout,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_owned());
    let on_change = move |ev: leptos::ev::Event| on_input.run((field, event_target_value(&ev)));

    let control = if layout.uses_textarea(field) {
        view! {
            <textarea
                class="form-control input-small"
                name=field.name()
                rows="3"
                required=layout.is_required(field)
                prop:value=value
                on:input=on_change
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="form-control input-small"
                type=layout.input_type(field)
                step=layout.step(field)
                name=field.name()
                placeholder=layout.placeholder(field)
                required=layout.is_required(field)
                prop:value=value
                on:input=on_change
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-3">
            <label class="form-label">{layout.label(field)}</label>
            {control}
        </div>
    }
}
