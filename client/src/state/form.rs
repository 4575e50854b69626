//! Editable product fields shared by the add and edit screens.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Product;

/// One field of [`ProductForm`], used to route input events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductField {
    Title,
    Description,
    Category,
    Price,
    Image,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Title,
        ProductField::Description,
        ProductField::Category,
        ProductField::Price,
        ProductField::Image,
    ];

    /// Form control `name` attribute and JSON key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Description => "description",
            ProductField::Category => "category",
            ProductField::Price => "price",
            ProductField::Image => "image",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProductField::Title => "Title",
            ProductField::Description => "Description",
            ProductField::Category => "Category",
            ProductField::Price => "Price",
            ProductField::Image => "Image",
        }
    }
}

/// Field values submitted to the create and update endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: String,
}

impl ProductForm {
    #[must_use]
    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => &self.title,
            ProductField::Description => &self.description,
            ProductField::Category => &self.category,
            ProductField::Price => &self.price,
            ProductField::Image => &self.image,
        }
    }

    /// Replace a single field, leaving the others untouched.
    pub fn set(&mut self, field: ProductField, value: String) {
        let slot = match field {
            ProductField::Title => &mut self.title,
            ProductField::Description => &mut self.description,
            ProductField::Category => &mut self.category,
            ProductField::Price => &mut self.price,
            ProductField::Image => &mut self.image,
        };
        *slot = value;
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
        }
    }
}
