use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
}

pub struct NewProductProps {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price.is_sign_negative() {
            return Err(ProductError::NegativePrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            description: props.description,
            category: props.category,
            image: props.image,
        })
    }

    /// Case-insensitive substring match against name or category.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}
