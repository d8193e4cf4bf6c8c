use serde::Serialize;
use std::fmt;

use crate::db::models::ProductRow;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Phone,
    Computer,
    Accessory,
    Shoe,
    Watch,
    Clothing,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Phone,
        Category::Computer,
        Category::Accessory,
        Category::Shoe,
        Category::Watch,
        Category::Clothing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Phone => "Phone",
            Category::Computer => "Computer",
            Category::Accessory => "Accessory",
            Category::Shoe => "Shoe",
            Category::Watch => "Watch",
            Category::Clothing => "Clothing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = AppError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = row
            .price
            .ok_or_else(|| AppError::Scan(format!("price is NULL for product {}", row.id)))?;
        let image_url = row
            .image_url
            .ok_or_else(|| AppError::Scan(format!("image_url is NULL for product {}", row.id)))?;

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price,
            image_url,
        })
    }
}

/// One rendered page of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub page: u32,
    pub items: Vec<Product>,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
}
