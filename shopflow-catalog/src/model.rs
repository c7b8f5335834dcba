// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Catalog records and the category join.
//!
//! `Product`, `ProductCategory` and `Supplier` mirror the backend's wire
//! format (camelCase field names). [`CategorizedProduct`] is the derived,
//! denormalized form produced by the join stage; it has no independent
//! identity and is recomputed whenever an upstream collection changes.

use serde::{Deserialize, Serialize};

pub type ProductId = u32;
pub type CategoryId = u32;
pub type SupplierId = u32;

/// Display name attached to a product whose category id has no match.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A product record as fetched from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    pub product_code: String,
    pub category_id: CategoryId,
    pub price: f64,
    #[serde(default)]
    pub supplier_ids: Vec<SupplierId>,
}

/// Read-only category reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
}

/// Read-only supplier reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub cost: f64,
}

/// A product denormalized with its category's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedProduct {
    pub id: ProductId,
    pub product_name: String,
    pub product_code: String,
    pub category_id: CategoryId,
    pub price: f64,
    pub supplier_ids: Vec<SupplierId>,
    /// Derived display name, [`UNKNOWN_CATEGORY`] when the lookup finds no match.
    pub category: String,
}

impl CategorizedProduct {
    /// Joins a product with its category's display name.
    ///
    /// The lookup is an explicit `Option`: a product whose `category_id` has
    /// no match in `categories` gets the [`UNKNOWN_CATEGORY`] placeholder
    /// instead of failing the whole collection for one bad record. The source
    /// record's identifying fields are copied unchanged.
    pub fn categorize(product: Product, categories: &[ProductCategory]) -> Self {
        let category = categories
            .iter()
            .find(|c| c.id == product.category_id)
            .map_or_else(|| UNKNOWN_CATEGORY.to_string(), |c| c.name.clone());

        Self {
            id: product.id,
            product_name: product.product_name,
            product_code: product.product_code,
            category_id: product.category_id,
            price: product.price,
            supplier_ids: product.supplier_ids,
            category,
        }
    }
}
