// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Reactive product catalog.
//!
//! This crate composes a backend product collection with category and
//! supplier reference data into four durable, cached streams:
//!
//! - [`products`](CatalogService::products): the raw collection, fetched at
//!   most once
//! - [`products_with_category`](CatalogService::products_with_category): each
//!   product denormalized with its category display name
//! - [`selected_product`](CatalogService::selected_product): the product
//!   matching the current selection, if any
//! - [`selected_product_suppliers`](CatalogService::selected_product_suppliers):
//!   the suppliers linked to the selected product
//!
//! plus one imperative entry point,
//! [`change_selected_product`](CatalogService::change_selected_product).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use shopflow_catalog::{
//!     CatalogService, FetchError, Product, ProductCategory, ProductSource, ReferenceFeed,
//!     Supplier,
//! };
//! use shopflow_core::StreamItem;
//! use futures::StreamExt;
//!
//! struct StaticSource(Vec<Product>);
//!
//! #[async_trait::async_trait]
//! impl ProductSource for StaticSource {
//!     async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let products = vec![Product {
//!     id: 1,
//!     product_name: "Leaf Rake".into(),
//!     product_code: "GDN-0011".into(),
//!     category_id: 10,
//!     price: 19.95,
//!     supplier_ids: vec![100],
//! }];
//! let categories = vec![ProductCategory { id: 10, name: "Garden".into() }];
//! let suppliers = vec![Supplier { id: 100, name: "Acme".into(), cost: 16.95 }];
//!
//! let service = CatalogService::new(
//!     Arc::new(StaticSource(products)),
//!     ReferenceFeed::new(move || async move { Ok(categories) }),
//!     ReferenceFeed::new(move || async move { Ok(suppliers) }),
//! );
//!
//! service.change_selected_product(Some(1));
//!
//! let mut selected = service.selected_product();
//! match selected.next().await {
//!     Some(StreamItem::Value(Some(product))) => assert_eq!(product.category, "Garden"),
//!     other => panic!("unexpected item: {other:?}"),
//! }
//! # }
//! ```

pub mod fetch;
pub mod model;
pub mod provider;
pub mod service;

pub use self::fetch::{normalize, FetchError, ProductSource};
pub use self::model::{
    CategorizedProduct, CategoryId, Product, ProductCategory, ProductId, Supplier, SupplierId,
    UNKNOWN_CATEGORY,
};
pub use self::provider::ReferenceFeed;
pub use self::service::CatalogService;
