// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The catalog service: four derived, cached product streams and the
//! selection entry point.
//!
//! Data flows strictly downstream (fetch, category join, selected product,
//! selected suppliers), with the selection cell and the reference feeds
//! joining in at each stage. Every stage is wrapped in a
//! [`SharedReplay`], so its computation runs at most once per upstream
//! emission pair and its latest result is replayed to late subscribers.
//! Nothing fetches until the first subscription; activating a stage activates
//! the stages above it.

use crate::fetch::{normalize, ProductSource};
use crate::model::{CategorizedProduct, Product, ProductCategory, ProductId, Supplier};
use crate::provider::ReferenceFeed;
use futures::stream;
use shopflow_core::{BehaviorSubject, StreamItem, SubjectBoxStream};
use shopflow_stream::{FlowStreamExt, SharedReplay};
use std::sync::Arc;
use tracing::debug;

/// Composes the product, category and supplier data into the catalog's
/// reactive read surface.
///
/// All streams share one underlying fetch per source. A source failure is
/// normalized once, then surfaces on every derived stream, including to
/// subscribers that attach after the failure; the service performs no retry
/// (see [`SharedReplay`] for the poisoning semantics).
pub struct CatalogService {
    selection: BehaviorSubject<Option<ProductId>>,
    products: SharedReplay<Vec<Product>>,
    products_with_category: SharedReplay<Vec<CategorizedProduct>>,
    selected_product: SharedReplay<Option<CategorizedProduct>>,
    selected_product_suppliers: SharedReplay<Vec<Supplier>>,
}

impl CatalogService {
    /// Wires the pipeline. No I/O happens here; the first subscription to any
    /// stream triggers the fetches it depends on.
    pub fn new(
        source: Arc<dyn ProductSource>,
        categories: ReferenceFeed<ProductCategory>,
        suppliers: ReferenceFeed<Supplier>,
    ) -> Self {
        let selection = BehaviorSubject::new(None);

        let products = SharedReplay::new(move || {
            stream::once(async move {
                StreamItem::from(source.fetch_products().await.map_err(normalize))
            })
            .tap_values(|products: &Vec<Product>| {
                debug!(count = products.len(), "fetched product collection");
            })
        });

        let products_with_category = SharedReplay::new({
            let products = products.clone();
            move || {
                products
                    .subscribe()
                    .combine_latest(categories.stream())
                    .map_values(|(products, categories)| {
                        products
                            .into_iter()
                            .map(|p| CategorizedProduct::categorize(p, &categories))
                            .collect::<Vec<_>>()
                    })
            }
        });

        let selected_product = SharedReplay::new({
            let selection = selection.clone();
            let joined = products_with_category.clone();
            move || {
                selection
                    .subscribe()
                    .combine_latest(joined.subscribe())
                    .map_values(|(selected_id, products)| {
                        selected_id.and_then(|id| products.into_iter().find(|p| p.id == id))
                    })
                    .tap_values(|product: &Option<CategorizedProduct>| {
                        debug!(selected = ?product, "recomputed selected product");
                    })
            }
        });

        let selected_product_suppliers = SharedReplay::new({
            let selected = selected_product.clone();
            move || {
                selected
                    .subscribe()
                    .combine_latest(suppliers.stream())
                    .map_values(|(product, suppliers)| match product {
                        Some(product) => suppliers
                            .into_iter()
                            .filter(|s| product.supplier_ids.contains(&s.id))
                            .collect(),
                        // No selection means no suppliers, not a placeholder entry
                        None => Vec::new(),
                    })
            }
        });

        Self {
            selection,
            products,
            products_with_category,
            selected_product,
            selected_product_suppliers,
        }
    }

    /// The raw product collection, fetched at most once.
    pub fn products(&self) -> SubjectBoxStream<Vec<Product>> {
        self.products.subscribe()
    }

    /// Products denormalized with their category display names.
    pub fn products_with_category(&self) -> SubjectBoxStream<Vec<CategorizedProduct>> {
        self.products_with_category.subscribe()
    }

    /// The currently selected, categorized product; `None` while nothing is
    /// selected or the selected id matches no product.
    pub fn selected_product(&self) -> SubjectBoxStream<Option<CategorizedProduct>> {
        self.selected_product.subscribe()
    }

    /// The suppliers linked to the currently selected product; empty while
    /// nothing is selected.
    pub fn selected_product_suppliers(&self) -> SubjectBoxStream<Vec<Supplier>> {
        self.selected_product_suppliers.subscribe()
    }

    /// Changes the selected product. `None` clears the selection.
    ///
    /// This is the only write entry point of the service; every subscriber of
    /// the selection-derived streams observes the change.
    pub fn change_selected_product(&self, selected: Option<ProductId>) {
        self.selection.set(selected);
    }
}
