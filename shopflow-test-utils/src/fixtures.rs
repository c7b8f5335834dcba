// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Canned catalog data for tests.

use shopflow_catalog::{Product, ProductCategory, Supplier};

pub fn leaf_rake() -> Product {
    Product {
        id: 1,
        product_name: "Leaf Rake".to_string(),
        product_code: "GDN-0011".to_string(),
        category_id: 10,
        price: 19.95,
        supplier_ids: vec![100],
    }
}

pub fn garden_cart() -> Product {
    Product {
        id: 2,
        product_name: "Garden Cart".to_string(),
        product_code: "GDN-0023".to_string(),
        category_id: 10,
        price: 32.99,
        supplier_ids: vec![100, 101],
    }
}

/// A product whose category id matches no category in [`sample_categories`].
pub fn hammer() -> Product {
    Product {
        id: 5,
        product_name: "Hammer".to_string(),
        product_code: "TBX-0048".to_string(),
        category_id: 99,
        price: 8.99,
        supplier_ids: vec![102],
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![leaf_rake(), garden_cart(), hammer()]
}

pub fn garden() -> ProductCategory {
    ProductCategory {
        id: 10,
        name: "Garden".to_string(),
    }
}

pub fn toolbox() -> ProductCategory {
    ProductCategory {
        id: 20,
        name: "Toolbox".to_string(),
    }
}

pub fn sample_categories() -> Vec<ProductCategory> {
    vec![garden(), toolbox()]
}

pub fn acme() -> Supplier {
    Supplier {
        id: 100,
        name: "Acme Gardening Supply".to_string(),
        cost: 16.95,
    }
}

pub fn sprocket() -> Supplier {
    Supplier {
        id: 101,
        name: "Sprocket Wholesale".to_string(),
        cost: 27.50,
    }
}

pub fn toolmakers() -> Supplier {
    Supplier {
        id: 102,
        name: "Toolmakers Inc".to_string(),
        cost: 6.25,
    }
}

pub fn sample_suppliers() -> Vec<Supplier> {
    vec![acme(), sprocket(), toolmakers()]
}
