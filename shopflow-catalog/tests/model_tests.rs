use shopflow_catalog::{CategorizedProduct, Product, ProductCategory, UNKNOWN_CATEGORY};

fn rake() -> Product {
    Product {
        id: 1,
        product_name: "Leaf Rake".to_string(),
        product_code: "GDN-0011".to_string(),
        category_id: 10,
        price: 19.95,
        supplier_ids: vec![100, 101],
    }
}

#[test]
fn categorize_attaches_the_matching_name() {
    let categories = vec![
        ProductCategory {
            id: 10,
            name: "Garden".to_string(),
        },
        ProductCategory {
            id: 20,
            name: "Toolbox".to_string(),
        },
    ];

    let categorized = CategorizedProduct::categorize(rake(), &categories);

    assert_eq!(categorized.category, "Garden");
    // Identifying fields are copied unchanged
    assert_eq!(categorized.id, 1);
    assert_eq!(categorized.category_id, 10);
    assert_eq!(categorized.supplier_ids, vec![100, 101]);
}

#[test]
fn categorize_substitutes_a_placeholder_when_no_match() {
    let categorized = CategorizedProduct::categorize(rake(), &[]);
    assert_eq!(categorized.category, UNKNOWN_CATEGORY);
}

#[test]
fn product_uses_the_backend_wire_format() {
    let json = r#"{
        "id": 1,
        "productName": "Leaf Rake",
        "productCode": "GDN-0011",
        "categoryId": 10,
        "price": 19.95,
        "supplierIds": [100, 101]
    }"#;

    let product: Product = serde_json::from_str(json).expect("wire format should parse");
    assert_eq!(product, rake());

    let back = serde_json::to_value(&product).expect("serializes");
    assert_eq!(back["productName"], "Leaf Rake");
    assert_eq!(back["categoryId"], 10);
}

#[test]
fn supplier_ids_default_to_empty_when_absent() {
    let json = r#"{
        "id": 2,
        "productName": "Garden Cart",
        "productCode": "GDN-0023",
        "categoryId": 10,
        "price": 32.99
    }"#;

    let product: Product = serde_json::from_str(json).expect("wire format should parse");
    assert!(product.supplier_ids.is_empty());
}
