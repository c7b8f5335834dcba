use shopflow_catalog::{
    CatalogService, FetchError, Product, ProductCategory, ReferenceFeed, Supplier,
    UNKNOWN_CATEGORY,
};
use shopflow_test_utils::fixtures::{
    acme, garden_cart, hammer, leaf_rake, sample_categories, sample_products, sample_suppliers,
    sprocket,
};
use shopflow_test_utils::{next_error, next_value, CountingSource};
use std::sync::Arc;

fn sample_service(source: CountingSource) -> (Arc<CountingSource>, CatalogService) {
    let source = Arc::new(source);
    let service = CatalogService::new(
        source.clone(),
        ReferenceFeed::new(|| async { Ok(sample_categories()) }),
        ReferenceFeed::new(|| async { Ok(sample_suppliers()) }),
    );
    (source, service)
}

#[tokio::test]
async fn fetches_products_once_across_all_streams() {
    let (source, service) = sample_service(CountingSource::ok(sample_products()));

    let mut products = service.products();
    let mut joined = service.products_with_category();
    let mut selected = service.selected_product();
    let mut suppliers = service.selected_product_suppliers();

    assert_eq!(next_value(&mut products).await, sample_products());
    assert_eq!(next_value(&mut joined).await.len(), 3);
    assert_eq!(next_value(&mut selected).await, None);
    assert_eq!(next_value(&mut suppliers).await, Vec::<Supplier>::new());

    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn late_subscriber_gets_cached_products_without_refetch() {
    let (source, service) = sample_service(CountingSource::ok(sample_products()));

    let mut first = service.products();
    assert_eq!(next_value(&mut first).await, sample_products());

    let mut late = service.products();
    assert_eq!(next_value(&mut late).await, sample_products());

    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn join_attaches_category_display_names() {
    let (_source, service) = sample_service(CountingSource::ok(sample_products()));

    let mut joined = service.products_with_category();
    let categorized = next_value(&mut joined).await;

    let by_id = |id| {
        categorized
            .iter()
            .find(|p| p.id == id)
            .expect("product missing from join")
    };
    assert_eq!(by_id(leaf_rake().id).category, "Garden");
    assert_eq!(by_id(garden_cart().id).category, "Garden");
    // No category with hammer's category id exists in the sample data
    assert_eq!(by_id(hammer().id).category, UNKNOWN_CATEGORY);
}

#[tokio::test]
async fn missing_category_collection_never_fails_the_join() {
    let source = Arc::new(CountingSource::ok(vec![hammer()]));
    let service = CatalogService::new(
        source.clone(),
        ReferenceFeed::new(|| async { Ok(Vec::<ProductCategory>::new()) }),
        ReferenceFeed::new(|| async { Ok(sample_suppliers()) }),
    );

    let mut joined = service.products_with_category();
    let categorized = next_value(&mut joined).await;

    assert_eq!(categorized.len(), 1);
    assert_eq!(categorized[0].category, UNKNOWN_CATEGORY);
    assert_eq!(categorized[0].id, hammer().id);
}

#[tokio::test]
async fn no_product_selected_before_first_selection() {
    let (_source, service) = sample_service(CountingSource::ok(sample_products()));

    let mut selected = service.selected_product();
    assert_eq!(next_value(&mut selected).await, None);
}

#[tokio::test]
async fn selection_resolves_to_the_categorized_product() {
    let (_source, service) = sample_service(CountingSource::ok(sample_products()));

    service.change_selected_product(Some(leaf_rake().id));

    let mut selected = service.selected_product();
    let product = next_value(&mut selected).await.expect("expected a product");
    assert_eq!(product.id, leaf_rake().id);
    assert_eq!(product.product_name, leaf_rake().product_name);
    assert_eq!(product.category, "Garden");
}

#[tokio::test]
async fn clearing_the_selection_yields_no_product() {
    let (_source, service) = sample_service(CountingSource::ok(sample_products()));

    service.change_selected_product(Some(leaf_rake().id));
    let mut selected = service.selected_product();
    assert!(next_value(&mut selected).await.is_some());

    service.change_selected_product(None);
    assert_eq!(next_value(&mut selected).await, None);
}

#[tokio::test]
async fn unknown_selection_yields_no_product() {
    let (_source, service) = sample_service(CountingSource::ok(sample_products()));

    service.change_selected_product(Some(999));

    let mut selected = service.selected_product();
    assert_eq!(next_value(&mut selected).await, None);
}

#[tokio::test]
async fn repeated_selection_does_not_diverge() {
    let (_source, service) = sample_service(CountingSource::ok(sample_products()));

    service.change_selected_product(Some(garden_cart().id));
    let mut selected = service.selected_product();
    let first = next_value(&mut selected).await;

    service.change_selected_product(Some(garden_cart().id));
    let second = next_value(&mut selected).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn suppliers_are_filtered_by_the_selected_product() {
    let (_source, service) = sample_service(CountingSource::ok(sample_products()));

    service.change_selected_product(Some(garden_cart().id));

    let mut suppliers = service.selected_product_suppliers();
    assert_eq!(next_value(&mut suppliers).await, vec![acme(), sprocket()]);
}

#[tokio::test]
async fn suppliers_are_empty_without_a_selection() {
    let (_source, service) = sample_service(CountingSource::ok(sample_products()));

    let mut suppliers = service.selected_product_suppliers();
    assert_eq!(next_value(&mut suppliers).await, Vec::<Supplier>::new());
}

#[tokio::test]
async fn selecting_a_product_resolves_category_and_suppliers() {
    let products = vec![Product {
        id: 1,
        product_name: "Apple".to_string(),
        product_code: "FRT-0001".to_string(),
        category_id: 10,
        price: 0.99,
        supplier_ids: vec![100],
    }];
    let categories = vec![ProductCategory {
        id: 10,
        name: "Fruit".to_string(),
    }];
    let suppliers = vec![Supplier {
        id: 100,
        name: "Acme".to_string(),
        cost: 0.50,
    }];

    let service = CatalogService::new(
        Arc::new(CountingSource::ok(products)),
        ReferenceFeed::new(move || async move { Ok(categories) }),
        ReferenceFeed::new({
            let suppliers = suppliers.clone();
            move || async move { Ok(suppliers) }
        }),
    );

    service.change_selected_product(Some(1));

    let mut selected = service.selected_product();
    let product = next_value(&mut selected).await.expect("expected a product");
    assert_eq!(product.id, 1);
    assert_eq!(product.category, "Fruit");

    let mut linked = service.selected_product_suppliers();
    assert_eq!(next_value(&mut linked).await, suppliers);
}

#[tokio::test]
async fn transport_failure_surfaces_on_every_stream() {
    let (source, service) = sample_service(CountingSource::failing(FetchError::Transport(
        "connection refused".to_string(),
    )));

    let mut products = service.products();
    let mut joined = service.products_with_category();
    let mut selected = service.selected_product();
    let mut suppliers = service.selected_product_suppliers();

    for err in [
        next_error(&mut products).await,
        next_error(&mut joined).await,
        next_error(&mut selected).await,
        next_error(&mut suppliers).await,
    ] {
        let message = err.to_string();
        assert!(message.contains("An error occurred: connection refused"));
    }

    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn server_failure_carries_status_and_body() {
    let (_source, service) = sample_service(CountingSource::failing(FetchError::Server {
        status: 500,
        body: "collection unavailable".to_string(),
    }));

    let mut products = service.products();
    let message = next_error(&mut products).await.to_string();

    assert!(message.contains("Backend returned code 500: collection unavailable"));
    // A server-reported failure must not read like a transport one
    assert!(!message.contains("An error occurred"));
}

#[tokio::test]
async fn failure_replays_to_late_subscribers_without_retry() {
    let (source, service) = sample_service(CountingSource::failing(FetchError::Transport(
        "connection refused".to_string(),
    )));

    let mut first = service.products();
    let _ = next_error(&mut first).await;

    let mut late = service.products();
    let _ = next_error(&mut late).await;

    assert_eq!(source.fetch_count(), 1);
}
