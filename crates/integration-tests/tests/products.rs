//! Home, listing, detail, category and search pages.

use reqwest::StatusCode;
use showroom_integration_tests::{TestContext, ids};

// ============================================================================
// Home
// ============================================================================

#[tokio::test]
async fn test_home_features_discounted_products_first() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get_json("/api/home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "watch");
    assert_eq!(
        ids(&body["featured"]),
        ["w-102", "w-202", "w-303", "w-403", "w-101", "w-103"]
    );
    assert_eq!(body["company"]["name"], "Showroom Fine Watches");
    assert_eq!(body["statistics"]["yearsInBusiness"], 27);
    assert_eq!(body["featuredTestimonial"]["name"], "Ana Lopes");
}

#[tokio::test]
async fn test_home_respects_featured_limit() {
    let ctx = TestContext::start(Some(&showroom_integration_tests::sample_catalog()), |c| {
        c.pages.featured_limit = 2;
    })
    .await;
    let (_, body) = ctx.get_json("/api/home").await;
    assert_eq!(ids(&body["featured"]), ["w-102", "w-202"]);
}

// ============================================================================
// Listing & Pagination
// ============================================================================

#[tokio::test]
async fn test_listing_pages_nine_at_a_time() {
    let ctx = TestContext::new().await;

    let (status, first) = ctx.get_json("/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["products"]["totalItems"], 12);
    assert_eq!(first["products"]["totalPages"], 2);
    assert_eq!(first["products"]["items"].as_array().map(Vec::len), Some(9));

    let (_, second) = ctx.get_json("/api/products?page=2").await;
    assert_eq!(second["products"]["page"], 2);
    assert_eq!(ids(&second["products"]["items"]), ["w-401", "w-402", "w-403"]);
}

#[tokio::test]
async fn test_listing_page_past_end_resets_to_first() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get_json("/api/products?category=diver&page=4").await;
    assert_eq!(body["products"]["page"], 1);
    assert_eq!(ids(&body["products"]["items"]), ["w-201", "w-202", "w-203"]);
}

#[tokio::test]
async fn test_listing_category_and_keyword() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx
        .get_json("/api/products?category=chronograph&q=OMEGA")
        .await;
    assert_eq!(body["category"], "chronograph");
    assert_eq!(ids(&body["products"]["items"]), ["w-301"]);
    assert_eq!(body["products"]["totalPages"], 1);
}

#[tokio::test]
async fn test_listing_empty_params_mean_all() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get_json("/api/products?category=all&q=&page=").await;
    assert_eq!(body["products"]["totalItems"], 12);
}

#[tokio::test]
async fn test_listing_price_range_uses_discounted_price() {
    let ctx = TestContext::new().await;
    // Seamaster lists at 5600 and sells at 4760 after 15% off.
    let (_, body) = ctx
        .get_json("/api/products?min_price=4000&max_price=5000")
        .await;
    assert_eq!(ids(&body["products"]["items"]), ["w-202"]);
}

#[tokio::test]
async fn test_listing_inverted_price_range_rejected() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx
        .get_json("/api/products?min_price=900&max_price=100")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("min_price"));
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_detail_with_related() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get_json("/api/products/w-202").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Seamaster Diver 300M");
    assert_eq!(body["product"]["discountedPrice"], 4760.0);
    assert_eq!(body["category"]["name"], "Dive Watches");
    assert_eq!(
        ids(&body["related"]),
        ["w-201", "w-203", "w-301", "w-101"]
    );
}

#[tokio::test]
async fn test_detail_not_found_names_product_kind() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get_json("/api/products/w-999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Watch with ID w-999 not found");
}

#[tokio::test]
async fn test_car_catalog_not_found_message() {
    let ctx = TestContext::start(Some(&showroom_integration_tests::sample_catalog()), |c| {
        c.catalog.product_kind = "car".parse().expect("car is a product kind");
    })
    .await;
    let (_, body) = ctx.get_json("/api/products/c-1").await;
    assert_eq!(body["error"], "Car with ID c-1 not found");
}

#[tokio::test]
async fn test_related_limit() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get_json("/api/products/w-202/related?limit=2").await;
    assert_eq!(ids(&body), ["w-201", "w-203"]);
}

// ============================================================================
// Categories & Search
// ============================================================================

#[tokio::test]
async fn test_categories() {
    let ctx = TestContext::new().await;
    let (_, all) = ctx.get_json("/api/categories").await;
    assert_eq!(all.as_array().map(Vec::len), Some(4));

    let (status, sport) = ctx.get_json("/api/categories/sport").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&sport["products"]), ["w-401", "w-402", "w-403"]);

    let (status, body) = ctx.get_json("/api/categories/pocket").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category with ID pocket not found");
}

#[tokio::test]
async fn test_search_matches_description() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get_json("/api/search?q=Octagon").await;
    assert_eq!(body["query"], "Octagon");
    assert_eq!(ids(&body["results"]), ["w-401", "w-402"]);
}

#[tokio::test]
async fn test_blank_search_finds_nothing() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get_json("/api/search?q=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], serde_json::json!([]));
}

// ============================================================================
// Gallery
// ============================================================================

#[tokio::test]
async fn test_gallery_pages_six_at_a_time() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.get_json("/api/gallery?page=2").await;
    assert_eq!(body["category"], "all");
    assert_eq!(body["products"]["totalPages"], 2);
    assert_eq!(
        ids(&body["products"]["items"]),
        ["w-301", "w-302", "w-303", "w-401", "w-402", "w-403"]
    );
}
