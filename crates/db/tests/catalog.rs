//! Integration tests for categories, products, tags and product details.

use assert_matches::assert_matches;
use domus_core::decimal::Decimal;
use domus_core::error::CoreError;
use domus_db::models::category::CreateCategory;
use domus_db::models::product::CreateProduct;
use domus_db::models::product_detail::{CreateProductDetail, UpdateProductDetail};
use domus_db::models::tag::CreateTag;
use domus_db::repositories::{CategoryRepo, ProductDetailRepo, ProductRepo, TagRepo};
use domus_db::StoreError;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
    }
}

fn new_tag(name: &str) -> CreateTag {
    CreateTag {
        name: name.to_string(),
    }
}

fn new_product(category_id: i64, name: &str, price: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        price: dec(price),
        category_id,
        tag_ids: None,
    }
}

fn new_detail(product_id: i64) -> CreateProductDetail {
    CreateProductDetail {
        product_id,
        dimensions: "30x20x10 cm".to_string(),
        weight: dec("1.25"),
        material: "Oak".to_string(),
    }
}

async fn table_count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_get_product(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();
    let product = ProductRepo::create(&pool, &new_product(category.id, "Stool", "49.90"))
        .await
        .unwrap();

    assert_eq!(product.name, "Stool");
    assert_eq!(product.price, dec("49.9"));
    assert_eq!(product.price.to_string(), "49.90");
    assert_eq!(product.category_id, category.id);
    assert_eq!(ProductRepo::get(&pool, product.id).await.unwrap(), product);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_prices_rejected(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();

    for price in ["-1.00", "123456789.00"] {
        let err = ProductRepo::create(&pool, &new_product(category.id, "Stool", price))
            .await
            .unwrap_err();
        assert_matches!(
            err,
            StoreError::Core(CoreError::Validation { field: "price", .. }),
            "price {price} should be rejected"
        );
    }
    assert_eq!(ProductRepo::count(&pool).await.unwrap(), 0);

    // Largest value with ten digits in total.
    let max = ProductRepo::create(&pool, &new_product(category.id, "Yacht", "99999999.99"))
        .await
        .unwrap();
    assert_eq!(max.price.to_string(), "99999999.99");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_product_requires_existing_category(pool: SqlitePool) {
    let err = ProductRepo::create(&pool, &new_product(55, "Stool", "10"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::Validation { field: "category_id", .. })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_products_in_insertion_order_and_by_category(pool: SqlitePool) {
    let furniture = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();
    let garden = CategoryRepo::create(&pool, &new_category("Garden"))
        .await
        .unwrap();

    let zeta = ProductRepo::create(&pool, &new_product(furniture.id, "Zeta chair", "10"))
        .await
        .unwrap();
    let hose = ProductRepo::create(&pool, &new_product(garden.id, "Hose", "5"))
        .await
        .unwrap();
    let alpha = ProductRepo::create(&pool, &new_product(furniture.id, "Alpha desk", "80"))
        .await
        .unwrap();

    let ids: Vec<i64> = ProductRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![zeta.id, hose.id, alpha.id]);

    let in_furniture = ProductRepo::list_by_category(&pool, furniture.id)
        .await
        .unwrap();
    assert_eq!(in_furniture, vec![zeta, alpha]);

    let hits = ProductRepo::search(&pool, "hose").await.unwrap();
    assert_eq!(hits, vec![hose]);
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_tag_links(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();
    let wood = TagRepo::create(&pool, &new_tag("wood")).await.unwrap();
    let handmade = TagRepo::create(&pool, &new_tag("handmade")).await.unwrap();

    let mut input = new_product(category.id, "Stool", "49.90");
    input.tag_ids = Some(vec![wood.id]);
    let product = ProductRepo::create(&pool, &input).await.unwrap();

    assert!(ProductRepo::attach_tag(&pool, product.id, handmade.id).await.unwrap());
    assert!(!ProductRepo::attach_tag(&pool, product.id, handmade.id).await.unwrap());

    let names: Vec<String> = TagRepo::list_by_product(&pool, product.id)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["handmade", "wood"]);

    assert!(ProductRepo::detach_tag(&pool, product.id, wood.id).await.unwrap());
    assert!(!ProductRepo::detach_tag(&pool, product.id, wood.id).await.unwrap());

    ProductRepo::set_tags(&pool, product.id, &[wood.id]).await.unwrap();
    let tags = TagRepo::list_by_product(&pool, product.id).await.unwrap();
    assert_eq!(tags, vec![wood]);

    let err = ProductRepo::attach_tag(&pool, product.id, 999).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::NotFound { entity: "Tag", id: 999 })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_product_without_tags_keeps_links(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();
    let wood = TagRepo::create(&pool, &new_tag("wood")).await.unwrap();
    let mut input = new_product(category.id, "Stool", "49.90");
    input.tag_ids = Some(vec![wood.id]);
    let product = ProductRepo::create(&pool, &input).await.unwrap();

    let updated = ProductRepo::update(&pool, product.id, &new_product(category.id, "Tall stool", "59"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Tall stool");
    assert_eq!(updated.price.to_string(), "59.00");
    assert_eq!(TagRepo::list_by_product(&pool, product.id).await.unwrap().len(), 1);

    let mut clear = new_product(category.id, "Tall stool", "59");
    clear.tag_ids = Some(Vec::new());
    ProductRepo::update(&pool, product.id, &clear).await.unwrap();
    assert!(TagRepo::list_by_product(&pool, product.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_tag_keeps_products(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();
    let wood = TagRepo::create(&pool, &new_tag("wood")).await.unwrap();
    let mut input = new_product(category.id, "Stool", "49.90");
    input.tag_ids = Some(vec![wood.id]);
    let product = ProductRepo::create(&pool, &input).await.unwrap();

    TagRepo::delete(&pool, wood.id).await.unwrap();

    assert_eq!(table_count(&pool, "product_tags").await, 0);
    assert!(ProductRepo::find_by_id(&pool, product.id).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Product details
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_product_detail_one_to_one(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();
    let product = ProductRepo::create(&pool, &new_product(category.id, "Stool", "49.90"))
        .await
        .unwrap();

    let detail = ProductDetailRepo::create(&pool, &new_detail(product.id))
        .await
        .unwrap();
    assert_eq!(detail.weight.to_string(), "1.25");
    assert_eq!(
        ProductDetailRepo::find_by_product(&pool, product.id)
            .await
            .unwrap(),
        Some(detail.clone())
    );

    let err = ProductDetailRepo::create(&pool, &new_detail(product.id))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::UniqueViolation { field: "product_id", .. })
    );

    let updated = ProductDetailRepo::update(
        &pool,
        detail.id,
        &UpdateProductDetail {
            dimensions: "40x20x10 cm".to_string(),
            weight: dec("2"),
            material: "Pine".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.product_id, product.id);
    assert_eq!(updated.material, "Pine");

    let mut heavy = new_detail(product.id);
    heavy.weight = dec("12345.00");
    let err = ProductDetailRepo::create(&pool, &heavy).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::Validation { field: "weight", .. })
    );
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_product_removes_detail_and_links(pool: SqlitePool) {
    let category = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();
    let wood = TagRepo::create(&pool, &new_tag("wood")).await.unwrap();
    let mut input = new_product(category.id, "Stool", "49.90");
    input.tag_ids = Some(vec![wood.id]);
    let product = ProductRepo::create(&pool, &input).await.unwrap();
    ProductDetailRepo::create(&pool, &new_detail(product.id))
        .await
        .unwrap();

    ProductRepo::delete(&pool, product.id).await.unwrap();

    assert_eq!(table_count(&pool, "product_details").await, 0);
    assert_eq!(table_count(&pool, "product_tags").await, 0);
    assert!(TagRepo::find_by_id(&pool, wood.id).await.unwrap().is_some());
    assert!(CategoryRepo::find_by_id(&pool, category.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_category_cascades_to_products_only(pool: SqlitePool) {
    let furniture = CategoryRepo::create(&pool, &new_category("Furniture"))
        .await
        .unwrap();
    let garden = CategoryRepo::create(&pool, &new_category("Garden"))
        .await
        .unwrap();
    let wood = TagRepo::create(&pool, &new_tag("wood")).await.unwrap();

    let mut stool = new_product(furniture.id, "Stool", "49.90");
    stool.tag_ids = Some(vec![wood.id]);
    let stool = ProductRepo::create(&pool, &stool).await.unwrap();
    ProductDetailRepo::create(&pool, &new_detail(stool.id))
        .await
        .unwrap();

    let mut planter = new_product(garden.id, "Planter", "15");
    planter.tag_ids = Some(vec![wood.id]);
    let planter = ProductRepo::create(&pool, &planter).await.unwrap();

    CategoryRepo::delete(&pool, furniture.id).await.unwrap();

    assert_eq!(ProductRepo::list(&pool).await.unwrap(), vec![planter.clone()]);
    assert_eq!(table_count(&pool, "product_details").await, 0);
    assert_eq!(TagRepo::list_by_product(&pool, planter.id).await.unwrap(), vec![wood]);
    assert_eq!(TagRepo::count(&pool).await.unwrap(), 1);

    let err = CategoryRepo::delete(&pool, furniture.id).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::NotFound { entity: "Category", .. })
    );
}
