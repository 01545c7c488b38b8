//! Integration tests for category endpoints.

mod common;

use axum::http::StatusCode;
use common::TestClient;
use expense_tracker::models::Category;

#[tokio::test]
async fn test_default_categories_are_seeded() {
    let client = TestClient::new();
    let (status, parsed): (_, Option<Vec<Category>>) = client.get_json("/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = parsed.unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec!["Entertainment", "Food", "Groceries", "Others", "Travel"]
    );
}

#[tokio::test]
async fn test_create_category() {
    let client = TestClient::new();
    let (status, body) = client.create_category("Bills").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Category created successfully");
    let id = body["id"].as_i64().unwrap();

    let (_, parsed): (_, Option<Vec<Category>>) = client.get_json("/api/categories").await;
    let categories = parsed.unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0].name, "Bills");
    assert_eq!(categories[0].id, id);

    // The new category can be used for expenses straight away.
    client.create_expense(60.0, "Bills", "2025-08-01").await;
}

#[tokio::test]
async fn test_duplicate_category_is_conflict() {
    let client = TestClient::new();
    let (status, body) = client.create_category("Food").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Category already exists");
}

#[tokio::test]
async fn test_blank_category_name_is_rejected() {
    let client = TestClient::new();
    let (status, body) = client.create_category("  ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}
