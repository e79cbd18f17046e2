//! End-to-end: controller driven by a dataset file on disk

mod common;

use std::io::Write;
use std::time::Duration;

use common::TestHelpers;
use directory::render::render_view;
use directory::{DirectoryController, FileVendorSource};
use shared::DirectoryConfig;

const DATASET: &str = r#"[
    {"id": "n1", "companyName": "Northwind Traders", "industry": "Retail",
     "location": "Seattle, WA", "verificationStatus": "verified", "dateAdded": "2024-07-01"},
    {"id": "n2", "companyName": "Contoso Pharma", "industry": "Healthcare",
     "location": "Raleigh, NC", "verificationStatus": "pending", "dateAdded": "2024-07-09",
     "logoUrl": "https://logos.example.com/contoso.png"},
    {"id": "n3", "companyName": "Northwind Health", "industry": "Healthcare",
     "location": "Tacoma, WA", "verificationStatus": "verified", "dateAdded": "2024-08-12"}
]"#;

fn dataset_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_directory_from_file() {
    let file = dataset_file(DATASET);
    let config = DirectoryConfig::default().with_debounce(Duration::from_millis(20));
    let handle = DirectoryController::spawn(FileVendorSource::new(file.path()), config).unwrap();

    let view = TestHelpers::wait_loaded(&handle).await;
    assert_eq!(view.all_vendors.len(), 3);
    assert_eq!(view.industry_options.len(), 3);

    handle.set_search_input("northwind").await.unwrap();
    handle.select_industry("Healthcare").await.unwrap();

    let view = handle
        .wait_for(|view| view.criteria.search_term() == "northwind" && !view.loading)
        .await
        .unwrap();
    assert_eq!(TestHelpers::filtered_names(&view), vec!["Northwind Health"]);

    let text = render_view(&view);
    assert!(text.contains("Showing 1 of 3 vendors"));
    assert!(text.contains("[NH] Northwind Health (Healthcare)"));

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reload_picks_up_file_changes() {
    let file = dataset_file(DATASET);
    let handle = DirectoryController::spawn(FileVendorSource::new(file.path()), DirectoryConfig::default()).unwrap();
    TestHelpers::wait_loaded(&handle).await;

    std::fs::write(file.path(), "[]").unwrap();
    handle.reload().await.unwrap();

    let view = handle
        .wait_for(|view| !view.loading && view.all_vendors.is_empty())
        .await
        .unwrap();
    assert!(view.is_empty_state());
    assert!(view.last_error.is_none());

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_corrupt_file_on_reload_keeps_collection() {
    let file = dataset_file(DATASET);
    let handle = DirectoryController::spawn(FileVendorSource::new(file.path()), DirectoryConfig::default()).unwrap();
    TestHelpers::wait_loaded(&handle).await;

    std::fs::write(file.path(), "[{").unwrap();
    handle.reload().await.unwrap();

    let view = handle
        .wait_for(|view| view.last_error.is_some())
        .await
        .unwrap();
    assert!(!view.loading);
    assert_eq!(view.all_vendors.len(), 3);

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_view_serializes_for_renderers() {
    let file = dataset_file(DATASET);
    let handle = DirectoryController::spawn(FileVendorSource::new(file.path()), DirectoryConfig::default()).unwrap();
    let view = TestHelpers::wait_loaded(&handle).await;

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["allVendors"].as_array().unwrap().len(), 3);
    assert_eq!(json["filteredVendors"][1]["logoUrl"], "https://logos.example.com/contoso.png");
    assert_eq!(json["criteria"]["verifiedOnly"], false);
    assert_eq!(json["loading"], false);

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_file_reports_unavailable_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileVendorSource::new(dir.path().join("vendors.json"));
    let handle = DirectoryController::spawn(source, DirectoryConfig::default()).unwrap();

    let view = TestHelpers::wait_loaded(&handle).await;
    assert!(view.all_vendors.is_empty());
    assert!(view.is_empty_state());
    assert!(view.last_error.as_deref().unwrap().starts_with("Vendor source unavailable"));

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_timestamped_dataset_loads() {
    let file = dataset_file(&DATASET.replace("\"2024-07-09\"", "\"2024-07-09T14:02:11Z\""));
    let handle = DirectoryController::spawn(FileVendorSource::new(file.path()), DirectoryConfig::default()).unwrap();

    let view = TestHelpers::wait_loaded(&handle).await;
    assert!(view.last_error.is_none());
    assert_eq!(view.all_vendors.len(), 3);
    assert!(render_view(&view).contains("added Jul 9, 2024"));

    handle.shutdown().await.unwrap();
}
