//! Integration tests for the inventory domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Database queries work correctly
//! - Search matching behaves like the SQL it compiles to
//! - Update/delete semantics hold at the storage layer

use domain_inventory::*;
use test_utils::{TestDatabase, TestDataBuilder, assertions::*};

fn vinyl(name: &str, artist: Option<&str>) -> ItemInput {
    ItemInput {
        item_type: Some("vinyl".to_string()),
        name: Some(name.to_string()),
        artist: artist.map(|a| a.to_string()),
        ..Default::default()
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_assigns_id_and_preserves_fields() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_assigns_id");

    let input = ItemInput {
        // A caller-supplied id must be ignored by the store
        id: Some(987654),
        item_type: Some("vinyl".to_string()),
        name: Some(builder.name("item", "main")),
        artist: Some("Pink Floyd".to_string()),
        year: Some(1973),
        location: Some("Riiul A".to_string()),
        notes: Some("Klassika!".to_string()),
        ..Default::default()
    };

    let created = repo.create(input.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_ne!(created.id, 987654);
    assert_eq!(created.item_type.as_deref(), Some("vinyl"));
    assert_eq!(created.name, input.name);
    assert_eq!(created.artist.as_deref(), Some("Pink Floyd"));
    assert_eq!(created.year, Some(1973));
    assert_eq!(created.location.as_deref(), Some("Riiul A"));
    assert_eq!(created.notes.as_deref(), Some("Klassika!"));
}

#[tokio::test]
async fn test_list_by_type_filters_exactly() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    for name in ["Abbey Road", "Let It Be", "Revolver"] {
        repo.create(vinyl(name, Some("The Beatles"))).await.unwrap();
    }

    for name in ["Shimano pidurid", "Vana pump"] {
        let input = ItemInput {
            item_type: Some("bike".to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        };
        repo.create(input).await.unwrap();
    }

    let vinyls = repo.list_by_type("vinyl").await.unwrap();
    assert_eq!(vinyls.len(), 3);
    assert!(vinyls.iter().all(|i| i.item_type.as_deref() == Some("vinyl")));

    let bikes = repo.list_by_type("bike").await.unwrap();
    assert_eq!(bikes.len(), 2);

    // Unknown types are an empty list, not an error
    let none = repo.list_by_type("tapedeck").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_search_matches_each_field_case_insensitively() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let by_name = repo.create(vinyl("Abbey Road", None)).await.unwrap();
    let by_artist = repo
        .create(vinyl("Untitled", Some("Roadside Attraction")))
        .await
        .unwrap();

    let by_category = repo
        .create(ItemInput {
            item_type: Some("vinyl".to_string()),
            name: Some("Boxed Set".to_string()),
            category: Some("ROAD trip music".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let by_location = repo
        .create(ItemInput {
            item_type: Some("vinyl".to_string()),
            name: Some("Single".to_string()),
            location: Some("road case".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // No field contains the query; must be excluded
    repo.create(vinyl("Blue Lines", Some("Massive Attack")))
        .await
        .unwrap();

    let results = repo.search("vinyl", "ROAD").await.unwrap();
    let ids: Vec<i64> = results.iter().map(|i| i.id).collect();

    assert_eq!(results.len(), 4);
    assert!(ids.contains(&by_name.id));
    assert!(ids.contains(&by_artist.id));
    assert!(ids.contains(&by_category.id));
    assert!(ids.contains(&by_location.id));
}

#[tokio::test]
async fn test_search_scoped_to_type() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    repo.create(vinyl("Abbey Road", Some("The Beatles")))
        .await
        .unwrap();

    let bike = ItemInput {
        item_type: Some("bike".to_string()),
        name: Some("Beatles bell".to_string()),
        ..Default::default()
    };
    repo.create(bike).await.unwrap();

    let results = repo.search("vinyl", "beatles").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].artist.as_deref(), Some("The Beatles"));
}

#[tokio::test]
async fn test_search_empty_query_matches_all_in_type() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    repo.create(vinyl("Abbey Road", None)).await.unwrap();
    repo.create(vinyl("Revolver", None)).await.unwrap();

    let results = repo.search("vinyl", "").await.unwrap();
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_update_is_full_replacement() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let created = repo
        .create(ItemInput {
            item_type: Some("vinyl".to_string()),
            name: Some("Test Album".to_string()),
            artist: Some("Test Artist".to_string()),
            location: Some("Riiul A".to_string()),
            notes: Some("original".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // The replacement payload drops artist/location/notes entirely
    let replacement = ItemInput {
        item_type: Some("vinyl".to_string()),
        name: Some("Test Album (reissue)".to_string()),
        year: Some(2020),
        ..Default::default()
    };

    let updated = repo.update(created.id, replacement).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name.as_deref(), Some("Test Album (reissue)"));
    assert_eq!(updated.year, Some(2020));
    // Absent payload fields are cleared, not preserved
    assert_eq!(updated.artist, None);
    assert_eq!(updated.location, None);
    assert_eq!(updated.notes, None);
}

#[tokio::test]
async fn test_update_missing_id_returns_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let result = repo.update(424242, vinyl("Ghost", None)).await;

    assert!(
        matches!(result, Err(ItemError::NotFound(424242))),
        "Expected NotFound error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let created = repo
        .create(ItemInput {
            item_type: Some("bike".to_string()),
            name: Some("Vana pump".to_string()),
            category: Some("Pump".to_string()),
            quantity: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();

    repo.delete_by_id(created.id).await.unwrap();

    let remaining = repo.list_by_type("bike").await.unwrap();
    assert!(remaining.iter().all(|i| i.id != created.id));

    // Second delete of the same id is still Ok
    repo.delete_by_id(created.id).await.unwrap();
}

#[tokio::test]
async fn test_list_returns_items_in_insertion_order() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let first = repo.create(vinyl("Abbey Road", None)).await.unwrap();
    let second = repo.create(vinyl("Let It Be", None)).await.unwrap();

    let items = repo.list_by_type("vinyl").await.unwrap();
    let found_first = assert_some(items.iter().position(|i| i.id == first.id), "first item");
    let found_second = assert_some(items.iter().position(|i| i.id == second.id), "second item");

    assert!(found_first < found_second);
}
