//! End-to-end admin flows against the in-memory store.
//!
//! Every mutation is followed by a full relist, so these tests assert on
//! what the manager shows after each step rather than on the store alone.

mod common;

use serde_json::json;
use storefront_admin::{DraftPhase, ImagePreview, Notice, NoticeLevel};
use storefront_core::CategoryId;

use common::store::MemoryStore;
use common::{backend, image};

#[tokio::test]
async fn create_then_delete_twice() {
    let store = MemoryStore::new();
    let backend = backend(&store);
    let mut manager = backend.category_manager();
    manager.load().await;

    let editor = manager.open_create();
    editor.set_name("Books").unwrap();
    editor.set_subcategory(0, "Fiction").unwrap();
    editor.add_subcategory().unwrap();
    editor.set_subcategory(1, "NonFiction").unwrap();
    editor.select_images(vec![image("books.jpg")]).unwrap();

    let notice = editor.submit().await;
    assert_eq!(notice, Notice::success("Category added successfully!"));

    let created = manager.close_editor(editor).unwrap();
    assert_eq!(created.subcategories, vec!["Fiction", "NonFiction"]);
    assert_eq!(manager.notice(), Some(&notice));

    let rows = manager.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].display_name, "Books");
    assert_eq!(rows[0].subcategories, "Fiction, NonFiction");
    assert_eq!(rows[0].thumbnail_url, "http://localhost:5000/uploads/books.jpg");

    let id = created.id;
    let notice = manager.delete(&id).await;
    assert_eq!(notice, Notice::success("Category deleted successfully!"));
    assert!(manager.rows().await.is_empty());

    let notice = manager.delete(&id).await;
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Failed to delete category.");
    assert!(manager.rows().await.is_empty());
}

#[tokio::test]
async fn every_mutation_triggers_full_relist() {
    let store = MemoryStore::new();
    let backend = backend(&store);
    let mut manager = backend.category_manager();
    manager.load().await;
    assert_eq!(store.list_calls().await, 1);

    let editor = manager.open_create();
    editor.set_name("Garden").unwrap();
    editor.set_subcategory(0, "Tools").unwrap();
    editor.select_images(vec![image("garden.png")]).unwrap();
    editor.submit().await;
    let created = manager.close_editor(editor).unwrap();
    assert_eq!(store.list_calls().await, 2);

    let editor = manager.open_update(&created.id).await.unwrap();
    editor.set_name("Garden & Patio").unwrap();
    editor.submit().await;
    manager.close_editor(editor);
    assert_eq!(store.list_calls().await, 3);
    assert_eq!(manager.rows().await[0].display_name, "Garden & Patio");

    manager.delete(&created.id).await;
    assert_eq!(store.list_calls().await, 4);
}

#[tokio::test]
async fn update_without_new_image_keeps_stored_images() {
    let store = MemoryStore::new();
    let backend = backend(&store);
    let mut manager = backend.category_manager();

    let editor = manager.open_create();
    editor.set_name("Books").unwrap();
    editor.set_subcategory(0, "Fiction").unwrap();
    editor
        .select_images(vec![image("front.jpg"), image("back.jpg")])
        .unwrap();
    editor.submit().await;
    let created = manager.close_editor(editor).unwrap();

    let editor = manager.open_update(&created.id).await.unwrap();
    assert_eq!(
        editor.preview(),
        ImagePreview::Stored("http://localhost:5000/uploads/front.jpg".to_string())
    );
    editor.add_subcategory().unwrap();
    editor.set_subcategory(1, "Poetry").unwrap();
    let notice = editor.submit().await;
    assert_eq!(notice, Notice::success("Category updated successfully!"));

    let updates = store.updates().await;
    assert_eq!(updates.len(), 1);
    assert!(updates[0].images.is_empty());

    let stored = &store.categories().await[0];
    assert_eq!(stored.subcategories, vec!["Fiction", "Poetry"]);
    assert_eq!(stored.images.len(), 2);
}

#[tokio::test]
async fn failed_submit_keeps_draft_for_retry() {
    let store = MemoryStore::new();
    let backend = backend(&store);
    let mut manager = backend.category_manager();
    store.set_offline(true).await;

    let editor = manager.open_create();
    editor.set_name("Toys").unwrap();
    editor.set_subcategory(0, "Puzzles").unwrap();
    editor.select_images(vec![image("toys.jpg")]).unwrap();

    let notice = editor.submit().await;
    assert_eq!(notice, Notice::error("Failed to save category."));
    assert_eq!(editor.phase(), DraftPhase::Failed);
    assert_eq!(editor.draft().name, "Toys");
    assert_eq!(editor.draft().images.len(), 1);

    store.set_offline(false).await;
    let notice = editor.submit().await;
    assert_eq!(notice, Notice::success("Category added successfully!"));
    assert!(manager.close_editor(editor).is_some());
    assert_eq!(manager.rows().await.len(), 1);
}

#[tokio::test]
async fn search_excludes_malformed_names() {
    let store = MemoryStore::new();
    let backend = backend(&store);
    let mut manager = backend.category_manager();

    for (name, sub) in [("Books", "Fiction"), ("Electronics", "Phones")] {
        let editor = manager.open_create();
        editor.set_name(name).unwrap();
        editor.set_subcategory(0, sub).unwrap();
        editor.select_images(vec![image("x.jpg")]).unwrap();
        editor.submit().await;
        manager.close_editor(editor);
    }

    store
        .insert_raw(json!({"_id": "m1", "category": ["Books"], "subcategories": ["Fiction"]}))
        .await;
    store.insert_raw(json!({"_id": "m2", "category": null})).await;
    manager.load().await;

    manager.set_search("boo");
    let rows = manager.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].display_name, "Books");

    manager.set_search("");
    let rows = manager.rows().await;
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2].display_name, "No Category");
    assert_eq!(rows[2].subcategories, "Fiction");
    assert_eq!(rows[3].subcategories, "No Subcategories");
}

#[tokio::test]
async fn load_failure_keeps_stale_rows() {
    let store = MemoryStore::new();
    let backend = backend(&store);
    let mut manager = backend.category_manager();

    let editor = manager.open_create();
    editor.set_name("Books").unwrap();
    editor.set_subcategory(0, "Fiction").unwrap();
    editor.select_images(vec![image("b.jpg")]).unwrap();
    editor.submit().await;
    manager.close_editor(editor);
    manager.dismiss_notice();

    store.set_offline(true).await;
    let notice = manager.load().await.unwrap();

    assert_eq!(notice.message, "Failed to fetch categories");
    assert_eq!(manager.rows().await.len(), 1);
}

#[tokio::test]
async fn navbar_reselect_and_snapshot() {
    let store = MemoryStore::new();
    let backend = backend(&store);
    let mut manager = backend.category_manager();

    for (name, subs) in [
        ("Electronics", vec!["Phones", "Laptops"]),
        ("Books", vec!["Fiction"]),
    ] {
        let editor = manager.open_create();
        editor.set_name(name).unwrap();
        for (i, sub) in subs.into_iter().enumerate() {
            if i > 0 {
                editor.add_subcategory().unwrap();
            }
            editor.set_subcategory(i, sub).unwrap();
        }
        editor.select_images(vec![image("x.jpg")]).unwrap();
        editor.submit().await;
        manager.close_editor(editor);
    }

    let composer = backend.navbar_composer();
    assert!(composer.open().await.is_none());
    composer.select("Electronics").await.unwrap();
    composer.select("Books").await.unwrap();
    composer.select("Electronics").await.unwrap();
    assert_eq!(composer.draft().subcategories, vec!["Phones", "Laptops"]);

    let notice = composer.submit().await;
    assert_eq!(notice, Notice::success("Navbar added successfully!"));
    assert!(!composer.is_open());

    // Later edits to the category do not reach the stored entry.
    let electronics = store.categories().await[0].id.clone();
    let editor = manager.open_update(&electronics).await.unwrap();
    editor.remove_subcategory(1).unwrap();
    editor.submit().await;
    manager.close_editor(editor);

    let entries = store.navbar_entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].categories, "Electronics");
    assert_eq!(entries[0].subcategories, vec!["Phones", "Laptops"]);
}

#[tokio::test]
async fn open_update_for_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let backend = backend(&store);
    let manager = backend.category_manager();

    let err = manager
        .open_update(&CategoryId::new("missing"))
        .await
        .err()
        .unwrap();

    assert_eq!(err.to_string(), "category not found: missing");
}
