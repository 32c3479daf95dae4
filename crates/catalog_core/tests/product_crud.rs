use catalog_core::{
    MemoryStore, NullSink, Product, ProductDraft, ProductRepository, ProductValidationError,
    RepoError,
};
use std::sync::Arc;

fn manzana() -> ProductDraft {
    ProductDraft {
        title: "Manzana".to_string(),
        description: "Manzana natural".to_string(),
        price: 12.0,
        thumbnail: "ruta/imagen1.jpg".to_string(),
        code: "4005".to_string(),
        stock: 22,
    }
}

fn pera() -> ProductDraft {
    ProductDraft {
        title: "Pera".to_string(),
        description: "Pera natural".to_string(),
        price: 150.0,
        thumbnail: "ruta/imagen2.jpg".to_string(),
        code: "LSLV2".to_string(),
        stock: 15,
    }
}

fn new_repo() -> (Arc<MemoryStore>, ProductRepository<Arc<MemoryStore>, NullSink>) {
    let store = Arc::new(MemoryStore::new());
    let repo = ProductRepository::new(Arc::clone(&store), NullSink);
    (store, repo)
}

#[test]
fn seeding_assigns_sequential_ids_in_insertion_order() {
    let (_store, repo) = new_repo();

    let first = repo.add(manzana()).unwrap();
    let second = repo.add(pera()).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let listed = repo.list(None).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "Manzana");
    assert_eq!(listed[1].title, "Pera");
}

#[test]
fn list_honours_positive_limit() {
    let (_store, repo) = new_repo();
    repo.add(manzana()).unwrap();
    repo.add(pera()).unwrap();

    let limited = repo.list(Some(1)).unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, 1);

    // A limit larger than the collection is not an error.
    assert_eq!(repo.list(Some(10)).unwrap().len(), 2);
}

#[test]
fn blank_field_is_rejected_and_collection_unchanged() {
    let (_store, repo) = new_repo();
    repo.add(manzana()).unwrap();

    let mut blank = pera();
    blank.description = "   ".to_string();
    match repo.add(blank) {
        Err(RepoError::Validation(ProductValidationError::BlankField("description"))) => {}
        other => panic!("expected blank-field rejection, got {other:?}"),
    }

    assert_eq!(repo.list(None).unwrap().len(), 1);
}

#[test]
fn duplicate_code_is_rejected_and_collection_unchanged() {
    let (_store, repo) = new_repo();
    repo.add(manzana()).unwrap();
    repo.add(pera()).unwrap();

    let mut third = pera();
    third.title = "Pera verde".to_string();
    third.code = "4005".to_string();
    match repo.add(third) {
        Err(RepoError::DuplicateCode(code)) => assert_eq!(code, "4005"),
        other => panic!("expected duplicate-code rejection, got {other:?}"),
    }

    assert_eq!(repo.list(None).unwrap().len(), 2);
}

#[test]
fn get_absent_id_returns_none() {
    let (_store, repo) = new_repo();
    repo.add(manzana()).unwrap();

    assert!(repo.get(99).unwrap().is_none());
}

#[test]
fn update_preserves_id_and_replaces_all_other_attributes() {
    let (_store, repo) = new_repo();
    repo.add(manzana()).unwrap();
    repo.add(pera()).unwrap();

    let replacement = ProductDraft {
        title: "Pera dulce".to_string(),
        description: "Pera madura".to_string(),
        price: 200.0,
        thumbnail: "ruta/imagen2b.jpg".to_string(),
        code: "LSLV2".to_string(),
        stock: 10,
    };
    let updated = repo.update(2, replacement.clone()).unwrap();
    assert_eq!(updated.id, 2);

    let loaded = repo.get(2).unwrap().expect("record 2 should exist");
    assert_eq!(loaded.id, 2);
    assert_eq!(loaded.title, replacement.title);
    assert_eq!(loaded.description, replacement.description);
    assert_eq!(loaded.price, replacement.price);
    assert_eq!(loaded.thumbnail, replacement.thumbnail);
    assert_eq!(loaded.code, replacement.code);
    assert_eq!(loaded.stock, replacement.stock);
}

#[test]
fn update_absent_id_is_not_found_and_mutates_nothing() {
    let (_store, repo) = new_repo();
    repo.add(manzana()).unwrap();

    match repo.update(42, pera()) {
        Err(RepoError::NotFound(42)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }

    let listed = repo.list(None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Manzana");
}

#[test]
fn remove_deletes_exactly_one_record_and_keeps_survivor_ids() {
    let (_store, repo) = new_repo();
    repo.add(manzana()).unwrap();
    repo.add(pera()).unwrap();

    let removed = repo.remove(1).unwrap();
    assert_eq!(removed.id, 1);
    assert_eq!(removed.title, "Manzana");

    assert!(repo.get(1).unwrap().is_none());
    let remaining = repo.list(None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Pera");
    assert_eq!(remaining[0].id, 2);
}

#[test]
fn remove_absent_id_is_not_found() {
    let (_store, repo) = new_repo();

    match repo.remove(7) {
        Err(RepoError::NotFound(7)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }
}

#[test]
fn ids_are_never_reused_after_removal() {
    let (_store, repo) = new_repo();
    repo.add(manzana()).unwrap();
    repo.add(pera()).unwrap();

    repo.remove(2).unwrap();
    let mut third = pera();
    third.code = "NEW01".to_string();
    let added = repo.add(third).unwrap();
    assert_eq!(added.id, 3);
}

#[test]
fn identity_counter_advances_past_pre_existing_disk_state() {
    let store = Arc::new(MemoryStore::new());
    let seeded = Product {
        id: 5,
        title: "Naranja".to_string(),
        description: "Naranja natural".to_string(),
        price: 30.0,
        thumbnail: "ruta/imagen3.jpg".to_string(),
        code: "NRJ05".to_string(),
        stock: 8,
    };
    {
        use catalog_core::CatalogStore;
        store.save(std::slice::from_ref(&seeded)).unwrap();
    }

    let repo = ProductRepository::new(Arc::clone(&store), NullSink);
    let added = repo.add(manzana()).unwrap();
    assert_eq!(added.id, 6);
}

#[test]
fn failed_load_surfaces_store_error_and_mutates_nothing() {
    let (store, repo) = new_repo();
    repo.add(manzana()).unwrap();

    store.fail_next_load();
    match repo.add(pera()) {
        Err(RepoError::Store(_)) => {}
        other => panic!("expected store error, got {other:?}"),
    }

    assert_eq!(repo.list(None).unwrap().len(), 1);
    assert_eq!(store.snapshot().unwrap().len(), 1);
}

#[test]
fn failed_save_surfaces_store_error_but_consumes_the_identity() {
    let (store, repo) = new_repo();
    repo.add(manzana()).unwrap();

    store.fail_next_save();
    match repo.add(pera()) {
        Err(RepoError::Store(_)) => {}
        other => panic!("expected store error, got {other:?}"),
    }

    // Disk still holds only the first record; the next reconciliation
    // restores the in-memory view from it.
    assert_eq!(store.snapshot().unwrap().len(), 1);
    assert_eq!(repo.list(None).unwrap().len(), 1);

    // The identity handed to the failed add is burned, never reassigned.
    let retried = repo.add(pera()).unwrap();
    assert_eq!(retried.id, 3);
}
