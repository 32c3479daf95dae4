use catalog_core::{
    MemoryStore, ProductDraft, ProductEvent, ProductRepository, SubscriberHub,
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

fn new_repo() -> (
    std::sync::mpsc::Receiver<ProductEvent>,
    ProductRepository<MemoryStore, Arc<SubscriberHub>>,
) {
    let hub = Arc::new(SubscriberHub::new());
    let events = hub.subscribe();
    let repo = ProductRepository::new(MemoryStore::new(), hub);
    (events, repo)
}

#[test]
fn successful_add_emits_product_added_with_the_assigned_id() {
    let (events, repo) = new_repo();

    let added = repo.add(manzana()).unwrap();

    let event = events.try_recv().expect("one event expected");
    assert_eq!(event.event_name(), "productAdded");
    assert_eq!(event.product(), &added);
    assert_eq!(event.product().id, 1);
    assert!(events.try_recv().is_err());
}

#[test]
fn rejected_add_emits_nothing() {
    let (events, repo) = new_repo();
    repo.add(manzana()).unwrap();
    let _ = events.try_recv();

    let mut blank = pera();
    blank.title = String::new();
    repo.add(blank).unwrap_err();

    let mut duplicate = pera();
    duplicate.code = "4005".to_string();
    repo.add(duplicate).unwrap_err();

    assert!(events.try_recv().is_err());
}

#[test]
fn remove_emits_exactly_one_deleted_event_with_the_pre_removal_record() {
    let (events, repo) = new_repo();
    repo.add(manzana()).unwrap();
    let before_removal = repo.get(1).unwrap().unwrap();
    let _ = events.try_recv();

    repo.remove(1).unwrap();

    let event = events.try_recv().expect("one event expected");
    assert_eq!(event.event_name(), "productDeleted");
    assert_eq!(event.product(), &before_removal);
    assert!(events.try_recv().is_err());
}

#[test]
fn remove_of_absent_id_emits_nothing() {
    let (events, repo) = new_repo();

    repo.remove(9).unwrap_err();

    assert!(events.try_recv().is_err());
}

#[test]
fn update_emits_nothing() {
    let (events, repo) = new_repo();
    repo.add(manzana()).unwrap();
    let _ = events.try_recv();

    let mut replacement = manzana();
    replacement.title = "Manzana roja".to_string();
    repo.update(1, replacement).unwrap();

    assert!(events.try_recv().is_err());
}
