//! End-to-end checks of the CSV-backed store: every call goes through the
//! file on disk, the way a desktop or CLI driver uses it.

use std::fs;

use freshmart_core::{DomainError, RecordId};
use freshmart_inventory::{InventoryStore, NewRecord, RecordUpdate, StoreConfig, StoreError};

fn store_in(dir: &tempfile::TempDir) -> (InventoryStore, StoreConfig) {
    let config = StoreConfig::default()
        .with_table_path(dir.path().join("inventory.csv"))
        .with_report_path(dir.path().join("inventory_report.csv"));
    (InventoryStore::open(&config), config)
}

fn request(id: &str, name: &str, category: &str, quantity: &str, price: &str) -> NewRecord {
    NewRecord {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        quantity: quantity.into(),
        unit: "kg".into(),
        reorder_level: "10".into(),
        price_per_unit: price.into(),
    }
}

fn id(s: &str) -> RecordId {
    RecordId::new(s).unwrap()
}

#[test]
fn fresh_store_initializes_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let (store, config) = store_in(&dir);

    assert!(store.load().unwrap().is_empty());
    assert_eq!(store.total_value().unwrap(), 0.0);
    assert!(store.category_totals().unwrap().is_empty());
    assert!(config.table_path.exists());
}

#[test]
fn rice_scenario_persists_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let (store, config) = store_in(&dir);

    store
        .create(&request("A1", "Rice", "Grain", "50", "40.0"))
        .unwrap();
    let sale = store.sell(&id("A1"), 20).unwrap();
    assert_eq!(sale.record.quantity, 30);
    assert_eq!(sale.total_revenue, 800.0);

    // A second handle sees what the first one wrote.
    let reopened = InventoryStore::open(&config);
    assert_eq!(reopened.find(&id("A1")).unwrap().quantity, 30);

    match reopened.sell(&id("A1"), 100) {
        Err(StoreError::Domain(DomainError::InsufficientStock {
            requested,
            available,
        })) => {
            assert_eq!(requested, 100);
            assert_eq!(available, 30);
        }
        other => panic!("expected insufficient stock, got {other:?}"),
    }
    assert_eq!(store.find(&id("A1")).unwrap().quantity, 30);
}

#[test]
fn edit_to_zero_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let (store, _config) = store_in(&dir);
    store
        .create(&request("A1", "Rice", "Grain", "50", "40.0"))
        .unwrap();

    store
        .edit(
            &id("A1"),
            &RecordUpdate {
                quantity: Some(0),
                ..RecordUpdate::default()
            },
        )
        .unwrap();

    let record = store.find(&id("A1")).unwrap();
    assert_eq!(record.quantity, 0);
    assert!(record.is_low_stock());
}

#[test]
fn report_goes_to_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let (store, config) = store_in(&dir);
    store
        .create(&request("A1", "Rice", "Grain", "10", "2.5"))
        .unwrap();
    store
        .create(&request("B2", "Salt, Rock", "Spice", "4", "1.0"))
        .unwrap();

    let table_before = fs::read_to_string(&config.table_path).unwrap();
    let rows = store.export_report().unwrap();
    assert_eq!(rows.len(), 2);

    let report = fs::read_to_string(&config.report_path).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "ID,Name,Category,Quantity,Unit,Reorder Level,Price/Unit,Total Value",
            "A1,Rice,Grain,10,kg,10,2.5,25.0",
            "B2,\"Salt, Rock\",Spice,4,kg,10,1.0,4.0",
        ]
    );
    assert_eq!(fs::read_to_string(&config.table_path).unwrap(), table_before);
    assert_eq!(store.total_value().unwrap(), 29.0);
}

#[test]
fn corrupted_table_is_reported_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let (store, config) = store_in(&dir);
    let corrupted = "id,name,category,quantity,unit,reorder_level,price_per_unit\n\
                     A1,Rice,Grain,fifty,kg,10,40.0\n";
    fs::write(&config.table_path, corrupted).unwrap();

    assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    assert!(matches!(
        store.restock(&id("A1"), 5),
        Err(StoreError::Parse { .. })
    ));
    assert_eq!(fs::read_to_string(&config.table_path).unwrap(), corrupted);
}

#[test]
fn hand_edited_table_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let (store, config) = store_in(&dir);
    fs::write(
        &config.table_path,
        "id,name,category,quantity,unit,reorder_level,price_per_unit\n\
         M1,Milk,Dairy,3,l,5,55\n\
         A1,Rice,Grain,50,kg,10,40.5\n",
    )
    .unwrap();

    let low = store.low_stock().unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].id, "M1");
    assert_eq!(low[0].price_per_unit, 55.0);

    let dairy = store.filter_by_category("dAiRy").unwrap();
    assert_eq!(dairy.len(), 1);
}
