use std::fs;

use serde_json::json;
use stockroom_desktop::{ErrorKind, InventoryApp, UiCommand, UiResponse};
use stockroom_infra::AppConfig;

struct TestApp {
    app: InventoryApp,
    _dir: tempfile::TempDir,
}

impl TestApp {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = AppConfig::default().with_csv_path(dir.path().join("inventory.csv"));
        Self {
            app: InventoryApp::new(&config),
            _dir: dir,
        }
    }

    fn csv_path(&self) -> &std::path::Path {
        self.app.repository().path()
    }

    /// Dispatch a command given as the JSON the webview would send.
    fn send(&mut self, command: serde_json::Value) -> UiResponse {
        let command: UiCommand = serde_json::from_value(command).expect("invalid command json");
        self.app.dispatch(command)
    }
}

fn add(name: &str, quantity: &str, price: &str, category: &str) -> serde_json::Value {
    json!({
        "action": "add",
        "form": {
            "item_name": name,
            "quantity": quantity,
            "price": price,
            "category": category,
        }
    })
}

#[test]
fn worked_example_end_to_end() {
    let mut t = TestApp::new();

    t.send(add("Widget", "10", "2.5", "Hardware"));
    let view = t.send(add("Gadget", "5", "9.99", "Hardware")).view.unwrap();
    assert_eq!(view.total_items_label, "Total Items: 15");
    assert_eq!(view.total_value_label, "Total Value: 74.95");

    let view = t
        .send(json!({ "action": "delete", "selected": "Widget" }))
        .view
        .unwrap();
    assert_eq!(view.item_names(), vec!["Gadget"]);
    assert_eq!(view.total_items_label, "Total Items: 5");
    assert_eq!(view.total_value_label, "Total Value: 49.95");
}

#[test]
fn save_writes_csv_and_load_restores_it() {
    let mut t = TestApp::new();
    t.send(add("Widget", "10", "2.5", "Hardware"));
    t.send(add("Gadget", "5", "9.99", "Hardware"));
    t.send(json!({ "action": "sort", "field": "item_name" }));

    let saved = t.send(json!({ "action": "save" }));
    assert!(!saved.is_error());
    assert_eq!(
        fs::read_to_string(t.csv_path()).unwrap(),
        "Item Name,Quantity,Price,Category\nGadget,5,9.99,Hardware\nWidget,10,2.5,Hardware\n"
    );

    let mut fresh = InventoryApp::new(&AppConfig::default().with_csv_path(t.csv_path()));
    let loaded = fresh.dispatch(UiCommand::Load);
    assert!(!loaded.is_error());
    assert_eq!(fresh.table(), t.app.table());
}

#[test]
fn load_picks_up_hand_edited_file() {
    let mut t = TestApp::new();
    fs::write(
        t.csv_path(),
        "Item Name,Quantity,Price,Category\n\"Bolt, M6\",100,0.1,\"Fasteners, metric\"\n",
    )
    .unwrap();

    let response = t.send(json!({ "action": "load" }));
    let view = response.view.unwrap();
    assert_eq!(view.item_names(), vec!["Bolt, M6"]);
    assert_eq!(view.rows[0].category, "Fasteners, metric");
    assert_eq!(response.notification.unwrap().title, "Load");
}

#[test]
fn missing_file_is_reported_not_fatal() {
    let mut t = TestApp::new();
    t.send(add("Widget", "10", "2.5", "Hardware"));

    let response = t.send(json!({ "action": "load" }));
    let note = response.notification.unwrap();
    assert_eq!(note.kind, Some(ErrorKind::File));
    assert!(note.message.starts_with("CSV file not found"));

    // the app keeps working afterwards
    let view = t.send(json!({ "action": "refresh" })).view.unwrap();
    assert_eq!(view.item_names(), vec!["Widget"]);
}

#[test]
fn every_failure_leaves_state_unchanged() {
    let mut t = TestApp::new();
    t.send(add("Widget", "10", "2.5", "Hardware"));
    let before = t.app.table().clone();

    let failures = [
        add("", "1", "1", "x"),
        add("Gizmo", "1.5", "1", "x"),
        add("Gizmo", "1", "free", "x"),
        add("Widget", "1", "1", "x"),
        json!({ "action": "delete", "selected": null }),
        json!({ "action": "delete", "selected": "Gizmo" }),
        json!({
            "action": "update",
            "selected": "Widget",
            "form": { "quantity": "-1", "price": "1", "category": "x" }
        }),
        json!({ "action": "load" }),
    ];

    for command in failures {
        let response = t.send(command.clone());
        assert!(response.is_error(), "expected failure for {command}");
        assert!(response.view.is_none());
        assert_eq!(t.app.table(), &before, "table changed by {command}");
    }
}
