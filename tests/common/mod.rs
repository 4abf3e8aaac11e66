#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

pub const CONTROL_TYPE_WINDOW: i32 = 50032;
pub const CONTROL_TYPE_BUTTON: i32 = 50000;
pub const CONTROL_TYPE_PANE: i32 = 50033;

/// A control-view button; `name: None` leaves the Name property out.
pub fn button(name: Option<&str>, left: i32) -> Value {
    let mut properties = json!({
        "IsControlElement": true,
        "IsContentElement": true,
        "IsKeyboardFocusable": true,
        "IsEnabled": true,
        "BoundingRectangle": { "left": left, "top": 10, "right": left + 80, "bottom": 40 },
    });
    if let Some(name) = name {
        properties["Name"] = json!(name);
    }
    json!({
        "controlType": CONTROL_TYPE_BUTTON,
        "properties": properties,
        "patterns": [10000],
    })
}

/// A top-level window holding `children`.
pub fn window(title: &str, children: Vec<Value>) -> Value {
    json!({
        "controlType": CONTROL_TYPE_WINDOW,
        "properties": {
            "Name": title,
            "ClassName": "AppFrame",
            "IsControlElement": true,
            "IsContentElement": true,
            "BoundingRectangle": { "left": 0, "top": 0, "right": 800, "bottom": 600 },
        },
        "children": children,
    })
}

pub fn write_snapshot(dir: &Path, file_name: &str, snapshot: &Value) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
    path
}
