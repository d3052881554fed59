mod common;

use serde_json::json;
use tui_binary_tree::{json, render, Error};

use crate::common::init_test_setup;

#[test]
fn renders_a_json_tree() {
    init_test_setup();
    let value = json!({
        "value": "root",
        "left": ["left", null, "inner"],
        "right": {"value": 3.5},
    });
    let tree = json::tree(&value).unwrap();
    let rendering = render(tree.as_ref()).unwrap();
    assert_eq!(
        rendering.lines(),
        ["         root", "        /    \\", "left         3.5", "    \\", "    inner"]
    );
}

#[test]
fn null_document_is_a_missing_root() {
    init_test_setup();
    let tree = json::tree(&serde_json::Value::Null).unwrap();
    assert!(matches!(render(tree.as_ref()), Err(Error::MissingRoot)));
}
