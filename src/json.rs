use serde_json::Value;

use crate::{Error, Result, TreeNode};

/// Create a [`TreeNode`] from a [JSON](Value) description.
///
/// - `null` is no tree at all
/// - strings, numbers and booleans are leaves
/// - `{"value": …, "left": …, "right": …}` is a node, both children are optional
/// - `[value, left, right]` is the same as the object form, both children are optional
///
/// # Example
///
/// ```
/// # use tui_binary_tree::{json, BinaryTree};
/// let value = serde_json::json!([4, [1, 2, 3], {"value": 5, "right": 7}]);
/// let tree = json::tree(&value)?.expect("not null");
/// assert_eq!(tree.height(), 3);
/// # Ok::<(), tui_binary_tree::Error>(())
/// ```
///
/// # Errors
///
/// Errors with [`Error::InvalidJson`] when the JSON does not have one of the shapes above.
pub fn tree(root: &Value) -> Result<Option<TreeNode<String>>> {
    match root {
        Value::Null => Ok(None),
        Value::Object(object) => {
            let value = object
                .get("value")
                .ok_or_else(|| invalid("object without a \"value\" key"))?;
            if let Some(key) = object
                .keys()
                .find(|key| !matches!(key.as_str(), "value" | "left" | "right"))
            {
                return Err(invalid(&format!("unexpected key {key:?}")));
            }
            node(value, object.get("left"), object.get("right")).map(Some)
        }
        Value::Array(array) => match array.as_slice() {
            [value] => node(value, None, None).map(Some),
            [value, left] => node(value, Some(left), None).map(Some),
            [value, left, right] => node(value, Some(left), Some(right)).map(Some),
            _ => Err(invalid(&format!(
                "array needs 1 to 3 elements, got {}",
                array.len()
            ))),
        },
        scalar => node(scalar, None, None).map(Some),
    }
}

fn node(value: &Value, left: Option<&Value>, right: Option<&Value>) -> Result<TreeNode<String>> {
    let label = match value {
        Value::String(string) => string.clone(),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            return Err(invalid(&format!("{value} can not be used as a label")))
        }
        Value::Bool(_) | Value::Number(_) => value.to_string(),
    };
    let left = left.map(tree).transpose()?.flatten();
    let right = right.map(tree).transpose()?.flatten();
    Ok(TreeNode::new(label, left, right))
}

fn invalid(reason: &str) -> Error {
    Error::InvalidJson(reason.to_owned())
}

#[cfg(test)]
use crate::BinaryTree;
#[cfg(test)]
use serde_json::json;

#[test]
fn null_is_no_tree() {
    assert_eq!(tree(&Value::Null).unwrap(), None);
}

#[test]
fn scalars_are_leaves() {
    assert_eq!(
        tree(&json!("text")).unwrap(),
        Some(TreeNode::leaf("text".to_owned()))
    );
    assert_eq!(
        tree(&json!(42)).unwrap(),
        Some(TreeNode::leaf("42".to_owned()))
    );
    assert_eq!(
        tree(&json!(true)).unwrap(),
        Some(TreeNode::leaf("true".to_owned()))
    );
}

#[test]
fn object_and_array_forms_are_equal() {
    let object = json!({
        "value": 4,
        "left": {"value": 1, "left": 2, "right": 3},
        "right": {"value": 5, "left": null, "right": 7},
    });
    let array = json!([4, [1, 2, 3], [5, null, 7]]);
    assert_eq!(tree(&object).unwrap(), tree(&array).unwrap());
}

#[test]
fn array_children_are_optional() {
    let tree = tree(&json!(["root", "left"])).unwrap().unwrap();
    assert_eq!(tree.left().map(BinaryTree::label).as_deref(), Some("left"));
    assert!(tree.right().is_none());
}

#[test]
fn object_without_value_is_invalid() {
    let error = tree(&json!({"left": 1})).unwrap_err();
    assert!(matches!(error, Error::InvalidJson(reason) if reason.contains("\"value\"")));
}

#[test]
fn unknown_key_is_invalid() {
    let error = tree(&json!({"value": 1, "middle": 2})).unwrap_err();
    assert!(matches!(error, Error::InvalidJson(reason) if reason.contains("middle")));
}

#[test]
fn too_long_array_is_invalid() {
    assert!(tree(&json!([1, 2, 3, 4])).is_err());
    assert!(tree(&json!([])).is_err());
}

#[test]
fn nested_label_is_invalid() {
    assert!(tree(&json!([[1], 2])).is_err());
}
