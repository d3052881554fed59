use proptest::prelude::*;
use unicode_width::UnicodeWidthChar;
use tui_binary_tree::{
    BinaryTree, Canvas, Compositor, Extent, FragmentKind, LabelPolicy, Side, TreeNode,
    TreePrinter,
};

const ANY_LABEL: &str = "[a-z0-9木語]{0,4}";

/// Random trees whose labels match the `label` regex.
fn arb_tree(label: &'static str) -> impl Strategy<Value = TreeNode<String>> {
    let leaf = label.prop_map(TreeNode::leaf);
    leaf.prop_recursive(10, 128, 2, move |inner| {
        (
            label,
            proptest::option::of(inner.clone()),
            proptest::option::of(inner),
        )
            .prop_map(|(label, left, right)| TreeNode::new(label, left, right))
    })
}

fn in_order(tree: &TreeNode<String>, labels: &mut Vec<String>) {
    if let Some(left) = tree.left() {
        in_order(left, labels);
    }
    labels.push(tree.value().clone());
    if let Some(right) = tree.right() {
        in_order(right, labels);
    }
}

/// Rest of `line` starting at display column `column`, if a character starts there.
fn text_at(line: &str, column: usize) -> Option<&str> {
    let mut width = 0;
    for (index, character) in line.char_indices() {
        if width == column {
            return Some(&line[index..]);
        }
        width += character.width().unwrap_or_default();
    }
    (width == column).then_some("")
}

fn compose(tree: &TreeNode<String>) -> Canvas {
    let extent = Extent::measure(tree, LabelPolicy::Reject, 64).expect("labels are valid");
    let mut canvas = Canvas::default();
    Compositor::new(&mut canvas, '/', '\\')
        .layout(Some(&extent), extent.left_span(), 0, Side::Right)
        .expect("layout never overlaps");
    canvas
}

proptest! {
    #[test]
    fn line_count_follows_height(tree in arb_tree(ANY_LABEL)) {
        let rendering = TreePrinter::new().render(Some(&tree)).expect("labels are valid");
        prop_assert_eq!(rendering.height(), 2 * tree.height() - 1);
        prop_assert_eq!(rendering.height(), compose(&tree).rows().count());
    }

    #[test]
    fn fragments_never_overlap(tree in arb_tree(ANY_LABEL)) {
        let canvas = compose(&tree);
        for (_, row) in canvas.rows() {
            let fragments = row.fragments().collect::<Vec<_>>();
            for pair in fragments.windows(2) {
                let (start, fragment) = pair[0];
                let (next, _) = pair[1];
                prop_assert!(start + fragment.columns() <= next);
            }
        }
    }

    #[test]
    fn labels_follow_in_order_traversal(tree in arb_tree(ANY_LABEL)) {
        let canvas = compose(&tree);
        let mut placed = canvas
            .rows()
            .flat_map(|(_, row)| row.fragments())
            .filter(|(_, fragment)| fragment.kind() == FragmentKind::Label)
            .map(|(column, fragment)| (column, fragment.text().to_owned()))
            .collect::<Vec<_>>();
        placed.sort_by_key(|(column, _)| *column);

        let mut expected = Vec::new();
        in_order(&tree, &mut expected);
        let actual = placed.into_iter().map(|(_, label)| label).collect::<Vec<_>>();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn node_and_connector_rows_alternate(tree in arb_tree(ANY_LABEL)) {
        let canvas = compose(&tree);
        for (index, row) in canvas.rows() {
            let expected = if index % 2 == 0 { FragmentKind::Label } else { FragmentKind::Connector };
            prop_assert!(row.fragments().all(|(_, fragment)| fragment.kind() == expected));
        }
    }

    #[test]
    fn fragments_are_serialized_at_their_columns(tree in arb_tree(ANY_LABEL)) {
        let canvas = compose(&tree);
        for (_, row) in canvas.rows() {
            let line = row.serialize();
            for (column, fragment) in row.fragments() {
                let rest = text_at(&line, column);
                prop_assert!(
                    rest.is_some_and(|rest| rest.starts_with(fragment.text())),
                    "{:?} not at column {} of {:?}", fragment.text(), column, line
                );
            }
        }
    }

    #[test]
    fn margin_is_trimmed(tree in arb_tree("[a-z0-9木]{1,4}")) {
        let rendering = TreePrinter::new().render(Some(&tree)).expect("labels are valid");
        prop_assert!(rendering.lines().iter().any(|line| !line.starts_with(' ')));
    }
}
