mod common;

use std::borrow::Cow;

use rstest::rstest;
use tui_binary_tree::{
    render, BinaryTree, Error, LabelPolicy, Margin, TreeNode, TreePrinter,
};

use crate::common::{init_test_setup, left_chain, right_chain};

fn lines<T: BinaryTree>(tree: &T) -> Vec<String> {
    init_test_setup();
    render(Some(tree)).unwrap().into_lines()
}

#[rstest]
#[case::single(TreeNode::leaf("4"), &["4"])]
#[case::left_chain(left_chain(&["a", "b", "c"]).unwrap(), &["  a", " /", " b", "/", "c"])]
#[case::right_chain(right_chain(&["a", "b", "c"]).unwrap(), &["a", " \\", " b", "  \\", "  c"])]
#[case::zigzag(
    TreeNode::leaf("r").with_left(TreeNode::leaf("a").with_right(TreeNode::leaf("b"))),
    &["  r", " /", "a", " \\", " b"]
)]
#[case::words(
    TreeNode::new("root", Some(TreeNode::leaf("left")), Some(TreeNode::leaf("right"))),
    &["    root", "   /    \\", "left    right"]
)]
#[case::only_right_subtree(
    TreeNode::leaf("abc").with_right(TreeNode::leaf("d").with_left(TreeNode::leaf("e"))),
    &["abc", "   \\", "    d", "   /", "   e"]
)]
fn renders(#[case] tree: TreeNode<&'static str>, #[case] expected: &[&str]) {
    assert_eq!(lines(&tree), expected);
}

#[test]
fn example_from_the_numbers() {
    let tree = TreeNode::new(
        4,
        Some(TreeNode::new(1, Some(TreeNode::leaf(2)), Some(TreeNode::leaf(3)))),
        Some(TreeNode::new(5, Some(TreeNode::leaf(6)), Some(TreeNode::leaf(7)))),
    );
    let lines = lines(&tree);
    assert_eq!(lines.len(), 5);

    let root = lines[0].find('4').unwrap();
    assert_eq!(lines[1].find('/'), Some(root - 1));
    assert_eq!(lines[1].find('\\'), Some(root + 1));
    assert_eq!(lines[2].trim(), "1   5");
    assert_eq!(lines[3].matches('/').count(), 2);
    assert_eq!(lines[3].matches('\\').count(), 2);
    assert_eq!(
        lines[4].split_whitespace().collect::<Vec<_>>(),
        ["2", "3", "6", "7"]
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(12)]
fn left_chain_shifts_left(#[case] depth: usize) {
    let labels = ["n"; 16];
    let tree = left_chain(&labels[..depth]).unwrap();
    let lines = lines(&tree);
    assert_eq!(lines.len(), 2 * depth - 1);

    let node_columns = lines
        .iter()
        .step_by(2)
        .map(|line| line.find('n').unwrap())
        .collect::<Vec<_>>();
    assert!(node_columns.windows(2).all(|pair| pair[1] < pair[0]));
    for connector_line in lines.iter().skip(1).step_by(2) {
        assert_eq!(connector_line.trim(), "/");
    }
}

#[test]
fn missing_root_fails_fast() {
    init_test_setup();
    let error = TreePrinter::new()
        .render::<TreeNode<&str>>(None)
        .unwrap_err();
    assert!(matches!(error, Error::MissingRoot));
    assert_eq!(
        error.to_string(),
        "invalid input: cannot render a tree without a root node"
    );
}

#[test]
fn newline_in_label_is_rejected_by_default() {
    init_test_setup();
    let tree = TreeNode::leaf("ok").with_left(TreeNode::leaf("two\nlines"));
    let error = render(Some(&tree)).unwrap_err();
    assert!(matches!(error, Error::InvalidLabel { character: '\n', .. }));
}

#[test]
fn newline_in_label_can_be_escaped() {
    init_test_setup();
    let tree = TreeNode::leaf("ok").with_left(TreeNode::leaf("a\nb"));
    let rendering = TreePrinter::new()
        .label_policy(LabelPolicy::Escape)
        .render(Some(&tree))
        .unwrap();
    assert_eq!(rendering.lines(), ["    ok", "   /", "a\\nb"]);
}

#[test]
fn deep_tree_is_reported() {
    init_test_setup();
    let mut tree = TreeNode::leaf(0_usize);
    for value in 1..600 {
        tree = TreeNode::leaf(value).with_left(tree);
    }
    let error = render(Some(&tree)).unwrap_err();
    assert!(matches!(
        error,
        Error::TooDeep {
            limit: TreePrinter::DEFAULT_MAX_DEPTH
        }
    ));

    let rendering = TreePrinter::new().max_depth(600).render(Some(&tree)).unwrap();
    assert_eq!(rendering.height(), 2 * 600 - 1);
}

#[test]
fn keep_margin_preserves_anchor() {
    init_test_setup();
    let tree = left_chain(&["a", "b", "c"]).unwrap();
    let rendering = TreePrinter::new()
        .margin(Margin::Keep)
        .render(Some(&tree))
        .unwrap();
    // anchor 5, the left subtree needs 2 columns
    assert_eq!(
        rendering.lines(),
        ["     a", "    /", "    b", "   /", "   c"]
    );
}

#[test]
fn unicode_connectors() {
    init_test_setup();
    let tree = TreeNode::new("x", Some(TreeNode::leaf("y")), Some(TreeNode::leaf("z")));
    let rendering = TreePrinter::new()
        .connectors('╱', '╲')
        .render(Some(&tree))
        .unwrap();
    assert_eq!(rendering.to_string(), " x\n╱ ╲\ny z");
}

enum Expr {
    Number(i64),
    Binary(char, Box<Expr>, Box<Expr>),
}

impl BinaryTree for Expr {
    fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Number(number) => Cow::Owned(number.to_string()),
            Self::Binary(op, _, _) => Cow::Owned(op.to_string()),
        }
    }

    fn left(&self) -> Option<&Self> {
        match self {
            Self::Number(_) => None,
            Self::Binary(_, lhs, _) => Some(lhs.as_ref()),
        }
    }

    fn right(&self) -> Option<&Self> {
        match self {
            Self::Number(_) => None,
            Self::Binary(_, _, rhs) => Some(rhs.as_ref()),
        }
    }
}

#[test]
fn custom_tree_type() {
    let expr = Expr::Binary(
        '*',
        Box::new(Expr::Binary(
            '+',
            Box::new(Expr::Number(1)),
            Box::new(Expr::Number(23)),
        )),
        Box::new(Expr::Number(-4)),
    );
    assert_eq!(
        lines(&expr),
        ["    *", "   / \\", " +   -4", "/ \\", "1 23"]
    );
}
