use tracing_subscriber::EnvFilter;
use tui_binary_tree::{BinaryTree, Margin, TreeNode, TreePrinter};

fn main() -> tui_binary_tree::Result<()> {
    // RUST_LOG=tui_binary_tree=trace shows every placed node
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let tree = TreeNode::new(
        4,
        Some(TreeNode::new(1, Some(TreeNode::leaf(2)), Some(TreeNode::leaf(3)))),
        Some(TreeNode::new(5, Some(TreeNode::leaf(6)), Some(TreeNode::leaf(7)))),
    );
    println!("height {}:", tree.height());
    TreePrinter::new().print(Some(&tree))?;

    println!();
    let words = TreeNode::new(
        "Mike",
        Some(TreeNode::new(
            "Delta",
            Some(TreeNode::leaf("Alfa")),
            Some(TreeNode::leaf("Hotel")),
        )),
        Some(TreeNode::leaf("Tango").with_right(TreeNode::leaf("Zulu"))),
    );
    TreePrinter::new()
        .connectors('╱', '╲')
        .margin(Margin::Keep)
        .print(Some(&words))?;

    println!();
    match TreePrinter::new().print::<TreeNode<u8>>(None) {
        Ok(()) => unreachable!("there is no root to print"),
        Err(err) => println!("{err}"),
    }

    Ok(())
}
