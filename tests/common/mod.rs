use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tui_binary_tree::TreeNode;

static TEST_SETUP: Once = Once::new();

/// Install a tracing subscriber once per test binary, filtered by `RUST_LOG`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );
        if tracing::dispatcher::has_been_set() {
            return;
        }
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {e}");
        });
        info!("Test Setup complete");
    });
}

/// Chain of `labels` where every node is the left child of the previous one.
#[allow(dead_code)]
pub fn left_chain(labels: &[&'static str]) -> Option<TreeNode<&'static str>> {
    labels
        .iter()
        .rev()
        .fold(None, |child, label| Some(TreeNode::new(*label, child, None)))
}

/// Chain of `labels` where every node is the right child of the previous one.
#[allow(dead_code)]
pub fn right_chain(labels: &[&'static str]) -> Option<TreeNode<&'static str>> {
    labels
        .iter()
        .rev()
        .fold(None, |child, label| Some(TreeNode::new(*label, None, child)))
}
