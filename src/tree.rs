/// A node in a binary tree.
///
/// Children are held by exclusive ownership (`Option<Box<TreeNode>>`), so every
/// node has at most one parent and safe code cannot build a cycle. Trees are
/// constructed by the caller; the functions in this module only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// A node with no children.
    pub fn leaf(val: i64) -> Self {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }

    /// A node taking ownership of the given children.
    pub fn new(val: i64, left: Option<TreeNode>, right: Option<TreeNode>) -> Self {
        TreeNode {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
}

/// Returns the height of the tree rooted at `root`, counted in nodes.
///
/// An absent tree has depth 0 and a single node has depth 1; otherwise
/// `depth(node) = 1 + max(depth(left), depth(right))`. The traversal is
/// recursive, so stack use is proportional to the tree height.
///
/// # Example
/// ```
/// use algo_practice::tree::{max_depth, TreeNode};
/// let root = TreeNode::new(1, Some(TreeNode::leaf(2)), None);
/// assert_eq!(max_depth(Some(&root)), 2);
/// assert_eq!(max_depth(None), 0);
/// ```
pub fn max_depth(root: Option<&TreeNode>) -> usize {
    match root {
        None => 0,
        Some(node) => {
            1 + max_depth(node.left.as_deref()).max(max_depth(node.right.as_deref()))
        }
    }
}

/// Returns true when every node's subtrees differ in height by at most one.
pub fn is_balanced(root: Option<&TreeNode>) -> bool {
    depth_if_balanced(root).is_some()
}

// Depth of the subtree when balanced, None as soon as any skew exceeds 1.
fn depth_if_balanced(node: Option<&TreeNode>) -> Option<usize> {
    let Some(node) = node else { return Some(0) };
    let left = depth_if_balanced(node.left.as_deref())?;
    let right = depth_if_balanced(node.right.as_deref())?;
    if left.abs_diff(right) > 1 {
        return None;
    }
    Some(1 + left.max(right))
}
