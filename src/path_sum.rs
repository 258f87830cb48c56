use crate::error::{ExerciseError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i64) -> Self {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(val: i64, left: Option<TreeNode>, right: Option<TreeNode>) -> Self {
        TreeNode {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Builds a tree from its level-order list, where the children of index i sit at 2i+1 and 2i+2.
///
/// Every present value needs a present parent, otherwise the list is rejected.
pub fn build_tree(values: &[Option<i64>]) -> Result<Option<Box<TreeNode>>> {
    for (index, value) in values.iter().enumerate().skip(1) {
        let parent = (index - 1) / 2;
        if value.is_some() && values[parent].is_none() {
            return Err(ExerciseError::InvalidTree(format!(
                "node at index {} has no parent at index {}",
                index, parent
            )));
        }
    }
    Ok(build_subtree(values, 0))
}

fn build_subtree(values: &[Option<i64>], index: usize) -> Option<Box<TreeNode>> {
    let val = (*values.get(index)?)?;
    Some(Box::new(TreeNode {
        val,
        left: build_subtree(values, 2 * index + 1),
        right: build_subtree(values, 2 * index + 2),
    }))
}

/// Parses `"2,3,null,1"` style input; `null`, `none` and blanks are empty slots.
pub fn parse_level_order(input: &str) -> Result<Vec<Option<i64>>> {
    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            if token.is_empty() || token.eq_ignore_ascii_case("null") || token.eq_ignore_ascii_case("none") {
                return Ok(None);
            }
            token
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ExerciseError::InvalidTree(format!("'{}' is not an integer", token)))
        })
        .collect()
}

/// Whether some root-to-leaf path adds up to `target_sum`. An empty tree has no paths.
pub fn has_path_sum(root: Option<&TreeNode>, target_sum: i64) -> bool {
    remaining_sum_reachable(root, i128::from(target_sum))
}

fn remaining_sum_reachable(node: Option<&TreeNode>, remaining: i128) -> bool {
    let Some(node) = node else {
        return false; // missing child of a node that still has one other child
    };
    let remaining = remaining - i128::from(node.val);
    if node.is_leaf() {
        return remaining == 0;
    }
    remaining_sum_reachable(node.left.as_deref(), remaining)
        || remaining_sum_reachable(node.right.as_deref(), remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(input: &str) -> Option<Box<TreeNode>> {
        build_tree(&parse_level_order(input).unwrap()).unwrap()
    }

    #[test]
    fn test_has_path_sum_null_root() {
        assert!(!has_path_sum(None, 0));
    }

    #[test]
    fn test_has_path_sum_single_node() {
        let root = TreeNode::new(5);
        assert!(has_path_sum(Some(&root), 5));
        assert!(!has_path_sum(Some(&root), 0));
    }

    #[test]
    fn test_has_path_sum_two_nodes() {
        let root = tree("2,3");
        assert!(has_path_sum(root.as_deref(), 5));
        assert!(!has_path_sum(root.as_deref(), 2)); // root alone isn't a leaf
        assert!(!has_path_sum(root.as_deref(), 3));
    }

    #[test]
    fn test_has_path_sum_negative_nodes() {
        assert!(has_path_sum(tree("-2,-3").as_deref(), -5));
    }

    #[test]
    fn test_has_path_sum_full_tree() {
        //        2
        //     3     3
        //    1 1   1 1
        let root = tree("2,3,3,1,1,1,1");
        assert!(has_path_sum(root.as_deref(), 6));
        assert!(!has_path_sum(root.as_deref(), 5));
        assert!(!has_path_sum(root.as_deref(), 2));
    }

    #[test]
    fn test_has_path_sum_not_full_tree() {
        //        2
        //     3     3
        //    1        1
        let root = tree("2,3,3,1,null,null,1");
        assert!(has_path_sum(root.as_deref(), 6));
        assert!(!has_path_sum(root.as_deref(), 5));
    }

    #[test]
    fn test_has_path_sum_zigzag() {
        //     2
        //   3
        //     5
        //    1
        let root = tree("2,3,null,null,5,null,null,null,null,1");
        let expected = TreeNode::with_children(
            2,
            Some(TreeNode::with_children(
                3,
                None,
                Some(TreeNode::with_children(5, Some(TreeNode::new(1)), None)),
            )),
            None,
        );
        assert_eq!(root.as_deref(), Some(&expected));
        assert!(has_path_sum(root.as_deref(), 11));
        assert!(!has_path_sum(root.as_deref(), 10)); // 2+3+5 stops at a non-leaf
    }

    #[test]
    fn test_has_path_sum_extreme_values() {
        let root = TreeNode::with_children(i64::MAX, Some(TreeNode::new(i64::MIN)), None);
        assert!(has_path_sum(Some(&root), -1));
    }

    #[test]
    fn test_build_tree_empty() {
        assert_eq!(build_tree(&[]).unwrap(), None);
        assert_eq!(tree(""), None);
    }

    #[test]
    fn test_build_tree_orphan_node() {
        let result = build_tree(&[Some(1), None, None, Some(4)]);
        assert!(matches!(result, Err(ExerciseError::InvalidTree(_))));
        assert!(build_tree(&[None, Some(1)]).is_err());
    }

    #[test]
    fn test_parse_level_order() {
        assert_eq!(
            parse_level_order(" 2, NULL,None , ,-7").unwrap(),
            vec![Some(2), None, None, None, Some(-7)]
        );
        assert!(matches!(parse_level_order("2,x"), Err(ExerciseError::InvalidTree(_))));
    }
}
