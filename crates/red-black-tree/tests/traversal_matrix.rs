use red_black_tree::print::{print_binary, PrintChild, Printable};
use red_black_tree::{RedBlackTree, TraversalOrder};

// 20B -> (10B -> (5R, 15R), 30B -> (25R, ∅))
fn scenario_tree() -> RedBlackTree<i32> {
    [10, 20, 30, 15, 25, 5].into()
}

fn collect(tree: &RedBlackTree<i32>, order: TraversalOrder) -> Vec<i32> {
    let mut out = Vec::new();
    tree.traverse(order, |v| out.push(*v));
    out
}

#[test]
fn traversal_orders_matrix() {
    let tree = scenario_tree();
    let cases = [
        (TraversalOrder::PreOrder, vec![20, 10, 5, 15, 30, 25]),
        (TraversalOrder::InOrder, vec![5, 10, 15, 20, 25, 30]),
        (TraversalOrder::PostOrder, vec![5, 15, 10, 25, 30, 20]),
        (TraversalOrder::LevelOrder, vec![20, 10, 30, 5, 15, 25]),
    ];
    for (order, expected) in cases {
        assert_eq!(collect(&tree, order), expected, "{order:?}");
    }
}

#[test]
fn traversal_helpers_match_dispatch_matrix() {
    let tree: RedBlackTree<i32> = (0..64).rev().collect();
    let mut pre = Vec::new();
    let mut post = Vec::new();
    let mut level = Vec::new();
    tree.preorder(|v| pre.push(*v));
    tree.postorder(|v| post.push(*v));
    tree.levelorder(|v| level.push(*v));

    assert_eq!(pre, collect(&tree, TraversalOrder::PreOrder));
    assert_eq!(post, collect(&tree, TraversalOrder::PostOrder));
    assert_eq!(level, collect(&tree, TraversalOrder::LevelOrder));
}

#[test]
fn traversals_visit_every_value_once_matrix() {
    let tree: RedBlackTree<i32> = (0..200).map(|v| (v * 37) % 200).collect();
    for order in TraversalOrder::ALL {
        let mut seen = collect(&tree, order);
        assert_eq!(seen.len(), tree.size(), "{order:?}");
        seen.sort();
        assert_eq!(seen, (0..200).collect::<Vec<_>>(), "{order:?}");
    }
}

#[test]
fn empty_traversal_matrix() {
    let tree = RedBlackTree::<i32>::new();
    for order in TraversalOrder::ALL {
        assert!(collect(&tree, order).is_empty());
    }
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn iter_matrix() {
    let tree = scenario_tree();
    let forward: Vec<i32> = tree.iter().copied().collect();
    let backward: Vec<i32> = tree.iter().rev().copied().collect();
    assert_eq!(forward, vec![5, 10, 15, 20, 25, 30]);
    assert_eq!(backward, vec![30, 25, 20, 15, 10, 5]);
    assert_eq!(tree.iter().len(), 6);

    let mut it = tree.iter();
    assert_eq!(it.next(), Some(&5));
    assert_eq!(it.next_back(), Some(&30));
    assert_eq!(it.next(), Some(&10));
    assert_eq!(it.next_back(), Some(&25));
    assert_eq!(it.next(), Some(&15));
    assert_eq!(it.next_back(), Some(&20));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);

    let mut total = 0;
    for v in &tree {
        total += v;
    }
    assert_eq!(total, 105);
}

#[test]
fn printable_tree_matrix() {
    let tree = scenario_tree();
    assert_eq!(
        tree.to_string_with_tab(""),
        "RedBlackTree\n20 [black]\n← 10 [black]\n  ← 5 [red]\n  → 15 [red]\n→ 30 [black]\n  ← 25 [red]\n  → ∅"
    );
    assert_eq!(RedBlackTree::<i32>::new().to_string_with_tab(""), "RedBlackTree ∅");
}

#[test]
fn print_binary_matrix() {
    let left = |tab: &str| format!("L({tab})");
    let right = |tab: &str| format!("R({tab})");
    let left: &PrintChild = &left;
    let right: &PrintChild = &right;

    assert_eq!(
        print_binary("--", [Some(left), Some(right)]),
        "\n--← L(--  )\n--→ R(--  )"
    );
    assert_eq!(print_binary("", [None, Some(right)]), "\n→ R(  )");
    assert_eq!(print_binary("", [None, None]), "");
}
