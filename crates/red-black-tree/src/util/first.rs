use crate::types::Node;

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena[curr as usize].l() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node of the subtree rooted at `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena[curr as usize].r() {
        curr = r;
    }
    Some(curr)
}
