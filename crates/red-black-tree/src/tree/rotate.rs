use std::cmp::Ordering;

use crate::types::Side;

use super::RedBlackTree;

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Rotates `x` down towards `side` (`Side::Left` is a left rotation); its
    /// child on the opposite side takes its place. Returns the new subtree
    /// root. Colors are not touched.
    pub(super) fn rotate(&mut self, x: u32, side: Side) -> u32 {
        let rising = side.opposite();
        let y = self
            .child(x, rising)
            .expect("rotation pivot has a child on the rising side");

        let inner = self.child(y, side);
        self.set_child(x, rising, inner);
        self.set_parent(inner, Some(x));

        let xp = self.parent(x);
        self.arena[y as usize].p = xp;
        self.replace_child(xp, x, Some(y));

        self.set_child(y, side, Some(x));
        self.arena[x as usize].p = Some(y);
        y
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Color, Side};
    use crate::RedBlackTree;

    fn shape(tree: &RedBlackTree<i32>, i: u32) -> (i32, Option<i32>, Option<i32>, Option<i32>) {
        let n = &tree.arena[i as usize];
        let key = |j: Option<u32>| j.map(|j| tree.arena[j as usize].v);
        (n.v, key(n.p), key(n.l), key(n.r))
    }

    fn index_of(tree: &RedBlackTree<i32>, v: i32) -> u32 {
        tree.find(&v).unwrap()
    }

    #[test]
    fn rotate_left_at_root_matrix() {
        // 2 -> (1, 4 -> (3, 5))
        let mut tree: RedBlackTree<i32> = [2, 1, 4, 3, 5].into();
        let root = tree.root.unwrap();
        assert_eq!(tree.arena[root as usize].v, 2);

        let colors: Vec<Color> = tree.arena.iter().map(|n| n.color).collect();
        let new_root = tree.rotate(root, Side::Left);

        assert_eq!(tree.root, Some(new_root));
        assert_eq!(shape(&tree, new_root), (4, None, Some(2), Some(5)));
        assert_eq!(shape(&tree, index_of(&tree, 2)), (2, Some(4), Some(1), Some(3)));
        assert_eq!(shape(&tree, index_of(&tree, 3)), (3, Some(2), None, None));
        assert_eq!(shape(&tree, index_of(&tree, 5)), (5, Some(4), None, None));

        let after: Vec<Color> = tree.arena.iter().map(|n| n.color).collect();
        assert_eq!(colors, after);

        let mut seen = Vec::new();
        tree.inorder(|v| seen.push(*v));
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotate_right_inverts_rotate_left_matrix() {
        let mut tree: RedBlackTree<i32> = [2, 1, 4, 3, 5].into();
        let root = tree.root.unwrap();
        let before: Vec<_> = (0..tree.arena.len() as u32).map(|i| shape(&tree, i)).collect();

        let up = tree.rotate(root, Side::Left);
        let back = tree.rotate(up, Side::Right);

        assert_eq!(back, root);
        let after: Vec<_> = (0..tree.arena.len() as u32).map(|i| shape(&tree, i)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn rotate_below_root_relinks_parent_matrix() {
        let mut tree: RedBlackTree<i32> = [2, 1, 4, 3, 5].into();
        let four = index_of(&tree, 4);

        let up = tree.rotate(four, Side::Right);

        assert_eq!(tree.arena[up as usize].v, 3);
        assert_eq!(shape(&tree, up), (3, Some(2), None, Some(4)));
        assert_eq!(shape(&tree, four), (4, Some(3), None, Some(5)));
        assert_eq!(tree.arena[tree.root.unwrap() as usize].r, Some(up));
    }
}
