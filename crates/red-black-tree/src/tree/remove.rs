use std::cmp::Ordering;

use log::trace;

use crate::types::{Color, Side};
use crate::util::first;

use super::RedBlackTree;

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Removes the value equal to `value`, if any. Absent values are ignored.
    pub fn remove(&mut self, value: &T) {
        self.take(value);
    }

    /// Removes the value equal to `value` and hands it back.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let Some(z) = self.find(value) else {
            trace!("remove: value not present, ignoring");
            return None;
        };

        let mut removed_color = self.color(Some(z));
        // Cursor for the fixup plus its parent: the cursor may be the sentinel.
        let x;
        let x_parent;
        match (self.arena[z as usize].l, self.arena[z as usize].r) {
            (None, r) => {
                x = r;
                x_parent = self.parent(z);
                self.transplant(z, r);
            }
            (l, None) => {
                x = l;
                x_parent = self.parent(z);
                self.transplant(z, l);
            }
            (Some(zl), Some(zr)) => {
                let y = first(&self.arena, Some(zr)).expect("right subtree is not empty");
                removed_color = self.color(Some(y));
                x = self.arena[y as usize].r;
                if y == zr {
                    x_parent = Some(y);
                } else {
                    x_parent = self.parent(y);
                    self.transplant(y, x);
                    self.arena[y as usize].r = Some(zr);
                    self.arena[zr as usize].p = Some(y);
                }
                self.transplant(z, Some(y));
                self.arena[y as usize].l = Some(zl);
                self.arena[zl as usize].p = Some(y);
                self.arena[y as usize].color = self.arena[z as usize].color;
            }
        }

        if removed_color == Color::Black {
            self.remove_fixup(x, x_parent);
        }
        Some(self.release(z))
    }

    /// Puts `target` where `dest` hangs off its parent (or the root slot).
    fn transplant(&mut self, dest: u32, target: Option<u32>) {
        let p = self.parent(dest);
        self.replace_child(p, dest, target);
        self.set_parent(target, p);
    }

    /// Restores uniform black height after a black node left the path
    /// through `x`. `parent` is `x`'s parent, tracked separately because `x`
    /// may be the sentinel.
    fn remove_fixup(&mut self, mut x: Option<u32>, mut parent: Option<u32>) {
        while x != self.root && !self.is_red(x) {
            let p = parent.expect("non-root cursor has a parent");
            let side = if self.arena[p as usize].l == x {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();
            let mut w = self
                .child(p, far)
                .expect("sibling of a black-deficient path is a real node");

            if self.is_red(Some(w)) {
                self.paint(w, Color::Black);
                self.paint(p, Color::Red);
                self.rotate(p, side);
                w = self.child(p, far).expect("red sibling had black children");
            }

            if !self.is_red(self.child(w, Side::Left)) && !self.is_red(self.child(w, Side::Right)) {
                self.paint(w, Color::Red);
                x = Some(p);
                parent = self.parent(p);
                continue;
            }

            if !self.is_red(self.child(w, far)) {
                let near = self.child(w, side).expect("one nephew is red");
                self.paint(near, Color::Black);
                self.paint(w, Color::Red);
                self.rotate(w, far);
                w = self.child(p, far).expect("rotated nephew is the new sibling");
            }

            trace!("remove fixup: rotating at parent {p}");
            let parent_color = self.arena[p as usize].color;
            self.paint(w, parent_color);
            self.paint(p, Color::Black);
            let outer = self.child(w, far).expect("outer nephew is red");
            self.paint(outer, Color::Black);
            self.rotate(p, side);
            x = self.root;
            parent = None;
        }

        if let Some(x) = x {
            self.paint(x, Color::Black);
        }
    }

    /// Frees the detached node `z`, moving the last arena node into its slot
    /// and relinking that node's neighbours.
    fn release(&mut self, z: u32) -> T {
        let last = u32::try_from(self.arena.len() - 1).expect("arena index fits in u32");
        let node = self.arena.swap_remove(z as usize);
        if z != last {
            let (p, l, r) = {
                let moved = &self.arena[z as usize];
                (moved.p, moved.l, moved.r)
            };
            self.replace_child(p, last, Some(z));
            self.set_parent(l, Some(z));
            self.set_parent(r, Some(z));
        }
        node.v
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Color;
    use crate::RedBlackTree;

    #[test]
    fn release_relinks_moved_root_matrix() {
        let mut tree: RedBlackTree<i32> = [1, 2].into();
        tree.remove(&1);

        assert_eq!(tree.arena.len(), 1);
        assert_eq!(tree.root, Some(0));
        assert_eq!(tree.arena[0].v, 2);
        assert_eq!(tree.arena[0].color, Color::Black);
        assert_eq!(tree.assert_valid(), Ok(()));
    }

    #[test]
    fn release_relinks_moved_inner_node_matrix() {
        // Each removal moves whatever sits in the last arena slot.
        let mut tree: RedBlackTree<i32> = (1..=10).collect();
        for v in [1, 10, 5, 2] {
            let last = tree.arena.len() - 1;
            let moved = tree.arena[last].v;
            tree.remove(&v);
            assert_eq!(tree.assert_valid(), Ok(()));
            if moved != v {
                assert!(tree.search(&moved));
            }
        }
        assert_eq!(tree.arena.len(), 6);
    }
}
