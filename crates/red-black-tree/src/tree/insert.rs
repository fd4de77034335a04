use std::cmp::Ordering;

use log::trace;

use crate::node::RbNode;
use crate::types::{Color, Side};

use super::RedBlackTree;

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Inserts `value` unless an equal value is already stored, in which
    /// case the tree is left untouched.
    pub fn insert(&mut self, value: T) {
        self.insert_unique(value);
    }

    /// Like [`insert`](Self::insert), but reports whether `value` was
    /// newly inserted (`true`) or an equal value was already present.
    pub fn insert_unique(&mut self, value: T) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(i) = curr {
            parent = Some(i);
            match (self.comparator)(&value, &self.arena[i as usize].v) {
                Ordering::Less => side = Side::Left,
                Ordering::Greater => side = Side::Right,
                Ordering::Equal => {
                    trace!("insert: equal value already at node {i}, ignoring");
                    return false;
                }
            }
            curr = self.child(i, side);
        }

        let n = self.push_node(value);
        self.arena[n as usize].p = parent;
        match parent {
            None => self.root = Some(n),
            Some(p) => self.set_child(p, side, Some(n)),
        }
        self.insert_fixup(n);
        true
    }

    fn push_node(&mut self, value: T) -> u32 {
        let idx = u32::try_from(self.arena.len()).expect("arena index fits in u32");
        self.arena.push(RbNode::new(value));
        idx
    }

    /// Repairs red-red violations upward from the freshly inserted red `n`.
    fn insert_fixup(&mut self, mut n: u32) {
        while let Some(p) = self.parent(n).filter(|&p| self.is_red(Some(p))) {
            let g = self.parent(p).expect("red node is never the root");
            let side = self.side_of(g, p);
            let uncle = self.child(g, side.opposite());

            if let Some(u) = uncle.filter(|&u| self.is_red(Some(u))) {
                self.paint(p, Color::Black);
                self.paint(u, Color::Black);
                self.paint(g, Color::Red);
                n = g;
                continue;
            }

            if self.child(p, side.opposite()) == Some(n) {
                // Inner grandchild: turn it into an outer one first.
                n = p;
                self.rotate(n, side);
            }
            let p = self.parent(n).expect("rotated node keeps a parent");
            let g = self.parent(p).expect("red parent keeps a grandparent");
            trace!("insert fixup: rotating at grandparent {g}");
            self.paint(p, Color::Black);
            self.paint(g, Color::Red);
            self.rotate(g, side.opposite());
        }

        if let Some(root) = self.root {
            self.paint(root, Color::Black);
        }
    }
}
