use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::util::{first, next};

use super::RedBlackTree;

/// Visiting order for [`RedBlackTree::traverse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];
}

// None of the walks recurse, so stack use does not grow with tree height.
impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Applies `visitor` to every stored value in `order`.
    pub fn traverse<F: FnMut(&T)>(&self, order: TraversalOrder, visitor: F) {
        match order {
            TraversalOrder::PreOrder => self.preorder(visitor),
            TraversalOrder::InOrder => self.inorder(visitor),
            TraversalOrder::PostOrder => self.postorder(visitor),
            TraversalOrder::LevelOrder => self.levelorder(visitor),
        }
    }

    /// Ascending order. Walks parent links, so no auxiliary storage is used.
    pub fn inorder<F: FnMut(&T)>(&self, mut visitor: F) {
        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            visitor(&self.arena[i as usize].v);
            curr = next(&self.arena, i);
        }
    }

    /// Node, then left subtree, then right subtree.
    pub fn preorder<F: FnMut(&T)>(&self, mut visitor: F) {
        let mut stack: Vec<u32> = self.root.into_iter().collect();
        while let Some(i) = stack.pop() {
            let node = &self.arena[i as usize];
            visitor(&node.v);
            stack.extend(node.r);
            stack.extend(node.l);
        }
    }

    /// Both subtrees before the node itself.
    pub fn postorder<F: FnMut(&T)>(&self, mut visitor: F) {
        // `true` marks a node whose children are already queued.
        let mut stack: Vec<(u32, bool)> = self.root.map(|i| (i, false)).into_iter().collect();
        while let Some((i, expanded)) = stack.pop() {
            let node = &self.arena[i as usize];
            if expanded {
                visitor(&node.v);
                continue;
            }
            stack.push((i, true));
            stack.extend(node.r.map(|r| (r, false)));
            stack.extend(node.l.map(|l| (l, false)));
        }
    }

    /// Breadth first, left to right within a level.
    pub fn levelorder<F: FnMut(&T)>(&self, mut visitor: F) {
        self.for_each_level_order(|i| visitor(&self.arena[i as usize].v));
    }

    pub(super) fn for_each_level_order<F: FnMut(u32)>(&self, mut f: F) {
        let mut queue: VecDeque<u32> = self.root.into_iter().collect();
        while let Some(i) = queue.pop_front() {
            f(i);
            let node = &self.arena[i as usize];
            queue.extend(node.l);
            queue.extend(node.r);
        }
    }
}
