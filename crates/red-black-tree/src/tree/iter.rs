use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::node::RbNode;
use crate::util::{first, last, next, prev};

use super::RedBlackTree;

/// Ascending iterator over a tree's values, borrowed from the tree.
pub struct Iter<'a, T> {
    arena: &'a [RbNode<T>],
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.remaining -= 1;
        let arena = self.arena;
        self.front = next(arena, i);
        Some(&arena[i as usize].v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        self.remaining -= 1;
        let arena = self.arena;
        self.back = prev(arena, i);
        Some(&arena[i as usize].v)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: first(&self.arena, self.root),
            back: last(&self.arena, self.root),
            remaining: self.arena.len(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
