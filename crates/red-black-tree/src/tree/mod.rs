//! Arena-backed red-black tree.
//!
//! Every node lives in a single `Vec` owned by the tree and links are
//! `Option<u32>` arena indices. `None` plays the sentinel: it is the only
//! representation of "no child" / "no parent" and always reads as black.
//! The arena stays dense, so the tree's size is the arena's length.

mod insert;
mod iter;
mod print;
mod remove;
mod rotate;
mod traverse;
mod validate;

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{EmptyContainerError, Extreme};
use crate::node::RbNode;
use crate::types::{color_of, Color, Side};
use crate::util::{first, last};

pub use iter::Iter;
pub use traverse::TraversalOrder;

/// Comparator used when none is supplied.
pub type DefaultComparator<T> = fn(&T, &T) -> Ordering;

/// Ordered set of unique values kept balanced by red-black invariants.
pub struct RedBlackTree<T, C = DefaultComparator<T>>
where
    C: Fn(&T, &T) -> Ordering,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<RbNode<T>>,
}

impl<T: Ord> RedBlackTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Ord> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Empty tree ordered by `comparator`, which must be a total order.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn search(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Stored value equal to `value` under the tree's comparator.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(value).map(|i| &self.arena[i as usize].v)
    }

    pub fn min(&self) -> Result<&T, EmptyContainerError> {
        first(&self.arena, self.root)
            .map(|i| &self.arena[i as usize].v)
            .ok_or(EmptyContainerError {
                extreme: Extreme::Min,
            })
    }

    pub fn max(&self) -> Result<&T, EmptyContainerError> {
        last(&self.arena, self.root)
            .map(|i| &self.arena[i as usize].v)
            .ok_or(EmptyContainerError {
                extreme: Extreme::Max,
            })
    }

    /// Drops every value and resets to the empty state.
    pub fn clear(&mut self) {
        trace!("clear: dropping {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    /// Exchanges contents with `other`. Comparators stay with their trees,
    /// so both must describe the same order.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.root, &mut other.root);
        std::mem::swap(&mut self.arena, &mut other.arena);
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub(crate) fn find(&self, value: &T) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match (self.comparator)(value, &self.arena[i as usize].v) {
                Ordering::Less => self.arena[i as usize].l,
                Ordering::Greater => self.arena[i as usize].r,
                Ordering::Equal => return Some(i),
            };
        }
        None
    }

    fn parent(&self, i: u32) -> Option<u32> {
        self.arena[i as usize].p
    }

    fn child(&self, i: u32, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.arena[i as usize].l,
            Side::Right => self.arena[i as usize].r,
        }
    }

    fn set_child(&mut self, i: u32, side: Side, child: Option<u32>) {
        match side {
            Side::Left => self.arena[i as usize].l = child,
            Side::Right => self.arena[i as usize].r = child,
        }
    }

    fn set_parent(&mut self, i: Option<u32>, parent: Option<u32>) {
        if let Some(i) = i {
            self.arena[i as usize].p = parent;
        }
    }

    /// Slot of `parent` that holds `child`.
    fn side_of(&self, parent: u32, child: u32) -> Side {
        if self.arena[parent as usize].l == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn is_red(&self, i: Option<u32>) -> bool {
        color_of(&self.arena, i) == Color::Red
    }

    fn color(&self, i: Option<u32>) -> Color {
        color_of(&self.arena, i)
    }

    fn paint(&mut self, i: u32, color: Color) {
        self.arena[i as usize].color = color;
    }

    /// Points whichever slot held `old` (a child of `parent`, or the root
    /// when `parent` is `None`) at `new`. Does not touch `new`'s parent link.
    fn replace_child(&mut self, parent: Option<u32>, old: u32, new: Option<u32>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self.side_of(p, old);
                self.set_child(p, side, new);
            }
        }
    }
}

impl<T, C> Clone for RedBlackTree<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering + Clone,
{
    /// Rebuilds by re-inserting the source's values in level order. The copy
    /// holds the same values but its shape and coloring may differ.
    fn clone(&self) -> Self {
        debug!("clone: re-inserting {} values", self.len());
        let mut copy = Self::with_comparator(self.comparator.clone());
        copy.arena.reserve(self.len());
        self.levelorder(|v| copy.insert(v.clone()));
        copy
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for RedBlackTree<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, C> Extend<T> for RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> PartialEq for RedBlackTree<T, C>
where
    T: PartialEq,
    C: Fn(&T, &T) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for RedBlackTree<T, C>
where
    T: Eq,
    C: Fn(&T, &T) -> Ordering,
{
}

impl<T, C> fmt::Debug for RedBlackTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
