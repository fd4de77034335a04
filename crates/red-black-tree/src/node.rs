use crate::types::{Color, Node, RbNodeLike};

/// Red-black tree node stored in the tree's arena.
#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
    pub color: Color,
}

impl<T> RbNode<T> {
    /// Fresh nodes enter the tree red and unlinked.
    pub(crate) fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v,
            color: Color::Red,
        }
    }
}

impl<T> Node for RbNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }
}

impl<T> RbNodeLike for RbNode<T> {
    fn color(&self) -> Color {
        self.color
    }
}
