//! Link and color traits shared by the arena helpers in [`crate::util`].

/// Node color. The absent link (`None`) always reads as [`Color::Black`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Single-letter tag used by the debug dump.
    pub fn tag(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

/// Arena node addressed by `u32` indices; `None` is the sentinel.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
}

pub trait RbNodeLike: Node {
    fn color(&self) -> Color;
}

/// Color of a possibly absent link. The sentinel is always black.
pub fn color_of<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Color {
    match node {
        Some(i) => arena[i as usize].color(),
        None => Color::Black,
    }
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
