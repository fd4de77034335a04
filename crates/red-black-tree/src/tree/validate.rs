use std::cmp::Ordering;

use crate::error::InvariantError;
use crate::types::Color;
use crate::util::{first, next};

use super::RedBlackTree;

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Checks every structural invariant: parent links, size, strict
    /// ordering, black root, no red node with a red child, and uniform
    /// black height (the sentinel counting as one black node).
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            return match self.arena.len() {
                0 => Ok(()),
                size => Err(InvariantError::SizeMismatch { reachable: 0, size }),
            };
        };
        if self.arena[root as usize].p.is_some() {
            return Err(InvariantError::RootHasParent { root });
        }
        if self.arena[root as usize].color != Color::Black {
            return Err(InvariantError::RootNotBlack { root });
        }

        self.check_links(root)?;
        self.check_order()?;
        self.check_black_height(root)
    }

    fn check_links(&self, root: u32) -> Result<(), InvariantError> {
        let size = self.arena.len();
        let mut reachable = 0;
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            reachable += 1;
            if reachable > size {
                return Err(InvariantError::SizeMismatch { reachable, size });
            }
            let node = &self.arena[i as usize];
            for child in [node.l, node.r].into_iter().flatten() {
                let c = &self.arena[child as usize];
                if c.p != Some(i) {
                    return Err(InvariantError::BrokenParentLink { parent: i, child });
                }
                if node.color == Color::Red && c.color == Color::Red {
                    return Err(InvariantError::RedRedViolation { node: i });
                }
                stack.push(child);
            }
        }
        if reachable != size {
            return Err(InvariantError::SizeMismatch { reachable, size });
        }
        Ok(())
    }

    fn check_order(&self) -> Result<(), InvariantError> {
        let Some(mut prev) = first(&self.arena, self.root) else {
            return Ok(());
        };
        while let Some(i) = next(&self.arena, prev) {
            let ord = (self.comparator)(&self.arena[prev as usize].v, &self.arena[i as usize].v);
            if ord != Ordering::Less {
                return Err(InvariantError::OutOfOrder { node: i });
            }
            prev = i;
        }
        Ok(())
    }

    fn check_black_height(&self, root: u32) -> Result<(), InvariantError> {
        let mut heights = vec![0usize; self.arena.len()];

        let mut stack = vec![(root, false)];
        while let Some((i, expanded)) = stack.pop() {
            let node = &self.arena[i as usize];
            if !expanded {
                stack.push((i, true));
                stack.extend(node.r.map(|r| (r, false)));
                stack.extend(node.l.map(|l| (l, false)));
                continue;
            }
            let left = black_height(&heights, node.l);
            let right = black_height(&heights, node.r);
            if left != right {
                return Err(InvariantError::BlackHeightMismatch { node: i, left, right });
            }
            heights[i as usize] = left + usize::from(node.color == Color::Black);
        }
        Ok(())
    }
}

/// Black height below a link, the sentinel counting as one.
fn black_height(heights: &[usize], child: Option<u32>) -> usize {
    match child {
        Some(c) => heights[c as usize],
        None => 1,
    }
}
