use std::cmp::Ordering;
use std::fmt::Display;

use crate::print::{print_binary, PrintChild, Printable};
use crate::types::Color;

use super::RedBlackTree;

impl<T, C> RedBlackTree<T, C>
where
    T: Display,
    C: Fn(&T, &T) -> Ordering,
{
    /// Level-order listing of `value(color)` pairs, e.g. `20(B), 10(R), 30(R)`.
    /// Diagnostic only.
    pub fn dump(&self) -> String {
        let mut out = Vec::with_capacity(self.len());
        self.for_each_level_order(|i| {
            let node = &self.arena[i as usize];
            out.push(format!("{}({})", node.v, node.color.tag()));
        });
        out.join(", ")
    }

    fn print_node(&self, node: Option<u32>, tab: &str) -> String {
        let Some(i) = node else {
            return "∅".to_string();
        };
        let n = &self.arena[i as usize];
        let color = match n.color {
            Color::Red => "red",
            Color::Black => "black",
        };
        if n.l.is_none() && n.r.is_none() {
            return format!("{} [{color}]", n.v);
        }
        let left = |tab: &str| self.print_node(n.l, tab);
        let right = |tab: &str| self.print_node(n.r, tab);
        let left: &PrintChild = &left;
        let right: &PrintChild = &right;
        format!("{} [{color}]{}", n.v, print_binary(tab, [Some(left), Some(right)]))
    }
}

impl<T, C> Printable for RedBlackTree<T, C>
where
    T: Display,
    C: Fn(&T, &T) -> Ordering,
{
    fn to_string_with_tab(&self, tab: &str) -> String {
        match self.root {
            None => "RedBlackTree ∅".to_string(),
            root => format!("RedBlackTree\n{tab}{}", self.print_node(root, tab)),
        }
    }
}
