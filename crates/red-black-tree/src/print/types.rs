/// Types that can render themselves as an indented multi-line tree.
pub trait Printable {
    fn to_string_with_tab(&self, tab: &str) -> String;
}

/// Child printer callback used by `print_binary`.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
