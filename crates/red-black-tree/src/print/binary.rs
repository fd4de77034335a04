use super::types::PrintChild;

/// Renders up to two children under `tab`, left branch first.
///
/// Each child callback receives the indentation its own children must use.
pub fn print_binary(tab: &str, children: [Option<&PrintChild>; 2]) -> String {
    let [left, right] = children;
    let child_tab = format!("{tab}  ");

    let mut out = String::new();
    for (arrow, child) in [("← ", left), ("→ ", right)] {
        let Some(child) = child else {
            continue;
        };
        out.push('\n');
        out.push_str(tab);
        out.push_str(arrow);
        out.push_str(&child(&child_tab));
    }

    out
}
