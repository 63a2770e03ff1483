mod content;
mod node;

use std::fmt::Write;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Describe a tree as indented lines, one element per line.
///
/// ```text
/// toggle
///   toggle-button [clickable, focusable] "Toggle Text"
///   toggle-text "This text is toggleable"
/// ```
pub fn outline(root: &Element) -> String {
    let mut out = String::new();
    outline_into(&mut out, root, 0);
    out
}

fn outline_into(out: &mut String, element: &Element, depth: usize) {
    let _ = write!(out, "{:indent$}{}", "", element.id, indent = depth * 2);

    let flags: Vec<&str> = [
        (element.clickable, "clickable"),
        (element.focusable, "focusable"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect();
    if !flags.is_empty() {
        let _ = write!(out, " [{}]", flags.join(", "));
    }

    match &element.content {
        Content::None => out.push('\n'),
        Content::Text(text) => {
            let _ = writeln!(out, " {text:?}");
        }
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                outline_into(out, child, depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_nests_children() {
        let root = Element::col("root").children(vec![
            Element::text("greeting", "hi").clickable(true),
            Element::col("empty"),
        ]);

        assert_eq!(
            outline(&root),
            "root\n  greeting [clickable] \"hi\"\n  empty\n"
        );
    }

    #[test]
    fn test_find_element_misses_unknown_id() {
        let root = Element::col("root").child(Element::text("a", "a"));

        assert!(find_element(&root, "a").is_some());
        assert!(find_element(&root, "b").is_none());
    }
}
