mod content;
mod node;

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

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to the element with `id`, both ends included.
pub fn find_path(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    for child in root.content.children() {
        if let Some(mut path) = find_path(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }

    None
}

/// All descendants of `root` with the given tag, in document order.
/// The root itself is not included.
pub fn query_all<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_tag(root, tag, &mut found);
    found
}

fn collect_by_tag<'a>(element: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    for child in element.content.children() {
        if child.tag == tag {
            found.push(child);
        }
        collect_by_tag(child, tag, found);
    }
}

/// First descendant (or the root) carrying `part` in its part list.
pub fn find_part<'a>(root: &'a Element, part: &str) -> Option<&'a Element> {
    if root.has_part(part) {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| find_part(child, part))
}
