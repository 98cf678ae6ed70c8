//! Lookups of tags by name anywhere below a tag.
//!
//! Both searches walk compound entries and list elements depth first, visiting
//! a tag before its own children. The starting tag itself is never a match.
//! List elements have no name so never match, but their children are searched.

use crate::Tag;

/// The first descendant of `tag` named `name`, or `None`.
pub fn find_first<'a>(tag: &'a Tag, name: &str) -> Option<&'a Tag> {
    for child in tag.children() {
        if child.is_named() && child.name() == name {
            return Some(child);
        }
        if let Some(found) = find_first(child, name) {
            return Some(found);
        }
    }
    None
}

/// Every descendant of `tag` named `name`, in document order.
pub fn find_all<'a>(tag: &'a Tag, name: &str) -> Vec<&'a Tag> {
    let mut found = Vec::new();
    collect(tag, name, &mut found);
    found
}

fn collect<'a>(tag: &'a Tag, name: &str, found: &mut Vec<&'a Tag>) {
    for child in tag.children() {
        if child.is_named() && child.name() == name {
            found.push(child);
        }
        collect(child, name, found);
    }
}
