//! Category filtering for the skills grid and project gallery.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

pub const ALL: &str = "all";

pub trait Categorized {
    fn category(&self) -> &str;
}

/// Items in `active` category, or every item for [`ALL`]. Order is preserved.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], active: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| active == ALL || item.category() == active)
        .collect()
}

/// Capitalize the first character: `"enterprise"` -> `"Enterprise"`.
pub fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
