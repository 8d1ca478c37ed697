use super::*;

struct Item(&'static str, &'static str);

impl Categorized for Item {
    fn category(&self) -> &str {
        self.1
    }
}

const ITEMS: &[Item] = &[Item("a", "web"), Item("b", "ai"), Item("c", "web")];

#[test]
fn all_keeps_every_item_in_order() {
    let names: Vec<_> = filter_by_category(ITEMS, ALL).iter().map(|i| i.0).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn category_filter_preserves_order() {
    let names: Vec<_> = filter_by_category(ITEMS, "web").iter().map(|i| i.0).collect();
    assert_eq!(names, ["a", "c"]);
}

#[test]
fn unknown_category_is_empty() {
    assert!(filter_by_category(ITEMS, "mobile").is_empty());
}

#[test]
fn title_case_capitalizes_first_char() {
    assert_eq!(title_case("enterprise"), "Enterprise");
    assert_eq!(title_case("ai"), "Ai");
    assert_eq!(title_case(""), "");
}
