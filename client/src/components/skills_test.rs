use super::*;

#[test]
fn catalog_has_sixteen_skills() {
    assert_eq!(SKILLS.len(), 16);
    assert_eq!(filter_by_category(SKILLS, ALL).len(), 16);
}

#[test]
fn every_skill_belongs_to_a_listed_category() {
    for skill in SKILLS {
        assert!(CATEGORIES.iter().any(|(id, _)| *id == skill.category), "{}", skill.name);
    }
}

#[test]
fn category_counts() {
    assert_eq!(filter_by_category(SKILLS, "frontend").len(), 3);
    assert_eq!(filter_by_category(SKILLS, "backend").len(), 3);
    assert_eq!(filter_by_category(SKILLS, "devops").len(), 5);
    assert_eq!(filter_by_category(SKILLS, "data").len(), 5);
}

#[test]
fn filtered_order_matches_catalog_order() {
    let names: Vec<_> = filter_by_category(SKILLS, "frontend").iter().map(|s| s.name).collect();
    assert_eq!(names, ["React", "TypeScript", "JavaScript"]);
}
