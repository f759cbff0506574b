//! Edge case and boundary condition tests
//!
//! Malformed records, empty repositories and degenerate images.

use folio_core::{
    derive_categories, filter_by_category, FolioError, Project, ProjectRepository, Selection,
    Showcase, ShowcaseEvent,
};

// ============================================================================
// Malformed Input
// ============================================================================

/// A record whose category is neither a label nor a non-empty list
#[test]
fn test_malformed_category_only_under_all() {
    let json = r#"[
        {"id":"1","title":"Shop","description":"d","category":"Web Development","image":"1.png"},
        {"id":"2","title":"Odd","description":"d","category":null,"image":"2.png"},
        {"id":"3","title":"Odd","description":"d","category":[],"image":"3.png"},
        {"id":"4","title":"Odd","description":"d","category":[1,2],"image":"4.png"}
    ]"#;
    let repo = ProjectRepository::from_json_str(json).unwrap();
    assert_eq!(repo.len(), 4);

    let index = derive_categories(repo.projects());
    assert_eq!(index.labels(), &["All", "Web Development"]);

    assert_eq!(filter_by_category(repo.projects(), "All").len(), 4);
    let web: Vec<_> = filter_by_category(repo.projects(), "Web Development")
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(web, vec!["1"]);
}

/// Malformed projects can still be opened from the "All" view
#[test]
fn test_malformed_project_can_be_opened() {
    let json = r#"[{"id":"x","title":"Odd","description":"d","category":false,"image":"x.png"}]"#;
    let mut showcase = Showcase::new(ProjectRepository::from_json_str(json).unwrap());
    showcase.dispatch(ShowcaseEvent::Activate("x".into())).unwrap();
    assert_eq!(showcase.view().detail.unwrap().categories, Vec::<String>::new());
}

/// Whitespace around labels does not create distinct categories
#[test]
fn test_label_whitespace_is_trimmed() {
    let projects = vec![
        Project::new("1", "t", "d", " Design", "1.png"),
        Project::new("2", "t", "d", ["Design ", "Mobile"], "2.png"),
    ];
    let index = derive_categories(&projects);
    assert_eq!(index.labels(), &["All", "Design", "Mobile"]);
}

// ============================================================================
// Empty Repository
// ============================================================================

#[test]
fn test_empty_repository_showcase() {
    let mut showcase = Showcase::new(ProjectRepository::new(Vec::new()).unwrap());

    let view = showcase.view();
    assert_eq!(view.filters.len(), 1);
    assert!(view.cards.is_empty());
    assert!(view.detail.is_none());

    assert!(matches!(
        showcase.dispatch(ShowcaseEvent::Activate("1".into())),
        Err(FolioError::ProjectNotFound(_))
    ));
    assert!(matches!(
        showcase.dispatch(ShowcaseEvent::Close),
        Err(FolioError::NothingOpen)
    ));
    assert_eq!(showcase.state().selection(), &Selection::Closed);
}

// ============================================================================
// Images and Links
// ============================================================================

/// Alternate identical to primary behaves as no alternate at all
#[test]
fn test_alternate_equal_to_primary_has_no_toggle() {
    let repo = ProjectRepository::new(vec![
        Project::new("1", "t", "d", "Web", "same.png").with_alternate_image("same.png"),
    ])
    .unwrap();
    let mut showcase = Showcase::new(repo);

    assert!(showcase.view().cards[0].toggle.is_none());
    assert!(showcase
        .dispatch(ShowcaseEvent::ToggleCardAlternate("1".into()))
        .is_err());

    showcase.dispatch(ShowcaseEvent::Activate("1".into())).unwrap();
    assert!(showcase.view().detail.unwrap().toggle.is_none());
    assert!(matches!(
        showcase.dispatch(ShowcaseEvent::ToggleDetailAlternate),
        Err(FolioError::NoAlternateImage(_))
    ));
}

/// Missing links are omitted, not errors
#[test]
fn test_missing_links_are_omitted() {
    let json = r#"[{"id":"1","title":"t","description":"d","category":"Web","image":"1.png"}]"#;
    let showcase = Showcase::new(ProjectRepository::from_json_str(json).unwrap());
    let card = &showcase.view().cards[0];
    assert!(card.links.code.is_none());
    assert!(card.links.demo.is_none());
    assert!(card.toggle.is_none());
}

// ============================================================================
// Pointer Events
// ============================================================================

/// Leaving a card that was never entered is harmless
#[test]
fn test_leave_without_enter() {
    let mut showcase = Showcase::default();
    showcase.dispatch(ShowcaseEvent::PointerLeave("1".into())).unwrap();
    assert!(!showcase.view().cards[0].hovered);
}

/// Repeated enters keep a single hovered flag
#[test]
fn test_repeated_enter() {
    let mut showcase = Showcase::default();
    showcase.dispatch(ShowcaseEvent::PointerEnter("1".into())).unwrap();
    showcase.dispatch(ShowcaseEvent::PointerEnter("1".into())).unwrap();
    assert_eq!(showcase.state().cards().active_len(), 1);
}
