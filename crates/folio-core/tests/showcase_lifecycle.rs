//! End-to-end showcase lifecycle tests
//!
//! Drive the state container through realistic gesture sequences and
//! check the render instructions it produces.

use folio_core::{
    derive_categories, filter_by_category, FolioError, Platform, Project, ProjectRepository,
    Selection, Showcase, ShowcaseEvent,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn reference_repo() -> ProjectRepository {
    ProjectRepository::new(vec![
        Project::new("1", "Fitness", "Workouts", "Mobile", "1.png").with_alternate_image("1m.png"),
        Project::new("2", "Banking", "Money", ["Mobile", "Web Development"], "2.png")
            .with_alternate_image("2m.png")
            .with_code_link("https://github.com/bank"),
        Project::new("3", "Brand", "Identity", "Design", "3.png"),
    ])
    .unwrap()
}

fn card_ids(showcase: &Showcase) -> Vec<String> {
    showcase
        .view()
        .cards
        .iter()
        .map(|c| c.id.to_string())
        .collect()
}

// ============================================================================
// Reference Example
// ============================================================================

#[test]
fn test_reference_example() {
    let repo = reference_repo();

    let index = derive_categories(repo.projects());
    assert_eq!(index.labels(), &["All", "Mobile", "Web Development", "Design"]);

    let ids = |label: &str| -> Vec<String> {
        filter_by_category(repo.projects(), label)
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    };
    assert_eq!(ids("Mobile"), vec!["1", "2"]);
    assert_eq!(ids("Design"), vec!["3"]);
    assert!(!ids("Design").contains(&"2".to_string()));
}

// ============================================================================
// Selection Lifecycle
// ============================================================================

#[test]
fn test_switching_projects_resets_detail_platform() {
    let mut showcase = Showcase::new(reference_repo());

    showcase.dispatch(ShowcaseEvent::Activate("1".into())).unwrap();
    showcase.dispatch(ShowcaseEvent::ToggleDetailAlternate).unwrap();
    assert!(showcase.state().detail_showing_alternate());
    assert_eq!(showcase.view().detail.unwrap().image, "1m.png");

    showcase.dispatch(ShowcaseEvent::Activate("2".into())).unwrap();
    assert_eq!(showcase.state().selection(), &Selection::Open("2".into()));
    assert!(!showcase.state().detail_showing_alternate());

    let detail = showcase.view().detail.unwrap();
    assert_eq!(detail.image, "2.png");
    assert_eq!(detail.toggle.unwrap().showing, Platform::Desktop);
}

#[test]
fn test_close_then_reopen_starts_on_desktop() {
    let mut showcase = Showcase::new(reference_repo());

    showcase.dispatch(ShowcaseEvent::Activate("2".into())).unwrap();
    showcase.dispatch(ShowcaseEvent::ToggleDetailAlternate).unwrap();
    showcase.dispatch(ShowcaseEvent::Close).unwrap();
    assert!(showcase.view().detail.is_none());

    showcase.dispatch(ShowcaseEvent::Activate("2".into())).unwrap();
    assert_eq!(showcase.view().detail.unwrap().image, "2.png");
}

#[test]
fn test_detail_and_card_toggles_are_independent() {
    let mut showcase = Showcase::new(reference_repo());

    showcase.dispatch(ShowcaseEvent::ToggleCardAlternate("2".into())).unwrap();
    showcase.dispatch(ShowcaseEvent::Activate("2".into())).unwrap();

    let view = showcase.view();
    assert_eq!(view.card(&"2".into()).unwrap().image, "2m.png");
    assert_eq!(view.detail.unwrap().image, "2.png");

    showcase.dispatch(ShowcaseEvent::ToggleDetailAlternate).unwrap();
    showcase.dispatch(ShowcaseEvent::ToggleCardAlternate("2".into())).unwrap();
    let view = showcase.view();
    assert_eq!(view.card(&"2".into()).unwrap().image, "2.png");
    assert_eq!(view.detail.unwrap().image, "2m.png");
}

#[test]
fn test_activating_missing_project_keeps_state() {
    let mut showcase = Showcase::new(reference_repo());
    showcase.dispatch(ShowcaseEvent::Activate("1".into())).unwrap();

    let err = showcase
        .dispatch(ShowcaseEvent::Activate("404".into()))
        .unwrap_err();
    assert!(matches!(err, FolioError::ProjectNotFound(id) if id == "404"));
    assert_eq!(showcase.state().selection(), &Selection::Open("1".into()));
}

// ============================================================================
// Cards and Filters
// ============================================================================

#[test]
fn test_card_toggles_are_per_card() {
    let mut showcase = Showcase::new(reference_repo());
    showcase.dispatch(ShowcaseEvent::ToggleCardAlternate("1".into())).unwrap();

    let view = showcase.view();
    assert_eq!(view.card(&"1".into()).unwrap().image, "1m.png");
    assert_eq!(view.card(&"2".into()).unwrap().image, "2.png");
    assert_eq!(showcase.state().selection(), &Selection::Closed);
}

#[test]
fn test_hover_is_presentational() {
    let mut showcase = Showcase::new(reference_repo());
    showcase.dispatch(ShowcaseEvent::PointerEnter("3".into())).unwrap();

    let view = showcase.view();
    assert!(view.card(&"3".into()).unwrap().hovered);
    assert!(!view.card(&"1".into()).unwrap().hovered);
    assert_eq!(showcase.state().selection(), &Selection::Closed);
    assert_eq!(showcase.state().selected_category(), "All");

    showcase.dispatch(ShowcaseEvent::PointerLeave("3".into())).unwrap();
    assert!(!showcase.view().card(&"3".into()).unwrap().hovered);
}

#[test]
fn test_filter_round_trip_forgets_card_state() {
    let mut showcase = Showcase::new(reference_repo());
    showcase.dispatch(ShowcaseEvent::PointerEnter("3".into())).unwrap();
    showcase.dispatch(ShowcaseEvent::ToggleCardAlternate("1".into())).unwrap();

    showcase.dispatch(ShowcaseEvent::SelectCategory("Mobile".into())).unwrap();
    assert_eq!(card_ids(&showcase), vec!["1", "2"]);
    assert_eq!(showcase.view().card(&"1".into()).unwrap().image, "1.png");

    showcase.dispatch(ShowcaseEvent::SelectCategory("All".into())).unwrap();
    assert_eq!(card_ids(&showcase), vec!["1", "2", "3"]);
    assert!(!showcase.view().card(&"3".into()).unwrap().hovered);
}

#[test]
fn test_filter_counts_in_view() {
    let showcase = Showcase::new(reference_repo());
    let counts: Vec<(String, usize)> = showcase
        .view()
        .filters
        .into_iter()
        .map(|f| (f.label, f.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("All".to_string(), 3),
            ("Mobile".to_string(), 2),
            ("Web Development".to_string(), 1),
            ("Design".to_string(), 1),
        ]
    );
}

#[test]
fn test_default_showcase() {
    let mut showcase = Showcase::default();
    assert_eq!(card_ids(&showcase).len(), 6);

    showcase
        .dispatch(ShowcaseEvent::SelectCategory("Web Development".into()))
        .unwrap();
    assert_eq!(card_ids(&showcase), vec!["1", "2", "4"]);
}
