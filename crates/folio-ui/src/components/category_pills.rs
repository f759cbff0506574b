//! Category Pills Component
//!
//! Horizontal row of filter pills, one per category label.

use dioxus::prelude::*;
use folio_core::FilterControl;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Filter controls in display order, exactly one selected
    pub filters: Vec<FilterControl>,
    /// Show the project count next to each label
    #[props(default = false)]
    pub show_counts: bool,
    /// Handler called with the clicked label
    pub on_select: EventHandler<String>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryPills {
///         filters: view.filters.clone(),
///         on_select: move |label| {
///             let _ = showcase.write().dispatch(ShowcaseEvent::SelectCategory(label));
///         }
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Filter projects by category",
            for filter in props.filters.iter() {
                {
                    let label = filter.label.clone();
                    let on_select = props.on_select;
                    let text = pill_text(filter, props.show_counts);
                    rsx! {
                        button {
                            key: "{filter.label}",
                            class: pill_class(filter.selected),
                            r#type: "button",
                            role: "radio",
                            "aria-checked": if filter.selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(label.clone()),
                            "{text}"
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

fn pill_text(filter: &FilterControl, show_counts: bool) -> String {
    if show_counts {
        format!("{} ({})", filter.label, filter.count)
    } else {
        filter.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(label: &str, count: usize, selected: bool) -> FilterControl {
        FilterControl {
            label: label.to_string(),
            count,
            selected,
        }
    }

    #[test]
    fn pill_text_with_and_without_counts() {
        let mobile = control("Mobile", 2, false);
        assert_eq!(pill_text(&mobile, false), "Mobile");
        assert_eq!(pill_text(&mobile, true), "Mobile (2)");
    }

    #[test]
    fn selected_pill_class() {
        assert_eq!(pill_class(true), "pill selected");
        assert_eq!(pill_class(false), "pill");
    }
}
