//! Filter Pills Component
//!
//! Horizontal row of project filter buttons. The active button carries
//! `active`; every button carries its raw filter tag in `data-filter`.

use dioxus::prelude::*;
use revanarc_core::effects::Ripple;

use super::RippleSpan;

/// One filter button: the tag it selects and its visible label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub tag: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let label = filter_label(&tag);
        Self { tag, label }
    }
}

/// Human label for a category tag. Unknown tags are title-cased.
pub fn filter_label(tag: &str) -> String {
    match tag {
        "all" => "All Projects".to_string(),
        "knowledge" => "Knowledge".to_string(),
        "blue" => "Blue Team".to_string(),
        "red" => "Red Team".to_string(),
        "supply" => "Supply Chain".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// "All" followed by one option per catalog category.
pub fn filter_options(categories: &[String]) -> Vec<FilterOption> {
    std::iter::once(FilterOption::new("all"))
        .chain(categories.iter().map(|c| FilterOption::new(c.as_str())))
        .collect()
}

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    pub options: Vec<FilterOption>,
    /// Tag of the active filter
    pub selected: String,
    /// Called with the raw tag of the clicked button
    pub on_select: EventHandler<String>,
    /// Live ripples; each button shows the ones keyed `filter-<tag>`
    #[props(default)]
    pub ripples: Vec<Ripple>,
}

/// Ripple key of the filter button for `tag`.
pub fn filter_ripple_key(tag: &str) -> String {
    format!("filter-{}", tag)
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         options: filter_options(&catalog.categories()),
///         selected: projects.filter().to_string(),
///         on_select: move |tag: String| { site.write().select_filter(&tag); }
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "project-filters",
            role: "radiogroup",
            "aria-label": "Filter projects",
            for option in props.options.iter() {
                {
                    let tag = option.tag.clone();
                    let ripple_key = filter_ripple_key(&option.tag);
                    let is_selected = selected == option.tag;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{option.tag}",
                            class: if is_selected { "filter-btn active" } else { "filter-btn" },
                            role: "radio",
                            "data-filter": "{option.tag}",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            "data-ripple": "{ripple_key}",
                            onclick: move |_| on_select.call(tag.clone()),
                            "{option.label}"
                            for ripple in props.ripples.iter().filter(|r| r.element == ripple_key) {
                                RippleSpan { key: "{ripple.id}", ripple: ripple.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_start_with_all() {
        let cats = vec!["knowledge".to_string(), "red".to_string()];
        let opts = filter_options(&cats);
        let tags: Vec<&str> = opts.iter().map(|o| o.tag.as_str()).collect();
        assert_eq!(tags, vec!["all", "knowledge", "red"]);
        assert_eq!(opts[2].label, "Red Team");
    }

    #[test]
    fn unknown_tags_are_title_cased() {
        assert_eq!(filter_label("research"), "Research");
        assert_eq!(filter_label(""), "");
    }
}
