use super::project::Project;

/// Projects visible under the selected category (`None` shows everything).
pub fn filter_projects<'a>(projects: &'a [Project], selected: Option<&str>) -> Vec<&'a Project> {
    match selected {
        None => projects.iter().collect(),
        Some(category) => projects.iter().filter(|p| p.category == category).collect(),
    }
}

/// Command prefix of the prompt shown above the filter pills.
pub const FILTER_PROMPT: &str = "$ ls ./projects --filter-by=";

/// Value shown after [`FILTER_PROMPT`].
pub fn filter_label(selected: Option<&str>) -> &str {
    selected.unwrap_or("all")
}

/// Full prompt line, e.g. `$ ls ./projects --filter-by=all`.
pub fn filter_prompt(selected: Option<&str>) -> String {
    format!("{FILTER_PROMPT}{}", filter_label(selected))
}
