//! Project grid with category filter pills.

use folio_core::catalog::{Catalog, FILTER_PROMPT, filter_label, filter_projects, filter_prompt};
use leptos::prelude::*;

use super::ProjectCard;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

/// Filterable card grid.
///
/// # Props
/// - `catalog`: Categories (filter pills) and projects (cards)
#[component]
pub fn ProjectGrid(catalog: Catalog) -> impl IntoView {
    let Catalog {
        categories,
        projects,
    } = catalog;
    let projects = StoredValue::new(projects);

    let (selected, set_selected) = signal::<Option<String>>(None);

    let visible = Memo::new(move |_| {
        selected.with(|sel| {
            projects.with_value(|all| {
                filter_projects(all, sel.as_deref())
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    let pills = categories
        .into_iter()
        .map(|category| {
            let value = category.value;
            let is_active = {
                let value = value.clone();
                move || selected.with(|sel| *sel == value)
            };
            let class = move || {
                if is_active() {
                    format!("{} {}", css::pill, css::pillActive)
                } else {
                    css::pill.to_string()
                }
            };

            view! {
                <button
                    class=class
                    on:click=move |_| set_selected.set(value.clone())
                >
                    {category.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class=css::section>
            <div class=css::filters>
                <h2
                    class=css::prompt
                    aria-label=move || selected.with(|sel| filter_prompt(sel.as_deref()))
                >
                    {FILTER_PROMPT}
                    <span class=css::promptValue>
                        {move || selected.with(|sel| filter_label(sel.as_deref()).to_string())}
                    </span>
                </h2>
                <div class=css::pills>{pills}</div>
            </div>

            <div class=css::grid>
                <For
                    each=move || visible.get()
                    key=|project| project.title.clone()
                    children=move |project| view! { <ProjectCard project=project /> }
                />
            </div>

            <Show when=move || visible.with(Vec::is_empty)>
                <div class=css::empty>
                    <h3 class=css::emptyTitle>"$ echo \"No projects found\""</h3>
                    <p class=css::emptyHint>"Try selecting a different category"</p>
                </div>
            </Show>
        </section>
    }
}
