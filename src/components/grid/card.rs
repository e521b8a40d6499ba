//! Single project card.

use folio_core::catalog::{CardSize, Project, category_accent};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

/// Project card. Clicking the cover of a multi-image project opens the
/// gallery viewer at the first image.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let accent = category_accent(&project.category);
    let style = format!(
        "{} --accent-start: {}; --accent-end: {}; --accent-glow: {};",
        project.size.grid_style(),
        accent.start,
        accent.end,
        accent.glow,
    );
    let is_large = project.size == CardSize::Large;
    let (body_class, title_class) = if is_large {
        (css::bodyLarge, css::titleLarge)
    } else {
        (css::body, css::title)
    };

    let has_gallery = project.has_gallery();
    let image_count = project.images.len();

    let cover = project.cover().map(|image| {
        let images = project.images.clone();
        let title = project.title.clone();
        let cover_class = if has_gallery {
            format!("{} {}", css::cover, css::coverClickable)
        } else {
            css::cover.to_string()
        };
        let cover_height = if is_large { "300px" } else { "180px" };
        let open_gallery = move |_| {
            if has_gallery {
                ctx.gallery.open(images.clone(), 0, Some(title.clone()));
            }
        };

        view! {
            <div
                class=cover_class
                style:height=cover_height
                on:click=open_gallery
            >
                <img
                    class=css::coverImage
                    src=image.to_string()
                    alt=project.title.clone()
                    loading="lazy"
                />
                {has_gallery.then(|| view! {
                    <span class=css::badge title="Open gallery">
                        <Icon icon=ic::GALLERY />
                        {image_count}
                    </span>
                })}
            </div>
        }
    });

    let chips = project
        .visible_tech()
        .iter()
        .map(|tech| view! { <span class=css::chip>{tech.clone()}</span> })
        .collect_view();
    let hidden = project.hidden_tech_count();

    let github = project.github_url.clone().map(|url| {
        view! {
            <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                <Icon icon=ic::GITHUB />
                "Code"
            </a>
        }
    });
    let live = project.live_url.clone().map(|url| {
        view! {
            <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                <Icon icon=ic::EXTERNAL_LINK />
                "Live"
            </a>
        }
    });

    view! {
        <article class=css::card style=style>
            {cover}
            <div class=body_class>
                <h3 class=title_class>
                    {project.title.clone()}
                </h3>
                <p class=css::description>{project.description.clone()}</p>
                <div class=css::chips>
                    {chips}
                    {(hidden > 0).then(|| view! {
                        <span class=css::chip>{format!("+{hidden}")}</span>
                    })}
                </div>
                <div class=css::links>{github}{live}</div>
            </div>
        </article>
    }
}
