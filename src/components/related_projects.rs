use leptos::prelude::*;

use crate::models::RelatedProject;

/// Secondary disclosure list of related project summaries, rendered as a
/// declarative sub-view under the card.
#[component]
pub fn RelatedProjects(related: Vec<RelatedProject>) -> impl IntoView {
    let summary = format!("Related projects ({})", related.len());
    view! {
        <details class="project-card__related">
            <summary class="project-card__related-summary">{summary}</summary>
            <ul class="project-card__related-list">
                {related.into_iter().map(related_item).collect_view()}
            </ul>
        </details>
    }
}

fn related_item(related: RelatedProject) -> impl IntoView {
    let RelatedProject {
        title,
        description,
        image,
        url,
    } = related;

    let thumb = image.map(|image| {
        let alt = image.alt().unwrap_or(&title).to_string();
        let src = image.url().to_string();
        view! { <img class="project-card__related-thumb" src=src alt=alt loading="lazy" /> }
    });

    let heading = match url {
        Some(url) => view! {
            <a
                class="project-card__related-title"
                href=url
                target="_blank"
                rel="noopener noreferrer"
            >
                {title}
            </a>
        }
        .into_any(),
        None => view! { <span class="project-card__related-title">{title}</span> }.into_any(),
    };

    view! {
        <li class="project-card__related-item">
            {thumb}
            <div class="project-card__related-body">
                {heading}
                {description.map(|text| view! { <p class="project-card__related-description">{text}</p> })}
            </div>
        </li>
    }
}
