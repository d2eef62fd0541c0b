use std::rc::Rc;

use chrono::{DateTime, NaiveDate};
use leptos::prelude::*;

use crate::components::RelatedProjects;
use crate::models::{LinkKind, Project, ProjectBudget, ProjectLink, ProjectStatus, ProjectTag};
use crate::theme::Theme;

const ELLIPSIS: &str = "...";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_FRACTION_DIGITS: u8 = 0;
const DEFAULT_GROUP_SEPARATOR: char = ',';
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Presentational project card. A pure function of the canonical model and
/// the view options; holds no state between renders. With `is_loading` the
/// card short-circuits to a skeleton of placeholder blocks that binds no
/// model data and no click handler.
#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(optional)] current_theme: Theme,
    #[prop(default = false)] show_tech_stack_icons: bool,
    #[prop(default = 150)] max_description_length: usize,
    #[prop(default = false)] is_loading: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_card_click: Option<Rc<dyn Fn()>>,
) -> impl IntoView {
    let dark = current_theme == Theme::Dark;
    let classes = card_classes(
        current_theme,
        project.is_featured,
        is_loading,
        project.is_public,
        project.status,
        &class,
    );

    if is_loading {
        let placeholder = placeholder_classes(dark);
        return view! {
            <div class=classes>
                <div class=format!("{placeholder} project-card__placeholder--image")></div>
                <div class=format!("{placeholder} project-card__placeholder--title")></div>
                <div class=format!("{placeholder} project-card__placeholder--text")></div>
                <div class=format!("{placeholder} project-card__placeholder--actions")></div>
            </div>
        }
        .into_any();
    }

    let Project {
        id,
        title,
        description,
        image,
        tech_stacks,
        links,
        tags,
        status,
        priority,
        progress,
        budget,
        start_date,
        end_date,
        due_date,
        last_updated,
        created_at: _,
        updated_at: _,
        is_public: _,
        is_featured: _,
        related_projects,
    } = project;

    let truncated = truncate_description(&description, max_description_length);
    let badge_classes = status_badge_classes(status, dark);
    let title_classes = section_classes("project-card__title", dark);
    let description_classes = section_classes("project-card__description", dark);

    let image_view = image.map(|image| {
        let alt = image.alt().unwrap_or(&title).to_string();
        let width = image.width().map(|w| w.to_string());
        let height = image.height().map(|h| h.to_string());
        let src = image.url().to_string();
        view! {
            <div class="project-card__image-container">
                <img
                    src=src
                    alt=alt
                    class="project-card__image"
                    loading="lazy"
                    width=width
                    height=height
                />
            </div>
        }
    });

    let tech_view = tech_stacks
        .into_iter()
        .map(|tech| {
            let tag_classes = section_classes("project-card__tech-tag", dark);
            let style = tech.color.map(|color| format!("background-color: {color};"));
            let icon = tech.icon.filter(|_| show_tech_stack_icons);
            view! {
                <span class=tag_classes style=style>
                    {icon.map(|icon| view! { <span class="project-card__tech-icon">{icon}</span> })}
                    {tech.name}
                </span>
            }
        })
        .collect_view();

    let links_view = links
        .into_iter()
        .map(|link| link_view(link, dark))
        .collect_view();

    let progress_view = progress.map(|percent| {
        let fill_style = format!("width: {percent}%;");
        view! {
            <div class="project-card__progress">
                <div class="project-card__progress-label">
                    <span>{format!("Progress: {percent}%")}</span>
                </div>
                <div class="project-card__progress-bar">
                    <div class="project-card__progress-fill" style=fill_style></div>
                </div>
            </div>
        }
    });

    let tags_view = if tags.is_empty() {
        None
    } else {
        Some(view! {
            <div class="project-card__tags">
                {tags.into_iter().map(tag_view).collect_view()}
            </div>
        })
    };

    let has_metadata = priority.is_some()
        || budget.is_some()
        || start_date.is_some()
        || due_date.is_some()
        || end_date.is_some();
    let metadata_classes = if has_metadata {
        "project-card__metadata".to_string()
    } else {
        "project-card__metadata project-card__metadata--hidden".to_string()
    };

    let last_updated_view = last_updated.as_deref().map(|date| {
        let line_classes = section_classes("project-card__last-updated", dark);
        let line = format!("Last updated: {}", format_date(date));
        view! { <div class=line_classes>{line}</div> }
    });

    let related_view = if related_projects.is_empty() {
        None
    } else {
        Some(view! { <RelatedProjects related=related_projects /> })
    };

    view! {
        <div class=classes id=id>
            <div
                class="project-card__body"
                on:click=move |_| {
                    if let Some(on_click) = &on_card_click {
                        on_click();
                    }
                }
            >
                <div class=badge_classes>{status.label()}</div>
                {image_view}
                <h3 class=title_classes>{title}</h3>
                <p class=description_classes>{truncated}</p>
            </div>

            <div class="project-card__tech-stack">{tech_view}</div>

            <div class="project-card__links">{links_view}</div>

            {progress_view}

            {tags_view}

            <div class=metadata_classes>
                {priority.map(|priority| metadata_row("Priority:", priority))}
                {budget.as_ref().map(|budget| metadata_row("Budget:", format_budget(budget)))}
                {start_date.as_deref().map(|date| metadata_row("Start:", format_date(date)))}
                {due_date.as_deref().map(|date| metadata_row("Due:", format_date(date)))}
                {end_date.as_deref().map(|date| metadata_row("End:", format_date(date)))}
            </div>

            {last_updated_view}

            {related_view}
        </div>
    }
    .into_any()
}

fn link_view(link: ProjectLink, dark: bool) -> impl IntoView {
    let classes = link_classes(link.kind, link.class.as_deref(), dark);
    let icon = link_icon(link.kind, link.icon.as_deref());
    let label = link_label(link.kind, link.label.as_deref());
    let on_click = link.on_click;
    view! {
        <a
            href=link.url
            target="_blank"
            rel="noopener noreferrer"
            class=classes
            // Link clicks never reach the card-level handler.
            on:click=move |e: leptos::ev::MouseEvent| {
                e.stop_propagation();
                if let Some(on_click) = &on_click {
                    on_click();
                }
            }
        >
            <span class="project-card__link-icon">{icon}</span>
            {label}
        </a>
    }
}

// Action hook wins over navigation, navigation over a static label; the
// three presentations are mutually exclusive.
fn tag_view(tag: ProjectTag) -> AnyView {
    let ProjectTag {
        name,
        on_click,
        navigate_to,
    } = tag;
    if let Some(on_click) = on_click {
        view! {
            <span
                class="project-card__tag project-card__tag--action"
                on:click=move |_| on_click()
            >
                {name}
            </span>
        }
        .into_any()
    } else if let Some(url) = navigate_to {
        view! {
            <a class="project-card__tag" href=url target="_blank" rel="noopener noreferrer">
                {name}
            </a>
        }
        .into_any()
    } else {
        view! { <span class="project-card__tag">{name}</span> }.into_any()
    }
}

fn metadata_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="project-card__metadata-item">
            <span class="project-card__metadata-label">{label}</span>
            <span class="project-card__metadata-value">{value}</span>
        </div>
    }
}

/// Character-count truncation with an ellipsis marker; mid-word cuts are
/// expected. Already-truncated output re-truncates to itself.
pub fn truncate_description(description: &str, max_length: usize) -> String {
    if description.chars().count() > max_length {
        let cut: String = description.chars().take(max_length).collect();
        format!("{cut}{ELLIPSIS}")
    } else {
        description.to_string()
    }
}

/// Derives the card's class set in fixed order: base, dark, featured
/// (theme-variant), loading, private, status modifier, caller extra. All
/// applicable modifiers are additive.
pub fn card_classes(
    theme: Theme,
    is_featured: bool,
    is_loading: bool,
    is_public: Option<bool>,
    status: ProjectStatus,
    extra: &str,
) -> String {
    let dark = theme == Theme::Dark;
    let mut classes = vec!["project-card".to_string()];
    if dark {
        classes.push("project-card--dark".to_string());
    }
    if is_featured {
        classes.push(
            if dark {
                "project-card--featured-dark"
            } else {
                "project-card--featured"
            }
            .to_string(),
        );
    }
    if is_loading {
        classes.push("project-card--loading".to_string());
    }
    if is_public == Some(false) {
        classes.push("project-card--private".to_string());
    }
    classes.push(format!("project-card--{}", status.as_str()));
    if !extra.is_empty() {
        classes.push(extra.to_string());
    }
    classes.join(" ")
}

pub fn status_badge_classes(status: ProjectStatus, dark: bool) -> String {
    let suffix = if dark { "-dark" } else { "" };
    format!(
        "project-card__status project-card__status--{}{}",
        status.as_str(),
        suffix
    )
}

pub fn link_classes(kind: LinkKind, extra: Option<&str>, dark: bool) -> String {
    let mut classes = format!("project-card__link project-card__link--{}", kind.as_str());
    if dark && kind == LinkKind::Repository {
        classes.push_str(" project-card__link--repository-dark");
    }
    if let Some(extra) = extra {
        if !extra.is_empty() {
            classes.push(' ');
            classes.push_str(extra);
        }
    }
    classes
}

/// Explicit per-link icon override, else the kind's fixed glyph.
pub fn link_icon(kind: LinkKind, override_icon: Option<&str>) -> String {
    override_icon
        .map(str::to_string)
        .unwrap_or_else(|| kind.icon().to_string())
}

/// Explicit per-link label override, else the capitalized kind name.
pub fn link_label(kind: LinkKind, override_label: Option<&str>) -> String {
    override_label
        .map(str::to_string)
        .unwrap_or_else(|| kind.capitalized().to_string())
}

fn section_classes(base: &str, dark: bool) -> String {
    if dark {
        format!("{base} {base}--dark")
    } else {
        base.to_string()
    }
}

fn placeholder_classes(dark: bool) -> String {
    section_classes("project-card__placeholder", dark)
}

/// Formats a budget as a currency string. A bare amount uses the defaults;
/// the structured form overrides symbol, currency code, fraction digits and
/// grouping individually. A currency code without a symbol is rendered as a
/// suffix ("1,200 EUR").
pub fn format_budget(budget: &ProjectBudget) -> String {
    match budget {
        ProjectBudget::Amount(amount) => format!(
            "{DEFAULT_CURRENCY_SYMBOL}{}",
            format_amount(*amount, DEFAULT_FRACTION_DIGITS, DEFAULT_GROUP_SEPARATOR)
        ),
        ProjectBudget::Detailed(detail) => {
            let digits = detail.fraction_digits.unwrap_or(DEFAULT_FRACTION_DIGITS);
            let separator = detail.group_separator.unwrap_or(DEFAULT_GROUP_SEPARATOR);
            let formatted = format_amount(detail.amount, digits, separator);
            match (&detail.symbol, &detail.currency) {
                (Some(symbol), _) => format!("{symbol}{formatted}"),
                (None, Some(code)) => format!("{formatted} {code}"),
                (None, None) => format!("{DEFAULT_CURRENCY_SYMBOL}{formatted}"),
            }
        }
    }
}

fn format_amount(amount: f64, fraction_digits: u8, group_separator: char) -> String {
    let negative = amount < 0.0;
    let formatted = format!("{:.*}", fraction_digits as usize, amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (formatted, None),
    };
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(group_separator);
        }
        grouped.push(*digit);
    }
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Formats an ISO date (full RFC 3339 timestamp or bare calendar date) for
/// display. Values that parse as neither pass through verbatim; the stored
/// model value is never rewritten.
pub fn format_date(value: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return timestamp.format(DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    value.to_string()
}
