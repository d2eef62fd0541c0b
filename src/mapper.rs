//! Record Normalizer: maps loosely-typed external project records onto the
//! canonical display model, plus the visibility filter and display ordering
//! used by project listings.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{
    BudgetDetail, LinkKind, Project, ProjectBudget, ProjectImage, ProjectLink, ProjectStatus,
    ProjectTag, RawBudget, RawImage, RawProject, RelatedProject, TechStackItem,
};

/// Builds the canonical model from one raw record. Never fails: malformed or
/// missing optional fields drop the dependent output instead of erroring.
pub fn normalize(raw: &RawProject) -> Project {
    // Build the links list by probing the known URL fields in order; neither
    // being present yields an empty list, which is valid.
    let mut links = Vec::new();
    if let Some(url) = raw.live_demo_url.as_deref().or(raw.live_url.as_deref()) {
        links.push(ProjectLink::new(LinkKind::Demo, url).with_label("Live Demo"));
    }
    let repo_url = raw
        .repository_url
        .as_deref()
        .or_else(|| raw.repo.as_ref().and_then(|r| r.url.as_deref()));
    if let Some(url) = repo_url {
        links.push(ProjectLink::new(LinkKind::Repository, url).with_label("Repository"));
    }

    // Status chain: human-readable lookup, then canonical-token pass-through,
    // then the default.
    let status = raw
        .status
        .as_deref()
        .and_then(|s| ProjectStatus::from_display(s).or_else(|| ProjectStatus::from_token(s)))
        .unwrap_or_default();

    // A thumbnail URL wins over whatever image value the record carries.
    let image = if let Some(thumbnail) = &raw.thumbnail_url {
        Some(ProjectImage::Detailed {
            url: thumbnail.clone(),
            alt: raw.title.clone(),
            width: None,
            height: None,
        })
    } else {
        raw.image
            .as_ref()
            .map(|img| resolve_image(img, raw.image_alt.as_deref(), &raw.title))
    };

    Project {
        id: raw.id.clone(),
        title: raw.title.clone(),
        description: raw.description.clone().unwrap_or_default(),
        image,
        tech_stacks: raw
            .tech_stacks
            .iter()
            .map(|t| TechStackItem {
                name: t.name.clone(),
                color: t.color.clone(),
                icon: t.icon.clone(),
            })
            .collect(),
        links,
        tags: raw
            .tags
            .iter()
            .map(|t| ProjectTag {
                name: t.name.clone(),
                on_click: None,
                navigate_to: t.navigate_to.clone(),
            })
            .collect(),
        status,
        priority: raw.priority.clone(),
        progress: raw.progress,
        budget: raw.budget.as_ref().map(resolve_budget),
        start_date: raw.start_date.clone(),
        end_date: raw.end_date.clone(),
        due_date: raw.due_date.clone(),
        last_updated: raw.last_updated.clone().or_else(|| raw.updated_at.clone()),
        created_at: raw.created_at.clone(),
        updated_at: raw.updated_at.clone(),
        is_public: raw.is_public,
        is_featured: raw.is_featured.unwrap_or(false),
        related_projects: raw
            .related_projects
            .iter()
            .map(|r| RelatedProject {
                title: r.title.clone(),
                description: r.description.clone(),
                image: r.image.as_ref().map(|img| resolve_image(img, None, &r.title)),
                url: r.url.clone(),
            })
            .collect(),
    }
}

/// Element-wise [`normalize`]; preserves input order, no deduplication.
pub fn normalize_many(raws: &[RawProject]) -> Vec<Project> {
    raws.iter().map(normalize).collect()
}

/// Keeps exactly the entries with `is_public == Some(true)`. Strict boolean
/// filter: absent counts as private.
pub fn filter_visible(projects: Vec<Project>) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|p| p.is_public == Some(true))
        .collect()
}

/// Stable display ordering: featured entries first, then newest `created_at`
/// first. Entries without a parseable `created_at` compare equal and keep
/// their input order.
pub fn sort_for_display(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by(|a, b| {
        let by_featured = b.is_featured.cmp(&a.is_featured);
        if by_featured != Ordering::Equal {
            return by_featured;
        }
        match (created_instant(a), created_instant(b)) {
            (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
            _ => Ordering::Equal,
        }
    });
    projects
}

fn resolve_image(image: &RawImage, explicit_alt: Option<&str>, title: &str) -> ProjectImage {
    match image {
        RawImage::Url(url) => ProjectImage::Url(url.clone()),
        RawImage::Detailed {
            src,
            alt,
            width,
            height,
        } => ProjectImage::Detailed {
            url: src.clone(),
            alt: alt
                .as_deref()
                .or(explicit_alt)
                .unwrap_or(title)
                .to_string(),
            width: *width,
            height: *height,
        },
    }
}

fn resolve_budget(budget: &RawBudget) -> ProjectBudget {
    match budget {
        RawBudget::Amount(amount) => ProjectBudget::Amount(*amount),
        RawBudget::Detailed {
            amount,
            currency,
            symbol,
            fraction_digits,
            group_separator,
        } => ProjectBudget::Detailed(BudgetDetail {
            amount: *amount,
            currency: currency.clone(),
            symbol: symbol.clone(),
            fraction_digits: *fraction_digits,
            group_separator: *group_separator,
        }),
    }
}

fn created_instant(project: &Project) -> Option<NaiveDateTime> {
    project.created_at.as_deref().and_then(parse_instant)
}

// Records carry either a full RFC 3339 timestamp or a bare calendar date.
fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawProject {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn builds_links_from_demo_and_repository_urls() {
        let project = normalize(&raw(
            r#"{"title":"X","liveUrl":"https://a","repositoryUrl":"https://b",
                "status":"In Progress","isPublic":true,"createdAt":"2024-01-01"}"#,
        ));
        assert_eq!(project.links.len(), 2);
        assert_eq!(project.links[0].kind, LinkKind::Demo);
        assert_eq!(project.links[0].url, "https://a");
        assert_eq!(project.links[0].label.as_deref(), Some("Live Demo"));
        assert_eq!(project.links[1].kind, LinkKind::Repository);
        assert_eq!(project.links[1].url, "https://b");
        assert_eq!(project.links[1].label.as_deref(), Some("Repository"));
        assert_eq!(project.status, ProjectStatus::InProgress);
    }

    #[test]
    fn modern_url_fields_win_over_legacy_ones() {
        let project = normalize(&raw(
            r#"{"title":"X","liveDemoUrl":"https://new","liveUrl":"https://old",
                "repo":{"url":"https://legacy-repo"}}"#,
        ));
        assert_eq!(project.links[0].url, "https://new");
        assert_eq!(project.links[1].url, "https://legacy-repo");
    }

    #[test]
    fn no_urls_yields_empty_links_not_missing() {
        let project = normalize(&raw(r#"{"title":"X"}"#));
        assert_eq!(project.links, Vec::new());
    }

    #[test]
    fn status_lookup_table_hit() {
        let project = normalize(&raw(r#"{"title":"X","status":"Planning"}"#));
        assert_eq!(project.status, ProjectStatus::Planning);
    }

    #[test]
    fn status_token_passes_through() {
        let project = normalize(&raw(r#"{"title":"X","status":"coming-soon"}"#));
        assert_eq!(project.status, ProjectStatus::ComingSoon);
    }

    #[test]
    fn unknown_or_absent_status_defaults_to_active() {
        let unknown = normalize(&raw(r#"{"title":"X","status":"On Hold"}"#));
        assert_eq!(unknown.status, ProjectStatus::Active);
        let absent = normalize(&raw(r#"{"title":"X"}"#));
        assert_eq!(absent.status, ProjectStatus::Active);
    }

    #[test]
    fn thumbnail_url_synthesizes_structured_image() {
        let project = normalize(&raw(
            r#"{"title":"My Project","thumbnailUrl":"https://t/x.png",
                "image":"https://ignored.png"}"#,
        ));
        assert_eq!(
            project.image,
            Some(ProjectImage::Detailed {
                url: "https://t/x.png".into(),
                alt: "My Project".into(),
                width: None,
                height: None,
            })
        );
    }

    #[test]
    fn plain_image_passes_through_without_thumbnail() {
        let project = normalize(&raw(r#"{"title":"X","image":"https://a.png"}"#));
        assert_eq!(project.image, Some(ProjectImage::Url("https://a.png".into())));
        let none = normalize(&raw(r#"{"title":"X"}"#));
        assert_eq!(none.image, None);
    }

    #[test]
    fn normalize_many_preserves_order_and_duplicates() {
        let records = vec![
            raw(r#"{"title":"A"}"#),
            raw(r#"{"title":"B"}"#),
            raw(r#"{"title":"A"}"#),
        ];
        let projects = normalize_many(&records);
        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "A"]);
    }

    #[test]
    fn filter_visible_is_strict_and_idempotent() {
        let projects = vec![
            normalize(&raw(r#"{"title":"public","isPublic":true}"#)),
            normalize(&raw(r#"{"title":"private","isPublic":false}"#)),
            normalize(&raw(r#"{"title":"unset"}"#)),
        ];
        let once = filter_visible(projects);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].title, "public");
        let twice = filter_visible(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn featured_precedes_newer_non_featured() {
        let a = normalize(&raw(r#"{"title":"A","featured":true,"createdAt":"2023-01-01"}"#));
        let b = normalize(&raw(r#"{"title":"B","featured":false,"createdAt":"2024-01-01"}"#));
        let sorted = sort_for_display(vec![b, a]);
        assert_eq!(sorted[0].title, "A");
        assert_eq!(sorted[1].title, "B");
    }

    #[test]
    fn equal_featured_sorts_newest_first() {
        let older = normalize(&raw(r#"{"title":"old","createdAt":"2023-06-01"}"#));
        let newer = normalize(&raw(r#"{"title":"new","createdAt":"2024-06-01T10:00:00Z"}"#));
        let sorted = sort_for_display(vec![older, newer]);
        assert_eq!(sorted[0].title, "new");
        assert_eq!(sorted[1].title, "old");
    }

    #[test]
    fn missing_created_at_keeps_input_order() {
        let first = normalize(&raw(r#"{"title":"first"}"#));
        let second = normalize(&raw(r#"{"title":"second"}"#));
        let third = normalize(&raw(r#"{"title":"dated","createdAt":"not a date"}"#));
        let sorted = sort_for_display(vec![first, second, third]);
        let titles: Vec<&str> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "dated"]);
    }

    #[test]
    fn last_updated_falls_back_to_updated_at() {
        let project = normalize(&raw(r#"{"title":"X","updatedAt":"2024-03-01"}"#));
        assert_eq!(project.last_updated.as_deref(), Some("2024-03-01"));
        let explicit = normalize(&raw(
            r#"{"title":"X","lastUpdated":"2024-02-01","updatedAt":"2024-03-01"}"#,
        ));
        assert_eq!(explicit.last_updated.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn related_projects_are_carried_over() {
        let project = normalize(&raw(
            r#"{"title":"X","relatedProjects":[
                {"title":"Sibling","link":"https://s","image":"https://s.png"}]}"#,
        ));
        assert_eq!(project.related_projects.len(), 1);
        assert_eq!(project.related_projects[0].title, "Sibling");
        assert_eq!(project.related_projects[0].url.as_deref(), Some("https://s"));
    }
}
