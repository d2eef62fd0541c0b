use std::fmt;
use std::rc::Rc;

/// Lifecycle states a project card can display. Raw records are resolved
/// to one of these at normalization time, so the renderer never sees an
/// unknown status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectStatus {
    #[default]
    Active,
    Draft,
    Archived,
    Completed,
    InProgress,
    ComingSoon,
    Planning,
}

impl ProjectStatus {
    /// Canonical lowercase-hyphenated token, used for CSS modifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Draft => "draft",
            ProjectStatus::Archived => "archived",
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::ComingSoon => "coming-soon",
            ProjectStatus::Planning => "planning",
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Archived => "Archived",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::ComingSoon => "Coming Soon",
            ProjectStatus::Planning => "Planning",
        }
    }

    /// Parses a canonical token ("in-progress", "draft", ...).
    pub fn from_token(token: &str) -> Option<ProjectStatus> {
        match token {
            "active" => Some(ProjectStatus::Active),
            "draft" => Some(ProjectStatus::Draft),
            "archived" => Some(ProjectStatus::Archived),
            "completed" => Some(ProjectStatus::Completed),
            "in-progress" => Some(ProjectStatus::InProgress),
            "coming-soon" => Some(ProjectStatus::ComingSoon),
            "planning" => Some(ProjectStatus::Planning),
            _ => None,
        }
    }

    /// Parses the human-readable form external records carry ("In Progress",
    /// "Planning", ...). "Coming Soon" is absent on purpose: external sources
    /// never emit it, so only the token spelling is accepted for that state.
    pub fn from_display(display: &str) -> Option<ProjectStatus> {
        match display {
            "Planning" => Some(ProjectStatus::Planning),
            "Active" => Some(ProjectStatus::Active),
            "In Progress" => Some(ProjectStatus::InProgress),
            "Completed" => Some(ProjectStatus::Completed),
            "Archived" => Some(ProjectStatus::Archived),
            "Draft" => Some(ProjectStatus::Draft),
            _ => None,
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::Active,
            ProjectStatus::Draft,
            ProjectStatus::Archived,
            ProjectStatus::Completed,
            ProjectStatus::InProgress,
            ProjectStatus::ComingSoon,
            ProjectStatus::Planning,
        ]
    }
}

/// What a link points at; drives icon and CSS class selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Demo,
    Repository,
    Documentation,
    Custom,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Demo => "demo",
            LinkKind::Repository => "repository",
            LinkKind::Documentation => "documentation",
            LinkKind::Custom => "custom",
        }
    }

    /// Capitalized kind name, the fallback link label.
    pub fn capitalized(&self) -> &'static str {
        match self {
            LinkKind::Demo => "Demo",
            LinkKind::Repository => "Repository",
            LinkKind::Documentation => "Documentation",
            LinkKind::Custom => "Custom",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::Demo => "🚀",
            LinkKind::Repository => "🐙",
            LinkKind::Documentation => "📚",
            LinkKind::Custom => "🔗",
        }
    }

    /// Total mapping from raw kind strings; anything unrecognized gets the
    /// generic custom treatment. "repo" is the legacy spelling.
    pub fn from_raw(raw: &str) -> LinkKind {
        match raw {
            "demo" => LinkKind::Demo,
            "repo" | "repository" => LinkKind::Repository,
            "documentation" => LinkKind::Documentation,
            _ => LinkKind::Custom,
        }
    }
}

/// Card image: either a plain URL or a structured record with alt text and
/// dimensions. Both forms are supported permanently.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectImage {
    Url(String),
    Detailed {
        url: String,
        alt: String,
        width: Option<u32>,
        height: Option<u32>,
    },
}

impl ProjectImage {
    pub fn url(&self) -> &str {
        match self {
            ProjectImage::Url(url) => url,
            ProjectImage::Detailed { url, .. } => url,
        }
    }

    pub fn alt(&self) -> Option<&str> {
        match self {
            ProjectImage::Url(_) => None,
            ProjectImage::Detailed { alt, .. } => Some(alt),
        }
    }

    pub fn width(&self) -> Option<u32> {
        match self {
            ProjectImage::Url(_) => None,
            ProjectImage::Detailed { width, .. } => *width,
        }
    }

    pub fn height(&self) -> Option<u32> {
        match self {
            ProjectImage::Url(_) => None,
            ProjectImage::Detailed { height, .. } => *height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechStackItem {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// One external link on the card. `icon`/`class` override the kind-derived
/// defaults per entry; `on_click` fires in addition to navigation and never
/// propagates to the card-level handler.
#[derive(Clone)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub class: Option<String>,
    pub on_click: Option<Rc<dyn Fn()>>,
}

impl ProjectLink {
    pub fn new(kind: LinkKind, url: impl Into<String>) -> Self {
        ProjectLink {
            kind,
            url: url.into(),
            label: None,
            icon: None,
            class: None,
            on_click: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl fmt::Debug for ProjectLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectLink")
            .field("kind", &self.kind)
            .field("url", &self.url)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("class", &self.class)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl PartialEq for ProjectLink {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.url == other.url
            && self.label == other.label
            && self.icon == other.icon
            && self.class == other.class
            && self.on_click.is_some() == other.on_click.is_some()
    }
}

/// A tag renders as exactly one of: clickable action (when `on_click` is
/// set), navigable link (when only `navigate_to` is set), or static label.
#[derive(Clone, Default)]
pub struct ProjectTag {
    pub name: String,
    pub on_click: Option<Rc<dyn Fn()>>,
    pub navigate_to: Option<String>,
}

impl ProjectTag {
    pub fn new(name: impl Into<String>) -> Self {
        ProjectTag {
            name: name.into(),
            on_click: None,
            navigate_to: None,
        }
    }
}

impl fmt::Debug for ProjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectTag")
            .field("name", &self.name)
            .field("on_click", &self.on_click.is_some())
            .field("navigate_to", &self.navigate_to)
            .finish()
    }
}

impl PartialEq for ProjectTag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.navigate_to == other.navigate_to
            && self.on_click.is_some() == other.on_click.is_some()
    }
}

/// Budget: either a bare amount formatted with defaults, or a structured
/// record overriding currency and formatting options individually.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectBudget {
    Amount(f64),
    Detailed(BudgetDetail),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetDetail {
    pub amount: f64,
    pub currency: Option<String>,
    pub symbol: Option<String>,
    pub fraction_digits: Option<u8>,
    pub group_separator: Option<char>,
}

/// Lightweight summary shown in the related-projects disclosure list.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedProject {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<ProjectImage>,
    pub url: Option<String>,
}

/// Canonical display model the card renders. Built fresh per mapping call,
/// immutable once built; date fields stay as the ISO strings they arrived
/// in and are only formatted at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image: Option<ProjectImage>,
    pub tech_stacks: Vec<TechStackItem>,
    pub links: Vec<ProjectLink>,
    pub tags: Vec<ProjectTag>,
    pub status: ProjectStatus,
    pub priority: Option<String>,
    pub progress: Option<u8>,
    pub budget: Option<ProjectBudget>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub due_date: Option<String>,
    pub last_updated: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub is_public: Option<bool>,
    pub is_featured: bool,
    pub related_projects: Vec<RelatedProject>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Project {
            title: title.into(),
            description: description.into(),
            ..Project::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tokens_round_trip() {
        for status in ProjectStatus::all() {
            assert_eq!(ProjectStatus::from_token(status.as_str()), Some(status));
        }
    }

    #[test]
    fn coming_soon_has_no_display_spelling() {
        assert_eq!(ProjectStatus::from_display("Coming Soon"), None);
        assert_eq!(
            ProjectStatus::from_token("coming-soon"),
            Some(ProjectStatus::ComingSoon)
        );
    }

    #[test]
    fn unknown_link_kind_degrades_to_custom() {
        assert_eq!(LinkKind::from_raw("repo"), LinkKind::Repository);
        assert_eq!(LinkKind::from_raw("blog"), LinkKind::Custom);
        assert_eq!(LinkKind::from_raw(""), LinkKind::Custom);
    }
}
