//! Reusable project card component for Leptos.
//!
//! The crate has two halves: a record normalizer ([`mapper`]) that turns
//! loosely-typed external project records into one canonical display model,
//! and a presentational [`ProjectCard`] component that renders that model.
//! The normalizer is optional; hand-built [`models::Project`] values render
//! just the same.
//!
//! ```rust,ignore
//! use project_card::{normalize, ProjectCard, RawProject};
//!
//! let raw: RawProject = serde_json::from_str(payload)?;
//! let project = normalize(&raw);
//!
//! view! {
//!     <ProjectCard project=project max_description_length=120 />
//! }
//! ```
//!
//! Theme switching is a document-level concern, see [`theme`].

pub mod components;
pub mod mapper;
pub mod models;
pub mod theme;

pub use components::{ProjectCard, RelatedProjects};
pub use mapper::{filter_visible, normalize, normalize_many, sort_for_display};
pub use models::{
    BudgetDetail, LinkKind, Project, ProjectBudget, ProjectImage, ProjectLink, ProjectStatus,
    ProjectTag, RawProject, RelatedProject, TechStackItem,
};
pub use theme::{
    apply_theme, apply_theme_variables, current_theme, remove_theme_variables, watch_theme, Theme,
    ThemeWatch, DARK_THEME_VARIABLES, LIGHT_THEME_VARIABLES,
};
