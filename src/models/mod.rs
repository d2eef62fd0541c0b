pub mod project;
pub mod raw;

// Export the canonical model types for use throughout the crate
pub use project::{
    BudgetDetail, LinkKind, Project, ProjectBudget, ProjectImage, ProjectLink, ProjectStatus,
    ProjectTag, RelatedProject, TechStackItem,
};
pub use raw::{RawBudget, RawImage, RawProject, RawRelatedProject, RawRepo, RawTag, RawTechStackItem};
