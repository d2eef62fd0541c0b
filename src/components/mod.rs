pub mod project_card;
pub mod related_projects;

pub use project_card::ProjectCard;
pub use related_projects::RelatedProjects;
