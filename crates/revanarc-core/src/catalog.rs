//! The project catalog.
//!
//! A fixed, insertion-ordered list of projects with an id index built once
//! at construction. There is no runtime create/update/delete.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{SiteError, SiteResult};
use crate::types::{Filter, Project, ProjectId, ProjectStatus};

/// How a rendered card identifies its project.
///
/// Current markup carries an explicit id; legacy markup only has a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRef {
    pub project_id: Option<String>,
    pub title: String,
}

impl CardRef {
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            project_id: Some(id),
        }
    }

    pub fn legacy(title: impl Into<String>) -> Self {
        Self {
            project_id: None,
            title: title.into(),
        }
    }

    /// The project id this card points at. An explicit, non-blank id
    /// always wins; otherwise the title is normalized.
    pub fn resolve_id(&self) -> ProjectId {
        match self.project_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => ProjectId::new(id),
            _ => ProjectId::from_title(&self.title),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    index: HashMap<ProjectId, usize>,
}

impl ProjectCatalog {
    /// Build a catalog, rejecting duplicate and blank ids.
    pub fn new(projects: Vec<Project>) -> SiteResult<Self> {
        let mut index = HashMap::with_capacity(projects.len());
        for (i, project) in projects.iter().enumerate() {
            if project.id.as_str().trim().is_empty() {
                return Err(SiteError::Catalog(format!("project #{i} has an empty id")));
            }
            if index.insert(project.id.clone(), i).is_some() {
                return Err(SiteError::DuplicateProject(project.id.to_string()));
            }
        }
        Ok(Self { projects, index })
    }

    pub fn from_json_str(json: &str) -> SiteResult<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            projects = catalog.len(),
            "Loaded project catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.index.get(id).map(|&i| &self.projects[i])
    }

    pub fn resolve(&self, card: &CardRef) -> Option<&Project> {
        self.get(&card.resolve_id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Every category, in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for project in &self.projects {
            for cat in &project.categories {
                if !seen.contains(cat) {
                    seen.push(cat.clone());
                }
            }
        }
        seen
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.projects.iter().any(|p| p.in_category(tag))
    }

    /// Projects matching a filter, in catalog order.
    pub fn projects_for(&self, filter: &Filter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    /// The catalog the site ships with.
    pub fn builtin() -> Self {
        let projects = vec![
            project(
                "enchiridion",
                "Enchiridion",
                "Comprehensive encyclopedia and knowledgebase of AI security research, techniques, and best practices.",
                &["knowledge"],
                &["Knowledge", "Research"],
                "📖",
                ProjectStatus::Active,
            ),
            project(
                "phalanx",
                "Phalanx",
                "End-to-end AI security platform providing runtime protection, evaluations, and remediation capabilities.",
                &["blue", "red"],
                &["Defense", "Testing"],
                "🛡️",
                ProjectStatus::Active,
            ),
            project(
                "lmbom",
                "LMBoM",
                "Language Model Bill of Materials - tracking lineage, evaluations, and provenance for AI model supply chains.",
                &["supply"],
                &["Supply Chain", "Transparency"],
                "📋",
                ProjectStatus::Development,
            ),
            project(
                "hk47",
                "HK-47",
                "Autonomous AI red-teaming agent for adversarial testing and security assessment of AI systems.",
                &["red"],
                &["Adversary", "Autonomous"],
                "🤖",
                ProjectStatus::Development,
            ),
            project(
                "starmap",
                "Starmap",
                "AI security reference architectures and implementation guides for robust AI system design.",
                &["blue"],
                &["Architecture", "Reference"],
                "🗺️",
                ProjectStatus::Planning,
            ),
            project(
                "veritas",
                "Veritas",
                "Language Model Evaluation Service providing standardized security, safety, and robustness testing for AI models.",
                &["blue", "knowledge"],
                &["Evaluation", "Testing"],
                "🔎",
                ProjectStatus::Development,
            ),
        ];
        // Ids above are literal and distinct.
        let index = projects
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self { projects, index }
    }
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    categories: &[&str],
    tags: &[&str],
    icon: &str,
    status: ProjectStatus,
) -> Project {
    Project {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        icon: icon.to_string(),
        repo_url: Some(format!("https://github.com/RevanArc/{id}")),
        status,
    }
}
