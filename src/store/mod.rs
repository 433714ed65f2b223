//! Record store loading.
//!
//! The store is read once at startup from a JSON document, either the one embedded
//! in the binary or a file named by configuration, and is read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{ContentStore, Record};

/// Schema version this build understands.
pub const SCHEMA_VERSION: i32 = 1;

/// Content shipped with the binary.
pub const EMBEDDED_FIXTURES: &str = include_str!("../../data/fixtures.json");

/// Load the store named by the configuration.
pub fn load(config: &Config) -> Result<ContentStore, AppError> {
    match &config.fixtures_path {
        Some(path) => load_from_path(path),
        None => {
            tracing::debug!("Loading embedded fixtures");
            from_json(EMBEDDED_FIXTURES)
        }
    }
}

/// Load and validate a store document from disk.
pub fn load_from_path(path: &Path) -> Result<ContentStore, AppError> {
    tracing::debug!("Loading fixtures from {:?}", path);
    let raw = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!("Failed to read fixtures {:?}: {}", path, e);
        AppError::Fixture(format!("Failed to read {}: {}", path.display(), e))
    })?;
    from_json(&raw)
}

/// Parse and validate a store document.
pub fn from_json(raw: &str) -> Result<ContentStore, AppError> {
    let store: ContentStore = serde_json::from_str(raw)?;
    validate(&store)?;

    let stats = store.stats();
    tracing::info!(
        forum_posts = stats.forum_posts,
        university_programs = stats.university_programs,
        career_paths = stats.career_paths,
        jobs = stats.jobs,
        scholarships = stats.scholarships,
        industry_insights = stats.industry_insights,
        subject_connections = stats.subject_connections,
        startup_resources = stats.startup_resources,
        "Content store loaded"
    );

    Ok(store)
}

/// Check the schema version and that ids are unique within every collection.
pub fn validate(store: &ContentStore) -> Result<(), AppError> {
    if store.schema_version != SCHEMA_VERSION {
        return Err(AppError::Fixture(format!(
            "Unsupported schema version {} (expected {})",
            store.schema_version, SCHEMA_VERSION
        )));
    }

    ensure_unique("users", store.users.iter().map(|user| user.id.as_str()))?;
    ensure_unique("forumPosts", ids(&store.forum_posts))?;
    ensure_unique("universityPrograms", ids(&store.university_programs))?;
    ensure_unique("careerPaths", ids(&store.career_paths))?;
    ensure_unique("jobs", ids(&store.jobs))?;
    ensure_unique("scholarships", ids(&store.scholarships))?;
    ensure_unique("industryInsights", ids(&store.industry_insights))?;
    ensure_unique("subjectConnections", ids(&store.subject_connections))?;
    ensure_unique("startupResources", ids(&store.startup_resources))?;

    Ok(())
}

fn ids<T: Record>(records: &[T]) -> impl Iterator<Item = &str> {
    records.iter().map(Record::id)
}

fn ensure_unique<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Validation(format!(
                "Duplicate id '{}' in {}",
                id, collection
            )));
        }
    }
    Ok(())
}
