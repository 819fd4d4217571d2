use std::collections::HashSet;

use super::{CatalogError, ProjectRecord};

/// Check every record once, in catalog order. The first problem found wins.
pub(super) fn validate(projects: &[ProjectRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for project in projects {
        if !is_slug(&project.id) {
            return Err(CatalogError::InvalidId(project.id.clone()));
        }
        if !seen.insert(project.id.as_str()) {
            return Err(CatalogError::DuplicateId(project.id.clone()));
        }
        validate_record(project)?;
    }
    Ok(())
}

fn validate_record(project: &ProjectRecord) -> Result<(), CatalogError> {
    for (field, value) in project.required_text() {
        if value.trim().is_empty() {
            return Err(empty(project, field));
        }
    }
    if project.technologies.is_empty() {
        return Err(empty(project, "technologies"));
    }

    let mut tags = HashSet::new();
    for tag in &project.tags {
        if !tags.insert(tag.as_str()) {
            return Err(CatalogError::DuplicateTag {
                id: project.id.clone(),
                tag: tag.clone(),
            });
        }
    }

    check_url(project, "github", &project.github)?;
    if let Some(demo) = project.demo() {
        check_url(project, "demo", demo)?;
    }
    for image in &project.results_images {
        if image.src.trim().is_empty() {
            return Err(empty(project, "resultsImages.src"));
        }
    }
    Ok(())
}

fn empty(project: &ProjectRecord, field: &'static str) -> CatalogError {
    CatalogError::EmptyField {
        id: project.id.clone(),
        field,
    }
}

fn check_url(project: &ProjectRecord, field: &'static str, url: &str) -> Result<(), CatalogError> {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() && !rest.contains(char::is_whitespace) => Ok(()),
        _ => Err(CatalogError::InvalidUrl {
            id: project.id.clone(),
            field,
            url: url.to_string(),
        }),
    }
}

fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
