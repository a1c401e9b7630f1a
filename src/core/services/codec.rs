use std::collections::HashSet;

use crate::core::config::MAX_PROJECT_ID;
use crate::core::error::{AppError, Result};
use crate::core::models::Project;

/// Pretty-printed JSON array of the whole collection, as offered for download.
pub fn export_projects(projects: &[Project]) -> Result<String> {
    Ok(serde_json::to_string_pretty(projects)?)
}

/// Parses an imported file. The payload is accepted or rejected as a whole:
/// unparseable text, a non-array top level, records that are not project-shaped,
/// ids above [`MAX_PROJECT_ID`], or repeated ids all fail without producing a
/// partial collection.
pub fn import_projects(raw: &str) -> Result<Vec<Project>> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(AppError::ImportParse)?;
    if !value.is_array() {
        return Err(AppError::ImportNotArray);
    }
    let projects: Vec<Project> = serde_json::from_value(value).map_err(AppError::ImportParse)?;

    if let Some(p) = projects.iter().find(|p| p.id > MAX_PROJECT_ID) {
        return Err(AppError::IdOutOfRange(p.id));
    }
    let mut seen = HashSet::with_capacity(projects.len());
    if let Some(dup) = projects.iter().find(|p| !seen.insert(p.id)) {
        return Err(AppError::DuplicateId(dup.id));
    }
    Ok(projects)
}

/// Parses what was stored under the projects key. Stored data is not checked for
/// duplicate ids since it was written by this application.
pub fn decode_stored(raw: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::seed_projects;

    #[test]
    fn export_then_import_is_identity() {
        let mut projects = seed_projects(1_700_000_000_000);
        projects[1].tags.push("design".into());
        projects[0].desc = "multi\nline \"quoted\"".into();
        let json = export_projects(&projects).unwrap();
        assert_eq!(import_projects(&json).unwrap(), projects);
    }

    #[test]
    fn export_is_indented_with_original_field_names() {
        let json = export_projects(&seed_projects(0)).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": 1,"));
        for key in ["\"title\"", "\"desc\"", "\"tags\"", "\"fav\"", "\"date\""] {
            assert!(json.contains(key), "missing {key}");
        }
    }

    #[test]
    fn non_array_payload_is_rejected() {
        assert!(matches!(import_projects(r#"{"a":1}"#), Err(AppError::ImportNotArray)));
        assert!(matches!(import_projects("42"), Err(AppError::ImportNotArray)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(import_projects("[{"), Err(AppError::ImportParse(_))));
        assert!(matches!(
            import_projects(r#"[{"title":"no id"}]"#),
            Err(AppError::ImportParse(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[{"id":1,"date":0},{"id":2,"date":0},{"id":1,"date":5}]"#;
        assert!(matches!(import_projects(raw), Err(AppError::DuplicateId(1))));
    }

    #[test]
    fn ids_beyond_the_safe_integer_range_are_rejected() {
        let raw = r#"[{"id":18446744073709551615,"date":0}]"#;
        assert!(matches!(import_projects(raw), Err(AppError::IdOutOfRange(u64::MAX))));

        let edge = format!(r#"[{{"id":{},"date":0}}]"#, MAX_PROJECT_ID);
        assert_eq!(import_projects(&edge).unwrap()[0].id, MAX_PROJECT_ID);
        let over = format!(r#"[{{"id":{},"date":0}}]"#, MAX_PROJECT_ID + 1);
        assert!(matches!(import_projects(&over), Err(AppError::IdOutOfRange(_))));
    }

    #[test]
    fn empty_array_is_a_valid_import() {
        assert!(import_projects("[]").unwrap().is_empty());
    }
}
