use serde::{Deserialize, Serialize};

/// A tracked project as stored in `localStorage` and in exported files.
///
/// Field names match the flat JSON record `{id, title, desc, tags, fav, date}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub fav: bool,
    /// Creation time in milliseconds since the Unix epoch.
    pub date: i64,
}

impl Project {
    pub fn new(id: u64, title: String, desc: String, raw_tags: &str, date: i64) -> Self {
        Self {
            id,
            title,
            desc,
            tags: parse_tags(raw_tags),
            fav: false,
            date,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn update_desc(&mut self, desc: String) {
        self.desc = desc;
    }

    pub fn set_tags<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tokens);
    }

    pub fn toggle_fav(&mut self) -> bool {
        self.fav = !self.fav;
        self.fav
    }

    /// True when the lowercased title or any lowercased tag contains `needle`.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Splits the comma separated tag field of the creation form.
pub fn parse_tags(raw: &str) -> Vec<String> {
    normalize_tags(raw.split(','))
}

/// Trims every token and drops the empty ones, keeping order and duplicates.
pub fn normalize_tags<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// The two example projects shown when nothing has been stored yet.
pub fn seed_projects(now: i64) -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Proyecto Ejemplo 1".to_string(),
            desc: "Descripción del proyecto 1".to_string(),
            tags: vec!["dev".to_string(), "web".to_string()],
            fav: true,
            date: now,
        },
        Project {
            id: 2,
            title: "Proyecto Ejemplo 2".to_string(),
            desc: "Descripción del proyecto 2".to_string(),
            tags: vec!["design".to_string()],
            fav: false,
            date: now - 100_000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_tags() {
        assert_eq!(parse_tags("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags(" , ,"), Vec::<String>::new());
        assert_eq!(parse_tags("x,,x"), vec!["x", "x"]);
    }

    #[test]
    fn new_project_starts_unfavorited() {
        let p = Project::new(7, "Title".into(), String::new(), "rust, wasm", 1_000);
        assert_eq!(p.id, 7);
        assert!(!p.fav);
        assert_eq!(p.date, 1_000);
        assert_eq!(p.tags, vec!["rust", "wasm"]);
    }

    #[test]
    fn search_matches_title_or_tag_ignoring_case() {
        let p = Project::new(1, "Landing Page".into(), String::new(), "dev", 0);
        assert!(p.matches_search("landing"));
        assert!(p.matches_search("dev"));
        assert!(!p.matches_search("design"));
    }

    #[test]
    fn missing_optional_fields_default_on_deserialize() {
        let p: Project = serde_json::from_str(r#"{"id":3,"date":42}"#).unwrap();
        assert_eq!(p.title, "");
        assert!(p.tags.is_empty());
        assert!(!p.fav);
    }

    #[test]
    fn seed_has_two_distinct_projects() {
        let seed = seed_projects(500_000);
        assert_eq!(seed.len(), 2);
        assert_ne!(seed[0].id, seed[1].id);
        assert_eq!(seed[1].date, 400_000);
    }
}
