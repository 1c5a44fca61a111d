use serde::{Deserialize, Serialize};

use crate::content::{Project, ALL_TAG};

/// Local storage key for the remembered project filter.
pub const FILTER_STORAGE_KEY: &str = "project_filter";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Tag(String),
}

impl Filter {
    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => project.has_tag(tag),
        }
    }

    /// Keeps the filter if `tokens` still offers it, otherwise falls back to [`Filter::All`].
    /// Used when restoring a remembered filter after the data changed.
    pub fn or_all_if_missing(self, tokens: &[&str]) -> Self {
        if tokens.contains(&self.token()) {
            self
        } else {
            Self::All
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        if value == ALL_TAG {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }
}

/// Projects selected by `filter`, in their original order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &Filter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// `All` followed by each distinct tag in order of first appearance.
pub fn filter_tokens(projects: &[Project]) -> Vec<&'static str> {
    let mut tokens = vec![ALL_TAG];
    for tag in projects.iter().flat_map(|p| p.tags.iter().copied()) {
        if !tokens.contains(&tag) {
            tokens.push(tag);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn names(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let filtered = filter_projects(PROJECTS, &Filter::All);
        assert_eq!(filtered.len(), PROJECTS.len());
        for (got, want) in filtered.iter().zip(PROJECTS.iter()) {
            assert_eq!(*got, want);
        }
    }

    #[test]
    fn test_php_selects_timeclock() {
        let filtered = filter_projects(PROJECTS, &Filter::from("PHP"));
        assert_eq!(names(&filtered), vec!["Timeclock Web App"]);
    }

    #[test]
    fn test_tag_filter_is_complete_and_ordered() {
        for token in filter_tokens(PROJECTS).into_iter().skip(1) {
            let filter = Filter::from(token);
            let filtered = filter_projects(PROJECTS, &filter);
            assert!(filtered.iter().all(|p| p.has_tag(token)));

            let expected = PROJECTS
                .iter()
                .filter(|p| p.tags.contains(&token))
                .map(|p| p.name)
                .collect::<Vec<_>>();
            assert_eq!(names(&filtered), expected);
        }
    }

    #[test]
    fn test_unmatched_filter_is_empty() {
        assert!(filter_projects(PROJECTS, &Filter::from("COBOL")).is_empty());
        // tags are case-sensitive
        assert!(filter_projects(PROJECTS, &Filter::from("php")).is_empty());
    }

    #[test]
    fn test_tokens() {
        let tokens = filter_tokens(PROJECTS);
        assert_eq!(tokens[0], "All");
        assert_eq!(&tokens[1..5], &["React", "Tailwind", "Flask API", "Recharts"]);

        let mut deduped = tokens.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), tokens.len());

        assert_eq!(filter_tokens(&[]), vec!["All"]);
    }

    #[test]
    fn test_token_conversion() {
        assert_eq!(Filter::from("All"), Filter::All);
        assert_eq!(Filter::from("Docker"), Filter::Tag("Docker".to_string()));
        assert_eq!(Filter::Tag("Docker".to_string()).token(), "Docker");
        assert_eq!(Filter::default().token(), "All");
    }

    #[test]
    fn test_stale_filter_falls_back() {
        let tokens = filter_tokens(PROJECTS);
        assert_eq!(
            Filter::from("Bash").or_all_if_missing(&tokens),
            Filter::from("Bash")
        );
        assert_eq!(
            Filter::from("Perl").or_all_if_missing(&tokens),
            Filter::All
        );
        assert_eq!(Filter::All.or_all_if_missing(&tokens), Filter::All);
    }
}
