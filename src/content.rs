mod data;

pub use data::{EXPERIENCE, PROFILE, PROJECTS, SKILLS};

use std::{collections::HashSet, fmt, str::FromStr};

use thiserror::Error;

/// Filter token that selects every project. Reserved: no project may use it as a tag.
pub const ALL_TAG: &str = "All";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Unknown skill level: {0}")]
    UnknownLevel(String),
    #[error("Unknown skill category: {0}")]
    UnknownCategory(String),
    #[error("Unknown project status: {0}")]
    UnknownStatus(String),
    #[error("Unknown link kind: {0}")]
    UnknownLinkKind(String),
    #[error("Skill '{label}' has score {score}, expected 0-100")]
    ScoreOutOfRange { label: &'static str, score: u8 },
    #[error("Skill '{label}' has score {score}, below the {level} band")]
    ScoreBelowLevel {
        label: &'static str,
        score: u8,
        level: SkillLevel,
    },
    #[error("Duplicate project name: {0}")]
    DuplicateProject(&'static str),
    #[error("Project '{0}' has no tags")]
    UntaggedProject(&'static str),
    #[error("Project '{0}' uses the reserved tag \"All\"")]
    ReservedTag(&'static str),
}

/// Icon glyphs referenced by content and chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Cpu,
    Database,
    Cog,
    Server,
    Boxes,
    Network,
    GitHub,
    LinkedIn,
    Mail,
    Download,
    ArrowRight,
    ArrowUp,
    Menu,
    Close,
}

impl Icon {
    /// Class name in the lucide icon font.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Cpu => "icon-cpu",
            Self::Database => "icon-database",
            Self::Cog => "icon-cog",
            Self::Server => "icon-server",
            Self::Boxes => "icon-boxes",
            Self::Network => "icon-network",
            Self::GitHub => "icon-github",
            Self::LinkedIn => "icon-linkedin",
            Self::Mail => "icon-mail",
            Self::Download => "icon-download",
            Self::ArrowRight => "icon-arrow-right",
            Self::ArrowUp => "icon-arrow-up",
            Self::Menu => "icon-menu",
            Self::Close => "icon-x",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Email,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Email => "Email",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::GitHub => Icon::GitHub,
            Self::LinkedIn => Icon::LinkedIn,
            Self::Email => Icon::Mail,
        }
    }
}

impl FromStr for LinkKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::GitHub, Self::LinkedIn, Self::Email]
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ContentError::UnknownLinkKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: Option<&'static str>,
    pub summary: &'static str,
    /// Rendered in this order wherever contact links appear.
    pub links: &'static [(LinkKind, &'static str)],
    pub resume_url: Option<&'static str>,
    pub logo_url: Option<&'static str>,
}

impl Profile {
    pub fn link(&self, kind: LinkKind) -> Option<&'static str> {
        self.links
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, url)| *url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Beginner,
    Working,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Working => "Working",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Lowest numeric score consistent with this level.
    pub fn min_score(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Working => 40,
            Self::Intermediate => 55,
            Self::Advanced => 75,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillLevel {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Beginner,
            Self::Working,
            Self::Intermediate,
            Self::Advanced,
        ]
        .into_iter()
        .find(|l| l.label().eq_ignore_ascii_case(s))
        .ok_or_else(|| ContentError::UnknownLevel(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Infrastructure,
    Networking,
    Tooling,
}

impl SkillCategory {
    /// Display order of the skills section.
    pub const ALL: [SkillCategory; 5] = [
        Self::Frontend,
        Self::Backend,
        Self::Infrastructure,
        Self::Networking,
        Self::Tooling,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Infrastructure => "Infrastructure",
            Self::Networking => "Networking",
            Self::Tooling => "Tooling",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ContentError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub label: &'static str,
    pub icon: Icon,
    pub level: SkillLevel,
    /// 0-100
    pub score: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active,
    WorkInProgress,
    Archived,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::WorkInProgress => "WIP",
            Self::Archived => "Archived",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("work in progress") {
            return Ok(Self::WorkInProgress);
        }
        [Self::Active, Self::WorkInProgress, Self::Archived]
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ContentError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
    pub status: Option<ProjectStatus>,
}

impl Project {
    /// Exact, case-sensitive tag lookup.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

/// A highlights card on the dashboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: String,
    pub sub: Option<&'static str>,
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            title: "Projects",
            value: PROJECTS.len().to_string(),
            sub: Some("active repos"),
        },
        Stat {
            title: "Core Stack",
            value: "6+".to_string(),
            sub: Some("primary tools"),
        },
        Stat {
            title: "Uptime",
            value: "89%".to_string(),
            sub: Some("home services"),
        },
    ]
}

/// Groups skills by category in [`SkillCategory::ALL`] order, skipping empty
/// categories. Skills keep their table order within a group.
pub fn skills_by_category(skills: &[Skill]) -> Vec<(SkillCategory, Vec<&Skill>)> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| {
            let group = skills
                .iter()
                .filter(|s| s.category == category)
                .collect::<Vec<_>>();
            (category, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

pub fn check_skills(skills: &[Skill]) -> Result<(), ContentError> {
    for skill in skills {
        if skill.score > 100 {
            return Err(ContentError::ScoreOutOfRange {
                label: skill.label,
                score: skill.score,
            });
        }
        if skill.score < skill.level.min_score() {
            return Err(ContentError::ScoreBelowLevel {
                label: skill.label,
                score: skill.score,
                level: skill.level,
            });
        }
    }
    Ok(())
}

pub fn check_projects(projects: &[Project]) -> Result<(), ContentError> {
    let mut names = HashSet::new();
    for project in projects {
        if !names.insert(project.name) {
            return Err(ContentError::DuplicateProject(project.name));
        }
        if project.tags.is_empty() {
            return Err(ContentError::UntaggedProject(project.name));
        }
        if project.has_tag(ALL_TAG) {
            return Err(ContentError::ReservedTag(project.name));
        }
    }
    Ok(())
}

/// Validates the compiled-in tables. The server refuses to start if this fails.
pub fn check_catalog() -> Result<(), ContentError> {
    check_skills(SKILLS)?;
    check_projects(PROJECTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &'static str, tags: &'static [&'static str]) -> Project {
        Project {
            name,
            description: "",
            tags,
            link: None,
            status: None,
        }
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        assert_eq!(check_catalog(), Ok(()));
    }

    #[test]
    fn test_skill_checks() {
        let mut skill = Skill {
            label: "Rust",
            icon: Icon::Cog,
            level: SkillLevel::Advanced,
            score: 101,
            category: SkillCategory::Backend,
        };
        assert_eq!(
            check_skills(std::slice::from_ref(&skill)),
            Err(ContentError::ScoreOutOfRange {
                label: "Rust",
                score: 101
            })
        );

        skill.score = 50;
        assert!(matches!(
            check_skills(std::slice::from_ref(&skill)),
            Err(ContentError::ScoreBelowLevel {
                level: SkillLevel::Advanced,
                ..
            })
        ));

        skill.level = SkillLevel::Working;
        assert_eq!(check_skills(&[skill]), Ok(()));
    }

    #[test]
    fn test_project_checks() {
        let dup = [project("A", &["Rust"]), project("A", &["Go"])];
        assert_eq!(check_projects(&dup), Err(ContentError::DuplicateProject("A")));

        let untagged = [project("B", &[])];
        assert_eq!(
            check_projects(&untagged),
            Err(ContentError::UntaggedProject("B"))
        );

        let reserved = [project("C", &["Rust", "All"])];
        assert_eq!(
            check_projects(&reserved),
            Err(ContentError::ReservedTag("C"))
        );
    }

    #[test]
    fn test_label_parsing() {
        for level in [
            SkillLevel::Beginner,
            SkillLevel::Working,
            SkillLevel::Intermediate,
            SkillLevel::Advanced,
        ] {
            assert_eq!(level.label().parse::<SkillLevel>(), Ok(level));
        }
        assert!(matches!(
            "Expert".parse::<SkillLevel>(),
            Err(ContentError::UnknownLevel(_))
        ));

        assert_eq!("networking".parse(), Ok(SkillCategory::Networking));
        assert!("Design".parse::<SkillCategory>().is_err());

        assert_eq!("WIP".parse(), Ok(ProjectStatus::WorkInProgress));
        assert!("Done".parse::<ProjectStatus>().is_err());

        assert_eq!("GitHub".parse(), Ok(LinkKind::GitHub));
        assert_eq!(
            "mastodon".parse::<LinkKind>(),
            Err(ContentError::UnknownLinkKind("mastodon".to_string()))
        );
    }

    #[test]
    fn test_label_parsing_ignores_case() {
        assert_eq!("advanced".parse(), Ok(SkillLevel::Advanced));
        assert_eq!("BEGINNER".parse(), Ok(SkillLevel::Beginner));
        assert_eq!("Frontend".parse(), Ok(SkillCategory::Frontend));
        assert_eq!("INFRASTRUCTURE".parse(), Ok(SkillCategory::Infrastructure));
        assert_eq!("wip".parse(), Ok(ProjectStatus::WorkInProgress));
        assert_eq!("Work In Progress".parse(), Ok(ProjectStatus::WorkInProgress));
        assert_eq!("archived".parse(), Ok(ProjectStatus::Archived));
        assert_eq!("EMAIL".parse(), Ok(LinkKind::Email));
        assert_eq!("linkedin".parse(), Ok(LinkKind::LinkedIn));
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(SkillLevel::Beginner < SkillLevel::Working);
        assert!(SkillLevel::Working < SkillLevel::Intermediate);
        assert!(SkillLevel::Intermediate < SkillLevel::Advanced);
    }

    #[test]
    fn test_skills_by_category() {
        let groups = skills_by_category(SKILLS);
        let categories = groups.iter().map(|(c, _)| *c).collect::<Vec<_>>();

        // follows SkillCategory::ALL order and skips empty groups
        let expected = SkillCategory::ALL
            .into_iter()
            .filter(|c| SKILLS.iter().any(|s| s.category == *c))
            .collect::<Vec<_>>();
        assert_eq!(categories, expected);

        let total = groups.iter().map(|(_, g)| g.len()).sum::<usize>();
        assert_eq!(total, SKILLS.len());

        let backend = groups
            .iter()
            .find(|(c, _)| *c == SkillCategory::Backend)
            .map(|(_, g)| g.iter().map(|s| s.label).collect::<Vec<_>>())
            .expect("sample data has backend skills");
        assert_eq!(backend, vec!["PHP & SQL", "C# / .NET", "Python"]);
    }

    #[test]
    fn test_stats_count_projects() {
        let stats = stats();
        assert_eq!(stats[0].title, "Projects");
        assert_eq!(stats[0].value, PROJECTS.len().to_string());
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(
            PROFILE.link(LinkKind::Email),
            Some("mailto:mrzech@zechender.com")
        );
        assert!(PROFILE.link(LinkKind::GitHub).is_some());
    }
}
