//! Canonical source location and the static list of shared files

/// Canonical source directory, relative to the repository root
pub const CANONICAL_DIR: &str = "skills/planning-with-files";

const TEMPLATES: &[&str] = &[
    "templates/findings.md",
    "templates/progress.md",
    "templates/task_plan.md",
    "templates/feature_list.json",
    "templates/init.sh",
    "templates/claude-progress.txt",
];

const REFERENCES: &[&str] = &["examples.md", "reference.md"];

const SCRIPTS: &[&str] = &[
    "scripts/check-complete.sh",
    "scripts/check-complete.ps1",
    "scripts/init-session.sh",
    "scripts/init-session.ps1",
    "scripts/session-catchup.py",
    "scripts/detect-project-size.sh",
    "scripts/verify-feature.sh",
    "scripts/generate-e2e-test.sh",
];

/// Category a shared file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileGroup {
    Templates,
    References,
    Scripts,
}

/// Ordered groups of paths relative to the canonical directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    groups: Vec<(FileGroup, &'static [&'static str])>,
}

impl FileList {
    /// The built-in list: templates, references, then scripts
    pub fn canonical() -> Self {
        Self {
            groups: vec![
                (FileGroup::Templates, TEMPLATES),
                (FileGroup::References, REFERENCES),
                (FileGroup::Scripts, SCRIPTS),
            ],
        }
    }

    /// Paths of a single group, in declaration order
    pub fn group(&self, group: FileGroup) -> &[&'static str] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, paths)| *paths)
            .unwrap_or(&[])
    }

    /// All entries, group by group
    pub fn iter(&self) -> impl Iterator<Item = (FileGroup, &'static str)> + '_ {
        self.groups
            .iter()
            .flat_map(|(group, paths)| paths.iter().map(move |p| (*group, *p)))
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, paths)| paths.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FileList {
    fn default() -> Self {
        Self::canonical()
    }
}
