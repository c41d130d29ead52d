use crate::constants::GITHUB_BASE_URL;

/// The repository and revision a report was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub repo: String,
    pub sha: String,
}

impl RepositoryRef {
    pub fn new(repo: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            sha: sha.into(),
        }
    }

    /// Short repository name, used to scope stored issues to one project.
    pub fn category(&self) -> &str {
        self.repo.rsplit('/').next().unwrap_or(&self.repo)
    }

    pub fn link_for(&self, file: &str, line: u32) -> String {
        format!("{}/{}/blob/{}/{}#L{}", GITHUB_BASE_URL, self.repo, self.sha, file, line)
    }
}
