use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_TABLE, ENV_REPOSITORY, ENV_REVISION, ENV_STORE_KEY, ENV_STORE_URL,
};
use crate::error::SyncResult;
use crate::models::RepositoryRef;
use crate::sync_error;

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub store_url: String,
    pub api_key: String,
    pub repository: RepositoryRef,
    pub table: String,
    pub input_path: PathBuf,
    pub dry_run: bool,
}

impl SyncConfig {
    pub fn from_env() -> SyncResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from a variable lookup, reporting every missing or
    /// malformed variable in a single error.
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let store_url = read(ENV_STORE_URL);
        let api_key = read(ENV_STORE_KEY);
        let repo = read(ENV_REPOSITORY);
        let sha = read(ENV_REVISION);

        let mut problems = Vec::new();
        for (key, value) in [
            (ENV_STORE_URL, &store_url),
            (ENV_STORE_KEY, &api_key),
            (ENV_REPOSITORY, &repo),
            (ENV_REVISION, &sha),
        ] {
            if value.is_none() {
                problems.push(format!("{} is not set", key));
            }
        }

        if let Some(url) = &store_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                problems.push(format!("{} must be an http(s) URL, got '{}'", ENV_STORE_URL, url));
            }
        }

        if let Some(repo) = &repo {
            if !is_owner_and_name(repo) {
                problems.push(format!("{} must look like 'owner/name', got '{}'", ENV_REPOSITORY, repo));
            }
        }

        if !problems.is_empty() {
            return Err(sync_error!(Config, "{}", problems.join("; ")));
        }

        match (store_url, api_key, repo, sha) {
            (Some(store_url), Some(api_key), Some(repo), Some(sha)) => Ok(Self {
                store_url: store_url.trim_end_matches('/').to_string(),
                api_key,
                repository: RepositoryRef::new(repo, sha),
                table: DEFAULT_TABLE.to_string(),
                input_path: PathBuf::from(DEFAULT_INPUT_PATH),
                dry_run: false,
            }),
            _ => Err(sync_error!(Config, "incomplete environment")),
        }
    }

    pub fn category(&self) -> &str {
        self.repository.category()
    }
}

fn is_owner_and_name(repo: &str) -> bool {
    match repo.split_once('/') {
        Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
        None => false,
    }
}
