pub const DEFAULT_INPUT_PATH: &str = "results/issues.txt";
pub const DEFAULT_TABLE: &str = "github_todo";
pub const REST_PREFIX: &str = "rest/v1";
pub const GITHUB_BASE_URL: &str = "https://github.com";

// Environment variables read at startup
pub const ENV_STORE_URL: &str = "TODO_URL";
pub const ENV_STORE_KEY: &str = "TODO_KEY";
pub const ENV_REPOSITORY: &str = "GITHUB_REPO";
pub const ENV_REVISION: &str = "GITHUB_SHA";

pub const LOG_DIR_NAME: &str = "todo-sync";
