//! Project configuration loaded from `tether.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the per-project configuration file.
pub const CONFIG_FILE: &str = "tether.toml";

/// Configuration for one sync target, read from the project root.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Workspace layout and remote URL.
    pub workspace: WorkspaceSection,

    /// Branch, commit and staging settings.
    #[serde(default)]
    pub git: GitSection,

    /// Hosting-service settings.
    #[serde(default)]
    pub hosting: HostingSection,
}

/// `[workspace]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceSection {
    /// Logical name of this sync target.
    pub sync_tag: String,

    /// Directory under the project root holding the workspace.
    #[serde(default = "default_workspace_dir_name")]
    pub workspace_dir_name: String,

    /// Directory under the workspace holding the working copy.
    #[serde(default = "default_repository_dir_name")]
    pub repository_dir_name: String,

    /// Remote repository URL.
    pub repository_url: String,
}

/// `[git]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GitSection {
    /// Local branch name; the pushed remote branch adds a timestamp.
    #[serde(default = "default_branch_name")]
    pub branch_name: String,

    /// Commit message for published changes.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Files staged before committing.
    #[serde(default = "default_add_files")]
    pub add_files: Vec<String>,

    /// Remote branch pulled from and reset against.
    #[serde(default = "default_default_branch")]
    pub default_branch: String,
}

impl Default for GitSection {
    fn default() -> Self {
        Self {
            branch_name: default_branch_name(),
            commit_message: default_commit_message(),
            add_files: default_add_files(),
            default_branch: default_default_branch(),
        }
    }
}

/// `[hosting]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct HostingSection {
    /// Server-kind tag; unrecognized tags fall back to GitLab.
    #[serde(default = "default_kind")]
    pub kind: String,

    /// Service host; the client default is used when unset.
    #[serde(default)]
    pub host: Option<String>,

    /// Environment variable the token is read from.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Repository identifier on the hosting service.
    #[serde(default)]
    pub project: String,

    /// Open a merge request after a successful remote sync.
    #[serde(default)]
    pub open_merge_request: bool,
}

impl Default for HostingSection {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            host: None,
            token_env: default_token_env(),
            project: String::new(),
            open_merge_request: false,
        }
    }
}

impl Config {
    /// Load `tether.toml` from `dir`.
    ///
    /// # Errors
    /// Returns error if the file is missing or not valid TOML; there is
    /// no default configuration since the remote URL has none.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid {}", path.display()))
    }
}

fn default_workspace_dir_name() -> String {
    ".tether".into()
}

fn default_repository_dir_name() -> String {
    "mirror".into()
}

fn default_branch_name() -> String {
    "feature-sync".into()
}

fn default_commit_message() -> String {
    "chore: sync workspace".into()
}

fn default_add_files() -> Vec<String> {
    vec![".".into()]
}

fn default_default_branch() -> String {
    tether_git::DEFAULT_BRANCH.into()
}

fn default_kind() -> String {
    "gitlab".into()
}

fn default_token_env() -> String {
    "TETHER_TOKEN".into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            r#"
[workspace]
sync_tag = "deps"
repository_url = "https://example.test/repo.git"
"#,
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();

        assert_eq!(config.workspace.workspace_dir_name, ".tether");
        assert_eq!(config.workspace.repository_dir_name, "mirror");
        assert_eq!(config.git.branch_name, "feature-sync");
        assert_eq!(config.git.default_branch, "master");
        assert_eq!(config.hosting.kind, "gitlab");
        assert!(!config.hosting.open_merge_request);
    }

    #[test]
    fn test_full_config_round_trip() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            r#"
[workspace]
sync_tag = "assets"
workspace_dir_name = ".sync"
repository_dir_name = "upstream"
repository_url = "git@example.test:group/repo.git"

[git]
branch_name = "asset-sync"
commit_message = "chore: refresh assets"
add_files = ["assets/", "manifest.json"]
default_branch = "main"

[hosting]
kind = "github"
host = "https://github.example.test"
token_env = "SYNC_TOKEN"
project = "group/repo"
open_merge_request = true
"#,
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();

        assert_eq!(config.workspace.sync_tag, "assets");
        assert_eq!(config.git.add_files, vec!["assets/", "manifest.json"]);
        assert_eq!(config.git.default_branch, "main");
        assert_eq!(config.hosting.kind, "github");
        assert_eq!(config.hosting.token_env, "SYNC_TOKEN");
        assert!(config.hosting.open_merge_request);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(temp.path());

        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("tether.toml"));
    }
}
