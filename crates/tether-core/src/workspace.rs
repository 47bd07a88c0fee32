//! Workspace layout and the persisted sync history record.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Caller-facing workspace settings.
#[derive(Debug, Clone)]
pub struct WorkspaceOptions {
    /// Project root the workspace lives under.
    pub context: PathBuf,

    /// Logical name distinguishing multiple sync targets in one project.
    pub sync_tag: String,

    /// Name of the workspace directory under the project root.
    pub workspace_dir_name: String,

    /// Name of the working-copy directory under the workspace.
    pub repository_dir_name: String,

    /// Remote repository URL.
    pub repository_url: String,
}

/// Paths derived once from [`WorkspaceOptions`]; fixed for the lifetime
/// of a lifecycle instance.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    /// Project root.
    pub context: PathBuf,

    /// Logical name of this sync target.
    pub sync_tag: String,

    /// `context/workspace_dir_name`
    pub workspace_dir: PathBuf,

    /// `workspace_dir/repository_dir_name`
    pub repository_dir: PathBuf,

    /// `workspace_dir/{sync_tag}-sync-history.json`
    pub log_file: PathBuf,

    /// Remote repository URL.
    pub repository_url: String,

    /// Ignore-file patterns owned by this workspace, relative to `context`:
    /// the working-copy directory and the history log.
    pub ignore_patterns: [String; 2],
}

impl WorkspacePaths {
    /// Compute every derived path.
    #[must_use]
    pub fn derive(options: &WorkspaceOptions) -> Self {
        let workspace_dir = options.context.join(&options.workspace_dir_name);
        let repository_dir = workspace_dir.join(&options.repository_dir_name);
        let log_file = workspace_dir.join(format!("{}-sync-history.json", options.sync_tag));

        let ignore_patterns = [
            format!(
                "{}/{}/",
                options.workspace_dir_name, options.repository_dir_name
            ),
            format!(
                "{}/{}-sync-history.json",
                options.workspace_dir_name, options.sync_tag
            ),
        ];

        Self {
            context: options.context.clone(),
            sync_tag: options.sync_tag.clone(),
            workspace_dir,
            repository_dir,
            log_file,
            repository_url: options.repository_url.clone(),
            ignore_patterns,
        }
    }

    /// Path of the project's ignore file.
    #[must_use]
    pub fn ignore_file(&self) -> PathBuf {
        self.context.join(".gitignore")
    }
}

/// Append each owned pattern to the project's ignore file on its own
/// line, creating the file when absent. Patterns already present are
/// left alone, so repeated calls change nothing.
///
/// # Errors
/// Returns error if the ignore file cannot be read or written.
pub fn update_ignore_file(paths: &WorkspacePaths) -> Result<()> {
    let ignore_path = paths.ignore_file();

    if ignore_path.exists() {
        let mut content = fs::read_to_string(&ignore_path)?;
        for pattern in &paths.ignore_patterns {
            if !content.contains(pattern.as_str()) {
                content.push('\n');
                content.push_str(pattern);
            }
        }
        fs::write(&ignore_path, content)?;
    } else {
        fs::write(&ignore_path, paths.ignore_patterns.join("\n"))?;
    }

    Ok(())
}

/// The record written to the history log at bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncHistory {
    /// Epoch milliseconds of the first successful bootstrap.
    #[serde(rename = "createTime")]
    pub create_time: i64,
}

impl SyncHistory {
    /// Write the initial record unless the log file already exists; an
    /// existing record keeps its original `createTime`.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn write_initial(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }

        let record = Self {
            create_time: Utc::now().timestamp_millis(),
        };
        fs::write(path, serde_json::to_string_pretty(&record)?)?;
        Ok(())
    }

    /// Load the record from `path`.
    ///
    /// # Errors
    /// Returns error if the file is missing or not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_options(context: &Path) -> WorkspaceOptions {
        WorkspaceOptions {
            context: context.to_path_buf(),
            sync_tag: "deps".into(),
            workspace_dir_name: ".tether".into(),
            repository_dir_name: "mirror".into(),
            repository_url: "https://example.test/repo.git".into(),
        }
    }

    #[test]
    fn test_derived_paths() {
        let options = test_options(Path::new("/project"));
        let paths = WorkspacePaths::derive(&options);

        assert_eq!(paths.workspace_dir, Path::new("/project/.tether"));
        assert_eq!(paths.repository_dir, Path::new("/project/.tether/mirror"));
        assert_eq!(
            paths.log_file,
            Path::new("/project/.tether/deps-sync-history.json")
        );
        assert_eq!(paths.ignore_patterns[0], ".tether/mirror/");
        assert_eq!(paths.ignore_patterns[1], ".tether/deps-sync-history.json");
    }

    #[test]
    fn test_ignore_file_created_when_absent() {
        let temp = TempDir::new().unwrap();
        let paths = WorkspacePaths::derive(&test_options(temp.path()));

        update_ignore_file(&paths).unwrap();

        let content = fs::read_to_string(paths.ignore_file()).unwrap();
        assert_eq!(content, ".tether/mirror/\n.tether/deps-sync-history.json");
    }

    #[test]
    fn test_ignore_file_appends_missing_patterns_only() {
        let temp = TempDir::new().unwrap();
        let paths = WorkspacePaths::derive(&test_options(temp.path()));
        fs::write(paths.ignore_file(), "target/\n.tether/mirror/").unwrap();

        update_ignore_file(&paths).unwrap();

        let content = fs::read_to_string(paths.ignore_file()).unwrap();
        assert_eq!(
            content,
            "target/\n.tether/mirror/\n.tether/deps-sync-history.json"
        );
    }

    #[test]
    fn test_ignore_file_update_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let paths = WorkspacePaths::derive(&test_options(temp.path()));

        update_ignore_file(&paths).unwrap();
        let first = fs::read_to_string(paths.ignore_file()).unwrap();

        update_ignore_file(&paths).unwrap();
        let second = fs::read_to_string(paths.ignore_file()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_history_written_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps-sync-history.json");

        SyncHistory::write_initial(&path).unwrap();
        let first = SyncHistory::load(&path).unwrap();
        assert!(first.create_time > 0);

        SyncHistory::write_initial(&path).unwrap();
        let second = SyncHistory::load(&path).unwrap();
        assert_eq!(first.create_time, second.create_time);
    }

    #[test]
    fn test_history_uses_camel_case_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps-sync-history.json");

        SyncHistory::write_initial(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"createTime\""));
    }
}
