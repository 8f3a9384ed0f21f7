//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chat_history_explorer::SourceDirs;
use rusqlite::Connection;
use tempfile::TempDir;

/// Builder for a temp directory holding a fake `.claude` home and Cursor base
pub struct HistoryDirBuilder {
    temp_dir: TempDir,
}

impl HistoryDirBuilder {
    /// Create a new builder with empty Claude and Cursor directories
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join(".claude")).expect("Failed to create .claude");
        fs::create_dir(temp_dir.path().join("Cursor")).expect("Failed to create Cursor");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn claude_dir(&self) -> PathBuf {
        self.temp_dir.path().join(".claude")
    }

    pub fn cursor_dir(&self) -> PathBuf {
        self.temp_dir.path().join("Cursor")
    }

    pub fn source_dirs(&self) -> SourceDirs {
        SourceDirs::new(self.claude_dir(), self.cursor_dir())
    }

    /// Add a Claude session file built from entries
    pub fn with_session(self, project_dir: &str, file_name: &str, lines: &[SessionLineBuilder]) -> Self {
        let content = lines.iter().map(|l| l.to_json()).collect::<Vec<_>>().join("\n");
        self.with_raw_session(project_dir, file_name, &content)
    }

    /// Add a Claude session file with verbatim content
    pub fn with_raw_session(self, project_dir: &str, file_name: &str, content: &str) -> Self {
        let dir = self.claude_dir().join("projects").join(project_dir);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        fs::write(dir.join(file_name), content).expect("Failed to write session file");
        self
    }

    /// Add a Cursor workspace with a real SQLite store
    pub fn with_workspace(self, workspace: WorkspaceBuilder) -> Self {
        let storage = self.cursor_dir().join("User").join("workspaceStorage");
        workspace.create_in(&storage);
        self
    }

    /// Pin a workspace store's modification time, which dates its chat
    pub fn with_store_modified(self, workspace_id: &str, modified: SystemTime) -> Self {
        let store = self
            .cursor_dir()
            .join("User")
            .join("workspaceStorage")
            .join(workspace_id)
            .join("state.vscdb");
        File::options()
            .write(true)
            .open(&store)
            .and_then(|file| file.set_modified(modified))
            .expect("Failed to set store mtime");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HistoryDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

enum Content {
    Text(String),
    Blocks(Vec<String>),
}

/// Builder for one line of a Claude session file
pub struct SessionLineBuilder {
    entry_type: String,
    content: Content,
    timestamp: Option<String>,
}

impl SessionLineBuilder {
    pub fn user(text: &str) -> Self {
        Self { entry_type: "user".to_string(), content: Content::Text(text.to_string()), timestamp: None }
    }

    pub fn assistant(text: &str) -> Self {
        Self { entry_type: "assistant".to_string(), content: Content::Text(text.to_string()), timestamp: None }
    }

    /// Assistant entry with content blocks
    pub fn assistant_blocks(blocks: Vec<String>) -> Self {
        Self { entry_type: "assistant".to_string(), content: Content::Blocks(blocks), timestamp: None }
    }

    pub fn text_block(text: &str) -> String {
        format!(r#"{{"type":"text","text":{}}}"#, serde_json::to_string(text).unwrap())
    }

    pub fn tool_use_block(id: &str, name: &str) -> String {
        format!(r#"{{"type":"tool_use","id":"{}","name":"{}","input":{{}}}}"#, id, name)
    }

    pub fn at(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        let content = match &self.content {
            Content::Text(text) => serde_json::to_string(text).unwrap(),
            Content::Blocks(blocks) => format!("[{}]", blocks.join(",")),
        };
        let timestamp = self
            .timestamp
            .as_ref()
            .map(|t| format!(r#","timestamp":"{}""#, t))
            .unwrap_or_default();

        format!(
            r#"{{"type":"{}","message":{{"role":"{}","content":{}}}{}}}"#,
            self.entry_type, self.entry_type, content, timestamp
        )
    }
}

/// Builder for a Cursor workspace directory
pub struct WorkspaceBuilder {
    id: String,
    metadata: Option<String>,
    prompts: Option<String>,
    with_store: bool,
}

impl WorkspaceBuilder {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), metadata: None, prompts: None, with_store: true }
    }

    pub fn folder(mut self, folder_uri: &str) -> Self {
        self.metadata = Some(format!(r#"{{"folder":"{}"}}"#, folder_uri));
        self
    }

    pub fn metadata(mut self, raw: &str) -> Self {
        self.metadata = Some(raw.to_string());
        self
    }

    /// Raw value stored under `aiService.prompts`
    pub fn prompts(mut self, raw: &str) -> Self {
        self.prompts = Some(raw.to_string());
        self
    }

    pub fn without_store(mut self) -> Self {
        self.with_store = false;
        self
    }

    pub fn create_in(&self, storage: &Path) {
        let dir = storage.join(&self.id);
        fs::create_dir_all(&dir).expect("Failed to create workspace dir");

        if let Some(metadata) = &self.metadata {
            fs::write(dir.join("workspace.json"), metadata).expect("Failed to write workspace.json");
        }

        if self.with_store {
            let conn = Connection::open(dir.join("state.vscdb")).expect("Failed to create store");
            conn.execute("CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)", [])
                .expect("Failed to create table");
            if let Some(prompts) = &self.prompts {
                conn.execute(
                    "INSERT INTO ItemTable (key, value) VALUES ('aiService.prompts', ?1)",
                    [prompts],
                )
                .expect("Failed to insert prompts");
            }
        }
    }
}
