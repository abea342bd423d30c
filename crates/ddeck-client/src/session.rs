//! Session credential context
//!
//! A process-wide holder for the bearer credential with explicit init
//! (read the persisted token on load, if any) and explicit teardown
//! (clear removes it). Consumers read through [`SessionContext::token`]
//! only; nothing else in the client ever constructs or inspects the
//! credential.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use ddeck_core::prelude::*;

/// On-disk shape of the session file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    token: Option<String>,
}

/// Holder for the current session credential.
#[derive(Debug, Clone)]
pub struct SessionContext {
    token: Option<String>,
    /// `None` for in-memory sessions that must never touch disk.
    path: Option<PathBuf>,
}

impl SessionContext {
    /// Load the persisted session, if one exists.
    ///
    /// A missing or unreadable session file is a normal first-run
    /// state, not an error; it yields an anonymous context.
    pub fn load() -> Self {
        let path = session_file_path();
        let token = path
            .as_ref()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|raw| toml::from_str::<SessionFile>(&raw).ok())
            .and_then(|file| file.token)
            .filter(|t| !t.trim().is_empty());

        if token.is_some() {
            debug!("Loaded persisted session credential");
        }
        Self { token, path }
    }

    /// A context that holds `token` in memory only (e.g. passed on the
    /// command line); never persisted.
    pub fn in_memory(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            path: None,
        }
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store a new token, persisting it when this context is backed by
    /// a session file.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.token = Some(token.clone());

        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = SessionFile { token: Some(token) };
            let raw = toml::to_string_pretty(&file)
                .map_err(|e| Error::config(format!("failed to encode session file: {e}")))?;
            std::fs::write(path, raw)?;
        }
        Ok(())
    }

    /// Teardown: forget the token and remove the persisted file.
    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        if let Some(path) = &self.path {
            if path.exists() {
                std::fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

/// Default session file location under the user config dir.
fn session_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("design-deck").join("session.toml"))
}
