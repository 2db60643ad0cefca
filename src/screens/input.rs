//! Line input for the screen loop, built on rustyline
//!
//! Provides readline functionality with optional persistent history and
//! graceful interrupt handling.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::errors::{MediScanError, Result};

/// Input handler managing the readline editor and its history.
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| MediScanError::Readline(e.to_string()))?;

        Ok(InputHandler {
            editor,
            history_path: None,
        })
    }

    /// Create input handler with persistent history.
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor =
            DefaultEditor::new().map_err(|e| MediScanError::Readline(e.to_string()))?;

        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
        })
    }

    /// Read one line under the given prompt.
    ///
    /// Returns:
    /// - `Ok(Some(input))` for normal input (trimmed, possibly empty)
    /// - `Ok(None)` for EOF (Ctrl-D)
    /// - `Err(MediScanError::Interrupted)` for Ctrl-C
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }

                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Err(MediScanError::Interrupted),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(MediScanError::Readline(err.to_string())),
        }
    }

    /// Save history to disk. Called on graceful shutdown; a no-op without a
    /// configured history file.
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            self.editor
                .save_history(path)
                .map_err(|e| MediScanError::Readline(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_handler_creation() {
        assert!(InputHandler::new().is_ok());
    }

    #[test]
    fn test_with_missing_history_file() {
        let dir = TempDir::new().unwrap();
        let handler = InputHandler::with_history(dir.path().join("history"));
        assert!(handler.is_ok());
    }

    #[test]
    fn test_save_history_without_path_is_noop() {
        let mut handler = InputHandler::new().unwrap();
        assert!(handler.save_history().is_ok());
    }
}
