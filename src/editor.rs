//! External editor round-trip for the rendered listing.

use crate::error::LdirError;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// Editors tried in order when nothing is configured
const FALLBACK_EDITORS: [&str; 4] = ["mcedit", "nano", "vim", "vi"];

/// A resolved editor command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Editor {
    /// Parse a command line such as `code -w` and locate its program on `PATH`
    pub fn parse(command: &str) -> Result<Self, LdirError> {
        let mut words = split_args(command).into_iter();
        let name = words
            .next()
            .ok_or_else(|| LdirError::EditorError("Empty editor command".to_string()))?;
        let program = which::which(&name)
            .map_err(|e| LdirError::EditorError(format!("Editor '{}' not found: {}", name, e)))?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

/// Split an editor command line on whitespace
///
/// Quotes and escapes are not interpreted: `-c 'set x'` yields three words.
pub fn split_args(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Editor-related environment, captured once
#[derive(Debug, Default, Clone)]
pub struct EditorEnv {
    pub visual: Option<String>,
    pub editor: Option<String>,
    pub display: bool,
}

impl EditorEnv {
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            visual: non_empty("VISUAL"),
            editor: non_empty("EDITOR"),
            display: non_empty("DISPLAY").is_some(),
        }
    }
}

/// Resolve the editor to launch, consulting the process environment
pub fn resolve_editor(explicit: Option<&str>) -> Result<Editor, LdirError> {
    select_editor(explicit, &EditorEnv::from_env())
}

/// Resolve the editor: explicit command, `$VISUAL` under a display,
/// `$EDITOR`, then the first fallback found on `PATH`
pub fn select_editor(explicit: Option<&str>, env: &EditorEnv) -> Result<Editor, LdirError> {
    if let Some(command) = explicit {
        return Editor::parse(command);
    }

    let configured = env
        .visual
        .as_deref()
        .filter(|_| env.display)
        .or(env.editor.as_deref());
    if let Some(command) = configured {
        match Editor::parse(command) {
            Ok(editor) => return Ok(editor),
            Err(e) => tracing::warn!("Ignoring configured editor: {}", e),
        }
    }

    FALLBACK_EDITORS
        .iter()
        .find_map(|name| which::which(name).ok())
        .map(|program| Editor {
            program,
            args: Vec::new(),
        })
        .ok_or_else(|| {
            LdirError::EditorError(format!(
                "No editor configured and none of {} found on PATH",
                FALLBACK_EDITORS.join(", ")
            ))
        })
}

/// Hand `text` to the editor through a temporary file and return the result
pub fn edit_text(editor: &Editor, extra_args: &[String], text: &str) -> Result<String, LdirError> {
    let mut file = tempfile::Builder::new()
        .prefix("ldir-")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    tracing::debug!(
        program = %editor.program.display(),
        file = %file.path().display(),
        "Launching editor"
    );
    let status = Command::new(&editor.program)
        .args(&editor.args)
        .args(extra_args)
        .arg(file.path())
        .status()
        .map_err(|e| {
            LdirError::EditorError(format!(
                "Failed to launch {}: {}",
                editor.program.display(),
                e
            ))
        })?;

    if !status.success() {
        return Err(LdirError::EditorError(format!(
            "{} exited with {}",
            editor.program.display(),
            status
        )));
    }

    // Editors may replace the file rather than rewrite it, so read by path.
    Ok(fs::read_to_string(file.path())?)
}
