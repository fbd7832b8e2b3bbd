//! # Editor
//!
//! Opens a file in the user's text editor for the `config` mode.

use std::{env, path::Path, process::Command};

use crate::errors::AppError;

/// Used when neither `VISUAL` nor `EDITOR` is set.
const DEFAULT_EDITOR: &str = "vim";

/// The editor command line: `VISUAL`, then `EDITOR`, then [`DEFAULT_EDITOR`].
pub fn editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Opens `path` in `editor` and waits for it to exit.
///
/// `editor` may carry arguments, e.g. `code --wait`; they are split the
/// way a shell would split them.
pub fn edit(editor: &str, path: &Path) -> Result<(), AppError> {
    let words = shell_words::split(editor).map_err(|error| AppError::EditorCommand {
        editor: editor.to_string(),
        error,
    })?;
    let Some((program, arguments)) = words.split_first() else {
        return Err(AppError::Editor {
            editor: editor.to_string(),
            error: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        });
    };

    log::debug!("Opening '{}' with '{editor}'", path.display());
    let status = Command::new(program)
        .args(arguments)
        .arg(path)
        .status()
        .map_err(|error| AppError::Editor {
            editor: editor.to_string(),
            error,
        })?;
    if !status.success() {
        log::warn!("Editor '{editor}' exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_quotes_are_rejected() {
        let result = edit("vim \"unterminated", Path::new("config.json"));
        assert!(matches!(result, Err(AppError::EditorCommand { .. })));
    }

    #[test]
    fn test_blank_command_is_rejected() {
        let result = edit("   ", Path::new("config.json"));
        assert!(matches!(result, Err(AppError::Editor { .. })));
    }

    #[test]
    fn test_missing_program_is_reported() {
        let result = edit(
            "clisnarf-no-such-editor --wait",
            Path::new("config.json"),
        );
        assert!(matches!(result, Err(AppError::Editor { .. })));
    }
}
