//! # Config
//!
//! The config file is a JSON object holding the snarf root URL and the
//! portal credentials. Keys missing from the file are asked for on the
//! terminal, and the completed object is written back at the end of every
//! invocation. Keys the tool does not know about are kept as they are.
//!
//! The password is stored in cleartext, as earlier versions of the tool
//! stored it.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{errors::ConfigError, prompt::Prompt};

/// A complete config, with every required key present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Root URL of the snarf portal, without trailing slashes.
    pub snarfpath: String,
    /// Portal user name.
    pub username: String,
    /// Portal password.
    pub password: String,
    /// Any other keys found in the config file.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The config file as found on disk, possibly with keys missing.
#[derive(Debug, Default, Deserialize)]
struct StoredConfig {
    snarfpath: Option<String>,
    username: Option<String>,
    password: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Config {
    /// Loads the config file and asks for any missing keys.
    ///
    /// A config file that does not exist is treated as empty.
    ///
    /// # Arguments
    ///
    /// - `path` - The JSON config file.
    /// - `prompt` - Answers the questions for missing keys.
    ///
    /// # Returns
    ///
    /// The completed [`Config`] on success, or a [`ConfigError`] if the file
    /// cannot be read or parsed, or the terminal cannot be read.
    pub fn load(path: &Path, prompt: &mut impl Prompt) -> Result<Config, ConfigError> {
        let stored = read_stored(path)?;
        complete(stored, prompt)
    }

    /// Writes the config to `path` with four-space indentation, creating
    /// the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(directory) = path.parent() {
            fs::create_dir_all(directory).map_err(|error| ConfigError::IoCreate {
                path: directory.to_path_buf(),
                error,
            })?;
        }

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .map_err(|error| ConfigError::Serialize { error })?;

        fs::write(path, buffer).map_err(|error| ConfigError::IoWrite {
            path: path.to_path_buf(),
            error,
        })?;
        log::debug!("Saved config to '{}'", path.display());
        Ok(())
    }
}

fn read_stored(path: &Path) -> Result<StoredConfig, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config at '{}'", path.display());
            return Ok(StoredConfig::default());
        }
        Err(error) => {
            return Err(ConfigError::IoRead {
                path: path.to_path_buf(),
                error,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|error| ConfigError::Deserialize {
        path: path.to_path_buf(),
        error,
    })
}

fn complete(stored: StoredConfig, prompt: &mut impl Prompt) -> Result<Config, ConfigError> {
    let snarfpath = match stored.snarfpath {
        Some(snarfpath) => snarfpath,
        None => {
            let answer = prompt
                .line("Snarf root URL: ")
                .map_err(|error| ConfigError::Prompt {
                    field: "snarfpath",
                    error,
                })?;
            answer.trim_end_matches('/').to_string()
        }
    };

    let username = match stored.username {
        Some(username) => username,
        None => prompt
            .line("Username: ")
            .map_err(|error| ConfigError::Prompt {
                field: "username",
                error,
            })?,
    };

    let password = match stored.password {
        Some(password) => password,
        None => prompt
            .secret("Password: ")
            .map_err(|error| ConfigError::Prompt {
                field: "password",
                error,
            })?,
    };

    Ok(Config {
        snarfpath,
        username,
        password,
        extra: stored.extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompt;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_prompts_for_every_key() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("clisnarf.json");
        let mut prompt = ScriptedPrompt::new(["https://example.com/snarf//", "ada", "hunter2"]);

        let config = Config::load(&path, &mut prompt).unwrap();

        assert_eq!(config.snarfpath, "https://example.com/snarf");
        assert_eq!(config.username, "ada");
        assert_eq!(config.password, "hunter2");
        assert_eq!(
            prompt.asked(),
            ["Snarf root URL: ", "Username: ", "Password: "]
        );
        assert_eq!(prompt.secrets_asked(), 1);
    }

    #[test]
    fn test_present_keys_are_not_prompted() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("clisnarf.json");
        fs::write(
            &path,
            r#"{"snarfpath": "https://example.com/snarf", "username": "ada"}"#,
        )
        .unwrap();
        let mut prompt = ScriptedPrompt::new(["hunter2"]);

        let config = Config::load(&path, &mut prompt).unwrap();

        assert_eq!(config.username, "ada");
        assert_eq!(config.password, "hunter2");
        assert_eq!(prompt.asked(), ["Password: "]);
    }

    #[test]
    fn test_save_round_trips_and_keeps_unknown_keys() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("nested").join("clisnarf.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{"snarfpath": "https://a.b/c", "username": "u", "password": "p", "theme": "dark"}"#,
        )
        .unwrap();

        let config = Config::load(&path, &mut ScriptedPrompt::default()).unwrap();
        config.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n    \"snarfpath\": \"https://a.b/c\""));
        assert!(written.contains("\"theme\": \"dark\""));
        let reloaded = Config::load(&path, &mut ScriptedPrompt::default()).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let directory = tempdir().unwrap();
        let path = directory.path().join(".config").join("clisnarf.json");
        let config = Config {
            snarfpath: "https://a.b".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
            extra: Map::new(),
        };

        config.save(&path).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("clisnarf.json");
        fs::write(&path, "not json").unwrap();

        let result = Config::load(&path, &mut ScriptedPrompt::default());

        assert!(matches!(result, Err(ConfigError::Deserialize { .. })));
    }

    #[test]
    fn test_closed_terminal_is_an_error() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("clisnarf.json");

        let result = Config::load(&path, &mut ScriptedPrompt::default());

        assert!(matches!(
            result,
            Err(ConfigError::Prompt {
                field: "snarfpath",
                ..
            })
        ));
    }
}
