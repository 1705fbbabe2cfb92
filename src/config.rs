//! Configuration loading and root directory resolution.

use crate::document::Label;
use crate::error::{ResearchError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User configuration, loaded from `<config-dir>/rsrch/config.toml`.
///
/// Both directories are optional; unset values fall back to the
/// conventional locations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Override for the project-local research directory.
    pub project_dir: Option<PathBuf>,

    /// Override for the user-global research directory.
    pub global_dir: Option<PathBuf>,
}

impl Config {
    /// Load the config file, or the defaults when none exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rsrch").join("config.toml"))
    }

    /// Resolve the two root directories.
    ///
    /// Precedence: CLI flag, then config file, then convention
    /// (`<cwd>/.research` and `<home>/.research`).
    pub fn resolve_roots(
        &self,
        project_override: Option<&Path>,
        global_override: Option<&Path>,
    ) -> Result<Roots> {
        let project = match project_override {
            Some(p) => p.to_path_buf(),
            None => match &self.project_dir {
                Some(p) => p.clone(),
                None => std::env::current_dir()?.join(".research"),
            },
        };

        let global = match global_override {
            Some(p) => p.to_path_buf(),
            None => match &self.global_dir {
                Some(p) => p.clone(),
                None => dirs::home_dir()
                    .ok_or_else(|| {
                        ResearchError::ConfigError("could not determine home directory".to_string())
                    })?
                    .join(".research"),
            },
        };

        Ok(Roots { project, global })
    }
}

/// The two configured root directories.
#[derive(Debug, Clone)]
pub struct Roots {
    pub project: PathBuf,
    pub global: PathBuf,
}

impl Roots {
    /// Which root contains `path`, if any.
    ///
    /// The project root is checked first; a path under both (e.g. a project
    /// inside the home directory) counts as project.
    pub fn locate(&self, path: &Path) -> Option<Label> {
        if path.starts_with(&self.project) {
            Some(Label::Project)
        } else if path.starts_with(&self.global) {
            Some(Label::Global)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let config = Config {
            project_dir: Some(PathBuf::from("/cfg/project")),
            global_dir: Some(PathBuf::from("/cfg/global")),
        };
        let roots = config
            .resolve_roots(Some(Path::new("/flag/project")), None)
            .unwrap();
        assert_eq!(roots.project, PathBuf::from("/flag/project"));
        assert_eq!(roots.global, PathBuf::from("/cfg/global"));
    }

    #[test]
    fn test_locate() {
        let roots = Roots {
            project: PathBuf::from("/work/.research"),
            global: PathBuf::from("/home/user/.research"),
        };
        assert_eq!(
            roots.locate(Path::new("/work/.research/a.md")),
            Some(Label::Project)
        );
        assert_eq!(
            roots.locate(Path::new("/home/user/.research/b.md")),
            Some(Label::Global)
        );
        assert_eq!(roots.locate(Path::new("/elsewhere/c.md")), None);
    }
}
