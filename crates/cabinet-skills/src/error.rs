//! Error types for cabinet-skills

use std::path::PathBuf;
use thiserror::Error;

/// Skill loading error type
#[derive(Debug, Error)]
pub enum Error {
    /// Skill not found in the plugin
    #[error("skill '{skill}' not found in plugin '{plugin}'")]
    SkillNotFound {
        /// Plugin name
        plugin: String,
        /// Skill name
        skill: String,
    },

    /// Command not found in the plugin
    #[error("command '{command}' not found in plugin '{plugin}'")]
    CommandNotFound {
        /// Plugin name
        plugin: String,
        /// Command name
        command: String,
    },

    /// SKILL.md is missing its YAML frontmatter
    #[error("missing frontmatter in {0} (must start and end with ---)")]
    MissingFrontmatter(PathBuf),

    /// Frontmatter failed to parse
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
