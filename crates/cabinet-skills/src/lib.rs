//! Cabinet Skills - plugin-file loader
//!
//! Reads markdown "skill" snippets from a plugins directory and assembles
//! them into prompt text for the specialists. Layout:
//!
//! ```text
//! plugins/
//!   productivity/
//!     skills/
//!       task-triage/SKILL.md
//!     commands/
//!       weekly-review.md
//! ```
//!
//! A `SKILL.md` carries YAML frontmatter (`name`, `description`, free-form
//! extras) followed by the markdown body that gets injected into a
//! specialist's system prompt.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod loader;

pub use error::{Error, Result};
pub use loader::{PluginLoader, Skill, SkillFrontmatter};
