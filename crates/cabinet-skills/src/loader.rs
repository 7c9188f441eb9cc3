//! Loader for plugin skills and commands

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Frontmatter parsed from a SKILL.md
#[derive(Debug, Clone, Deserialize)]
pub struct SkillFrontmatter {
    /// Skill name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Any extra frontmatter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// A skill loaded from disk
#[derive(Debug, Clone)]
pub struct Skill {
    /// Parsed frontmatter
    pub frontmatter: SkillFrontmatter,
    /// Markdown body (the prompt snippet)
    pub body: String,
}

impl Skill {
    /// Parse SKILL.md content
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let (frontmatter_str, body) = split_frontmatter(content)
            .ok_or_else(|| Error::MissingFrontmatter(path.to_path_buf()))?;

        let frontmatter: SkillFrontmatter =
            serde_yaml::from_str(&frontmatter_str).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self {
            frontmatter,
            body: body.trim().to_string(),
        })
    }
}

/// Split content into frontmatter and body
fn split_frontmatter(content: &str) -> Option<(String, String)> {
    let content = content.trim_start();
    let rest = content.strip_prefix("---")?;
    let end = rest.find("\n---")?;
    let frontmatter = rest[..end].trim().to_string();
    let body = rest[end + 4..].to_string();
    Some((frontmatter, body))
}

/// Loads skills and commands from a plugins directory
pub struct PluginLoader {
    plugins_dir: PathBuf,
    skill_cache: Mutex<HashMap<String, Skill>>,
    command_cache: Mutex<HashMap<String, String>>,
}

impl PluginLoader {
    /// Create a loader rooted at the given plugins directory
    #[must_use]
    pub fn new(plugins_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugins_dir: plugins_dir.into(),
            skill_cache: Mutex::new(HashMap::new()),
            command_cache: Mutex::new(HashMap::new()),
        }
    }

    /// The configured plugins directory
    #[must_use]
    pub fn plugins_dir(&self) -> &Path {
        &self.plugins_dir
    }

    /// Load one skill, caching the parsed result
    pub fn load_skill(&self, plugin: &str, skill: &str) -> Result<Skill> {
        let cache_key = format!("{}:{}", plugin, skill);
        {
            let cache = lock(&self.skill_cache);
            if let Some(cached) = cache.get(&cache_key) {
                return Ok(cached.clone());
            }
        }

        let path = self
            .plugins_dir
            .join(plugin)
            .join("skills")
            .join(skill)
            .join("SKILL.md");
        if !path.exists() {
            return Err(Error::SkillNotFound {
                plugin: plugin.to_string(),
                skill: skill.to_string(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let parsed = Skill::parse(&content, &path)?;
        debug!(plugin, skill, "Loaded skill");

        lock(&self.skill_cache).insert(cache_key, parsed.clone());
        Ok(parsed)
    }

    /// Load one command's markdown content, caching the result
    pub fn load_command(&self, plugin: &str, command: &str) -> Result<String> {
        let cache_key = format!("{}:{}", plugin, command);
        {
            let cache = lock(&self.command_cache);
            if let Some(cached) = cache.get(&cache_key) {
                return Ok(cached.clone());
            }
        }

        let path = self
            .plugins_dir
            .join(plugin)
            .join("commands")
            .join(format!("{}.md", command));
        if !path.exists() {
            return Err(Error::CommandNotFound {
                plugin: plugin.to_string(),
                command: command.to_string(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        lock(&self.command_cache).insert(cache_key, content.clone());
        Ok(content)
    }

    /// Frontmatter summary of one skill
    pub fn skill_summary(&self, plugin: &str, skill: &str) -> Result<SkillFrontmatter> {
        Ok(self.load_skill(plugin, skill)?.frontmatter)
    }

    /// List skill names available in a plugin
    ///
    /// A skill is a directory under `<plugin>/skills/` containing a
    /// SKILL.md. Missing plugin directories yield an empty list.
    #[must_use]
    pub fn list_skills(&self, plugin: &str) -> Vec<String> {
        let skills_dir = self.plugins_dir.join(plugin).join("skills");
        let mut skills = Vec::new();

        let Ok(entries) = std::fs::read_dir(&skills_dir) else {
            return skills;
        };
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() && path.join("SKILL.md").exists() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    skills.push(name.to_string());
                }
            }
        }

        skills.sort();
        skills
    }

    /// List command names available in a plugin
    #[must_use]
    pub fn list_commands(&self, plugin: &str) -> Vec<String> {
        let commands_dir = self.plugins_dir.join(plugin).join("commands");
        let mut commands = Vec::new();

        let Ok(entries) = std::fs::read_dir(&commands_dir) else {
            return commands;
        };
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("md") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    commands.push(stem.to_string());
                }
            }
        }

        commands.sort();
        commands
    }

    /// Combine skills from the given plugins into one prompt section
    ///
    /// When `skills` is `None`, every skill in each plugin is included.
    /// Skills that fail to load are skipped with a warning so one bad file
    /// cannot break prompt assembly for a whole specialist.
    #[must_use]
    pub fn combined_skills(&self, plugins: &[&str], skills: Option<&[&str]>) -> String {
        let mut sections = Vec::new();

        for plugin in plugins {
            let names: Vec<String> = match skills {
                Some(selected) => selected.iter().map(|s| (*s).to_string()).collect(),
                None => self.list_skills(plugin),
            };

            for name in &names {
                match self.load_skill(plugin, name) {
                    Ok(skill) => {
                        sections.push(format!("\n--- {}/{} Skill ---\n", plugin, name));
                        sections.push(skill.body);
                    }
                    Err(e) => {
                        warn!(plugin, skill = %name, error = %e, "Could not load skill");
                    }
                }
            }
        }

        sections.join("\n")
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_skill(root: &Path, plugin: &str, skill: &str, content: &str) {
        let dir = root.join(plugin).join("skills").join(skill);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("SKILL.md"), content).unwrap();
    }

    fn write_command(root: &Path, plugin: &str, command: &str, content: &str) {
        let dir = root.join(plugin).join("commands");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{}.md", command)), content).unwrap();
    }

    const TASK_SKILL: &str = r#"---
name: task-triage
description: Prioritize incoming tasks
---

# Task Triage

Rank tasks by urgency and impact.
"#;

    #[test]
    fn test_parse_skill() {
        let skill = Skill::parse(TASK_SKILL, Path::new("/test/SKILL.md")).unwrap();
        assert_eq!(skill.frontmatter.name, "task-triage");
        assert_eq!(skill.frontmatter.description, "Prioritize incoming tasks");
        assert!(skill.body.starts_with("# Task Triage"));
    }

    #[test]
    fn test_parse_missing_frontmatter() {
        let result = Skill::parse("# No frontmatter\n", Path::new("/test/SKILL.md"));
        assert!(matches!(result, Err(Error::MissingFrontmatter(_))));
    }

    #[test]
    fn test_parse_extra_fields() {
        let content = "---\nname: x\ndescription: y\nauthor: someone\n---\n\nBody.";
        let skill = Skill::parse(content, Path::new("/test/SKILL.md")).unwrap();
        assert!(skill.frontmatter.extra.contains_key("author"));
    }

    #[test]
    fn test_load_and_cache_skill() {
        let dir = TempDir::new().unwrap();
        write_skill(dir.path(), "productivity", "task-triage", TASK_SKILL);

        let loader = PluginLoader::new(dir.path());
        let skill = loader.load_skill("productivity", "task-triage").unwrap();
        assert_eq!(skill.frontmatter.name, "task-triage");

        let summary = loader.skill_summary("productivity", "task-triage").unwrap();
        assert_eq!(summary.description, "Prioritize incoming tasks");

        // Second load is served from cache even if the file disappears
        std::fs::remove_file(
            dir.path()
                .join("productivity/skills/task-triage/SKILL.md"),
        )
        .unwrap();
        assert!(loader.load_skill("productivity", "task-triage").is_ok());
    }

    #[test]
    fn test_load_skill_not_found() {
        let dir = TempDir::new().unwrap();
        let loader = PluginLoader::new(dir.path());
        let result = loader.load_skill("productivity", "nope");
        assert!(matches!(result, Err(Error::SkillNotFound { .. })));
    }

    #[test]
    fn test_list_skills_and_commands() {
        let dir = TempDir::new().unwrap();
        write_skill(dir.path(), "writing", "tone", "---\nname: tone\ndescription: d\n---\nx");
        write_skill(dir.path(), "writing", "brevity", "---\nname: brevity\ndescription: d\n---\nx");
        write_command(dir.path(), "writing", "draft-email", "Draft an email.");

        let loader = PluginLoader::new(dir.path());
        assert_eq!(loader.list_skills("writing"), vec!["brevity", "tone"]);
        assert_eq!(loader.list_commands("writing"), vec!["draft-email"]);
        assert!(loader.list_skills("missing").is_empty());
    }

    #[test]
    fn test_load_command() {
        let dir = TempDir::new().unwrap();
        write_command(dir.path(), "writing", "draft-email", "Draft an email.");

        let loader = PluginLoader::new(dir.path());
        let content = loader.load_command("writing", "draft-email").unwrap();
        assert_eq!(content, "Draft an email.");

        let missing = loader.load_command("writing", "nope");
        assert!(matches!(missing, Err(Error::CommandNotFound { .. })));
    }

    #[test]
    fn test_combined_skills() {
        let dir = TempDir::new().unwrap();
        write_skill(dir.path(), "productivity", "task-triage", TASK_SKILL);
        write_skill(
            dir.path(),
            "productivity",
            "scheduling",
            "---\nname: scheduling\ndescription: d\n---\nBlock focus time first.",
        );

        let loader = PluginLoader::new(dir.path());
        let combined = loader.combined_skills(&["productivity"], None);

        assert!(combined.contains("--- productivity/scheduling Skill ---"));
        assert!(combined.contains("--- productivity/task-triage Skill ---"));
        assert!(combined.contains("Block focus time first."));
    }

    #[test]
    fn test_combined_skills_skips_broken() {
        let dir = TempDir::new().unwrap();
        write_skill(dir.path(), "p", "good", TASK_SKILL);
        write_skill(dir.path(), "p", "broken", "no frontmatter at all");

        let loader = PluginLoader::new(dir.path());
        let combined = loader.combined_skills(&["p"], None);
        assert!(combined.contains("--- p/good Skill ---"));
        assert!(combined.contains("Rank tasks by urgency"));
        assert!(!combined.contains("no frontmatter at all"));
    }
}
