use std::path::Path;

use tracing::info;

use crate::error::DrillError;
use crate::motion::MotionId;
use crate::registry::Registry;

/// Text used when no lesson file is given.
pub const DEFAULT_LESSON: &str = "\
The quick brown fox jumps over the lazy dog.
    Indented lines test ^ and _ against 0.
snake_case stays one word, but dot.separated does not.

Use w, b and e to hop between words; j and k keep your column.
";

/// Everything the trainer needs to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub lesson_name: String,
    pub text: String,
    /// Allow-list of motion keys; `None` enables every built-in.
    pub enabled_motions: Option<Vec<String>>,
}

impl Config {
    /// Read the lesson at `path` (or the built-in one) and parse the
    /// comma-separated `motions` allow-list.
    pub fn load(path: Option<&Path>, motions: Option<&str>) -> Result<Self, DrillError> {
        let (lesson_name, text) = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| DrillError::LessonRead {
                    path: path.display().to_string(),
                    source: e,
                })?;
                let name = path
                    .file_name()
                    .map_or_else(|| "lesson".to_string(), |f| f.to_string_lossy().to_string());
                (name, normalize_line_endings(&raw))
            }
            None => ("[builtin]".to_string(), DEFAULT_LESSON.to_string()),
        };

        let enabled_motions = motions.map(parse_motion_list).transpose()?;
        info!(
            lesson = %lesson_name,
            chars = text.chars().count(),
            restricted = enabled_motions.is_some(),
            "lesson loaded"
        );

        Ok(Self {
            lesson_name,
            text,
            enabled_motions,
        })
    }

    /// Built-in registry, narrowed to the allow-list when one is set.
    pub fn registry(&self) -> Registry {
        let registry = Registry::with_builtins();
        match &self.enabled_motions {
            Some(enabled) => registry.restrict(enabled.as_slice()),
            None => registry,
        }
    }
}

/// Split `h,j,k,l` into keys, rejecting anything that is not a built-in key.
pub fn parse_motion_list(list: &str) -> Result<Vec<String>, DrillError> {
    let keys: Vec<String> = list
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    if keys.is_empty() {
        return Err(DrillError::EmptyMotionList);
    }
    if let Some(bad) = keys.iter().find(|k| MotionId::from_key(k).is_none()) {
        return Err(DrillError::UnknownMotion { key: bad.clone() });
    }
    Ok(keys)
}

fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}
