use crate::SwimlaneSpec;
use board_editor_core::{BoardEditorError, BoardEditorResult};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Named swimlane collections shipped with the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwimlaneSet {
    /// Small set for exercising the remote API against a throwaway board.
    Test,
}

impl SwimlaneSet {
    pub const ALL: &'static [SwimlaneSet] = &[SwimlaneSet::Test];

    pub fn name(self) -> &'static str {
        match self {
            SwimlaneSet::Test => "test",
        }
    }

    /// Swimlanes in the order they should appear on the board, top first.
    pub fn specs(self) -> BoardEditorResult<Vec<SwimlaneSpec>> {
        match self {
            SwimlaneSet::Test => Ok(vec![
                SwimlaneSpec::new("Expedite", "priority=\"Blocker\"", None)?,
                SwimlaneSpec::for_component("Component A")?,
                SwimlaneSpec::for_component("Component B")?,
            ]),
        }
    }
}

impl fmt::Display for SwimlaneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SwimlaneSet {
    type Err = BoardEditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|set| set.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|set| set.name()).collect();
                BoardEditorError::Validation(format!(
                    "unknown swimlane set '{s}' (known: {})",
                    known.join(", ")
                ))
            })
    }
}

#[derive(Deserialize)]
struct SwimlaneFile {
    #[serde(default, rename = "swimlane")]
    swimlanes: Vec<SwimlaneSpec>,
}

/// Reads swimlanes from a TOML file of `[[swimlane]]` tables, top lane first.
pub fn load_swimlane_file(path: &Path) -> BoardEditorResult<Vec<SwimlaneSpec>> {
    let content = std::fs::read_to_string(path)?;
    let file: SwimlaneFile = toml::from_str(&content).map_err(|e| {
        BoardEditorError::Validation(format!("{}: {}", path.display(), e.message()))
    })?;

    if file.swimlanes.is_empty() {
        return Err(BoardEditorError::Validation(format!(
            "{} defines no swimlanes",
            path.display()
        )));
    }
    Ok(file.swimlanes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_test_set_order() {
        let specs = SwimlaneSet::Test.specs().unwrap();
        let names: Vec<_> = specs.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Expedite", "Component A", "Component B"]);
        assert_eq!(specs[0].description(), None);
    }

    #[test]
    fn test_parse_set_name() {
        assert_eq!("TEST".parse::<SwimlaneSet>().unwrap(), SwimlaneSet::Test);
        assert!("eap".parse::<SwimlaneSet>().is_err());
    }

    #[test]
    fn test_load_swimlane_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lanes.toml");
        std::fs::write(
            &path,
            r#"
[[swimlane]]
name = "Expedite"
query = "priority = Blocker"

[[swimlane]]
name = "Web"
query = "component = Web"
description = "Web tier"
"#,
        )
        .unwrap();

        let specs = load_swimlane_file(&path).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].description(), Some("Web tier"));
    }

    #[test]
    fn test_load_swimlane_file_rejects_empty_query() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lanes.toml");
        std::fs::write(&path, "[[swimlane]]\nname = \"Web\"\nquery = \"\"\n").unwrap();

        let err = load_swimlane_file(&path).unwrap_err();
        assert!(matches!(err, BoardEditorError::Validation(_)));
    }

    #[test]
    fn test_load_swimlane_file_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lanes.toml");
        std::fs::write(&path, "").unwrap();

        assert!(load_swimlane_file(&path).is_err());
    }
}
