use board_editor_core::{BoardEditorError, BoardEditorResult};
use serde::{Deserialize, Serialize};

pub type SwimlaneId = u64;

/// One desired query-defined swimlane.
///
/// Name and query are checked when the value is built, so an invalid spec
/// never reaches the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSwimlaneSpec")]
pub struct SwimlaneSpec {
    name: String,
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawSwimlaneSpec {
    name: String,
    query: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawSwimlaneSpec> for SwimlaneSpec {
    type Error = BoardEditorError;

    fn try_from(raw: RawSwimlaneSpec) -> Result<Self, Self::Error> {
        SwimlaneSpec::new(raw.name, raw.query, raw.description)
    }
}

impl SwimlaneSpec {
    pub fn new(
        name: impl Into<String>,
        query: impl Into<String>,
        description: Option<String>,
    ) -> BoardEditorResult<Self> {
        let name = name.into();
        let query = query.into();

        if name.trim().is_empty() {
            return Err(BoardEditorError::Validation(format!(
                "swimlane name must not be empty (query: '{query}')"
            )));
        }
        if query.trim().is_empty() {
            return Err(BoardEditorError::Validation(format!(
                "swimlane '{name}' must have a query"
            )));
        }

        Ok(Self {
            name,
            query,
            description,
        })
    }

    /// A lane holding every issue of one component.
    pub fn for_component(component: &str) -> BoardEditorResult<Self> {
        Self::new(
            component,
            format!("component=\"{component}\""),
            Some(format!("Swimlane for {component}")),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A swimlane currently configured on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteSwimlane {
    pub id: SwimlaneId,
    pub name: String,
    pub is_default: bool,
}

/// Order in which to create `specs` so the board lists them top to bottom.
///
/// The remote service inserts every new swimlane at position 0, so the last
/// desired lane has to be created first.
pub fn creation_order(specs: &[SwimlaneSpec]) -> impl DoubleEndedIterator<Item = &SwimlaneSpec> {
    specs.iter().rev()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let err = SwimlaneSpec::new("", "priority = Blocker", None).unwrap_err();
        assert!(matches!(err, BoardEditorError::Validation(_)));
    }

    #[test]
    fn test_blank_query_rejected() {
        let err = SwimlaneSpec::new("Expedite", "   ", None).unwrap_err();
        assert!(matches!(err, BoardEditorError::Validation(_)));
        assert!(err.to_string().contains("Expedite"));
    }

    #[test]
    fn test_for_component() {
        let spec = SwimlaneSpec::for_component("Clustering").unwrap();
        assert_eq!(spec.name(), "Clustering");
        assert_eq!(spec.query(), "component=\"Clustering\"");
        assert_eq!(spec.description(), Some("Swimlane for Clustering"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: SwimlaneSpec =
            serde_json::from_str(r#"{"name":"Expedite","query":"priority = Blocker"}"#).unwrap();
        assert_eq!(ok.description(), None);

        let bad = serde_json::from_str::<SwimlaneSpec>(r#"{"name":"","query":"x"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_creation_order_is_reversed() {
        let specs = vec![
            SwimlaneSpec::new("A", "a", None).unwrap(),
            SwimlaneSpec::new("B", "b", None).unwrap(),
            SwimlaneSpec::new("C", "c", None).unwrap(),
        ];

        // Replay against a list that always inserts at the head.
        let mut lanes: Vec<&str> = Vec::new();
        for spec in creation_order(&specs) {
            lanes.insert(0, spec.name());
        }

        assert_eq!(lanes, vec!["A", "B", "C"]);
    }
}
