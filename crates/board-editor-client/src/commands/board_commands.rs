use super::{BoardCommand, CommandContext};
use crate::Endpoint;
use async_trait::async_trait;
use board_editor_core::{BoardEditorError, BoardEditorResult, Cardinality};
use board_editor_domain::{Board, BoardId};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

// Entries stay untyped; only the matching one has to carry a usable id and link.
#[derive(Deserialize)]
struct BoardListing {
    #[serde(default)]
    values: Vec<Value>,
}

#[derive(Deserialize)]
struct BoardDetails {
    id: BoardId,
    name: String,
    #[serde(rename = "self")]
    self_uri: Url,
}

#[derive(Deserialize)]
struct CopiedBoard {
    id: BoardId,
    name: String,
}

fn malformed(context: &str, body: &str, message: impl Into<String>) -> BoardEditorError {
    BoardEditorError::Decode {
        context: context.to_string(),
        body: body.to_string(),
        message: message.into(),
    }
}

/// Look up the kanban board whose name matches exactly. Anything other than
/// a single match is an error.
pub struct FindBoard {
    pub name: String,
}

impl FindBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn cardinality_error(&self, cardinality: Cardinality, body: &str) -> BoardEditorError {
        BoardEditorError::LookupCardinality {
            cardinality,
            key: "name".to_string(),
            value: self.name.clone(),
            response: body.to_string(),
        }
    }
}

#[async_trait]
impl BoardCommand for FindBoard {
    type Output = Board;

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<Board> {
        let endpoint = Endpoint::agile()
            .segment("board")
            .query("type", "kanban")
            .query("name", &self.name);
        let response = context
            .transport
            .get(&endpoint)
            .await?
            .error_for_status(|| self.description())?;
        let listing: BoardListing = response.json("board listing")?;

        // The service filters by substring; only an exact, case-sensitive match counts.
        let mut matches = listing
            .values
            .iter()
            .filter(|entry| entry.get("name").and_then(Value::as_str) == Some(self.name.as_str()));
        let found = match (matches.next(), matches.next()) {
            (Some(entry), None) => entry,
            (None, _) => return Err(self.cardinality_error(Cardinality::None, &response.body)),
            (Some(_), Some(_)) => {
                return Err(self.cardinality_error(Cardinality::Duplicate, &response.body))
            }
        };

        let id: BoardId = found.get("id").and_then(Value::as_u64).ok_or_else(|| {
            malformed("board listing", &response.body, "matching entry has no numeric id")
        })?;
        let self_uri = found.get("self").and_then(Value::as_str).ok_or_else(|| {
            malformed("board listing", &response.body, "matching entry has no self link")
        })?;
        let canonical_uri = Url::parse(self_uri)
            .map_err(|e| malformed("board listing", &response.body, format!("bad self link: {e}")))?;

        Ok(Board::new(id, canonical_uri, self.name.clone()))
    }

    fn description(&self) -> String {
        format!("Find board '{}'", self.name)
    }
}

/// Fetch a single board by id.
pub struct GetBoard {
    pub board_id: BoardId,
}

#[async_trait]
impl BoardCommand for GetBoard {
    type Output = Board;

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<Board> {
        let endpoint = Endpoint::agile().segment("board").segment(self.board_id);
        let response = context
            .transport
            .get(&endpoint)
            .await?
            .error_for_status(|| self.description())?;
        let details: BoardDetails = response.json("board")?;
        Ok(Board::new(details.id, details.self_uri, details.name))
    }

    fn description(&self) -> String {
        format!("Get board {}", self.board_id)
    }
}

pub struct DeleteBoard {
    pub board_id: BoardId,
}

#[async_trait]
impl BoardCommand for DeleteBoard {
    type Output = ();

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<()> {
        let endpoint = Endpoint::greenhopper()
            .segment("rapidview")
            .segment(self.board_id);
        context
            .transport
            .delete(&endpoint)
            .await?
            .error_for_status(|| self.description())?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete board {}", self.board_id)
    }
}

/// Copy a board. The service picks the copy's name; `name_hint` is not sent.
pub struct CopyBoard {
    pub source: Board,
    pub name_hint: String,
}

#[async_trait]
impl BoardCommand for CopyBoard {
    type Output = Board;

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<Board> {
        let endpoint = Endpoint::greenhopper()
            .segment("rapidview")
            .segment(self.source.id)
            .segment("copy");
        let response = context
            .transport
            .put(&endpoint, &json!({}))
            .await?
            .error_for_status(|| self.description())?;
        let copy: CopiedBoard = response.json("copied board")?;
        debug!(
            hint = %self.name_hint,
            assigned = %copy.name,
            "Copy name hint is not sent to the service"
        );

        Ok(Board::new(copy.id, self.source.sibling_uri(copy.id), copy.name))
    }

    fn description(&self) -> String {
        format!("Copy board {} ('{}')", self.source.id, self.source.name)
    }
}
