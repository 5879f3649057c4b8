use super::{to_body, BoardCommand, CommandContext};
use crate::Endpoint;
use async_trait::async_trait;
use board_editor_core::{BoardEditorError, BoardEditorResult};
use board_editor_domain::{BoardId, RemoteSwimlane, SwimlaneId, SwimlaneSpec, SwimlaneStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

const SWIMLANES_POINTER: &str = "/swimlanesData/customSwimlanesData/swimlanes";

#[derive(Serialize)]
struct StrategyUpdate {
    id: BoardId,
    #[serde(rename = "swimlaneStrategyId")]
    strategy: SwimlaneStrategy,
}

#[derive(Serialize)]
struct NewSwimlane<'a> {
    name: &'a str,
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Deserialize)]
struct SwimlaneEntry {
    id: SwimlaneId,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "defaultSwimlane")]
    default_swimlane: bool,
}

impl From<SwimlaneEntry> for RemoteSwimlane {
    fn from(entry: SwimlaneEntry) -> Self {
        RemoteSwimlane {
            id: entry.id,
            name: entry.name,
            is_default: entry.default_swimlane,
        }
    }
}

pub struct SetSwimlaneStrategy {
    pub board_id: BoardId,
    pub strategy: SwimlaneStrategy,
}

#[async_trait]
impl BoardCommand for SetSwimlaneStrategy {
    type Output = ();

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<()> {
        let endpoint = Endpoint::greenhopper()
            .segment("rapidviewconfig")
            .segment("swimlaneStrategy");
        let body = to_body(&StrategyUpdate {
            id: self.board_id,
            strategy: self.strategy,
        })?;
        context
            .transport
            .put(&endpoint, &body)
            .await?
            .error_for_status(|| self.description())?;
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Set swimlane strategy of board {} to '{}'",
            self.board_id, self.strategy
        )
    }
}

/// Read the custom swimlanes currently configured on a board, defaults included.
pub struct ListCustomSwimlanes {
    pub board_id: BoardId,
}

#[async_trait]
impl BoardCommand for ListCustomSwimlanes {
    type Output = Vec<RemoteSwimlane>;

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<Vec<RemoteSwimlane>> {
        let endpoint = Endpoint::greenhopper()
            .segment("xboard")
            .segment("work")
            .segment("allData")
            .query("rapidViewId", self.board_id)
            .query("selectedProjectKey", context.project_key);
        let response = context
            .transport
            .get(&endpoint)
            .await?
            .error_for_status(|| self.description())?;
        let data: Value = response.json("board data")?;

        let swimlanes = match data.pointer(SWIMLANES_POINTER) {
            Some(Value::Null) | None => {
                return Err(BoardEditorError::Precondition(format!(
                    "board {} does not use custom swimlanes",
                    self.board_id
                )))
            }
            Some(swimlanes) => swimlanes.clone(),
        };
        let entries: Vec<SwimlaneEntry> =
            serde_json::from_value(swimlanes).map_err(|e| BoardEditorError::Decode {
                context: "custom swimlanes".to_string(),
                body: response.body.clone(),
                message: e.to_string(),
            })?;

        Ok(entries.into_iter().map(RemoteSwimlane::from).collect())
    }

    fn description(&self) -> String {
        format!("List custom swimlanes of board {}", self.board_id)
    }
}

pub struct DeleteSwimlane {
    pub board_id: BoardId,
    pub swimlane: RemoteSwimlane,
}

#[async_trait]
impl BoardCommand for DeleteSwimlane {
    type Output = ();

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<()> {
        let endpoint = Endpoint::greenhopper()
            .segment("swimlanes")
            .segment(self.board_id)
            .segment(self.swimlane.id);
        context
            .transport
            .delete(&endpoint)
            .await?
            .error_for_status(|| self.description())?;
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Delete swimlane {} ({}) from board {}",
            self.swimlane.name, self.swimlane.id, self.board_id
        )
    }
}

/// Delete every non-default custom swimlane of a board, one at a time.
///
/// The first failed deletion stops the run; lanes already deleted stay
/// deleted.
pub struct DeleteCustomSwimlanes {
    pub board_id: BoardId,
}

#[async_trait]
impl BoardCommand for DeleteCustomSwimlanes {
    type Output = Vec<RemoteSwimlane>;

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<Vec<RemoteSwimlane>> {
        let swimlanes = ListCustomSwimlanes {
            board_id: self.board_id,
        }
        .execute(context)
        .await?;

        let mut deleted = Vec::new();
        for swimlane in swimlanes {
            if swimlane.is_default {
                debug!(id = swimlane.id, name = %swimlane.name, "Keeping default swimlane");
                continue;
            }
            let command = DeleteSwimlane {
                board_id: self.board_id,
                swimlane,
            };
            info!("{}", command.description());
            command.execute(context).await?;
            deleted.push(command.swimlane);
        }

        Ok(deleted)
    }

    fn description(&self) -> String {
        format!("Delete custom swimlanes of board {}", self.board_id)
    }
}

pub struct AddJqlSwimlane {
    pub board_id: BoardId,
    pub spec: SwimlaneSpec,
}

#[async_trait]
impl BoardCommand for AddJqlSwimlane {
    type Output = ();

    async fn execute(&self, context: &CommandContext<'_>) -> BoardEditorResult<()> {
        let endpoint = Endpoint::greenhopper()
            .segment("swimlanes")
            .segment(self.board_id);
        let body = to_body(&NewSwimlane {
            name: self.spec.name(),
            query: self.spec.query(),
            description: self.spec.description(),
        })?;
        context
            .transport
            .post(&endpoint, &body)
            .await?
            .error_for_status(|| self.description())?;
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Add swimlane '{}' to board {}",
            self.spec.name(),
            self.board_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use crate::ApiResponse;
    use serde_json::json;

    const ALL_DATA: &str = r#"{
        "swimlanesData": {
            "customSwimlanesData": {
                "swimlanes": [
                    {"id": 11, "name": "Expedite", "query": "priority = Blocker", "defaultSwimlane": false},
                    {"id": 12, "name": "Web", "query": "component = Web", "defaultSwimlane": false},
                    {"id": 13, "name": "Everything Else", "defaultSwimlane": true}
                ]
            }
        }
    }"#;

    fn context(transport: &MockTransport) -> CommandContext<'_> {
        CommandContext {
            transport,
            project_key: "WFLY",
        }
    }

    fn expect_all_data(transport: &mut MockTransport, body: &'static str) {
        transport
            .expect_get()
            .withf(|endpoint: &Endpoint| {
                endpoint.path() == "xboard/work/allData"
                    && endpoint.query_pairs()
                        == [
                            ("rapidViewId".to_string(), "7".to_string()),
                            ("selectedProjectKey".to_string(), "WFLY".to_string()),
                        ]
            })
            .times(1)
            .returning(move |_| Ok(ApiResponse::new(200, body)));
    }

    #[tokio::test]
    async fn test_set_swimlane_strategy_payload() {
        let mut transport = MockTransport::new();
        transport
            .expect_put()
            .withf(|endpoint: &Endpoint, body: &Value| {
                endpoint.path() == "rapidviewconfig/swimlaneStrategy"
                    && *body == json!({"id": 7, "swimlaneStrategyId": "custom"})
            })
            .times(1)
            .returning(|_, _| Ok(ApiResponse::new(200, "{}")));

        SetSwimlaneStrategy {
            board_id: 7,
            strategy: SwimlaneStrategy::Queries,
        }
        .execute(&context(&transport))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_set_swimlane_strategy_failure_keeps_status() {
        let mut transport = MockTransport::new();
        transport
            .expect_put()
            .returning(|_, _| Ok(ApiResponse::new(500, "boom")));

        let err = SetSwimlaneStrategy {
            board_id: 7,
            strategy: SwimlaneStrategy::Queries,
        }
        .execute(&context(&transport))
        .await
        .unwrap_err();

        match err {
            BoardEditorError::RemoteOperation { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_delete_custom_swimlanes_skips_default() {
        let mut transport = MockTransport::new();
        expect_all_data(&mut transport, ALL_DATA);
        transport
            .expect_delete()
            .withf(|endpoint: &Endpoint| endpoint.path() == "swimlanes/7/11")
            .times(1)
            .returning(|_| Ok(ApiResponse::new(204, "")));
        transport
            .expect_delete()
            .withf(|endpoint: &Endpoint| endpoint.path() == "swimlanes/7/12")
            .times(1)
            .returning(|_| Ok(ApiResponse::new(204, "")));

        let deleted = DeleteCustomSwimlanes { board_id: 7 }
            .execute(&context(&transport))
            .await
            .unwrap();

        let names: Vec<_> = deleted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Expedite", "Web"]);
    }

    #[tokio::test]
    async fn test_delete_custom_swimlanes_requires_custom_strategy() {
        let mut transport = MockTransport::new();
        expect_all_data(&mut transport, r#"{"swimlanesData": {"parentChildData": {}}}"#);
        transport.expect_delete().never();

        let err = DeleteCustomSwimlanes { board_id: 7 }
            .execute(&context(&transport))
            .await
            .unwrap_err();

        assert!(matches!(err, BoardEditorError::Precondition(_)));
    }

    #[tokio::test]
    async fn test_delete_custom_swimlanes_stops_at_first_failure() {
        let mut transport = MockTransport::new();
        expect_all_data(&mut transport, ALL_DATA);
        transport
            .expect_delete()
            .withf(|endpoint: &Endpoint| endpoint.path() == "swimlanes/7/11")
            .times(1)
            .returning(|_| Ok(ApiResponse::new(404, "not found")));
        transport
            .expect_delete()
            .withf(|endpoint: &Endpoint| endpoint.path() == "swimlanes/7/12")
            .never();

        let err = DeleteCustomSwimlanes { board_id: 7 }
            .execute(&context(&transport))
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("Expedite (11)"));
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_add_swimlane_omits_missing_description() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .withf(|endpoint: &Endpoint, body: &Value| {
                endpoint.path() == "swimlanes/7"
                    && *body == json!({"name": "Expedite", "query": "priority = Blocker"})
                    && body.get("description").is_none()
            })
            .times(1)
            .returning(|_, _| Ok(ApiResponse::new(200, "{}")));

        AddJqlSwimlane {
            board_id: 7,
            spec: SwimlaneSpec::new("Expedite", "priority = Blocker", None).unwrap(),
        }
        .execute(&context(&transport))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_add_swimlane_sends_description_verbatim() {
        let mut transport = MockTransport::new();
        transport
            .expect_post()
            .withf(|_: &Endpoint, body: &Value| {
                *body
                    == json!({
                        "name": "Web",
                        "query": "component=\"Web\"",
                        "description": "Swimlane for Web"
                    })
            })
            .times(1)
            .returning(|_, _| Ok(ApiResponse::new(201, "{}")));

        AddJqlSwimlane {
            board_id: 7,
            spec: SwimlaneSpec::for_component("Web").unwrap(),
        }
        .execute(&context(&transport))
        .await
        .unwrap();
    }
}
