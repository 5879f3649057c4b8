use crate::commands::{
    AddJqlSwimlane, BoardCommand, CommandContext, CopyBoard, DeleteBoard, DeleteCustomSwimlanes,
    FindBoard, GetBoard, ListCustomSwimlanes, SetSwimlaneStrategy,
};
use crate::{HttpTransport, Transport};
use board_editor_core::{BoardEditorResult, EditorConfig};
use board_editor_domain::{
    creation_order, Board, BoardId, RemoteSwimlane, SwimlaneSpec, SwimlaneStrategy,
};
use tracing::{debug, info};

/// Board and swimlane operations against one remote service and project.
///
/// Each call is a strictly sequential run of round trips; nothing is retried and
/// nothing is rolled back when a later step fails.
pub struct BoardCommands<T: Transport = HttpTransport> {
    transport: T,
    project_key: String,
}

impl BoardCommands<HttpTransport> {
    pub fn from_config(config: &EditorConfig) -> BoardEditorResult<Self> {
        Ok(Self::new(HttpTransport::new(config)?, config.project_key.clone()))
    }
}

impl<T: Transport> BoardCommands<T> {
    pub fn new(transport: T, project_key: impl Into<String>) -> Self {
        Self {
            transport,
            project_key: project_key.into(),
        }
    }

    pub async fn run<C: BoardCommand>(&self, command: C) -> BoardEditorResult<C::Output> {
        let description = command.description();
        info!("{description}");
        let context = CommandContext {
            transport: &self.transport,
            project_key: &self.project_key,
        };
        command.execute(&context).await.inspect_err(|e| {
            debug!("{description} failed: {e}");
        })
    }

    pub async fn find_board(&self, name: &str) -> BoardEditorResult<Board> {
        self.run(FindBoard::new(name)).await
    }

    pub async fn get_board(&self, board_id: BoardId) -> BoardEditorResult<Board> {
        self.run(GetBoard { board_id }).await
    }

    pub async fn delete_board(&self, board_id: BoardId) -> BoardEditorResult<()> {
        self.run(DeleteBoard { board_id }).await
    }

    /// Copies `source`. The service names the copy itself, so the returned
    /// board's name need not match `target_name_hint`.
    pub async fn copy_board(
        &self,
        source: &Board,
        target_name_hint: &str,
    ) -> BoardEditorResult<Board> {
        self.run(CopyBoard {
            source: source.clone(),
            name_hint: target_name_hint.to_string(),
        })
        .await
    }

    pub async fn set_swimlane_strategy(
        &self,
        board: &Board,
        strategy: SwimlaneStrategy,
    ) -> BoardEditorResult<()> {
        self.run(SetSwimlaneStrategy {
            board_id: board.id,
            strategy,
        })
        .await
    }

    pub async fn list_custom_swimlanes(
        &self,
        board: &Board,
    ) -> BoardEditorResult<Vec<RemoteSwimlane>> {
        self.run(ListCustomSwimlanes { board_id: board.id }).await
    }

    /// Deletes the board's non-default custom swimlanes and returns them.
    pub async fn delete_custom_swimlanes(
        &self,
        board: &Board,
    ) -> BoardEditorResult<Vec<RemoteSwimlane>> {
        self.run(DeleteCustomSwimlanes { board_id: board.id }).await
    }

    pub async fn add_jql_swimlane(
        &self,
        board: &Board,
        spec: &SwimlaneSpec,
    ) -> BoardEditorResult<()> {
        self.run(AddJqlSwimlane {
            board_id: board.id,
            spec: spec.clone(),
        })
        .await
    }

    /// Creates `specs` so that the board lists them top to bottom in slice order.
    pub async fn apply_swimlanes(
        &self,
        board: &Board,
        specs: &[SwimlaneSpec],
    ) -> BoardEditorResult<()> {
        for spec in creation_order(specs) {
            self.add_jql_swimlane(board, spec).await?;
        }
        Ok(())
    }
}
