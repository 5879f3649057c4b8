use crate::error::BoardEditorError;

pub type BoardEditorResult<T> = Result<T, BoardEditorError>;
