use serde::Serialize;
use url::Url;

pub type BoardId = u64;

/// A kanban board (a "rapid view") as known to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub id: BoardId,
    pub canonical_uri: Url,
    pub name: String,
}

impl Board {
    pub fn new(id: BoardId, canonical_uri: Url, name: impl Into<String>) -> Self {
        Self {
            id,
            canonical_uri,
            name: name.into(),
        }
    }

    /// This board's URI with the final path segment replaced by `id`.
    pub fn sibling_uri(&self, id: BoardId) -> Url {
        let mut uri = self.canonical_uri.clone();
        if let Ok(mut segments) = uri.path_segments_mut() {
            segments.pop_if_empty().pop().push(&id.to_string());
        }
        uri
    }
}
