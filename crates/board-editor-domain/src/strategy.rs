use serde::Serialize;
use std::fmt;

/// Which dimension a board partitions its swimlanes by.
///
/// Each variant maps to the `swimlaneStrategyId` value the remote service
/// expects. Only query-based swimlanes are managed here; the remote service
/// also knows `parentChild`, `epic` and `assignee`, which can be added as
/// variants without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum SwimlaneStrategy {
    #[serde(rename = "custom")]
    Queries,
}

impl SwimlaneStrategy {
    pub const fn wire_value(self) -> &'static str {
        match self {
            SwimlaneStrategy::Queries => "custom",
        }
    }
}

impl fmt::Display for SwimlaneStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}
