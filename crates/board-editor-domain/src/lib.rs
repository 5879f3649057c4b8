pub mod board;
pub mod strategy;
pub mod swimlane;
pub mod swimlane_sets;

pub use board::{Board, BoardId};
pub use strategy::SwimlaneStrategy;
pub use swimlane::{creation_order, RemoteSwimlane, SwimlaneId, SwimlaneSpec};
pub use swimlane_sets::{load_swimlane_file, SwimlaneSet};
