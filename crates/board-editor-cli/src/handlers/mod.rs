pub mod apply;
pub mod board;
pub mod swimlanes;
