use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimelineError {
    #[error("marker index {index} is outside 0..{slide_count}")]
    InvalidIndex { index: usize, slide_count: usize },
    #[error("scrollable distance must be positive and finite, got {total}")]
    DegenerateRange { total: f64 },
    #[error("scroll offset is not a finite number")]
    NonFiniteOffset,
    #[error("viewport width must be non-negative, got {width}")]
    OutOfRangeWidth { width: i64 },
    #[error("marker spacing must be positive and finite, got {spacing}")]
    InvalidSpacing { spacing: f64 },
    #[error("a timeline needs at least one slide")]
    InvalidSlideCount,
    #[error("slide set is empty")]
    EmptySlideSet,
    #[error("invalid slide file: {0}")]
    InvalidSlideFile(String),
}
