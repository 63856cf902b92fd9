use iced::widget::scrollable::RelativeOffset;

mod appearance;
mod core;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Effect {
    SnapScroll(RelativeOffset),
}
