use super::super::super::messages::Message;
use super::super::super::state::{App, TIMELINE_SCROLL_ID};
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::window;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SnapScroll(offset) => {
                if !self.variant.is_scroll_driven() {
                    return Task::none();
                }
                iced::widget::scrollable::snap_to(TIMELINE_SCROLL_ID.clone(), offset)
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    _status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. })
        | Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn map(event: window::Event) -> Option<Message> {
        runtime_event_to_message(
            Event::Window(event),
            event::Status::Ignored,
            window::Id::unique(),
        )
    }

    #[test]
    fn opened_window_reports_its_real_size() {
        let message = map(window::Event::Opened {
            position: None,
            size: Size::new(900.0, 640.0),
        });
        assert!(matches!(
            message,
            Some(Message::WindowResized { width, height }) if width == 900.0 && height == 640.0
        ));
    }

    #[test]
    fn resize_maps_to_window_resized() {
        let message = map(window::Event::Resized(Size::new(400.0, 700.0)));
        assert!(matches!(
            message,
            Some(Message::WindowResized { width, height }) if width == 400.0 && height == 700.0
        ));
    }

    #[test]
    fn unrelated_window_events_are_dropped() {
        assert!(map(window::Event::Focused).is_none());
    }
}
