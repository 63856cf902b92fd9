use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Scrolled {
                offset_x,
                offset_y,
                viewport_width,
                viewport_height,
                content_width,
                content_height,
            } => self.handle_scrolled(
                offset_x,
                offset_y,
                viewport_width,
                viewport_height,
                content_width,
                content_height,
            ),
            Message::MarkerClicked(index) => self.handle_marker_clicked(index),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::VariantSelected(variant) => {
                self.handle_variant_selected(variant, &mut effects);
            }
            Message::ToggleTheme => self.handle_toggle_theme(),
        }

        effects
    }
}
