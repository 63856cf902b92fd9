use super::messages::Message;
use super::state::{
    ACCENT_ACTIVE, ACCENT_IDLE, App, BODY_SIZE_PX, GUIDE_LINE, GUIDE_LINE_PX, LABEL_SIZE_PX,
    MARKER_BORDER_PX, MARKER_BUBBLE_PX, NAV_BAR_HEIGHT_PX, SUBTITLE_SIZE_PX,
    TIMELINE_BAND_HEIGHT_PX, TIMELINE_SCROLL_ID, TITLE_SIZE_PX,
};
use crate::config::{ThemeMode, Variant};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    Row, Space, button, column, container, horizontal_space, row, scrollable, stack, text,
};
use iced::{Background, Border, Color, Element, Length, Theme};
use timeline_core::{MarkerSlot, step_label};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let scene = column![self.slide_panel(), self.timeline_band()]
            .width(Length::Fill)
            .height(Length::Fill);

        // Scroll variants lay an invisible scrollable over the scene; its
        // travel is what drives progress.
        let body: Element<'_, Message> = if self.variant.is_scroll_driven() {
            stack![scene, self.scroll_surface()]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            scene.into()
        };

        column![self.nav_bar(), body].into()
    }

    fn nav_bar(&self) -> Element<'_, Message> {
        let mut tabs = Row::new().spacing(8).align_y(Vertical::Center);
        for variant in Variant::ALL {
            let tab = button(text(variant.to_string()).size(LABEL_SIZE_PX));
            tabs = tabs.push(if variant == self.variant {
                tab.style(button::primary)
            } else {
                tab.style(button::secondary)
                    .on_press(Message::VariantSelected(variant))
            });
        }

        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let progress_label = format!("{:.0}%", self.state().progress.value() * 100.0);

        container(
            row![
                tabs,
                horizontal_space(),
                text(progress_label).size(LABEL_SIZE_PX),
                button(text(theme_label).size(LABEL_SIZE_PX)).on_press(Message::ToggleTheme),
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        )
        .padding([4, 12])
        .width(Length::Fill)
        .height(Length::Fixed(NAV_BAR_HEIGHT_PX))
        .into()
    }

    fn slide_panel(&self) -> Element<'_, Message> {
        let index = self.state().active_index;
        let Some(slide) = self.active_slide() else {
            return Space::new(Length::Fill, Length::Fill).into();
        };

        let copy = column![
            text(step_label(index))
                .size(LABEL_SIZE_PX)
                .color(ACCENT_ACTIVE),
            text(slide.title.as_str()).size(TITLE_SIZE_PX),
            text(slide.subtitle.as_str())
                .size(SUBTITLE_SIZE_PX)
                .color(ACCENT_ACTIVE),
            text(slide.description.as_str()).size(BODY_SIZE_PX),
        ]
        .spacing(12)
        .width(Length::FillPortion(1));

        let image_card = container(
            column![
                text(slide.icon.glyph()).size(TITLE_SIZE_PX * 2.0),
                text(format!("Slide Image {}", index + 1)).size(LABEL_SIZE_PX),
            ]
            .spacing(8)
            .align_x(Horizontal::Center),
        )
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: 0.12,
                ..ACCENT_IDLE
            })),
            border: Border {
                color: ACCENT_IDLE,
                width: 1.0,
                radius: 16.0.into(),
            },
            ..container::Style::default()
        });

        container(
            row![container(copy).align_y(Vertical::Center).height(Length::Fill), image_card]
                .spacing(32),
        )
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn timeline_band(&self) -> Element<'_, Message> {
        let anchor_x = self.anchor().x(self.viewport.width as f64) as f32;
        let spacing = self.spacing.px() as f32;
        let hide_passed = self.hides_passed_markers();

        // Drawable slots form a contiguous run, so one leading gap places
        // the whole row.
        let mut markers = Row::new().height(Length::Fill).align_y(Vertical::Center);
        let mut placed = false;
        for slot in self
            .marker_slots()
            .into_iter()
            .filter(|slot| slot.is_drawable(hide_passed))
        {
            if !placed {
                markers = markers.push(Space::with_width(slot.left.max(0.0) as f32));
                placed = true;
            }
            markers = markers.push(self.marker(&slot, spacing));
        }

        let guide = column![
            Space::with_height(Length::Fill),
            line(Length::Fill, Length::Fixed(GUIDE_LINE_PX)),
            Space::with_height(Length::Fill),
        ];
        let crosshair = row![
            Space::with_width((anchor_x - GUIDE_LINE_PX / 2.0).max(0.0)),
            line(Length::Fixed(GUIDE_LINE_PX), Length::Fill),
        ];

        let caption = self
            .active_slide()
            .map(|slide| {
                format!(
                    "{}  {}",
                    step_label(self.state().active_index),
                    slide.title
                )
            })
            .unwrap_or_default();
        let caption_row = column![
            Space::with_height(Length::Fill),
            row![
                Space::with_width(anchor_x + 12.0),
                text(caption).size(LABEL_SIZE_PX),
            ]
            .height(Length::Fixed(LABEL_SIZE_PX * 2.0)),
        ];

        container(stack![guide, crosshair, markers, caption_row])
            .width(Length::Fill)
            .height(Length::Fixed(TIMELINE_BAND_HEIGHT_PX))
            .clip(true)
            .into()
    }

    /// One marker slot, trimmed to the part of the slot right of the band's
    /// left edge.
    fn marker(&self, slot: &MarkerSlot, spacing: f32) -> Element<'_, Message> {
        let left = slot.left as f32;
        let visible_left = left.max(0.0);
        let width = (left + spacing - visible_left).max(0.0);
        let size = MARKER_BUBBLE_PX * slot.scale;
        let pad = (slot.center as f32 - visible_left - size / 2.0).max(0.0);

        let glyph = self
            .slides
            .get(slot.index)
            .map(|slide| slide.icon.glyph())
            .unwrap_or_default();
        let accent = if slot.active { ACCENT_ACTIVE } else { ACCENT_IDLE };
        let fill = Color {
            a: slot.opacity,
            ..accent
        };
        let bubble = container(text(glyph).size(size * 0.4))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(fill)),
                border: Border {
                    color: Color::WHITE,
                    width: MARKER_BORDER_PX,
                    radius: (size / 2.0).into(),
                },
                text_color: Some(Color::WHITE),
                ..container::Style::default()
            });

        let bubble: Element<'_, Message> = if self.variant.is_scroll_driven() {
            bubble.into()
        } else {
            button(bubble)
                .padding(0)
                .style(button::text)
                .on_press(Message::MarkerClicked(slot.index))
                .into()
        };

        row![Space::with_width(pad), bubble]
            .width(Length::Fixed(width))
            .align_y(Vertical::Center)
            .into()
    }

    fn scroll_surface(&self) -> Element<'_, Message> {
        let pages = self.slides.len() as f32;
        let (content, direction) = match self.variant {
            Variant::Horizontal => (
                Space::new(
                    Length::Fixed(self.viewport.width.max(1.0) * pages),
                    Length::Fill,
                ),
                Direction::Horizontal(Scrollbar::new()),
            ),
            _ => (
                Space::new(
                    Length::Fill,
                    Length::Fixed(self.viewport.body_height() * pages),
                ),
                Direction::Vertical(Scrollbar::new()),
            ),
        };

        scrollable(content)
            .id(TIMELINE_SCROLL_ID.clone())
            .direction(direction)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| {
                let offset = viewport.absolute_offset();
                let bounds = viewport.bounds();
                let content = viewport.content_bounds();
                Message::Scrolled {
                    offset_x: offset.x,
                    offset_y: offset.y,
                    viewport_width: bounds.width,
                    viewport_height: bounds.height,
                    content_width: content.width,
                    content_height: content.height,
                }
            })
            .into()
    }
}

fn line<'a>(width: Length, height: Length) -> Element<'a, Message> {
    container(Space::new(width, height))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(GUIDE_LINE)),
            ..container::Style::default()
        })
        .into()
}
