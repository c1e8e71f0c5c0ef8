// SPDX-License-Identifier: GPL-3.0-only

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::Widget;
use iced::advanced::widget::tree::Tree;
use iced::mouse::{self, Cursor};
use iced::widget::text::{LineHeight, Shaping, Wrapping};
use iced::{Border, event};
use iced::{Color, Element, Length, Point, Rectangle, Size};

use paginate_core::{ControlItem, Markup};
use paginate_utils::pagination::PaginationAction;

/// A custom Pager widget.
///
/// Draws a rendered pagination markup in two rows:
/// - Row 0: [Previous, Next]
/// - Row 1: the "X to Y of Z" summary, left aligned.
///
/// Disabled controls are greyed out but still clickable, the callbacks decide
/// what a click means.
pub struct Pager<Message: 'static> {
    previous: ControlItem,
    next: ControlItem,
    summary: String,
    on_previous: Box<dyn Fn() -> Message>,
    on_next: Box<dyn Fn() -> Message>,
    button_width: f32,
    button_height: f32,
    spacing: f32,
    summary_width: f32,
    summary_height: f32,
}

impl<Message> Pager<Message> {
    /// Create a new Pager showing `markup`, with click callbacks.
    pub fn new(
        markup: &Markup,
        on_previous: impl Fn() -> Message + 'static,
        on_next: impl Fn() -> Message + 'static,
    ) -> Self {
        Self {
            previous: markup.previous.clone(),
            next: markup.next.clone(),
            summary: markup.summary.clone(),
            on_previous: Box::new(on_previous),
            on_next: Box::new(on_next),
            button_width: 100.0,
            button_height: 36.0,
            spacing: 6.0,
            summary_width: 220.0,
            summary_height: 24.0,
        }
    }

    fn width(&self) -> f32 {
        (2.0 * self.button_width + self.spacing).max(self.summary_width)
    }

    fn height(&self) -> f32 {
        self.button_height + self.spacing + self.summary_height
    }

    fn control(&self, action: PaginationAction) -> &ControlItem {
        match action {
            PaginationAction::Previous => &self.previous,
            PaginationAction::Next => &self.next,
        }
    }

    fn control_bounds(&self, bounds: Rectangle, action: PaginationAction) -> Rectangle {
        let column = match action {
            PaginationAction::Previous => 0.0,
            PaginationAction::Next => 1.0,
        };

        Rectangle {
            x: bounds.x + column * (self.button_width + self.spacing),
            y: bounds.y,
            width: self.button_width,
            height: self.button_height,
        }
    }

    fn summary_bounds(&self, bounds: Rectangle) -> Rectangle {
        Rectangle {
            x: bounds.x,
            y: bounds.y + self.button_height + self.spacing,
            width: bounds.width,
            height: self.summary_height,
        }
    }

    /// Returns the control under `position`, if any
    fn control_at(&self, bounds: Rectangle, position: Point) -> Option<&ControlItem> {
        [PaginationAction::Previous, PaginationAction::Next]
            .into_iter()
            .find(|action| self.control_bounds(bounds, *action).contains(position))
            .map(|action| self.control(action))
    }
}

impl<Message: 'static, Theme, Renderer> Widget<Message, Theme, Renderer> for Pager<Message>
where
    Renderer: iced::advanced::Renderer + iced::advanced::text::Renderer<Font = iced::Font>,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        _limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(Size::new(self.width(), self.height()))
    }

    fn draw(
        &self,
        _state: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        use iced::Font;
        use iced::advanced::Text;
        use iced::alignment::{Horizontal, Vertical};

        let bounds = layout.bounds();
        let text_size = 16.0;
        let font = Font::default();

        for item in [&self.previous, &self.next] {
            let rect = self.control_bounds(bounds, item.action);

            let (background, foreground) = if item.disabled {
                (Color::from_rgb(0.97, 0.97, 0.97), Color::from_rgb(0.6, 0.6, 0.6))
            } else {
                (Color::from_rgb(0.9, 0.9, 0.9), Color::BLACK)
            };

            renderer.fill_quad(
                renderer::Quad {
                    bounds: rect,
                    border: Border {
                        color: foreground,
                        width: 1.0,
                        radius: 3.0.into(),
                    },
                    ..renderer::Quad::default()
                },
                background,
            );

            let text: Text<String> = Text {
                content: item.label.clone(),
                bounds: rect.size(),
                size: text_size.into(),
                line_height: LineHeight::default(),
                font,
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                shaping: Shaping::Advanced,
                wrapping: Wrapping::None,
            };

            renderer.fill_text(text, rect.center(), foreground, bounds);
        }

        let rect = self.summary_bounds(bounds);
        let text = Text {
            content: self.summary.clone(),
            bounds: rect.size(),
            size: text_size.into(),
            line_height: LineHeight::default(),
            font,
            horizontal_alignment: Horizontal::Left,
            vertical_alignment: Vertical::Center,
            shaping: Shaping::Basic,
            wrapping: Wrapping::None,
        };

        renderer.fill_text(
            text,
            Point::new(rect.x, rect.center_y()),
            Color::BLACK,
            bounds,
        );
    }

    fn on_event(
        &mut self,
        _state: &mut Tree,
        event: iced::Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn iced::advanced::Clipboard,
        shell: &mut iced::advanced::Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position() {
                if let Some(item) = self.control_at(layout.bounds(), position) {
                    let message = match item.action {
                        PaginationAction::Previous => (self.on_previous)(),
                        PaginationAction::Next => (self.on_next)(),
                    };
                    shell.publish(message);
                    return event::Status::Captured;
                }
            }
        }
        event::Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _state: &Tree,
        layout: Layout<'_>,
        cursor_position: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(position) = cursor_position.position() else {
            return mouse::Interaction::default();
        };

        match self.control_at(layout.bounds(), position) {
            Some(item) if item.disabled => mouse::Interaction::NotAllowed,
            Some(_) => mouse::Interaction::Pointer,
            None => mouse::Interaction::default(),
        }
    }
}

impl<Message: 'static, Theme, Renderer> From<Pager<Message>>
    for Element<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer + iced::advanced::text::Renderer<Font = iced::Font>,
{
    fn from(pager: Pager<Message>) -> Self {
        Element::new(pager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paginate_core::Labels;

    fn pager(previous_disabled: bool) -> Pager<PaginationAction> {
        let mut markup = Markup::new(&Labels::default());
        markup.previous.disabled = previous_disabled;
        markup.summary = String::from("1 to 10 of 5");
        Pager::new(
            &markup,
            || PaginationAction::Previous,
            || PaginationAction::Next,
        )
    }

    fn bounds(pager: &Pager<PaginationAction>) -> Rectangle {
        Rectangle {
            x: 10.0,
            y: 20.0,
            width: pager.width(),
            height: pager.height(),
        }
    }

    #[test]
    fn clicks_map_to_the_control_under_the_cursor() {
        let pager = pager(false);
        let bounds = bounds(&pager);

        let previous = pager.control_at(bounds, Point::new(15.0, 25.0));
        assert_eq!(previous.map(|item| item.action), Some(PaginationAction::Previous));

        let next = pager.control_at(bounds, Point::new(10.0 + 100.0 + 6.0 + 1.0, 25.0));
        assert_eq!(next.map(|item| item.action), Some(PaginationAction::Next));
    }

    #[test]
    fn gap_and_summary_row_are_not_controls() {
        let pager = pager(false);
        let bounds = bounds(&pager);

        // between the two buttons
        assert!(pager.control_at(bounds, Point::new(10.0 + 103.0, 25.0)).is_none());
        // on the summary line
        assert!(pager.control_at(bounds, Point::new(15.0, 20.0 + 36.0 + 6.0 + 5.0)).is_none());
        // outside the widget
        assert!(pager.control_at(bounds, Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn disabled_state_is_carried_from_the_markup() {
        let pager = pager(true);
        let bounds = bounds(&pager);
        let previous = pager.control_at(bounds, Point::new(15.0, 25.0)).unwrap();
        assert!(previous.disabled);
        assert!(!pager.control(PaginationAction::Next).disabled);
        assert_eq!(pager.summary, "1 to 10 of 5");
    }

    #[test]
    fn summary_row_sits_below_the_buttons() {
        let pager = pager(false);
        let summary = pager.summary_bounds(bounds(&pager));
        assert_eq!(summary.y, 20.0 + 36.0 + 6.0);
        assert_eq!(summary.width, pager.width());
        assert_eq!(pager.width(), 220.0);
    }
}
