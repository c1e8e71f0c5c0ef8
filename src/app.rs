// SPDX-License-Identifier: GPL-3.0-only

use std::sync::mpsc::{self, Receiver};

use iced::widget::{Column, Row, column, container, text, text_input};
use iced::{Alignment, Length, Task};
use paginate_core::{Labels, Lifecycle, PaginationWidget};
use paginate_utils::attribute::Attribute;
use paginate_utils::pagination::{PaginationAction, PaginationConfig};
use tracing::{debug, info, warn};

use crate::fl;
use crate::paginate::settings::Settings;
use crate::paginate::styling::{
    GLOBAL_SPACING, INPUT_WIDTH, MAX_ROWS, TEXT_SIZE, TITLE_TEXT_SIZE,
};
use crate::paginate::widgets::pager::Pager;

/// Host of a [`PaginationWidget`]: owns the rows being paged through and
/// moves the current page when the widget asks for it.
pub struct Paginate {
    pagination: PaginationWidget,
    events: Receiver<PaginationAction>,
    inputs: AttributeInputs,
    last_error: Option<String>,
}

/// Raw text of the attribute inputs, as typed
#[derive(Debug, Clone, Default)]
struct AttributeInputs {
    current_page: String,
    total_count: String,
    per_page: String,
}

impl AttributeInputs {
    fn from_config(config: &PaginationConfig) -> Self {
        AttributeInputs {
            current_page: config.current_page.to_string(),
            total_count: config.total_count.to_string(),
            per_page: config.per_page.to_string(),
        }
    }

    fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::CurrentPage => &self.current_page,
            Attribute::TotalCount => &self.total_count,
            Attribute::PerPage => &self.per_page,
        }
    }

    fn set(&mut self, attribute: Attribute, value: String) {
        match attribute {
            Attribute::CurrentPage => self.current_page = value,
            Attribute::TotalCount => self.total_count = value,
            Attribute::PerPage => self.per_page = value,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// One of the pager controls was clicked
    Activate(PaginationAction),
    /// One of the attribute inputs was edited
    AttributeInput(Attribute, String),
}

impl Paginate {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let (sender, events) = mpsc::channel();
        let next_sender = sender.clone();

        let mut pagination = PaginationWidget::new()
            .with_labels(Labels {
                previous: fl!("previous"),
                next: fl!("next"),
            })
            .on_next(move || {
                if let Err(err) = next_sender.send(PaginationAction::Next) {
                    warn!(%err, "navigation event dropped");
                }
            })
            .on_previous(move || {
                if let Err(err) = sender.send(PaginationAction::Previous) {
                    warn!(%err, "navigation event dropped");
                }
            });

        let config = PaginationConfig::new(1, settings.total_count, settings.per_page);
        pagination.on_config_changed(config);
        pagination.mount();

        (
            Self {
                pagination,
                events,
                inputs: AttributeInputs::from_config(&config),
                last_error: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Activate(action) => {
                if self.pagination.activate(action) {
                    self.drain_events();
                }
            }
            Message::AttributeInput(attribute, value) => {
                self.last_error = self
                    .pagination
                    .set_attribute(attribute.name(), &value)
                    .err()
                    .map(|err| err.to_string());
                self.inputs.set(attribute, value);
            }
        }

        Task::none()
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        let title = text(fl!("title")).size(TITLE_TEXT_SIZE);

        let pager: iced::Element<'_, Message> = match self.pagination.markup() {
            Some(markup) => Pager::new(
                markup,
                || Message::Activate(PaginationAction::Previous),
                || Message::Activate(PaginationAction::Next),
            )
            .into(),
            None => text("").into(),
        };

        let content = column![
            title,
            self.rows_view(),
            pager,
            self.inputs_view(),
            text(self.last_error.clone().unwrap_or_default()).size(TEXT_SIZE),
        ]
        .spacing(GLOBAL_SPACING)
        .width(Length::Fill);

        container(content)
            .padding(10.)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::GruvboxLight
    }

    /// Reacts to the events the widget dispatched by moving the current page
    fn drain_events(&mut self) {
        while let Ok(action) = self.events.try_recv() {
            self.navigate(action);
        }
    }

    fn navigate(&mut self, action: PaginationAction) {
        let config = self.pagination.config();
        let (Some(current), Some(last)) =
            (config.current_page.number(), config.last_page().number())
        else {
            warn!(%action, ?config, "cannot navigate without a numeric page");
            return;
        };

        let target = match action {
            PaginationAction::Previous => current.checked_sub(1),
            PaginationAction::Next => current.checked_add(1),
        };
        let Some(target) = target.filter(|target| (1..=last).contains(target)) else {
            debug!(%action, current, last, "already at the edge");
            return;
        };

        info!(%action, from = current, to = target, "changing page");
        self.pagination.set_current_page(target);
        self.inputs.current_page = target.to_string();
    }

    //
    // VIEW COMPOSING
    //

    /// Item numbers listed for the current page, at most `MAX_ROWS` of them
    fn page_items(&self) -> Vec<i64> {
        self.pagination
            .config()
            .item_range()
            .into_iter()
            .flatten()
            .take(MAX_ROWS)
            .collect()
    }

    /// Returns the rows of the current page
    fn rows_view(&self) -> iced::Element<'_, Message> {
        let item = fl!("item");
        let rows: Vec<iced::Element<'_, Message>> = self
            .page_items()
            .into_iter()
            .map(|n| text(format!("{item} {n}")).size(TEXT_SIZE).into())
            .collect();

        if rows.is_empty() {
            return container(text(fl!("no-items")).size(TEXT_SIZE))
                .height(Length::Fill)
                .into();
        }

        Column::with_children(rows)
            .spacing(2.)
            .height(Length::Fill)
            .into()
    }

    /// Returns one labeled text input per observed attribute
    fn inputs_view(&self) -> iced::Element<'_, Message> {
        let inputs: Vec<iced::Element<'_, Message>> = Attribute::OBSERVED
            .into_iter()
            .map(|attribute| {
                let label = match attribute {
                    Attribute::CurrentPage => fl!("current-page"),
                    Attribute::TotalCount => fl!("total-count"),
                    Attribute::PerPage => fl!("per-page"),
                };

                column![
                    text(label).size(TEXT_SIZE),
                    text_input(attribute.name(), self.inputs.get(attribute))
                        .on_input(move |value| Message::AttributeInput(attribute, value))
                        .width(INPUT_WIDTH),
                ]
                .spacing(2.)
                .into()
            })
            .collect();

        Row::with_children(inputs)
            .spacing(GLOBAL_SPACING)
            .align_y(Alignment::End)
            .into()
    }
}
