// SPDX-License-Identifier: GPL-3.0-only

use paginate_utils::attribute::{Attribute, AttributeError, parse_int};
use paginate_utils::pagination::{PageValue, PaginationAction, PaginationConfig};
use tracing::{debug, warn};

use crate::lifecycle::Lifecycle;
use crate::listeners::{ListenerId, Listeners};
use crate::markup::{Labels, Markup};

/// A "showing X to Y of Z" pager with previous/next controls.
///
/// The widget is a view over pagination state owned by its host: activating
/// a control only notifies listeners, it never moves the current page. The
/// host reacts by setting `current-page` again.
///
/// Attribute and config changes made before [`Lifecycle::mount`] are stored
/// and picked up by the initial render.
#[derive(Debug, Default)]
pub struct PaginationWidget {
    config: PaginationConfig,
    labels: Labels,
    markup: Option<Markup>,
    listeners: Listeners,
}

impl PaginationWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Registers a callback for the `next` event
    pub fn on_next(mut self, callback: impl Fn() + Send + 'static) -> Self {
        self.listeners.subscribe(PaginationAction::Next, callback);
        self
    }

    /// Registers a callback for the `previous` event
    pub fn on_previous(mut self, callback: impl Fn() + Send + 'static) -> Self {
        self.listeners.subscribe(PaginationAction::Previous, callback);
        self
    }

    pub fn subscribe(
        &mut self,
        action: PaginationAction,
        callback: impl Fn() + Send + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(action, callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// The rendered tree, `None` while unmounted
    pub fn markup(&self) -> Option<&Markup> {
        self.markup.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.markup.is_some()
    }

    /// Sets one of the observed attributes from its raw markup value.
    ///
    /// Unparseable values are still stored (as `NaN`) and rendered, the error
    /// only reports it. Unknown attribute names leave the widget untouched.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError> {
        let attribute: Attribute = name.parse()?;
        let parsed = parse_int(value);
        debug!(%attribute, value, %parsed, "attribute changed");

        attribute.apply(&mut self.config, parsed);
        self.render();

        if parsed.is_nan() {
            warn!(%attribute, value, "attribute is not a number");
            return Err(AttributeError::NotANumber {
                attribute,
                value: value.to_string(),
            });
        }
        Ok(())
    }

    pub fn set_current_page(&mut self, value: impl Into<PageValue>) {
        self.set_field(Attribute::CurrentPage, value.into());
    }

    pub fn set_total_count(&mut self, value: impl Into<PageValue>) {
        self.set_field(Attribute::TotalCount, value.into());
    }

    pub fn set_per_page(&mut self, value: impl Into<PageValue>) {
        self.set_field(Attribute::PerPage, value.into());
    }

    fn set_field(&mut self, attribute: Attribute, value: PageValue) {
        attribute.apply(&mut self.config, value);
        self.render();
    }

    /// Activates one of the controls, dispatching its event to listeners.
    ///
    /// Disabled controls still dispatch; disabling is visual only. Returns
    /// false when unmounted, as there is no control to activate.
    pub fn activate(&self, action: PaginationAction) -> bool {
        if !self.is_mounted() {
            debug!(%action, "ignoring activation of an unmounted pager");
            return false;
        }

        let invoked = self.listeners.emit(action);
        debug!(%action, invoked, "navigation event dispatched");
        true
    }

    fn render(&mut self) {
        let Some(markup) = self.markup.as_mut() else {
            return;
        };

        markup.summary = self.config.summary();
        markup.control_mut(PaginationAction::Next).disabled = self.config.is_last_page();
        markup.control_mut(PaginationAction::Previous).disabled = self.config.is_first_page();

        debug!(
            summary = %markup.summary,
            previous_disabled = markup.previous.disabled,
            next_disabled = markup.next.disabled,
            "pager rendered"
        );
    }
}

impl Lifecycle for PaginationWidget {
    type Config = PaginationConfig;

    fn mount(&mut self) {
        if self.is_mounted() {
            debug!("pager mounted twice, rebuilding markup");
        }
        self.markup = Some(Markup::new(&self.labels));
        self.render();
    }

    fn on_config_changed(&mut self, config: PaginationConfig) {
        self.config = config;
        self.render();
    }

    fn unmount(&mut self) {
        self.markup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn mounted(current_page: &str, per_page: &str, total_count: &str) -> PaginationWidget {
        let mut widget = PaginationWidget::new();
        widget.mount();
        widget.set_attribute("current-page", current_page).unwrap();
        widget.set_attribute("per-page", per_page).unwrap();
        widget.set_attribute("total-count", total_count).unwrap();
        widget
    }

    fn rendered(widget: &PaginationWidget) -> &Markup {
        widget.markup().expect("widget is mounted")
    }

    #[test]
    fn middle_page_enables_both_controls() {
        let widget = mounted("2", "10", "25");
        let markup = rendered(&widget);
        assert_eq!(markup.summary, "11 to 20 of 25");
        assert!(!markup.next.disabled);
        assert!(!markup.previous.disabled);
    }

    #[test]
    fn last_page_disables_next() {
        let widget = mounted("3", "10", "25");
        let markup = rendered(&widget);
        assert_eq!(markup.summary, "21 to 30 of 25");
        assert!(markup.next.disabled);
        assert!(!markup.previous.disabled);
    }

    #[test]
    fn first_page_disables_previous() {
        let widget = mounted("1", "10", "5");
        let markup = rendered(&widget);
        assert_eq!(markup.summary, "1 to 10 of 5");
        assert!(markup.previous.disabled);
    }

    #[test]
    fn moving_away_from_an_edge_enables_the_control_again() {
        let mut widget = mounted("3", "10", "25");
        widget.set_attribute("current-page", "2").unwrap();
        assert!(!rendered(&widget).next.disabled);

        widget.set_attribute("current-page", "1").unwrap();
        assert!(rendered(&widget).previous.disabled);
        widget.set_attribute("current-page", "2").unwrap();
        assert!(!rendered(&widget).previous.disabled);
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let mut widget = mounted("2", "10", "25");
        let before = rendered(&widget).clone();
        widget.set_attribute("current-page", "2").unwrap();
        widget.on_config_changed(*widget.config());
        assert_eq!(rendered(&widget), &before);
        assert_eq!(rendered(&widget).to_string(), before.to_string());
    }

    #[test]
    fn attributes_before_mount_are_rendered_on_mount() {
        let mut widget = PaginationWidget::new();
        widget.set_attribute("current-page", "2").unwrap();
        widget.set_attribute("total-count", "25").unwrap();
        assert!(widget.markup().is_none());

        widget.mount();
        assert_eq!(rendered(&widget).summary, "11 to 20 of 25");
    }

    #[test]
    fn defaults_render_before_any_attribute() {
        let mut widget = PaginationWidget::new();
        widget.mount();
        let markup = rendered(&widget);
        assert_eq!(markup.summary, "-9 to 0 of 0");
        assert!(markup.next.disabled);
        assert!(!markup.previous.disabled);
    }

    #[test]
    fn invalid_value_is_stored_as_nan_and_reported() {
        let mut widget = mounted("2", "10", "25");
        let err = widget.set_attribute("current-page", "two").unwrap_err();
        assert_eq!(
            err,
            AttributeError::NotANumber {
                attribute: Attribute::CurrentPage,
                value: String::from("two"),
            }
        );

        let markup = rendered(&widget);
        assert_eq!(markup.summary, "NaN to NaN of 25");
        assert!(!markup.next.disabled);
        assert!(!markup.previous.disabled);
    }

    #[test]
    fn unknown_attribute_changes_nothing() {
        let mut widget = mounted("2", "10", "25");
        let before = rendered(&widget).clone();
        let err = widget.set_attribute("page-size", "5").unwrap_err();
        assert_eq!(err, AttributeError::UnknownAttribute(String::from("page-size")));
        assert_eq!(rendered(&widget), &before);
        assert_eq!(widget.config(), &PaginationConfig::new(2, 25, 10));
    }

    #[test]
    fn typed_setters_rerender() {
        let mut widget = PaginationWidget::new();
        widget.mount();
        widget.set_total_count(25);
        widget.set_per_page(5);
        widget.set_current_page(5);
        assert_eq!(rendered(&widget).summary, "21 to 25 of 25");
        assert!(rendered(&widget).next.disabled);
    }

    #[test]
    fn activation_emits_once_and_keeps_the_page() {
        let nexts = Arc::new(AtomicUsize::new(0));
        let previouses = Arc::new(AtomicUsize::new(0));
        let (n, p) = (nexts.clone(), previouses.clone());

        let mut widget = PaginationWidget::new()
            .on_next(move || {
                n.fetch_add(1, Ordering::SeqCst);
            })
            .on_previous(move || {
                p.fetch_add(1, Ordering::SeqCst);
            });
        widget.mount();
        widget.set_attribute("current-page", "2").unwrap();

        assert!(widget.activate(PaginationAction::Next));
        assert_eq!(nexts.load(Ordering::SeqCst), 1);
        assert_eq!(previouses.load(Ordering::SeqCst), 0);
        assert_eq!(widget.config().current_page, PageValue::Number(2));

        assert!(widget.activate(PaginationAction::Previous));
        assert_eq!(nexts.load(Ordering::SeqCst), 1);
        assert_eq!(previouses.load(Ordering::SeqCst), 1);
        assert_eq!(widget.config().current_page, PageValue::Number(2));
    }

    #[test]
    fn disabled_controls_still_dispatch() {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        let mut widget = mounted("1", "10", "5");
        widget.subscribe(PaginationAction::Previous, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });

        assert!(rendered(&widget).previous.disabled);
        assert!(widget.activate(PaginationAction::Previous));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unmounted_widget_dispatches_nothing() {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        let mut widget = PaginationWidget::new().on_next(move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!widget.activate(PaginationAction::Next));
        widget.mount();
        widget.unmount();
        assert!(widget.markup().is_none());
        assert!(!widget.activate(PaginationAction::Next));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        let mut widget = mounted("2", "10", "25");
        let id = widget.subscribe(PaginationAction::Next, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });

        assert!(widget.unsubscribe(id));
        widget.activate(PaginationAction::Next);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn mounting_twice_rebuilds_a_single_markup() {
        let mut widget = mounted("3", "10", "25");
        widget.mount();

        let markup = rendered(&widget);
        assert_eq!(markup.summary, "21 to 30 of 25");
        assert!(markup.next.disabled);
        assert_eq!(markup.to_string().matches("<nav>").count(), 1);
        assert_eq!(markup.to_string().matches("id=\"page-holder\"").count(), 1);
    }

    #[test]
    fn remount_keeps_state_and_uses_labels() {
        let mut widget = PaginationWidget::new().with_labels(Labels {
            previous: String::from("Anterior"),
            next: String::from("Siguiente"),
        });
        widget.on_config_changed(PaginationConfig::new(2, 25, 10));
        widget.mount();
        widget.unmount();
        widget.mount();

        let markup = rendered(&widget);
        assert_eq!(markup.previous.label, "Anterior");
        assert_eq!(markup.next.label, "Siguiente");
        assert_eq!(markup.summary, "11 to 20 of 25");
    }
}
