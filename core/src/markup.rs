// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use paginate_utils::pagination::PaginationAction;

/// Texts shown on the two controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub previous: String,
    pub next: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            previous: String::from("Previous"),
            next: String::from("Next"),
        }
    }
}

/// A list item wrapping one navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlItem {
    pub action: PaginationAction,
    pub label: String,
    pub disabled: bool,
}

impl ControlItem {
    fn new(action: PaginationAction, label: &str) -> Self {
        ControlItem {
            action,
            label: label.to_string(),
            disabled: false,
        }
    }

    pub fn class(&self) -> &'static str {
        if self.disabled {
            "page-item disabled"
        } else {
            "page-item"
        }
    }

    pub fn link_id(&self) -> &'static str {
        match self.action {
            PaginationAction::Previous => "page-previous",
            PaginationAction::Next => "page-next",
        }
    }
}

/// The rendered tree of a mounted widget: a navigation list with the two
/// controls followed by the summary holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub previous: ControlItem,
    pub next: ControlItem,
    pub summary: String,
}

impl Markup {
    /// Instantiates the template: both controls enabled, empty summary
    pub fn new(labels: &Labels) -> Self {
        Markup {
            previous: ControlItem::new(PaginationAction::Previous, &labels.previous),
            next: ControlItem::new(PaginationAction::Next, &labels.next),
            summary: String::new(),
        }
    }

    pub fn control(&self, action: PaginationAction) -> &ControlItem {
        match action {
            PaginationAction::Previous => &self.previous,
            PaginationAction::Next => &self.next,
        }
    }

    pub fn control_mut(&mut self, action: PaginationAction) -> &mut ControlItem {
        match action {
            PaginationAction::Previous => &mut self.previous,
            PaginationAction::Next => &mut self.next,
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<nav>")?;
        writeln!(f, "    <ul class=\"pagination\">")?;
        for item in [&self.previous, &self.next] {
            writeln!(f, "        <li class=\"{}\">", item.class())?;
            writeln!(
                f,
                "            <a class=\"page-link\" id=\"{}\">{}</a>",
                item.link_id(),
                Escaped(&item.label)
            )?;
            writeln!(f, "        </li>")?;
        }
        writeln!(f, "    </ul>")?;
        writeln!(f, "</nav>")?;
        writeln!(f)?;
        write!(
            f,
            "<div style=\"clear: both\" id=\"page-holder\">{}</div>",
            Escaped(&self.summary)
        )
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
