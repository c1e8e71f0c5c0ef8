// SPDX-License-Identifier: GPL-3.0-only

pub mod lifecycle;
pub mod listeners;
pub mod markup;
pub mod widget;

pub use lifecycle::Lifecycle;
pub use listeners::ListenerId;
pub use markup::{ControlItem, Labels, Markup};
pub use widget::PaginationWidget;
