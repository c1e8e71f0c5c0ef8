// SPDX-License-Identifier: GPL-3.0-only

pub mod settings;
pub mod styling;
pub mod widgets;
