// SPDX-License-Identifier: GPL-3.0-only

pub const GLOBAL_SPACING: f32 = 6.;
pub const TEXT_SIZE: f32 = 16.;
pub const TITLE_TEXT_SIZE: f32 = 25.;
pub const INPUT_WIDTH: f32 = 140.;
pub const MAX_ROWS: usize = 100;
