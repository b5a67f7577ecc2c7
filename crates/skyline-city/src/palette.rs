//! Named scene colors.

use skyline_engine::paint::Color;

pub const SKY_BLUE: Color = Color::from_rgb_u8(77, 213, 240);
pub const GRASS_GREEN: Color = Color::from_rgb_u8(26, 176, 56);
pub const DARK_GREEN: Color = Color::from_rgb_u8(27, 81, 45);
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

pub const BRICK_RED: Color = Color::from_rgb_u8(201, 20, 20);
pub const DARK_BLUE: Color = Color::from_rgb_u8(1, 110, 214);
pub const PURPLE: Color = Color::from_rgb_u8(119, 11, 224);

pub const ORANGE: Color = Color::from_rgb_u8(255, 163, 22);
pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
