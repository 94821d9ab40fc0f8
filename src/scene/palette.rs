//! Alchemist palette shared by the portal and dashboard scenes.

use crate::render::Color;

pub const OBSIDIAN: Color = Color::from_rgb8(0x1a, 0x1a, 0x1a);
pub const RUNE_BLACK: Color = Color::from_rgb8(0x0a, 0x0a, 0x0a);
pub const NIGHT: Color = Color::from_rgb8(0x0a, 0x05, 0x10);
pub const DUSK: Color = Color::from_rgb8(0x1a, 0x0a, 0x20);
pub const AMBIENT_PURPLE: Color = Color::from_rgb8(0x2a, 0x1a, 0x3a);
pub const ANTIQUE_GOLD: Color = Color::from_rgb8(0xc9, 0xa2, 0x27);
pub const GOLD: Color = Color::from_rgb8(0xff, 0xd7, 0x00);
pub const CREAM: Color = Color::from_rgb8(0xff, 0xec, 0xd2);
pub const IVORY: Color = Color::from_rgb8(0xff, 0xfe, 0xf0);
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
pub const TEAL: Color = Color::from_rgb8(0x14, 0xb8, 0xa6);
pub const VIOLET: Color = Color::from_rgb8(0x8b, 0x5c, 0xf6);
