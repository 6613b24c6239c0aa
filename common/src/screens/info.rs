//! Display information screen.

use crate::colors::{BLACK, WHITE};
use crate::layout::{Layout, LayoutItem};

const ITEMS: [LayoutItem; 6] = [
    LayoutItem::heading("Display Working!", 10, 30, WHITE),
    LayoutItem::heading("Rotation: 2", 10, 60, WHITE),
    LayoutItem::heading("Portrait Flip", 10, 90, WHITE),
    LayoutItem::label("Width: 240", 10, 130, WHITE),
    LayoutItem::label("Height: 320", 10, 150, WHITE),
    LayoutItem::label("Driver: ST7789", 10, 170, WHITE),
];

pub const INFO: Layout = Layout {
    background: BLACK,
    items: &ITEMS,
};
