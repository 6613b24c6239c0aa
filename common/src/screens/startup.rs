//! Startup message shown once after boot.

use crate::colors::{BLACK, WHITE};
use crate::layout::{Layout, LayoutItem};

const ITEMS: [LayoutItem; 4] = [
    LayoutItem::label("ESP32-2432S028R (CYD)", 20, 30, WHITE),
    LayoutItem::label("Display Test", 20, 60, WHITE),
    LayoutItem::label("Resolution: 240x320", 20, 100, WHITE),
    LayoutItem::label("Driver: ST7789", 20, 120, WHITE),
];

pub const STARTUP: Layout = Layout {
    background: BLACK,
    items: &ITEMS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_SIZE;
    use crate::layout::render_layout;
    use crate::scene::Scene;

    #[test]
    fn test_startup_builds_four_labels() {
        let mut scene = Scene::new(SCREEN_SIZE);
        assert_eq!(render_layout(&mut scene, &STARTUP), 4);
        let texts: Vec<_> = scene.widgets().iter().filter_map(|w| w.text()).collect();
        assert_eq!(
            texts,
            ["ESP32-2432S028R (CYD)", "Display Test", "Resolution: 240x320", "Driver: ST7789"]
        );
    }
}
