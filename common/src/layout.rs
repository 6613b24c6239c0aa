//! Data-driven static layouts.
//!
//! A [`Layout`] is a background color plus a table of [`LayoutItem`]s. The
//! fixed screens of the demo are plain `const` tables (see
//! [`crate::screens`]) rendered by the one generic [`render_layout`] routine.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::scene::{Opacity, Scene};
use crate::styles::Font;

/// One entry of a static layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutItem {
    /// Text label with its top-left corner at `position`.
    Label {
        text: &'static str,
        position: Point,
        color: Rgb565,
        font: Font,
        /// Opaque label background, if any.
        background: Option<Rgb565>,
    },
    /// Solid filled rectangle.
    Fill { area: Rectangle, color: Rgb565 },
}

impl LayoutItem {
    /// Body-font label without a background.
    pub const fn label(
        text: &'static str,
        x: i32,
        y: i32,
        color: Rgb565,
    ) -> Self {
        Self::Label {
            text,
            position: Point::new(x, y),
            color,
            font: Font::Body,
            background: None,
        }
    }

    /// Heading-font label without a background.
    pub const fn heading(
        text: &'static str,
        x: i32,
        y: i32,
        color: Rgb565,
    ) -> Self {
        Self::Label {
            text,
            position: Point::new(x, y),
            color,
            font: Font::Heading,
            background: None,
        }
    }

    /// Heading-font label painted over an opaque background.
    pub const fn badge(
        text: &'static str,
        x: i32,
        y: i32,
        color: Rgb565,
        background: Rgb565,
    ) -> Self {
        Self::Label {
            text,
            position: Point::new(x, y),
            color,
            font: Font::Heading,
            background: Some(background),
        }
    }

    pub const fn fill(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb565,
    ) -> Self {
        Self::Fill {
            area: Rectangle::new(Point::new(x, y), Size::new(width, height)),
            color,
        }
    }
}

/// A complete static screen.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub background: Rgb565,
    pub items: &'static [LayoutItem],
}

/// Build a layout in the scene: set the background, then create one widget
/// per item in table order.
///
/// Returns the number of widgets created, which is less than
/// `layout.items.len()` only if the scene ran out of widget slots.
pub fn render_layout(
    scene: &mut Scene,
    layout: &Layout,
) -> usize {
    scene.set_background(layout.background);

    let mut created = 0;
    for item in layout.items {
        let placed = match *item {
            LayoutItem::Label {
                text,
                position,
                color,
                font,
                background,
            } => scene.create_label(text, color).map(|id| {
                scene.modify(id, |w| {
                    w.set_font(font);
                    w.set_pos(position);
                    if let Some(bg) = background {
                        w.set_bg_color(bg);
                        w.set_bg_opa(Opacity::Cover);
                    }
                });
            }),
            LayoutItem::Fill { area, color } => scene.add_filled_rect(area, color).map(|_| ()),
        };
        if placed.is_some() {
            created += 1;
        }
    }
    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, NAVY, RED, WHITE};
    use crate::config::SCREEN_SIZE;
    use crate::scene::WidgetKind;

    const ITEMS: [LayoutItem; 3] = [
        LayoutItem::label("Hello", 4, 8, WHITE),
        LayoutItem::fill(0, 100, 50, 20, RED),
        LayoutItem::badge("MODE", 90, 165, BLACK, WHITE),
    ];

    const SAMPLE: Layout = Layout {
        background: NAVY,
        items: &ITEMS,
    };

    #[test]
    fn test_render_layout_creates_one_widget_per_item() {
        let mut scene = Scene::new(SCREEN_SIZE);
        assert_eq!(render_layout(&mut scene, &SAMPLE), 3);
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.background(), NAVY);
    }

    #[test]
    fn test_label_item_is_positioned() {
        let mut scene = Scene::new(SCREEN_SIZE);
        render_layout(&mut scene, &SAMPLE);

        let label = scene.widgets()[0];
        assert_eq!(label.text(), Some("Hello"));
        assert_eq!(label.position(), Point::new(4, 8));
        assert_eq!(label.bg_opa(), Opacity::Transparent);
    }

    #[test]
    fn test_fill_item_is_opaque_rect() {
        let mut scene = Scene::new(SCREEN_SIZE);
        render_layout(&mut scene, &SAMPLE);

        let rect = scene.widgets()[1];
        assert_eq!(rect.kind(), WidgetKind::Rect);
        assert_eq!(rect.bounds(), Rectangle::new(Point::new(0, 100), Size::new(50, 20)));
        assert_eq!(rect.bg_color(), RED);
        assert_eq!(rect.bg_opa(), Opacity::Cover);
        assert_eq!(rect.border_width(), 0);
    }

    #[test]
    fn test_badge_item_uses_heading_font_and_background() {
        let mut scene = Scene::new(SCREEN_SIZE);
        render_layout(&mut scene, &SAMPLE);

        let badge = scene.widgets()[2];
        assert_eq!(badge.size(), Font::Heading.text_size("MODE"));
        assert_eq!(badge.bg_color(), WHITE);
        assert_eq!(badge.bg_opa(), Opacity::Cover);
    }

    #[test]
    fn test_render_layout_stops_counting_when_scene_is_full() {
        let mut scene = Scene::new(SCREEN_SIZE);
        for _ in 0..crate::config::MAX_WIDGETS - 1 {
            scene.create_rect();
        }
        assert_eq!(render_layout(&mut scene, &SAMPLE), 1);
    }
}
