//! Retained widget scene.
//!
//! A [`Scene`] is the single screen container of the demo. Screens are built
//! by creating label and rectangle widgets in it; the scene keeps track of the
//! screen area those changes touch and re-renders only that area on the next
//! [`Scene::refresh`], the per-tick housekeeping call of the main loop.
//!
//! # Render Strategy
//!
//! | Change | Invalidated area |
//! |--------|------------------|
//! | Widget created / removed | Widget bounds |
//! | Widget moved / resized | Old and new bounds |
//! | Widget restyled | Widget bounds |
//! | Background changed / `clean()` | Whole screen |
//!
//! Invalid areas merge into one bounding rectangle. `refresh` splits it into
//! bands that fit the [`DrawBuffer`], paints background and widgets in
//! creation order into each band, and hands the band to the [`Flush`]
//! callback.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};
use heapless::Vec;

use crate::colors::{BLACK, WHITE};
use crate::config::MAX_WIDGETS;
use crate::draw_buffer::DrawBuffer;
use crate::flush::Flush;
use crate::styles::Font;

/// Handle to a widget in a [`Scene`]. Stale after the widget is removed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WidgetId(u16);

/// Background opacity of a widget.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Opacity {
    /// Background is not painted.
    #[default]
    Transparent,
    /// Background fully covers what is below.
    Cover,
}

/// What a widget draws on top of its background and border.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WidgetKind {
    Label {
        text: &'static str,
        color: Rgb565,
        font: Font,
    },
    Rect,
}

/// A label or rectangle placed on the scene.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Widget {
    id: WidgetId,
    kind: WidgetKind,
    position: Point,
    size: Size,
    bg_color: Rgb565,
    bg_opa: Opacity,
    border_width: u32,
    border_color: Rgb565,
}

impl Widget {
    fn new(
        id: WidgetId,
        kind: WidgetKind,
    ) -> Self {
        let size = match kind {
            WidgetKind::Label { text, font, .. } => font.text_size(text),
            WidgetKind::Rect => Size::zero(),
        };
        Self {
            id,
            kind,
            position: Point::zero(),
            size,
            bg_color: WHITE,
            bg_opa: Opacity::Transparent,
            border_width: 0,
            border_color: BLACK,
        }
    }

    #[inline]
    pub const fn id(&self) -> WidgetId { self.id }

    #[inline]
    pub const fn kind(&self) -> WidgetKind { self.kind }

    #[inline]
    pub const fn position(&self) -> Point { self.position }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    #[inline]
    pub const fn bg_color(&self) -> Rgb565 { self.bg_color }

    #[inline]
    pub const fn bg_opa(&self) -> Opacity { self.bg_opa }

    #[inline]
    pub const fn border_width(&self) -> u32 { self.border_width }

    /// Screen area covered by the widget.
    #[inline]
    pub const fn bounds(&self) -> Rectangle { Rectangle::new(self.position, self.size) }

    /// Text of a label widget.
    pub const fn text(&self) -> Option<&'static str> {
        match self.kind {
            WidgetKind::Label { text, .. } => Some(text),
            WidgetKind::Rect => None,
        }
    }

    pub fn set_pos(
        &mut self,
        position: Point,
    ) {
        self.position = position;
    }

    pub fn set_size(
        &mut self,
        size: Size,
    ) {
        self.size = size;
    }

    pub fn set_bg_color(
        &mut self,
        color: Rgb565,
    ) {
        self.bg_color = color;
    }

    pub fn set_bg_opa(
        &mut self,
        opa: Opacity,
    ) {
        self.bg_opa = opa;
    }

    pub fn set_border(
        &mut self,
        width: u32,
        color: Rgb565,
    ) {
        self.border_width = width;
        self.border_color = color;
    }

    /// Change a label's text color. No effect on rectangles.
    pub fn set_text_color(
        &mut self,
        new_color: Rgb565,
    ) {
        if let WidgetKind::Label { color, .. } = &mut self.kind {
            *color = new_color;
        }
    }

    /// Change a label's font and resize it to fit. No effect on rectangles.
    pub fn set_font(
        &mut self,
        new_font: Font,
    ) {
        if let WidgetKind::Label { text, font, .. } = &mut self.kind {
            *font = new_font;
            self.size = new_font.text_size(*text);
        }
    }

    /// Draw the widget into a target (normally a [`DrawBuffer`] band).
    fn draw<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let bounds = self.bounds();

        if self.bg_opa == Opacity::Cover {
            target.fill_solid(&bounds, self.bg_color).ok();
        }

        if self.border_width > 0 {
            let style = PrimitiveStyleBuilder::new()
                .stroke_color(self.border_color)
                .stroke_width(self.border_width)
                .stroke_alignment(StrokeAlignment::Inside)
                .build();
            bounds.into_styled(style).draw(target).ok();
        }

        if let WidgetKind::Label { text, color, font } = self.kind {
            let style = MonoTextStyle::new(font.mono_font(), color);
            Text::with_baseline(text, self.position, style, Baseline::Top)
                .draw(target)
                .ok();
        }
    }
}

/// The screen container: background color plus an ordered list of widgets.
pub struct Scene {
    size: Size,
    background: Rgb565,
    widgets: Vec<Widget, MAX_WIDGETS>,
    next_id: u16,
    invalid: Option<Rectangle>,
    clean_count: u32,
}

impl Scene {
    /// Create an empty black scene. The whole screen starts invalid so the
    /// first refresh paints every pixel.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: BLACK,
            widgets: Vec::new(),
            next_id: 0,
            invalid: Some(Rectangle::new(Point::zero(), size)),
            clean_count: 0,
        }
    }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    #[inline]
    pub const fn background(&self) -> Rgb565 { self.background }

    /// Widgets in creation (paint) order.
    #[inline]
    pub fn widgets(&self) -> &[Widget] { &self.widgets }

    #[inline]
    pub fn len(&self) -> usize { self.widgets.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.widgets.is_empty() }

    /// Whether a refresh would flush anything.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.invalid.is_some() }

    /// Screen area pending a redraw.
    #[inline]
    pub const fn invalid_area(&self) -> Option<Rectangle> { self.invalid }

    /// Number of times [`Scene::clean`] has run.
    #[inline]
    pub const fn clean_count(&self) -> u32 { self.clean_count }

    pub fn get(
        &self,
        id: WidgetId,
    ) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Set the screen background color.
    pub fn set_background(
        &mut self,
        color: Rgb565,
    ) {
        if self.background != color {
            self.background = color;
            self.invalidate_all();
        }
    }

    /// Create a label with body font at the origin.
    pub fn create_label(
        &mut self,
        text: &'static str,
        color: Rgb565,
    ) -> Option<WidgetId> {
        self.create(WidgetKind::Label {
            text,
            color,
            font: Font::Body,
        })
    }

    /// Create an unstyled rectangle: zero size, transparent, no border.
    pub fn create_rect(&mut self) -> Option<WidgetId> { self.create(WidgetKind::Rect) }

    /// Create a filled rectangle covering `area`.
    pub fn add_filled_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) -> Option<WidgetId> {
        let id = self.create_rect()?;
        self.modify(id, |w| {
            w.set_pos(area.top_left);
            w.set_size(area.size);
            w.set_bg_color(color);
            w.set_bg_opa(Opacity::Cover);
            w.set_border(0, BLACK);
        });
        Some(id)
    }

    /// Create a widget. Returns `None` when the scene is full.
    pub fn create(
        &mut self,
        kind: WidgetKind,
    ) -> Option<WidgetId> {
        let id = WidgetId(self.next_id);
        let widget = Widget::new(id, kind);
        self.widgets.push(widget).ok()?;
        self.next_id = self.next_id.wrapping_add(1);
        self.invalidate(widget.bounds());
        Some(id)
    }

    /// Apply changes to a widget, invalidating its old and new bounds.
    ///
    /// Returns `false` if the widget no longer exists.
    pub fn modify<F>(
        &mut self,
        id: WidgetId,
        f: F,
    ) -> bool
    where
        F: FnOnce(&mut Widget),
    {
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        let before = widget.bounds();
        f(widget);
        let after = widget.bounds();
        self.invalidate(before);
        self.invalidate(after);
        true
    }

    pub fn set_pos(
        &mut self,
        id: WidgetId,
        position: Point,
    ) -> bool {
        self.modify(id, |w| w.set_pos(position))
    }

    pub fn set_size(
        &mut self,
        id: WidgetId,
        size: Size,
    ) -> bool {
        self.modify(id, |w| w.set_size(size))
    }

    pub fn set_bg_color(
        &mut self,
        id: WidgetId,
        color: Rgb565,
    ) -> bool {
        self.modify(id, |w| w.set_bg_color(color))
    }

    pub fn set_bg_opa(
        &mut self,
        id: WidgetId,
        opa: Opacity,
    ) -> bool {
        self.modify(id, |w| w.set_bg_opa(opa))
    }

    pub fn set_border(
        &mut self,
        id: WidgetId,
        width: u32,
        color: Rgb565,
    ) -> bool {
        self.modify(id, |w| w.set_border(width, color))
    }

    pub fn set_text_color(
        &mut self,
        id: WidgetId,
        color: Rgb565,
    ) -> bool {
        self.modify(id, |w| w.set_text_color(color))
    }

    pub fn set_font(
        &mut self,
        id: WidgetId,
        font: Font,
    ) -> bool {
        self.modify(id, |w| w.set_font(font))
    }

    /// Remove a widget. Returns `false` if it was already gone.
    pub fn remove(
        &mut self,
        id: WidgetId,
    ) -> bool {
        let Some(idx) = self.widgets.iter().position(|w| w.id == id) else {
            return false;
        };
        let widget = self.widgets.remove(idx);
        self.invalidate(widget.bounds());
        true
    }

    /// Remove every widget. The background color is kept.
    pub fn clean(&mut self) {
        self.widgets.clear();
        self.clean_count = self.clean_count.wrapping_add(1);
        self.invalidate_all();
    }

    /// Mark a screen area for redraw.
    pub fn invalidate(
        &mut self,
        area: Rectangle,
    ) {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return;
        }
        self.invalid = Some(match self.invalid {
            Some(current) => union(&current, &area),
            None => area,
        });
    }

    /// Mark the whole screen for redraw.
    pub fn invalidate_all(&mut self) { self.invalid = Some(self.bounding_box()); }

    /// Render the invalid area and flush it band by band.
    ///
    /// Returns the number of bands flushed (0 when nothing changed).
    pub fn refresh<F, const N: usize>(
        &mut self,
        buffer: &mut DrawBuffer<N>,
        target: &mut F,
    ) -> usize
    where
        F: Flush,
    {
        let Some(area) = self.invalid.take() else {
            return 0;
        };
        if N == 0 || area.size.width == 0 || area.size.height == 0 {
            return 0;
        }

        let left = area.top_left.x;
        let top = area.top_left.y;
        let right = left + area.size.width as i32;
        let bottom = top + area.size.height as i32;

        // Band width is the invalid width unless the buffer cannot hold one full row
        let band_width = area.size.width.min(N as u32);
        let band_lines = (N as u32 / band_width).clamp(1, area.size.height);

        let mut flushes = 0;
        let mut y = top;
        while y < bottom {
            let height = band_lines.min((bottom - y) as u32);
            let mut x = left;
            while x < right {
                let width = band_width.min((right - x) as u32);
                let band = Rectangle::new(Point::new(x, y), Size::new(width, height));
                if buffer.begin(band) {
                    self.render_band(buffer);
                    target.flush(&band, buffer.pixels());
                    flushes += 1;
                }
                x += width as i32;
            }
            y += height as i32;
        }
        flushes
    }

    fn render_band<const N: usize>(
        &self,
        buffer: &mut DrawBuffer<N>,
    ) {
        let band = buffer.area();
        buffer.clear(self.background).ok();
        for widget in self.widgets.iter() {
            let overlap = widget.bounds().intersection(&band);
            if overlap.size.width > 0 && overlap.size.height > 0 {
                widget.draw(buffer);
            }
        }
    }
}

impl OriginDimensions for Scene {
    fn size(&self) -> Size { self.size }
}

/// Smallest rectangle containing both `a` and `b`. Both must be non-empty.
fn union(
    a: &Rectangle,
    b: &Rectangle,
) -> Rectangle {
    let left = a.top_left.x.min(b.top_left.x);
    let top = a.top_left.y.min(b.top_left.y);
    let right = (a.top_left.x + a.size.width as i32).max(b.top_left.x + b.size.width as i32);
    let bottom = (a.top_left.y + a.size.height as i32).max(b.top_left.y + b.size.height as i32);
    Rectangle::new(Point::new(left, top), Size::new((right - left) as u32, (bottom - top) as u32))
}

// =============================================================================
// Unit Tests
// =============================================================================
