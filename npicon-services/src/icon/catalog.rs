//! Builtin icon glyphs.
//!
//! Every routine is authored on a 32 × 32 design grid with a top-left origin
//! and scaled to the real canvas size with integer math. At size 32 the
//! scaling is the identity. Primitives overwrite, so draw order matters:
//! highlights and cut-outs (painted with [Color::TRANSPARENT]) come last.

use nalgebra::Point2;
use npicon_raster::canvas::PixelCanvas;
use npicon_raster::color::Color;
use npicon_raster::primitives;

use crate::icon::id::IconId;
use crate::icon::registry::{IconDescriptor, FALLBACK_ID};

/// Side length of the design grid the glyphs are authored on.
pub const DESIGN_GRID: i32 = 32;

/// Default base colors.
pub mod palette {
    use npicon_raster::color::Color;

    /// Neutral glyphs (toolbar actions, arrows).
    pub const INK: Color = Color::rgb(0x3c, 0x42, 0x4d);
    /// Confirming actions.
    pub const GREEN: Color = Color::rgb(0x2e, 0xa0, 0x4f);
    /// Destructive actions and errors.
    pub const RED: Color = Color::rgb(0xd6, 0x3b, 0x30);
    /// Informational badges and links.
    pub const BLUE: Color = Color::rgb(0x2f, 0x7b, 0xd8);
    /// Warnings.
    pub const AMBER: Color = Color::rgb(0xf2, 0xa9, 0x1c);
    /// Folders and stars.
    pub const GOLD: Color = Color::rgb(0xe8, 0xb3, 0x39);
    /// Documents.
    pub const PAPER: Color = Color::rgb(0xb8, 0xc2, 0xcc);
    /// Media transport and audio.
    pub const TEAL: Color = Color::rgb(0x1f, 0x9e, 0x96);
    /// The missing-icon mark.
    pub const MAGENTA: Color = Color::rgb(0xff, 0x00, 0xff);
}

/// Design-grid painter over a canvas.
struct Sketch<'a> {
    canvas: &'a mut PixelCanvas,
    size: i64,
}

impl<'a> Sketch<'a> {
    fn new(canvas: &'a mut PixelCanvas) -> Self {
        let size = canvas.size() as i64;
        Self { canvas, size }
    }

    /// Map a design-grid coordinate to canvas pixels.
    fn at(&self, v: i32) -> i32 {
        (v as i64 * self.size).div_euclid(DESIGN_GRID as i64) as i32
    }

    /// Map a design-grid length, keeping positive lengths at least one pixel.
    fn len(&self, v: i32) -> i32 {
        if v <= 0 {
            return v;
        }
        self.at(v).max(1)
    }

    fn point(&self, (x, y): (i32, i32)) -> Point2<i32> {
        Point2::new(self.at(x), self.at(y))
    }

    /// Map a span starting at `start`, keeping positive spans at least one pixel.
    fn span(&self, start: i32, len: i32) -> i32 {
        if len <= 0 {
            return len;
        }
        (self.at(start + len) - self.at(start)).max(1)
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Color) {
        let (w, h) = (self.span(x, w), self.span(y, h));
        primitives::filled_rect(self.canvas, self.at(x), self.at(y), w, h, c);
    }

    fn frame(&mut self, x: i32, y: i32, w: i32, h: i32, t: i32, c: Color) {
        let (x0, y0) = (self.at(x), self.at(y));
        let (w, h, t) = (self.span(x, w), self.span(y, h), self.len(t));
        primitives::rect_outline(self.canvas, x0, y0, w, h, t, c);
    }

    fn disc(&mut self, cx: i32, cy: i32, r: i32, c: Color) {
        let (cx, cy, r) = (self.at(cx), self.at(cy), self.len(r));
        primitives::filled_circle(self.canvas, cx, cy, r, c);
    }

    fn ring(&mut self, cx: i32, cy: i32, r: i32, t: i32, c: Color) {
        let (cx, cy, r, t) = (self.at(cx), self.at(cy), self.len(r), self.len(t));
        primitives::circle_outline(self.canvas, cx, cy, r, t, c);
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, t: i32, c: Color) {
        let t = self.len(t);
        let (x0, y0, x1, y1) = (self.at(x0), self.at(y0), self.at(x1), self.at(y1));
        primitives::line(self.canvas, x0, y0, x1, y1, t, c);
    }

    fn polyline(&mut self, points: &[(i32, i32)], t: i32, c: Color) {
        let points: Vec<_> = points.iter().map(|&p| self.point(p)).collect();
        let t = self.len(t);
        primitives::polyline(self.canvas, &points, t, c);
    }

    fn tri(&mut self, a: (i32, i32), b: (i32, i32), p: (i32, i32), c: Color) {
        let (a, b, p) = (self.point(a), self.point(b), self.point(p));
        primitives::filled_triangle(self.canvas, a, b, p, c);
    }
}

type Routine = fn(&mut PixelCanvas, Color);

const BUILTIN: &[(IconId, Color, Routine)] = &[
    (IconId::Check, palette::GREEN, draw_check),
    (IconId::Close, palette::INK, draw_close),
    (IconId::Plus, palette::INK, draw_plus),
    (IconId::Minus, palette::INK, draw_minus),
    (IconId::Save, palette::BLUE, draw_save),
    (IconId::Folder, palette::GOLD, draw_folder),
    (IconId::File, palette::PAPER, draw_file),
    (IconId::Refresh, palette::INK, draw_refresh),
    (IconId::Settings, palette::INK, draw_settings),
    (IconId::Search, palette::INK, draw_search),
    (IconId::Trash, palette::RED, draw_trash),
    (IconId::Lock, palette::GOLD, draw_lock),
    (IconId::Link, palette::BLUE, draw_link),
    (IconId::Home, palette::INK, draw_home),
    (IconId::Star, palette::GOLD, draw_star),
    (IconId::Eye, palette::INK, draw_eye),
    (IconId::ArrowUp, palette::INK, draw_arrow_up),
    (IconId::ArrowDown, palette::INK, draw_arrow_down),
    (IconId::ArrowLeft, palette::INK, draw_arrow_left),
    (IconId::ArrowRight, palette::INK, draw_arrow_right),
    (IconId::ChevronDown, palette::INK, draw_chevron_down),
    (IconId::ChevronRight, palette::INK, draw_chevron_right),
    (IconId::Book, palette::BLUE, draw_book),
    (IconId::Info, palette::BLUE, draw_info),
    (IconId::Question, palette::BLUE, draw_question),
    (IconId::Warning, palette::AMBER, draw_warning),
    (IconId::Error, palette::RED, draw_error),
    (IconId::Play, palette::TEAL, draw_play),
    (IconId::Pause, palette::TEAL, draw_pause),
    (IconId::Stop, palette::TEAL, draw_stop),
    (IconId::Record, palette::RED, draw_record),
    (IconId::Speaker, palette::TEAL, draw_speaker),
    (IconId::Mute, palette::TEAL, draw_mute),
    (IconId::Microphone, palette::TEAL, draw_microphone),
    (IconId::LevelMeter, palette::TEAL, draw_level_meter),
];

/// Descriptors for the whole builtin catalog, in [IconId::BUILTIN] order.
pub fn builtin_descriptors() -> Vec<IconDescriptor> {
    BUILTIN
        .iter()
        .map(|&(id, color, routine)| IconDescriptor::new(id, color, routine))
        .collect()
}

/// The missing-icon mark: a magenta frame crossed by a diagonal.
pub fn fallback_descriptor() -> IconDescriptor {
    IconDescriptor::new(FALLBACK_ID, palette::MAGENTA, draw_fallback)
}

fn draw_fallback(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.frame(4, 4, 24, 24, 2, c);
    s.line(5, 5, 26, 26, 2, c);
}

// ── Editor and toolbar ─────────────────────────────────────────────

fn draw_check(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.line(8, 16, 14, 22, 3, c);
    s.line(14, 22, 24, 10, 3, c);
}

fn draw_close(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.line(9, 9, 23, 23, 3, c);
    s.line(23, 9, 9, 23, 3, c);
}

fn draw_plus(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.rect(14, 7, 4, 18, c);
    s.rect(7, 14, 18, 4, c);
}

fn draw_minus(canvas: &mut PixelCanvas, c: Color) {
    Sketch::new(canvas).rect(7, 14, 18, 4, c);
}

fn draw_save(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.rect(5, 5, 22, 22, c);
    // Metal shutter with its slot
    s.rect(10, 5, 12, 8, c.lighter(0.6));
    s.rect(18, 6, 3, 6, c.darker(0.4));
    // Label
    s.rect(9, 17, 14, 10, c.lighter(0.85));
}

fn draw_folder(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.rect(4, 8, 10, 4, c.darker(0.15));
    s.rect(4, 11, 24, 15, c.darker(0.15));
    s.rect(4, 14, 24, 12, c);
}

fn draw_file(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.rect(8, 4, 12, 24, c);
    s.rect(20, 10, 5, 18, c);
    // Folded corner and text lines
    s.tri((20, 4), (20, 9), (25, 9), c.darker(0.25));
    let ink = c.darker(0.45);
    s.rect(11, 14, 10, 2, ink);
    s.rect(11, 18, 10, 2, ink);
    s.rect(11, 22, 7, 2, ink);
}

fn draw_refresh(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.ring(16, 16, 10, 3, c);
    s.rect(17, 4, 9, 8, Color::TRANSPARENT);
    s.tri((15, 2), (15, 12), (22, 7), c);
}

fn draw_settings(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    // Teeth first, then the wheel over them
    s.rect(14, 3, 4, 26, c);
    s.rect(3, 14, 26, 4, c);
    s.line(8, 8, 24, 24, 4, c);
    s.line(24, 8, 8, 24, 4, c);
    s.disc(16, 16, 9, c);
    s.disc(16, 16, 4, Color::TRANSPARENT);
}

fn draw_search(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.ring(13, 13, 8, 3, c);
    s.line(19, 19, 26, 26, 4, c);
}

fn draw_trash(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.rect(13, 5, 6, 3, c.darker(0.2));
    s.rect(7, 8, 18, 3, c.darker(0.2));
    s.rect(9, 12, 14, 15, c);
    let groove = c.darker(0.35);
    s.rect(12, 14, 2, 11, groove);
    s.rect(18, 14, 2, 11, groove);
}

fn draw_lock(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.ring(16, 12, 7, 3, c.darker(0.3));
    s.rect(8, 14, 16, 13, c);
    let hole = c.darker(0.55);
    s.disc(16, 19, 2, hole);
    s.rect(15, 20, 2, 4, hole);
}

fn draw_link(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.frame(4, 11, 14, 10, 3, c);
    s.frame(14, 11, 14, 10, 3, c.darker(0.25));
}

fn draw_home(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.tri((16, 4), (3, 16), (29, 16), c);
    s.rect(7, 16, 18, 12, c);
    s.rect(14, 20, 5, 8, Color::TRANSPARENT);
}

fn draw_star(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.tri((3, 12), (29, 12), (16, 21), c);
    s.tri((16, 3), (7, 28), (20, 18), c);
    s.tri((16, 3), (25, 28), (12, 18), c);
}

fn draw_eye(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    let white = c.lighter(0.8);
    s.tri((2, 16), (16, 8), (30, 16), white);
    s.tri((2, 16), (16, 24), (30, 16), white);
    s.disc(16, 16, 6, c);
    s.disc(16, 16, 2, c.darker(0.6));
}

fn draw_arrow_up(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.tri((16, 4), (5, 16), (27, 16), c);
    s.rect(12, 16, 8, 12, c);
}

fn draw_arrow_down(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.tri((16, 28), (5, 16), (27, 16), c);
    s.rect(12, 4, 8, 12, c);
}

fn draw_arrow_left(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.tri((4, 16), (16, 5), (16, 27), c);
    s.rect(16, 12, 12, 8, c);
}

fn draw_arrow_right(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.tri((28, 16), (16, 5), (16, 27), c);
    s.rect(4, 12, 12, 8, c);
}

fn draw_chevron_down(canvas: &mut PixelCanvas, c: Color) {
    Sketch::new(canvas).polyline(&[(8, 12), (16, 20), (24, 12)], 3, c);
}

fn draw_chevron_right(canvas: &mut PixelCanvas, c: Color) {
    Sketch::new(canvas).polyline(&[(12, 8), (20, 16), (12, 24)], 3, c);
}

// ── Documentation viewer and dialogs ───────────────────────────────

fn draw_book(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.rect(5, 6, 10, 20, c);
    s.rect(17, 6, 10, 20, c);
    s.rect(15, 5, 2, 22, c.darker(0.4));
    let text = c.lighter(0.6);
    for y in [10, 14, 18] {
        s.rect(7, y, 6, 2, text);
        s.rect(19, y, 6, 2, text);
    }
}

fn draw_info(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.disc(16, 16, 13, c);
    s.rect(14, 14, 4, 10, Color::WHITE);
    s.disc(16, 9, 2, Color::WHITE);
}

fn draw_question(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.disc(16, 16, 13, c);
    s.ring(16, 12, 5, 2, Color::WHITE);
    // Open the lower-left of the hook back up
    s.rect(9, 12, 7, 6, c);
    s.rect(15, 16, 2, 4, Color::WHITE);
    s.disc(16, 23, 1, Color::WHITE);
}

fn draw_warning(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.tri((16, 3), (2, 28), (30, 28), c);
    let mark = c.darker(0.8);
    s.rect(14, 11, 4, 10, mark);
    s.rect(14, 23, 4, 3, mark);
}

fn draw_error(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.disc(16, 16, 13, c);
    s.line(11, 11, 21, 21, 3, Color::WHITE);
    s.line(21, 11, 11, 21, 3, Color::WHITE);
}

// ── Audio monitoring dashboard ─────────────────────────────────────

fn draw_play(canvas: &mut PixelCanvas, c: Color) {
    Sketch::new(canvas).tri((9, 5), (9, 27), (26, 16), c);
}

fn draw_pause(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.rect(8, 6, 6, 20, c);
    s.rect(18, 6, 6, 20, c);
}

fn draw_stop(canvas: &mut PixelCanvas, c: Color) {
    Sketch::new(canvas).rect(7, 7, 18, 18, c);
}

fn draw_record(canvas: &mut PixelCanvas, c: Color) {
    Sketch::new(canvas).disc(16, 16, 10, c);
}

/// Speaker box and cone shared by [draw_speaker] and [draw_mute].
fn speaker_body(s: &mut Sketch<'_>, c: Color) {
    s.rect(4, 12, 6, 8, c);
    s.tri((8, 16), (18, 4), (18, 28), c);
}

fn draw_speaker(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.ring(18, 16, 7, 2, c);
    s.ring(18, 16, 12, 2, c);
    s.rect(0, 0, 19, 32, Color::TRANSPARENT);
    speaker_body(&mut s, c);
}

fn draw_mute(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    speaker_body(&mut s, c);
    s.line(21, 11, 29, 21, 3, c);
    s.line(29, 11, 21, 21, 3, c);
}

fn draw_microphone(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    // Stand arc: lower half of a ring
    s.ring(16, 14, 8, 2, c.darker(0.3));
    s.rect(0, 0, 32, 14, Color::TRANSPARENT);
    // Capsule
    s.disc(16, 8, 4, c);
    s.disc(16, 15, 4, c);
    s.rect(12, 8, 9, 7, c);
    s.rect(15, 22, 2, 5, c.darker(0.3));
    s.rect(10, 27, 12, 2, c.darker(0.3));
}

fn draw_level_meter(canvas: &mut PixelCanvas, c: Color) {
    let mut s = Sketch::new(canvas);
    s.rect(4, 20, 4, 8, c);
    s.rect(10, 15, 4, 13, c);
    s.rect(16, 10, 4, 18, c.lighter(0.25));
    s.rect(22, 5, 4, 23, c.lighter(0.5));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::registry::ShapeRegistry;

    fn render(id: IconId, size: u32) -> PixelCanvas {
        let registry = ShapeRegistry::builtin();
        let mut canvas = PixelCanvas::new(size);
        registry.resolve(id).paint(&mut canvas);
        canvas
    }

    #[test]
    fn test_every_glyph_paints_something() {
        for &id in IconId::BUILTIN {
            for size in [8, 16, 32, 64] {
                let canvas = render(id, size);
                assert!(canvas.painted_count() > 0, "{id} is blank at {size}px");
            }
        }
    }

    #[test]
    fn test_no_glyph_fills_the_whole_canvas() {
        for &id in IconId::BUILTIN {
            let canvas = render(id, 32);
            assert!(canvas.painted_count() < 32 * 32, "{id} covers every pixel");
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let bitmaps: Vec<_> = IconId::BUILTIN
            .iter()
            .map(|&id| render(id, 32).into_bitmap())
            .collect();
        for (i, a) in bitmaps.iter().enumerate() {
            for b in &bitmaps[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_check_glyph_is_two_brush_lines() {
        let canvas = render(IconId::Check, 32);
        let mut expected = PixelCanvas::new(32);
        primitives::line(&mut expected, 8, 16, 14, 22, 3, palette::GREEN);
        primitives::line(&mut expected, 14, 22, 24, 10, 3, palette::GREEN);
        assert_eq!(canvas, expected);
    }

    #[test]
    fn test_design_grid_is_identity_at_32() {
        let mut canvas = PixelCanvas::new(32);
        let s = Sketch::new(&mut canvas);
        for v in [-4, 0, 1, 13, 31, 32] {
            assert_eq!(s.at(v), v);
        }
    }

    #[test]
    fn test_design_grid_scales_down_without_vanishing() {
        let mut canvas = PixelCanvas::new(8);
        let mut s = Sketch::new(&mut canvas);
        assert_eq!(s.at(16), 4);
        assert_eq!(s.len(3), 1);
        s.line(8, 16, 14, 22, 3, Color::BLACK);
        assert!(canvas.painted_count() > 0);
    }

    #[test]
    fn test_cut_outs_are_transparent() {
        let home = render(IconId::Home, 32);
        assert_eq!(home.pixel(16, 24), Color::TRANSPARENT);
        assert_eq!(home.pixel(10, 24), palette::INK);

        let gear = render(IconId::Settings, 32);
        assert_eq!(gear.pixel(16, 16), Color::TRANSPARENT);
    }

    #[test]
    fn test_fallback_glyph() {
        let mut canvas = PixelCanvas::new(32);
        fallback_descriptor().paint(&mut canvas);
        assert_eq!(canvas.pixel(4, 4), palette::MAGENTA);
        assert_eq!(canvas.pixel(16, 16), palette::MAGENTA);
        assert_eq!(canvas.pixel(20, 10), Color::TRANSPARENT);
    }
}
