//! Text measurement for watchers.
//!
//! Layout only ever needs one number per string: its rendered single-line
//! width. [`TextMeasure`] is that seam. Two implementations ship here:
//!
//! - [`ShapedMeasure`] shapes with cosmic-text against the system font
//!   database and memoizes widths per `(text, font)`.
//! - [`ApproxMeasure`] and [`FixedMeasure`] estimate widths from grapheme
//!   counts. Headless runs and tests use them.
//!
//! Truncation works on grapheme clusters, so the helpers at the bottom of this
//! file never split a cluster.

use std::{
    collections::HashMap,
    hash::{Hash, Hasher},
    rc::Rc,
};

use ahash::AHasher;
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use unicode_segmentation::UnicodeSegmentation;
use varwatch_core::Font;

pub trait TextMeasure {
    /// Rendered width in pixels of `text` on a single line.
    fn text_width(&self, text: &str, font: &Font) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        (**self).text_width(text, font)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for Rc<T> {
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        (**self).text_width(text, font)
    }
}

/// Width estimate: `graphemes * px * em_ratio`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxMeasure {
    pub em_ratio: f32,
}

impl Default for ApproxMeasure {
    fn default() -> Self {
        Self { em_ratio: 0.6 }
    }
}

impl TextMeasure for ApproxMeasure {
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        grapheme_len(text) as f32 * font.px * self.em_ratio
    }
}

/// Every grapheme is `advance` pixels wide regardless of font.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMeasure {
    pub advance: f32,
}

impl FixedMeasure {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedMeasure {
    fn text_width(&self, text: &str, _font: &Font) -> f32 {
        grapheme_len(text) as f32 * self.advance
    }
}

const WIDTH_CACHE_LIMIT: usize = 4096;

struct Engine {
    fs: FontSystem,
    widths: HashMap<u64, f32>,
}

static ENGINE: OnceCell<Mutex<Engine>> = OnceCell::new();

fn engine() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| {
        log::debug!("loading system fonts for text measurement");
        Mutex::new(Engine {
            fs: FontSystem::new(),
            widths: HashMap::new(),
        })
    })
}

fn width_key(text: &str, font: &Font) -> u64 {
    let mut h = AHasher::default();
    text.hash(&mut h);
    font.family.hash(&mut h);
    font.px.to_bits().hash(&mut h);
    h.finish()
}

/// Shaped measurement through cosmic-text. The font system is process-wide and
/// loaded on first use.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapedMeasure;

impl TextMeasure for ShapedMeasure {
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let key = width_key(text, font);
        let mut eng = engine().lock();
        if let Some(&w) = eng.widths.get(&key) {
            return w;
        }

        let mut buf = Buffer::new(&mut eng.fs, Metrics::new(font.px, font.px * 1.3));
        {
            let mut b = buf.borrow_with(&mut eng.fs);
            b.set_size(None, None);
            let attrs = Attrs::new().family(Family::Name(font.family.as_ref()));
            b.set_text(text, &attrs, Shaping::Advanced, None);
            b.shape_until_scroll(true);
        }
        let width = buf
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0f32, f32::max);

        if eng.widths.len() >= WIDTH_CACHE_LIMIT {
            eng.widths.clear();
        }
        eng.widths.insert(key, width);
        width
    }
}

pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// The first `n` graphemes of `text`.
pub fn take_graphemes(text: &str, n: usize) -> &str {
    match text.grapheme_indices(true).nth(n) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// `text` without its last `n` graphemes. Empty when `n` covers everything.
pub fn drop_last_graphemes(text: &str, n: usize) -> &str {
    let len = grapheme_len(text);
    take_graphemes(text, len.saturating_sub(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_helpers() {
        assert_eq!(take_graphemes("abcdef", 3), "abc");
        assert_eq!(take_graphemes("ab", 3), "ab");
        assert_eq!(drop_last_graphemes("abcdef", 3), "abc");
        assert_eq!(drop_last_graphemes("ab", 3), "");

        // thumbs up + skin tone is a single cluster
        let t = "A\u{1F44D}\u{1F3FD}B";
        assert_eq!(grapheme_len(t), 3);
        assert_eq!(take_graphemes(t, 2), "A\u{1F44D}\u{1F3FD}");
        assert_eq!(drop_last_graphemes(t, 2), "A");
    }

    #[test]
    fn test_fixed_measure() {
        let m = FixedMeasure::new(7.0);
        let font = Font::default();
        assert_eq!(m.text_width("", &font), 0.0);
        assert_eq!(m.text_width("abc", &font), 21.0);
        assert_eq!(m.text_width("A\u{1F44D}\u{1F3FD}", &font), 14.0);
    }

    #[test]
    fn test_approx_measure_scales_with_font() {
        let m = ApproxMeasure::default();
        let small = Font::new("NanumGothic", 10.0);
        let large = Font::new("NanumGothic", 20.0);
        assert!((m.text_width("abcd", &small) - 24.0).abs() < 1e-4);
        assert!((m.text_width("abcd", &large) - 48.0).abs() < 1e-4);
    }

    #[test]
    fn test_measure_through_rc() {
        let m: Rc<dyn TextMeasure> = Rc::new(FixedMeasure::new(5.0));
        assert_eq!(m.text_width("hello", &Font::default()), 25.0);
    }

    #[test]
    fn test_width_key_distinguishes_fonts() {
        let a = width_key("x", &Font::new("A", 10.0));
        let b = width_key("x", &Font::new("A", 11.0));
        let c = width_key("x", &Font::new("B", 10.0));
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, width_key("x", &Font::new("A", 10.0)));
    }
}
