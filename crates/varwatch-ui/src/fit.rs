//! Greedy single-line truncation with a `..` suffix.
//!
//! Everything counts grapheme clusters, never bytes.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;
use varwatch_core::Font;
use varwatch_text::{TextMeasure, drop_last_graphemes, grapheme_len, take_graphemes};

pub const ELLIPSIS: &str = "..";

/// Cells sharing this many leading characters share a fitted result.
pub const CELL_KEY_LEN: usize = 150;

/// Smallest prefix a cell starts growing from.
pub const MIN_CELL_PREFIX: usize = 3;

/// Drops `first_drop` graphemes and appends `..`, then keeps dropping three at
/// a time until `fits` accepts the text. Stops at a bare `..` once nothing is
/// left to drop.
fn shrink_until(mut text: String, first_drop: usize, fits: impl Fn(&str) -> bool) -> String {
    let mut drop = first_drop;
    while !fits(&text) {
        let kept = drop_last_graphemes(&text, drop);
        if kept.is_empty() {
            return ELLIPSIS.to_string();
        }
        text = format!("{kept}{ELLIPSIS}");
        drop = 3;
    }
    text
}

/// Fits a list title into `max_width`.
pub fn fit_title(title: &str, max_width: f32, measure: &dyn TextMeasure, font: &Font) -> String {
    let fits = |s: &str| measure.text_width(s, font) <= max_width;
    if fits(title) {
        return title.to_string();
    }
    shrink_until(format!("{title}{ELLIPSIS}"), 3, fits)
}

/// Fits list cells during one layout pass.
///
/// Grows from the longest prefix that fitted so far instead of from scratch,
/// and memoizes per [`CELL_KEY_LEN`]-character prefix. Build a fresh fitter
/// per pass; widths change between passes.
pub struct CellFitter<'a> {
    measure: &'a dyn TextMeasure,
    font: &'a Font,
    max_width: f32,
    prefix_len: usize,
    cache: HashMap<String, String>,
}

impl<'a> CellFitter<'a> {
    pub fn new(measure: &'a dyn TextMeasure, font: &'a Font, max_width: f32) -> Self {
        Self {
            measure,
            font,
            max_width,
            prefix_len: MIN_CELL_PREFIX,
            cache: HashMap::new(),
        }
    }

    fn width(&self, s: &str) -> f32 {
        self.measure.text_width(s, self.font)
    }

    pub fn fit(&mut self, text: &str) -> String {
        let key = take_graphemes(text, CELL_KEY_LEN);
        if let Some(hit) = self.cache.get(key) {
            return hit.clone();
        }

        let fitted = if self.width(text) > self.max_width {
            let graphemes: Vec<&str> = text.graphemes(true).collect();
            let mut n = self.prefix_len.min(graphemes.len());
            let mut grown = graphemes[..n].concat();
            while self.width(&grown) < self.max_width && n < graphemes.len() {
                grown.push_str(graphemes[n]);
                n += 1;
            }
            let max_width = self.max_width;
            shrink_until(grown, 1, |s| self.width(s) <= max_width)
        } else {
            text.to_string()
        };

        self.prefix_len = self.prefix_len.max(grapheme_len(&fitted));
        self.cache.insert(key.to_string(), fitted.clone());
        fitted
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use varwatch_text::FixedMeasure;

    fn font() -> Font {
        Font::default()
    }

    #[test]
    fn test_cell_grows_then_shrinks() {
        let m = FixedMeasure::new(10.0);
        let f = font();
        // room for five characters
        let mut fitter = CellFitter::new(&m, &f, 55.0);
        assert_eq!(fitter.fit("1234567890"), "123..");
    }

    #[test]
    fn test_cell_that_fits_is_untouched() {
        let m = FixedMeasure::new(10.0);
        let f = font();
        let mut fitter = CellFitter::new(&m, &f, 55.0);
        assert_eq!(fitter.fit("12345"), "12345");
        assert_eq!(fitter.fit(""), "");
    }

    #[test]
    fn test_cell_cache_by_prefix() {
        let m = FixedMeasure::new(10.0);
        let f = font();
        let mut fitter = CellFitter::new(&m, &f, 55.0);
        let long_a = format!("{}A", "x".repeat(CELL_KEY_LEN));
        let long_b = format!("{}B", "x".repeat(CELL_KEY_LEN));
        let a = fitter.fit(&long_a);
        let b = fitter.fit(&long_b);
        assert_eq!(a, b);
        assert_eq!(fitter.cached_entries(), 1);
    }

    #[test]
    fn test_cell_prefix_carries_over() {
        let m = FixedMeasure::new(10.0);
        let f = font();
        let mut fitter = CellFitter::new(&m, &f, 55.0);
        assert_eq!(fitter.fit("abcdefghij"), "abc..");
        // starts from the 5-grapheme prefix of the previous fit
        assert_eq!(fitter.fit("klmnopqrst"), "klm..");
    }

    #[test]
    fn test_cell_narrower_than_ellipsis() {
        let m = FixedMeasure::new(10.0);
        let f = font();
        let mut fitter = CellFitter::new(&m, &f, 5.0);
        assert_eq!(fitter.fit("abcdef"), "..");
    }

    #[test]
    fn test_title_fit() {
        let m = FixedMeasure::new(10.0);
        let f = font();
        assert_eq!(fit_title("short", 100.0, &m, &f), "short");
        // each step drops three graphemes, the old ".." among them, then re-appends ".."
        let t = fit_title("abcdefghijkl", 100.0, &m, &f);
        assert_eq!(t, "abcdefgh..");
        assert!(m.text_width(&t, &f) <= 100.0);
    }

    #[test]
    fn test_title_graphemes_stay_whole() {
        let m = FixedMeasure::new(10.0);
        let f = font();
        let title = "\u{1F44D}\u{1F3FD}".repeat(12);
        let t = fit_title(&title, 60.0, &m, &f);
        assert!(t.ends_with(ELLIPSIS));
        assert!(m.text_width(&t, &f) <= 60.0);
        assert_eq!(grapheme_len(&t), 6);
    }

    proptest! {
        #[test]
        fn prop_title_fit_terminates_and_fits(
            title in "[a-zA-Z0-9 ]{0,80}",
            max in 14.0f32..400.0,
        ) {
            let m = FixedMeasure::new(7.0);
            let f = font();
            let t = fit_title(&title, max, &m, &f);
            prop_assert!(m.text_width(&t, &f) <= max);
        }

        #[test]
        fn prop_shrink_steps_strictly_shorten(
            text in "[a-z]{4,60}",
        ) {
            // every step after the first drop removes one grapheme net
            let suffixed = format!("{text}{ELLIPSIS}");
            let kept = drop_last_graphemes(&suffixed, 3);
            let next = format!("{kept}{ELLIPSIS}");
            prop_assert!(grapheme_len(&next) < grapheme_len(&suffixed));
        }

        #[test]
        fn prop_cells_fit_when_room_for_ellipsis(
            cells in proptest::collection::vec("[a-z0-9]{0,40}", 1..20),
            max in 20.0f32..300.0,
        ) {
            let m = FixedMeasure::new(8.0);
            let f = font();
            let mut fitter = CellFitter::new(&m, &f, max);
            for c in &cells {
                let out = fitter.fit(c);
                prop_assert!(m.text_width(&out, &f) <= max, "{c:?} -> {out:?}");
            }
        }
    }
}
