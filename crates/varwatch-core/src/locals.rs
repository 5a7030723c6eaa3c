//! # Theme locals
//!
//! Watchers read their colors, font and texture names from a thread-local
//! `Theme` instead of hard-coding them. Override for a block of work with
//! `with_theme`:
//!
//! ```rust
//! use varwatch_core::*;
//!
//! let dark = Theme {
//!     label: Color::WHITE,
//!     ..Theme::default()
//! };
//!
//! with_theme(dark, || {
//!     assert_eq!(theme().label, Color::WHITE);
//! });
//! assert_eq!(theme().label, Color::BLACK);
//! ```
//!
//! Stage geometry (scale, origin, minimum panel size, row height) is fixed and
//! lives next to the code that uses it, not here.

use std::cell::RefCell;

use crate::{Color, Font};

thread_local! {
    static THEME_STACK: RefCell<Vec<Theme>> = const { RefCell::new(Vec::new()) };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub font: Font,
    pub label: Color,
    pub value: Color,

    pub variable_badge: Color,
    pub answer_badge: Color,
    pub timer_badge: Color,
    pub timer_badge_stroke: Color,
    pub timer_background: Color,
    pub outline: Color,

    pub slider_track: Color,
    pub slider_thumb: Color,

    pub scrollbar_thumb: Color,
    pub row_index: Color,
    pub row_value: Color,

    pub pill_texture: &'static str,
    pub list_texture: &'static str,
    pub list_value_texture: &'static str,
    pub resize_handle_sprite: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: Font::default(),
            label: Color::BLACK,
            value: Color::WHITE,

            variable_badge: Color::from_u32(0x1bafea),
            answer_badge: Color::from_u32(0xe457dc),
            timer_badge: Color::from_u32(0xffbb14),
            timer_badge_stroke: Color::from_u32(0xffa500),
            timer_background: Color::WHITE,
            outline: Color::from_u32(0xa0a1a1),

            slider_track: Color::from_u32(0xa0a1a1),
            slider_thumb: Color::from_u32(0x1bafea),

            scrollbar_thumb: Color::from_u32(0xaaaaaa),
            row_index: Color::BLACK,
            row_value: Color::from_u32(0xeeeeee),

            pill_texture: "vars/var_bg",
            list_texture: "vars/list_bg",
            list_value_texture: "vars/list_value_box",
            resize_handle_sprite: "vars/list_resize_handle",
        }
    }
}

/// Runs `f` with `theme` installed; the previous theme is restored even if `f` unwinds.
pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            THEME_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    THEME_STACK.with(|st| st.borrow_mut().push(theme));
    let _guard = Guard;
    f()
}

pub fn theme() -> Theme {
    THEME_STACK.with(|st| st.borrow().last().cloned().unwrap_or_default())
}
