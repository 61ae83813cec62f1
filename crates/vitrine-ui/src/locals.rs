//! # Theming
//!
//! A thread-local "composition local" carries the active theme down through
//! whatever is being composed, without threading it through every call:
//!
//! ```rust
//! use vitrine_ui::*;
//!
//! let light = Theme {
//!     surface: Color::from_hex("#FFFFFF"),
//!     on_surface: Color::from_hex("#222222"),
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     // every default part composed here reads the light theme
//! });
//! ```
//!
//! Default parts read `theme().muted` for secondary text and
//! `theme().error` for failure views; they never hard-code colors.

use std::cell::RefCell;

use crate::Color;

/// Semantic colors read by the default composition parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub surface: Color,
    pub on_surface: Color,
    /// Secondary text: author lines, captions.
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: Color::from_hex("#121212"),
            on_surface: Color::from_hex("#EDEDED"),
            muted: Color::from_hex("#808080"),
            accent: Color::from_hex("#3B82F6"),
            error: Color::from_hex("#CF6679"),
        }
    }
}

thread_local! {
    static THEME_STACK: RefCell<Vec<Theme>> = const { RefCell::new(Vec::new()) };
}

/// Makes `theme` ambient for the duration of `f`.
pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    // Frame guard ensures the pop also happens on unwind.
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

/// The innermost ambient theme, or the default one.
pub fn theme() -> Theme {
    THEME_STACK.with(|st| st.borrow().last().copied().unwrap_or_default())
}
