pub const WIDE_BREAKPOINT_PX: f64 = 768.0;

/// Which of the two section layouts is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Linear stack, every item with its own viewport.
    Compact,
    /// Sticky scrollytelling driven by page scroll.
    Wide,
}

impl LayoutMode {
    pub fn from_width(width: f64) -> Self {
        if width >= WIDE_BREAKPOINT_PX {
            LayoutMode::Wide
        } else {
            LayoutMode::Compact
        }
    }

    /// Reads the current window width; `None` before the window is usable.
    pub fn current() -> Option<Self> {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        Some(Self::from_width(width))
    }

    pub fn is_wide(self) -> bool {
        self == LayoutMode::Wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_for_wide() {
        assert_eq!(LayoutMode::from_width(320.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(767.9), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(768.0), LayoutMode::Wide);
        assert!(LayoutMode::from_width(1440.0).is_wide());
    }
}
