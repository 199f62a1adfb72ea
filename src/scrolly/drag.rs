//! Drag-to-scroll for the device frame.
//!
//! Mouse and touch both feed [`DragScroll`] through [`DragInput`]; the
//! controller itself never touches the DOM. It answers "what should the
//! frame's scrollTop be now" and the component writes it.

use web_sys::{MouseEvent, TouchEvent};

/// Vertical drag distance is multiplied by this before it is applied.
pub const DRAG_AMPLIFICATION: f64 = 1.5;

/// A pointer position from either input modality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragInput {
    Mouse { page_y: f64 },
    Touch { page_y: f64 },
}

impl DragInput {
    pub fn from_mouse(event: &MouseEvent) -> Self {
        DragInput::Mouse { page_y: event.page_y() as f64 }
    }

    /// `None` when the event carries no active touch point.
    pub fn from_touch(event: &TouchEvent) -> Option<Self> {
        event
            .touches()
            .get(0)
            .map(|touch| DragInput::Touch { page_y: touch.page_y() as f64 })
    }

    pub fn page_y(&self) -> f64 {
        match *self {
            DragInput::Mouse { page_y } | DragInput::Touch { page_y } => page_y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Gesture {
    start_pointer: f64,
    start_scroll: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragScroll {
    gesture: Option<Gesture>,
}

impl DragScroll {
    /// Begins a gesture. `frame_top` is the frame's offsetTop and
    /// `scroll_top` its current scroll offset. A start while a gesture is
    /// already running replaces it.
    pub fn start(&mut self, input: DragInput, frame_top: f64, scroll_top: f64) {
        self.gesture = Some(Gesture {
            start_pointer: input.page_y() - frame_top,
            start_scroll: scroll_top,
        });
    }

    /// Scroll offset the frame should take for this move, or `None` when no
    /// gesture is active.
    pub fn move_to(&self, input: DragInput, frame_top: f64) -> Option<f64> {
        let gesture = self.gesture?;
        let pointer = input.page_y() - frame_top;
        let delta = (pointer - gesture.start_pointer) * DRAG_AMPLIFICATION;
        Some(gesture.start_scroll - delta)
    }

    /// Ends the gesture; `false` when none was running.
    pub fn end(&mut self) -> bool {
        self.gesture.take().is_some()
    }
}
