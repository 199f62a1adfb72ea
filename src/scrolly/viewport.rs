use std::collections::HashMap;

use web_sys::{Element, HtmlElement};
use yew::NodeRef;

use super::ContainerMetrics;

/// Scrollable device viewports keyed by item index, created on first use.
#[derive(Default)]
pub struct ViewportRegistry {
    handles: HashMap<usize, NodeRef>,
}

impl ViewportRegistry {
    pub fn handle(&mut self, item: usize) -> NodeRef {
        self.handles.entry(item).or_default().clone()
    }

    /// Scrolls the item's viewport back to the top if it is mounted.
    pub fn reset(&self, item: usize) {
        if let Some(frame) = self.handles.get(&item).and_then(|r| r.cast::<Element>()) {
            frame.set_scroll_top(0);
        }
    }
}

/// Reads the sticky container's position; `None` while it is not mounted.
pub fn container_metrics(container: &NodeRef) -> Option<ContainerMetrics> {
    let element = container.cast::<Element>()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(ContainerMetrics { top: rect.top(), height: rect.height(), viewport_height })
}

/// offsetTop and scrollTop of a mounted frame.
pub fn frame_offsets(frame: &NodeRef) -> Option<(f64, f64)> {
    let element = frame.cast::<HtmlElement>()?;
    Some((element.offset_top() as f64, element.scroll_top() as f64))
}

pub fn set_frame_scroll(frame: &NodeRef, scroll_top: f64) {
    if let Some(element) = frame.cast::<Element>() {
        element.set_scroll_top(scroll_top.round() as i32);
    }
}
