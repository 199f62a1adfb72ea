//! Page scroll position to active item, for the sticky wide layout.

/// Each item gets this much container height, in viewport heights.
pub const ITEM_HEIGHT_VH: usize = 150;

/// Container geometry as seen from the viewport at one scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerMetrics {
    /// Container top relative to the viewport top (negative once scrolled past).
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveIndexMapper {
    item_count: usize,
    active: usize,
}

impl ActiveIndexMapper {
    pub fn new(item_count: usize) -> Self {
        Self { item_count: item_count.max(1), active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Index the metrics map to, or `None` when the container is not
    /// currently being scrolled through.
    pub fn index_for(&self, metrics: ContainerMetrics) -> Option<usize> {
        let ContainerMetrics { top, height, viewport_height } = metrics;
        if !(top < 0.0 && top.abs() < height) {
            return None;
        }
        let scrollable = height - viewport_height;
        if scrollable <= 0.0 {
            return None;
        }
        let progress = top.abs() / scrollable;
        let index = (progress * self.item_count as f64).floor() as usize;
        Some(index.min(self.item_count - 1))
    }

    /// Applies one scroll observation. Returns the previous index when the
    /// active item changed. Outside the container the last index is kept.
    pub fn observe(&mut self, metrics: ContainerMetrics) -> Option<usize> {
        let index = self.index_for(metrics)?;
        if index == self.active {
            return None;
        }
        let previous = self.active;
        self.active = index;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: f64 = 800.0;

    fn metrics(items: usize, scrolled: f64) -> ContainerMetrics {
        ContainerMetrics {
            top: -scrolled,
            height: V * items as f64 * ITEM_HEIGHT_VH as f64 / 100.0,
            viewport_height: V,
        }
    }

    #[test]
    fn three_items_split_the_range_in_thirds() {
        let mapper = ActiveIndexMapper::new(3);
        let h = 4.5 * V;
        let range = h - V;

        assert_eq!(mapper.index_for(metrics(3, 0.0)), None);
        assert_eq!(mapper.index_for(metrics(3, 1.0)), Some(0));
        assert_eq!(mapper.index_for(metrics(3, range / 2.0)), Some(1));
        assert_eq!(mapper.index_for(metrics(3, range - 1.0)), Some(2));
    }

    #[test]
    fn index_matches_closed_form() {
        let n = 4;
        let mapper = ActiveIndexMapper::new(n);
        let m = metrics(n, 0.0);
        let range = m.height - V;
        let mut x = 1.0;
        while x < m.height {
            let expected = (((x / range) * n as f64).floor() as usize).min(n - 1);
            assert_eq!(mapper.index_for(metrics(n, x)), Some(expected));
            x += 97.0;
        }
    }

    #[test]
    fn past_the_end_of_the_scroll_range_clamps_to_last() {
        let mapper = ActiveIndexMapper::new(2);
        let m = metrics(2, 0.0);
        let beyond = m.height - V + 100.0;
        assert_eq!(mapper.index_for(metrics(2, beyond)), Some(1));
    }

    #[test]
    fn outside_the_container_keeps_last_index() {
        let mut mapper = ActiveIndexMapper::new(3);
        let range = metrics(3, 0.0).height - V;

        assert_eq!(mapper.observe(metrics(3, range / 2.0)), Some(0));
        assert_eq!(mapper.active(), 1);

        // above the container
        assert_eq!(mapper.observe(metrics(3, -200.0)), None);
        assert_eq!(mapper.active(), 1);

        // fully scrolled past
        let height = metrics(3, 0.0).height;
        assert_eq!(mapper.observe(metrics(3, height + 1.0)), None);
        assert_eq!(mapper.active(), 1);
    }

    #[test]
    fn observe_reports_only_changes() {
        let mut mapper = ActiveIndexMapper::new(2);
        assert_eq!(mapper.observe(metrics(2, 10.0)), None);
        assert_eq!(mapper.observe(metrics(2, 20.0)), None);
        let range = metrics(2, 0.0).height - V;
        assert_eq!(mapper.observe(metrics(2, range * 0.75)), Some(0));
        assert_eq!(mapper.observe(metrics(2, range * 0.25)), Some(1));
    }

    #[test]
    fn degenerate_container_is_skipped() {
        let mapper = ActiveIndexMapper::new(1);
        let short = ContainerMetrics { top: -10.0, height: 500.0, viewport_height: 800.0 };
        assert_eq!(mapper.index_for(short), None);
    }
}
