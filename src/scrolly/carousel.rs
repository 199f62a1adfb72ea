use crate::content::Item;

/// Which screenshot of an item is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    total: usize,
}

impl Carousel {
    /// `total` comes from a validated item, so it is at least one.
    pub fn new(total: usize) -> Self {
        Self { index: 0, total: total.max(1) }
    }

    pub fn for_item(item: &Item) -> Self {
        Self::new(item.images.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.total
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.can_go_previous() {
            self.index -= 1;
        }
    }

    /// "2 / 3" style position label.
    pub fn label(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }
}

/// One carousel per item of a section, indexed like the items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselSet {
    carousels: Vec<Carousel>,
}

impl CarouselSet {
    pub fn for_items(items: &[Item]) -> Self {
        Self { carousels: items.iter().map(Carousel::for_item).collect() }
    }

    pub fn get(&self, item: usize) -> Option<&Carousel> {
        self.carousels.get(item)
    }

    pub fn next(&mut self, item: usize) {
        if let Some(carousel) = self.carousels.get_mut(item) {
            carousel.next();
        }
    }

    pub fn previous(&mut self, item: usize) {
        if let Some(carousel) = self.carousels.get_mut(item) {
            carousel.previous();
        }
    }

    pub fn index_of(&self, item: usize) -> usize {
        self.get(item).map(Carousel::index).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn next_clamps_at_last_image() {
        for n in 1..=4 {
            for k in 0..=6 {
                let mut carousel = Carousel::new(n);
                (0..k).for_each(|_| carousel.next());
                assert_eq!(carousel.index(), k.min(n - 1));
            }
        }
    }

    #[test]
    fn previous_after_next_clamps_at_zero() {
        let n = 3;
        for k in 0..=5 {
            for m in 0..=5 {
                let mut carousel = Carousel::new(n);
                (0..k).for_each(|_| carousel.next());
                (0..m).for_each(|_| carousel.previous());
                let expected = k.min(n - 1).saturating_sub(m);
                assert_eq!(carousel.index(), expected);
            }
        }
    }

    #[test]
    fn index_stays_in_bounds_for_mixed_sequences() {
        let mut carousel = Carousel::new(2);
        let steps = [true, true, true, false, false, false, true, false, true, true];
        for forward in steps {
            if forward {
                carousel.next();
            } else {
                carousel.previous();
            }
            assert!(carousel.index() < carousel.total());
        }
    }

    #[test]
    fn affordances_and_label() {
        let mut carousel = Carousel::new(2);
        assert!(!carousel.can_go_previous());
        assert!(carousel.can_go_next());
        assert_eq!(carousel.label(), "1 / 2");

        carousel.next();
        assert!(carousel.can_go_previous());
        assert!(!carousel.can_go_next());
        assert_eq!(carousel.label(), "2 / 2");
    }

    #[test]
    fn single_image_has_no_navigation() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.can_go_next());
        assert!(!carousel.can_go_previous());
    }

    #[test]
    fn set_tracks_items_independently() {
        let mut set = CarouselSet { carousels: vec![Carousel::new(3), Carousel::new(2)] };
        set.next(0);
        set.next(0);
        set.next(1);
        set.next(7);
        assert_eq!(set.index_of(0), 2);
        assert_eq!(set.index_of(1), 1);
        assert_eq!(set.index_of(7), 0);
    }
}
