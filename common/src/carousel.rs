//! Position and autoplay state of the testimonial carousel.

use std::time::Duration;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
    hovering: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            hovering: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`; out of range requests are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// One autoplay step. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if self.hovering || self.len == 0 {
            return false;
        }
        self.next();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut carousel = Carousel::new(5);
        carousel.previous();
        assert_eq!(carousel.index(), 4);
        carousel.next();
        assert_eq!(carousel.index(), 0);

        for _ in 0..7 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(2);
        assert_eq!(carousel.index(), 2);
        carousel.go_to(3);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn hovering_suspends_autoplay() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 1);

        carousel.set_hovering(true);
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 1);

        // manual navigation still works while hovering
        carousel.next();
        assert_eq!(carousel.index(), 2);

        carousel.set_hovering(false);
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        carousel.go_to(0);
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }
}
