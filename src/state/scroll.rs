/// Vertical scroll position of the active page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
}

impl ScrollState {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Move by `delta` rows, clamped to `0..=max`.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(max));
        self.offset = next as u16;
    }

    /// Keep the offset valid after the viewport or the content changed size.
    pub fn clamp_to(&mut self, max: u16) {
        self.offset = self.offset.min(max);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// The home hero background scrolls at half the content speed.
    pub fn parallax_offset(&self) -> u16 {
        self.offset / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(-3, 10);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(25, 10);
        assert_eq!(scroll.offset(), 10);
        scroll.clamp_to(4);
        assert_eq!(scroll.offset(), 4);
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        let mut scroll = ScrollState::default();
        scroll.scroll_by(9, 20);
        assert_eq!(scroll.parallax_offset(), 4);
        scroll.reset();
        assert_eq!(scroll.parallax_offset(), 0);
    }
}
