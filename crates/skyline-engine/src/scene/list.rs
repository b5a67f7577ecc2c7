use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Paint order is recording order: the first command pushed is the furthest
/// back. Callers are expected to record back-to-front.
///
/// `clear()` keeps the allocation, so a list reused across frames stops
/// allocating once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    #[test]
    fn items_keep_recording_order() {
        let mut list = DrawList::new();
        list.push_triangle([Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)], Color::rgb(0.0, 1.0, 0.0));
        list.push_solid_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgb(1.0, 0.0, 0.0));

        assert_eq!(list.len(), 2);
        assert!(matches!(list.items()[0], DrawCmd::Triangle(_)));
        assert!(matches!(list.items()[1], DrawCmd::Rect(_)));
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(1.0, 1.0, 1.0));
        list.clear();
        assert!(list.is_empty());
    }
}
