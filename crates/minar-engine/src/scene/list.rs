use super::{DrawCmd, ZIndex};

/// Stable sort key for draw items.
///
/// Ordering rules (derived lexicographically):
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    /// Z-layer. Lower values are drawn first (further back).
    pub z: ZIndex,
    /// Insertion index within the same z-layer, ensuring stable ordering.
    pub order: u32,
}

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one frame.
///
/// The list is fully rebuilt every tick: callers `clear()` then re-push, so no
/// item ever survives from a previous frame. `clear()` keeps allocated
/// capacity, which makes the once-per-second repaint allocation-free once
/// warmed.
///
/// Paint-order iteration reuses an internal index buffer rather than sorting
/// the items in place, so insertion order stays observable via [`items`].
///
/// [`items`]: DrawList::items
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
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
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey { z, order },
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn z(v: i32) -> ZIndex {
        ZIndex::new(v)
    }

    fn radius_of(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Circle(c) => c.radius,
            other => panic!("expected circle, got {other:?}"),
        }
    }

    fn list_with_radii(entries: &[(i32, f32)]) -> DrawList {
        let mut list = DrawList::new();
        for &(zi, r) in entries {
            list.push_circle(z(zi), Vec2::zero(), r, Color::WHITE);
        }
        list
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_by_z() {
        let mut list = list_with_radii(&[(2, 2.0), (0, 0.0), (1, 1.0)]);
        let radii: Vec<f32> = list.iter_in_paint_order().map(radius_of).collect();
        assert_eq!(radii, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn paint_order_is_stable_within_a_layer() {
        let mut list = list_with_radii(&[(5, 1.0), (5, 2.0), (5, 3.0)]);
        let radii: Vec<f32> = list.iter_in_paint_order().map(radius_of).collect();
        assert_eq!(radii, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn items_keep_insertion_order() {
        let list = list_with_radii(&[(9, 1.0), (0, 2.0)]);
        assert_eq!(radius_of(&list.items()[0]), 1.0);
        assert_eq!(radius_of(&list.items()[1]), 2.0);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_empties_and_resets_order() {
        let mut list = list_with_radii(&[(0, 1.0), (1, 2.0)]);
        list.clear();
        assert!(list.is_empty());

        // A fresh push after clear starts a new frame from order 0.
        list.push_circle(z(0), Vec2::zero(), 7.0, Color::WHITE);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].key.order, 0);
    }

    #[test]
    fn paint_order_refreshes_after_clear() {
        let mut list = list_with_radii(&[(0, 1.0)]);
        let _ = list.iter_in_paint_order().count();

        list.clear();
        list.push_circle(z(0), Vec2::zero(), 9.0, Color::WHITE);
        let radii: Vec<f32> = list.iter_in_paint_order().map(radius_of).collect();
        assert_eq!(radii, vec![9.0]);
    }
}
