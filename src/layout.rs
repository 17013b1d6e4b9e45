//! Screen partitioning and hit-region bookkeeping.

use std::collections::BTreeMap;

use ratatui::layout::Rect;

use crate::constants::{DOCK_HEIGHT, STATUS_BAR_HEIGHT};

/// Split the terminal into the status bar, the managed workspace, and the
/// dock. Degenerate terminals collapse the workspace before the bars.
pub fn split_desktop(area: Rect) -> (Rect, Rect, Rect) {
    let status_h = STATUS_BAR_HEIGHT.min(area.height);
    let dock_h = DOCK_HEIGHT.min(area.height.saturating_sub(status_h));
    let workspace_h = area.height.saturating_sub(status_h + dock_h);

    let status = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: status_h,
    };
    let workspace = Rect {
        x: area.x,
        y: area.y + status_h,
        width: area.width,
        height: workspace_h,
    };
    let dock = Rect {
        x: area.x,
        y: area.y + status_h + workspace_h,
        width: area.width,
        height: dock_h,
    };
    (status, workspace, dock)
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Hit rectangles recorded during a render pass, keyed by an id.
///
/// Renderers re-record their clickable regions every frame; event handlers
/// then resolve a pointer position back to an id without re-deriving
/// layout.
#[derive(Debug, Clone)]
pub struct RegionMap<T: Copy + Eq + Ord> {
    regions: BTreeMap<T, Rect>,
}

impl<T: Copy + Eq + Ord> Default for RegionMap<T> {
    fn default() -> Self {
        Self {
            regions: BTreeMap::new(),
        }
    }
}

impl<T: Copy + Eq + Ord> RegionMap<T> {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn set(&mut self, id: T, rect: Rect) {
        self.regions.insert(id, rect);
    }

    pub fn get(&self, id: T) -> Option<Rect> {
        self.regions.get(&id).copied()
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<T> {
        self.regions
            .iter()
            .find(|(_, rect)| rect_contains(**rect, column, row))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_reserves_status_and_dock_rows() {
        let (status, workspace, dock) = split_desktop(Rect::new(0, 0, 80, 24));
        assert_eq!(status, Rect::new(0, 0, 80, 1));
        assert_eq!(workspace, Rect::new(0, 1, 80, 22));
        assert_eq!(dock, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn split_survives_tiny_terminals() {
        let (status, workspace, dock) = split_desktop(Rect::new(0, 0, 10, 1));
        assert_eq!(status.height, 1);
        assert_eq!(workspace.height, 0);
        assert_eq!(dock.height, 0);
    }

    #[test]
    fn region_map_round_trip() {
        let mut map: RegionMap<u8> = RegionMap::default();
        map.set(3, Rect::new(5, 0, 4, 1));
        assert_eq!(map.hit_test(6, 0), Some(3));
        assert_eq!(map.hit_test(9, 0), None);
        map.clear();
        assert_eq!(map.hit_test(6, 0), None);
    }
}
