//! Clickable regions registered while rendering.
//!
//! The renderer registers a hit area for every clickable widget and the
//! event loop hit-tests mouse clicks against the registry from the most
//! recent frame.

use ratatui::layout::Rect;
use rewind_tictactoe::Position;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Play at a board cell.
    PlayCell(Position),
    /// Jump to a history step.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleSort,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Hit areas of one rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new hit area. Later areas win where regions overlap.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea { rect, action });
    }

    /// Returns the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// All registered areas in registration order.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let area = HitArea {
            rect: Rect::new(2, 3, 4, 1),
            action: ClickAction::ToggleSort,
        };
        assert!(area.contains(2, 3));
        assert!(area.contains(5, 3));
        assert!(!area.contains(6, 3));
        assert!(!area.contains(2, 4));
    }

    #[test]
    fn test_hit_test_prefers_latest() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 10), ClickAction::ToggleSort);
        registry.register(Rect::new(0, 0, 2, 2), ClickAction::JumpTo(3));
        assert_eq!(registry.hit_test(1, 1), Some(ClickAction::JumpTo(3)));
        assert_eq!(registry.hit_test(5, 5), Some(ClickAction::ToggleSort));
        assert_eq!(registry.hit_test(20, 20), None);
    }
}
