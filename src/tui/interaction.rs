//! Component-level mouse interactivity system.
//!
//! Select widgets register their interactive regions during render, and
//! mouse events are routed back to the widget and target under the pointer.
//! The registry is cleared at the start of every render, so a region lives
//! exactly as long as the frame that drew it.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(InteractiveRegion::new(
//!     widget,
//!     HitTarget::Option(2),
//!     ClickRegion::new(x, y, width, 1),
//! ).with_priority(OVERLAY_PRIORITY));
//!
//! // Later, in the mouse handler:
//! if let Some(hit) = registry.hit(column, row) { ... }
//! ```

use ratatui::layout::Rect;

/// Index of a select widget in the host.
pub type WidgetId = usize;

/// Priority for elements nested inside a container (chips, clear button).
pub const NESTED_PRIORITY: i32 = 5;

/// Priority for the open option list, drawn over everything else.
pub const OVERLAY_PRIORITY: i32 = 10;

/// Rectangular screen region in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside (right and bottom edges exclusive)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// The part of a select a region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Container,
    Chip(usize),
    Clear,
    Option(usize),
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Widget this region belongs to
    pub widget: WidgetId,

    /// What was hit inside the widget
    pub target: HitTarget,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    pub fn new(widget: WidgetId, target: HitTarget, bounds: ClickRegion) -> Self {
        Self {
            widget,
            target,
            bounds,
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Find the highest-priority region containing (x, y).
    ///
    /// Among equal priorities the region registered last wins, matching
    /// paint order.
    pub fn hit(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.contains(x, y))
            .max_by_key(|(i, r)| (r.priority, *i))
            .map(|(_, r)| r)
    }
}
