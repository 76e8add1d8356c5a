//! Magnetic grid snapping for draggable tiles.

use crate::error::{DeckError, Result};
use crate::list::{Identified, OrderedList};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Default grid cell size (matches the visual grid).
pub const DEFAULT_CELL_SIZE: f64 = 100.0;
/// Default container width.
pub const DEFAULT_CONTAINER_WIDTH: f64 = 800.0;
/// Default container height.
pub const DEFAULT_CONTAINER_HEIGHT: f64 = 600.0;

/// Grid geometry: square cells inside a bounded container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Edge length of a cell; also the size of a snapped tile.
    pub cell_size: f64,
    /// Container width.
    pub container_width: f64,
    /// Container height.
    pub container_height: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            container_width: DEFAULT_CONTAINER_WIDTH,
            container_height: DEFAULT_CONTAINER_HEIGHT,
        }
    }
}

impl GridSpec {
    /// Create a validated grid.
    pub fn new(cell_size: f64, container_width: f64, container_height: f64) -> Result<Self> {
        let grid = Self {
            cell_size,
            container_width,
            container_height,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Check that the cell size is positive and all extents are finite.
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(DeckError::InvalidConfiguration(format!(
                "grid cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if !self.container_width.is_finite() || !self.container_height.is_finite() {
            return Err(DeckError::InvalidConfiguration(format!(
                "container size must be finite, got {}x{}",
                self.container_width, self.container_height
            )));
        }
        Ok(())
    }

    /// Largest grid-aligned x that keeps a tile inside the container.
    pub fn max_x(&self) -> f64 {
        self.last_line(self.container_width)
    }

    /// Largest grid-aligned y that keeps a tile inside the container.
    pub fn max_y(&self) -> f64 {
        self.last_line(self.container_height)
    }

    // Aligned to a cell line so that snapping a clamped point is a no-op.
    fn last_line(&self, extent: f64) -> f64 {
        let room = extent - self.cell_size;
        if room <= 0.0 {
            return 0.0;
        }
        (room / self.cell_size).floor() * self.cell_size
    }
}

/// Result of an unclamped snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate moved.
    pub snapped_x: bool,
    /// Whether the Y coordinate moved.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Snap a point to the nearest grid intersection, ignoring container bounds.
pub fn snap_to_grid(point: Point, cell_size: f64) -> SnapResult {
    let snapped_x = (point.x / cell_size).round() * cell_size;
    let snapped_y = (point.y / cell_size).round() * cell_size;

    SnapResult {
        point: Point::new(snapped_x, snapped_y),
        snapped_x: snapped_x != point.x,
        snapped_y: snapped_y != point.y,
    }
}

/// Snap a tile's top-left corner to the grid and keep the tile inside the container.
///
/// Each axis rounds to the nearest cell line (ties away from zero), then
/// clamps to `[0, dimension - cell_size]`, with the upper bound taken at the
/// last cell line inside that range.
pub fn snap(position: Point, grid: &GridSpec) -> Result<Point> {
    grid.validate()?;
    let nearest = snap_to_grid(position, grid.cell_size).point;
    Ok(Point::new(
        nearest.x.clamp(0.0, grid.max_x()),
        nearest.y.clamp(0.0, grid.max_y()),
    ))
}

/// Snap the position reached by dragging from `start` by `delta`.
pub fn apply_drag(start: Point, delta: Vec2, grid: &GridSpec) -> Result<Point> {
    snap(start + delta, grid)
}

/// A draggable tile on the snap canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridItem {
    /// Tile id.
    pub id: String,
    /// Top-left corner.
    pub position: Point,
}

impl GridItem {
    /// Create a tile.
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

impl Identified for GridItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Return a copy of `items` with tile `id` dragged by `delta` and snapped.
///
/// Other tiles keep their positions; tiles may overlap.
pub fn move_item(
    items: &OrderedList<GridItem>,
    id: &str,
    delta: Vec2,
    grid: &GridSpec,
) -> Result<OrderedList<GridItem>> {
    let start = items
        .get(id)
        .map(|item| item.position)
        .ok_or_else(|| DeckError::ItemNotFound { id: id.to_string() })?;
    let target = apply_drag(start, delta, grid)?;
    log::debug!("Snapped {} from {:?} to {:?}", id, start, target);

    let moved = items
        .iter()
        .map(|item| {
            if item.id == id {
                GridItem::new(item.id.clone(), target)
            } else {
                item.clone()
            }
        })
        .collect();
    OrderedList::new(moved)
}
