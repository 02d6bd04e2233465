//! Centralized constants for the seed-customizer workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Customization Defaults
// =============================================================================

/// Default sprite machine name (the unmodified player sprite).
pub const DEFAULT_SPRITE_NAME: &str = "vanilla";

/// Default energy-cell color as six hex digits (the stock HUD pink).
pub const DEFAULT_ENERGY_COLOR: &str = "f09890";

// =============================================================================
// Energy-Cell Preview Geometry
// =============================================================================

/// Number of cells per preview row.
pub const ENERGY_GRID_COLUMNS: u32 = 7;

/// Number of preview rows.
pub const ENERGY_GRID_ROWS: u32 = 2;

/// Distance between cell origins on both axes, in pixels.
pub const ENERGY_CELL_PITCH: u32 = 24;

/// Horizontal offset of the first cell, in pixels.
pub const ENERGY_GRID_OFFSET_X: u32 = 3;

/// Vertical offset of the first cell, in pixels.
pub const ENERGY_GRID_OFFSET_Y: u32 = 4;

/// Outer (white border) rect size, in pixels.
pub const ENERGY_CELL_OUTER_WIDTH: u32 = 18;
pub const ENERGY_CELL_OUTER_HEIGHT: u32 = 15;

/// Inner (colored fill) rect size and inset from the outer rect, in pixels.
pub const ENERGY_CELL_INNER_WIDTH: u32 = 15;
pub const ENERGY_CELL_INNER_HEIGHT: u32 = 12;
pub const ENERGY_CELL_INNER_INSET: u32 = 3;
