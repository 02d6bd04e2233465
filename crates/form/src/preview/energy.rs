//! Energy-cell color preview.
//!
//! Renders the 7x2 grid of energy cells as SVG rects: each cell is an
//! outer white border rect with an inner rect filled in the selected
//! color. The geometry matches the in-game HUD proportions.

use std::fmt::Write;

use customizer_config::constants::{
    ENERGY_CELL_INNER_HEIGHT, ENERGY_CELL_INNER_INSET, ENERGY_CELL_INNER_WIDTH,
    ENERGY_CELL_OUTER_HEIGHT, ENERGY_CELL_OUTER_WIDTH, ENERGY_CELL_PITCH, ENERGY_GRID_COLUMNS,
    ENERGY_GRID_OFFSET_X, ENERGY_GRID_OFFSET_Y, ENERGY_GRID_ROWS,
};
use customizer_config::{CustomizeState, PaletteColor};

/// What the energy-cell renderer needs: panel visibility plus the SVG
/// body to inject.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyPreview {
    /// Whether the color-selection panel is shown.
    pub visible: bool,
    /// SVG rect elements for the cell grid.
    pub svg: String,
}

/// Builds the energy preview from stored form values.
pub fn energy_preview(state: &CustomizeState) -> EnergyPreview {
    EnergyPreview {
        visible: state.custom_energy_color,
        svg: energy_cell_svg(state.energy_color),
    }
}

/// Renders the cell grid for a given color.
pub fn energy_cell_svg(color: PaletteColor) -> String {
    let mut svg = String::new();
    for y in 0..ENERGY_GRID_ROWS {
        for x in 0..ENERGY_GRID_COLUMNS {
            let x_pixel = x * ENERGY_CELL_PITCH + ENERGY_GRID_OFFSET_X;
            let y_pixel = y * ENERGY_CELL_PITCH + ENERGY_GRID_OFFSET_Y;
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
                x_pixel, y_pixel, ENERGY_CELL_OUTER_WIDTH, ENERGY_CELL_OUTER_HEIGHT
            );
            let _ = write!(
                svg,
                r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#{}"/>"##,
                x_pixel + ENERGY_CELL_INNER_INSET,
                y_pixel + ENERGY_CELL_INNER_INSET,
                ENERGY_CELL_INNER_WIDTH,
                ENERGY_CELL_INNER_HEIGHT,
                color
            );
        }
    }
    svg
}
