/// Tuning constants for responsive grid sizing. Defaults reproduce the
/// hand-tuned values of the original layout: 1920x1080 reference resolution,
/// 20px spacing, 35px padding, 110:150 card aspect.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutSpec {
    pub base_resolution: (f32, f32),
    pub base_spacing: (f32, f32),
    pub base_padding: f32,
    /// Width over height of a single cell.
    pub cell_aspect: f32,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            base_resolution: (1920.0, 1080.0),
            base_spacing: (20.0, 20.0),
            base_padding: 35.0,
            cell_aspect: 110.0 / 150.0,
        }
    }
}

/// Resolved cell geometry for one grid configuration.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct CellGeometry {
    pub cell_width: f32,
    pub cell_height: f32,
    pub spacing: (f32, f32),
    pub padding: f32,
    pub rows: u32,
    pub columns: u32,
}

/// Computes cell size for `card_count` cards laid out in `columns` columns
/// inside `container`, with spacing and padding scaled from `viewport`
/// relative to the base resolution.
///
/// Purely a function of its inputs; shares no state with the match engine.
pub fn cell_geometry(
    spec: &LayoutSpec,
    viewport: (f32, f32),
    container: (f32, f32),
    columns: u32,
    card_count: u32,
) -> CellGeometry {
    if columns == 0 || card_count == 0 {
        return CellGeometry::default();
    }
    let rows = card_count.div_ceil(columns);

    let scale = f32::min(
        viewport.0 / spec.base_resolution.0,
        viewport.1 / spec.base_resolution.1,
    );
    let spacing = (spec.base_spacing.0 * scale, spec.base_spacing.1 * scale);
    let padding = spec.base_padding * scale;

    let total_spacing_x = spacing.0 * (columns - 1) as f32;
    let total_spacing_y = spacing.1 * (rows - 1) as f32;
    let available_width = container.0 - 2.0 * padding - total_spacing_x;
    let available_height = container.1 - 2.0 * padding - total_spacing_y;

    let mut cell_width = available_width / columns as f32;
    let mut cell_height = available_height / rows as f32;

    // shrink one axis so the cell keeps the card aspect ratio
    if cell_width / spec.cell_aspect > cell_height {
        cell_width = cell_height * spec.cell_aspect;
    } else {
        cell_height = cell_width / spec.cell_aspect;
    }

    CellGeometry {
        cell_width,
        cell_height,
        spacing,
        padding,
        rows,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HD: (f32, f32) = (1920.0, 1080.0);

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn cells_keep_the_card_aspect_ratio() {
        let spec = LayoutSpec::default();
        for (columns, count) in [(2u32, 4u32), (4, 16), (7, 42), (3, 12)] {
            let geometry = cell_geometry(&spec, FULL_HD, (900.0, 700.0), columns, count);
            assert!(
                close(geometry.cell_width / geometry.cell_height, spec.cell_aspect),
                "{columns} columns / {count} cards broke the aspect ratio"
            );
        }
    }

    #[test]
    fn grid_fits_inside_the_container() {
        let spec = LayoutSpec::default();
        let container = (800.0, 600.0);
        let geometry = cell_geometry(&spec, FULL_HD, container, 4, 16);

        let used_width = 4.0 * geometry.cell_width
            + 3.0 * geometry.spacing.0
            + 2.0 * geometry.padding;
        let used_height = geometry.rows as f32 * geometry.cell_height
            + (geometry.rows - 1) as f32 * geometry.spacing.1
            + 2.0 * geometry.padding;
        assert!(used_width <= container.0 + 1e-3);
        assert!(used_height <= container.1 + 1e-3);
    }

    #[test]
    fn spacing_scales_with_the_viewport() {
        let spec = LayoutSpec::default();
        let full = cell_geometry(&spec, FULL_HD, (800.0, 600.0), 2, 4);
        let half = cell_geometry(&spec, (960.0, 540.0), (800.0, 600.0), 2, 4);
        assert!(close(half.spacing.0, full.spacing.0 / 2.0));
        assert!(close(half.padding, full.padding / 2.0));
    }

    #[test]
    fn partial_last_row_rounds_up() {
        let geometry = cell_geometry(&LayoutSpec::default(), FULL_HD, (800.0, 600.0), 4, 10);
        assert_eq!(geometry.rows, 3);
    }

    #[test]
    fn degenerate_inputs_yield_empty_geometry() {
        let spec = LayoutSpec::default();
        assert_eq!(cell_geometry(&spec, FULL_HD, (800.0, 600.0), 0, 4), CellGeometry::default());
        assert_eq!(cell_geometry(&spec, FULL_HD, (800.0, 600.0), 4, 0), CellGeometry::default());
    }
}
