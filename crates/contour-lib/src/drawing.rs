//! DXF drawing of exported contour parts

use crate::{ExportError, OutputRow, Result};
use std::path::Path;

/// Layer holding the contour line segments
pub const CONTOUR_LAYER: &str = "contour_lines";
/// Layer holding single-vertex parts, which have no segment to draw
pub const CONTOUR_POINTS_LAYER: &str = "contour_lines_points";

const CONTOUR_COLOR: u8 = 1;
const CONTOUR_POINTS_COLOR: u8 = 5;

/// Collects exported parts into one DXF drawing
pub struct ContourDrawing {
    drawing: dxf::Drawing,
    line_count: usize,
    point_count: usize,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl ContourDrawing {
    /// Create an empty drawing with the contour layers
    pub fn new() -> Self {
        let mut drawing = dxf::Drawing::new();
        for (name, color) in [
            (CONTOUR_LAYER, CONTOUR_COLOR),
            (CONTOUR_POINTS_LAYER, CONTOUR_POINTS_COLOR),
        ] {
            let mut layer = dxf::tables::Layer::default();
            layer.name = name.to_string();
            layer.color = dxf::Color::from_index(color);
            drawing.add_layer(layer);
        }

        Self {
            drawing,
            line_count: 0,
            point_count: 0,
        }
    }

    /// Add one part given as its output rows
    ///
    /// Consecutive rows become `LINE` entities; a part made of a single row becomes a `POINT`.
    pub fn add_part(&mut self, rows: &[OutputRow]) {
        match rows {
            [] => {}
            [single] => {
                let mut point = dxf::entities::ModelPoint::default();
                point.location = to_dxf_point(single);
                self.add_entity(
                    dxf::entities::EntityType::ModelPoint(point),
                    CONTOUR_POINTS_LAYER,
                    CONTOUR_POINTS_COLOR,
                );
                self.point_count += 1;
            }
            _ => {
                for pair in rows.windows(2) {
                    let mut line = dxf::entities::Line::default();
                    line.p1 = to_dxf_point(&pair[0]);
                    line.p2 = to_dxf_point(&pair[1]);
                    self.add_entity(
                        dxf::entities::EntityType::Line(line),
                        CONTOUR_LAYER,
                        CONTOUR_COLOR,
                    );
                    self.line_count += 1;
                }
            }
        }
    }

    fn add_entity(&mut self, specific: dxf::entities::EntityType, layer: &str, color: u8) {
        let mut entity = dxf::entities::Entity::new(specific);
        entity.common.layer = layer.to_string();
        entity.common.color = dxf::Color::from_index(color);
        self.drawing.add_entity(entity);
    }

    /// Number of `LINE` entities added so far
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Number of `POINT` entities added so far
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Write the drawing to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        #[cfg(feature = "profiling")]
        profiling::scope!("drawing::save");

        self.drawing
            .save_file(path)
            .map_err(|e| ExportError::Dxf {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

impl Default for ContourDrawing {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn to_dxf_point(row: &OutputRow) -> dxf::Point {
    dxf::Point::new(row.x, row.y, row.z.value())
}
