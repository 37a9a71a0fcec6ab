//! Zoom and pan of the on-screen editing canvas.
//!
//! The canvas shows one asset at its output size; the viewport scales and
//! translates that stage inside the editor's container. Nothing here
//! affects the crop: it is purely a view transform.

use serde::{Deserialize, Serialize};

use crate::config::ZoomConfig;

/// A point in container (screen) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scale and position of the canvas stage.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasViewport {
    scale: f64,
    position: Point,
    zoom: ZoomConfig,
}

impl Default for CanvasViewport {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

impl CanvasViewport {
    pub fn new(zoom: ZoomConfig) -> Self {
        Self {
            scale: 1.0,
            position: Point::default(),
            zoom,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Record where the stage ended up after the user dragged it.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Zoom one step around the pointer so the stage point under it stays put.
    ///
    /// `stage_position` is the stage's live position, which differs from the
    /// stored one after a drag. A positive `delta_y` (wheel scrolled down)
    /// zooms out.
    pub fn handle_wheel(&mut self, pointer: Point, stage_position: Point, delta_y: f64) {
        let old_scale = self.scale;
        let mouse_point_to = Point::new(
            (pointer.x - stage_position.x) / old_scale,
            (pointer.y - stage_position.y) / old_scale,
        );

        let new_scale = if delta_y > 0.0 {
            old_scale / self.zoom.scale_by
        } else {
            old_scale * self.zoom.scale_by
        };
        self.scale = self.zoom.clamp(new_scale);

        self.position = Point::new(
            pointer.x - mouse_point_to.x * self.scale,
            pointer.y - mouse_point_to.y * self.scale,
        );
    }

    pub fn zoom_in(&mut self) {
        self.scale = self.zoom.clamp(self.scale * self.zoom.scale_by);
    }

    pub fn zoom_out(&mut self) {
        self.scale = self.zoom.clamp(self.scale / self.zoom.scale_by);
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.position = Point::default();
    }

    /// Scale the asset to fit the container (minus padding) and center it.
    pub fn fit_to_container(
        &mut self,
        container_width: f64,
        container_height: f64,
        asset_width: f64,
        asset_height: f64,
    ) {
        let scale_x = container_width / asset_width;
        let scale_y = container_height / asset_height;
        self.scale = self.zoom.clamp(scale_x.min(scale_y) * self.zoom.fit_padding);
        self.position = Point::new(
            (container_width - asset_width * self.scale) / 2.0,
            (container_height - asset_height * self.scale) / 2.0,
        );
    }

    /// Map a container point to stage (asset) coordinates.
    pub fn to_stage(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.position.x) / self.scale,
            (point.y - self.position.y) / self.scale,
        )
    }
}
