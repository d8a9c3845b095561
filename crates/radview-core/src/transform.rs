//! Moving and rotating views.

use glam::DVec3;

use crate::error::Result;
use crate::plane::ViewPlane;
use crate::view::View;

impl View {
    /// Returns the view frame as a plane: up vector as normal, position as
    /// origin and direction as x axis.
    pub fn plane(&self) -> ViewPlane {
        ViewPlane::new(self.up_vector(), self.position(), self.direction())
    }

    fn set_plane(&mut self, plane: &ViewPlane) {
        self.set_position(plane.origin());
        self.set_direction(plane.x_axis());
        self.set_up_vector(plane.normal());
    }

    /// Moves the view point by `vector`.
    pub fn move_by(&mut self, vector: DVec3) {
        let moved = self.plane().move_by(vector);
        self.set_plane(&moved);
    }

    /// Rotates the view by `angle` radians around its own up vector.
    pub fn rotate(&mut self, angle: f64) -> Result<()> {
        self.rotate_about(angle, None, None)
    }

    /// Rotates the view by `angle` radians around `axis` through `pivot`.
    ///
    /// `axis` defaults to the up vector and `pivot` to the view point.
    /// Position, direction and up vector turn together.
    pub fn rotate_about(
        &mut self,
        angle: f64,
        axis: Option<DVec3>,
        pivot: Option<DVec3>,
    ) -> Result<()> {
        let plane = self.plane();
        let axis = axis.unwrap_or(plane.normal());
        let pivot = pivot.unwrap_or(plane.origin());
        let rotated = plane.rotate(axis, angle, pivot)?;
        self.set_plane(&rotated);
        Ok(())
    }
}
