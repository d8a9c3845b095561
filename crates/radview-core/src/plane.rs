//! Oriented planes used to move a view's frame as one rigid body.
//!
//! A view's position, direction and up vector are treated as a plane with
//! the up vector as normal, the position as origin and the direction as the
//! plane's local x axis. Rotating that plane keeps the three consistent.

use glam::{DQuat, DVec3};

use crate::error::{Result, ViewError};

/// A plane with an origin, a normal and an in-plane x axis.
///
/// Vectors are stored as given. Rigid motions preserve their lengths, so a
/// view direction keeps encoding its focal distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    /// The normal direction of the plane.
    normal: DVec3,
    /// A point on the plane.
    origin: DVec3,
    /// The local x axis of the plane.
    x_axis: DVec3,
}

impl ViewPlane {
    /// Creates a plane from its normal, origin and x axis.
    pub fn new(normal: DVec3, origin: DVec3, x_axis: DVec3) -> Self {
        Self {
            normal,
            origin,
            x_axis,
        }
    }

    /// Returns the normal direction of the plane.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the origin point of the plane.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Returns the local x axis of the plane.
    pub fn x_axis(&self) -> DVec3 {
        self.x_axis
    }

    /// Returns a copy of the plane translated by `vector`.
    #[must_use]
    pub fn move_by(&self, vector: DVec3) -> Self {
        Self {
            origin: self.origin + vector,
            ..*self
        }
    }

    /// Returns a copy of the plane rotated by `angle` radians about `axis`
    /// passing through `pivot`.
    ///
    /// Positive angles turn counter-clockwise when looking down the axis.
    pub fn rotate(&self, axis: DVec3, angle: f64, pivot: DVec3) -> Result<Self> {
        let axis = axis.try_normalize().ok_or_else(|| {
            ViewError::validation(format!("rotation axis {axis} has no direction"))
        })?;
        let rotation = DQuat::from_axis_angle(axis, angle);
        Ok(Self {
            normal: rotation * self.normal,
            origin: pivot + rotation * (self.origin - pivot),
            x_axis: rotation * self.x_axis,
        })
    }
}
