//! Radiance views.
//!
//! A [`View`] holds the viewpoint parameters Radiance programs such as
//! `rpict`, `rvu` and `vwrays` accept: `-vt`, `-vp`, `-vd`, `-vu`, `-vh`,
//! `-vv`, `-vs`, `-vl`, `-vo` and `-va`. Setters validate their input and
//! leave the view untouched when they fail.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};
use crate::view_type::ViewType;

/// Size in degrees of a fisheye view and the exclusive upper bound for a
/// perspective view.
pub const FISHEYE_SIZE: f64 = 180.0;

/// Default horizontal and vertical size.
pub const DEFAULT_SIZE: f64 = 60.0;

/// Largest size in degrees a fisheye view can cover.
pub const MAX_FISHEYE_SIZE: f64 = 360.0;

const MAX_NAME_LENGTH: usize = 100;

/// A Radiance view.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Identifier of the view, also the default file name.
    name: String,
    /// View point (`-vp`).
    position: DVec3,
    /// View direction (`-vd`). Its length is the focal distance.
    direction: DVec3,
    /// View up vector (`-vu`).
    up_vector: DVec3,
    /// Projection type (`-vt`).
    view_type: ViewType,
    /// Horizontal size (`-vh`): degrees for angular views, world units for parallel.
    h_size: f64,
    /// Vertical size (`-vv`).
    v_size: f64,
    /// Horizontal image shift (`-vs`).
    shift: Option<f64>,
    /// Vertical image lift (`-vl`).
    lift: Option<f64>,
    /// Fore clipping distance (`-vo`).
    fore_clip: Option<f64>,
    /// Aft clipping distance (`-va`).
    aft_clip: Option<f64>,
}

/// Checks that a name is a valid Radiance identifier.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ViewError::validation("view name must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ViewError::validation(format!(
            "view name '{name}' is longer than {MAX_NAME_LENGTH} characters"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(ViewError::validation(format!(
            "illegal character '{c}' found in view name '{name}'"
        )));
    }
    Ok(())
}

fn validate_size(label: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ViewError::validation(format!("{label} must be a number, got {value}")));
    }
    if value < 0.0 {
        return Err(ViewError::validation(format!(
            "{label} must not be negative, got {value}"
        )));
    }
    Ok(())
}

fn validate_perspective_size(label: &str, value: f64) -> Result<()> {
    if value < FISHEYE_SIZE {
        Ok(())
    } else {
        Err(ViewError::validation(format!(
            "{value} is an invalid {label} for a perspective view; the size should be smaller than {FISHEYE_SIZE}"
        )))
    }
}

/// Checks a size against the bounds of `view_type`.
fn validate_size_for(view_type: ViewType, label: &str, value: f64) -> Result<()> {
    validate_size(label, value)?;
    if view_type == ViewType::Perspective {
        validate_perspective_size(label, value)?;
    } else if view_type.is_fisheye() && value > MAX_FISHEYE_SIZE {
        return Err(ViewError::validation(format!(
            "{value} is an invalid {label} for a fisheye view; the size should be at most {MAX_FISHEYE_SIZE}"
        )));
    }
    Ok(())
}

impl View {
    /// Creates a perspective view at the origin looking along +Z with +Y up
    /// and a 60° field of view.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            position: DVec3::ZERO,
            direction: DVec3::Z,
            up_vector: DVec3::Y,
            view_type: ViewType::Perspective,
            h_size: DEFAULT_SIZE,
            v_size: DEFAULT_SIZE,
            shift: None,
            lift: None,
            fore_clip: None,
            aft_clip: None,
        })
    }

    /// Creates a view at the center of an axis-aligned bounding box, facing
    /// `direction` with +Z up.
    ///
    /// The center may fall outside a concave volume bounded by the box.
    pub fn centered_in(
        name: impl Into<String>,
        min: DVec3,
        max: DVec3,
        direction: DVec3,
    ) -> Result<Self> {
        Ok(Self::new(name)?
            .with_position((min + max) * 0.5)
            .with_direction(direction)
            .with_up_vector(DVec3::Z))
    }

    /// Sets the position, returning the view.
    #[must_use]
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the direction, returning the view.
    #[must_use]
    pub fn with_direction(mut self, direction: DVec3) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the up vector, returning the view.
    #[must_use]
    pub fn with_up_vector(mut self, up_vector: DVec3) -> Self {
        self.up_vector = up_vector;
        self
    }

    /// Sets the view type, returning the view.
    pub fn with_view_type(mut self, view_type: ViewType) -> Result<Self> {
        self.set_view_type(view_type)?;
        Ok(self)
    }

    /// Sets both sizes, returning the view.
    ///
    /// The pair is validated together so a perspective view can move from
    /// one valid pair to another in any order.
    pub fn with_sizes(mut self, h_size: f64, v_size: f64) -> Result<Self> {
        self.set_sizes(h_size, v_size)?;
        Ok(self)
    }

    /// Sets the shift, returning the view.
    #[must_use]
    pub fn with_shift(mut self, shift: Option<f64>) -> Self {
        self.shift = shift;
        self
    }

    /// Sets the lift, returning the view.
    #[must_use]
    pub fn with_lift(mut self, lift: Option<f64>) -> Self {
        self.lift = lift;
        self
    }

    /// Sets the fore clip, returning the view.
    #[must_use]
    pub fn with_fore_clip(mut self, distance: Option<f64>) -> Self {
        self.fore_clip = distance;
        self
    }

    /// Sets the aft clip, returning the view.
    #[must_use]
    pub fn with_aft_clip(mut self, distance: Option<f64>) -> Self {
        self.aft_clip = distance;
        self
    }

    /// Returns the name of this view.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name of this view.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Returns the view point.
    ///
    /// This is the focal point of a perspective view or the center of a
    /// parallel projection.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Sets the view point.
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Returns the view direction.
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Sets the view direction.
    ///
    /// The length sets the focal distance used by `rpict -pd`.
    pub fn set_direction(&mut self, direction: DVec3) {
        self.direction = direction;
    }

    /// Returns the view up vector.
    pub fn up_vector(&self) -> DVec3 {
        self.up_vector
    }

    /// Sets the view up vector.
    pub fn set_up_vector(&mut self, up_vector: DVec3) {
        self.up_vector = up_vector;
    }

    /// Returns the projection type.
    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// Sets the projection type.
    ///
    /// Fisheye types force both sizes to 180°. A perspective type requires
    /// both sizes to be below 180° and is rejected otherwise.
    #[allow(clippy::float_cmp)]
    pub fn set_view_type(&mut self, view_type: ViewType) -> Result<()> {
        if view_type == ViewType::Perspective {
            validate_perspective_size("horizontal view size", self.h_size)?;
            validate_perspective_size("vertical view size", self.v_size)?;
        }
        self.view_type = view_type;

        if view_type.is_fisheye() {
            if self.h_size != FISHEYE_SIZE {
                self.h_size = FISHEYE_SIZE;
                log::warn!("Changed h_size to {FISHEYE_SIZE} for fisheye view type.");
            }
            if self.v_size != FISHEYE_SIZE {
                self.v_size = FISHEYE_SIZE;
                log::warn!("Changed v_size to {FISHEYE_SIZE} for fisheye view type.");
            }
        }
        Ok(())
    }

    /// Sets the projection type from a Radiance code such as `v` or `vtv`.
    pub fn set_view_type_code(&mut self, code: &str) -> Result<()> {
        self.set_view_type(ViewType::parse_code(code)?)
    }

    /// Returns whether the view type is one of the fisheye projections.
    pub fn is_fisheye(&self) -> bool {
        self.view_type.is_fisheye()
    }

    /// Returns the horizontal size.
    ///
    /// Degrees for perspective, fisheye and cylindrical views; world units
    /// for parallel views.
    pub fn h_size(&self) -> f64 {
        self.h_size
    }

    /// Sets the horizontal size.
    pub fn set_h_size(&mut self, value: f64) -> Result<()> {
        self.check_size("horizontal view size", value)?;
        self.h_size = value;
        Ok(())
    }

    /// Sets the horizontal size, restoring the default for `None`.
    pub fn set_h_size_or_default(&mut self, value: Option<f64>) -> Result<()> {
        self.set_h_size(value.unwrap_or(DEFAULT_SIZE))
    }

    /// Returns the vertical size.
    pub fn v_size(&self) -> f64 {
        self.v_size
    }

    /// Sets the vertical size.
    pub fn set_v_size(&mut self, value: f64) -> Result<()> {
        self.check_size("vertical view size", value)?;
        self.v_size = value;
        Ok(())
    }

    /// Sets the vertical size, restoring the default for `None`.
    pub fn set_v_size_or_default(&mut self, value: Option<f64>) -> Result<()> {
        self.set_v_size(value.unwrap_or(DEFAULT_SIZE))
    }

    /// Sets both sizes at once.
    pub fn set_sizes(&mut self, h_size: f64, v_size: f64) -> Result<()> {
        self.check_size("horizontal view size", h_size)?;
        self.check_size("vertical view size", v_size)?;
        self.h_size = h_size;
        self.v_size = v_size;
        Ok(())
    }

    fn check_size(&self, label: &str, value: f64) -> Result<()> {
        validate_size_for(self.view_type, label, value)
    }

    /// Returns the view shift.
    ///
    /// A shift of 1 starts the image just right of the normal view, -1 just
    /// left of it.
    pub fn shift(&self) -> Option<f64> {
        self.shift
    }

    /// Sets the view shift.
    pub fn set_shift(&mut self, shift: Option<f64>) {
        self.shift = shift;
    }

    /// Returns the view lift.
    pub fn lift(&self) -> Option<f64> {
        self.lift
    }

    /// Sets the view lift.
    pub fn set_lift(&mut self, lift: Option<f64>) {
        self.lift = lift;
    }

    /// Returns the fore clipping distance.
    ///
    /// Objects closer than this to the view point are hidden. Zero means no
    /// fore clipping.
    pub fn fore_clip(&self) -> Option<f64> {
        self.fore_clip
    }

    /// Sets the fore clipping distance.
    pub fn set_fore_clip(&mut self, distance: Option<f64>) {
        self.fore_clip = distance;
    }

    /// Returns the aft clipping distance. Zero means no aft clipping.
    pub fn aft_clip(&self) -> Option<f64> {
        self.aft_clip
    }

    /// Sets the aft clipping distance.
    pub fn set_aft_clip(&mut self, distance: Option<f64>) {
        self.aft_clip = distance;
    }

    /// Returns whether a fore or aft clipping distance is in effect.
    pub fn has_clipping(&self) -> bool {
        clip_value(self.fore_clip).is_some() || clip_value(self.aft_clip).is_some()
    }

    /// Builds a sub-view that skips size validation.
    ///
    /// Used by grid splitting, whose sizes never exceed the parent's.
    pub(crate) fn derived(&self, name: String, h_size: f64, v_size: f64) -> Self {
        Self {
            name,
            position: self.position,
            direction: self.direction,
            up_vector: self.up_vector,
            view_type: self.view_type,
            h_size,
            v_size,
            shift: None,
            lift: None,
            fore_clip: None,
            aft_clip: None,
        }
    }

    /// Returns the dictionary form of this view.
    pub fn to_dict(&self) -> ViewDict {
        ViewDict {
            name: self.name.clone(),
            position: Some(self.position),
            direction: Some(self.direction),
            up_vector: Some(self.up_vector),
            h_size: Some(self.h_size),
            v_size: Some(self.v_size),
            shift: self.shift,
            lift: self.lift,
            view_type: Some(self.view_type),
            fore_clip: self.fore_clip,
            aft_clip: self.aft_clip,
        }
    }

    /// Creates a view from its dictionary form.
    ///
    /// Missing vectors take their defaults. Sizes given in the dictionary
    /// are kept as they are, for any type, as long as they fit its bounds.
    /// Missing sizes default to 180° for fisheye types and 60° otherwise.
    pub fn from_dict(dict: ViewDict) -> Result<Self> {
        let view_type = dict.view_type.unwrap_or_default();
        let default_size = if view_type.is_fisheye() {
            FISHEYE_SIZE
        } else {
            DEFAULT_SIZE
        };
        let h_size = dict.h_size.unwrap_or(default_size);
        let v_size = dict.v_size.unwrap_or(default_size);
        validate_size_for(view_type, "horizontal view size", h_size)?;
        validate_size_for(view_type, "vertical view size", v_size)?;

        let mut view = Self::new(dict.name)?;
        view.position = dict.position.unwrap_or(view.position);
        view.direction = dict.direction.unwrap_or(view.direction);
        view.up_vector = dict.up_vector.unwrap_or(view.up_vector);
        view.h_size = h_size;
        view.v_size = v_size;
        view.shift = dict.shift;
        view.lift = dict.lift;
        view.fore_clip = dict.fore_clip;
        view.aft_clip = dict.aft_clip;
        view.view_type = view_type;
        Ok(view)
    }

    /// Serializes the dictionary form to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_dict())?)
    }

    /// Creates a view from JSON in the dictionary form.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_dict(serde_json::from_str(json)?)
    }
}

/// Treats a zero clip distance the same as an unset one.
#[allow(clippy::float_cmp)]
pub(crate) fn clip_value(distance: Option<f64>) -> Option<f64> {
    distance.filter(|d| *d != 0.0)
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_radiance())
    }
}

/// Dictionary form of a [`View`], for interchange with other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDict {
    pub name: String,
    #[serde(default)]
    pub position: Option<DVec3>,
    #[serde(default)]
    pub direction: Option<DVec3>,
    #[serde(default)]
    pub up_vector: Option<DVec3>,
    #[serde(default)]
    pub h_size: Option<f64>,
    #[serde(default)]
    pub v_size: Option<f64>,
    #[serde(default)]
    pub shift: Option<f64>,
    #[serde(default)]
    pub lift: Option<f64>,
    #[serde(rename = "type", default)]
    pub view_type: Option<ViewType>,
    #[serde(default)]
    pub fore_clip: Option<f64>,
    #[serde(default)]
    pub aft_clip: Option<f64>,
}

impl ViewDict {
    /// Creates a dictionary with only a name; everything else takes defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            direction: None,
            up_vector: None,
            h_size: None,
            v_size: None,
            shift: None,
            lift: None,
            view_type: None,
            fore_clip: None,
            aft_clip: None,
        }
    }
}
