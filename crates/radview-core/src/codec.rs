//! Conversion between views and Radiance parameter strings.

use crate::error::{Result, ViewError};
use crate::flags::{join_options, parse_options, RadianceOption};
use crate::options::Options;
use crate::view::{clip_value, View, ViewDict};
use crate::view_type::ViewType;

impl View {
    /// Returns the options of this view in Radiance order.
    ///
    /// Unset shift, lift and clip values (and zero clips) render as nothing.
    pub fn radiance_options(&self) -> [RadianceOption; 10] {
        [
            RadianceOption::joined("vt", self.view_type()),
            RadianceOption::tuple("vp", self.position()),
            RadianceOption::tuple("vd", self.direction()),
            RadianceOption::tuple("vu", self.up_vector()),
            RadianceOption::numeric("vh", Some(self.h_size())),
            RadianceOption::numeric("vv", Some(self.v_size())),
            RadianceOption::numeric("vs", self.shift()),
            RadianceOption::numeric("vl", self.lift()),
            RadianceOption::numeric("vo", clip_value(self.fore_clip())),
            RadianceOption::numeric("va", clip_value(self.aft_clip())),
        ]
    }

    /// Returns the view as Radiance parameters, e.g.
    /// `-vtv -vp 0 0 0 -vd 0 0 1 -vu 0 1 0 -vh 60 -vv 60`.
    pub fn to_radiance(&self) -> String {
        join_options(&self.radiance_options())
    }

    /// Returns the contents of a view file for this view.
    pub fn view_file_content(&self) -> String {
        self.view_file_content_with(&Options::default())
    }

    /// Returns the contents of a view file using the header from `options`.
    pub fn view_file_content_with(&self, options: &Options) -> String {
        format!("{} {}", options.file_header, self.to_radiance())
    }

    /// Parses a view from Radiance parameters.
    ///
    /// Parameters that do not describe the view (such as `-ab 2`) are
    /// ignored, so a full `rpict` command line can be passed in.
    pub fn from_radiance(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut dict = ViewDict::new(name);

        for option in parse_options(text) {
            match option.name.as_str() {
                "vp" => dict.position = Some(option.as_vec3()?),
                "vd" => dict.direction = Some(option.as_vec3()?),
                "vu" => dict.up_vector = Some(option.as_vec3()?),
                "vh" => dict.h_size = Some(option.as_f64()?),
                "vv" => dict.v_size = Some(option.as_f64()?),
                "vs" => dict.shift = Some(option.as_f64()?),
                "vl" => dict.lift = Some(option.as_f64()?),
                "vo" => dict.fore_clip = Some(option.as_f64()?),
                "va" => dict.aft_clip = Some(option.as_f64()?),
                name if name.starts_with("vt") => {
                    dict.view_type = Some(ViewType::parse_code(name)?);
                }
                name => log::warn!("-{name} is not a view parameter and is ignored."),
            }
        }

        View::from_dict(dict)
    }

    /// Parses the contents of a view file, which must start with `rvu`.
    pub fn from_view_file_content(name: impl Into<String>, text: &str) -> Result<Self> {
        Self::from_view_file_content_with(name, text, &Options::default())
    }

    /// Parses the contents of a view file whose header is set by `options`.
    pub fn from_view_file_content_with(
        name: impl Into<String>,
        text: &str,
        options: &Options,
    ) -> Result<Self> {
        let header = text.split_whitespace().next().unwrap_or_default();
        if header != options.file_header {
            return Err(ViewError::format(format!(
                "view file must start with {} not '{header}'",
                options.file_header
            )));
        }
        Self::from_radiance(name, text)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    #[test]
    fn test_default_to_radiance() {
        let view = View::new("default").unwrap();
        assert_eq!(
            view.to_radiance(),
            "-vtv -vp 0 0 0 -vd 0 0 1 -vu 0 1 0 -vh 60 -vv 60"
        );
    }

    #[test]
    fn test_unset_shift_lift_omitted() {
        let view = View::new("v").unwrap();
        let text = view.to_radiance();
        assert!(!text.contains("-vs"));
        assert!(!text.contains("-vl"));

        let view = view.with_shift(Some(-0.5)).with_lift(Some(0.5));
        assert!(view.to_radiance().ends_with("-vs -0.5 -vl 0.5"));
    }

    #[test]
    fn test_clip_order() {
        let view = View::new("v")
            .unwrap()
            .with_fore_clip(Some(100.0))
            .with_aft_clip(Some(0.0));
        assert!(view.to_radiance().ends_with("-vv 60 -vo 100"));
    }

    #[test]
    fn test_view_file_content() {
        let view = View::new("v").unwrap();
        assert!(view.view_file_content().starts_with("rvu -vtv "));
    }

    #[test]
    fn test_from_radiance() {
        let view = View::from_radiance(
            "parsed",
            "-vth -vp 1 2 3 -vd 0 -1 0 -vu 0 0 1 -vh 180 -vv 180 -vs -0.5 -vo 2",
        )
        .unwrap();
        assert_eq!(view.name(), "parsed");
        assert_eq!(view.view_type(), ViewType::Hemispherical);
        assert_eq!(view.position(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(view.direction(), DVec3::NEG_Y);
        assert_eq!(view.up_vector(), DVec3::Z);
        assert_eq!(view.shift(), Some(-0.5));
        assert_eq!(view.lift(), None);
        assert_eq!(view.fore_clip(), Some(2.0));
    }

    #[test]
    fn test_from_radiance_ignores_other_flags() {
        let view = View::from_radiance("v", "rpict -ab 2 -vtl -vh 20 -vv 10 -ad 1024").unwrap();
        assert_eq!(view.view_type(), ViewType::Parallel);
        assert_eq!(view.h_size(), 20.0);
        assert_eq!(view.v_size(), 10.0);
    }

    #[test]
    fn test_from_radiance_defaults() {
        let view = View::from_radiance("v", "").unwrap();
        assert_eq!(view, View::new("v").unwrap());
    }

    #[test]
    fn test_from_radiance_bad_values() {
        assert!(matches!(
            View::from_radiance("v", "-vp 1 2"),
            Err(ViewError::Format(_))
        ));
        assert!(matches!(
            View::from_radiance("v", "-vh wide"),
            Err(ViewError::Format(_))
        ));
        assert!(matches!(
            View::from_radiance("v", "-vtv -vh 200"),
            Err(ViewError::Validation(_))
        ));
        assert!(matches!(
            View::from_radiance("v", "-vtz"),
            Err(ViewError::Validation(_))
        ));
    }

    #[test]
    fn test_roundtrip() {
        let view = View::new("trip")
            .unwrap()
            .with_position(DVec3::new(0.1, -2.25, 1e-7))
            .with_direction(DVec3::new(0.3, 0.4, -5.0))
            .with_up_vector(DVec3::new(0.0, 0.0, 1.0))
            .with_view_type(ViewType::Parallel)
            .unwrap()
            .with_sizes(12.5, 300.0)
            .unwrap()
            .with_shift(Some(1.0 / 3.0))
            .with_lift(Some(-0.25))
            .with_fore_clip(Some(0.5))
            .with_aft_clip(Some(42.0));
        let back = View::from_radiance("trip", &view.to_radiance()).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn test_fisheye_tile_roundtrip() {
        let tile = View::new("fish")
            .unwrap()
            .with_view_type(ViewType::Hemispherical)
            .unwrap()
            .grid(2, 2)
            .unwrap()
            .remove(0);
        assert!(tile.h_size() < 180.0);
        let back = View::from_radiance(tile.name(), &tile.to_radiance()).unwrap();
        assert_eq!(back, tile);
    }

    #[test]
    fn test_fisheye_default_sizes() {
        let view = View::from_radiance("v", "-vta").unwrap();
        assert_eq!(view.h_size(), 180.0);
        assert_eq!(view.v_size(), 180.0);
    }

    #[test]
    fn test_view_file_header() {
        let view = View::from_view_file_content("f", "rvu -vtv -vh 45 -vv 30").unwrap();
        assert_eq!(view.h_size(), 45.0);

        let err = View::from_view_file_content("f", "-vtv -vh 45");
        assert!(matches!(err, Err(ViewError::Format(_))));
        let err = View::from_view_file_content("f", "");
        assert!(matches!(err, Err(ViewError::Format(_))));
    }
}
