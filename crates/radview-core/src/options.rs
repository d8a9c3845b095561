//! Configuration options for radview.

use serde::{Deserialize, Serialize};

/// Defaults used when fitting resolutions and reading or writing view files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Horizontal resolution used when none is requested (Radiance default).
    pub default_x_res: u32,

    /// Vertical resolution used when none is requested (Radiance default).
    pub default_y_res: u32,

    /// Leading token of a view file.
    pub file_header: String,

    /// Extension appended to view file names.
    pub file_extension: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_x_res: 512,
            default_y_res: 512,
            file_header: "rvu".to_string(),
            file_extension: "vf".to_string(),
        }
    }
}

impl Options {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default resolution.
    pub fn with_default_resolution(mut self, x_res: u32, y_res: u32) -> Self {
        self.default_x_res = x_res;
        self.default_y_res = y_res;
        self
    }

    /// Sets the view file extension (without the dot).
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    /// Returns the file name used for a view saved under `stem`.
    ///
    /// A stem that already carries the extension is used as is.
    pub fn file_name(&self, stem: &str) -> String {
        let suffix = format!(".{}", self.file_extension);
        if stem.ends_with(&suffix) {
            stem.to_string()
        } else {
            format!("{stem}{suffix}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert_eq!(options.default_x_res, 512);
        assert_eq!(options.default_y_res, 512);
        assert_eq!(options.file_header, "rvu");
    }

    #[test]
    fn test_file_name() {
        let options = Options::new();
        assert_eq!(options.file_name("office"), "office.vf");
        assert_eq!(options.file_name("office.vf"), "office.vf");

        let options = Options::new().with_file_extension("view");
        assert_eq!(options.file_name("office"), "office.view");
    }

    #[test]
    fn test_partial_json() {
        let options: Options = serde_json::from_str(r#"{"default_x_res": 1024}"#).unwrap();
        assert_eq!(options.default_x_res, 1024);
        assert_eq!(options.default_y_res, 512);
    }
}
