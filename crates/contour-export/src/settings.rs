use crate::cli::{get_env, parse_args};
use clap::Parser;
use contour_lib::reader::DEFAULT_ELEVATION_FIELD;
use contour_lib::{ExportConfig, OutputTarget, SourceFormat};
use std::path::PathBuf;

/// Environment variable overriding the default elevation attribute
pub const ELEVATION_FIELD_ENV: &str = "CONTOUR_ELEVATION_FIELD";

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Contour Export - Split multi-part contour lines into one XYZ file per part
pub struct Settings {
    /// Source dataset with contour line features (GeoJSON or GPX)
    #[clap(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory for the exported files (defaults to the directory of the source)
    #[clap(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Feature attribute holding the elevation (GeoJSON only)
    #[clap(short, long, value_name = "NAME")]
    pub elevation_field: Option<String>,

    /// Source format: auto, geojson or gpx
    #[clap(short, long, default_value = "auto")]
    pub format: SourceFormat,

    /// Also write every exported part into this DXF drawing
    #[clap(long, value_name = "FILE")]
    pub dxf: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from the process arguments, exiting with usage on error
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Elevation attribute from the flag, the environment or the default, in that order
    pub fn elevation_field(&self) -> String {
        self.elevation_field
            .clone()
            .or_else(|| get_env(ELEVATION_FIELD_ENV))
            .unwrap_or_else(|| DEFAULT_ELEVATION_FIELD.to_string())
    }

    /// Library configuration for this run
    pub fn export_config(&self) -> ExportConfig {
        let target = match &self.output_dir {
            Some(dir) => OutputTarget::in_directory(&self.source, dir),
            None => OutputTarget::beside_source(&self.source),
        };

        let config = ExportConfig::new(target);
        match &self.dxf {
            Some(path) => config.with_dxf(path),
            None => config,
        }
    }
}
