mod cli;
mod logging;
mod metadata;
mod settings;

use contour_lib::{ContourExporter, ExportSummary, open_source};
use settings::Settings;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::setup_logging();
    metadata::log_version_info();

    let settings = Settings::from_cli();
    tracing::debug!("Settings: {:?}", settings);

    match run(&settings) {
        Ok(summary) => {
            tracing::info!(
                "Exported {} parts ({} rows) from {} records of {}",
                summary.parts,
                summary.rows,
                summary.records,
                settings.source.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Export of {} failed: {}", settings.source.display(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg_attr(feature = "profiling", profiling::function)]
fn run(settings: &Settings) -> contour_lib::Result<ExportSummary> {
    let elevation_field = settings.elevation_field();
    let records = open_source(&settings.source, settings.format, &elevation_field)?;

    let mut exporter = ContourExporter::new(settings.export_config());
    tracing::info!(
        "Writing contour files to {}",
        exporter.config().target.directory.display()
    );
    exporter.export_all(records)
}
