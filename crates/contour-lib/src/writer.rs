//! XYZ file writer for single contour parts

use crate::{OutputRow, utils};
use std::fs::File;
use std::path::Path;

/// Write the rows of one part to `path`, replacing any existing file
///
/// Rows are written as `x y z` separated by single spaces, one per line, without a header.
/// Returns the number of rows written.
pub fn write_part<I>(path: &Path, rows: I) -> Result<usize, csv::Error>
where
    I: IntoIterator<Item = OutputRow>,
{
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    let mut written = 0;
    for row in rows {
        writer.write_record([
            utils::format_coordinate(row.x),
            utils::format_coordinate(row.y),
            row.z.to_string(),
        ])?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}
