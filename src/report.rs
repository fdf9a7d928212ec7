//! HTML table output for measurement results
//!
//! Writes a single-row HTML table with the measurement timestamp, the
//! per-axis field strength and the compass heading, suitable for inclusion
//! into a monitoring web page.

use crate::error::Result;
use crate::mmc3416::Measurement;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the measurement report table to `path`, replacing any existing file
pub fn write_html<P: AsRef<Path>>(
    path: P,
    taken_at: DateTime<Local>,
    measurement: &Measurement,
    heading: f32,
) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "<table>")?;
    writeln!(
        file,
        "<tr><th>Time</th><th>X [mG]</th><th>Y [mG]</th><th>Z [mG]</th><th>Heading</th></tr>"
    )?;
    writeln!(
        file,
        "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.1}&deg;</td></tr>",
        taken_at.format("%Y-%m-%d %H:%M:%S"),
        measurement.x,
        measurement.y,
        measurement.z,
        heading
    )?;
    writeln!(file, "</table>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn report_contains_heading_and_axes() {
        let dir = std::env::temp_dir().join("mmc3416-report-test.htm");
        let taken_at = Local.with_ymd_and_hms(2021, 9, 13, 12, 0, 0).unwrap();
        let m = Measurement {
            x: 123.45,
            y: -67.89,
            z: 456.78,
        };
        write_html(&dir, taken_at, &m, 337.2).unwrap();

        let html = std::fs::read_to_string(&dir).unwrap();
        assert!(html.contains("<td>2021-09-13 12:00:00</td>"));
        assert!(html.contains("<td>123.45</td>"));
        assert!(html.contains("<td>-67.89</td>"));
        assert!(html.contains("<td>337.2&deg;</td>"));
        std::fs::remove_file(&dir).ok();
    }
}
