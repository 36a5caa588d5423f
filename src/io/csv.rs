use std::io::{self, Write};
use std::path::Path;

use crate::sim::recorder::TimeSeries;

/// Write the recorded series as CSV.
///
/// Columns: t, y, p, gamma, W
pub fn write_series<W: Write>(writer: &mut W, series: &TimeSeries) -> io::Result<()> {
    writeln!(writer, "t,y,p,gamma,W")?;
    for s in series.iter() {
        writeln!(
            writer,
            "{:.6},{:.6},{:.4},{:.8},{:.6}",
            s.t, s.y, s.p, s.gamma, s.w
        )?;
    }
    Ok(())
}

/// Write the series to a CSV file at the given path.
pub fn write_series_file<P: AsRef<Path>>(path: P, series: &TimeSeries) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_series(&mut file, series)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut ts = TimeSeries::with_len(2);
        ts.record(0, 0.0, 0.7, 2613.3333, 0.0, 42.0);
        ts.record(1, 0.001, 0.7054, 2598.8013, 0.0001, 42.0);

        let mut buf = Vec::new();
        write_series(&mut buf, &ts).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "t,y,p,gamma,W");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.000000,0.700000,2613.3333,"));
        assert_eq!(lines[2].split(',').count(), 5);
    }
}
