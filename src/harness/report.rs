//! Text output for harness results.

use std::io::{self, Write};
use std::time::Duration;

use super::RunReport;

/// How elapsed time is turned into the number that gets printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimingFormat {
    /// Seconds as measured.
    #[default]
    Raw,
    /// `delta + delta / 1e9`, matching the figures of older runs of this
    /// benchmark so they can be compared side by side.
    Legacy,
}

impl TimingFormat {
    pub fn seconds(self, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        match self {
            TimingFormat::Raw => secs,
            TimingFormat::Legacy => secs + secs / 1e9,
        }
    }
}

/// Writes the preview line, the labelled time line and a blank line.
///
/// ```text
/// 0.0 1.0 2.0 3.0 4.0
/// Normal Time: 0.000012345
/// ```
pub fn write_run<W: Write>(out: &mut W, report: &RunReport, format: TimingFormat) -> io::Result<()> {
    let values: Vec<String> = report.preview.iter().map(|v| format!("{v:.1}")).collect();
    writeln!(out, "{}", values.join(" "))?;
    writeln!(
        out,
        "{} Time: {:11.9}",
        report.strategy.label(),
        format.seconds(report.elapsed)
    )?;
    writeln!(out)
}

/// Writes only the mean time in seconds.
pub fn write_mean<W: Write>(out: &mut W, mean: Duration, format: TimingFormat) -> io::Result<()> {
    writeln!(out, "{:11.9}", format.seconds(mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strategy;

    #[test]
    fn test_write_run() {
        let report = RunReport {
            strategy: Strategy::OptimizedParallel,
            elapsed: Duration::from_millis(1500),
            preview: vec![19.0, 22.5],
        };
        let mut buf = Vec::new();
        write_run(&mut buf, &report, TimingFormat::Raw).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "19.0 22.5\nFinal Time: 1.500000000\n\n"
        );
    }

    #[test]
    fn test_write_mean_pads_to_width() {
        let mut buf = Vec::new();
        write_mean(&mut buf, Duration::from_nanos(2_500), TimingFormat::Raw).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0.000002500\n");
    }

    #[test]
    fn test_legacy_adds_nanoscale_term() {
        let d = Duration::from_secs(2);
        assert_eq!(TimingFormat::Raw.seconds(d), 2.0);
        assert_eq!(TimingFormat::Legacy.seconds(d), 2.0 + 2.0 / 1e9);
    }
}
