//! Line-oriented driver for running the intake without a page.
//!
//! Each input line is one JSON form snapshot keyed by the stable field
//! identifiers. Lines that cannot be read as a snapshot are host input
//! errors, not submissions: they are logged and skipped.

use crate::intake::RegistrationIntake;
use crate::registry::FormFields;
use crate::surface::{MemoryForm, StatusSurface, SubmitEvent, TableSurface};
use std::io::{self, BufRead};
use tracing::{debug, warn};

/// Outcome counts for one input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    pub accepted: usize,
    pub rejected: usize,
    /// Lines that were not valid UTF-8 or not a JSON snapshot.
    pub skipped: usize,
}

/// Submit every snapshot in `reader` through `intake`.
///
/// Blank lines are ignored. Only a failure of the reader itself is returned
/// as an error.
pub fn feed_snapshots<T, S, R>(
    intake: &mut RegistrationIntake<MemoryForm, T, S>,
    reader: R,
) -> io::Result<FeedSummary>
where
    T: TableSurface,
    S: StatusSurface,
    R: BufRead,
{
    let mut summary = FeedSummary::default();

    for (index, chunk) in reader.split(b'\n').enumerate() {
        let line_no = index + 1;
        let mut bytes = chunk?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping form snapshot that is not UTF-8");
                summary.skipped += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let snapshot: FormFields = match serde_json::from_str(&line) {
            Ok(s) => s,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping malformed form snapshot");
                summary.skipped += 1;
                continue;
            }
        };

        intake.surfaces_mut().form.fill(snapshot);

        let mut event = SubmitEvent::new();
        match intake.on_submit(&mut event) {
            Ok(record) => {
                debug!(line = line_no, record_id = record.id, "Snapshot accepted");
                summary.accepted += 1;
            }
            Err(_) => {
                debug!(line = line_no, "Snapshot rejected");
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntakeConfig;
    use crate::surface::{HtmlStatus, HtmlTable, Surfaces};
    use std::io::{Cursor, Read};

    type TestIntake = RegistrationIntake<MemoryForm, HtmlTable, HtmlStatus>;

    fn intake() -> TestIntake {
        RegistrationIntake::setup(Surfaces::default(), &IntakeConfig::default())
    }

    fn ana_line() -> Vec<u8> {
        r#"{"name":"Ana","surname1":"Pérez","phone":"5512345678","identityCode":"perp900101hdflrn09","email":"ana@example.com"}"#
            .as_bytes()
            .to_vec()
    }

    fn lines(parts: &[&[u8]]) -> Cursor<Vec<u8>> {
        Cursor::new(parts.join(&b'\n'))
    }

    #[test]
    fn test_bad_lines_are_skipped_and_feeding_continues() {
        let mut intake = intake();
        let ana = ana_line();
        let input = lines(&[b"", b"   ", b"not json", b"{\"name\":\"\xff\"}", ana.as_slice()]);

        let summary = feed_snapshots(&mut intake, input).unwrap();

        assert_eq!(
            summary,
            FeedSummary {
                accepted: 1,
                rejected: 0,
                skipped: 2,
            }
        );
        assert_eq!(intake.records()[0].identity_code, "PERP900101HDFLRN09");

        let table = intake.into_surfaces().table.to_html();
        assert!(table.contains("<td>Ana Pérez</td>"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut intake = intake();
        let mut input = ana_line();
        input.extend_from_slice(b"\r\n\r\n");

        let summary = feed_snapshots(&mut intake, Cursor::new(input)).unwrap();
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_rejected_snapshot_is_counted() {
        let mut intake = intake();
        let ana = ana_line();
        let input = lines(&[br#"{"name":"Ana","phone":"55123"}"#, ana.as_slice()]);

        let summary = feed_snapshots(&mut intake, input).unwrap();
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(intake.records().len(), 1);
        // The later success hides the earlier failure.
        assert!(!intake.surfaces().status.is_visible());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_reader_failure_is_returned() {
        let mut intake = intake();
        let reader = io::BufReader::new(FailingReader);

        let err = feed_snapshots(&mut intake, reader).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
