//! Render sink that writes observations as JSON lines.

use std::io::Write;

use crate::core::{GameSnapshot, RenderSink};
use crate::driver::Report;
use crate::error::{CommandError, SinkError};
use crate::protocol::{ErrorMessage, Observation};

pub struct JsonSink<W: Write> {
    out: W,
    report: Report,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: Report {
                seq: 0,
                applied: Vec::new(),
            },
        }
    }

    /// Attach the command outcome to the next rendered observation.
    pub fn set_report(&mut self, report: Report) {
        self.report = report;
    }

    pub fn write_error(&mut self, seq: u64, err: &CommandError) -> Result<(), SinkError> {
        self.write_line(&ErrorMessage::new(seq, err))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: serde::Serialize>(&mut self, msg: &T) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.out, msg)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderSink for JsonSink<W> {
    type Error = SinkError;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), SinkError> {
        let msg = Observation::from_snapshot(self.report.seq, snapshot, &self.report.applied);
        self.write_line(&msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_message() {
        let mut sink = JsonSink::new(Vec::new());
        sink.set_report(Report {
            seq: 5,
            applied: vec![true, false],
        });
        sink.render(&GameSnapshot::default()).unwrap();
        sink.write_error(6, &CommandError::UnknownAction("fly".into()))
            .unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["seq"], 5);
        assert_eq!(lines[0]["applied"], serde_json::json!([true, false]));
        assert_eq!(lines[1]["type"], "error");
        assert_eq!(lines[1]["code"], "unknown_action");
    }
}
