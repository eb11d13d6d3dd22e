use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::report::summarize;
use std::io::BufRead;

/// Reads `<test-id>:<exit code>` lines and tallies them per state.
pub fn run<R: BufRead>(reader: R) -> Result<CmdResult> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    let summary = summarize(&lines);

    let mut result = CmdResult::default();
    for rejected in &summary.rejected {
        result.add_message(CmdMessage::warning(format!("Skipped {}", rejected)));
    }
    if summary.total() == 0 {
        result.add_message(CmdMessage::info("No test results found."));
    }

    Ok(result.with_report(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;
    use std::io::Cursor;

    #[test]
    fn reads_results_from_reader() {
        let input = "2f1d0b8e-3c4a-4d6e-9f70-1a2b3c4d5e6f:127\n\
                     b74ad239-2ddd-4b1e-b608-8397a43c7c54:101\n\
                     broken line\n";
        let result = run(Cursor::new(input)).unwrap();
        let report = result.report.unwrap();

        assert_eq!(report.count(State::Protected), 1);
        assert_eq!(report.count(State::Unprotected), 1);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.starts_with("Skipped line 3"));
    }

    #[test]
    fn empty_input_reports_nothing() {
        let result = run(Cursor::new("")).unwrap();
        assert_eq!(result.report.unwrap().total(), 0);
        assert_eq!(result.messages[0].content, "No test results found.");
    }
}
