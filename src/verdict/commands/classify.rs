use crate::codes::ExitCode;
use crate::commands::{Classification, CmdMessage, CmdResult, SymbolInfo};
use crate::symbol::{lookup, Vocabulary};

/// Resolves each input as an exit code and attaches its protection state.
pub fn run<I: AsRef<str>>(inputs: &[I]) -> CmdResult {
    let mut result = CmdResult::default();
    let mut classifications = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();
        let recognized = lookup::<ExitCode>(input).is_some();
        if !recognized {
            result.add_message(CmdMessage::warning(format!(
                "'{}' is not a known exit code",
                input
            )));
        }
        let code = ExitCode::resolve(input);
        classifications.push(Classification {
            input: input.to_string(),
            code: SymbolInfo {
                recognized,
                ..SymbolInfo::of(code)
            },
            state: SymbolInfo::of(code.state()),
        });
    }

    result.with_classifications(classifications)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(result: &CmdResult) -> Vec<&'static str> {
        result.classifications.iter().map(|c| c.state.name).collect()
    }

    #[test]
    fn classifies_numeric_and_named_codes() {
        let result = run(&["9", "unprotected", "102", "-1"]);
        assert_eq!(states(&result), ["PROTECTED", "UNPROTECTED", "ERROR", "NONE"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn not_relevant_codes_report_protected() {
        let result = run(&["104", "ENDPOINT_NOT_RELEVANT"]);
        assert_eq!(states(&result), ["PROTECTED", "PROTECTED"]);
    }

    #[test]
    fn unknown_code_is_missing_with_warning() {
        let result = run(&["31337"]);
        assert_eq!(result.classifications[0].code.name, "MISSING");
        assert_eq!(states(&result), ["NONE"]);
        assert_eq!(result.messages.len(), 1);
    }
}
