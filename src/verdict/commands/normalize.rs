use crate::commands::{CmdMessage, CmdResult, NormalizedDos};
use crate::dos::{normalize_dos, Dos};
use crate::symbol::Vocabulary;

pub fn run<I: AsRef<str>>(inputs: &[I]) -> CmdResult {
    let mut result = CmdResult::default();
    let mut normalized = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();
        let dos = normalize_dos(input);
        if dos == Dos::FALLBACK.name() {
            result.add_message(CmdMessage::warning(format!(
                "'{}' is not a recognized <platform>-<arch> string",
                input
            )));
        }
        normalized.push(NormalizedDos {
            input: input.to_string(),
            dos,
        });
    }

    result.with_normalized(normalized)
}
