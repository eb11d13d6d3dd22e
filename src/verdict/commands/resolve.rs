use crate::commands::{CmdMessage, CmdResult, VocabularyKind};
use crate::symbol::Raw;

/// Resolves each input against one vocabulary. Inputs that match nothing
/// still produce a symbol (the fallback) plus a warning message.
pub fn run<I: AsRef<str>>(kind: VocabularyKind, inputs: &[I]) -> CmdResult {
    let mut result = CmdResult::default();
    let mut symbols = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();
        let symbol = kind.resolve(Raw::Text(input));
        if !symbol.recognized {
            result.add_message(CmdMessage::warning(format!(
                "'{}' is not a known {}, using {}",
                input, kind, symbol.name
            )));
        }
        symbols.push(symbol);
    }

    result.with_symbols(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolValue;

    #[test]
    fn resolves_names_and_values() {
        let result = run(VocabularyKind::RunCode, &["weekly", "20", "Sunday"]);
        let names: Vec<_> = result.symbols.iter().map(|s| s.name).collect();
        assert_eq!(names, ["WEEKLY", "MONTH_1", "SUNDAY"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_input_warns_and_falls_back() {
        let result = run(VocabularyKind::Control, &["made-up"]);
        assert_eq!(result.symbols[0].name, "INVALID");
        assert_eq!(result.symbols[0].value, SymbolValue::Int(-1));
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("not a known control"));
    }

    #[test]
    fn dos_values_are_text() {
        let result = run(VocabularyKind::Dos, &["aarch64"]);
        assert_eq!(result.symbols[0].value, SymbolValue::Text("arm64"));
    }
}
