use crate::commands::{CmdResult, VocabularyKind};

/// Lists the values a user may pick for `kind`.
pub fn run(kind: VocabularyKind) -> CmdResult {
    CmdResult::default().with_symbols(kind.choices())
}
