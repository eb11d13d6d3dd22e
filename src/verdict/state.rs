//! # Protection State Classifier
//!
//! A finished test reports a raw [`ExitCode`]. Reports and aggregates only care
//! about a coarser question: did the endpoint defend itself? [`State`] is that
//! coarse dimension, and [`STATE_BUCKETS`] is the single table that decides it.
//!
//! ## Rules
//!
//! - Buckets are scanned in declared order: `NONE`, `PROTECTED`, `UNPROTECTED`,
//!   `ERROR`, `NOT_RELEVANT`. The first bucket containing the code wins.
//! - A code listed in no bucket classifies as `NONE`.
//! - `TEST_NOT_RELEVANT` and `ENDPOINT_NOT_RELEVANT` are listed under both
//!   `PROTECTED` and `NOT_RELEVANT`. Scan order makes them `PROTECTED`; the
//!   `NOT_RELEVANT` entries are kept as declared.
//!
//! The mapping only goes one way. Nothing may rebuild an `ExitCode` from a `State`.

use crate::codes::ExitCode;
use crate::symbol::{vocabulary, Raw, Vocabulary};

vocabulary! {
    /// Coarse outcome bucket of an [`ExitCode`].
    pub enum State("State") fallback None {
        None = "NONE" => 0,
        Protected = "PROTECTED" => 1,
        Unprotected = "UNPROTECTED" => 2,
        Error = "ERROR" => 3,
        NotRelevant = "NOT_RELEVANT" => 4,
    }
}

/// The state partition, in scan order.
pub static STATE_BUCKETS: [(State, &[ExitCode]); 5] = [
    (State::None, &[ExitCode::Missing]),
    (
        State::Protected,
        &[
            ExitCode::ProcessBlocked,
            ExitCode::ProcessBlockedGracefully,
            ExitCode::Protected,
            ExitCode::DynamicQuarantine,
            ExitCode::BlockedAtPerimeter,
            ExitCode::Blocked,
            ExitCode::ExploitPrevented,
            ExitCode::TestDisallowed,
            ExitCode::StaticQuarantine,
            ExitCode::TestNotRelevant,
            ExitCode::EndpointNotRelevant,
        ],
    ),
    (State::Unprotected, &[ExitCode::Unprotected]),
    (
        State::Error,
        &[
            ExitCode::UnknownError,
            ExitCode::MalformedTest,
            ExitCode::TimedOut,
            ExitCode::FailedCleanup,
            ExitCode::UnexpectedError,
        ],
    ),
    (
        State::NotRelevant,
        &[ExitCode::TestNotRelevant, ExitCode::EndpointNotRelevant],
    ),
];

impl State {
    pub fn mapping() -> &'static [(State, &'static [ExitCode])] {
        &STATE_BUCKETS
    }

    /// Codes declared under this state, in declared order.
    pub fn codes(self) -> &'static [ExitCode] {
        STATE_BUCKETS
            .iter()
            .find(|(state, _)| *state == self)
            .map(|(_, codes)| *codes)
            .unwrap_or(&[])
    }
}

/// Classifies an exit code into its protection state.
pub fn classify(code: ExitCode) -> State {
    STATE_BUCKETS
        .iter()
        .find(|(_, codes)| codes.contains(&code))
        .map_or(State::FALLBACK, |(state, _)| *state)
}

/// Resolves untrusted input as an [`ExitCode`], then classifies it.
pub fn classify_raw<'a>(input: impl Into<Raw<'a>>) -> (ExitCode, State) {
    let code = ExitCode::resolve(input);
    (code, classify(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_representative_codes() {
        assert_eq!(classify(ExitCode::ProcessBlocked), State::Protected);
        assert_eq!(classify(ExitCode::Unprotected), State::Unprotected);
        assert_eq!(classify(ExitCode::TimedOut), State::Error);
        assert_eq!(classify(ExitCode::Missing), State::None);
        assert_eq!(classify(ExitCode::UnexpectedError), State::Error);
        assert_eq!(classify(ExitCode::StaticQuarantine), State::Protected);
    }

    #[test]
    fn double_listed_codes_resolve_to_first_bucket() {
        for _ in 0..3 {
            assert_eq!(classify(ExitCode::TestNotRelevant), State::Protected);
            assert_eq!(classify(ExitCode::EndpointNotRelevant), State::Protected);
        }
        assert!(State::NotRelevant.codes().contains(&ExitCode::TestNotRelevant));
    }

    #[test]
    fn scan_order_is_declaration_order() {
        let order: Vec<State> = State::mapping().iter().map(|(s, _)| *s).collect();
        assert_eq!(order, State::members());
    }

    #[test]
    fn every_exit_code_lands_in_a_declared_bucket() {
        for code in ExitCode::members() {
            let state = code.state();
            assert!(
                state.codes().contains(code),
                "{code} classified as {state} but not listed there"
            );
        }
    }

    #[test]
    fn only_not_relevant_codes_are_double_listed() {
        for code in ExitCode::members() {
            let buckets = State::mapping()
                .iter()
                .filter(|(_, codes)| codes.contains(code))
                .count();
            let expected = match code {
                ExitCode::TestNotRelevant | ExitCode::EndpointNotRelevant => 2,
                _ => 1,
            };
            assert_eq!(buckets, expected, "{code}");
        }
    }

    #[test]
    fn classify_raw_resolves_first() {
        assert_eq!(classify_raw(137), (ExitCode::Blocked, State::Protected));
        assert_eq!(classify_raw("101"), (ExitCode::Unprotected, State::Unprotected));
        assert_eq!(classify_raw("nonsense"), (ExitCode::Missing, State::None));
        assert_eq!(classify_raw(None::<i32>), (ExitCode::Missing, State::None));
    }

    #[test]
    fn states_never_turn_back_into_exit_codes() {
        for state in State::members() {
            assert_eq!(ExitCode::resolve(*state), ExitCode::FALLBACK, "{state}");
        }
        assert_eq!(State::resolve(ExitCode::Protected), State::FALLBACK);
    }

    #[test]
    fn state_resolves_like_any_vocabulary() {
        assert_eq!(State::resolve("not_relevant"), State::NotRelevant);
        assert_eq!(State::resolve(77), State::None);
    }
}
