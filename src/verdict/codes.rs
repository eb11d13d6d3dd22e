//! # Vocabularies
//!
//! The integer-valued vocabularies shared by the CLI, the SDK surface and the
//! probes. Each is declared once through the registry macro, which wires up
//! lookup, `Display`, a total `FromStr` and serde.
//!
//! | Vocabulary     | Fallback         | Hidden from choices |
//! |----------------|------------------|---------------------|
//! | [`RunCode`]    | `DAILY`          |                     |
//! | [`Mode`]       | `MANUAL`         |                     |
//! | [`Permission`] | `INVALID`        | `INVALID`           |
//! | [`ExitCode`]   | `MISSING`        |                     |
//! | [`Control`]    | `INVALID`        |                     |
//! | [`AuditEvent`] | `INVALID`        | `INVALID`           |
//!
//! [`State`](crate::state::State) and [`Dos`](crate::dos::Dos) live next to the
//! logic that consumes them.

use crate::state::{classify, State};
use crate::symbol::{vocabulary, Raw};
use tracing::warn;

vocabulary! {
    /// Scheduling cadence of a test.
    pub enum RunCode("RunCode") fallback Daily {
        Invalid = "INVALID" => -1,
        Daily = "DAILY" => 1,
        Weekly = "WEEKLY" => 2,
        Monthly = "MONTHLY" => 3,
        Smart = "SMART" => 4,
        Debug = "DEBUG" => 5,
        Monday = "MONDAY" => 10,
        Tuesday = "TUESDAY" => 11,
        Wednesday = "WEDNESDAY" => 12,
        Thursday = "THURSDAY" => 13,
        Friday = "FRIDAY" => 14,
        Saturday = "SATURDAY" => 15,
        Sunday = "SUNDAY" => 16,
        Month1 = "MONTH_1" => 20,
    }
}

vocabulary! {
    /// Account automation mode.
    pub enum Mode("Mode") fallback Manual {
        Manual = "MANUAL" => 0,
        Frozen = "FROZEN" => 1,
        Autopilot = "AUTOPILOT" => 2,
    }
}

vocabulary! {
    /// User privilege tier.
    pub enum Permission("Permission") fallback Invalid {
        Invalid = "INVALID" => -1,
        Admin = "ADMIN" => 0,
        Executive = "EXECUTIVE" => 1,
        Build = "BUILD" => 2,
        Service = "SERVICE" => 3,
        Auto = "AUTO" => 4,
    }
    extra {
        fn is_choosable(self) -> bool {
            self != Permission::Invalid
        }
    }
}

vocabulary! {
    /// Raw process-exit outcome of an executed security test.
    ///
    /// An unknown numeric code is operationally significant (a probe ran
    /// something we cannot interpret), so it is logged before falling back
    /// to `MISSING`.
    pub enum ExitCode("ExitCode") fallback Missing {
        Missing = "MISSING" => -1,
        UnknownError = "UNKNOWN_ERROR" => 1,
        MalformedTest = "MALFORMED_TEST" => 2,
        ProcessBlocked = "PROCESS_BLOCKED" => 9,
        ProcessBlockedGracefully = "PROCESS_BLOCKED_GRACEFULLY" => 15,
        Protected = "PROTECTED" => 100,
        Unprotected = "UNPROTECTED" => 101,
        TimedOut = "TIMED_OUT" => 102,
        FailedCleanup = "FAILED_CLEANUP" => 103,
        TestNotRelevant = "TEST_NOT_RELEVANT" => 104,
        DynamicQuarantine = "DYNAMIC_QUARANTINE" => 105,
        BlockedAtPerimeter = "BLOCKED_AT_PERIMETER" => 106,
        ExploitPrevented = "EXPLOIT_PREVENTED" => 107,
        EndpointNotRelevant = "ENDPOINT_NOT_RELEVANT" => 108,
        TestDisallowed = "TEST_DISALLOWED" => 126,
        StaticQuarantine = "STATIC_QUARANTINE" => 127,
        Blocked = "BLOCKED" => 137,
        UnexpectedError = "UNEXPECTED_ERROR" => 256,
    }
    extra {
        fn on_unresolved(raw: &Raw<'_>) {
            if let Some(code) = raw.as_int() {
                warn!(code, "Unknown ExitCode: {}", code);
            }
        }
    }
}

impl ExitCode {
    /// The coarse protection state of this code.
    pub fn state(self) -> State {
        classify(self)
    }
}

vocabulary! {
    /// Partner (EDR/SIEM vendor) identifier.
    pub enum Control("Control") fallback Invalid {
        Invalid = "INVALID" => -1,
        None = "NONE" => 0,
        Crowdstrike = "CROWDSTRIKE" => 1,
        Defender = "DEFENDER" => 2,
        Splunk = "SPLUNK" => 3,
        Sentinelone = "SENTINELONE" => 4,
        Vectr = "VECTR" => 5,
    }
}

vocabulary! {
    /// Kind of an audit-log event.
    pub enum AuditEvent("AuditEvent") fallback Invalid {
        Invalid = "INVALID" => 0,
        AttachPartner = "ATTACH_PARTNER" => 1,
        CreateTest = "CREATE_TEST" => 2,
        CreateUser = "CREATE_USER" => 3,
        DeleteEndpoint = "DELETE_ENDPOINT" => 4,
        DeleteTest = "DELETE_TEST" => 5,
        DeleteUser = "DELETE_USER" => 6,
        DetachPartner = "DETACH_PARTNER" => 7,
        DisableTest = "DISABLE_TEST" => 8,
        DownloadTestAttachment = "DOWNLOAD_TEST_ATTACHMENT" => 9,
        EnableTest = "ENABLE_TEST" => 10,
        PartnerBlockTest = "PARTNER_BLOCK_TEST" => 11,
        RegisterEndpoint = "REGISTER_ENDPOINT" => 12,
        UpdateAccount = "UPDATE_ACCOUNT" => 13,
        UpdateEndpoint = "UPDATE_ENDPOINT" => 14,
        UpdateTest = "UPDATE_TEST" => 15,
        UploadTestAttachment = "UPLOAD_TEST_ATTACHMENT" => 16,
    }
    extra {
        fn is_choosable(self) -> bool {
            self != AuditEvent::Invalid
        }
    }
}
