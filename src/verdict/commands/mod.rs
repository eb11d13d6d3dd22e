use crate::codes::{AuditEvent, Control, ExitCode, Mode, Permission, RunCode};
use crate::config::VerdictConfig;
use crate::dos::Dos;
use crate::endpoint::EndpointRegistration;
use crate::error::Result;
use crate::report::ReportSummary;
use crate::state::State;
use crate::symbol::{lookup, Raw, SymbolValue, Vocabulary};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub mod choices;
pub mod classify;
pub mod config;
pub mod endpoint;
pub mod normalize;
pub mod report;
pub mod resolve;

#[derive(Debug, Clone)]
pub struct VerdictPaths {
    pub config_dir: PathBuf,
}

impl VerdictPaths {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn load_config(&self) -> Result<VerdictConfig> {
        VerdictConfig::load(&self.config_dir)
    }
}

/// Names one of the registry's vocabularies at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabularyKind {
    RunCode,
    Mode,
    Permission,
    ExitCode,
    State,
    Control,
    AuditEvent,
    Dos,
}

impl VocabularyKind {
    pub const ALL: [VocabularyKind; 8] = [
        VocabularyKind::RunCode,
        VocabularyKind::Mode,
        VocabularyKind::Permission,
        VocabularyKind::ExitCode,
        VocabularyKind::State,
        VocabularyKind::Control,
        VocabularyKind::AuditEvent,
        VocabularyKind::Dos,
    ];

    /// Command-line spelling, e.g. `exit-code`.
    pub fn slug(self) -> &'static str {
        match self {
            VocabularyKind::RunCode => "run-code",
            VocabularyKind::Mode => "mode",
            VocabularyKind::Permission => "permission",
            VocabularyKind::ExitCode => "exit-code",
            VocabularyKind::State => "state",
            VocabularyKind::Control => "control",
            VocabularyKind::AuditEvent => "audit-event",
            VocabularyKind::Dos => "dos",
        }
    }

    pub fn resolve(self, raw: Raw<'_>) -> SymbolInfo {
        match self {
            VocabularyKind::RunCode => SymbolInfo::resolve::<RunCode>(raw),
            VocabularyKind::Mode => SymbolInfo::resolve::<Mode>(raw),
            VocabularyKind::Permission => SymbolInfo::resolve::<Permission>(raw),
            VocabularyKind::ExitCode => SymbolInfo::resolve::<ExitCode>(raw),
            VocabularyKind::State => SymbolInfo::resolve::<State>(raw),
            VocabularyKind::Control => SymbolInfo::resolve::<Control>(raw),
            VocabularyKind::AuditEvent => SymbolInfo::resolve::<AuditEvent>(raw),
            VocabularyKind::Dos => SymbolInfo::resolve::<Dos>(raw),
        }
    }

    pub fn choices(self) -> Vec<SymbolInfo> {
        match self {
            VocabularyKind::RunCode => SymbolInfo::choices::<RunCode>(),
            VocabularyKind::Mode => SymbolInfo::choices::<Mode>(),
            VocabularyKind::Permission => SymbolInfo::choices::<Permission>(),
            VocabularyKind::ExitCode => SymbolInfo::choices::<ExitCode>(),
            VocabularyKind::State => SymbolInfo::choices::<State>(),
            VocabularyKind::Control => SymbolInfo::choices::<Control>(),
            VocabularyKind::AuditEvent => SymbolInfo::choices::<AuditEvent>(),
            VocabularyKind::Dos => SymbolInfo::choices::<Dos>(),
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for VocabularyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        VocabularyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug().replace('-', "") == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = VocabularyKind::ALL.iter().map(|k| k.slug()).collect();
                format!("Unknown vocabulary '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// A resolved symbol, erased for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolInfo {
    pub vocabulary: &'static str,
    pub name: &'static str,
    pub value: SymbolValue,
    /// False when the input matched nothing and the fallback was used.
    pub recognized: bool,
}

impl SymbolInfo {
    pub fn of<V: Vocabulary>(symbol: V) -> Self {
        Self {
            vocabulary: V::KIND,
            name: symbol.name(),
            value: symbol.value(),
            recognized: true,
        }
    }

    pub fn resolve<V: Vocabulary>(raw: Raw<'_>) -> Self {
        let recognized = lookup::<V>(raw).is_some();
        Self {
            recognized,
            ..Self::of(V::resolve(raw))
        }
    }

    pub fn choices<V: Vocabulary>() -> Vec<Self> {
        V::choices().into_iter().map(Self::of).collect()
    }
}

/// An exit code and the state it classifies into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub input: String,
    pub code: SymbolInfo,
    pub state: SymbolInfo,
}

/// A platform string and its normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDos {
    pub input: String,
    pub dos: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub symbols: Vec<SymbolInfo>,
    pub classifications: Vec<Classification>,
    pub normalized: Vec<NormalizedDos>,
    pub report: Option<ReportSummary>,
    pub endpoint: Option<EndpointRegistration>,
    pub config: Option<VerdictConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_symbols(mut self, symbols: Vec<SymbolInfo>) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_classifications(mut self, classifications: Vec<Classification>) -> Self {
        self.classifications = classifications;
        self
    }

    pub fn with_normalized(mut self, normalized: Vec<NormalizedDos>) -> Self {
        self.normalized = normalized;
        self
    }

    pub fn with_report(mut self, report: ReportSummary) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_endpoint(mut self, endpoint: EndpointRegistration) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_config(mut self, config: VerdictConfig) -> Self {
        self.config = Some(config);
        self
    }
}
