//! Device architecture tokens and platform-string normalization.
//!
//! Probes describe their platform as `<os>-<arch>` (`linux-x86_64`,
//! `darwin-aarch64`, ...), using whatever spelling the toolchain that built
//! them prefers. [`normalize_dos`] folds those spellings onto the three
//! canonical [`Dos`] values.

use crate::symbol::{deserialize_symbol, resolve, serialize_symbol, Raw, SymbolValue, Vocabulary};
use std::fmt;
use std::str::FromStr;

/// Canonical device architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dos {
    None,
    Arm64,
    X86_64,
}

const DOS_ALIASES: &[(&str, Dos)] = &[
    ("aarch64", Dos::Arm64),
    ("amd64", Dos::X86_64),
    ("x86", Dos::X86_64),
];

impl Vocabulary for Dos {
    const KIND: &'static str = "Dos";
    const FALLBACK: Self = Dos::None;

    fn members() -> &'static [Self] {
        &[Dos::None, Dos::Arm64, Dos::X86_64]
    }

    fn name(self) -> &'static str {
        match self {
            Dos::None => "none",
            Dos::Arm64 => "arm64",
            Dos::X86_64 => "x86_64",
        }
    }

    fn value(self) -> SymbolValue {
        SymbolValue::Text(self.name())
    }

    fn aliases() -> &'static [(&'static str, Self)] {
        DOS_ALIASES
    }
}

impl Dos {
    /// Looks up an architecture token by canonical name or alias.
    ///
    /// Unlike [`Vocabulary::resolve`], this reports a miss instead of
    /// falling back, so callers can tell `none` apart from garbage.
    pub fn canonical(token: &str) -> Option<Dos> {
        let token = token.to_ascii_lowercase();
        Dos::members()
            .iter()
            .copied()
            .find(|dos| dos.name() == token)
            .or_else(|| {
                DOS_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == token)
                    .map(|(_, dos)| *dos)
            })
    }
}

/// Normalizes a `<platform>-<arch>` string into `<platform><canonical arch>`.
///
/// The split happens on the last `-`. Anything without a separator, or with
/// an unknown architecture suffix, normalizes to `"none"`.
///
/// ```
/// use verdict::dos::normalize_dos;
///
/// assert_eq!(normalize_dos("linux-x86_64"), "linuxx86_64");
/// assert_eq!(normalize_dos("Darwin-AArch64"), "darwinarm64");
/// assert_eq!(normalize_dos("windows-ia64"), "none");
/// ```
pub fn normalize_dos(raw: &str) -> String {
    let Some((prefix, arch)) = raw.rsplit_once('-') else {
        return Dos::FALLBACK.name().to_string();
    };
    match Dos::canonical(arch) {
        Some(dos) => format!("{}{}", prefix.to_lowercase(), dos.name()),
        None => Dos::FALLBACK.name().to_string(),
    }
}

impl fmt::Display for Dos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dos {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(resolve(s))
    }
}

impl<'a> From<Dos> for Raw<'a> {
    fn from(dos: Dos) -> Self {
        Raw::Symbol(dos.symbol_ref())
    }
}

impl serde::Serialize for Dos {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_symbol(*self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Dos {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_symbol(deserializer)
    }
}
