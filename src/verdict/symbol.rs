//! # Symbol Registry
//!
//! Every closed vocabulary verdict knows about (run schedules, permission tiers,
//! exit codes, partner identifiers, ...) is a plain `Copy` enum implementing
//! [`Vocabulary`]. This module owns the one lookup policy they all share.
//!
//! ## The Problem
//!
//! Values reach us from places we do not control:
//! - CLI text typed by a user (`--mode autopilot`, `--permission Admin`)
//! - JSON payloads posted back by remote probes (`"code": 137`, `"code": "9"`)
//! - Legacy values stored by older clients
//!
//! None of these may crash the caller, but "unknown" must still be visible as
//! its own symbol instead of silently aliasing to a valid one.
//!
//! ## Resolution Order
//!
//! [`resolve`] tries a fixed sequence of strategies and stops at the first hit:
//!
//! 1. **Identity**: the input already is a member of the vocabulary.
//! 2. **Name**: case-insensitive match on the symbol name (or a declared alias).
//! 3. **Integer value**: the input coerced to an integer matches a declared value.
//! 4. **Text value**: the untouched input matches a declared string value.
//! 5. **Fallback**: the vocabulary's designated fallback symbol.
//!
//! Resolution is total. Before falling back, the vocabulary's
//! [`Vocabulary::on_unresolved`] hook runs; only `ExitCode` uses it (to log).
//!
//! ## Wire Format
//!
//! Vocabularies serialize as their declared value and deserialize through
//! [`resolve`], so a payload carrying an unknown enum value still parses.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// The declared value of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SymbolValue {
    Int(i64),
    Text(&'static str),
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolValue::Int(n) => write!(f, "{}", n),
            SymbolValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A typed symbol, erased to its vocabulary label and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolRef {
    pub kind: &'static str,
    pub name: &'static str,
}

/// Untrusted input waiting to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Raw<'a> {
    Text(&'a str),
    Int(i64),
    Symbol(SymbolRef),
    Missing,
}

impl<'a> Raw<'a> {
    /// The text a name lookup should use. Only text input is looked up by
    /// name; symbols match by identity alone.
    fn name_hint(&self) -> Option<&str> {
        match self {
            Raw::Text(s) => Some(*s),
            Raw::Symbol(_) | Raw::Int(_) | Raw::Missing => None,
        }
    }

    /// The input coerced to an integer, if it is one or parses as one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Raw::Int(n) => Some(*n),
            Raw::Text(s) => s.trim().parse().ok(),
            Raw::Symbol(_) | Raw::Missing => None,
        }
    }
}

impl<'a> From<&'a str> for Raw<'a> {
    fn from(s: &'a str) -> Self {
        Raw::Text(s)
    }
}

impl<'a> From<&'a String> for Raw<'a> {
    fn from(s: &'a String) -> Self {
        Raw::Text(s.as_str())
    }
}

impl From<i64> for Raw<'_> {
    fn from(n: i64) -> Self {
        Raw::Int(n)
    }
}

impl From<i32> for Raw<'_> {
    fn from(n: i32) -> Self {
        Raw::Int(i64::from(n))
    }
}

impl From<u32> for Raw<'_> {
    fn from(n: u32) -> Self {
        Raw::Int(i64::from(n))
    }
}

impl From<u8> for Raw<'_> {
    fn from(n: u8) -> Self {
        Raw::Int(i64::from(n))
    }
}

impl<'a, T: Into<Raw<'a>>> From<Option<T>> for Raw<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Raw::Missing, Into::into)
    }
}

/// A closed enumeration with a total lookup policy.
pub trait Vocabulary: Copy + Eq + fmt::Debug + 'static {
    /// Human label of the vocabulary, e.g. `"ExitCode"`.
    const KIND: &'static str;

    /// Returned whenever an input matches nothing.
    const FALLBACK: Self;

    /// Every member, in declaration order.
    fn members() -> &'static [Self];

    fn name(self) -> &'static str;

    fn value(self) -> SymbolValue;

    /// Extra names that resolve to a member.
    fn aliases() -> &'static [(&'static str, Self)] {
        &[]
    }

    /// Whether the member may be offered to users as an option.
    fn is_choosable(self) -> bool {
        true
    }

    /// Called with the original input right before falling back.
    fn on_unresolved(_raw: &Raw<'_>) {}

    fn resolve<'a>(input: impl Into<Raw<'a>>) -> Self {
        resolve(input)
    }

    /// The members a user may choose, in declaration order.
    fn choices() -> Vec<Self> {
        Self::members()
            .iter()
            .copied()
            .filter(|member| member.is_choosable())
            .collect()
    }

    fn symbol_ref(self) -> SymbolRef {
        SymbolRef {
            kind: Self::KIND,
            name: self.name(),
        }
    }
}

type Strategy<V> = fn(&Raw<'_>) -> Option<V>;

/// Resolves any input to a member of `V`. Never fails.
///
/// ```
/// use verdict::codes::{Permission, RunCode};
/// use verdict::symbol::resolve;
///
/// assert_eq!(resolve::<RunCode>("weekly"), RunCode::Weekly);
/// assert_eq!(resolve::<RunCode>(999), RunCode::Daily);
/// assert_eq!(resolve::<Permission>("-5"), Permission::Invalid);
/// ```
pub fn resolve<'a, V: Vocabulary>(input: impl Into<Raw<'a>>) -> V {
    let raw = input.into();
    match lookup(raw) {
        Some(symbol) => symbol,
        None => {
            V::on_unresolved(&raw);
            V::FALLBACK
        }
    }
}

/// Runs the lookup strategies without falling back.
///
/// `None` means the input matched nothing; no hooks run.
pub fn lookup<'a, V: Vocabulary>(input: impl Into<Raw<'a>>) -> Option<V> {
    let raw = input.into();
    let strategies: [Strategy<V>; 4] = [by_identity, by_name, by_int_value, by_text_value];
    strategies.iter().find_map(|strategy| strategy(&raw))
}

fn by_identity<V: Vocabulary>(raw: &Raw<'_>) -> Option<V> {
    match raw {
        Raw::Symbol(sym) if sym.kind == V::KIND => V::members()
            .iter()
            .copied()
            .find(|member| member.name() == sym.name),
        _ => None,
    }
}

fn by_name<V: Vocabulary>(raw: &Raw<'_>) -> Option<V> {
    let name = raw.name_hint()?;
    V::members()
        .iter()
        .copied()
        .find(|member| member.name().eq_ignore_ascii_case(name))
        .or_else(|| {
            V::aliases()
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                .map(|(_, member)| *member)
        })
}

fn by_int_value<V: Vocabulary>(raw: &Raw<'_>) -> Option<V> {
    let n = raw.as_int()?;
    V::members()
        .iter()
        .copied()
        .find(|member| member.value() == SymbolValue::Int(n))
}

fn by_text_value<V: Vocabulary>(raw: &Raw<'_>) -> Option<V> {
    match raw {
        Raw::Text(s) => V::members()
            .iter()
            .copied()
            .find(|member| matches!(member.value(), SymbolValue::Text(v) if v == *s)),
        _ => None,
    }
}

pub(crate) fn serialize_symbol<V: Vocabulary, S: Serializer>(
    symbol: V,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match symbol.value() {
        SymbolValue::Int(n) => serializer.serialize_i64(n),
        SymbolValue::Text(s) => serializer.serialize_str(s),
    }
}

pub(crate) fn deserialize_symbol<'de, V: Vocabulary, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<V, D::Error> {
    deserializer.deserialize_any(SymbolVisitor(PhantomData))
}

struct SymbolVisitor<V>(PhantomData<V>);

impl<'de, V: Vocabulary> Visitor<'de> for SymbolVisitor<V> {
    type Value = V;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} name or value", V::KIND)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<V, E> {
        Ok(resolve(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<V, E> {
        Ok(resolve(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<V, E> {
        Ok(resolve(i64::try_from(v).ok()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<V, E> {
        if v.is_finite() {
            Ok(resolve(v.trunc() as i64))
        } else {
            Ok(resolve(Raw::Missing))
        }
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<V, E> {
        Ok(resolve(Raw::Missing))
    }

    fn visit_unit<E: de::Error>(self) -> Result<V, E> {
        Ok(resolve(Raw::Missing))
    }

    fn visit_none<E: de::Error>(self) -> Result<V, E> {
        Ok(resolve(Raw::Missing))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<V, D::Error> {
        deserialize_symbol(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<V, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(resolve(Raw::Missing))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<V, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(resolve(Raw::Missing))
    }
}

/// Declares an integer-valued vocabulary enum and its registry plumbing.
///
/// Trailing items inside `extra { ... }` are spliced into the
/// `Vocabulary` impl to override its default hooks.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) fallback $fallback:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal => $value:expr, )+
        }
        $( extra { $($extra:tt)* } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::symbol::Vocabulary for $name {
            const KIND: &'static str = $kind;
            const FALLBACK: Self = $name::$fallback;

            fn members() -> &'static [Self] {
                &[ $( $name::$variant, )+ ]
            }

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            fn value(self) -> $crate::symbol::SymbolValue {
                match self {
                    $( $name::$variant => $crate::symbol::SymbolValue::Int($value), )+
                }
            }

            $( $($extra)* )?
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::symbol::Vocabulary::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok($crate::symbol::resolve(s))
            }
        }

        impl<'a> From<$name> for $crate::symbol::Raw<'a> {
            fn from(symbol: $name) -> Self {
                $crate::symbol::Raw::Symbol($crate::symbol::Vocabulary::symbol_ref(symbol))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::symbol::serialize_symbol(*self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                $crate::symbol::deserialize_symbol(deserializer)
            }
        }
    };
}

pub(crate) use vocabulary;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{Control, ExitCode, Mode, RunCode};
    use crate::state::State;

    #[test]
    fn raw_from_option_maps_none_to_missing() {
        assert_eq!(Raw::from(None::<i32>), Raw::Missing);
        assert_eq!(Raw::from(Some(3)), Raw::Int(3));
    }

    #[test]
    fn text_is_trimmed_only_for_integer_coercion() {
        assert_eq!(Raw::Text(" 42 ").as_int(), Some(42));
        assert_eq!(Raw::Text("forty").as_int(), None);
        assert_eq!(resolve::<Mode>(" frozen"), Mode::Manual);
        assert_eq!(resolve::<Mode>(" 1 "), Mode::Frozen);
    }

    #[test]
    fn identity_wins_before_name_lookup() {
        let raw = Raw::from(ExitCode::Protected);
        assert_eq!(resolve::<ExitCode>(raw), ExitCode::Protected);
    }

    #[test]
    fn foreign_symbol_falls_back() {
        // Shared names must not carry a symbol across vocabularies
        assert_eq!(resolve::<ExitCode>(State::Protected), ExitCode::Missing);
        assert_eq!(resolve::<State>(ExitCode::Protected), State::None);
        assert_eq!(resolve::<Control>(State::None), Control::Invalid);
        assert_eq!(lookup::<ExitCode>(State::Unprotected), None);
        assert_eq!(resolve::<Control>(Control::Vectr), Control::Vectr);
    }

    #[test]
    fn name_lookup_precedes_value_lookup() {
        // "1" is not a name, so it falls through to the integer value
        assert_eq!(resolve::<RunCode>("1"), RunCode::Daily);
        assert_eq!(resolve::<RunCode>("Monday"), RunCode::Monday);
    }

    #[test]
    fn lookup_distinguishes_fallback_from_miss() {
        assert_eq!(lookup::<Control>("invalid"), Some(Control::Invalid));
        assert_eq!(lookup::<Control>("made-up"), None);
        assert_eq!(lookup::<ExitCode>(999), None);
    }

    #[test]
    fn missing_input_falls_back() {
        assert_eq!(resolve::<RunCode>(Raw::Missing), RunCode::Daily);
        assert_eq!(resolve::<Control>(None::<&str>), Control::Invalid);
    }

    #[test]
    fn symbol_value_display() {
        assert_eq!(SymbolValue::Int(-1).to_string(), "-1");
        assert_eq!(SymbolValue::Text("arm64").to_string(), "arm64");
    }

    #[test]
    fn deserializes_any_json_shape_totally() {
        let code: ExitCode = serde_json::from_str("137").unwrap();
        assert_eq!(code, ExitCode::Blocked);
        let code: ExitCode = serde_json::from_str("\"9\"").unwrap();
        assert_eq!(code, ExitCode::ProcessBlocked);
        let code: ExitCode = serde_json::from_str("\"timed_out\"").unwrap();
        assert_eq!(code, ExitCode::TimedOut);
        let code: ExitCode = serde_json::from_str("null").unwrap();
        assert_eq!(code, ExitCode::Missing);
        let code: ExitCode = serde_json::from_str("{\"a\": [1, 2]}").unwrap();
        assert_eq!(code, ExitCode::Missing);
        let code: ExitCode = serde_json::from_str("true").unwrap();
        assert_eq!(code, ExitCode::Missing);
        let mode: Mode = serde_json::from_str("2.0").unwrap();
        assert_eq!(mode, Mode::Autopilot);
    }

    #[test]
    fn serializes_as_declared_value() {
        assert_eq!(serde_json::to_string(&RunCode::Month1).unwrap(), "20");
        assert_eq!(serde_json::to_string(&Control::Invalid).unwrap(), "-1");
    }
}
