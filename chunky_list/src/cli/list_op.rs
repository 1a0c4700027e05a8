// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The verb part of a script operation, eg: `add-index` in `add-index:2:x`.
///
/// More info:
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.EnumString.html>
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.Display.html>
/// - <https://docs.rs/strum_macros/latest/strum_macros/derive.EnumIter.html>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum OpKind {
    AddFront,
    AddBack,
    AddIndex,
    RemoveFront,
    RemoveBack,
    RemoveIndex,
    GetFront,
    GetBack,
    GetIndex,
    Size,
    IsEmpty,
    Dump,
    Stats,
}

impl OpKind {
    /// What follows the verb, if anything.
    #[must_use]
    pub fn expected_argument(&self) -> Option<&'static str> {
        match self {
            OpKind::AddFront | OpKind::AddBack => Some("ITEM"),
            OpKind::AddIndex => Some("INDEX:ITEM"),
            OpKind::RemoveIndex | OpKind::GetIndex => Some("INDEX"),
            OpKind::RemoveFront
            | OpKind::RemoveBack
            | OpKind::GetFront
            | OpKind::GetBack
            | OpKind::Size
            | OpKind::IsEmpty
            | OpKind::Dump
            | OpKind::Stats => None,
        }
    }

    /// Every verb with its argument, eg: `add-index:INDEX:ITEM, remove-front, ...`.
    #[must_use]
    pub fn usage() -> String {
        OpKind::iter()
            .map(|it| match it.expected_argument() {
                Some(argument) => format!("{it}:{argument}"),
                None => it.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One parsed script operation. Indices are signed so that a negative index reaches
/// the list and is reported as out of bounds, rather than failing to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    AddFront(String),
    AddBack(String),
    AddIndex(isize, String),
    RemoveFront,
    RemoveBack,
    RemoveIndex(isize),
    GetFront,
    GetBack,
    GetIndex(isize),
    Size,
    IsEmpty,
    Dump,
    Stats,
}

impl ListOp {
    #[must_use]
    pub fn kind(&self) -> OpKind {
        match self {
            ListOp::AddFront(_) => OpKind::AddFront,
            ListOp::AddBack(_) => OpKind::AddBack,
            ListOp::AddIndex(..) => OpKind::AddIndex,
            ListOp::RemoveFront => OpKind::RemoveFront,
            ListOp::RemoveBack => OpKind::RemoveBack,
            ListOp::RemoveIndex(_) => OpKind::RemoveIndex,
            ListOp::GetFront => OpKind::GetFront,
            ListOp::GetBack => OpKind::GetBack,
            ListOp::GetIndex(_) => OpKind::GetIndex,
            ListOp::Size => OpKind::Size,
            ListOp::IsEmpty => OpKind::IsEmpty,
            ListOp::Dump => OpKind::Dump,
            ListOp::Stats => OpKind::Stats,
        }
    }
}

/// Prints the same text that [`ListOp::from_str`] parses.
impl std::fmt::Display for ListOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = self.kind();
        match self {
            ListOp::AddFront(item) | ListOp::AddBack(item) => write!(f, "{kind}:{item}"),
            ListOp::AddIndex(index, item) => write!(f, "{kind}:{index}:{item}"),
            ListOp::RemoveIndex(index) | ListOp::GetIndex(index) => {
                write!(f, "{kind}:{index}")
            }
            _ => write!(f, "{kind}"),
        }
    }
}

impl FromStr for ListOp {
    type Err = ListOpParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (verb, maybe_argument) = match input.split_once(':') {
            Some((verb, argument)) => (verb, Some(argument)),
            None => (input, None),
        };

        let kind = OpKind::from_str(verb).map_err(|_| ListOpParseError::UnknownOp {
            verb: verb.to_string(),
            known_ops: format!("Known operations: {}", OpKind::usage()),
        })?;

        let Some(expected) = kind.expected_argument() else {
            return match maybe_argument {
                Some(argument) => Err(ListOpParseError::UnexpectedArgument {
                    op: kind,
                    argument: argument.to_string(),
                }),
                None => Ok(no_argument_op(kind)),
            };
        };

        let argument =
            maybe_argument.ok_or(ListOpParseError::MissingArgument { op: kind, expected })?;

        let it = match kind {
            OpKind::AddFront => ListOp::AddFront(argument.to_string()),
            OpKind::AddBack => ListOp::AddBack(argument.to_string()),
            OpKind::AddIndex => {
                let (index, item) = argument
                    .split_once(':')
                    .ok_or(ListOpParseError::MissingArgument { op: kind, expected })?;
                ListOp::AddIndex(parse_index(kind, index)?, item.to_string())
            }
            OpKind::RemoveIndex => ListOp::RemoveIndex(parse_index(kind, argument)?),
            _ => ListOp::GetIndex(parse_index(kind, argument)?),
        };
        Ok(it)
    }
}

fn no_argument_op(kind: OpKind) -> ListOp {
    match kind {
        OpKind::RemoveFront => ListOp::RemoveFront,
        OpKind::RemoveBack => ListOp::RemoveBack,
        OpKind::GetFront => ListOp::GetFront,
        OpKind::GetBack => ListOp::GetBack,
        OpKind::Size => ListOp::Size,
        OpKind::IsEmpty => ListOp::IsEmpty,
        OpKind::Dump => ListOp::Dump,
        _ => ListOp::Stats,
    }
}

fn parse_index(op: OpKind, input: &str) -> Result<isize, ListOpParseError> {
    input
        .trim()
        .parse::<isize>()
        .map_err(|_| ListOpParseError::InvalidIndex {
            op,
            input: input.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ListOpParseError {
    #[error("🤷 Unknown operation '{verb}'")]
    #[diagnostic(code(r3bl_chunky_list::cli::unknown_op))]
    UnknownOp {
        verb: String,
        #[help]
        known_ops: String,
    },

    #[error("🧩 Operation '{op}' expects an argument: {op}:{expected}")]
    #[diagnostic(code(r3bl_chunky_list::cli::missing_argument))]
    MissingArgument { op: OpKind, expected: &'static str },

    #[error("🧩 Operation '{op}' takes no argument, but got '{argument}'")]
    #[diagnostic(code(r3bl_chunky_list::cli::unexpected_argument))]
    UnexpectedArgument { op: OpKind, argument: String },

    #[error("🔢 '{input}' is not a valid index for '{op}'")]
    #[diagnostic(
        code(r3bl_chunky_list::cli::invalid_index),
        help("Indices are whole numbers, eg: 0, 3, -1")
    )]
    InvalidIndex { op: OpKind, input: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("add-front:x", ListOp::AddFront("x".into()))]
    #[test_case("add-back:a:b", ListOp::AddBack("a:b".into()))]
    #[test_case("add-back:", ListOp::AddBack(String::new()))]
    #[test_case("add-index:2:x", ListOp::AddIndex(2, "x".into()))]
    #[test_case("add-index:-1:x", ListOp::AddIndex(-1, "x".into()))]
    #[test_case("remove-front", ListOp::RemoveFront)]
    #[test_case("remove-back", ListOp::RemoveBack)]
    #[test_case("remove-index:3", ListOp::RemoveIndex(3))]
    #[test_case("get-front", ListOp::GetFront)]
    #[test_case("get-back", ListOp::GetBack)]
    #[test_case("get-index:0", ListOp::GetIndex(0))]
    #[test_case("size", ListOp::Size)]
    #[test_case("is-empty", ListOp::IsEmpty)]
    #[test_case("dump", ListOp::Dump)]
    #[test_case("stats", ListOp::Stats)]
    fn test_parse(input: &str, expected: ListOp) {
        let op = ListOp::from_str(input).unwrap();
        assert_eq!(op, expected);
        assert_eq!(op.to_string(), input);
    }

    #[test]
    fn test_every_kind_has_a_verb() {
        for kind in OpKind::iter() {
            assert_eq!(OpKind::from_str(&kind.to_string()), Ok(kind));
        }
        assert_eq!(OpKind::AddIndex.to_string(), "add-index");
        assert!(OpKind::usage().contains("add-index:INDEX:ITEM, remove-front"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ListOp::from_str("pop"),
            Err(ListOpParseError::UnknownOp { verb, .. }) if verb == "pop"
        ));
        assert_eq!(
            ListOp::from_str("add-back"),
            Err(ListOpParseError::MissingArgument {
                op: OpKind::AddBack,
                expected: "ITEM"
            })
        );
        assert_eq!(
            ListOp::from_str("add-index:2"),
            Err(ListOpParseError::MissingArgument {
                op: OpKind::AddIndex,
                expected: "INDEX:ITEM"
            })
        );
        assert_eq!(
            ListOp::from_str("size:1"),
            Err(ListOpParseError::UnexpectedArgument {
                op: OpKind::Size,
                argument: "1".into()
            })
        );
        assert_eq!(
            ListOp::from_str("get-index:one"),
            Err(ListOpParseError::InvalidIndex {
                op: OpKind::GetIndex,
                input: "one".into()
            })
        );
    }

    #[test]
    fn test_parse_error_display() {
        let error = ListOp::from_str("add-back").unwrap_err();
        assert_eq!(
            error.to_string(),
            "🧩 Operation 'add-back' expects an argument: add-back:ITEM"
        );
    }
}
