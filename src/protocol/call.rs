//! Call-expression marshalling
//!
//! The panel talks to the host runtime by sending the source text of a single
//! function call, e.g. `SequenceRenamer_renameSequence("TEMPLATE", 2)`.
//! Strings are double-quoted with `"` and `\` backslash-escaped, integers are
//! bare. [`ScriptCall::parse`] is the inverse used by the host dispatcher.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{call_parse_error, Result};

/// A single argument of a call expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptArg {
    Str(String),
    Int(i64),
}

impl ScriptArg {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScriptArg::Str(value) => Some(value),
            ScriptArg::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ScriptArg::Int(value) => Some(*value),
            ScriptArg::Str(_) => None,
        }
    }
}

impl fmt::Display for ScriptArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptArg::Str(value) => write!(f, "\"{}\"", escape_string(value)),
            ScriptArg::Int(value) => write!(f, "{value}"),
        }
    }
}

/// A function call crossing the remote-evaluation bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCall {
    pub function: String,
    pub args: Vec<ScriptArg>,
}

impl ScriptCall {
    pub fn new(function: &str) -> Self {
        ScriptCall {
            function: function.to_string(),
            args: Vec::new(),
        }
    }

    /// Append a string argument
    pub fn string(mut self, value: &str) -> Self {
        self.args.push(ScriptArg::Str(value.to_string()));
        self
    }

    /// Append an integer argument
    pub fn integer(mut self, value: impl Into<i64>) -> Self {
        self.args.push(ScriptArg::Int(value.into()));
        self
    }

    /// Source text sent to the host
    pub fn to_source(&self) -> String {
        self.to_string()
    }

    pub fn arg(&self, index: usize) -> Option<&ScriptArg> {
        self.args.get(index)
    }

    /// Parse the source text of a call expression
    ///
    /// # Errors
    /// Returns a call parsing error when the text is not a single call with an
    /// identifier name and string/integer arguments.
    pub fn parse(source: &str) -> Result<ScriptCall> {
        static CALL_SHAPE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?s)^\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\((.*)\)\s*;?\s*$")
                .expect("Failed to compile regex pattern for CALL_SHAPE")
        });

        let captures = CALL_SHAPE
            .captures(source)
            .ok_or_else(|| call_parse_error(source, "not a function call"))?;
        let function = captures
            .get(1)
            .ok_or_else(|| call_parse_error(source, "missing function name"))?
            .as_str();
        let arguments = captures.get(2).map_or("", |m| m.as_str());

        Ok(ScriptCall {
            function: function.to_string(),
            args: parse_arguments(source, arguments)?,
        })
    }
}

impl fmt::Display for ScriptCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}

/// Escape a value for use inside a double-quoted string argument
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn parse_arguments(source: &str, arguments: &str) -> Result<Vec<ScriptArg>> {
    let mut args = Vec::new();
    let mut chars = arguments.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.peek().copied() {
            None if args.is_empty() => return Ok(args),
            None => return Err(call_parse_error(source, "trailing comma")),
            Some('"') => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        None => return Err(call_parse_error(source, "unterminated string")),
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            None => return Err(call_parse_error(source, "unterminated string")),
                            Some('n') => value.push('\n'),
                            Some('t') => value.push('\t'),
                            Some('r') => value.push('\r'),
                            Some(other) => value.push(other),
                        },
                        Some(other) => value.push(other),
                    }
                }
                args.push(ScriptArg::Str(value));
            }
            Some(_) => {
                let mut literal = String::new();
                while let Some(c) = chars.next_if(|c| *c != ',' && !c.is_whitespace()) {
                    literal.push(c);
                }
                let value = literal.parse::<i64>().map_err(|_| {
                    call_parse_error(source, &format!("unsupported argument '{literal}'"))
                })?;
                args.push(ScriptArg::Int(value));
            }
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.next() {
            None => return Ok(args),
            Some(',') => continue,
            Some(other) => {
                return Err(call_parse_error(
                    source,
                    &format!("unexpected '{other}' after argument"),
                ));
            }
        }
    }
}
