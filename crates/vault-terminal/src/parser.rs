//! Input line parser.
//!
//! The command language is case-insensitive end to end: the command token
//! and every argument are upper-cased. There is no quoting or escaping;
//! tokens are separated by runs of whitespace.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Upper-cased command token.
    pub command: String,
    /// Upper-cased argument tokens.
    pub args: Vec<String>,
}

impl ParsedInput {
    /// Arguments as string slices, the shape commands take.
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Parse a raw line. Returns `None` for empty or all-whitespace input.
pub fn parse(raw: &str) -> Option<ParsedInput> {
    let mut tokens = raw.split_whitespace().map(str::to_uppercase);
    let command = tokens.next()?;
    Some(ParsedInput {
        command,
        args: tokens.collect(),
    })
}
