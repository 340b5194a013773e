// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default message-template formatter
//!
//! Templates use named holes bound positionally to arguments:
//!
//! - `"Hello {Name}"` with `["World"]` renders `"Hello World"`
//! - `{{` and `}}` are literal braces
//! - `{Elapsed:0.00}` and `{Name,10}` name the hole `Elapsed` / `Name`;
//!   the specifier is ignored
//!
//! The structured pairs are the holes in order, followed by the raw template
//! under [`ORIGINAL_FORMAT_KEY`].

use crate::value::{Pair, Value};

/// Reserved key holding the unformatted template string
pub const ORIGINAL_FORMAT_KEY: &str = "{OriginalFormat}";

/// Rendering used for a `Null` argument
const NULL_TEXT: &str = "(null)";

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Hole(String),
}

/// A template bound to its arguments
#[derive(Debug, Clone)]
pub struct LogValues {
    template: String,
    segments: Vec<Segment>,
    values: Vec<Value>,
}

impl LogValues {
    /// Bind `args` to the holes of `template` in order.
    ///
    /// Missing arguments bind `Null`; surplus arguments are dropped.
    pub fn new<I, V>(template: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let template = template.into();
        let segments = parse(&template);
        let holes = segments
            .iter()
            .filter(|s| matches!(s, Segment::Hole(_)))
            .count();
        let mut values: Vec<Value> = args.into_iter().take(holes).map(Into::into).collect();
        values.resize(holes, Value::Null);
        Self {
            template,
            segments,
            values,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Named holes with their bound values, then the original template
    pub fn pairs(&self) -> Vec<Pair> {
        let mut pairs: Vec<Pair> = self
            .holes()
            .zip(self.values.iter())
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        pairs.push((
            ORIGINAL_FORMAT_KEY.to_string(),
            Value::Str(self.template.clone()),
        ));
        pairs
    }

    /// Render the template with its arguments substituted
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut values = self.values.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Hole(_) => match values.next() {
                    Some(Value::Null) | None => out.push_str(NULL_TEXT),
                    Some(value) => out.push_str(&value.to_string()),
                },
            }
        }
        out
    }

    fn holes(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Hole(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

fn parse(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut body = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }
                if !closed {
                    // Unterminated hole is kept as text
                    literal.push('{');
                    literal.push_str(&body);
                    continue;
                }
                let name = body
                    .split([':', ','])
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Hole(name));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
