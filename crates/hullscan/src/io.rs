//! Text format for point sets and hulls.
//!
//! Input: the first non-blank line holds the point count `N`, followed by `N`
//! lines of two whitespace-separated floats. Extra tokens on a line and
//! anything after the `N`-th point line are ignored.
//!
//! Output: the count on one line, then one point per line as
//! `{x:11.6}  {y:11.6}` (six decimals, width 11, two spaces).

use std::fmt;
use std::io::{self, Write};

use crate::geom::Point;
use crate::scan::DEFAULT_CAPACITY;

/// Malformed point-set text. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No count line at all.
    Empty,
    /// The count line does not start with a non-negative integer.
    BadCount { line: usize },
    /// Input ended before `expected` point lines were read.
    MissingPoints { expected: usize, found: usize },
    /// A point line lacks two parseable coordinates.
    BadPoint { line: usize },
    /// A coordinate parsed but is NaN or infinite.
    NonFinite { line: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "input is empty (expected a point count)"),
            ParseError::BadCount { line } => write!(f, "line {line}: invalid point count"),
            ParseError::MissingPoints { expected, found } => write!(
                f,
                "expected {expected} points but input ended after {found}"
            ),
            ParseError::BadPoint { line } => {
                write!(f, "line {line}: expected two coordinates \"x y\"")
            }
            ParseError::NonFinite { line } => write!(f, "line {line}: coordinate is not finite"),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_point(line: &str, line_no: usize) -> Result<Point, ParseError> {
    let mut tokens = line.split_whitespace();
    let mut coord = || -> Result<f64, ParseError> {
        tokens
            .next()
            .and_then(|t| t.parse::<f64>().ok())
            .ok_or(ParseError::BadPoint { line: line_no })
    };
    let x = coord()?;
    let y = coord()?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(ParseError::NonFinite { line: line_no });
    }
    Ok(Point::new(x, y))
}

/// Parse a count-prefixed point list.
pub fn parse_points(text: &str) -> Result<Vec<Point>, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .skip_while(|(_, l)| l.trim().is_empty());

    let (count_line, header) = lines.next().ok_or(ParseError::Empty)?;
    let expected: usize = header
        .split_whitespace()
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(ParseError::BadCount { line: count_line })?;

    let mut points = Vec::with_capacity(expected.min(DEFAULT_CAPACITY));
    for (line_no, line) in lines.take(expected) {
        points.push(parse_point(line, line_no)?);
    }
    if points.len() < expected {
        return Err(ParseError::MissingPoints {
            expected,
            found: points.len(),
        });
    }
    Ok(points)
}

/// Render points in the output format.
pub fn format_points(points: &[Point]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{:11.6}  {:11.6}\n", p.x, p.y));
    }
    out
}

/// Write points in the output format.
pub fn write_points<W: Write>(mut writer: W, points: &[Point]) -> io::Result<()> {
    writer.write_all(format_points(points).as_bytes())?;
    writer.flush()
}
