// src/generation/complexity.rs — Parse big-O analysis output into per-function records

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Runtime and space complexity of one function.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FuncComplexity {
    pub runtime: String,
    pub space: String,
}

/// Function name to complexity, in the order functions first appeared.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexityBreakdown {
    entries: Vec<(String, FuncComplexity)>,
}

impl ComplexityBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An existing name keeps its position.
    pub fn insert(&mut self, name: String, complexity: FuncComplexity) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = complexity,
            None => self.entries.push((name, complexity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FuncComplexity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FuncComplexity)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }
}

impl Serialize for ComplexityBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, complexity) in &self.entries {
            map.serialize_entry(name, complexity)?;
        }
        map.end()
    }
}

/// Parse analysis output of the form
///
/// ```text
/// <function>: O(<runtime>) runtime, O(<space>) space
/// ```
///
/// one function per line. Any malformed line empties the whole result;
/// callers can tell "nothing parsed" from the raw text they still hold.
pub fn parse_complexity(text: &str) -> ComplexityBreakdown {
    let mut breakdown = ComplexityBreakdown::new();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match parse_line(line) {
            Some((name, complexity)) => breakdown.insert(name, complexity),
            None => {
                tracing::debug!(line, "malformed complexity line, discarding analysis");
                return ComplexityBreakdown::new();
            }
        }
    }

    breakdown
}

fn parse_line(line: &str) -> Option<(String, FuncComplexity)> {
    let (name, rest) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut segments = rest.split(',');
    let runtime = segments.next().filter(|s| !s.is_empty())?;
    let space = segments.next().filter(|s| !s.is_empty())?;

    Some((
        name.to_string(),
        FuncComplexity {
            runtime: isolate_expression(runtime)?,
            space: isolate_expression(space)?,
        },
    ))
}

/// `" O(n log n) runtime"` -> `"n log n"`.
///
/// Drops the trailing label (everything from the last space on), trims
/// spaces, then unwraps a surrounding `O(...)`.
fn isolate_expression(segment: &str) -> Option<String> {
    let (expression, _label) = segment.rsplit_once(' ')?;
    let expression = expression.trim_matches(' ');
    let inner = expression
        .strip_prefix("O(")
        .and_then(|e| e.strip_suffix(')'))
        .unwrap_or(expression);
    Some(inner.to_string())
}
