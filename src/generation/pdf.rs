// src/generation/pdf.rs — Parse generated documentation into PDF report metadata
//
// The model is asked for a document of the form:
//
//   title: <title>
//   description: <summary>
//   #####
//   function <name>: <one-line descriptor>
//   <description lines>
//   Usage Example:
//   <example code lines>
//   #####
//   ...

use serde::Serialize;

/// Separates the title section from each function section.
pub const SECTION_DELIMITER: &str = "#####";
/// Line that splits a function's description from its usage example.
pub const USAGE_EXAMPLE_SENTINEL: &str = "Usage Example:";
/// Prefix of every report id.
pub const REPORT_ID_PREFIX: &str = "scribe_autodocs__";

const TITLE_MARKER: &str = "title:";
const DESCRIPTION_MARKER: &str = "description:";
const REPORT_ID_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionExplanation {
    pub name: String,
    pub function_descriptor: String,
    pub description: String,
    /// Example usage code, newline-joined.
    pub usage_example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfMetadata {
    pub id: String,
    pub title: String,
    pub footnotes: Vec<String>,
    pub description: Option<String>,
    pub function_explanations: Vec<FunctionExplanation>,
}

/// Parse a generated document, assigning a fresh report id.
pub fn parse_pdf_metadata(text: &str) -> PdfMetadata {
    parse_pdf_metadata_with_id(text, generate_report_id())
}

/// Parse a generated document under a caller-chosen id.
pub fn parse_pdf_metadata_with_id(text: &str, id: String) -> PdfMetadata {
    let mut sections = text.split(SECTION_DELIMITER);
    let (title, description) = parse_heading(sections.next().unwrap_or_default());

    let function_explanations = sections.filter_map(parse_function_section).collect();

    PdfMetadata {
        id,
        title,
        footnotes: Vec::new(),
        description,
        function_explanations,
    }
}

fn parse_heading(section: &str) -> (String, Option<String>) {
    let mut title_lines = Vec::new();
    let mut description_lines = Vec::new();

    for line in section.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((before, after)) = line.split_once(TITLE_MARKER) {
            let joined = [before.trim(), after.trim()]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            title_lines.push(joined);
        } else {
            let text = line.strip_prefix(DESCRIPTION_MARKER).unwrap_or(line).trim();
            description_lines.push(text.to_string());
        }
    }

    let description = description_lines.join(" ");
    let description = (!description.is_empty()).then_some(description);
    (title_lines.join(" "), description)
}

fn parse_function_section(section: &str) -> Option<FunctionExplanation> {
    let mut lines = section.lines().filter(|l| !l.trim().is_empty());
    let descriptor = lines.next()?.trim();

    let mut description_lines = Vec::new();
    let mut usage_lines = Vec::new();
    let mut in_usage = false;

    for line in lines {
        if !in_usage && line.trim() == USAGE_EXAMPLE_SENTINEL {
            in_usage = true;
        } else if in_usage {
            usage_lines.push(line);
        } else {
            description_lines.push(line.trim());
        }
    }

    Some(FunctionExplanation {
        name: function_name(descriptor),
        function_descriptor: descriptor.to_string(),
        description: description_lines.join(" "),
        usage_example: usage_lines.join("\n"),
    })
}

/// Name from a `"<keyword> <name>: ..."` descriptor.
///
/// Takes the second whitespace token before the first colon, falling back
/// to the first token when there is only one.
fn function_name(descriptor: &str) -> String {
    let head = descriptor.split(':').next().unwrap_or_default();
    let mut tokens = head.split_whitespace();
    let first = tokens.next();
    tokens.next().or(first).unwrap_or_default().to_string()
}

/// `scribe_autodocs__` followed by 8 random `[0-9a-z]` characters.
pub fn generate_report_id() -> String {
    const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    // floor(256 / 36) * 36; bytes at or above this would bias the draw
    const REJECT_THRESHOLD: u8 = 252;

    let mut id = String::with_capacity(REPORT_ID_PREFIX.len() + REPORT_ID_LEN);
    id.push_str(REPORT_ID_PREFIX);

    // Sized to match a UUID so it can stand in when the OS RNG fails.
    let mut buf = [0u8; 16];
    while id.len() < REPORT_ID_PREFIX.len() + REPORT_ID_LEN {
        if getrandom::getrandom(&mut buf).is_err() {
            buf.copy_from_slice(uuid::Uuid::new_v4().as_bytes());
        }
        for &b in buf.iter().filter(|&&b| b < REJECT_THRESHOLD) {
            if id.len() == REPORT_ID_PREFIX.len() + REPORT_ID_LEN {
                break;
            }
            id.push(CHARSET[(b as usize) % CHARSET.len()] as char);
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_document() {
        let text = "title: Hello\ndescription: world#####function foo: does X\nsome desc\nUsage Example:\nfoo(1)";
        let meta = parse_pdf_metadata(text);
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.description.as_deref(), Some("world"));
        assert_eq!(meta.function_explanations.len(), 1);
        let f = &meta.function_explanations[0];
        assert_eq!(f.name, "foo");
        assert_eq!(f.function_descriptor, "function foo: does X");
        assert_eq!(f.description, "some desc");
        assert_eq!(f.usage_example, "foo(1)");
        assert!(meta.footnotes.is_empty());
    }

    #[test]
    fn test_multi_line_heading_and_functions() {
        let text = "\
title: Geometry
title: Helpers
description: Utilities for shapes.
Covers areas and perimeters.
#####
function area: Computes the area of a rectangle.
Multiplies width by height.

Returns a float.
Usage Example:
r = Rect(2, 3)
    print(area(r))
#####
def perimeter: Sum of the sides.
Adds all four sides.
";
        let meta = parse_pdf_metadata_with_id(text, "fixed".into());
        assert_eq!(meta.id, "fixed");
        assert_eq!(meta.title, "Geometry Helpers");
        assert_eq!(
            meta.description.as_deref(),
            Some("Utilities for shapes. Covers areas and perimeters.")
        );
        assert_eq!(
            meta.function_explanations,
            vec![
                FunctionExplanation {
                    name: "area".into(),
                    function_descriptor: "function area: Computes the area of a rectangle.".into(),
                    description: "Multiplies width by height. Returns a float.".into(),
                    usage_example: "r = Rect(2, 3)\n    print(area(r))".into(),
                },
                FunctionExplanation {
                    name: "perimeter".into(),
                    function_descriptor: "def perimeter: Sum of the sides.".into(),
                    description: "Adds all four sides.".into(),
                    usage_example: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_no_description_is_none() {
        let meta = parse_pdf_metadata("title: Only a title\n");
        assert_eq!(meta.title, "Only a title");
        assert!(meta.description.is_none());
        assert!(meta.function_explanations.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let meta = parse_pdf_metadata("");
        assert_eq!(meta.title, "");
        assert!(meta.description.is_none());
        assert!(meta.function_explanations.is_empty());
    }

    #[test]
    fn test_blank_sections_skipped() {
        let meta = parse_pdf_metadata("title: T#####\n\n#####function f: x\n");
        assert_eq!(meta.function_explanations.len(), 1);
        assert_eq!(meta.function_explanations[0].name, "f");
    }

    #[test]
    fn test_usage_lines_before_second_sentinel_stay_in_example() {
        let text = "title: T#####function f: x\nd\nUsage Example:\nf()\nUsage Example:\ng()";
        let meta = parse_pdf_metadata(text);
        let f = &meta.function_explanations[0];
        assert_eq!(f.description, "d");
        assert_eq!(f.usage_example, "f()\nUsage Example:\ng()");
    }

    #[test]
    fn test_function_name_second_token() {
        assert_eq!(function_name("function foo: does X"), "foo");
        assert_eq!(function_name("async function fetchAll(url): loads"), "function");
        assert_eq!(function_name("method  bar  : spaced"), "bar");
    }

    #[test]
    fn test_function_name_fallbacks() {
        assert_eq!(function_name("helper: does things"), "helper");
        assert_eq!(function_name("no colon here at all"), "colon");
        assert_eq!(function_name(": nothing before colon"), "");
    }

    #[test]
    fn test_title_marker_mid_line() {
        let meta = parse_pdf_metadata("Report title: Parser internals");
        assert_eq!(meta.title, "Report Parser internals");
    }

    #[test]
    fn test_report_id_shape() {
        let id = generate_report_id();
        let suffix = id.strip_prefix(REPORT_ID_PREFIX).unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_report_ids_differ() {
        assert_ne!(generate_report_id(), generate_report_id());
    }
}
