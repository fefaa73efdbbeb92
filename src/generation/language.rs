// src/generation/language.rs — Source languages, comment rules, response languages

use serde::{Deserialize, Serialize};

/// Languages a code block may be submitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Java,
    Python,
    Cpp,
    Javascript,
    Typescript,
    JavascriptReact,
    TypescriptReact,
}

impl CodeLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeLanguage::Java => "java",
            CodeLanguage::Python => "python",
            CodeLanguage::Cpp => "cpp",
            CodeLanguage::Javascript => "javascript",
            CodeLanguage::Typescript => "typescript",
            CodeLanguage::JavascriptReact => "javascriptreact",
            CodeLanguage::TypescriptReact => "typescriptreact",
        }
    }

    /// Comment classification used by the fidelity checker.
    ///
    /// Only Python has a concrete rule. Every other language uses
    /// [`ExactMatch`], so a rewritten block must equal the original
    /// line for line (blank lines aside).
    pub fn comment_rule(&self) -> &'static dyn CommentRule {
        match self {
            CodeLanguage::Python => &PythonComments,
            _ => &ExactMatch,
        }
    }

    /// Documentation frameworks accepted by the define command.
    pub fn documentation_frameworks(&self) -> &'static [&'static str] {
        match self {
            CodeLanguage::Cpp => &[],
            CodeLanguage::Python => &["pydoc", "docstring", "doxygen", "swaggerUI", "sphinx"],
            CodeLanguage::Javascript | CodeLanguage::JavascriptReact => &["jsdoc", "esdoc"],
            CodeLanguage::Typescript | CodeLanguage::TypescriptReact => {
                &["typedoc", "tsdoc", "esdoc"]
            }
            CodeLanguage::Java => &["javadoc"],
        }
    }

    /// Case-insensitive framework lookup.
    pub fn supports_framework(&self, framework: &str) -> bool {
        self.documentation_frameworks()
            .iter()
            .any(|f| f.eq_ignore_ascii_case(framework))
    }
}

impl std::fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a single line without altering it.
pub trait CommentRule: Send + Sync {
    fn is_single_line_comment(&self, line: &str) -> bool;

    /// Opens a comment block when seen where a statement could start.
    fn is_block_delimiter(&self, line: &str) -> bool;

    /// Ends an open comment block or multi-line literal.
    fn closes_block(&self, line: &str) -> bool {
        self.is_block_delimiter(line)
    }

    /// An executable line that leaves a string literal open. The lines up
    /// to the matching `closes_block` line are literal text, not comments.
    fn opens_multiline_literal(&self, _line: &str) -> bool {
        false
    }
}

/// No line is ever a comment.
pub struct ExactMatch;

impl CommentRule for ExactMatch {
    fn is_single_line_comment(&self, _line: &str) -> bool {
        false
    }

    fn is_block_delimiter(&self, _line: &str) -> bool {
        false
    }
}

/// `#` line comments and triple-quoted docstrings.
///
/// Only a triple-quoted string that starts its line is a docstring;
/// `sql = """SELECT 1"""` and `text = '''` are code.
pub struct PythonComments;

impl PythonComments {
    fn triple_quotes(line: &str) -> usize {
        line.matches("'''").count() + line.matches("\"\"\"").count()
    }

    fn starts_docstring(line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.starts_with("'''") || trimmed.starts_with("\"\"\"")
    }
}

impl CommentRule for PythonComments {
    fn is_single_line_comment(&self, line: &str) -> bool {
        if line.trim_start().starts_with('#') {
            return true;
        }
        // A docstring opened and closed on the same line.
        let quotes = Self::triple_quotes(line);
        Self::starts_docstring(line) && quotes % 2 == 0
    }

    fn is_block_delimiter(&self, line: &str) -> bool {
        Self::starts_docstring(line) && Self::triple_quotes(line) % 2 == 1
    }

    fn closes_block(&self, line: &str) -> bool {
        Self::triple_quotes(line) % 2 == 1
    }

    fn opens_multiline_literal(&self, line: &str) -> bool {
        Self::triple_quotes(line) % 2 == 1
    }
}

/// Natural language for explain responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NaturalLanguage {
    Urdu,
    Hindi,
    Latin,
    German,
    Arabic,
    Russian,
    Italian,
    #[default]
    English,
    Spanish,
    Mandarin,
    Japanese,
    Portuguese,
}

impl NaturalLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            NaturalLanguage::Urdu => "urdu",
            NaturalLanguage::Hindi => "hindi",
            NaturalLanguage::Latin => "latin",
            NaturalLanguage::German => "german",
            NaturalLanguage::Arabic => "arabic",
            NaturalLanguage::Russian => "russian",
            NaturalLanguage::Italian => "italian",
            NaturalLanguage::English => "english",
            NaturalLanguage::Spanish => "spanish",
            NaturalLanguage::Mandarin => "mandarin",
            NaturalLanguage::Japanese => "japanese",
            NaturalLanguage::Portuguese => "portuguese",
        }
    }
}
