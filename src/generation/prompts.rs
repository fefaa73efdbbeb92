// src/generation/prompts.rs — System prompts and user messages per command

use serde::{Deserialize, Serialize};

use super::language::{CodeLanguage, NaturalLanguage};
use super::pdf::{SECTION_DELIMITER, USAGE_EXAMPLE_SENTINEL};
use crate::provider::Message;

pub const ANNOTATE_PREFIX: &str = "/annotate";
pub const EXPLAIN_PREFIX: &str = "/explain";
pub const DEFINE_PREFIX: &str = "/define";
pub const REVISE_PREFIX: &str = "/revise";
pub const ANALYSE_PREFIX: &str = "/analyse";
pub const GENERATE_PREFIX: &str = "/generate";

pub const COMPLEXITY_TAG: &str = "--complexity";
pub const FRAMEWORK_TAG: &str = "--framework";
pub const NAMING_SCHEME_TAG: &str = "--naming-scheme";

const PREAMBLE: &str = "You are a helpful and autonomous code documentation tool. You understand \
the structure and behaviour of source code. You will be given blocks of code and must produce \
documentation or analysis for them when prompted with the command described below.\n\n";

const OUTPUT_ONLY: &str = "\n\nRespond with the output of the command only. Do not add \
conversational text, headings or any other metadata.";

const ANNOTATE_BODY: &str = "Your command is /annotate. When a message starts with \"/annotate\", \
return an exact replica of the code block that follows with line-by-line comments added where \
they help. Do not change the code in any way: only add comment lines (and blank lines if \
needed). Put the comment for a line of code directly above that line. When a chunk of lines is \
best summarised as a whole, put one comment block above the chunk instead of commenting each \
line. Never put comments at the end of a code line. Wrap comments so no line exceeds 100 \
characters including indentation. Do not comment the line that declares a function or class; \
only comment inside functions and classes.";

const EXPLAIN_BODY: &str = "Your command is /explain. When a message starts with \"/explain\", \
return a clear, grammatically correct explanation of what the code block that follows does. \
The tag \"--complexity=#\" sets the depth from 1 to 5: level 1 is a plain summary of at most 50 \
words that a project manager understands, level 5 is a complete technical explanation for a \
software engineer. Grow more detailed as the level rises. At level 5 only, also describe \
practical use cases and suggest changes that would improve performance, if there are any.";

const DEFINE_BODY: &str = "Your command is /define. When a message starts with \"/define\", \
return an exact replica of the code block that follows with a definition added for every \
function and class declaration. Each definition is a short, clear description of the \
declaration together with its inputs and outputs. Do not change the code itself.";

const DEFINE_DEFAULT_FORMAT: &str = "No documentation framework was requested. Use this Python \
snippet as the model for a definition, adapting the comment syntax to the language:\n\n\
def sum(a: int, b: int):\n\
\t'''\n\
\tAdds two positive numbers. Raises NonPositiveError on negative input.\n\
\tINPUT:\n\
\t- a : int (a positive integer)\n\
\t- b : int (a positive integer)\n\n\
\tOUTPUT:\n\
\tresult : int (a + b)\n\
\t'''\n\
\tif a < 0 or b < 0: raise NonPositiveError\n\
\treturn a + b";

const REVISE_BODY: &str = "Your command is /revise. When a message starts with \"/revise\", \
return an exact replica of the code block that follows in which every variable is renamed to \
better describe its purpose within its function or class. Keep new names concise and no longer \
than 25 characters. Never rename functions or classes, and change nothing other than variable \
names inside functions and classes.";

const ANALYSE_BODY: &str = "Your command is /analyse. When a message starts with \"/analyse\", \
return the time and space complexity, in big O notation, of every function in the code block \
that follows, one function per line, in exactly this format:\n\n\
<function name>: O(n) runtime, O(log n) space\n\
<function name>: O(2^n) runtime, O(n * log n) space\n\n\
The lines above only illustrate the format; take the function names and complexities from the \
code you are given.";

/// Variable naming schemes the revise command accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    Snake,
    Camel,
    Pascal,
    #[default]
    Lower,
    Upper,
    Hungarian,
}

impl NamingScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingScheme::Snake => "snake",
            NamingScheme::Camel => "camel",
            NamingScheme::Pascal => "pascal",
            NamingScheme::Lower => "lower",
            NamingScheme::Upper => "upper",
            NamingScheme::Hungarian => "hungarian",
        }
    }
}

/// Depth of an explanation, 1 (summary) to 5 (full technical detail).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplanationLevel(u8);

impl ExplanationLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&level)
            .then_some(Self(level))
    }

    /// Map the HTTP scale (10, 20, 30, 40, 50) onto 1..=5.
    pub fn from_percent_scale(value: u8) -> Option<Self> {
        if value % 10 != 0 {
            return None;
        }
        Self::new(value / 10)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for ExplanationLevel {
    fn default() -> Self {
        Self(3)
    }
}

/// One command, carrying whatever parameters its prompts need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Annotate,
    Explain {
        level: ExplanationLevel,
        response_language: NaturalLanguage,
    },
    Define {
        framework: Option<String>,
    },
    Revise {
        scheme: NamingScheme,
    },
    Analyse,
    GeneratePdf {
        language: CodeLanguage,
    },
}

impl PromptCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PromptCommand::Annotate => "annotate",
            PromptCommand::Explain { .. } => "explain",
            PromptCommand::Define { .. } => "define",
            PromptCommand::Revise { .. } => "revise",
            PromptCommand::Analyse => "analyse",
            PromptCommand::GeneratePdf { .. } => "generate_pdf",
        }
    }

    pub fn system_prompt(&self) -> String {
        let body = match self {
            PromptCommand::Annotate => ANNOTATE_BODY.to_string(),
            PromptCommand::Explain {
                response_language, ..
            } => format!(
                "{EXPLAIN_BODY} Write the explanation in {}.",
                capitalize(response_language.as_str())
            ),
            PromptCommand::Define { framework } => match framework {
                Some(framework) => format!(
                    "{DEFINE_BODY} Write every definition following the conventions of the \
                     {framework} documentation framework."
                ),
                None => format!("{DEFINE_BODY}\n\n{DEFINE_DEFAULT_FORMAT}"),
            },
            PromptCommand::Revise { scheme } => format!(
                "{REVISE_BODY} Rename variables using the {} case naming scheme.",
                scheme.as_str()
            ),
            PromptCommand::Analyse => ANALYSE_BODY.to_string(),
            PromptCommand::GeneratePdf { language } => generate_pdf_body(*language),
        };
        format!("{PREAMBLE}{body}{OUTPUT_ONLY}")
    }

    /// The user message: the command prefix and its tags, then the code.
    pub fn user_content(&self, code: &str) -> String {
        let header = match self {
            PromptCommand::Annotate => ANNOTATE_PREFIX.to_string(),
            PromptCommand::Explain { level, .. } => {
                format!("{EXPLAIN_PREFIX} {COMPLEXITY_TAG}={}", level.get())
            }
            PromptCommand::Define {
                framework: Some(framework),
            } => format!("{DEFINE_PREFIX} {FRAMEWORK_TAG}={framework}"),
            PromptCommand::Define { framework: None } => DEFINE_PREFIX.to_string(),
            PromptCommand::Revise { scheme } => {
                format!("{REVISE_PREFIX} {NAMING_SCHEME_TAG}={}", scheme.as_str())
            }
            PromptCommand::Analyse => ANALYSE_PREFIX.to_string(),
            PromptCommand::GeneratePdf { .. } => GENERATE_PREFIX.to_string(),
        };
        format!("{header}\n\n{code}")
    }

    pub fn messages(&self, code: &str) -> Vec<Message> {
        build_messages(self.system_prompt(), self.user_content(code))
    }
}

/// System + user message pair.
///
/// # Panics
///
/// Panics when `user_content` is empty: every command sends at least its
/// prefix, so an empty user message is a caller bug.
pub fn build_messages(system: String, user_content: String) -> Vec<Message> {
    assert!(
        !user_content.is_empty(),
        "no user prompt provided for chat completion"
    );
    vec![Message::system(system), Message::user(user_content)]
}

fn generate_pdf_body(language: CodeLanguage) -> String {
    format!(
        "Your command is /generate. When a message starts with \"/generate\", read the {language} \
source file that follows and document it as a report in exactly this layout:\n\n\
title: <a short title for the file>\n\
description: <one paragraph summarising what the file does>\n\
{SECTION_DELIMITER}\n\
function <function name>: <one-line signature summary>\n\
<a description of the function over one or more lines>\n\
{USAGE_EXAMPLE_SENTINEL}\n\
<example code calling the function>\n\
{SECTION_DELIMITER}\n\n\
Repeat the block between the {SECTION_DELIMITER} lines for every function in the file. Always \
write the word \"function\" before the name, and put \"{USAGE_EXAMPLE_SENTINEL}\" on a line \
of its own."
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
