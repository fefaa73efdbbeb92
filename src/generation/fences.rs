// src/generation/fences.rs — Remove markdown code-fence wrapping from model output

/// Strip leading ```` ```lang ```` lines and trailing newlines/backticks.
///
/// Models often wrap rewritten code in a fenced block even when asked not
/// to, sometimes twice. Fence lines are dropped only while they lead the
/// text; closing fences go with the trailing `\n` and `` ` `` trim.
pub fn strip_code_fences(response: &str) -> String {
    let mut body = response;
    while body.starts_with("```") {
        body = body.split_once('\n').map_or("", |(_, rest)| rest);
    }
    body.trim_end_matches(|c: char| c == '\n' || c == '`')
        .to_string()
}
