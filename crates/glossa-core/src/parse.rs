use glossa_types::ParsedExplanation;

/// Label substrings the remote service is prompted to emit, one per line.
/// Detection is by containment, not anchoring, matching the prompt contract:
/// marker lines may appear in any order.
const PRONUNCIATION_MARKER: &str = "PRONUNCIATION";
const SYNONYMS_MARKER: &str = "SYNONYMS";
const ANTONYMS_MARKER: &str = "ANTONYMS";
const TRANSLATION_MARKER: &str = "Перевод";
const IDIOMS_MARKER: &str = "ИДИОМЫ";

/// Extract labeled fields from the raw service response.
///
/// Total over arbitrary input: a missing or mangled marker line leaves its
/// field empty, never errors. The first non-blank line is always treated as
/// the `headword - definition` line; when it carries no `" - "` separator the
/// headword falls back to the query the user typed and the whole line becomes
/// the definition.
pub fn parse(raw: &str, fallback_query: &str) -> ParsedExplanation {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut out = ParsedExplanation::default();

    match lines.first() {
        Some(first) => {
            let first = strip_emphasis(first);
            match first.split_once(" - ") {
                Some((word, definition)) => {
                    out.headword = word.trim().to_string();
                    out.definition = definition.trim().to_string();
                }
                None => {
                    out.headword = fallback_query.to_string();
                    out.definition = first.trim().to_string();
                }
            }
        }
        None => out.headword = fallback_query.to_string(),
    }

    for line in &lines {
        if line.contains(PRONUNCIATION_MARKER) {
            out.pronunciation = bracketed(&label_content(line));
        } else if line.contains(SYNONYMS_MARKER) {
            out.synonyms = split_list(&label_content(line));
        } else if line.contains(ANTONYMS_MARKER) {
            out.antonyms = split_list(&label_content(line));
        } else if line.contains(TRANSLATION_MARKER) {
            out.translation = label_content(line);
        } else if line.contains(IDIOMS_MARKER) {
            out.idioms = label_content(line);
        } else if is_example_line(line) {
            out.examples.push(strip_emphasis(line).trim().to_string());
        }
    }

    out
}

/// Content after the label: everything past the first colon (or the whole
/// line when there is none), de-emphasized and trimmed.
fn label_content(line: &str) -> String {
    let rest = match line.split_once(':') {
        Some((_, rest)) => rest,
        None => line,
    };
    strip_emphasis(rest).trim().to_string()
}

/// Leading `<digits>.` pattern, e.g. `1. The beauty of ...`
fn is_example_line(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with('.')
}

fn strip_emphasis(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '*' | '_' | '`'))
        .collect()
}

/// Re-wrap in brackets only when non-empty, so an absent pronunciation
/// renders as nothing instead of `[]`.
fn bracketed(content: &str) -> String {
    let bare = content
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    if bare.is_empty() {
        String::new()
    } else {
        format!("[{bare}]")
    }
}

fn split_list(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
