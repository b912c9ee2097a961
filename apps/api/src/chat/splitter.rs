//! Response splitter — divides a raw completion into thinking and answer.
//!
//! The hosted model is not guaranteed to honor the requested tag format, so
//! the splitter tries increasingly permissive strategies in a fixed order and
//! stops at the first one that yields a non-empty thinking segment. The later
//! strategies are best-effort and can mis-split; a plausible answer beats an
//! error response, so that is accepted as a soft failure mode.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::llm_client::RawCompletion;

/// A completion divided into its reasoning trace and user-facing answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub thinking: String,
    pub answer: String,
}

static THINK_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<think>(.*?)</think>").expect("valid regex"));
static ANSWER_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<answer>(.*?)</answer>").expect("valid regex"));
static STRAY_ANSWER_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?answer>").expect("valid regex"));

/// Markers tried in priority order when the model skipped the tags but left a
/// thinking emoji in the text. The first marker present wins.
const ANSWER_MARKERS: [&str; 6] = [
    "<answer>",
    "**Câu trả lời:**",
    "Câu trả lời:",
    "Answer:",
    "\n\n---\n",
    "\n\n**",
];

/// Glyphs and labels that mark a line as part of the thinking trace.
const THINKING_INDICATORS: [&str; 6] = ["🔍", "📋", "💡", "💭", "Think:", "Thinking:"];

/// Analytical openers that mark a leading paragraph as thinking.
const ANALYTICAL_CUES: [&str; 5] = ["phân tích", "xem xét", "dựa trên", "từ cv", "theo như"];

/// Splits a completion into `(thinking, answer)`.
///
/// Strategies, in order: vendor reasoning field, tool-call stringification,
/// explicit `<think>`/`<answer>` tags, marker split, line classification,
/// paragraph heuristic. If none applies, the full content becomes the answer
/// and thinking stays empty.
pub fn split_completion(raw: &RawCompletion) -> Split {
    from_reasoning_field(raw)
        .or_else(|| from_tool_calls(raw))
        .or_else(|| from_think_answer_tags(&raw.content))
        .or_else(|| from_marker_split(&raw.content))
        .or_else(|| from_line_classification(&raw.content))
        .or_else(|| from_paragraph_heuristic(&raw.content))
        .unwrap_or_else(|| Split {
            thinking: String::new(),
            answer: raw.content.clone(),
        })
}

/// Strategy 1: the vendor already separated reasoning into its own field.
/// The field is used verbatim; the answer comes from the `<answer>` pair in
/// the content when present, else the content with stray tags removed.
fn from_reasoning_field(raw: &RawCompletion) -> Option<Split> {
    let reasoning = raw.reasoning.as_deref().filter(|r| !r.is_empty())?;

    let answer = match ANSWER_TAG_RE.captures(&raw.content) {
        Some(caps) => caps[1].trim().to_string(),
        None => STRAY_ANSWER_TAG_RE
            .replace_all(&raw.content, "")
            .trim()
            .to_string(),
    };

    Some(Split {
        thinking: reasoning.to_string(),
        answer,
    })
}

/// Strategy 2: no reasoning field, but the vendor attached tool calls. Their
/// JSON stringification stands in for thinking; the answer stays the full
/// content unchanged and the cascade stops here.
fn from_tool_calls(raw: &RawCompletion) -> Option<Split> {
    let calls = raw.tool_calls.as_ref()?;
    let empty = match calls {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if empty {
        return None;
    }

    Some(Split {
        thinking: calls.to_string(),
        answer: raw.content.clone(),
    })
}

/// Strategy 3: the model followed the requested format. Both tag pairs must
/// be present (first occurrence each, case-insensitive, across newlines).
fn from_think_answer_tags(content: &str) -> Option<Split> {
    let think = THINK_TAG_RE.captures(content)?;
    let answer = ANSWER_TAG_RE.captures(content)?;

    let thinking = think[1].trim().to_string();
    if thinking.is_empty() {
        return None;
    }

    Some(Split {
        thinking,
        answer: answer[1].trim().to_string(),
    })
}

/// Strategy 4: a thinking emoji is present — split on the first known answer
/// marker. Only the first marker found in the text is attempted.
fn from_marker_split(content: &str) -> Option<Split> {
    if !content.contains('🔍') && !content.contains('💭') {
        return None;
    }

    for marker in ANSWER_MARKERS {
        if let Some((before, after)) = content.split_once(marker) {
            let thinking = before.trim();
            if thinking.is_empty() {
                return None;
            }
            return Some(Split {
                thinking: thinking.to_string(),
                answer: after.trim().to_string(),
            });
        }
    }

    None
}

/// Strategy 5: classify line by line. Indicator lines accumulate as thinking;
/// a bold line after at least one thinking line flips classification to
/// answer (that line included). Lines seen before any thinking line count as
/// answer when non-blank; later unclassified lines stay with the thinking.
fn from_line_classification(content: &str) -> Option<Split> {
    if !content.contains("\n\n") {
        return None;
    }

    let mut thinking_lines: Vec<&str> = Vec::new();
    let mut answer_lines: Vec<&str> = Vec::new();
    let mut in_answer = false;

    for line in content.split('\n') {
        if THINKING_INDICATORS.iter().any(|ind| line.contains(ind)) {
            thinking_lines.push(line);
        } else if line.trim().starts_with("**") && !thinking_lines.is_empty() {
            in_answer = true;
            answer_lines.push(line);
        } else if in_answer || (thinking_lines.is_empty() && !line.trim().is_empty()) {
            answer_lines.push(line);
        } else if !thinking_lines.is_empty() {
            thinking_lines.push(line);
        }
    }

    if thinking_lines.is_empty() {
        return None;
    }

    let thinking = thinking_lines.join("\n").trim().to_string();
    if thinking.is_empty() {
        return None;
    }

    let answer = if answer_lines.is_empty() {
        content.to_string()
    } else {
        answer_lines.join("\n").trim().to_string()
    };

    Some(Split { thinking, answer })
}

/// Strategy 6: a long multi-paragraph reply whose opening paragraph reads
/// like analysis. The first paragraph becomes thinking, the rest the answer.
fn from_paragraph_heuristic(content: &str) -> Option<Split> {
    if content.chars().count() <= 200 {
        return None;
    }

    let paragraphs: Vec<&str> = content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if paragraphs.len() < 2 {
        return None;
    }

    let first = paragraphs[0].to_lowercase();
    if !ANALYTICAL_CUES.iter().any(|cue| first.contains(cue)) {
        return None;
    }

    Some(Split {
        thinking: paragraphs[0].to_string(),
        answer: paragraphs[1..].join("\n\n"),
    })
}
