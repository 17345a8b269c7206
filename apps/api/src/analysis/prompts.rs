// Prompt templates for LLM-enhanced analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, VERA_PERSONA};

/// Enhancement prompt. Replace `{brand_context}`, `{analysis}` and `{content}`
/// before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"A brand has asked you to read a piece of marketing copy.

BRAND CONTEXT:
{brand_context}

HEURISTIC ANALYSIS (keyword tone detection and fixed recommendation tables):
{analysis}

COPY:
{content}

Go beyond the heuristic analysis. Say what the copy does to the reader's body,
which nervous-system state it invites, and the two or three changes that would
make it feel safer without losing its message.

Return a JSON object with this EXACT schema:
{"insights": "<your reading, at most 200 words>"}"#;

pub fn enhance_system_prompt() -> String {
    format!("{VERA_PERSONA} {JSON_ONLY_INSTRUCTION}")
}

pub fn build_enhance_prompt(content: &str, brand_context: &str, analysis: &str) -> String {
    ENHANCE_PROMPT_TEMPLATE
        .replace("{brand_context}", brand_context)
        .replace("{analysis}", analysis)
        .replace("{content}", content)
}
