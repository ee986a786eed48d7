/// Ordered substring replacements applied to model identifiers for point labels.
/// Each pattern replaces its first occurrence only.
const LABEL_REPLACEMENTS: &[(&str, &str)] = &[
    ("-instruct", ""),
    ("-v0.1", ""),
    ("llama-4-maverick-17b-128e", "llama4-maverick"),
    ("llama-4-scout-17b-16e", "llama4-scout"),
    ("llama-3.1-405b", "llama3.1-405b"),
    ("qwen3-coder-480b-a35b", "qwen3-coder"),
    ("nemotron-3-nano-30b-a3b", "nemotron3-nano"),
    ("nvidia-nemotron-9b", "nemotron-9b"),
    ("mixtral-8x22b", "mixtral-8x22b"),
    ("kimi-k2-instruct-0905", "kimi-k2"),
];

pub fn shorten_label(model: &str) -> String {
    let mut out = model.to_string();
    for (from, to) in LABEL_REPLACEMENTS {
        out = out.replacen(from, to, 1);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/labels.rs"]
mod tests;
