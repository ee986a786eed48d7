use super::*;

#[test]
fn test_strips_known_suffixes() {
    assert_eq!(shorten_label("mistral-7b-instruct-v0.1"), "mistral-7b");
}

#[test]
fn test_abbreviates_model_families() {
    assert_eq!(
        shorten_label("llama-4-maverick-17b-128e-instruct"),
        "llama4-maverick"
    );
    assert_eq!(shorten_label("qwen3-coder-480b-a35b"), "qwen3-coder");
    assert_eq!(shorten_label("nvidia-nemotron-9b"), "nemotron-9b");
}

#[test]
fn test_instruct_stripped_before_kimi_rule() {
    // "-instruct" goes first, so the kimi rule never matches its full pattern.
    assert_eq!(shorten_label("kimi-k2-instruct-0905"), "kimi-k2-0905");
}

#[test]
fn test_unmatched_passes_through() {
    assert_eq!(shorten_label("gpt-4o"), "gpt-4o");
}
