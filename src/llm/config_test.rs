use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_to_gpt_35_with_openai_api_key() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
    assert_eq!(cfg.api_key, "sk-test");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn key_can_come_from_a_renamed_variable() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "LOCAL_LLM_KEY"),
        ("LOCAL_LLM_KEY", "secret"),
        ("LLM_OPENAI_BASE_URL", "http://localhost:11434/v1/"),
        ("LLM_MODEL", "llama3"),
        ("LLM_MAX_TOKENS", "256"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.base_url, "http://localhost:11434/v1");
    assert_eq!(cfg.model, "llama3");
    assert_eq!(cfg.max_tokens, 256);
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn missing_key_names_the_variable() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "OPENAI_API_KEY"));
}

#[test]
fn empty_key_counts_as_missing() {
    let err = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}

#[test]
fn unparsable_numbers_fall_back_to_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("OPENAI_API_KEY", "sk"),
        ("LLM_MAX_TOKENS", "lots"),
        ("LLM_REQUEST_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}
