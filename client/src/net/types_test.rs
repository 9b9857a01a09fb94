use super::*;

#[test]
fn reply_text_uses_prompt_field() {
    let reply: PromptReply = serde_json::from_str(r#"{"prompt":"hello"}"#).unwrap();
    assert_eq!(reply.reply_text(), "hello");
}

#[test]
fn reply_text_falls_back_when_prompt_missing() {
    let reply: PromptReply = serde_json::from_str("{}").unwrap();
    assert_eq!(reply.prompt, None);
    assert_eq!(reply.reply_text(), NO_RESPONSE_FALLBACK);
}

#[test]
fn reply_text_falls_back_when_prompt_null_or_empty() {
    let null: PromptReply = serde_json::from_str(r#"{"prompt":null}"#).unwrap();
    assert_eq!(null.reply_text(), NO_RESPONSE_FALLBACK);

    let empty: PromptReply = serde_json::from_str(r#"{"prompt":""}"#).unwrap();
    assert_eq!(empty.reply_text(), NO_RESPONSE_FALLBACK);
}

#[test]
fn unknown_fields_are_ignored() {
    let reply: PromptReply = serde_json::from_str(r#"{"prompt":"hi","model":"gpt"}"#).unwrap();
    assert_eq!(reply.reply_text(), "hi");
}

#[test]
fn non_object_body_is_rejected() {
    assert!(serde_json::from_str::<PromptReply>("[1, 2]").is_err());
    assert!(serde_json::from_str::<PromptReply>(r#"{"prompt": 42}"#).is_err());
}
