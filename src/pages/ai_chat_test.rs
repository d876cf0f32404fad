use super::*;

#[test]
fn chat_request_carries_provider_wire_name() {
    let req = build_chat_request("hi".to_owned(), AiProvider::OpenAi, Some("sk-1".to_owned()));
    assert_eq!(req.provider, "openai");
    assert_eq!(req.api_key.as_deref(), Some("sk-1"));
    assert_eq!(req.prompt, "hi");
}

#[test]
fn chat_request_omits_missing_key_on_the_wire() {
    let req = build_chat_request("hi".to_owned(), AiProvider::Anthropic, None);
    let body = serde_json::to_value(&req).expect("serialize");
    assert_eq!(body, serde_json::json!({ "prompt": "hi", "provider": "anthropic" }));
}

#[test]
fn reply_prefers_response_text() {
    let resp = AiChatResponse { response: Some("**hello**".to_owned()), ..AiChatResponse::default() };
    assert_eq!(reply_message(Ok(resp)), ("**hello**".to_owned(), false));
}

#[test]
fn reply_surfaces_provider_error() {
    let resp = AiChatResponse { error: Some("No API key configured".to_owned()), ..AiChatResponse::default() };
    assert_eq!(reply_message(Ok(resp)), ("No API key configured".to_owned(), true));
}

#[test]
fn transport_failure_is_an_error_message() {
    let (text, is_error) = reply_message(Err(ApiError::Network("Failed to fetch".to_owned())));
    assert!(is_error);
    assert_eq!(text, "Error: network error: Failed to fetch");
}
