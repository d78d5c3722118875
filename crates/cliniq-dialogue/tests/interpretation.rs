use cliniq_dialogue::error::DialogueError;
use cliniq_dialogue::http::{DialogueConfig, HttpDialogueClient, QueryRequest};
use cliniq_dialogue::interpretation::{Interpretation, parse_response};

#[test]
fn parses_action_and_speech() {
    let body = r#"{
        "id": "b1",
        "result": {
            "source": "agent",
            "action": "show_info",
            "fulfillment": { "speech": "Here you go.", "messages": [] }
        },
        "status": { "code": 200 }
    }"#;

    let interpretation = parse_response(body).unwrap();
    assert_eq!(interpretation.action, "show_info");
    assert_eq!(interpretation.fulfillment_text, "Here you go.");
}

#[test]
fn missing_fields_default_to_empty() {
    let interpretation = parse_response(r#"{"result": {}}"#).unwrap();
    assert_eq!(interpretation, Interpretation::default());
}

#[test]
fn missing_result_is_parse_error() {
    let err = parse_response(r#"{"status": {"code": 400}}"#).unwrap_err();
    assert!(matches!(err, DialogueError::ResponseParse(_)));
}

#[test]
fn malformed_body_is_serialization_error() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, DialogueError::Serialization(_)));
}

#[test]
fn actions_split_on_semicolons() {
    let interpretation = Interpretation {
        action: "smalltalk.greet;show_info;".to_string(),
        fulfillment_text: String::new(),
    };
    let actions: Vec<_> = interpretation.actions().collect();
    assert_eq!(actions, vec!["smalltalk.greet", "show_info"]);

    assert_eq!(Interpretation::default().actions().count(), 0);
}

#[test]
fn request_body_uses_camel_case_session_id() {
    let body = QueryRequest {
        query: "hello",
        lang: "en",
        session_id: "s-1",
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["query"], "hello");
    assert_eq!(json["lang"], "en");
    assert_eq!(json["sessionId"], "s-1");
}

#[test]
fn client_requires_token() {
    let err = HttpDialogueClient::new(DialogueConfig::default()).err().unwrap();
    assert!(matches!(err, DialogueError::Config(_)));

    let config = DialogueConfig {
        token: Some(String::new()),
        ..DialogueConfig::default()
    };
    assert!(HttpDialogueClient::new(config).is_err());
}

#[test]
fn client_builds_with_token() {
    let config = DialogueConfig {
        token: Some("secret".to_string()),
        lang: "ja".to_string(),
        ..DialogueConfig::default()
    };
    let client = HttpDialogueClient::new(config).unwrap();
    assert_eq!(client.config().lang, "ja");
}

#[test]
fn offline_dialogue_always_fails() {
    use cliniq_dialogue::{DialogueService, OfflineDialogue};

    let err = OfflineDialogue.interpret("hello").unwrap_err();
    assert!(matches!(err, DialogueError::Config(_)));
}
