//! End-to-end turn tests against a mock webhook.
//!
//! Every test drives `ChatSession::submit_turn` the same way the interactive
//! runner does and checks both the returned result and the transcript.

use std::time::Duration;

use hookchat::session::chat::is_known_command;
use hookchat::{ChatSession, Config, NormalizedResult, Role};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOOK_PATH: &str = "/webhook/chat";

/// Helper: chat session pointed at the mock server.
fn chat_for(server: &MockServer) -> ChatSession {
	let mut config = Config::default();
	config.set_webhook_url(Some(format!("{}{}", server.uri(), HOOK_PATH)));
	ChatSession::new(config).expect("chat session")
}

async fn mount_reply(server: &MockServer, template: ResponseTemplate) {
	Mock::given(method("POST"))
		.and(path(HOOK_PATH))
		.respond_with(template)
		.mount(server)
		.await;
}

#[tokio::test]
async fn output_key_is_displayed_and_payload_matches_wire_format() {
	let server = MockServer::start().await;
	let mut chat = chat_for(&server);
	let session_id = chat.session.get_or_create_session_id().to_string();

	Mock::given(method("POST"))
		.and(path(HOOK_PATH))
		.and(header("content-type", "application/json"))
		.and(body_json(json!({"chatInput": "Hi there", "sessionId": session_id})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": "Hello!"})))
		.expect(1)
		.mount(&server)
		.await;

	let result = chat.submit_turn("Hi there").await.unwrap();
	assert_eq!(result, NormalizedResult::Text("Hello!".to_string()));

	let transcript = chat.session.transcript();
	assert_eq!(transcript.len(), 2);
	assert_eq!(transcript[0].role(), Role::User);
	assert_eq!(transcript[0].content(), "Hi there");
	assert_eq!(transcript[1].role(), Role::Assistant);
	assert_eq!(transcript[1].content(), "Hello!");
}

#[tokio::test]
async fn only_first_list_item_is_used() {
	let server = MockServer::start().await;
	mount_reply(
		&server,
		ResponseTemplate::new(200).set_body_json(json!([{"output": "A"}, {"output": "B"}])),
	)
	.await;

	let mut chat = chat_for(&server);
	let result = chat.submit_turn("list please").await.unwrap();
	assert_eq!(result.content(), "A");
}

#[tokio::test]
async fn server_error_becomes_assistant_turn() {
	let server = MockServer::start().await;
	mount_reply(
		&server,
		ResponseTemplate::new(500).set_body_string("Internal Server Error"),
	)
	.await;

	let mut chat = chat_for(&server);
	let result = chat.submit_turn("boom").await.unwrap();

	assert!(result.is_error());
	assert_eq!(result.content(), "Error: 500 - Internal Server Error");

	let reply = &chat.session.transcript()[1];
	assert_eq!(reply.role(), Role::Assistant);
	assert_eq!(reply.content(), "Error: 500 - Internal Server Error");
	assert!(reply.is_error());
}

#[tokio::test]
async fn slash_prefixed_message_is_posted() {
	let server = MockServer::start().await;
	let mut chat = chat_for(&server);
	let session_id = chat.session.get_or_create_session_id().to_string();

	Mock::given(method("POST"))
		.and(path(HOOK_PATH))
		.and(body_json(json!({"chatInput": "/start", "sessionId": session_id})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": "Welcome"})))
		.expect(1)
		.mount(&server)
		.await;

	// Not a local command, so the runner hands it to the webhook
	assert!(!is_known_command("/start"));
	let result = chat.submit_turn("/start").await.unwrap();

	assert_eq!(result.content(), "Welcome");
	assert_eq!(chat.session.len(), 2);
	assert_eq!(chat.session.transcript()[0].content(), "/start");
	assert!(!chat.session.transcript()[1].is_error());
}

#[tokio::test]
async fn non_json_body_is_shown_verbatim() {
	let server = MockServer::start().await;
	mount_reply(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

	let mut chat = chat_for(&server);
	let result = chat.submit_turn("plain").await.unwrap();
	assert_eq!(result, NormalizedResult::Text("not json".to_string()));
}

#[tokio::test]
async fn refused_connection_is_reported_not_raised() {
	// Reserve a free port, then release it so nothing is listening there
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	drop(listener);

	let mut config = Config::default();
	config.set_webhook_url(Some(format!("http://127.0.0.1:{}{}", port, HOOK_PATH)));
	let mut chat = ChatSession::new(config).unwrap();

	let result = chat.submit_turn("anyone there?").await.unwrap();
	assert!(result.is_error());
	assert!(
		result.content().starts_with("Connection Error: "),
		"unexpected content: {}",
		result.content()
	);
	assert_eq!(chat.session.len(), 2);
}

#[tokio::test]
async fn timeout_is_a_connection_error() {
	let server = MockServer::start().await;
	mount_reply(
		&server,
		ResponseTemplate::new(200)
			.set_body_json(json!({"output": "too late"}))
			.set_delay(Duration::from_secs(3)),
	)
	.await;

	let mut config = Config::default();
	config.set_webhook_url(Some(format!("{}{}", server.uri(), HOOK_PATH)));
	config.webhook.timeout_seconds = 1;
	let mut chat = ChatSession::new(config).unwrap();

	let result = chat.submit_turn("slow").await.unwrap();
	assert!(result.content().starts_with("Connection Error: "));
}

#[tokio::test]
async fn transcript_alternates_and_session_id_is_reused() {
	let server = MockServer::start().await;
	mount_reply(
		&server,
		ResponseTemplate::new(200).set_body_json(json!({"text": "ok"})),
	)
	.await;

	let mut chat = chat_for(&server);
	let messages = ["one", "two", "three", "four"];
	for message in messages {
		chat.submit_turn(message).await.unwrap();
	}

	let transcript = chat.session.transcript();
	assert_eq!(transcript.len(), 2 * messages.len());
	for (i, turn) in transcript.iter().enumerate() {
		let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
		assert_eq!(turn.role(), expected, "turn {} has the wrong role", i);
	}

	let requests = server.received_requests().await.unwrap();
	assert_eq!(requests.len(), messages.len());

	let session_id = chat.session.session_id().unwrap().to_string();
	for (request, message) in requests.iter().zip(messages) {
		let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
		assert_eq!(body["sessionId"], session_id.as_str());
		assert_eq!(body["chatInput"], message);
	}
}

#[tokio::test]
async fn mixed_outcomes_keep_one_reply_per_message() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(HOOK_PATH))
		.respond_with(ResponseTemplate::new(404).set_body_string("Webhook not registered"))
		.up_to_n_times(1)
		.mount(&server)
		.await;
	mount_reply(
		&server,
		ResponseTemplate::new(200).set_body_json(json!({"message": "back online"})),
	)
	.await;

	let mut chat = chat_for(&server);
	let first = chat.submit_turn("first").await.unwrap();
	let second = chat.submit_turn("second").await.unwrap();

	assert_eq!(first.content(), "Error: 404 - Webhook not registered");
	assert_eq!(second.content(), "back online");
	assert_eq!(chat.session.len(), 4);
}

#[tokio::test]
async fn separate_sessions_get_separate_ids() {
	let server = MockServer::start().await;
	mount_reply(&server, ResponseTemplate::new(200).set_body_string("hi")).await;

	let mut a = chat_for(&server);
	let mut b = chat_for(&server);
	a.submit_turn("from a").await.unwrap();
	b.submit_turn("from b").await.unwrap();

	assert_ne!(a.session.session_id(), b.session.session_id());
	assert_eq!(a.session.len(), 2);
	assert_eq!(b.session.len(), 2);
}
