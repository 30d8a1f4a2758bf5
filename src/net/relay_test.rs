use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::contact::DEFAULT_SUBJECT;

struct FakeRelay {
    reply: Result<RelayResponse, RelayError>,
    bodies: RefCell<Vec<String>>,
}

impl FakeRelay {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(RelayResponse { status, body: body.to_owned() }),
            bodies: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl MailRelay for FakeRelay {
    async fn post_form(&self, body: String) -> Result<RelayResponse, RelayError> {
        self.bodies.borrow_mut().push(body);
        self.reply.clone()
    }
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ana Souza".into(),
        email: "ana+work@example.com".into(),
        subject: DEFAULT_SUBJECT.into(),
        message: "Olá & até logo".into(),
    }
}

#[test]
fn encode_form_percent_encodes_values_in_order() {
    let body = encode_form(&message());
    assert_eq!(
        body,
        "name=Ana%20Souza&email=ana%2Bwork%40example.com&subject=Contato%20via%20Portf%C3%B3lio&message=Ol%C3%A1%20%26%20at%C3%A9%20logo"
    );
}

#[test]
fn interpret_accepts_any_2xx() {
    for status in [200, 201, 204, 299] {
        assert_eq!(interpret(&RelayResponse { status, body: String::new() }), Ok(()));
    }
}

#[test]
fn interpret_uses_message_from_error_body() {
    let err = interpret(&RelayResponse { status: 500, body: r#"{"message":"boom"}"#.to_owned() }).unwrap_err();
    assert_eq!(err, RelayError::Rejected { status: 500, message: "boom".to_owned() });
}

#[test]
fn interpret_falls_back_when_body_is_not_json() {
    let err = interpret(&RelayResponse { status: 502, body: "<html>bad gateway</html>".to_owned() }).unwrap_err();
    assert_eq!(err, RelayError::Rejected { status: 502, message: FALLBACK_FAILURE_MESSAGE.to_owned() });
}

#[test]
fn interpret_falls_back_when_message_missing_or_blank() {
    for body in [r#"{"success":"false"}"#, r#"{"message":"  "}"#, r#"{"message":null}"#] {
        let err = interpret(&RelayResponse { status: 400, body: body.to_owned() }).unwrap_err();
        assert_eq!(err, RelayError::Rejected { status: 400, message: FALLBACK_FAILURE_MESSAGE.to_owned() }, "{body}");
    }
}

#[test]
fn deliver_posts_exactly_one_encoded_body() {
    let relay = FakeRelay::replying(200, r#"{"success":"true"}"#);
    assert_eq!(block_on(deliver(&relay, &message())), Ok(()));
    let bodies = relay.bodies.borrow();
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].starts_with("name=Ana%20Souza&"));
}

#[test]
fn deliver_propagates_network_errors() {
    let relay = FakeRelay {
        reply: Err(RelayError::Network("offline".to_owned())),
        bodies: RefCell::new(Vec::new()),
    };
    assert_eq!(block_on(deliver(&relay, &message())), Err(RelayError::Network("offline".to_owned())));
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_relay_is_unavailable_off_browser() {
    let relay = HttpRelay::new("https://relay.example/ajax");
    assert_eq!(relay.endpoint(), "https://relay.example/ajax");
    assert!(matches!(block_on(relay.post_form(String::new())), Err(RelayError::Network(_))));
}

#[test]
fn relay_is_usable_as_trait_object() {
    let fake = FakeRelay::replying(200, r#"{"success":"true"}"#);
    let relay: &dyn MailRelay = &fake;
    assert_eq!(block_on(deliver(relay, &message())), Ok(()));
    assert_eq!(fake.bodies.borrow().len(), 1);
}
