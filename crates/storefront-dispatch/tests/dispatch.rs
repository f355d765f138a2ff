//! End-to-end tests for the dispatch chain.
//!
//! A wiremock server plays both the relay and the image host; the share
//! sheet and link opener are in-process fakes that record what they saw.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use storefront_core::{Order, WhatsAppContact};
use storefront_dispatch::{
    DeepLinkChannel, Delivery, Dispatcher, LinkOpener, RelayChannel, ShareCapability,
    ShareChannel, ShareError, SharePayload, ShareTarget, UnsupportedShare,
};
use wiremock::matchers::{body_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BUSINESS_PHONE: &str = "2348036007786";

#[derive(Clone, Default)]
struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("opener lock").clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.lock().expect("opener lock").push(url.to_string());
    }
}

#[derive(Clone)]
struct FakeShare {
    capability: ShareCapability,
    can_share: bool,
    result: Result<(), ShareError>,
    calls: Arc<AtomicUsize>,
    last_payload: Arc<Mutex<Option<SharePayload>>>,
}

impl FakeShare {
    fn new(capability: ShareCapability) -> Self {
        Self {
            capability,
            can_share: true,
            result: Ok(()),
            calls: Arc::new(AtomicUsize::new(0)),
            last_payload: Arc::new(Mutex::new(None)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShareTarget for FakeShare {
    fn capability(&self) -> ShareCapability {
        self.capability
    }

    fn can_share(&self, _payload: &SharePayload) -> bool {
        self.can_share
    }

    async fn share(&self, payload: SharePayload) -> Result<(), ShareError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().expect("payload lock") = Some(payload);
        self.result.clone()
    }
}

fn contact() -> WhatsAppContact {
    WhatsAppContact::resolve(Some(BUSINESS_PHONE), None)
}

fn order() -> Order {
    Order::new("Canvas Print", Some("5000"), "./images & logo/IMG_1.jpg").expect("valid order")
}

fn dispatcher(
    server: &MockServer,
    share: &FakeShare,
    opener: &RecordingOpener,
    with_relay: bool,
) -> Dispatcher {
    let client = Client::new();
    let page_url = format!("{}/shop/", server.uri());
    let mut dispatcher = Dispatcher::new(
        page_url,
        Box::new(DeepLinkChannel::new(contact(), Box::new(opener.clone()))),
    );
    if with_relay {
        let relay = RelayChannel::new(
            client.clone(),
            &format!("{}/api/whatsapp-send", server.uri()),
            &contact(),
        )
        .expect("relay url");
        dispatcher = dispatcher.with_channel(Box::new(relay));
    }
    dispatcher.with_channel(Box::new(ShareChannel::new(client, Box::new(share.clone()))))
}

async fn mount_relay(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/whatsapp-send"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_image(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"IMG_1\.jpg$"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn relay_success_stops_the_chain() {
    let server = MockServer::start().await;
    mount_relay(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "WhatsApp message sent successfully",
            "data": {}
        })),
    )
    .await;

    let share = FakeShare::new(ShareCapability::WithFiles);
    let opener = RecordingOpener::default();
    let delivery = dispatcher(&server, &share, &opener, true)
        .dispatch(order())
        .await;

    assert_eq!(
        delivery,
        Delivery::RelayConfirmed {
            message: "WhatsApp message sent successfully".to_string()
        }
    );
    assert_eq!(share.calls(), 0);
    assert!(opener.opened().is_empty());
}

#[tokio::test]
async fn relay_receives_resolved_order_payload() {
    let server = MockServer::start().await;
    let image_url = format!("{}/shop/images%20%26%20logo/IMG_1.jpg", server.uri());

    Mock::given(method("POST"))
        .and(path("/api/whatsapp-send"))
        .and(body_json(json!({
            "productName": "Canvas Print",
            "productPrice": "5000",
            "imageUrl": image_url,
            "recipientPhone": BUSINESS_PHONE
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let share = FakeShare::new(ShareCapability::Unsupported);
    let opener = RecordingOpener::default();
    let delivery = dispatcher(&server, &share, &opener, true)
        .dispatch(order())
        .await;

    assert!(matches!(delivery, Delivery::RelayConfirmed { .. }));
}

#[tokio::test]
async fn relay_receives_recipient_override_as_digits() {
    let server = MockServer::start().await;
    let image_url = format!("{}/shop/images%20%26%20logo/IMG_1.jpg", server.uri());

    Mock::given(method("POST"))
        .and(path("/api/whatsapp-send"))
        .and(body_json(json!({
            "productName": "Canvas Print",
            "productPrice": "5000",
            "imageUrl": image_url,
            "recipientPhone": "15550100"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let share = FakeShare::new(ShareCapability::Unsupported);
    let opener = RecordingOpener::default();
    let order = order().with_recipient(Some("+1 555 0100"));
    let delivery = dispatcher(&server, &share, &opener, true)
        .dispatch(order)
        .await;

    assert!(matches!(delivery, Delivery::RelayConfirmed { .. }));
    assert!(opener.opened().is_empty());
}

#[tokio::test]
async fn relay_error_status_falls_through_to_share() {
    let server = MockServer::start().await;
    mount_relay(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({"success": false, "error": "boom"})),
    )
    .await;
    mount_image(&server).await;

    let share = FakeShare::new(ShareCapability::WithFiles);
    let opener = RecordingOpener::default();
    let delivery = dispatcher(&server, &share, &opener, true)
        .dispatch(order())
        .await;

    assert_eq!(delivery, Delivery::Shared);
    assert_eq!(share.calls(), 1);
    assert!(opener.opened().is_empty());

    let payload = share
        .last_payload
        .lock()
        .expect("payload lock")
        .clone()
        .expect("payload recorded");
    assert_eq!(payload.title, "Canvas Print");
    assert!(payload.text.contains("💰 *Price:* ₦ 5000"));
    assert_eq!(payload.files.len(), 1);
    assert_eq!(payload.files[0].name, "IMG_1.jpg");
    assert_eq!(payload.files[0].mime_type, "image/jpeg");
    assert_eq!(payload.files[0].bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
}

#[tokio::test]
async fn relay_success_false_falls_through() {
    let server = MockServer::start().await;
    mount_relay(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": "nope"})),
    )
    .await;

    let share = FakeShare::new(ShareCapability::Unsupported);
    let opener = RecordingOpener::default();
    let delivery = dispatcher(&server, &share, &opener, true)
        .dispatch(order())
        .await;

    assert!(matches!(delivery, Delivery::DeepLinkOpened { .. }));
    assert_eq!(opener.opened().len(), 1);
}

#[tokio::test]
async fn relay_malformed_body_falls_through() {
    let server = MockServer::start().await;
    mount_relay(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
    )
    .await;

    let share = FakeShare::new(ShareCapability::TextOnly);
    let opener = RecordingOpener::default();
    let delivery = dispatcher(&server, &share, &opener, true)
        .dispatch(order())
        .await;

    assert!(matches!(delivery, Delivery::DeepLinkOpened { .. }));
    assert_eq!(share.calls(), 0, "text-only share must not be invoked");
}

#[tokio::test]
async fn image_fetch_failure_skips_share() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let share = FakeShare::new(ShareCapability::WithFiles);
    let opener = RecordingOpener::default();
    let delivery = dispatcher(&server, &share, &opener, false)
        .dispatch(order())
        .await;

    assert!(matches!(delivery, Delivery::DeepLinkOpened { .. }));
    assert_eq!(share.calls(), 0);
}

#[tokio::test]
async fn share_refusal_and_cancellation_fall_through() {
    let server = MockServer::start().await;
    mount_image(&server).await;

    let mut refusing = FakeShare::new(ShareCapability::WithFiles);
    refusing.can_share = false;
    let opener = RecordingOpener::default();
    let delivery = dispatcher(&server, &refusing, &opener, false)
        .dispatch(order())
        .await;
    assert!(matches!(delivery, Delivery::DeepLinkOpened { .. }));
    assert_eq!(refusing.calls(), 0);

    let mut cancelling = FakeShare::new(ShareCapability::WithFiles);
    cancelling.result = Err(ShareError::Cancelled);
    let opener = RecordingOpener::default();
    let delivery = dispatcher(&server, &cancelling, &opener, false)
        .dispatch(order())
        .await;
    assert!(matches!(delivery, Delivery::DeepLinkOpened { .. }));
    assert_eq!(cancelling.calls(), 1);
}

#[tokio::test]
async fn deep_link_carries_encoded_message() {
    let server = MockServer::start().await;
    let opener = RecordingOpener::default();
    let dispatcher = Dispatcher::new(
        format!("{}/shop/", server.uri()),
        Box::new(DeepLinkChannel::new(contact(), Box::new(opener.clone()))),
    )
    .with_channel(Box::new(ShareChannel::new(
        Client::new(),
        Box::new(UnsupportedShare),
    )));

    let delivery = dispatcher.dispatch(order()).await;

    let Delivery::DeepLinkOpened { url } = delivery else {
        panic!("expected deep link, got {delivery:?}");
    };
    assert!(url.starts_with("https://wa.me/2348036007786?text=Hello!%20I'm%20interested"));
    assert!(url.contains("%E2%82%A6%205000"), "price should be encoded: {url}");
    assert_eq!(opener.opened(), vec![url]);
}

#[tokio::test]
async fn recipient_override_addresses_the_deep_link() {
    let server = MockServer::start().await;
    let opener = RecordingOpener::default();
    let dispatcher = Dispatcher::new(
        format!("{}/", server.uri()),
        Box::new(DeepLinkChannel::new(
            WhatsAppContact::QrCode("QR1".to_string()),
            Box::new(opener.clone()),
        )),
    );

    let order = order().with_recipient(Some("+1 555 0100"));
    let delivery = dispatcher.dispatch(order).await;

    assert!(
        matches!(&delivery, Delivery::DeepLinkOpened { url } if url.starts_with("https://wa.me/15550100?text=")),
        "got {delivery:?}"
    );
}

#[test]
fn prepare_resolves_image_and_composes_message() {
    let opener = RecordingOpener::default();
    let dispatcher = Dispatcher::new(
        "https://site.test/shop/",
        Box::new(DeepLinkChannel::new(contact(), Box::new(opener))),
    );

    let order = Order::new("Canvas Print", Some(""), "./images & logo/My Photo.jpg").unwrap();
    let prepared = dispatcher.prepare(order);

    assert_eq!(
        prepared.image_url,
        "https://site.test/shop/images%20%26%20logo/My%20Photo.jpg"
    );
    assert!(!prepared.message.contains("Price"));
    assert!(prepared
        .message
        .contains("🖼️ *Image:* https://site.test/shop/images%20%26%20logo/My%20Photo.jpg"));
    assert_eq!(dispatcher.channel_names(), vec!["deep_link"]);
}
