use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::unbounded;
use reqwest::Url;
use serde_json::json;
use shipping_client::invocation::InvocationState;
use shipping_client::model::view::ShippingView;
use shipping_client::rate_client::RateRequestClient;
use shipping_client::tool::{ShippingTool, ToolOutput};
use shipping_client::transport::{HttpTransport, RawResponse};
use shipping_common::{ClientConfig, FAILURE_MESSAGE, ShippingError};

struct CannedTransport {
    status: u16,
    body: &'static str,
    calls: AtomicUsize,
    last_url: std::sync::Mutex<Option<String>>,
}

impl CannedTransport {
    fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            calls: AtomicUsize::new(0),
            last_url: std::sync::Mutex::new(None),
        })
    }
}

impl HttpTransport for CannedTransport {
    fn get(&self, url: &Url, _headers: &[(String, String)]) -> Result<RawResponse, ShippingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        Ok(RawResponse {
            status: self.status,
            body: String::from(self.body),
        })
    }
}

const QUOTES_100_AND_80: &str = r#"[
    {"proposalId":501,"price":100,"currency":"EUR","vendorId":4,"maxTransitTime":6,
     "minTransitTime":4,"isCheapestExpress":false,"tryPrice":3600,"description":null,"customerName":null},
    {"proposalId":502,"price":80,"currency":"EUR","vendorId":9,"maxTransitTime":2,
     "minTransitTime":2,"isCheapestExpress":true,"tryPrice":2880,"description":null,"customerName":null}
]"#;

fn tool_over(transport: Arc<CannedTransport>, config: ClientConfig) -> ShippingTool {
    let client = RateRequestClient::with_transport(config, transport);
    ShippingTool::new(Arc::new(client))
}

#[test]
fn cheaper_quote_is_rendered_first() {
    let transport = CannedTransport::new(200, QUOTES_100_AND_80);
    let tool = tool_over(transport.clone(), ClientConfig::default().with_token("t0k3n"));
    let (tx, rx) = unbounded();

    let output = tool.call(json!({"toCountry": "DE", "weight": 2.5}), &tx, None);
    drop(tx);

    assert!(matches!(output, ToolOutput::Json(_)));
    assert_eq!(
        transport.last_url.lock().unwrap().as_deref(),
        Some("https://api-qa.navlungo.com/api/Calculations/calculate?ToCountry=DE&FromCountry=TR&Weight=2.5")
    );

    let states: Vec<InvocationState> = rx.iter().collect();
    assert_eq!(states.len(), 2);
    assert!(matches!(states[0].view(), Some(ShippingView::Loading(_))));

    match states[1].view() {
        Some(ShippingView::Carriers(cards)) => {
            assert_eq!(cards.len(), 2);
            assert_eq!(cards[0].price, "80 EUR");
            assert_eq!(cards[0].label.to_string(), "Express Shipping");
            assert_eq!(cards[0].transit_time, "2 days");
            assert_eq!(cards[0].reference_price.as_deref(), Some("2880 TRY"));
            assert_eq!(cards[1].price, "100 EUR");
            assert_eq!(cards[1].transit_time, "4-6 days");
        }
        other => panic!("expected carrier cards, got {:?}", other),
    }
}

#[test]
fn non_success_status_yields_single_error_string() {
    let transport = CannedTransport::new(503, "Service Unavailable");
    let tool = tool_over(transport.clone(), ClientConfig::default().with_token("t0k3n"));
    let (tx, rx) = unbounded();

    let output = tool.call(json!({"toCountry": "DE", "weight": 2.5}), &tx, None);
    drop(tx);

    assert_eq!(output, ToolOutput::Error(String::from(FAILURE_MESSAGE)));
    let views: Vec<ShippingView> = rx.iter().filter_map(|state| state.view()).collect();
    assert!(
        views
            .iter()
            .all(|view| !matches!(view, ShippingView::Carriers(_)))
    );
    assert_eq!(
        views.last(),
        Some(&ShippingView::Error(String::from(FAILURE_MESSAGE)))
    );
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_credential_never_reaches_the_network() {
    let transport = CannedTransport::new(200, QUOTES_100_AND_80);
    let tool = tool_over(transport.clone(), ClientConfig::default());
    let (tx, _rx) = unbounded();

    let output = tool.call(json!({"toCountry": "DE", "weight": 2.5}), &tx, None);

    assert_eq!(output, ToolOutput::Error(String::from(FAILURE_MESSAGE)));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn tool_ships_from_client_origin() {
    let transport = CannedTransport::new(200, "[]");
    let config = ClientConfig::default()
        .with_token("t0k3n")
        .with_origin_country("NL");
    let tool = tool_over(transport.clone(), config);
    let (tx, _rx) = unbounded();

    let output = tool.call(json!({"toCountry": "DE", "weight": 1}), &tx, None);

    assert_eq!(output, ToolOutput::Json(String::from("[]")));
    let url = transport.last_url.lock().unwrap().clone().unwrap();
    assert!(url.contains("ToCountry=DE&FromCountry=NL&Weight=1"));
}
