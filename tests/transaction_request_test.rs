mod common;

use buckaroo::config::{ConfigError, Endpoint, GatewayConfig};
use buckaroo::domain::money::MoneyAmount;
use buckaroo::pay::{Afterpay, Ideal};
use buckaroo::services::transaction_request::Stage;
use buckaroo::{RequestError, TransportError};
use common::*;
use std::collections::HashMap;

// ── 1. ideal_end_to_end_success ────────────────────────────────────────────

#[tokio::test]
async fn ideal_end_to_end_success() {
    init_tracing();
    let transport = StubTransport::echo(success_response());
    let gateway = test_gateway(transport.clone());

    let mut request = gateway
        .transaction_request(Ideal::new().issuer("ABNANL2A"))
        .amount_debit(MoneyAmount::from_units(50).unwrap())
        .invoice("INV-1");

    let result = request.request().await.unwrap();

    assert_eq!(result.key(), Some("abc"));
    assert_eq!(result.status_code(), Some(190));
    assert!(result.is_success());
    assert_eq!(result.raw()["Status"]["Code"]["Code"], 190);
    assert_eq!(request.stage(), Stage::Decoded);

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].endpoint,
        "https://testcheckout.buckaroo.nl/json/TransactionRequest"
    );
    assert_eq!(calls[0].website_key, "website-key");
    let amount = find(&calls[0].parameters, "", "AmountDebit").unwrap();
    assert_eq!(amount.value(), "50.00");
    assert_eq!(find(&calls[0].parameters, "", "Currency").unwrap().value(), "EUR");
}

// ── 2. validation_failure_never_reaches_transport ──────────────────────────

#[tokio::test]
async fn validation_failure_never_reaches_transport() {
    init_tracing();
    let transport = StubTransport::echo(success_response());
    let gateway = test_gateway(transport.clone());

    let mut request = gateway
        .transaction_request(Afterpay::new().billing_customer(billing_customer()))
        .amount_debit(MoneyAmount::new(5000));

    let err = request.request().await.unwrap_err();
    assert!(matches!(err, RequestError::NoArticlesProvided));
    assert!(transport.calls().is_empty());
    assert_eq!(request.stage(), Stage::Configured);
}

// ── 3. transport_failure_is_propagated_unchanged ───────────────────────────

#[tokio::test]
async fn transport_failure_is_propagated_unchanged() {
    init_tracing();
    let transport = StubTransport::failing(TransportError::Timeout);
    let gateway = test_gateway(transport.clone());

    let mut request = gateway
        .transaction_request(Ideal::new().issuer("ABNANL2A"))
        .amount_debit(MoneyAmount::new(5000));

    let err = request.request().await.unwrap_err();
    assert!(matches!(err, RequestError::Transport(TransportError::Timeout)));
    assert_eq!(transport.calls().len(), 1);
    assert_eq!(request.stage(), Stage::Submitted);
}

// ── 4. second_request_is_refused ───────────────────────────────────────────

#[tokio::test]
async fn second_request_is_refused() {
    let transport = StubTransport::echo(success_response());
    let gateway = test_gateway(transport.clone());

    let mut request = gateway
        .transaction_request(Ideal::new().issuer("ABNANL2A"))
        .amount_debit(MoneyAmount::new(5000));

    request.request().await.unwrap();
    let err = request.request().await.unwrap_err();
    assert!(matches!(err, RequestError::AlreadySubmitted));
    assert_eq!(transport.calls().len(), 1);
}

// ── 5. failed_submission_is_not_retried ────────────────────────────────────

#[tokio::test]
async fn failed_submission_is_not_retried() {
    let transport = StubTransport::failing(TransportError::Http {
        status: 503,
        body: "unavailable".into(),
    });
    let gateway = test_gateway(transport.clone());
    let mut request = gateway
        .transaction_request(Ideal::new().issuer("ABNANL2A"))
        .amount_debit(MoneyAmount::new(5000));

    let first = request.request().await.unwrap_err();
    assert_eq!(first.to_string(), "transport: http 503: unavailable");
    let second = request.request().await.unwrap_err();
    assert!(matches!(second, RequestError::AlreadySubmitted));
    assert_eq!(transport.calls().len(), 1);
}

// ── 6. both_amounts_is_rejected ────────────────────────────────────────────

#[tokio::test]
async fn both_amounts_is_rejected() {
    let transport = StubTransport::echo(success_response());
    let gateway = test_gateway(transport.clone());

    let mut request = gateway
        .transaction_request(Ideal::new().issuer("ABNANL2A"))
        .amount_debit(MoneyAmount::new(5000))
        .amount_credit(MoneyAmount::new(5000));

    let err = request.request().await.unwrap_err();
    assert!(matches!(err, RequestError::AmbiguousAmount));
    assert!(transport.calls().is_empty());
}

// ── 7. no_amount_is_only_a_warning ─────────────────────────────────────────

#[tokio::test]
async fn no_amount_is_only_a_warning() {
    init_tracing();
    let transport = StubTransport::echo(success_response());
    let gateway = test_gateway(transport.clone());

    let mut request = gateway.transaction_request(Ideal::new().issuer("ABNANL2A"));
    assert!(request.request().await.is_ok());
    assert_eq!(transport.calls().len(), 1);
}

// ── 8. required_service_field_enforced ─────────────────────────────────────

#[tokio::test]
async fn required_service_field_enforced() {
    let transport = StubTransport::echo(success_response());
    let gateway = test_gateway(transport.clone());

    let mut request = gateway
        .transaction_request(Ideal::new().issuer("ABNANL2A"))
        .amount_debit(MoneyAmount::new(5000))
        .require_service_field("consumerName");

    let err = request.request().await.unwrap_err();
    assert!(matches!(err, RequestError::MissingParameter(ref f) if f == "consumerName"));
    assert!(transport.calls().is_empty());
}

// ── 9. afterpay_end_to_end_with_actions ────────────────────────────────────

#[tokio::test]
async fn afterpay_end_to_end_with_actions() {
    init_tracing();
    let transport = StubTransport::echo(serde_json::json!({
        "Key": "4E8BD922192E4A1EB4D9C2D3A5E7F901",
        "Status": {"Code": {"Code": 190}},
        "Actions": [{"Name": "Refund"}, {"Name": "CancelAuthorization"}]
    }));
    let gateway = test_gateway(transport.clone());

    let afterpay = complete_afterpay()
        .shipment_address_differs(true)
        .shipping_customer(shipping_customer());
    let mut request = gateway
        .transaction_request(afterpay)
        .amount_debit(MoneyAmount::new(5000))
        .invoice("ap-250811-001")
        .client_ip("192.168.1.1".parse().unwrap());

    let result = request.request().await.unwrap();
    assert!(result.is_success());
    assert_eq!(result.actions().len(), 2);
    assert!(result.action("Refund").is_some());

    let calls = transport.calls();
    let sent = &calls[0].parameters;
    assert_eq!(find(sent, "", "ServiceName").unwrap().value(), "Afterpay");
    assert_eq!(find(sent, "ShippingCustomer", "City").unwrap().value(), "Den Haag");
    assert_eq!(sent.iter().filter(|r| r.group_type() == "Article").count(), 5);
}

// ── 10. config_from_lookup ─────────────────────────────────────────────────

#[test]
fn config_from_lookup() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("BUCKAROO_WEBSITE_KEY", "web"),
        ("BUCKAROO_SECRET_KEY", "secret"),
        ("BUCKAROO_TEST_MODE", "false"),
    ]);
    let config = GatewayConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    assert_eq!(config.endpoint, Endpoint::Live);
    assert_eq!(config.authentication.website_key(), "web");
    assert_eq!(
        config.endpoint.url("json/TransactionRequest"),
        "https://checkout.buckaroo.nl/json/TransactionRequest"
    );
    assert!(!format!("{:?}", config.authentication).contains("\"secret\""));

    let defaults = GatewayConfig::from_lookup(|k| match k {
        "BUCKAROO_WEBSITE_KEY" => Some("web".into()),
        "BUCKAROO_SECRET_KEY" => Some("s3".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(defaults.endpoint, Endpoint::Test);
}

// ── 11. config_errors ──────────────────────────────────────────────────────

#[test]
fn config_errors() {
    let err = GatewayConfig::from_lookup(|_| None).unwrap_err();
    assert_eq!(err, ConfigError::Missing("BUCKAROO_WEBSITE_KEY"));

    let err = GatewayConfig::from_lookup(|k| match k {
        "BUCKAROO_TEST_MODE" => Some("maybe".into()),
        _ => Some("x".into()),
    })
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            key: "BUCKAROO_TEST_MODE",
            value: "maybe".into()
        }
    );
}
