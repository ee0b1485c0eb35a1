#![allow(dead_code)]

use buckaroo::config::{Endpoint, GatewayConfig};
use buckaroo::domain::money::MoneyAmount;
use buckaroo::pay::{Afterpay, Article, Country, Customer, CustomerCategory, Language, Salutation};
use buckaroo::{Authentication, Gateway, ParameterRecord, Transport, TransportError};
use chrono::NaiveDate;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// Routes crate logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// ── Transport stubs ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Submission {
    pub endpoint: String,
    pub parameters: Vec<ParameterRecord>,
    pub website_key: String,
}

/// Records every submission and answers with a canned response.
pub struct StubTransport {
    response: Result<serde_json::Value, TransportError>,
    calls: Mutex<Vec<Submission>>,
}

impl StubTransport {
    pub fn echo(response: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(response),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Submission> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn submit<'a>(
        &'a self,
        endpoint: &'a str,
        parameters: &'a [ParameterRecord],
        authentication: &'a Authentication,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, TransportError>> + Send + 'a>> {
        self.calls.lock().unwrap().push(Submission {
            endpoint: endpoint.to_string(),
            parameters: parameters.to_vec(),
            website_key: authentication.website_key().to_string(),
        });
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub fn success_response() -> serde_json::Value {
    serde_json::json!({
        "Key": "abc",
        "Status": { "Code": { "Code": 190 } },
    })
}

pub fn test_gateway(transport: Arc<StubTransport>) -> Gateway {
    let config = GatewayConfig {
        authentication: Authentication::new("website-key", "secret-key"),
        endpoint: Endpoint::Test,
    };
    Gateway::new(config, transport)
}

// ── Service fixtures ───────────────────────────────────────────────────────

pub fn billing_customer() -> Customer {
    Customer::new()
        .category(CustomerCategory::Person)
        .salutation(Salutation::Mr)
        .first_name("Jordi")
        .last_name("Jolink")
        .birth_date(NaiveDate::from_ymd_opt(1970, 6, 15).unwrap())
        .street("Teststraat")
        .street_number(1)
        .postal_code("1234AA")
        .city("Amsterdam")
        .country(Country::Nl)
        .mobile_phone("0612345678")
        .email("jordi@example.nl")
        .conversation_language(Language::Nl)
        .customer_number("C-TST-001")
}

pub fn shipping_customer() -> Customer {
    Customer::new()
        .category(CustomerCategory::Person)
        .first_name("Jordi")
        .last_name("Jolink")
        .street("Hoofdstraat")
        .street_number(124)
        .street_number_additional("a")
        .postal_code("5678XX")
        .city("Den Haag")
        .country(Country::Nl)
        .conversation_language(Language::Nl)
}

pub fn article(id: &str) -> Article {
    Article::new(id, "Test product", 2, MoneyAmount::new(2000), 21.0)
}

/// Afterpay with one article and a complete billing customer.
pub fn complete_afterpay() -> Afterpay {
    Afterpay::new()
        .merchant_image_url("https://example.nl/logo.png")
        .billing_customer(billing_customer())
        .add_article(article("ABC-001"))
}

pub fn find<'a>(records: &'a [ParameterRecord], group_type: &str, name: &str) -> Option<&'a ParameterRecord> {
    records
        .iter()
        .find(|r| r.group_type() == group_type && r.name() == name)
}
