use {
    crate::domain::{
        authentication::Authentication,
        error::RequestError,
        id::TransactionKey,
        money::{Currency, MoneyAmount},
        parameter::ParameterRecord,
        result::TransactionResult,
        service::Service,
        transport::Transport,
    },
    std::{fmt, net::IpAddr, sync::Arc},
    tracing::Instrument,
    uuid::Uuid,
};

pub const API_PATH: &str = "json/TransactionRequest";

/// Progress of a request. Only ever moves one step forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configured,
    Validated,
    Submitted,
    Decoded,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configured => "configured",
            Self::Validated => "validated",
            Self::Submitted => "submitted",
            Self::Decoded => "decoded",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Configured => 0,
            Self::Validated => 1,
            Self::Submitted => 2,
            Self::Decoded => 3,
        }
    }

    pub fn can_advance_to(&self, next: &Stage) -> bool {
        next.rank() == self.rank() + 1
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One transaction against the gateway: a service plus the transaction-level
/// fields. Owns the service; submits at most once.
pub struct TransactionRequest {
    authentication: Authentication,
    service: Box<dyn Service>,
    endpoint: String,
    transport: Arc<dyn Transport>,
    stage: Stage,
    mandatory: Vec<String>,
    currency: Currency,
    amount_debit: Option<MoneyAmount>,
    amount_credit: Option<MoneyAmount>,
    invoice: Option<String>,
    order: Option<String>,
    description: Option<String>,
    return_url: Option<String>,
    return_url_cancel: Option<String>,
    return_url_error: Option<String>,
    return_url_reject: Option<String>,
    original_transaction_key: Option<TransactionKey>,
    start_recurrent: bool,
    push_url: Option<String>,
    push_url_failure: Option<String>,
    client_ip: Option<IpAddr>,
}

impl TransactionRequest {
    pub fn new(
        authentication: Authentication,
        service: impl Service + 'static,
        endpoint: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            authentication,
            service: Box::new(service),
            endpoint: endpoint.into(),
            transport,
            stage: Stage::Configured,
            mandatory: Vec::new(),
            currency: Currency::default(),
            amount_debit: None,
            amount_credit: None,
            invoice: None,
            order: None,
            description: None,
            return_url: None,
            return_url_cancel: None,
            return_url_error: None,
            return_url_reject: None,
            original_transaction_key: None,
            start_recurrent: false,
            push_url: None,
            push_url_failure: None,
            client_ip: None,
        }
    }

    /// Additional raw service field that must be filled before submission.
    pub fn require_service_field(mut self, name: impl Into<String>) -> Self {
        self.mandatory.push(name.into());
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Amount charged to the consumer. Either this or `amount_credit`.
    pub fn amount_debit(mut self, amount: MoneyAmount) -> Self {
        self.amount_debit = Some(amount);
        self
    }

    /// Amount paid out (refunds). Either this or `amount_debit`.
    pub fn amount_credit(mut self, amount: MoneyAmount) -> Self {
        self.amount_credit = Some(amount);
        self
    }

    pub fn invoice(mut self, invoice: impl Into<String>) -> Self {
        self.invoice = Some(invoice.into());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Where the consumer lands after an external payment page.
    pub fn return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    pub fn return_url_cancel(mut self, url: impl Into<String>) -> Self {
        self.return_url_cancel = Some(url.into());
        self
    }

    pub fn return_url_error(mut self, url: impl Into<String>) -> Self {
        self.return_url_error = Some(url.into());
        self
    }

    pub fn return_url_reject(mut self, url: impl Into<String>) -> Self {
        self.return_url_reject = Some(url.into());
        self
    }

    /// Marks this as a follow-up (refund, recurring charge) of `key`.
    pub fn original_transaction_key(mut self, key: TransactionKey) -> Self {
        self.original_transaction_key = Some(key);
        self
    }

    pub fn start_recurrent(mut self, value: bool) -> Self {
        self.start_recurrent = value;
        self
    }

    pub fn push_url(mut self, url: impl Into<String>) -> Self {
        self.push_url = Some(url.into());
        self
    }

    pub fn push_url_failure(mut self, url: impl Into<String>) -> Self {
        self.push_url_failure = Some(url.into());
        self
    }

    pub fn client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn service(&self) -> &dyn Service {
        self.service.as_ref()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate, assemble, submit and decode. A validation failure never
    /// reaches the transport; a transport failure is returned unchanged.
    pub async fn request(&mut self) -> Result<TransactionResult, RequestError> {
        if self.stage != Stage::Configured {
            return Err(RequestError::AlreadySubmitted);
        }

        let request_id = Uuid::now_v7();
        let span = tracing::info_span!(
            "transaction_request",
            %request_id,
            service = self.service.name()
        );

        async {
            let parameters = self.parameter_list()?;
            self.advance(Stage::Validated)?;

            self.advance(Stage::Submitted)?;
            tracing::info!(
                endpoint = %self.endpoint,
                parameters = parameters.len(),
                "submitting transaction"
            );
            let raw = self
                .transport
                .submit(&self.endpoint, &parameters, &self.authentication)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "transport failed"))?;

            let result = TransactionResult::from_response(raw);
            self.advance(Stage::Decoded)?;
            tracing::info!(
                key = result.key().unwrap_or(""),
                status = ?result.status_code(),
                actions = result.actions().len(),
                "transaction decoded"
            );
            Ok::<_, RequestError>(result)
        }
        .instrument(span)
        .await
    }

    /// The complete wire list, after validation, without submitting anything.
    pub fn parameter_list(&self) -> Result<Vec<ParameterRecord>, RequestError> {
        let base = self.transaction_parameters();
        self.validate(&base)?;
        Ok(self.service.complement_parameter_list(&base))
    }

    fn validate(&self, base: &[ParameterRecord]) -> Result<(), RequestError> {
        let mandatory: Vec<&str> = self.mandatory.iter().map(String::as_str).collect();
        self.service
            .validate_parameters(base, &mandatory)
            .inspect_err(|e| tracing::warn!(service = self.service.name(), error = %e, "validation failed"))?;

        match (self.amount_debit, self.amount_credit) {
            (Some(_), Some(_)) => Err(RequestError::AmbiguousAmount),
            (None, None) => {
                tracing::warn!(service = self.service.name(), "neither AmountDebit nor AmountCredit is set");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Transaction-level fields (ungrouped) followed by the service identity.
    fn transaction_parameters(&self) -> Vec<ParameterRecord> {
        let optional = [
            ("AmountDebit", self.amount_debit.map(|a| a.to_string())),
            ("AmountCredit", self.amount_credit.map(|a| a.to_string())),
            ("Invoice", self.invoice.clone()),
            ("Order", self.order.clone()),
            ("Description", self.description.clone()),
            ("ReturnURL", self.return_url.clone()),
            ("ReturnURLCancel", self.return_url_cancel.clone()),
            ("ReturnURLError", self.return_url_error.clone()),
            ("ReturnURLReject", self.return_url_reject.clone()),
            (
                "OriginalTransactionKey",
                self.original_transaction_key
                    .as_ref()
                    .map(|k| k.as_str().to_string()),
            ),
            ("PushURL", self.push_url.clone()),
            ("PushURLFailure", self.push_url_failure.clone()),
            ("ClientIP", self.client_ip.map(|ip| ip.to_string())),
        ];

        let mut records = vec![
            ParameterRecord::new("Currency", self.currency.as_str()),
            ParameterRecord::new("StartRecurrent", self.start_recurrent.to_string()),
        ];
        records.extend(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| ParameterRecord::new(name, v))),
        );
        records.push(ParameterRecord::new("ServiceName", self.service.name()));
        records.push(ParameterRecord::new("ServiceAction", self.service.action()));
        records
    }

    fn advance(&mut self, next: Stage) -> Result<(), RequestError> {
        if !self.stage.can_advance_to(&next) {
            return Err(RequestError::Validation(format!(
                "invalid stage transition: {} → {}",
                self.stage, next
            )));
        }
        tracing::debug!(from = %self.stage, to = %next, "stage");
        self.stage = next;
        Ok(())
    }
}

impl fmt::Debug for TransactionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionRequest")
            .field("service", &self.service)
            .field("endpoint", &self.endpoint)
            .field("stage", &self.stage)
            .field("currency", &self.currency)
            .field("amount_debit", &self.amount_debit)
            .field("amount_credit", &self.amount_credit)
            .field("invoice", &self.invoice)
            .finish_non_exhaustive()
    }
}
