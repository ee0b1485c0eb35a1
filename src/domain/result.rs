use {
    serde_json::{Map, Value},
    std::{collections::BTreeMap, fmt},
};

/// Gateway status codes (`Status.Code.Code`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Success,
    Failed,
    ValidationFailure,
    TechnicalFailure,
    Rejected,
    PendingInput,
    PendingProcessing,
    AwaitingConsumer,
    OnHold,
    CancelledByUser,
    CancelledByMerchant,
    Unknown(i64),
}

impl StatusCode {
    pub const SUCCESS: i64 = 190;

    pub fn code(&self) -> i64 {
        match self {
            Self::Success => Self::SUCCESS,
            Self::Failed => 490,
            Self::ValidationFailure => 491,
            Self::TechnicalFailure => 492,
            Self::Rejected => 690,
            Self::PendingInput => 790,
            Self::PendingProcessing => 791,
            Self::AwaitingConsumer => 792,
            Self::OnHold => 793,
            Self::CancelledByUser => 890,
            Self::CancelledByMerchant => 891,
            Self::Unknown(code) => *code,
        }
    }

    /// 79x codes: the transaction is not final yet.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            Self::PendingInput | Self::PendingProcessing | Self::AwaitingConsumer | Self::OnHold
        )
    }
}

impl From<i64> for StatusCode {
    fn from(code: i64) -> Self {
        match code {
            190 => Self::Success,
            490 => Self::Failed,
            491 => Self::ValidationFailure,
            492 => Self::TechnicalFailure,
            690 => Self::Rejected,
            790 => Self::PendingInput,
            791 => Self::PendingProcessing,
            792 => Self::AwaitingConsumer,
            793 => Self::OnHold,
            890 => Self::CancelledByUser,
            891 => Self::CancelledByMerchant,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionStatus {
    pub code: StatusCode,
    pub description: Option<String>,
    pub sub_code: Option<String>,
    pub sub_code_description: Option<String>,
}

impl TransactionStatus {
    fn from_value(status: &Value) -> Option<Self> {
        let code = status.get("Code")?;
        let numeric = integer_like(code.get("Code")?)?;
        Some(Self {
            code: StatusCode::from(numeric),
            description: text(code.get("Description")),
            sub_code: status.get("SubCode").and_then(|s| text(s.get("Code"))),
            sub_code_description: status.get("SubCode").and_then(|s| text(s.get("Description"))),
        })
    }
}

/// Input parameter an action accepts, as advertised by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionParameter {
    pub name: String,
    pub group: Option<String>,
    pub data_type: Option<i64>,
    pub max_length: Option<u32>,
    pub required: bool,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Selectable values (`Value` → `Description`), e.g. the issuer list.
    pub list_items: Vec<(String, String)>,
}

impl ActionParameter {
    fn from_entry(entry: &Map<String, Value>) -> Option<Self> {
        let name = text(entry.get("Name"))?;
        let list_items = entry
            .get("ListItemDescriptions")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        Some((text(item.get("Value"))?, text(item.get("Description"))?))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            group: text(entry.get("Group")),
            data_type: lenient_integer(entry, "DataType"),
            max_length: lenient_integer(entry, "MaxLength").and_then(|n| u32::try_from(n).ok()),
            required: entry.get("Required").and_then(Value::as_bool).unwrap_or(false),
            display_name: text(entry.get("DisplayName")),
            description: text(entry.get("Description")),
            list_items,
            name,
        })
    }
}

/// A named follow-up instruction returned by the gateway (e.g. `Pay`, `Refund`).
/// Keeps the complete source entry next to the fields read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    name: String,
    action_type: Option<i64>,
    description: Option<String>,
    request_parameters: Vec<ActionParameter>,
    fields: Map<String, Value>,
}

impl Action {
    fn from_entry(name: String, entry: &Map<String, Value>) -> Self {
        let request_parameters = entry
            .get("RequestParameters")
            .and_then(Value::as_array)
            .map(|params| {
                params
                    .iter()
                    .filter_map(|p| {
                        let parsed = p.as_object().and_then(ActionParameter::from_entry);
                        if parsed.is_none() {
                            tracing::debug!(action = %name, "skipping malformed request parameter");
                        }
                        parsed
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            action_type: lenient_integer(entry, "Type"),
            description: text(entry.get("Description")),
            request_parameters,
            fields: entry.clone(),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action_type(&self) -> Option<i64> {
        self.action_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn request_parameters(&self) -> &[ActionParameter] {
        &self.request_parameters
    }

    /// Raw value of any key of the source entry.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Typed view of a gateway response.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResult {
    key: Option<String>,
    status: Option<TransactionStatus>,
    actions: BTreeMap<String, Action>,
    raw: Value,
}

impl TransactionResult {
    /// Never fails: missing or oddly shaped parts decode to `None` / empty.
    /// `Actions` entries without a name are dropped; a repeated name keeps the
    /// last entry.
    pub fn from_response(raw: Value) -> Self {
        let mut actions = BTreeMap::new();
        if let Some(entries) = raw.get("Actions").and_then(Value::as_array) {
            for entry in entries {
                let Some(object) = entry.as_object() else {
                    tracing::debug!("skipping non-object action entry");
                    continue;
                };
                let Some(name) = text(object.get("Name")) else {
                    continue;
                };
                if let Some(previous) = actions.insert(name.clone(), Action::from_entry(name, object)) {
                    tracing::debug!(action = %previous.name, "duplicate action name, keeping last");
                }
            }
        }

        Self {
            key: text(raw.get("Key")),
            status: raw.get("Status").and_then(TransactionStatus::from_value),
            actions,
            raw,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn status(&self) -> Option<&TransactionStatus> {
        self.status.as_ref()
    }

    pub fn status_code(&self) -> Option<i64> {
        self.status.as_ref().map(|s| s.code.code())
    }

    pub fn is_success(&self) -> bool {
        self.status_code() == Some(StatusCode::SUCCESS)
    }

    pub fn sub_code_description(&self) -> Option<&str> {
        self.status.as_ref()?.sub_code_description.as_deref()
    }

    /// `RequiredAction.RedirectURL`, set when the consumer must be sent to the
    /// payment page.
    pub fn redirect_url(&self) -> Option<&str> {
        self.raw
            .get("RequiredAction")?
            .get("RedirectURL")?
            .as_str()
            .filter(|url| !url.is_empty())
    }

    pub fn actions(&self) -> &BTreeMap<String, Action> {
        &self.actions
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Non-empty string value.
fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Integer or numeric string.
fn integer_like(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_integer(entry: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = entry.get(key)?;
    let parsed = integer_like(value);
    if parsed.is_none() && !value.is_null() {
        tracing::debug!(key, "ignoring non-numeric field");
    }
    parsed
}
