use {
    super::customer::{Customer, CustomerRole},
    crate::domain::{
        error::RequestError,
        money::MoneyAmount,
        parameter::ParameterRecord,
        service::{
            FieldMap, FieldSpec, Service, all_missing, first_missing, flatten_fields,
            validate_mandatory,
        },
    },
    std::collections::BTreeMap,
};

pub const ARTICLE_GROUP: &str = "Article";

const BILLING: &str = "BillingCustomer";
const SHIPPING: &str = "ShippingCustomer";

const BILLING_REQUIRED: &[FieldSpec] = &[
    FieldSpec::new(BILLING, "Category"),
    FieldSpec::new(BILLING, "FirstName"),
    FieldSpec::new(BILLING, "LastName"),
    FieldSpec::new(BILLING, "Salutation"),
    FieldSpec::new(BILLING, "BirthDate"),
    FieldSpec::new(BILLING, "Street"),
    FieldSpec::new(BILLING, "StreetNumber"),
    FieldSpec::new(BILLING, "PostalCode"),
    FieldSpec::new(BILLING, "City"),
    FieldSpec::new(BILLING, "Country"),
    FieldSpec::new(BILLING, "MobilePhone"),
    FieldSpec::new(BILLING, "Email"),
    FieldSpec::new(BILLING, "ConversationLanguage"),
];

// Enforced on top of the billing list when the shipment address differs.
const SHIPPING_REQUIRED: &[FieldSpec] = &[
    FieldSpec::new(SHIPPING, "Category"),
    FieldSpec::new(SHIPPING, "FirstName"),
    FieldSpec::new(SHIPPING, "LastName"),
    FieldSpec::new(SHIPPING, "Street"),
    FieldSpec::new(SHIPPING, "StreetNumber"),
    FieldSpec::new(SHIPPING, "PostalCode"),
    FieldSpec::new(SHIPPING, "City"),
    FieldSpec::new(SHIPPING, "ConversationLanguage"),
];

/// One order line.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub identifier: String,
    pub description: String,
    pub quantity: u32,
    pub gross_unit_price: MoneyAmount,
    pub vat_percentage: f64,
}

impl Article {
    pub fn new(
        identifier: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        gross_unit_price: MoneyAmount,
        vat_percentage: f64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
            quantity,
            gross_unit_price,
            vat_percentage,
        }
    }

    fn to_fields(&self) -> [(&'static str, String); 5] {
        [
            ("Identifier", self.identifier.clone()),
            ("Description", self.description.clone()),
            ("Quantity", self.quantity.to_string()),
            ("GrossUnitPrice", self.gross_unit_price.to_string()),
            ("VatPercentage", self.vat_percentage.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ServiceParameter {
    name: String,
    value: String,
    group_type: String,
}

/// Pay-after-delivery service. Needs at least one article and a complete
/// billing customer; the shipping customer becomes mandatory once the
/// shipment address is declared to differ.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Afterpay {
    fields: FieldMap,
    articles: Vec<Article>,
    // Keyed by group type + name, so billing and shipping never collide.
    service_parameters: BTreeMap<String, ServiceParameter>,
    addresses_differ: bool,
}

impl Afterpay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_article(mut self, article: Article) -> Self {
        self.articles.push(article);
        self
    }

    pub fn shipment_address_differs(mut self, value: bool) -> Self {
        self.addresses_differ = value;
        self
    }

    /// Brand image shown on the consumer's order page.
    pub fn merchant_image_url(self, value: impl Into<String>) -> Self {
        self.set_service_parameter("", "MerchantImageUrl", value)
    }

    pub fn billing_customer(self, customer: Customer) -> Self {
        self.customer(CustomerRole::Billing, customer)
    }

    pub fn shipping_customer(self, customer: Customer) -> Self {
        self.customer(CustomerRole::Shipping, customer)
    }

    /// Writes every set field of `customer` into the block of `role`.
    /// Fields already present and not set on `customer` are kept.
    pub fn customer(mut self, role: CustomerRole, customer: Customer) -> Self {
        for (name, value) in customer.to_fields() {
            self = self.set_service_parameter(role.group_type(), name, value);
        }
        self
    }

    pub fn set_service_parameter(
        mut self,
        group_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let group_type = group_type.into();
        let name = name.into();
        self.service_parameters.insert(
            format!("{group_type}{name}"),
            ServiceParameter {
                name,
                value: value.into(),
                group_type,
            },
        );
        self
    }

    /// Raw ungrouped field, outside the typed setters.
    pub fn set_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.set(name, value);
        self
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn addresses_differ(&self) -> bool {
        self.addresses_differ
    }

    fn required_keys(&self) -> Vec<String> {
        let shipping: &[FieldSpec] = if self.addresses_differ {
            SHIPPING_REQUIRED
        } else {
            &[]
        };
        BILLING_REQUIRED
            .iter()
            .chain(shipping)
            .map(FieldSpec::key)
            .collect()
    }

    fn is_filled(&self, key: &str) -> bool {
        self.service_parameters
            .get(key)
            .is_some_and(|p| !p.value.is_empty())
    }
}

impl Service for Afterpay {
    fn name(&self) -> &'static str {
        "Afterpay"
    }

    fn fields(&self) -> &FieldMap {
        &self.fields
    }

    fn validate_parameters(
        &self,
        _parameters: &[ParameterRecord],
        mandatory: &[&str],
    ) -> Result<(), RequestError> {
        if self.articles.is_empty() {
            return Err(RequestError::NoArticlesProvided);
        }

        if let Some(missing) = first_missing(&self.required_keys(), |key| self.is_filled(key)) {
            return Err(RequestError::MissingParameter(missing));
        }

        validate_mandatory(&self.fields, mandatory)
    }

    /// Missing customer fields followed by missing `mandatory` names.
    /// The article requirement is reported only by `validate_parameters`.
    fn missing_parameters(&self, _parameters: &[ParameterRecord], mandatory: &[&str]) -> Vec<String> {
        let mut missing = all_missing(&self.required_keys(), |key| self.is_filled(key));
        missing.extend(all_missing(mandatory, |key| self.fields.is_filled(key)));
        missing
    }

    fn complement_parameter_list(&self, parameters: &[ParameterRecord]) -> Vec<ParameterRecord> {
        let mut records = parameters.to_vec();

        for (index, article) in self.articles.iter().enumerate() {
            records.extend(
                article
                    .to_fields()
                    .into_iter()
                    .map(|(name, value)| ParameterRecord::grouped(name, ARTICLE_GROUP, index, value)),
            );
        }

        records.extend(
            self.service_parameters
                .values()
                .map(|p| ParameterRecord::in_group(&p.name, &p.group_type, &p.value)),
        );

        flatten_fields(&records, &self.fields)
    }
}
