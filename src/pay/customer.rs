use {
    chrono::NaiveDate,
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum CustomerCategory {
    #[default]
    Person,
    Company,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Salutation {
    #[default]
    Mr,
    Mrs,
    Miss,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    #[default]
    #[display("NL")]
    Nl,
    #[display("BE")]
    Be,
    #[display("DE")]
    De,
    #[display("AT")]
    At,
    #[display("FI")]
    Fi,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[display("nl")]
    Nl,
    #[display("fr")]
    Fr,
    #[display("de")]
    De,
    #[display("fi")]
    Fi,
}

/// Which mirrored customer block a set of fields belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CustomerRole {
    #[display("BillingCustomer")]
    Billing,
    #[display("ShippingCustomer")]
    Shipping,
}

impl CustomerRole {
    /// Wire `GroupType` of the block.
    pub fn group_type(&self) -> &'static str {
        match self {
            Self::Billing => "BillingCustomer",
            Self::Shipping => "ShippingCustomer",
        }
    }
}

/// Customer details shared by the billing and shipping blocks. Only fields
/// that were set end up on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    category: Option<CustomerCategory>,
    company_name: Option<String>,
    salutation: Option<Salutation>,
    first_name: Option<String>,
    last_name: Option<String>,
    birth_date: Option<NaiveDate>,
    street: Option<String>,
    street_number: Option<u32>,
    street_number_additional: Option<String>,
    postal_code: Option<String>,
    city: Option<String>,
    country: Option<Country>,
    mobile_phone: Option<String>,
    email: Option<String>,
    conversation_language: Option<Language>,
    customer_number: Option<String>,
}

impl Customer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, value: CustomerCategory) -> Self {
        self.category = Some(value);
        self
    }

    /// Mandatory for B2B.
    pub fn company_name(mut self, value: impl Into<String>) -> Self {
        self.company_name = Some(value.into());
        self
    }

    pub fn salutation(mut self, value: Salutation) -> Self {
        self.salutation = Some(value);
        self
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Prefix included.
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn birth_date(mut self, value: NaiveDate) -> Self {
        self.birth_date = Some(value);
        self
    }

    pub fn street(mut self, value: impl Into<String>) -> Self {
        self.street = Some(value.into());
        self
    }

    pub fn street_number(mut self, value: u32) -> Self {
        self.street_number = Some(value);
        self
    }

    /// House number suffix.
    pub fn street_number_additional(mut self, value: impl Into<String>) -> Self {
        self.street_number_additional = Some(value.into());
        self
    }

    pub fn postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = Some(value.into());
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn country(mut self, value: Country) -> Self {
        self.country = Some(value);
        self
    }

    pub fn mobile_phone(mut self, value: impl Into<String>) -> Self {
        self.mobile_phone = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn conversation_language(mut self, value: Language) -> Self {
        self.conversation_language = Some(value);
        self
    }

    /// The number the merchant assigns to this customer.
    pub fn customer_number(mut self, value: impl Into<String>) -> Self {
        self.customer_number = Some(value.into());
        self
    }

    /// Wire name/value pairs of every field that is set.
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        let fields: [(&'static str, Option<String>); 16] = [
            ("Category", self.category.map(|v| v.to_string())),
            ("CompanyName", self.company_name.clone()),
            ("Salutation", self.salutation.map(|v| v.to_string())),
            ("FirstName", self.first_name.clone()),
            ("LastName", self.last_name.clone()),
            (
                "BirthDate",
                self.birth_date.map(|d| d.format("%d-%m-%Y").to_string()),
            ),
            ("Street", self.street.clone()),
            ("StreetNumber", self.street_number.map(|n| n.to_string())),
            (
                "StreetNumberAdditional",
                self.street_number_additional.clone(),
            ),
            ("PostalCode", self.postal_code.clone()),
            ("City", self.city.clone()),
            ("Country", self.country.map(|v| v.to_string())),
            ("MobilePhone", self.mobile_phone.clone()),
            ("Email", self.email.clone()),
            (
                "ConversationLanguage",
                self.conversation_language.map(|v| v.to_string()),
            ),
            ("CustomerNumber", self.customer_number.clone()),
        ];

        fields
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    }
}
