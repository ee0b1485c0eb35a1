use {
    super::error::RequestError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Amount in minor units (cents). Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoneyAmount(u64);

impl MoneyAmount {
    pub fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `MoneyAmount::from_units(50)` is 50.00.
    pub fn from_units(units: u64) -> Result<Self, RequestError> {
        units
            .checked_mul(100)
            .map(Self)
            .ok_or_else(|| RequestError::Validation(format!("amount overflow: {units}")))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

/// Wire format: decimal point, two fraction digits (`50.00`).
impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
    Chf,
    Sek,
    Dkk,
    Nok,
    Pln,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
            Self::Sek => "SEK",
            Self::Dkk => "DKK",
            Self::Nok => "NOK",
            Self::Pln => "PLN",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Currency {
    type Error = RequestError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "CHF" => Ok(Self::Chf),
            "SEK" => Ok(Self::Sek),
            "DKK" => Ok(Self::Dkk),
            "NOK" => Ok(Self::Nok),
            "PLN" => Ok(Self::Pln),
            other => Err(RequestError::Validation(format!(
                "unknown currency: {other}"
            ))),
        }
    }
}
