use {
    super::error::RequestError,
    super::parameter::ParameterRecord,
    std::{collections::BTreeMap, fmt},
};

/// Raw, ungrouped fields of a service. Unique keys, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Present and non-empty.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A declared field of a service schema: `group` is the wire `GroupType`
/// (empty for top-level fields). Reported as `group + name` when missing,
/// e.g. `BillingCustomerCity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub group: &'static str,
    pub name: &'static str,
}

impl FieldSpec {
    pub const fn new(group: &'static str, name: &'static str) -> Self {
        Self { group, name }
    }

    pub fn key(&self) -> String {
        format!("{}{}", self.group, self.name)
    }
}

/// First required key (in declaration order) for which `is_filled` is false.
pub fn first_missing<K: AsRef<str>>(
    required: &[K],
    is_filled: impl Fn(&str) -> bool,
) -> Option<String> {
    required
        .iter()
        .map(|key| key.as_ref())
        .find(|&key| !is_filled(key))
        .map(str::to_owned)
}

/// Every required key for which `is_filled` is false, declaration order, no duplicates.
pub fn all_missing<K: AsRef<str>>(required: &[K], is_filled: impl Fn(&str) -> bool) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for key in required.iter().map(|key| key.as_ref()) {
        if !is_filled(key) && !missing.iter().any(|m| m == key) {
            missing.push(key.to_owned());
        }
    }
    missing
}

/// Base check every service ends with: the caller-supplied `mandatory` names
/// must be filled in the raw field map.
pub fn validate_mandatory(fields: &FieldMap, mandatory: &[&str]) -> Result<(), RequestError> {
    match first_missing(mandatory, |key| fields.is_filled(key)) {
        Some(name) => Err(RequestError::MissingParameter(name)),
        None => Ok(()),
    }
}

/// Base flattening: `parameters` followed by one ungrouped record per raw field.
pub fn flatten_fields(parameters: &[ParameterRecord], fields: &FieldMap) -> Vec<ParameterRecord> {
    parameters
        .iter()
        .cloned()
        .chain(
            fields
                .iter()
                .map(|(name, value)| ParameterRecord::new(name, value)),
        )
        .collect()
}

/// A payment method the gateway can execute. Implementors own their fields;
/// validation and flattening run against that model before it is reduced to
/// wire records.
pub trait Service: Send + Sync + fmt::Debug {
    /// Gateway identifier of the payment method.
    fn name(&self) -> &'static str;

    fn action(&self) -> &'static str {
        "Pay"
    }

    fn fields(&self) -> &FieldMap;

    fn validate_parameters(
        &self,
        _parameters: &[ParameterRecord],
        mandatory: &[&str],
    ) -> Result<(), RequestError> {
        validate_mandatory(self.fields(), mandatory)
    }

    /// Same checks as `validate_parameters`, but reports every missing field
    /// instead of stopping at the first.
    fn missing_parameters(&self, _parameters: &[ParameterRecord], mandatory: &[&str]) -> Vec<String> {
        all_missing(mandatory, |key| self.fields().is_filled(key))
    }

    /// Returns `parameters` extended with this service's records. Pure.
    fn complement_parameter_list(&self, parameters: &[ParameterRecord]) -> Vec<ParameterRecord> {
        flatten_fields(parameters, self.fields())
    }
}
