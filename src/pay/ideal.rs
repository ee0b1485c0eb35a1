use crate::domain::{
    error::RequestError,
    parameter::ParameterRecord,
    service::{FieldMap, Service, all_missing, validate_mandatory},
};

const MANDATORY: &[&str] = &["issuer"];

/// iDEAL bank transfer. The consumer's bank (issuer) must be chosen up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ideal {
    fields: FieldMap,
}

impl Ideal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issuer code as listed by the `issuer` request parameter of the `Pay`
    /// action, e.g. `ABNANL2A`.
    pub fn issuer(self, issuer: impl Into<String>) -> Self {
        self.set_parameter("issuer", issuer)
    }

    pub fn set_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.set(name, value);
        self
    }
}

impl Service for Ideal {
    fn name(&self) -> &'static str {
        "ideal"
    }

    fn fields(&self) -> &FieldMap {
        &self.fields
    }

    fn validate_parameters(
        &self,
        _parameters: &[ParameterRecord],
        mandatory: &[&str],
    ) -> Result<(), RequestError> {
        validate_mandatory(&self.fields, MANDATORY)?;
        validate_mandatory(&self.fields, mandatory)
    }

    fn missing_parameters(&self, _parameters: &[ParameterRecord], mandatory: &[&str]) -> Vec<String> {
        let all: Vec<&str> = MANDATORY.iter().chain(mandatory).copied().collect();
        all_missing(&all, |key| self.fields.is_filled(key))
    }
}
