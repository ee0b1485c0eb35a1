use serde::{Serialize, Serializer};

/// One flat `{Name, GroupType, GroupID, Value}` entry of a transaction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    name: String,
    group_type: String,
    group_id: Option<usize>,
    value: String,
}

impl ParameterRecord {
    /// Ungrouped record: empty `GroupType` and `GroupID`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::in_group(name, "", value)
    }

    /// Record belonging to a non-repeating block such as `BillingCustomer`.
    pub fn in_group(
        name: impl Into<String>,
        group_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group_type: group_type.into(),
            group_id: None,
            value: value.into(),
        }
    }

    /// Record belonging to entry `group_id` of a repeating group such as `Article`.
    pub fn grouped(
        name: impl Into<String>,
        group_type: impl Into<String>,
        group_id: usize,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group_type: group_type.into(),
            group_id: Some(group_id),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group_type(&self) -> &str {
        &self.group_type
    }

    pub fn group_id(&self) -> Option<usize> {
        self.group_id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireRecord<'a> {
    name: &'a str,
    group_type: &'a str,
    #[serde(rename = "GroupID")]
    group_id: String,
    value: &'a str,
}

impl Serialize for ParameterRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireRecord {
            name: &self.name,
            group_type: &self.group_type,
            group_id: self.group_id.map(|id| id.to_string()).unwrap_or_default(),
            value: &self.value,
        }
        .serialize(serializer)
    }
}
