use crate::error::{ContractError, Result};
use apollo_compiler::ast::Type;
use serde::{Deserialize, Serialize};

/// Knobs for the compatibility comparison.
///
/// Deserializable so a host application can embed it in its own
/// configuration; every key is optional.
///
/// ```yaml
/// compareWrappers: true
/// reportUnknownArguments: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CheckOptions {
    /// Also flag changes in list and non-null wrapping (`ID` vs `ID!`).
    /// Off by default: only named types are compared.
    pub compare_wrappers: bool,
    /// Report arguments that one schema does not declare, when the field or
    /// directive they belong to exists in both.
    pub report_unknown_arguments: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            compare_wrappers: false,
            report_unknown_arguments: true,
        }
    }
}

impl CheckOptions {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_saphyr::from_str(contents)
            .map_err(|e| ContractError::InvalidOptions(format!("YAML parse error: {e}")))
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| ContractError::InvalidOptions(format!("JSON parse error: {e}")))
    }

    /// How a type is shown in discrepancies under these options.
    pub(crate) fn describe(&self, ty: &Type) -> String {
        if self.compare_wrappers {
            ty.to_string()
        } else {
            ty.inner_named_type().to_string()
        }
    }
}
