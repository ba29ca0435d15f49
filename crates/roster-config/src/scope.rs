//! Default B2B scope.

use serde::{Deserialize, Serialize};

/// Contract and organization applied when a command is given no explicit scope.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScopeConfig {
    /// Restrict run selection to runs under this contract.
    #[serde(default)]
    pub contract_id: Option<u64>,

    /// Organization the contract belongs to. Informational only.
    #[serde(default)]
    pub organization_id: Option<u64>,
}

impl ScopeConfig {
    pub const fn is_scoped(&self) -> bool {
        self.contract_id.is_some()
    }
}
