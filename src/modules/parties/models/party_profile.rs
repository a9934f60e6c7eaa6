use serde::{Deserialize, Serialize};

use crate::modules::taxes::models::TaxTreatment;

/// A customer or supplier as known to the counterparty directory
///
/// The engine only ever consumes `default_treatment`; the TRN travels with
/// the finalized document for the storage layer and printed output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyProfile {
    /// Directory identifier
    pub id: String,

    /// Legal or trading name
    pub name: String,

    /// Tax Registration Number, when the party is VAT-registered
    pub trn: Option<String>,

    /// Treatment new document lines default to for this party
    pub default_treatment: Option<TaxTreatment>,
}

impl PartyProfile {
    pub fn is_vat_registered(&self) -> bool {
        self.trn.is_some()
    }
}
