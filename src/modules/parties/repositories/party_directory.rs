use async_trait::async_trait;

use crate::core::Result;
use crate::modules::parties::models::PartyProfile;

/// Customer/supplier directory collaborator
///
/// Supplies the tax-treatment default and TRN per counterparty. The totals
/// engine never performs the lookup itself; the document service resolves
/// the party once when a document is opened.
#[async_trait]
pub trait PartyDirectory: Send + Sync {
    /// Look up a counterparty by directory id
    async fn find_party(&self, party_id: &str) -> Result<Option<PartyProfile>>;
}
