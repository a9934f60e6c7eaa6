use async_trait::async_trait;

use crate::core::Result;
use crate::modules::documents::models::Document;

/// Persistence collaborator for finalized documents
///
/// The engine never calls this itself; [`DocumentService`] hands a
/// finalized document over after the committed totals have been read.
///
/// [`DocumentService`]: crate::modules::documents::services::DocumentService
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a finalized document, returning the stored-record identifier
    async fn save(&self, document: &Document) -> Result<String>;

    /// Fetch a previously stored document by its record identifier
    async fn find_by_id(&self, record_id: &str) -> Result<Option<Document>>;
}
