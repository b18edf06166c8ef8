use url::Url;

use crate::domain::AppError;

/// Download a source archive fully into memory.
pub trait ArchiveSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError>;
}
