//! Generation errors.
//!
//! The mocked backend cannot fail; these kinds exist for real inference
//! backends behind the same trait.

use reelmark_core::ContentId;
use thiserror::Error;

/// Failures of a content generation backend.
#[derive(Error, Debug)]
pub enum GenError {
    /// The backend rejected or failed the generation request.
    #[error("generation backend error: {0}")]
    Backend(String),

    /// A status query named a content id the backend does not know.
    #[error("unknown content id: {0}")]
    UnknownContent(ContentId),
}
