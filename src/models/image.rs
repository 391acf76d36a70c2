use serde::{Deserialize, Serialize};

/// Answer from the upstream image upload; the id is later referenced by
/// videos and thumbnails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    pub id: String,
}
