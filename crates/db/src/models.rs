//! Row structs that map 1-to-1 onto the `photos` table.
//!
//! These are *persistence* models — they carry no behaviour.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// photos
// ---------------------------------------------------------------------------

/// A persisted photo row.
///
/// Queries alias `photoid AS id` and `collageid AS collage_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PhotoRow {
    pub id: i64,
    /// Collage (group) the photo belongs to.  Not checked against anything.
    pub collage_id: i64,
    pub name: String,
    /// URL or storage path of the image.
    pub link: String,
    pub description: String,
}

/// A photo that has not been stored yet; the database assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPhoto {
    pub collage_id: i64,
    pub name: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
}

impl NewPhoto {
    /// Attach a storage-assigned id.
    pub fn with_id(self, id: i64) -> PhotoRow {
        PhotoRow {
            id,
            collage_id: self.collage_id,
            name: self.name,
            link: self.link,
            description: self.description,
        }
    }
}
