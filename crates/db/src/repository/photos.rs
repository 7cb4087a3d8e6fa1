//! Photo CRUD operations.
//!
//! There is no update: a photo is inserted once and later deleted.

use sqlx::PgPool;
use tracing::{debug, info, instrument};

use crate::{
    DbError,
    models::{NewPhoto, PhotoRow},
};

/// Insert a new photo and return the id the database generated for it.
#[instrument(skip(pool, photo), fields(collage_id = photo.collage_id))]
pub async fn insert_photo(pool: &PgPool, photo: &NewPhoto) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO photos (collageid, name, link, description)
        VALUES ($1, $2, $3, $4)
        RETURNING photoid
        "#,
    )
    .bind(photo.collage_id)
    .bind(&photo.name)
    .bind(&photo.link)
    .bind(&photo.description)
    .fetch_one(pool)
    .await?;

    info!("inserted photo {}", id);
    Ok(id)
}

/// Fetch a single photo by its primary key.
///
/// Returns `None` when no row matches.
#[instrument(skip(pool))]
pub async fn get_photo(pool: &PgPool, id: i64) -> Result<Option<PhotoRow>, DbError> {
    let row = sqlx::query_as::<_, PhotoRow>(
        r#"
        SELECT photoid AS id, collageid AS collage_id, name, link, description
        FROM photos
        WHERE photoid = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if row.is_none() {
        debug!("no photo with id {}", id);
    }

    Ok(row)
}

/// Return every photo.  Order is whatever the database yields.
#[instrument(skip(pool))]
pub async fn list_photos(pool: &PgPool) -> Result<Vec<PhotoRow>, DbError> {
    let rows = sqlx::query_as::<_, PhotoRow>(
        r#"SELECT photoid AS id, collageid AS collage_id, name, link, description FROM photos"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return every photo in the given collage.  Order is not guaranteed.
#[instrument(skip(pool))]
pub async fn list_photos_by_collage(
    pool: &PgPool,
    collage_id: i64,
) -> Result<Vec<PhotoRow>, DbError> {
    let rows = sqlx::query_as::<_, PhotoRow>(
        r#"
        SELECT photoid AS id, collageid AS collage_id, name, link, description
        FROM photos
        WHERE collageid = $1
        "#,
    )
    .bind(collage_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Delete a photo by its primary key.
///
/// Deleting an id that does not exist is not an error; the returned flag says
/// whether a row was actually removed.
#[instrument(skip(pool))]
pub async fn delete_photo(pool: &PgPool, id: i64) -> Result<bool, DbError> {
    let result = sqlx::query("DELETE FROM photos WHERE photoid = $1")
        .bind(id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        info!("deleted photo {}", id);
    } else {
        debug!("no photo with id {} to delete", id);
    }

    Ok(deleted)
}
