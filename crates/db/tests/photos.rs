//! Repository tests against a live Postgres.
//!
//! `#[sqlx::test]` creates a throwaway database per test (from `DATABASE_URL`)
//! and applies `fixtures/photos.sql`.  Run with `cargo test -- --ignored`.

use db::repository::photos;
use db::NewPhoto;
use sqlx::PgPool;

fn new_photo(collage_id: i64, name: &str) -> NewPhoto {
    NewPhoto {
        collage_id,
        name: name.into(),
        link: format!("http://x/{name}.jpg"),
        description: format!("{name} description"),
    }
}

#[sqlx::test(fixtures("photos"))]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn insert_then_get_round_trips_every_field(pool: PgPool) -> anyhow::Result<()> {
    let photo = new_photo(3, "harbour");

    let id = photos::insert_photo(&pool, &photo).await?;
    let fetched = photos::get_photo(&pool, id).await?.expect("photo should exist");

    assert_eq!(fetched, photo.with_id(id));
    Ok(())
}

#[sqlx::test(fixtures("photos"))]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn missing_id_is_none_not_an_error(pool: PgPool) -> anyhow::Result<()> {
    let fetched = photos::get_photo(&pool, 4242).await?;
    assert!(fetched.is_none());
    Ok(())
}

#[sqlx::test(fixtures("photos"))]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn deleting_a_missing_id_succeeds(pool: PgPool) -> anyhow::Result<()> {
    let deleted = photos::delete_photo(&pool, 4242).await?;
    assert!(!deleted);
    Ok(())
}

#[sqlx::test(fixtures("photos"))]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn list_contains_every_inserted_photo(pool: PgPool) -> anyhow::Result<()> {
    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        ids.push(photos::insert_photo(&pool, &new_photo(1, name)).await?);
    }

    let all = photos::list_photos(&pool).await?;
    assert!(all.len() >= ids.len());
    for id in ids {
        assert!(all.iter().any(|p| p.id == id), "photo {id} missing from list");
    }
    Ok(())
}

#[sqlx::test(fixtures("photos"))]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn list_by_collage_only_returns_that_collage(pool: PgPool) -> anyhow::Result<()> {
    let first = photos::insert_photo(&pool, &new_photo(10, "first")).await?;
    let second = photos::insert_photo(&pool, &new_photo(10, "second")).await?;
    photos::insert_photo(&pool, &new_photo(20, "other")).await?;

    let collage = photos::list_photos_by_collage(&pool, 10).await?;

    assert_eq!(collage.len(), 2);
    assert!(collage.iter().all(|p| p.collage_id == 10));
    let mut ids: Vec<i64> = collage.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![first, second]);

    assert!(photos::list_photos_by_collage(&pool, 99).await?.is_empty());
    Ok(())
}

#[sqlx::test(fixtures("photos"))]
#[ignore = "requires a running Postgres (DATABASE_URL)"]
async fn insert_get_delete_get(pool: PgPool) -> anyhow::Result<()> {
    let photo = NewPhoto {
        collage_id: 7,
        name: "sunset".into(),
        link: "http://x/1.jpg".into(),
        description: "beach".into(),
    };

    // Fresh database, so the sequence starts at 1.
    let id = photos::insert_photo(&pool, &photo).await?;
    assert_eq!(id, 1);

    let fetched = photos::get_photo(&pool, 1).await?;
    assert_eq!(fetched, Some(photo.with_id(1)));

    assert!(photos::delete_photo(&pool, 1).await?);
    assert!(photos::get_photo(&pool, 1).await?.is_none());

    // Second delete is a no-op.
    assert!(!photos::delete_photo(&pool, 1).await?);
    Ok(())
}
