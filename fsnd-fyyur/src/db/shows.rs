//! Show queries
//!
//! Every listing joins both sides so a show always carries the venue and
//! artist names it is displayed with.

use chrono::NaiveDateTime;
use fsnd_common::Result;
use sqlx::{Row, SqliteConnection, SqlitePool};

/// Show joined with its venue and artist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDetail {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

impl ShowDetail {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Self {
        Self {
            id: row.get("id"),
            venue_id: row.get("venue_id"),
            venue_name: row.get("venue_name"),
            venue_image_link: row.get("venue_image_link"),
            artist_id: row.get("artist_id"),
            artist_name: row.get("artist_name"),
            artist_image_link: row.get("artist_image_link"),
            start_time: row.get("start_time"),
        }
    }
}

/// Validated input for a new show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

const SELECT_JOINED: &str = r#"
    SELECT s.id, s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           s.start_time
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

/// Every show ordered by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowDetail>> {
    let rows = sqlx::query(&format!("{} ORDER BY s.start_time, s.id", SELECT_JOINED))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(ShowDetail::from_row).collect())
}

/// Shows at one venue ordered by start time
pub async fn shows_for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowDetail>> {
    let rows = sqlx::query(&format!(
        "{} WHERE s.venue_id = ? ORDER BY s.start_time, s.id",
        SELECT_JOINED
    ))
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(ShowDetail::from_row).collect())
}

/// Shows by one artist ordered by start time
pub async fn shows_for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowDetail>> {
    let rows = sqlx::query(&format!(
        "{} WHERE s.artist_id = ? ORDER BY s.start_time, s.id",
        SELECT_JOINED
    ))
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(ShowDetail::from_row).collect())
}

/// Insert a show, returning its id
pub async fn insert_show(conn: &mut SqliteConnection, show: &NewShow) -> Result<i64> {
    let result = sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(show.artist_id)
        .bind(show.venue_id)
        .bind(show.start_time)
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Split shows into (past, upcoming); upcoming means strictly after `now`
pub fn partition_by_time(shows: Vec<ShowDetail>, now: NaiveDateTime) -> (Vec<ShowDetail>, Vec<ShowDetail>) {
    let (upcoming, past): (Vec<_>, Vec<_>) = shows.into_iter().partition(|s| s.start_time > now);
    (past, upcoming)
}
