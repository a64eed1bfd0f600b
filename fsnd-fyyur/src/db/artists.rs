//! Artist queries and mutations

use chrono::NaiveDateTime;
use fsnd_common::db::SearchTerm;
use fsnd_common::Result;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::Listing;
use crate::genres::{join_genres, split_genres};

/// Artist record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Self {
        let genres: String = row.get("genres");
        Self {
            id: row.get("id"),
            name: row.get("name"),
            genres: split_genres(&genres),
            city: row.get("city"),
            state: row.get("state"),
            phone: row.get("phone"),
            image_link: row.get("image_link"),
            website: row.get("website"),
            facebook_link: row.get("facebook_link"),
            seeking_venue: row.get("seeking_venue"),
            seeking_description: row.get("seeking_description"),
        }
    }
}

/// Validated artist fields for insert or update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Pre-fill for the edit form
impl From<&Artist> for ArtistInput {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            genres: artist.genres.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            image_link: artist.image_link.clone(),
            website: artist.website.clone(),
            facebook_link: artist.facebook_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

const LISTING_SELECT: &str = r#"
    SELECT a.id, a.name,
           (SELECT COUNT(*) FROM shows s
            WHERE s.artist_id = a.id AND s.start_time > ?) AS num_upcoming_shows
    FROM artists a
"#;

fn listing_from_row(row: &sqlx::sqlite::SqliteRow) -> Listing {
    Listing {
        id: row.get("id"),
        name: row.get("name"),
        num_upcoming_shows: row.get("num_upcoming_shows"),
    }
}

/// Every artist ordered by name
pub async fn list_artists(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<Listing>> {
    let rows = sqlx::query(&format!("{} ORDER BY a.name", LISTING_SELECT))
        .bind(now)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(listing_from_row).collect())
}

/// Artists whose name contains `term` (case-insensitive), ordered by name
pub async fn search_artists(pool: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<Vec<Listing>> {
    let term = SearchTerm::new(term);
    let mut listings = list_artists(pool, now).await?;
    listings.retain(|artist| term.matches(&artist.name));

    Ok(listings)
}

/// id + name of every artist ordered by name (show form choices)
pub async fn artist_choices(pool: &SqlitePool) -> Result<Vec<(i64, String)>> {
    let rows = sqlx::query("SELECT id, name FROM artists ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(|row| (row.get("id"), row.get("name"))).collect())
}

/// Load artist by id
pub async fn load_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(Artist::from_row))
}

/// Insert an artist, returning its id
pub async fn insert_artist(conn: &mut SqliteConnection, artist: &ArtistInput) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, image_link, website,
            facebook_link, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(join_genres(&artist.genres))
    .bind(&artist.image_link)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every field of artist `id`, returning whether it existed
pub async fn update_artist(conn: &mut SqliteConnection, id: i64, artist: &ArtistInput) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?,
            website = ?, facebook_link = ?, seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(join_genres(&artist.genres))
    .bind(&artist.image_link)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an artist and its shows, returning whether a row was removed
pub async fn delete_artist(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
