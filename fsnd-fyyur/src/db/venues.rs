//! Venue queries and mutations

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use fsnd_common::db::SearchTerm;
use fsnd_common::Result;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::Listing;
use crate::genres::{join_genres, split_genres};

/// Venue record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Self {
        let genres: String = row.get("genres");
        Self {
            id: row.get("id"),
            name: row.get("name"),
            genres: split_genres(&genres),
            city: row.get("city"),
            state: row.get("state"),
            address: row.get("address"),
            phone: row.get("phone"),
            image_link: row.get("image_link"),
            website: row.get("website"),
            facebook_link: row.get("facebook_link"),
            seeking_talent: row.get("seeking_talent"),
            seeking_description: row.get("seeking_description"),
        }
    }
}

/// Validated venue fields for insert or update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueInput {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Pre-fill for the edit form
impl From<&Venue> for VenueInput {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            genres: venue.genres.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            website: venue.website.clone(),
            facebook_link: venue.facebook_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// Row of the venue listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueListing {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one city and state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListing>,
}

/// Group venues by (city, state)
///
/// Areas are ordered by state then city; venues within an area by name.
pub fn group_by_area(venues: Vec<VenueListing>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<VenueListing>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.state.clone(), venue.city.clone()))
            .or_default()
            .push(venue);
    }

    areas
        .into_iter()
        .map(|((state, city), mut venues)| {
            venues.sort_by(|a, b| a.name.cmp(&b.name));
            Area { city, state, venues }
        })
        .collect()
}

/// Every venue with its count of shows starting after `now`
///
/// Ordered by state, city, name.
pub async fn list_venues(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<VenueListing>> {
    let rows = sqlx::query(
        r#"
        SELECT v.id, v.name, v.city, v.state,
               (SELECT COUNT(*) FROM shows s
                WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
        FROM venues v
        ORDER BY v.state, v.city, v.name
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| VenueListing {
            id: row.get("id"),
            name: row.get("name"),
            city: row.get("city"),
            state: row.get("state"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        })
        .collect())
}

/// Venues whose name contains `term` (case-insensitive), ordered by name
pub async fn search_venues(pool: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<Vec<Listing>> {
    let term = SearchTerm::new(term);
    let rows = sqlx::query(
        r#"
        SELECT v.id, v.name,
               (SELECT COUNT(*) FROM shows s
                WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
        FROM venues v
        ORDER BY v.name
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| Listing {
            id: row.get("id"),
            name: row.get("name"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        })
        .filter(|venue| term.matches(&venue.name))
        .collect())
}

/// id + name of every venue ordered by name (show form choices)
pub async fn venue_choices(pool: &SqlitePool) -> Result<Vec<(i64, String)>> {
    let rows = sqlx::query("SELECT id, name FROM venues ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(|row| (row.get("id"), row.get("name"))).collect())
}

/// Load venue by id
pub async fn load_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(Venue::from_row))
}

/// Insert a venue, returning its id
pub async fn insert_venue(conn: &mut SqliteConnection, venue: &VenueInput) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, genres, city, state, address, phone, image_link, website,
            facebook_link, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&venue.name)
    .bind(join_genres(&venue.genres))
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every field of venue `id`, returning whether it existed
pub async fn update_venue(conn: &mut SqliteConnection, id: i64, venue: &VenueInput) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, genres = ?, city = ?, state = ?, address = ?, phone = ?,
            image_link = ?, website = ?, facebook_link = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(join_genres(&venue.genres))
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a venue and its shows, returning whether a row was removed
pub async fn delete_venue(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, name: &str, city: &str, state: &str) -> VenueListing {
        VenueListing {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            num_upcoming_shows: 0,
        }
    }

    #[test]
    fn test_group_by_area() {
        let areas = group_by_area(vec![
            listing(1, "The Musical Hop", "San Francisco", "CA"),
            listing(2, "The Dueling Pianos Bar", "New York", "NY"),
            listing(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            listing(4, "Portland Hall", "Portland", "ME"),
            listing(5, "Portland Arena", "Portland", "OR"),
        ]);

        let keys: Vec<(&str, &str)> = areas
            .iter()
            .map(|a| (a.city.as_str(), a.state.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("San Francisco", "CA"),
                ("Portland", "ME"),
                ("New York", "NY"),
                ("Portland", "OR"),
            ]
        );

        let names: Vec<&str> = areas[0].venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);
    }

    #[test]
    fn test_group_by_area_empty() {
        assert!(group_by_area(Vec::new()).is_empty());
    }
}
