//! Show listing and the show cards embedded in detail pages

use super::{escape, escape_opt};
use crate::datetime::{format_datetime, DateFormat};
use crate::db::ShowDetail;

/// Which side of a show a detail page displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    Artist,
    Venue,
}

/// Cards for a venue's or an artist's shows, linking to the other side
pub fn show_cards(shows: &[ShowDetail], counterpart: Counterpart) -> String {
    if shows.is_empty() {
        return "<p>None.</p>".to_string();
    }

    let cards: Vec<String> = shows
        .iter()
        .map(|show| {
            let (path, id, name, image) = match counterpart {
                Counterpart::Artist => (
                    "artists",
                    show.artist_id,
                    &show.artist_name,
                    show.artist_image_link.as_deref(),
                ),
                Counterpart::Venue => (
                    "venues",
                    show.venue_id,
                    &show.venue_name,
                    show.venue_image_link.as_deref(),
                ),
            };
            format!(
                r#"<li class="show"><img src="{image}" alt="" width="60"> <a href="/{path}/{id}">{name}</a> <span class="time">{time}</span></li>"#,
                image = escape_opt(image),
                path = path,
                id = id,
                name = escape(name),
                time = escape(&format_datetime(&show.start_time, DateFormat::Full)),
            )
        })
        .collect();

    format!("<ul class=\"shows\">\n{}\n</ul>", cards.join("\n"))
}

/// GET /shows content
pub fn list(shows: &[ShowDetail]) -> String {
    if shows.is_empty() {
        return r#"<h1>Shows</h1>
<p>No shows listed yet. <a href="/shows/create">Post a show</a>.</p>"#
            .to_string();
    }

    let rows: Vec<String> = shows
        .iter()
        .map(|show| {
            format!(
                r#"<li class="show"><img src="{image}" alt="" width="60"> <a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a> <span class="time">{time}</span></li>"#,
                image = escape_opt(show.artist_image_link.as_deref()),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                time = escape(&format_datetime(&show.start_time, DateFormat::Full)),
            )
        })
        .collect();

    format!("<h1>Shows</h1>\n<ul class=\"shows\">\n{}\n</ul>", rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn show() -> ShowDetail {
        ShowDetail {
            id: 1,
            venue_id: 3,
            venue_name: "Park Square Live Music & Coffee".to_string(),
            venue_image_link: None,
            artist_id: 5,
            artist_name: "Matt Quevedo".to_string(),
            artist_image_link: Some("https://example.com/matt.jpg".to_string()),
            start_time: NaiveDate::from_ymd_opt(2035, 5, 21)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_list_links_both_sides() {
        let html = list(&[show()]);
        assert!(html.contains(r#"<a href="/artists/5">Matt Quevedo</a>"#));
        assert!(html.contains(r#"<a href="/venues/3">Park Square Live Music &amp; Coffee</a>"#));
        assert!(html.contains("Monday May, 21, 2035 at 9:30PM"));
    }

    #[test]
    fn test_cards_link_counterpart() {
        let html = show_cards(&[show()], Counterpart::Venue);
        assert!(html.contains(r#"href="/venues/3""#));
        assert!(!html.contains("/artists/5"));
        assert_eq!(show_cards(&[], Counterpart::Artist), "<p>None.</p>");
    }
}
