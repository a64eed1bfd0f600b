//! Venue pages: grouped listing and detail

use super::shows::{show_cards, Counterpart};
use super::{escape, escape_opt, genre_tags, listing_item, search_box};
use crate::db::{Area, Listing, ShowDetail, Venue};

/// GET /venues content
pub fn list(areas: &[Area]) -> String {
    let sections: Vec<String> = areas
        .iter()
        .map(|area| {
            let items: Vec<String> = area
                .venues
                .iter()
                .map(|v| {
                    listing_item(
                        "venues",
                        &Listing {
                            id: v.id,
                            name: v.name.clone(),
                            num_upcoming_shows: v.num_upcoming_shows,
                        },
                    )
                })
                .collect();
            format!(
                "<h3>{}, {}</h3>\n<ul class=\"items\">\n{}\n</ul>",
                escape(&area.city),
                escape(&area.state),
                items.join("\n")
            )
        })
        .collect();

    format!(
        "<h1>Venues</h1>\n{}\n<p><a href=\"/venues/create\">List a new venue</a></p>\n{}",
        search_box("venues", ""),
        sections.join("\n")
    )
}

/// GET /venues/:venue_id content
pub fn detail(venue: &Venue, past: &[ShowDetail], upcoming: &[ShowDetail]) -> String {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><p><strong>Currently seeking talent</strong></p><p>{}</p></div>"#,
            escape_opt(venue.seeking_description.as_deref())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{address}<br>{city}, {state}</p>
<p>Phone: {phone}</p>
<p>Website: <a href="{website}">{website}</a></p>
<p>Facebook: <a href="{facebook}">{facebook}</a></p>
{seeking}
<img src="{image}" alt="Venue image" width="320">
<h2>{upcoming_count} Upcoming Shows</h2>
{upcoming}
<h2>{past_count} Past Shows</h2>
{past}
<p><a href="/venues/{id}/edit">Edit venue</a></p>
<form method="post" action="/venues/{id}/delete">
    <button type="submit">Delete venue</button>
</form>"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape_opt(venue.phone.as_deref()),
        website = escape_opt(venue.website.as_deref()),
        facebook = escape_opt(venue.facebook_link.as_deref()),
        seeking = seeking,
        image = escape_opt(venue.image_link.as_deref()),
        upcoming_count = upcoming.len(),
        upcoming = show_cards(upcoming, Counterpart::Artist),
        past_count = past.len(),
        past = show_cards(past, Counterpart::Artist),
    )
}
