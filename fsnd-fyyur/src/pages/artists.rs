//! Artist pages: listing and detail

use super::shows::{show_cards, Counterpart};
use super::{escape, escape_opt, genre_tags, listing_item, search_box};
use crate::db::{Artist, Listing, ShowDetail};

/// GET /artists content
pub fn list(artists: &[Listing]) -> String {
    let items: Vec<String> = artists.iter().map(|a| listing_item("artists", a)).collect();

    format!(
        "<h1>Artists</h1>\n{}\n<p><a href=\"/artists/create\">List a new artist</a></p>\n<ul class=\"items\">\n{}\n</ul>",
        search_box("artists", ""),
        items.join("\n")
    )
}

/// GET /artists/:artist_id content
pub fn detail(artist: &Artist, past: &[ShowDetail], upcoming: &[ShowDetail]) -> String {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><p><strong>Currently seeking performance venues</strong></p><p>{}</p></div>"#,
            escape_opt(artist.seeking_description.as_deref())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{city}, {state}</p>
<p>Phone: {phone}</p>
<p>Website: <a href="{website}">{website}</a></p>
<p>Facebook: <a href="{facebook}">{facebook}</a></p>
{seeking}
<img src="{image}" alt="Artist image" width="320">
<h2>{upcoming_count} Upcoming Shows</h2>
{upcoming}
<h2>{past_count} Past Shows</h2>
{past}
<p><a href="/artists/{id}/edit">Edit artist</a></p>
<form method="post" action="/artists/{id}/delete">
    <button type="submit">Delete artist</button>
</form>"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape_opt(artist.phone.as_deref()),
        website = escape_opt(artist.website.as_deref()),
        facebook = escape_opt(artist.facebook_link.as_deref()),
        seeking = seeking,
        image = escape_opt(artist.image_link.as_deref()),
        upcoming_count = upcoming.len(),
        upcoming = show_cards(upcoming, Counterpart::Venue),
        past_count = past.len(),
        past = show_cards(past, Counterpart::Venue),
    )
}
