//! New/edit forms for venues, artists and shows

use super::{escape, escape_opt};
use crate::db::{ArtistInput, VenueInput};

/// Genre choices offered by the multi-select
pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state abbreviations offered by the state select
pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

fn text_input(name: &str, label: &str, value: Option<&str>, required: bool) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}"{required}>"#,
        name = name,
        label = label,
        value = escape_opt(value),
        required = if required { " required" } else { "" },
    )
}

fn textarea(name: &str, label: &str, value: Option<&str>) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<textarea id="{name}" name="{name}">{value}</textarea>"#,
        name = name,
        label = label,
        value = escape_opt(value),
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>"#,
        name = name,
        label = label,
        checked = if checked { " checked" } else { "" },
    )
}

/// `<option>` list; a current value missing from `choices` is kept selectable
fn options<S: AsRef<str>>(choices: &[&str], selected: &[S]) -> String {
    let is_selected = |choice: &str| selected.iter().any(|s| s.as_ref() == choice);
    let mut html: Vec<String> = choices
        .iter()
        .map(|&choice| {
            format!(
                r#"<option value="{v}"{sel}>{v}</option>"#,
                v = escape(choice),
                sel = if is_selected(choice) { " selected" } else { "" },
            )
        })
        .collect();

    for extra in selected
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty() && !choices.contains(s))
    {
        html.push(format!(r#"<option value="{v}" selected>{v}</option>"#, v = escape(extra)));
    }
    html.join("\n")
}

fn state_select(selected: &str) -> String {
    format!(
        r#"<label for="state">State</label>
<select id="state" name="state" required>
{}
</select>"#,
        options(&STATES, &[selected])
    )
}

fn genres_select(selected: &[String]) -> String {
    format!(
        r#"<label for="genres">Genres</label>
<select id="genres" name="genres" multiple required>
{}
</select>"#,
        options(&GENRES, selected)
    )
}

/// Venue form posting to `action`, pre-filled from `venue`
pub fn venue_form(heading: &str, action: &str, venue: &VenueInput) -> String {
    let fields = [
        text_input("name", "Name", Some(&venue.name), true),
        text_input("city", "City", Some(&venue.city), true),
        state_select(&venue.state),
        text_input("address", "Address", Some(&venue.address), true),
        text_input("phone", "Phone", venue.phone.as_deref(), false),
        genres_select(&venue.genres),
        text_input("facebook_link", "Facebook link", venue.facebook_link.as_deref(), false),
        text_input("image_link", "Image link", venue.image_link.as_deref(), false),
        text_input("website", "Website", venue.website.as_deref(), false),
        checkbox("seeking_talent", "Looking for talent", venue.seeking_talent),
        textarea("seeking_description", "Seeking description", venue.seeking_description.as_deref()),
    ];

    format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
{fields}
<p><button type="submit">Save venue</button></p>
</form>"#,
        heading = escape(heading),
        action = escape(action),
        fields = fields.join("\n"),
    )
}

/// Artist form posting to `action`, pre-filled from `artist`
pub fn artist_form(heading: &str, action: &str, artist: &ArtistInput) -> String {
    let fields = [
        text_input("name", "Name", Some(&artist.name), true),
        text_input("city", "City", Some(&artist.city), true),
        state_select(&artist.state),
        text_input("phone", "Phone", artist.phone.as_deref(), false),
        genres_select(&artist.genres),
        text_input("facebook_link", "Facebook link", artist.facebook_link.as_deref(), false),
        text_input("image_link", "Image link", artist.image_link.as_deref(), false),
        text_input("website", "Website", artist.website.as_deref(), false),
        checkbox("seeking_venue", "Looking for venues", artist.seeking_venue),
        textarea("seeking_description", "Seeking description", artist.seeking_description.as_deref()),
    ];

    format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
{fields}
<p><button type="submit">Save artist</button></p>
</form>"#,
        heading = escape(heading),
        action = escape(action),
        fields = fields.join("\n"),
    )
}

fn id_select(name: &str, label: &str, choices: &[(i64, String)]) -> String {
    let options: Vec<String> = choices
        .iter()
        .map(|(id, choice)| format!(r#"<option value="{}">{} (#{})</option>"#, id, escape(choice), id))
        .collect();

    format!(
        r#"<label for="{name}">{label}</label>
<select id="{name}" name="{name}" required>
{options}
</select>"#,
        name = name,
        label = label,
        options = options.join("\n"),
    )
}

/// New show form
pub fn show_form(artists: &[(i64, String)], venues: &[(i64, String)]) -> String {
    format!(
        r#"<h1>List a new show</h1>
<form method="post" action="/shows/create">
{artist}
{venue}
<label for="start_time">Start time</label>
<input type="datetime-local" id="start_time" name="start_time">
<p><button type="submit">Create show</button></p>
</form>"#,
        artist = id_select("artist_id", "Artist", artists),
        venue = id_select("venue_id", "Venue", venues),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_form_prefills_values() {
        let venue = VenueInput {
            name: "The Musical Hop".to_string(),
            genres: vec!["Jazz".to_string(), "Swing".to_string()],
            state: "CA".to_string(),
            seeking_talent: true,
            ..Default::default()
        };
        let html = venue_form("Edit venue", "/venues/1/edit", &venue);

        assert!(html.contains(r#"value="The Musical Hop""#));
        assert!(html.contains(r#"<option value="CA" selected>CA</option>"#));
        assert!(html.contains(r#"<option value="Jazz" selected>Jazz</option>"#));
        // Stored genre outside the fixed choices stays selected
        assert!(html.contains(r#"<option value="Swing" selected>Swing</option>"#));
        assert!(html.contains(r#"name="seeking_talent" value="y" checked"#));
    }

    #[test]
    fn test_empty_state_adds_no_extra_option() {
        let html = artist_form("List a new artist", "/artists/create", &ArtistInput::default());
        assert!(!html.contains(r#"<option value="" selected>"#));
        assert!(html.contains(r#"action="/artists/create""#));
    }
}
