//! Landing page

/// GET / content
pub fn home() -> String {
    format!(
        r#"<h1>Fyyur</h1>
<p>Find venues and artists, and book the next show.</p>
{venue_search}
{artist_search}
<ul class="actions">
    <li><a href="/venues/create">List a new venue</a></li>
    <li><a href="/artists/create">List a new artist</a></li>
    <li><a href="/shows/create">Post a show</a></li>
</ul>
<p class="build">v{version}</p>"#,
        venue_search = super::search_box("venues", ""),
        artist_search = super::search_box("artists", ""),
        version = env!("CARGO_PKG_VERSION"),
    )
}
