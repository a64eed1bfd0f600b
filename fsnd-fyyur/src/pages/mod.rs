//! Server-rendered HTML pages
//!
//! Each submodule renders the content of one page family as a `String`;
//! [`page`] wraps it in the shared layout and turns it into a response.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::db::Listing;
use crate::flash;

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod shows;
pub mod venues;

/// Escape text for HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape an optional value, rendering `None` as an empty string
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape).unwrap_or_default()
}

/// Search form posting `search_term` to `/<kind>/search`
pub fn search_box(kind: &str, term: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="/{kind}/search">
    <input type="search" name="search_term" value="{term}" placeholder="Find {kind}">
    <button type="submit">Search</button>
</form>"#,
        kind = kind,
        term = escape(term),
    )
}

/// Search results for venues or artists
pub fn search_results(kind: &str, term: &str, results: &[Listing]) -> String {
    let items: Vec<String> = results.iter().map(|r| listing_item(kind, r)).collect();
    let noun = if results.len() == 1 { "result" } else { "results" };

    format!(
        r#"{search}
<h3>Number of search {noun} for "{term}": {count}</h3>
<ul class="items">
{items}
</ul>"#,
        search = search_box(kind, term),
        noun = noun,
        term = escape(term),
        count = results.len(),
        items = items.join("\n"),
    )
}

/// One `<li>` linking to a venue or artist with its upcoming show count
pub fn listing_item(kind: &str, listing: &Listing) -> String {
    format!(
        r#"<li><a href="/{kind}/{id}">{name}</a> <span class="upcoming">{count} upcoming shows</span></li>"#,
        kind = kind,
        id = listing.id,
        name = escape(&listing.name),
        count = listing.num_upcoming_shows,
    )
}

/// Genre tags
pub fn genre_tags(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full HTML document around `content`
pub fn layout(title: &str, flash: Option<&str>, content: &str) -> String {
    let flash_html = flash
        .map(|message| format!(r#"<div class="flash">{}</div>"#, escape(message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            color: #222;
            line-height: 1.5;
        }}
        nav {{
            background-color: #2a2a2a;
            padding: 12px 20px;
        }}
        nav a {{
            color: #e0e0e0;
            margin-right: 16px;
            text-decoration: none;
        }}
        main {{
            padding: 20px;
        }}
        .flash {{
            background-color: #e8f4ff;
            border: 1px solid #4a9eff;
            padding: 10px 14px;
            margin-bottom: 20px;
        }}
        .genre {{
            display: inline-block;
            background-color: #eee;
            border-radius: 10px;
            padding: 2px 8px;
            margin-right: 4px;
        }}
        form label {{
            display: block;
            margin-top: 10px;
        }}
    </style>
</head>
<body>
    <nav>
        <a href="/">Fyyur</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
    </nav>
    <main>
        {flash_html}
        {content}
    </main>
</body>
</html>
"#,
        title = escape(title),
        flash_html = flash_html,
        content = content,
    )
}

/// 200 response with the layout; clears the flash cookie once shown
pub fn page(title: &str, flash: Option<String>, content: &str) -> Response {
    page_with_status(StatusCode::OK, title, flash, content)
}

/// Layout response with an explicit status
pub fn page_with_status(status: StatusCode, title: &str, flash: Option<String>, content: &str) -> Response {
    let html = Html(layout(title, flash.as_deref(), content));
    let mut response = (status, html).into_response();
    if flash.is_some() {
        flash::append(&mut response, flash::removal_cookie().into());
    }
    response
}
