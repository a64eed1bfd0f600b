//! 404 and 500 page content

pub fn not_found() -> String {
    r#"<h1>404</h1>
<p>Not Found. The page you were looking for does not exist.</p>
<p><a href="/">Back home</a></p>"#
        .to_string()
}

pub fn server_error() -> String {
    r#"<h1>500</h1>
<p>Something went wrong on our side. Please try again later.</p>
<p><a href="/">Back home</a></p>"#
        .to_string()
}
