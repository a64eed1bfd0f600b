//! HTML form decoding
//!
//! Forms arrive as `application/x-www-form-urlencoded` pairs. Multi-selects
//! repeat the same key (`genres=Jazz&genres=Folk`), so handlers extract
//! `Form<Vec<(String, String)>>` and read it through [`FormFields`].

use thiserror::Error;

use crate::datetime::parse_start_time;
use crate::db::{ArtistInput, NewShow, VenueInput};

/// Validation failure for a submitted form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field {0}")]
    Missing(&'static str),

    #[error("invalid {0}: {1}")]
    Invalid(&'static str, String),
}

/// Decoded form body
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value of `name`, trimmed; `None` when absent or blank
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .find(|value| !value.is_empty())
    }

    /// Every non-blank value of a repeated field, in submission order
    pub fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Checkbox state: checked unless absent or an explicit false value
    pub fn flag(&self, name: &str) -> bool {
        match self.text(name) {
            Some(value) => !matches!(
                value.to_ascii_lowercase().as_str(),
                "false" | "0" | "off" | "n" | "no"
            ),
            None => false,
        }
    }

    fn required(&self, name: &'static str) -> Result<String, FormError> {
        self.text(name)
            .map(str::to_string)
            .ok_or(FormError::Missing(name))
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    fn id(&self, name: &'static str) -> Result<i64, FormError> {
        let raw = self.required(name)?;
        raw.parse()
            .map_err(|_| FormError::Invalid(name, raw.clone()))
    }

    fn genres(&self) -> Result<Vec<String>, FormError> {
        let genres = self.all("genres");
        if genres.is_empty() {
            Err(FormError::Missing("genres"))
        } else {
            Ok(genres)
        }
    }
}

/// Build a venue from the new/edit venue form
pub fn venue_input(form: &FormFields) -> Result<VenueInput, FormError> {
    Ok(VenueInput {
        name: form.required("name")?,
        genres: form.genres()?,
        city: form.required("city")?,
        state: form.required("state")?,
        address: form.required("address")?,
        phone: form.optional("phone"),
        image_link: form.optional("image_link"),
        website: form.optional("website"),
        facebook_link: form.optional("facebook_link"),
        seeking_talent: form.flag("seeking_talent"),
        seeking_description: form.optional("seeking_description"),
    })
}

/// Build an artist from the new/edit artist form
pub fn artist_input(form: &FormFields) -> Result<ArtistInput, FormError> {
    Ok(ArtistInput {
        name: form.required("name")?,
        genres: form.genres()?,
        city: form.required("city")?,
        state: form.required("state")?,
        phone: form.optional("phone"),
        image_link: form.optional("image_link"),
        website: form.optional("website"),
        facebook_link: form.optional("facebook_link"),
        seeking_venue: form.flag("seeking_venue"),
        seeking_description: form.optional("seeking_description"),
    })
}

/// Build a show from the new show form
pub fn new_show(form: &FormFields) -> Result<NewShow, FormError> {
    let start_time = parse_start_time(form.text("start_time").unwrap_or_default())
        .map_err(|e| FormError::Invalid("start_time", e))?;

    Ok(NewShow {
        artist_id: form.id("artist_id")?,
        venue_id: form.id("venue_id")?,
        start_time,
    })
}
