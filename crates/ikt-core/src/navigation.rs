//! Hand-off between the "select image" and "edit image" views.
//!
//! The chosen image URL travels as an escaped `imageUrl` query parameter of
//! the edit route and comes back as the session's base URL.

use url::form_urlencoded;

/// Route of the edit view.
pub const EDIT_PATH: &str = "/edit";

/// Query parameter carrying the image URL to the edit view.
pub const IMAGE_URL_PARAM: &str = "imageUrl";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("please enter a valid image URL")]
    EmptyUrl,
}

/// Validate a URL typed by the user: surrounding whitespace is dropped and
/// blank input is rejected. Nothing else is checked.
pub fn accept_url_input(input: &str) -> Result<String, NavigationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NavigationError::EmptyUrl);
    }
    Ok(trimmed.to_string())
}

/// Link to the edit view for `image_url`.
pub fn edit_link(image_url: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(IMAGE_URL_PARAM, image_url)
        .finish();
    format!("{EDIT_PATH}?{query}")
}

/// Read the image URL back out of the edit view's query string (with or
/// without a leading `?`). A missing parameter yields an empty string.
pub fn image_url_from_query(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == IMAGE_URL_PARAM)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
