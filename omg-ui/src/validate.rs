//! Client-side form validation.
//!
//! Field-scoped rules that block submission; the server still revalidates.

fn is_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower
        .strip_prefix("http://")
        .or_else(|| lower.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty())
}

/// Field errors for the playlist form. `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaylistFormErrors {
    pub name: Option<String>,
    pub url: Option<String>,
    pub epg_url: Option<String>,
}

impl PlaylistFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.epg_url.is_none()
    }
}

/// Validate the playlist form. A standard playlist needs a source URL;
/// a custom one is assembled by hand and must not carry one.
pub fn validate_playlist_form(
    name: &str,
    url: &str,
    epg_url: &str,
    is_custom: bool,
) -> PlaylistFormErrors {
    let mut errors = PlaylistFormErrors::default();

    let name = name.trim();
    if name.is_empty() {
        errors.name = Some("Name is required".to_string());
    } else if name.chars().count() < 3 {
        errors.name = Some("Name must be at least 3 characters".to_string());
    }

    let url = url.trim();
    if !is_custom && url.is_empty() {
        errors.url = Some("Source URL is required".to_string());
    } else if !url.is_empty() && !is_http_url(url) {
        errors.url = Some("Enter a valid http(s) URL".to_string());
    }

    let epg_url = epg_url.trim();
    if !epg_url.is_empty() && !is_http_url(epg_url) {
        errors.epg_url = Some("Enter a valid http(s) URL".to_string());
    }

    errors
}

/// Field errors for the channel form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelFormErrors {
    pub name: Option<String>,
    pub url: Option<String>,
    pub logo_url: Option<String>,
}

impl ChannelFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.logo_url.is_none()
    }
}

pub fn validate_channel_form(name: &str, url: &str, logo_url: &str) -> ChannelFormErrors {
    let mut errors = ChannelFormErrors::default();

    if name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    let url = url.trim();
    if url.is_empty() {
        errors.url = Some("Stream URL is required".to_string());
    } else if !is_http_url(url) {
        errors.url = Some("Enter a valid http(s) URL".to_string());
    }

    let logo_url = logo_url.trim();
    if !logo_url.is_empty() && !is_http_url(logo_url) {
        errors.logo_url = Some("Enter a valid http(s) URL".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_playlist_form() {
        let errors =
            validate_playlist_form("My playlist", "http://example.com/list.m3u", "", false);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_playlist_name_too_short() {
        let errors = validate_playlist_form("ab", "http://example.com/list.m3u", "", false);
        assert!(errors.name.is_some());
        assert!(errors.url.is_none());
    }

    #[test]
    fn test_standard_playlist_requires_url() {
        let errors = validate_playlist_form("My playlist", "", "", false);
        assert!(errors.url.is_some());
    }

    #[test]
    fn test_custom_playlist_needs_no_url() {
        let errors = validate_playlist_form("Favorites", "", "", true);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let errors = validate_playlist_form("My playlist", "ftp://example.com", "", false);
        assert!(errors.url.is_some());

        let errors = validate_playlist_form("My playlist", "http://x", "file:///etc", false);
        assert!(errors.epg_url.is_some());
    }

    #[test]
    fn test_channel_form_requires_name_and_url() {
        let errors = validate_channel_form(" ", "", "");
        assert!(errors.name.is_some());
        assert!(errors.url.is_some());

        let errors = validate_channel_form("News 24", "https://example.com/s", "");
        assert!(errors.is_empty());
    }
}
