//! Client-side validation of social media URLs and drafts.
//!
//! These checks never reach the network: a failing field blocks submission
//! entirely and is reported back as a field-to-message mapping.

use regex::Regex;

use speakerhub_core::error::{AppError, ErrorKind};
use speakerhub_core::result::AppResult;
use speakerhub_entity::{SocialLinks, SocialPlatform};

/// Per-platform URL pattern checker.
///
/// Patterns are compiled once at construction. Handles accept Latin-1
/// supplement and Latin extended-A letters so accented names validate.
#[derive(Debug)]
pub struct SocialValidator {
    rules: Vec<(SocialPlatform, Regex, &'static str)>,
}

impl SocialValidator {
    /// Compile the platform patterns.
    pub fn new() -> AppResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Invalid social URL pattern", e)
            })
        };

        let rules = vec![
            (
                SocialPlatform::Linkedin,
                compile(
                    r"^https?://(www\.|[a-z]{2}\.)?linkedin\.com/(in|company)/[A-Za-z0-9\u{00C0}-\u{017F}_%-]+/?$",
                )?,
                "Please enter a valid LinkedIn profile URL (e.g., https://linkedin.com/in/username)",
            ),
            (
                SocialPlatform::Facebook,
                compile(
                    r"^https?://(www\.)?facebook\.com/[A-Za-z0-9\u{00C0}-\u{017F}._%-]+/?$",
                )?,
                "Please enter a valid Facebook profile URL (e.g., https://facebook.com/username)",
            ),
            (
                SocialPlatform::Instagram,
                compile(
                    r"^https?://(www\.)?instagram\.com/[A-Za-z0-9\u{00C0}-\u{017F}._%-]+/?$",
                )?,
                "Please enter a valid Instagram profile URL (e.g., https://instagram.com/username)",
            ),
            (
                SocialPlatform::Youtube,
                compile(
                    r"^https?://(www\.)?(youtube\.com/(@|channel/|c/)[A-Za-z0-9\u{00C0}-\u{017F}_%-]+|youtu\.be/[A-Za-z0-9\u{00C0}-\u{017F}_%-]+)/?$",
                )?,
                "Please enter a valid YouTube URL (e.g., https://youtube.com/@username)",
            ),
        ];

        Ok(Self { rules })
    }

    /// Check one URL against its platform pattern.
    ///
    /// Empty input always passes. Returns the user-facing message for
    /// invalid input.
    pub fn check(&self, platform: SocialPlatform, url: &str) -> Option<&'static str> {
        if url.is_empty() {
            return None;
        }
        self.rules
            .iter()
            .find(|(p, _, _)| *p == platform)
            .and_then(|(_, pattern, message)| {
                if pattern.is_match(url) {
                    None
                } else {
                    Some(*message)
                }
            })
    }

    /// Check every populated link, returning `(field, message)` pairs.
    pub fn check_links(&self, links: &SocialLinks) -> Vec<(&'static str, &'static str)> {
        links
            .iter()
            .filter_map(|(platform, url)| {
                url.and_then(|url| self.check(platform, url))
                    .map(|message| (platform.as_str(), message))
            })
            .collect()
    }
}

/// Flatten validator errors from a draft into a single validation fault.
pub fn draft_error(errors: &validator::ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"))
            })
        })
        .collect();
    messages.sort();
    AppError::validation(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> SocialValidator {
        SocialValidator::new().expect("patterns compile")
    }

    #[test]
    fn test_empty_input_always_passes() {
        let v = validator();
        for platform in SocialPlatform::ALL {
            assert!(v.check(platform, "").is_none());
        }
    }

    #[test]
    fn test_linkedin_accepts_profiles_and_companies() {
        let v = validator();
        for url in [
            "https://linkedin.com/in/janedoe",
            "http://www.linkedin.com/in/jane-doe",
            "https://pt.linkedin.com/company/acme",
            "https://linkedin.com/in/janedoe/",
        ] {
            assert!(v.check(SocialPlatform::Linkedin, url).is_none(), "{url}");
        }
    }

    #[test]
    fn test_linkedin_rejects_other_paths() {
        let v = validator();
        for url in [
            "https://linkedin.com/janedoe",
            "https://linkedin.com/in/",
            "https://example.com/in/janedoe",
            "linkedin.com/in/janedoe",
        ] {
            assert!(v.check(SocialPlatform::Linkedin, url).is_some(), "{url}");
        }
    }

    #[test]
    fn test_facebook_and_instagram_accept_handles() {
        let v = validator();
        assert!(
            v.check(SocialPlatform::Facebook, "https://facebook.com/jane.doe")
                .is_none()
        );
        assert!(
            v.check(SocialPlatform::Instagram, "https://www.instagram.com/jane_doe")
                .is_none()
        );
        assert!(
            v.check(SocialPlatform::Facebook, "https://facebook.com/jane/doe")
                .is_some()
        );
    }

    #[test]
    fn test_youtube_accepts_channel_forms_and_short_links() {
        let v = validator();
        for url in [
            "https://youtube.com/@janedoe",
            "https://www.youtube.com/channel/UC12345",
            "https://youtube.com/c/JaneDoe",
            "https://youtu.be/dQw4w9WgXcQ",
        ] {
            assert!(v.check(SocialPlatform::Youtube, url).is_none(), "{url}");
        }
        assert!(
            v.check(SocialPlatform::Youtube, "https://youtube.com/watch?v=dQw4w9WgXcQ")
                .is_some()
        );
    }

    #[test]
    fn test_accented_handles_validate() {
        let v = validator();
        assert!(
            v.check(SocialPlatform::Instagram, "https://instagram.com/joão_silva")
                .is_none()
        );
    }

    #[test]
    fn test_check_links_reports_fields() {
        let v = validator();
        let mut links = SocialLinks::default();
        links.set(SocialPlatform::Linkedin, "not-a-url");
        links.set(SocialPlatform::Youtube, "https://youtu.be/abc");
        let failures = v.check_links(&links);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "linkedin");
    }
}
