use crate::error::{Error, Result};
use std::path::Path;

// Determine the content type of an image file based on its extension
pub fn determine_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Validate a base URL for the API
pub fn validate_base_url(url: &str) -> Result<()> {
    let parsed_url = match url::Url::parse(url) {
        Ok(url) => url,
        Err(_) => return Err(Error::InvalidConfig(format!("Invalid base URL: {url}"))),
    };

    match parsed_url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(Error::InvalidConfig(
                "Base URL must use http or https scheme".to_string(),
            ))
        }
    }

    match parsed_url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(Error::InvalidConfig(
            "Base URL must have a valid host".to_string(),
        )),
    }
}

/// Bytes expressed in MiB, as shown in size-limit messages
pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

/// Milliseconds expressed in seconds, as shown in timeout messages
pub fn millis_to_seconds(millis: u64) -> f64 {
    millis as f64 / 1000.0
}

/// Truncate a response body for inclusion in an error
pub(crate) fn truncate_body(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_content_type() {
        assert_eq!(determine_content_type(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(determine_content_type(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(determine_content_type(Path::new("shot.png")), "image/png");
        assert_eq!(determine_content_type(Path::new("loop.gif")), "image/gif");
        assert_eq!(determine_content_type(Path::new("pic.webp")), "image/webp");
    }

    #[test]
    fn test_determine_content_type_uppercase_extension() {
        assert_eq!(determine_content_type(Path::new("IMAGE.JPG")), "image/jpeg");
        assert_eq!(determine_content_type(Path::new("photo.WebP")), "image/webp");
    }

    #[test]
    fn test_determine_content_type_unknown() {
        assert_eq!(
            determine_content_type(Path::new("clip.mp4")),
            "application/octet-stream"
        );
        assert_eq!(
            determine_content_type(Path::new("no_extension")),
            "application/octet-stream"
        );
        assert_eq!(
            determine_content_type(Path::new("archive.tar.gz")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://localhost:8000").is_ok());
        assert!(validate_base_url("https://api.example.com/prefix").is_ok());
        assert!(validate_base_url("http://127.0.0.1:9000").is_ok());

        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("localhost:8000/api").is_err());
        assert!(validate_base_url("ftp://example.com").is_err());
        assert!(validate_base_url("file:///tmp/socket").is_err());
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(bytes_to_mib(10_485_760), 10.0);
        assert_eq!(bytes_to_mib(524_288), 0.5);
        assert_eq!(millis_to_seconds(30_000), 30.0);
        assert_eq!(millis_to_seconds(250), 0.25);
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short", 10), "short");
        assert_eq!(truncate_body("abcdef", 3), "abc...");
    }
}
