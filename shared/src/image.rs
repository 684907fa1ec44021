//! Classification of event image references.

use std::fmt;

/// Hosts that identify a Cloudinary delivery URL.
const CLOUDINARY_HOSTS: [&str; 2] = ["res.cloudinary.com", "cloudinary.com"];

/// Where an event's image lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageSource {
    Cloudinary,
    External,
    Local,
    Missing,
}

impl ImageSource {
    /// Classify an image reference.
    ///
    /// Cloudinary hosts win over the generic `http` check; anything else
    /// non-empty is treated as a path into local storage.
    pub fn classify(image: Option<&str>) -> Self {
        let Some(image) = image.map(str::trim).filter(|i| !i.is_empty()) else {
            return ImageSource::Missing;
        };
        if CLOUDINARY_HOSTS.iter().any(|host| image.contains(host)) {
            ImageSource::Cloudinary
        } else if image.starts_with("http") {
            ImageSource::External
        } else {
            ImageSource::Local
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageSource::Cloudinary => "Cloudinary URL",
            ImageSource::External => "External URL",
            ImageSource::Local => "Local path",
            ImageSource::Missing => "No image",
        }
    }

    /// Marker printed in front of report lines.
    pub fn marker(self) -> &'static str {
        match self {
            ImageSource::Cloudinary => "☁️ ",
            ImageSource::External => "🌐",
            ImageSource::Local => "📁",
            ImageSource::Missing => "❌",
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloudinary_urls() {
        assert_eq!(
            ImageSource::classify(Some("https://res.cloudinary.com/demo/image/upload/v1/events/photo.jpg")),
            ImageSource::Cloudinary
        );
        assert_eq!(
            ImageSource::classify(Some("http://cloudinary.com/x.png")),
            ImageSource::Cloudinary
        );
    }

    #[test]
    fn test_other_http_is_external() {
        assert_eq!(
            ImageSource::classify(Some("https://images.unsplash.com/photo-1.jpg")),
            ImageSource::External
        );
        assert_eq!(ImageSource::classify(Some("http://example.com/a.png")), ImageSource::External);
    }

    #[test]
    fn test_anything_else_is_local() {
        assert_eq!(ImageSource::classify(Some("/uploads/events/photo.jpg")), ImageSource::Local);
        assert_eq!(ImageSource::classify(Some("photo.jpg")), ImageSource::Local);
    }

    #[test]
    fn test_missing() {
        assert_eq!(ImageSource::classify(None), ImageSource::Missing);
        assert_eq!(ImageSource::classify(Some("")), ImageSource::Missing);
        assert_eq!(ImageSource::classify(Some("   ")), ImageSource::Missing);
    }
}
