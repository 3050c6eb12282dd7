//! Media
//!
//! Watermarking is delegated to the media CDN: the preview URL is the
//! original delivery URL with a text-overlay transform inserted after the
//! `/upload/` path segment.

/// Path segment after which the CDN accepts inline transforms.
const UPLOAD_SEGMENT: &str = "/upload/";

/// Text overlay applied to gallery previews through the CDN's URL transform
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watermark {
    /// Overlay text.
    pub text: String,

    /// Font family.
    pub font_family: String,

    /// Font size in pixels.
    pub font_size: u32,

    /// Font weight.
    pub font_weight: String,

    /// Text colour as an RGB hex string without a leading `#`.
    pub color: String,

    /// Opacity percentage, 0-100.
    pub opacity: u8,

    /// Overlay anchor within the image.
    pub gravity: String,
}

impl Default for Watermark {
    /// The storefront's gallery watermark.
    fn default() -> Self {
        Self {
            text: "BLAZE.ART".to_string(),
            font_family: "Arial".to_string(),
            font_size: 60,
            font_weight: "bold".to_string(),
            color: "FFFFFF".to_string(),
            opacity: 40,
            gravity: "center".to_string(),
        }
    }
}

impl Watermark {
    /// The transform component inserted into the delivery URL.
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "l_text:{}_{}_{}:{},co_rgb:{},o_{},g_{}",
            self.font_family,
            self.font_size,
            self.font_weight,
            self.text,
            self.color,
            self.opacity,
            self.gravity,
        )
    }

    /// Watermarked delivery URL for `url`.
    ///
    /// The transform is inserted after the first `/upload/` segment; a URL
    /// without that segment is returned unchanged.
    #[must_use]
    pub fn apply(&self, url: &str) -> String {
        let replacement = format!("{UPLOAD_SEGMENT}{}/", self.transform());

        url.replacen(UPLOAD_SEGMENT, &replacement, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transform_matches_the_storefront_overlay() {
        assert_eq!(
            Watermark::default().transform(),
            "l_text:Arial_60_bold:BLAZE.ART,co_rgb:FFFFFF,o_40,g_center"
        );
    }

    #[test]
    fn apply_inserts_the_transform_after_the_upload_segment() {
        let url = "https://res.example.com/demo/image/upload/v1/artworks/dusk.jpg";

        assert_eq!(
            Watermark::default().apply(url),
            "https://res.example.com/demo/image/upload/l_text:Arial_60_bold:BLAZE.ART,co_rgb:FFFFFF,o_40,g_center/v1/artworks/dusk.jpg"
        );
    }

    #[test]
    fn apply_only_rewrites_the_first_upload_segment() {
        let url = "https://res.example.com/upload/v1/upload/dusk.jpg";
        let watermarked = Watermark::default().apply(url);

        assert!(watermarked.ends_with("/v1/upload/dusk.jpg"));
    }

    #[test]
    fn url_without_upload_segment_passes_through() {
        let url = "https://example.com/static/dusk.jpg";

        assert_eq!(Watermark::default().apply(url), url);
    }
}
