use mime::Mime;

use crate::domain::errors::ValidationError;

/// The MIME type sent along with an uploaded object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType(String);

impl ContentType {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyContentType);
        }
        Ok(Self(value))
    }

    /// Wrap a type string known to be well formed
    pub(crate) fn known(value: &str) -> Self {
        Self(value.to_string())
    }

    /// `text/plain; charset=utf-8`, the sniffer's answer for unrecognised text
    pub fn plain_text() -> Self {
        Self::from(mime::TEXT_PLAIN_UTF_8)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_plain_text(&self) -> bool {
        self.0 == mime::TEXT_PLAIN_UTF_8.as_ref()
    }

    /// Correct a sniffed type using the file extension.
    ///
    /// Stylesheets and scripts carry no signature, so sniffing reports them as
    /// plain text. Browsers in strict mode refuse a stylesheet served as
    /// `text/plain`. Only the plain-text result is rewritten; anything else the
    /// sniffer found is kept.
    pub fn with_extension_override(self, extension: Option<&str>) -> Self {
        if !self.is_plain_text() {
            return self;
        }

        match extension {
            Some(".css") => Self::from(mime::TEXT_CSS_UTF_8),
            Some(".js") => Self::from(mime::APPLICATION_JAVASCRIPT_UTF_8),
            _ => self,
        }
    }
}

impl From<Mime> for ContentType {
    fn from(mime: Mime) -> Self {
        Self(mime.to_string())
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_corrected_for_css_and_js() {
        assert_eq!(
            ContentType::plain_text()
                .with_extension_override(Some(".css"))
                .as_str(),
            "text/css; charset=utf-8"
        );
        assert_eq!(
            ContentType::plain_text()
                .with_extension_override(Some(".js"))
                .as_str(),
            "application/javascript; charset=utf-8"
        );
    }

    #[test]
    fn test_other_combinations_pass_through() {
        let plain = ContentType::plain_text();
        assert_eq!(plain.clone().with_extension_override(Some(".txt")), plain);
        assert_eq!(plain.clone().with_extension_override(Some(".CSS")), plain);
        assert_eq!(plain.clone().with_extension_override(None), plain);

        let html = ContentType::from(mime::TEXT_HTML_UTF_8);
        assert_eq!(html.clone().with_extension_override(Some(".css")), html);

        let binary = ContentType::from(mime::APPLICATION_OCTET_STREAM);
        assert_eq!(binary.clone().with_extension_override(Some(".js")), binary);
    }

    #[test]
    fn test_empty_content_type_rejected() {
        assert_eq!(ContentType::new("  "), Err(ValidationError::EmptyContentType));
        assert!(ContentType::new("image/png").is_ok());
    }
}
