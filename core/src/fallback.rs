pub const PLACEHOLDER_TEXT: &str = "Image Unavailable";
pub const PDF_LOADING_LABEL: &str = "Loading...";

const PLACEHOLDER_STYLE: &str = "width: 100%; height: 200px; background: #f0f0f0; \
border: 2px dashed #ccc; display: flex; align-items: center; justify-content: center; \
color: #666; font-size: 14px;";

/// The block shown in place of an image that failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub text: &'static str,
    pub style: &'static str,
}

impl Placeholder {
    pub fn standard() -> Self {
        Self {
            text: PLACEHOLDER_TEXT,
            style: PLACEHOLDER_STYLE,
        }
    }
}

/// True when the link path (query and fragment stripped) ends in `.pdf`.
pub fn is_pdf_href(href: &str) -> bool {
    let path = href
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    path.len() > 4
        && path
            .get(path.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".pdf"))
}

/// Label bookkeeping for one PDF link. The first activation remembers the
/// real label; repeated activations before the restore keep it.
#[derive(Clone, Debug, Default)]
pub struct PdfLabel {
    original: Option<String>,
}

impl PdfLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label to show while the document loads.
    pub fn begin(&mut self, current: &str) -> &'static str {
        if self.original.is_none() {
            self.original = Some(current.to_string());
        }
        PDF_LOADING_LABEL
    }

    /// Returns the label to put back, if a load indicator is showing.
    pub fn restore(&mut self) -> Option<String> {
        self.original.take()
    }
}
