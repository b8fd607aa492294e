#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorTarget {
    /// The bare `#` link; left to the browser.
    Empty,
    /// An in-page element id.
    Id(String),
    /// Not a same-page fragment.
    External,
}

pub fn fragment_target(href: &str) -> AnchorTarget {
    let href = href.trim();
    let Some(fragment) = href.strip_prefix('#') else {
        return AnchorTarget::External;
    };
    if fragment.is_empty() {
        return AnchorTarget::Empty;
    }
    AnchorTarget::Id(fragment.to_string())
}
