/// What the loader knows about one image before it becomes visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyImage {
    pub deferred_src: Option<String>,
    pub has_lazy_class: bool,
}

/// DOM changes to apply once a lazy image intersects the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyUpdate {
    pub src: String,
    pub remove_deferred_attr: bool,
    pub remove_lazy_class: bool,
}

impl LazyImage {
    pub fn is_pending(&self) -> bool {
        self.has_lazy_class
            && self
                .deferred_src
                .as_deref()
                .is_some_and(|src| !src.trim().is_empty())
    }

    /// Moves the image to its loaded state. Returns `None` once loaded.
    pub fn reveal(&mut self) -> Option<LazyUpdate> {
        if !self.is_pending() {
            return None;
        }
        let src = self.deferred_src.take()?;
        self.has_lazy_class = false;
        Some(LazyUpdate {
            src,
            remove_deferred_attr: true,
            remove_lazy_class: true,
        })
    }
}
