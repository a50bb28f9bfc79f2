//! Tab descriptors supplied by the embedding application.

/// One tab of the bar: a text label or an image marker, plus whatever
/// page content the caller's `render_scene` produces for it.
///
/// When `label` is set a text marker is rendered and `image` is ignored;
/// otherwise `image` is used as the marker's `src`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteDescriptor {
    pub label: Option<String>,
    pub image: Option<String>,
}

impl RouteDescriptor {
    /// A tab with a text marker.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            label: Some(text.into()),
            image: None,
        }
    }

    /// A tab with an image marker loaded from `src`.
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            label: None,
            image: Some(src.into()),
        }
    }
}
