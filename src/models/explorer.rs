//! Explorer-related data types shared by the renderer and the runtime.

/// Folder identified by a folder button's data attributes.
///
/// `slug` is normalized (no trailing `/index`); the empty slug is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderTarget {
    pub slug: String,
    pub name: String,
}

impl FolderTarget {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// One line of the slide-in panel list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEntry {
    /// Direct child page, linked relative to the current page
    Page { title: String, href: String },
    /// Summary of a subfolder and its page count
    Subfolder { name: String, count: usize },
    /// Placeholder for a folder without pages
    Empty,
}

/// Attribute values applied to the nav drawer and its toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavPresentation {
    /// `is-nav-open` on the explorer root
    pub root_open: bool,
    /// `aria-hidden` on the folder drawer
    pub folders_hidden: bool,
    /// `aria-expanded` on the hamburger toggle
    pub toggle_expanded: bool,
}
