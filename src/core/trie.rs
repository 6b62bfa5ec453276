//! Folder/file trie derived from the page index.
//!
//! Read-only view over the host's pages used by the folder tree renderer.
//! Children are ordered folders first, then files, each group by display
//! name at base strength.

use crate::core::slug;
use crate::models::ContentIndex;
use crate::utils::collate::compare_base;

/// A content page (leaf).
#[derive(Clone, Debug, PartialEq)]
pub struct FileNode {
    pub slug: String,
    pub title: String,
    pub lang: Option<String>,
}

/// A folder and its direct children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FolderNode {
    /// Path prefix without trailing slash (`posts/sub`; empty for the root)
    pub slug: String,
    /// Last path segment
    pub segment: String,
    /// Title of the folder's index page, or its segment
    pub display_name: String,
    pub folders: Vec<FolderNode>,
    pub files: Vec<FileNode>,
}

impl FolderNode {
    fn new(slug: String, segment: &str) -> Self {
        Self {
            slug,
            segment: segment.to_string(),
            display_name: segment.to_string(),
            folders: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Number of pages under this folder, excluding index pages and
    /// translation variants.
    pub fn descendant_count(&self) -> usize {
        let own = self
            .files
            .iter()
            .filter(|file| slug::is_countable_page(&file.slug))
            .count();
        own + self
            .folders
            .iter()
            .map(FolderNode::descendant_count)
            .sum::<usize>()
    }

    /// The folder's own index page, if any.
    pub fn index_page(&self) -> Option<&FileNode> {
        self.files
            .iter()
            .find(|file| slug::last_segment(&file.slug) == "index")
    }

    /// Resolve display names and sort children, depth-first.
    fn finish(&mut self) {
        let index_title = self
            .index_page()
            .map(|page| page.title.trim().to_string())
            .filter(|title| !title.is_empty());
        if let Some(title) = index_title {
            self.display_name = title;
        }

        for folder in &mut self.folders {
            folder.finish();
        }
        self.folders
            .sort_by(|a, b| compare_base(&a.display_name, &b.display_name));
        self.files.sort_by(|a, b| compare_base(&a.title, &b.title));
    }
}

/// Trie over all pages of the site.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileTrie {
    root: FolderNode,
}

impl FileTrie {
    /// Build the trie from the page index.
    pub fn from_index(index: &ContentIndex) -> Self {
        let mut root = FolderNode::default();

        for (key, details) in index {
            let page_slug = if details.slug.is_empty() {
                key.as_str()
            } else {
                details.slug.as_str()
            };
            if page_slug.is_empty() {
                continue;
            }
            Self::insert(
                &mut root,
                FileNode {
                    slug: page_slug.to_string(),
                    title: details.title.clone(),
                    lang: details.lang.clone(),
                },
            );
        }

        root.finish();
        Self { root }
    }

    /// Insert a page, creating parent folders along the way.
    fn insert(root: &mut FolderNode, file: FileNode) {
        let parts: Vec<&str> = file.slug.split('/').collect();
        let Some((_, dirs)) = parts.split_last() else {
            return;
        };

        let mut current = root;
        let mut current_path = String::new();

        for part in dirs {
            if !current_path.is_empty() {
                current_path.push('/');
            }
            current_path.push_str(part);

            let pos = match current.folders.iter().position(|f| f.segment == *part) {
                Some(pos) => pos,
                None => {
                    current
                        .folders
                        .push(FolderNode::new(current_path.clone(), part));
                    current.folders.len() - 1
                }
            };
            current = &mut current.folders[pos];
        }

        current.files.push(file);
    }

    /// The root folder.
    #[cfg(test)]
    pub fn root(&self) -> &FolderNode {
        &self.root
    }

    /// Top-level folders.
    pub fn root_folders(&self) -> &[FolderNode] {
        &self.root.folders
    }

    /// Number of countable pages directly at the root.
    pub fn loose_page_count(&self) -> usize {
        self.root
            .files
            .iter()
            .filter(|file| slug::is_countable_page(&file.slug))
            .count()
    }

    /// A trie with no folders and no countable root pages renders nothing.
    pub fn is_empty(&self) -> bool {
        self.root.folders.is_empty() && self.loose_page_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentDetails, index_from_pages};

    fn sample() -> FileTrie {
        FileTrie::from_index(&index_from_pages([
            ContentDetails::new("index", "Home"),
            ContentDetails::new("about", "About"),
            ContentDetails::new("about.en", "About (en)"),
            ContentDetails::new("posts/index", "Writing"),
            ContentDetails::new("posts/b", "Beta"),
            ContentDetails::new("posts/a", "alpha"),
            ContentDetails::new("posts/a.ko", "알파"),
            ContentDetails::new("posts/sub/c", "Gamma"),
            ContentDetails::new("notes/x", "X"),
        ]))
    }

    #[test]
    fn test_structure() {
        let trie = sample();
        let names: Vec<_> = trie
            .root_folders()
            .iter()
            .map(|f| f.display_name.as_str())
            .collect();
        // "notes" has no index page, "posts" is titled by its index
        assert_eq!(names, vec!["notes", "Writing"]);

        let posts = &trie.root_folders()[1];
        assert_eq!(posts.slug, "posts");
        assert_eq!(posts.folders[0].slug, "posts/sub");
        assert_eq!(posts.folders[0].display_name, "sub");
    }

    #[test]
    fn test_files_sorted_case_insensitive() {
        let trie = sample();
        let posts = &trie.root_folders()[1];
        let titles: Vec<_> = posts.files.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["alpha", "Beta", "Writing", "알파"]);
    }

    #[test]
    fn test_descendant_count_excludes_index_and_translations() {
        let trie = sample();
        let posts = &trie.root_folders()[1];
        // posts/a, posts/b, posts/sub/c
        assert_eq!(posts.descendant_count(), 3);
        assert_eq!(posts.folders[0].descendant_count(), 1);
        assert_eq!(trie.root().descendant_count(), 5);
    }

    #[test]
    fn test_descendant_count_matches_flat_count() {
        let trie = sample();
        let index = sample_index();
        for folder in trie.root_folders() {
            let prefix = format!("{}/", folder.slug);
            let expected = index
                .keys()
                .filter(|s| s.starts_with(&prefix) && slug::is_countable_page(s))
                .count();
            assert_eq!(folder.descendant_count(), expected, "{}", folder.slug);
        }
    }

    fn sample_index() -> ContentIndex {
        index_from_pages([
            ContentDetails::new("posts/b", "Beta"),
            ContentDetails::new("posts/a", "alpha"),
            ContentDetails::new("posts/a.ko", "알파"),
            ContentDetails::new("posts/index", "Writing"),
            ContentDetails::new("posts/sub/c", "Gamma"),
            ContentDetails::new("notes/x", "X"),
        ])
    }

    #[test]
    fn test_loose_pages() {
        let trie = sample();
        // "about" only: "index" and "about.en" are excluded
        assert_eq!(trie.loose_page_count(), 1);
    }

    #[test]
    fn test_empty_trie() {
        assert!(FileTrie::from_index(&ContentIndex::new()).is_empty());

        let only_translations =
            FileTrie::from_index(&index_from_pages([ContentDetails::new("a.ko", "A")]));
        assert!(only_translations.is_empty());

        let only_folder =
            FileTrie::from_index(&index_from_pages([ContentDetails::new("p/index", "P")]));
        assert!(!only_folder.is_empty());
    }
}
