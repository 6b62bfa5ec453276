//! Folder tree renderer.
//!
//! Renders the explorer markup from the page trie: the hamburger toggle,
//! the folder drawer with per-folder page counts, the (empty) slide-in
//! panel and the overlay. The runtime in [`super::runtime`] attaches to
//! this markup by class name.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{explorer as cls, text};
use crate::core::{FileTrie, FolderNode, slug};

static INSTANCE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique id for one rendered explorer (`custom-explorer-N`).
fn next_instance_id() -> String {
    let n = INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{}-{}", cls::ROOT, n)
}

/// One folder button in the drawer.
#[derive(Clone, Debug, PartialEq, Eq)]
struct TreeItem {
    /// Normalized folder slug; empty for the root pseudo-folder
    slug: String,
    name: String,
    count: usize,
    depth: usize,
    children: Vec<TreeItem>,
}

impl TreeItem {
    fn from_folder(folder: &FolderNode, depth: usize) -> Self {
        Self {
            slug: slug::normalize_folder(&folder.slug).to_string(),
            name: folder.display_name.clone(),
            count: folder.descendant_count(),
            depth,
            children: folder
                .folders
                .iter()
                .map(|child| Self::from_folder(child, depth + 1))
                .collect(),
        }
    }
}

/// Top-level drawer items: the root pseudo-folder (only when pages live
/// directly at the root) followed by the folders, depth-first.
fn tree_items(trie: &FileTrie) -> Vec<TreeItem> {
    let loose = trie.loose_page_count();
    let root = (loose > 0).then(|| TreeItem {
        slug: String::new(),
        name: text::ROOT_FOLDER.to_string(),
        count: loose,
        depth: 0,
        children: Vec::new(),
    });

    root.into_iter()
        .chain(
            trie.root_folders()
                .iter()
                .map(|folder| TreeItem::from_folder(folder, 0)),
        )
        .collect()
}

/// Page count shown after a folder name, e.g. `(3)`.
fn count_label(count: usize) -> String {
    format!("({})", count)
}

fn render_item(item: TreeItem, panel_id: &str) -> AnyView {
    let children = (!item.children.is_empty()).then(|| {
        let nested = item
            .children
            .into_iter()
            .map(|child| render_item(child, panel_id))
            .collect_view();
        view! { <ul class=cls::FOLDER_CHILDREN>{nested}</ul> }
    });

    let TreeItem {
        slug,
        name,
        count,
        depth,
        ..
    } = item;
    let label = name.clone();

    view! {
        <li
            class=cls::FOLDER_ITEM
            data-depth=depth.to_string()
            style=format!("--depth: {}", depth)
        >
            <button
                type="button"
                class=cls::FOLDER
                data-folder-slug=slug
                data-folder-name=name
                aria-controls=panel_id.to_string()
            >
                <span class=cls::FOLDER_LABEL>{label}</span>
                <span class=cls::COUNT>{count_label(count)}</span>
            </button>
            {children}
        </li>
    }
    .into_any()
}

/// Folder explorer with descendant page counts.
///
/// Renders nothing when the site has no folders and no root pages.
#[component]
pub fn ExplorerWithCounts(trie: FileTrie) -> impl IntoView {
    if trie.is_empty() {
        return ().into_any();
    }
    let items = tree_items(&trie);

    let id = next_instance_id();
    let folders_id = format!("{}-folders", id);
    let panel_id = format!("{}-panel", id);
    let title_id = format!("{}-panel-title", id);
    let labelled_by = title_id.clone();

    let folders = items
        .into_iter()
        .map(|item| render_item(item, &panel_id))
        .collect_view();

    view! {
        <nav class=cls::ROOT id=id aria-label=text::NAV_LABEL>
            <button
                type="button"
                class=format!("{} {}", cls::TOGGLE, cls::HIDE_UNTIL_LOADED)
                aria-controls=folders_id.clone()
                aria-expanded="false"
                aria-label=text::TOGGLE_LABEL
            >
                <span class=cls::TOGGLE_ICON>
                    <Icon icon=ic::MENU />
                </span>
            </button>
            <div class=cls::FOLDERS id=folders_id aria-hidden="false">
                <button type="button" class=cls::NAV_CLOSE aria-label=text::NAV_CLOSE_LABEL>
                    <Icon icon=ic::CLOSE />
                </button>
                <ul class=cls::FOLDER_LIST>{folders}</ul>
            </div>
            <section
                class=cls::PANEL
                id=panel_id
                role="dialog"
                aria-labelledby=labelled_by
                aria-hidden="true"
            >
                <div class=cls::PANEL_HEADER>
                    <button type="button" class=cls::BACK>
                        {text::BACK_LABEL}
                    </button>
                    <h2 class=cls::PANEL_TITLE id=title_id></h2>
                </div>
                <ul class=cls::PANEL_LIST></ul>
            </section>
            <div class=cls::OVERLAY aria-hidden="true"></div>
        </nav>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentDetails, index_from_pages};

    fn trie(pages: &[(&str, &str)]) -> FileTrie {
        FileTrie::from_index(&index_from_pages(
            pages
                .iter()
                .map(|(slug, title)| ContentDetails::new(*slug, *title)),
        ))
    }

    fn flatten(items: &[TreeItem]) -> Vec<(String, usize, usize)> {
        items
            .iter()
            .flat_map(|item| {
                std::iter::once((item.name.clone(), item.count, item.depth))
                    .chain(flatten(&item.children))
            })
            .collect()
    }

    #[test]
    fn test_root_item_counts_loose_pages() {
        let items = tree_items(&trie(&[
            ("index", "Home"),
            ("about", "About"),
            ("about.en", "About"),
            ("posts/a", "A"),
        ]));

        assert_eq!(items[0].slug, "");
        assert_eq!(items[0].name, text::ROOT_FOLDER);
        assert_eq!(items[0].count, 1);
        assert_eq!(items[1].slug, "posts");
    }

    #[test]
    fn test_root_item_hidden_without_loose_pages() {
        let items = tree_items(&trie(&[("index", "Home"), ("posts/a", "A")]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "posts");
    }

    #[test]
    fn test_nested_counts_and_depth() {
        let items = tree_items(&trie(&[
            ("posts/index", "Writing"),
            ("posts/a", "A"),
            ("posts/a.ko", "에이"),
            ("posts/sub/b", "B"),
            ("posts/sub/c", "C"),
        ]));

        assert_eq!(
            flatten(&items),
            vec![("Writing".to_string(), 3, 0), ("sub".to_string(), 2, 1)]
        );
        assert_eq!(items[0].children[0].slug, "posts/sub");
    }

    #[test]
    fn test_empty_site_renders_nothing() {
        assert!(tree_items(&trie(&[("index", "Home")])).is_empty());
        assert!(tree_items(&FileTrie::default()).is_empty());
        assert!(trie(&[("index", "Home")]).is_empty());
    }

    #[test]
    fn test_count_label_is_parenthesized() {
        assert_eq!(count_label(3), "(3)");
        assert_eq!(count_label(0), "(0)");
    }

    #[test]
    fn test_instance_ids_are_unique() {
        let a = next_instance_id();
        let b = next_instance_id();
        assert_ne!(a, b);
        assert!(a.starts_with("custom-explorer-"));
    }
}
