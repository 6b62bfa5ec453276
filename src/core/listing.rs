//! Panel listing for a folder.
//!
//! Builds the slide-in panel contents from the page index: the folder's
//! direct pages sorted by title, followed by one summary line per subfolder.

use std::collections::BTreeMap;

use crate::core::slug;
use crate::models::{ContentDetails, ContentIndex, PanelEntry};
use crate::utils::collate::compare_base;

/// Path of `item` relative to `folder`, or `None` if it lies outside.
///
/// The root folder (empty slug) contains every page.
fn relative_to<'a>(item: &'a str, folder: &str) -> Option<&'a str> {
    if folder.is_empty() {
        return Some(item);
    }
    item.strip_prefix(folder)?.strip_prefix('/')
}

/// Pages directly inside `folder`, excluding index pages, sorted by title.
pub fn direct_children<'a>(index: &'a ContentIndex, folder: &str) -> Vec<&'a ContentDetails> {
    let folder = slug::normalize_folder(folder);

    let mut children: Vec<&ContentDetails> = index
        .values()
        .filter(|item| !item.slug.is_empty() && !slug::is_index(&item.slug))
        .filter(|item| relative_to(&item.slug, folder).is_some_and(|rest| !rest.contains('/')))
        .collect();

    children.sort_by(|a, b| compare_base(&a.title, &b.title));
    children
}

/// Non-index page counts per subfolder of `folder`, keyed by subfolder path.
pub fn subfolder_counts(index: &ContentIndex, folder: &str) -> BTreeMap<String, usize> {
    let folder = slug::normalize_folder(folder);
    let mut counts = BTreeMap::new();

    for item in index.values() {
        if item.slug.is_empty() || slug::is_index(&item.slug) {
            continue;
        }
        let Some(rest) = relative_to(&item.slug, folder) else {
            continue;
        };
        let Some((first, _)) = rest.split_once('/') else {
            continue;
        };

        let path = if folder.is_empty() {
            first.to_string()
        } else {
            format!("{}/{}", folder, first)
        };
        *counts.entry(path).or_insert(0) += 1;
    }

    counts
}

/// Build the panel entries for `folder`, with links relative to `current`.
///
/// A folder with neither pages nor subfolders yields a single
/// [`PanelEntry::Empty`].
pub fn panel_entries(index: &ContentIndex, folder: &str, current: &str) -> Vec<PanelEntry> {
    let mut entries: Vec<PanelEntry> = direct_children(index, folder)
        .into_iter()
        .map(|item| PanelEntry::Page {
            title: item.title.clone(),
            href: slug::resolve_relative(current, &item.slug),
        })
        .collect();

    entries.extend(
        subfolder_counts(index, folder)
            .into_iter()
            .map(|(path, count)| PanelEntry::Subfolder {
                name: slug::last_segment(&path).to_string(),
                count,
            }),
    );

    if entries.is_empty() {
        entries.push(PanelEntry::Empty);
    }
    entries
}
