//! Lazily loaded page index.
//!
//! The page index is fetched on first use and reused for the lifetime of
//! the runtime. Concurrent first uses may each trigger a load; whichever
//! finishes last is kept. Requests are never cancelled, so when folder
//! buttons are clicked in quick succession the last completed load decides
//! the panel contents.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::error::FetchError;
use crate::core::explorer::{BackStack, Explorer, ExplorerView};
use crate::models::{ContentIndex, FolderTarget};

/// Where the page index comes from.
#[allow(async_fn_in_trait)]
pub trait IndexSource {
    async fn load(&self) -> Result<ContentIndex, FetchError>;
}

/// Page index cached after the first successful load.
pub struct CachedIndex<S> {
    source: S,
    cached: RefCell<Option<Rc<ContentIndex>>>,
}

impl<S: IndexSource> CachedIndex<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: RefCell::new(None),
        }
    }

    /// Get the page index, loading it on first use.
    ///
    /// Failed loads are not cached; the next call retries.
    pub async fn get(&self) -> Result<Rc<ContentIndex>, FetchError> {
        if let Some(index) = self.cached.borrow().as_ref() {
            return Ok(Rc::clone(index));
        }

        let index = Rc::new(self.source.load().await?);
        self.cached.replace(Some(Rc::clone(&index)));
        Ok(index)
    }
}

/// Open the explorer panel for `target` once the page index is available.
///
/// Returns `Ok(false)` if the explorer was torn down while the index was
/// loading. On failure the explorer is left untouched and the error is
/// returned for the caller to log.
pub async fn open_panel<V, B, S>(
    explorer: &Weak<RefCell<Explorer<V, B>>>,
    index: &CachedIndex<S>,
    target: &FolderTarget,
) -> Result<bool, FetchError>
where
    V: ExplorerView,
    B: BackStack,
    S: IndexSource,
{
    let data = index.get().await?;
    let Some(explorer) = explorer.upgrade() else {
        return Ok(false);
    };
    explorer.borrow_mut().show_panel(target, &data);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::explorer::testing;
    use crate::models::{ContentDetails, PanelEntry, index_from_pages};

    struct StaticSource {
        pages: Vec<ContentDetails>,
        loads: Cell<usize>,
    }

    impl StaticSource {
        fn new(pages: Vec<ContentDetails>) -> Self {
            Self {
                pages,
                loads: Cell::new(0),
            }
        }
    }

    impl IndexSource for StaticSource {
        async fn load(&self) -> Result<ContentIndex, FetchError> {
            self.loads.set(self.loads.get() + 1);
            Ok(index_from_pages(self.pages.clone()))
        }
    }

    struct FailingSource {
        loads: Cell<usize>,
    }

    impl IndexSource for FailingSource {
        async fn load(&self) -> Result<ContentIndex, FetchError> {
            self.loads.set(self.loads.get() + 1);
            Err(FetchError::HttpError(503))
        }
    }

    #[tokio::test]
    async fn test_index_loaded_once() {
        let index = CachedIndex::new(StaticSource::new(vec![ContentDetails::new("a", "A")]));

        let first = index.get().await.unwrap();
        let second = index.get().await.unwrap();

        assert_eq!(index.source.loads.get(), 1);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let index = CachedIndex::new(FailingSource {
            loads: Cell::new(0),
        });

        assert!(index.get().await.is_err());
        assert!(index.get().await.is_err());
        assert_eq!(index.source.loads.get(), 2);
    }

    #[tokio::test]
    async fn test_open_panel_populates_listing() {
        let explorer = Rc::new(RefCell::new(testing::explorer(true)));
        let index = CachedIndex::new(StaticSource::new(vec![
            ContentDetails::new("posts/a", "B"),
            ContentDetails::new("posts/b", "A"),
            ContentDetails::new("posts/sub/c", "C"),
        ]));

        let applied = open_panel(
            &Rc::downgrade(&explorer),
            &index,
            &FolderTarget::new("posts", "Posts"),
        )
        .await
        .unwrap();
        assert!(applied);

        let explorer = explorer.borrow();
        assert!(explorer.state().panel_open);
        assert!(explorer.state().history_active);
        assert_eq!(explorer.back_stack().pushes, 1);

        let titles: Vec<_> = explorer
            .view()
            .entries
            .iter()
            .map(|entry| match entry {
                PanelEntry::Page { title, .. } => title.clone(),
                PanelEntry::Subfolder { name, count } => {
                    crate::config::text::subfolder_summary(name, *count)
                }
                PanelEntry::Empty => String::new(),
            })
            .collect();
        assert_eq!(titles, vec!["A", "B", "sub: 1개의 글"]);
    }

    #[tokio::test]
    async fn test_open_panel_empty_folder() {
        let explorer = Rc::new(RefCell::new(testing::explorer(false)));
        let index = CachedIndex::new(StaticSource::new(vec![ContentDetails::new("a", "A")]));

        open_panel(
            &Rc::downgrade(&explorer),
            &index,
            &FolderTarget::new("drafts", "Drafts"),
        )
        .await
        .unwrap();

        assert_eq!(explorer.borrow().view().entries, vec![PanelEntry::Empty]);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_panel_closed() {
        let explorer = Rc::new(RefCell::new(testing::explorer(true)));
        let index = CachedIndex::new(FailingSource {
            loads: Cell::new(0),
        });

        let result = open_panel(
            &Rc::downgrade(&explorer),
            &index,
            &FolderTarget::new("posts", "Posts"),
        )
        .await;

        assert!(matches!(result, Err(FetchError::HttpError(503))));
        let explorer = explorer.borrow();
        assert!(!explorer.state().panel_open);
        assert!(!explorer.state().history_active);
        assert_eq!(explorer.view().renders, 0);
        assert_eq!(explorer.back_stack().pushes, 0);
    }

    #[tokio::test]
    async fn test_last_open_wins() {
        let explorer = Rc::new(RefCell::new(testing::explorer(false)));
        let weak = Rc::downgrade(&explorer);
        let index = CachedIndex::new(StaticSource::new(vec![
            ContentDetails::new("posts/a", "A"),
            ContentDetails::new("notes/x", "X"),
        ]));

        let posts = FolderTarget::new("posts", "Posts");
        let notes = FolderTarget::new("notes", "Notes");
        let (a, b) = tokio::join!(
            open_panel(&weak, &index, &posts),
            open_panel(&weak, &index, &notes),
        );
        a.unwrap();
        b.unwrap();

        let explorer = explorer.borrow();
        assert_eq!(explorer.view().title, "Notes");
        assert_eq!(explorer.state().active, Some(notes));
    }

    #[tokio::test]
    async fn test_torn_down_explorer_is_skipped() {
        let explorer = Rc::new(RefCell::new(testing::explorer(true)));
        let weak = Rc::downgrade(&explorer);
        drop(explorer);
        let index = CachedIndex::new(StaticSource::new(vec![ContentDetails::new("posts/a", "A")]));

        let applied = open_panel(&weak, &index, &FolderTarget::new("posts", "Posts"))
            .await
            .unwrap();

        assert!(!applied);
        assert_eq!(index.source.loads.get(), 1);
    }
}
