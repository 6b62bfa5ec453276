//! Slide-in panel contents.

use leptos::prelude::*;

use crate::config::{explorer as cls, text};
use crate::models::PanelEntry;

/// Items of the panel list for one folder.
#[component]
pub fn PanelItems(entries: Vec<PanelEntry>) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| match entry {
            PanelEntry::Page { title, href } => view! {
                <li class=cls::PANEL_ITEM>
                    <a class=cls::PANEL_LINK href=href>
                        {title}
                    </a>
                </li>
            }
            .into_any(),
            PanelEntry::Subfolder { name, count } => view! {
                <li class=format!("{} {}", cls::PANEL_ITEM, cls::SUBFOLDER_INFO)>
                    {text::subfolder_summary(&name, count)}
                </li>
            }
            .into_any(),
            PanelEntry::Empty => view! {
                <li class=format!("{} {}", cls::PANEL_ITEM, cls::PANEL_EMPTY)>
                    {text::EMPTY_PANEL}
                </li>
            }
            .into_any(),
        })
        .collect_view()
}
