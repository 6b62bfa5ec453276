//! Icon definitions.
//!
//! The theme is picked in `config.rs` via `ICON_THEME`; components only
//! refer to the semantic names below.

use icondata::Icon;

use crate::config::IconTheme;

mod lucide {
    pub use icondata::{LuGlobe as Globe, LuMenu as Menu, LuX as Close};
}

mod bootstrap {
    pub use icondata::{BsGlobe as Globe, BsList as Menu, BsXLg as Close};
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(GLOBE, Globe);
