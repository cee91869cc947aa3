//! Element ids and class names shared with the page templates and stylesheet

// Element ids
pub const NAVBAR: &str = "navbar";
pub const NAVBAR_BG: &str = "navbar-bg";
pub const NAV_BUTTON: &str = "navBtn";
pub const MOBILE_NAV: &str = "mobileNav";
pub const NAV_ICON_OPEN: &str = "navIconOpen";
pub const NAV_ICON_CLOSE: &str = "navIconClose";
pub const TOAST_CONTAINER: &str = "toast-container";
pub const SCROLL_PROGRESS: &str = "scroll-progress";
pub const BACK_TO_TOP: &str = "back-to-top";
pub const YEAR: &str = "year";

// Classes
pub const HIDDEN: &str = "hidden";
pub const BORDER_TRANSPARENT: &str = "border-transparent";
pub const OPACITY_0: &str = "opacity-0";
pub const OPACITY_100: &str = "opacity-100";
pub const POINTER_EVENTS_NONE: &str = "pointer-events-none";
pub const TOAST_ITEM: &str = "toast-item";
pub const TOAST_ENTER: &str = "toast-enter";
pub const TOAST_EXIT: &str = "toast-exit";
pub const TOAST_CLOSE: &str = "toast-close";
