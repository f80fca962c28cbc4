//! Application-wide constants

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;

/// Registry status of an application that may be attached to a category.
pub const APP_STATUS_NORMAL: &str = "normal";

pub const MAX_NAME_LENGTH: u64 = 255;
pub const MAX_URL_LENGTH: u64 = 2048;
pub const MAX_ICON_LENGTH: u64 = 255;

pub const DEFAULT_ICON_TYPE: &str = "emoji";
pub const DEFAULT_ICON_BACKGROUND: &str = "#FFEAD5";
pub const DEFAULT_APP_ICON: &str = "🤖";
pub const DEFAULT_MARKDOWN_ICON: &str = "📄";
pub const DEFAULT_URL_ICON: &str = "🔗";

pub const MISSING_APP_DESCRIPTION: &str = "This app may have been deleted or is no longer available";
