//! Logging for band-lens
//!
//! `blog!` writes `YYYY-MM-DD HH:MM:SS [MODULE] message` lines to stderr.
//! Modules pass one of the tag constants below as the first argument.

#[macro_export]
macro_rules! blog {
    ($module:expr, $($arg:tt)*) => {{
        let now = chrono::Local::now();
        eprintln!(
            "{} [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            $module,
            format!($($arg)*)
        );
    }};
}

pub const MAIN: &str = "MAIN";
pub const SCENE: &str = "SCENE";
pub const GESTURE: &str = "GESTURE";
pub const RENDER: &str = "RENDER";
pub const WINDOW: &str = "WINDOW";
pub const SNAPSHOT: &str = "SNAPSHOT";
