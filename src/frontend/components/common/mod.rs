//! Common reusable components.

pub mod logo;
pub mod notice;

pub use logo::Logo;
pub use notice::{Notice, NoticeKind};
