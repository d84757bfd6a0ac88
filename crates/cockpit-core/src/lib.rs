pub mod config;
pub mod log;
pub mod matching;
pub mod plan;
pub mod profile;
pub mod rect;
pub mod window;

pub use config::Config;
pub use matching::{FilterSet, WindowInfo};
pub use plan::{ApplyOutcome, ApplyReport, Step, VerifyPolicy};
pub use profile::{ChromeMode, OverlaySpec, Profile, SavedWindow};
pub use rect::{Insets, Rect};
pub use window::{Window, WindowResult};
