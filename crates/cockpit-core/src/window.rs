use crate::Rect;
use crate::profile::ChromeMode;

/// A boxed error type for window operations.
///
/// Any error type that implements the `Error` trait can be boxed into
/// this, including the OS error types from the platform crate.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Platform-agnostic window trait.
///
/// Each platform crate (e.g. `cockpit-windows`) provides its own
/// implementation over the native window handle.
pub trait Window {
    /// Returns the window title.
    fn title(&self) -> WindowResult<String>;

    /// Returns the window class name.
    fn class(&self) -> WindowResult<String>;

    /// Returns the lowercased executable stem of the owning process
    /// (e.g. "notepad"), or an empty string when it cannot be resolved.
    fn exe(&self) -> String;

    /// Returns the visible bounding rectangle.
    fn rect(&self) -> WindowResult<Rect>;

    /// Moves and resizes the window so its visible bounds match `rect`.
    fn set_rect(&self, rect: &Rect) -> WindowResult<()>;

    /// Returns the raw (style, ex_style) bits.
    fn styles(&self) -> (u32, u32);

    /// Applies a chrome mode: `Strip` removes the caption and sizing
    /// frame, `Keep` leaves the window as-is.
    fn set_chrome(&self, mode: ChromeMode) -> WindowResult<()>;

    /// Restores previously captured raw style bits.
    fn restore_styles(&self, style: u32, ex_style: u32) -> WindowResult<()>;

    /// Pins the window above (or releases it from) the topmost band.
    fn set_topmost(&self, topmost: bool) -> WindowResult<()>;

    /// Returns whether the window is currently visible.
    fn is_visible(&self) -> bool;
}
