/// Profile application engine (place, verify, retry, hold).
pub mod apply;

/// Ctrl+C handling via the console API.
pub mod ctrl_c;

/// Process DPI awareness.
pub mod dpi;

/// Win32 window enumeration.
pub mod enumerate;

/// DWM frame bounds and invisible border math.
pub mod frame;

/// Monitor and virtual screen queries.
pub mod monitor;

/// Click-through border overlay windows.
pub mod overlay;

/// Process utilities (executable name from PID).
pub mod process;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use enumerate::{enumerate_windows, window_infos};
pub use window::Window;
