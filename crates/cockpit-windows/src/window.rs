use cockpit_core::profile::ChromeMode;
use cockpit_core::{Rect, WindowInfo, WindowResult};

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GWL_STYLE, GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, HWND_NOTOPMOST, HWND_TOPMOST, IsWindowVisible,
    RealGetWindowClassW, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOCOPYBITS, SWP_NOMOVE,
    SWP_NOSENDCHANGING, SWP_NOSIZE, SWP_NOZORDER, SetWindowLongPtrW, SetWindowPos, WS_CAPTION,
    WS_EX_TOOLWINDOW, WS_THICKFRAME,
};

use crate::frame;
use crate::process;

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle that identifies a window to the OS.
/// This struct holds that handle and queries the OS lazily for metadata.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    ///
    /// This allows callers to construct a `Window` without depending on the
    /// `windows` crate directly.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Resolves this window to a platform-agnostic record for matching
    /// and capture. Fields that cannot be read come back empty.
    pub fn info(&self) -> WindowInfo {
        use cockpit_core::Window as _;

        WindowInfo {
            handle: self.hwnd.0 as usize,
            title: self.title().unwrap_or_default(),
            class: self.class().unwrap_or_default(),
            exe: self.exe(),
            rect: self.rect().unwrap_or(Rect::new(0, 0, 0, 0)),
        }
    }

    /// Returns the ID of the process that owns this window.
    pub fn process_id(&self) -> u32 {
        let mut pid: u32 = 0;
        // SAFETY: GetWindowThreadProcessId writes the owning PID.
        unsafe { GetWindowThreadProcessId(self.hwnd, Some(&mut pid)) };
        pid
    }

    /// Returns whether this window needs `SWP_FRAMECHANGED` to update
    /// its rendering surface after a programmatic resize.
    ///
    /// Chromium-based apps (Chrome, Edge, Electron) use a GPU compositor
    /// that only repaints when `WM_NCCALCSIZE` fires. Without
    /// `SWP_FRAMECHANGED`, they render a blank/stale surface.
    fn needs_frame_changed(&self) -> bool {
        let class = cockpit_core::Window::class(self).unwrap_or_default();
        class == "Chrome_WidgetWin_1" || class == "MozillaWindowClass"
    }

    /// Returns whether this looks like a real application window.
    ///
    /// Checks for a caption bar (`WS_CAPTION`) and rejects tool windows
    /// (`WS_EX_TOOLWINDOW`). This filters out internal helper windows,
    /// tooltips, floating toolbars, and our own overlay windows, none of
    /// which should ever be captured into a layout.
    pub fn is_app_window(&self) -> bool {
        let (style, ex_style) = cockpit_core::Window::styles(self);

        let has_caption = (style & WS_CAPTION.0) == WS_CAPTION.0;
        let is_tool = (ex_style & WS_EX_TOOLWINDOW.0) == WS_EX_TOOLWINDOW.0;

        has_caption && !is_tool
    }

    /// Recomputes the non-client area after a style change.
    ///
    /// `SetWindowPos` with `SWP_FRAMECHANGED` and no move/size/z change
    /// forces the window to process `WM_NCCALCSIZE` under its new styles.
    fn flush_frame(&self) -> WindowResult<()> {
        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED,
            )?;
        }
        Ok(())
    }
}

impl cockpit_core::Window for Window {
    fn title(&self) -> WindowResult<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to call
        // with a valid HWND. They read window text without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn class(&self) -> WindowResult<String> {
        // SAFETY: RealGetWindowClassW reads the window class name.
        // 256 is the maximum class name length in Win32.
        unsafe {
            let mut buffer = [0u16; 256];
            let length = RealGetWindowClassW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..length as usize]))
        }
    }

    fn exe(&self) -> String {
        let pid = self.process_id();
        if pid == 0 {
            return String::new();
        }
        process::exe_stem(pid).unwrap_or_default()
    }

    fn rect(&self) -> WindowResult<Rect> {
        let frame = frame::visible_rect(self.hwnd)?;

        Ok(Rect::new(
            frame.left,
            frame.top,
            frame.right - frame.left,
            frame.bottom - frame.top,
        ))
    }

    fn set_rect(&self, rect: &Rect) -> WindowResult<()> {
        // Compensate for invisible borders so the visible portion
        // lands exactly at the requested position and size.
        let border = frame::border_offset(self.hwnd)?;

        let x = rect.x - border.left;
        let y = rect.y - border.top;
        let cx = rect.width + border.left + border.right;
        let cy = rect.height + border.top + border.bottom;

        // SWP_NOSENDCHANGING suppresses WM_WINDOWPOSCHANGING so the
        // window cannot reject or modify the requested dimensions.
        //
        // SWP_NOCOPYBITS discards old client-area contents instead
        // of blitting them, avoiding stale surfaces.
        let mut flags = SWP_NOZORDER | SWP_NOACTIVATE | SWP_NOSENDCHANGING | SWP_NOCOPYBITS;

        // GPU-composited apps need SWP_FRAMECHANGED to trigger
        // WM_NCCALCSIZE and refresh their surface. It also lets windows
        // enforce size constraints, so only add it where known needed.
        if self.needs_frame_changed() {
            flags |= SWP_FRAMECHANGED;
        }

        cockpit_core::log_debug!(
            "set_rect 0x{:X}: target({},{} {}x{}) border(L:{} T:{} R:{} B:{})",
            self.hwnd.0 as usize,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            border.left,
            border.top,
            border.right,
            border.bottom
        );

        // SAFETY: SetWindowPos with a valid HWND is safe.
        unsafe { SetWindowPos(self.hwnd, None, x, y, cx, cy, flags)? };
        Ok(())
    }

    fn styles(&self) -> (u32, u32) {
        // SAFETY: GetWindowLongPtrW reads window data without side effects.
        unsafe {
            (
                GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32,
                GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32,
            )
        }
    }

    fn set_chrome(&self, mode: ChromeMode) -> WindowResult<()> {
        let (style, _) = self.styles();
        let new_style = match mode {
            ChromeMode::Keep => return Ok(()),
            ChromeMode::Strip => style & !(WS_CAPTION.0 | WS_THICKFRAME.0),
        };

        // SAFETY: SetWindowLongPtrW with a valid HWND and GWL_STYLE is safe.
        unsafe {
            SetWindowLongPtrW(self.hwnd, GWL_STYLE, new_style as isize);
        }

        // Rounded corners leave slivers of desktop visible at the
        // corners of a chrome-less window; square them off.
        frame::set_square_corners(self.hwnd);
        self.flush_frame()
    }

    fn restore_styles(&self, style: u32, ex_style: u32) -> WindowResult<()> {
        // SAFETY: SetWindowLongPtrW with a valid HWND is safe.
        unsafe {
            SetWindowLongPtrW(self.hwnd, GWL_STYLE, style as isize);
            SetWindowLongPtrW(self.hwnd, GWL_EXSTYLE, ex_style as isize);
        }
        frame::set_default_corners(self.hwnd);
        self.flush_frame()
    }

    fn set_topmost(&self, topmost: bool) -> WindowResult<()> {
        let insert_after = if topmost { HWND_TOPMOST } else { HWND_NOTOPMOST };

        // SAFETY: SetWindowPos only changes the z-band here.
        unsafe {
            SetWindowPos(
                self.hwnd,
                Some(insert_after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )?;
        }
        Ok(())
    }

    fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }
}
