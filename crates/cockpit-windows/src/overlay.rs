use std::mem;
use std::sync::Once;

use cockpit_core::rect::{Insets, frame_strips};
use cockpit_core::{Rect, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, CreateCompatibleDC, CreateDIBSection, DIB_RGB_COLORS,
    DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DestroyWindow, HWND_NOTOPMOST, HWND_TOPMOST,
    RegisterClassW, SW_HIDE, SWP_NOACTIVATE, SWP_SHOWWINDOW, SetWindowPos, ShowWindow, ULW_ALPHA,
    UpdateLayeredWindow, WNDCLASSW, WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
    WS_EX_TRANSPARENT, WS_POPUP,
};
use windows::core::PCWSTR;

/// RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parses a hex color string like "#000000" or "1a1a1a".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }
}

/// A transparent overlay window that masks the edges of a managed
/// window with an opaque frame.
///
/// The overlay sits exactly over the window it covers: everything
/// between the window rect and the rect inset by the pad is painted in
/// the frame color; the middle stays fully transparent. `WS_EX_TRANSPARENT`
/// makes it click-through, so the covered window keeps receiving input.
///
/// Uses `UpdateLayeredWindow` with per-pixel alpha so no message pump
/// is needed on the creating thread.
pub struct Overlay {
    hwnd: HWND,
}

static REGISTER_CLASS: Once = Once::new();
const CLASS_NAME: &[u16] = &[
    b'C' as u16,
    b'o' as u16,
    b'c' as u16,
    b'k' as u16,
    b'p' as u16,
    b'i' as u16,
    b't' as u16,
    b'O' as u16,
    b'v' as u16,
    b'e' as u16,
    b'r' as u16,
    b'l' as u16,
    b'a' as u16,
    b'y' as u16,
    0,
];

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(overlay_wnd_proc),
            lpszClassName: PCWSTR(CLASS_NAME.as_ptr()),
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

unsafe extern "system" fn overlay_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

impl Overlay {
    /// Creates a new hidden overlay window.
    pub fn new() -> WindowResult<Self> {
        ensure_class_registered();

        let ex = WS_EX_LAYERED | WS_EX_TOOLWINDOW | WS_EX_TOPMOST | WS_EX_TRANSPARENT;
        let hwnd = unsafe {
            CreateWindowExW(
                ex,
                PCWSTR(CLASS_NAME.as_ptr()),
                PCWSTR::null(),
                WS_POPUP,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                0,
                0,
                None,
                None,
                None,
                None,
            )?
        };

        Ok(Self { hwnd })
    }

    /// Positions the overlay exactly over `rect` and paints the frame
    /// between `rect` and `rect.inset(pad)` in the given color.
    ///
    /// `topmost` keeps the overlay above the window it covers; without
    /// it the overlay joins the normal z-order just above the target.
    pub fn cover(&self, rect: &Rect, pad: &Insets, color: Color, topmost: bool) {
        let band = if topmost { HWND_TOPMOST } else { HWND_NOTOPMOST };
        unsafe {
            let _ = SetWindowPos(
                self.hwnd,
                Some(band),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOACTIVATE | SWP_SHOWWINDOW,
            );
        }

        self.render(rect.x, rect.y, rect.width, rect.height, pad, color);
    }

    /// Hides the overlay.
    pub fn hide(&self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }

    /// Renders the frame bitmap and applies it via `UpdateLayeredWindow`.
    ///
    /// The frame shape comes from [`frame_strips`] in bitmap-local
    /// coordinates, so the painted pixels match the clipping geometry
    /// the rest of the crate reasons about. A pad that swallows the
    /// whole rect degenerates into a single full-cover strip.
    fn render(&self, x: i32, y: i32, w: i32, h: i32, pad: &Insets, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }

        let local = Rect::new(0, 0, w, h);
        let strips = frame_strips(&local, &local.inset(pad));

        unsafe {
            let screen_dc = GetDC(None);
            let mem_dc = CreateCompatibleDC(Some(screen_dc));

            let bmi = BITMAPINFO {
                bmiHeader: BITMAPINFOHEADER {
                    biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                    biWidth: w,
                    biHeight: -h, // top-down
                    biPlanes: 1,
                    biBitCount: 32,
                    biCompression: BI_RGB.0,
                    ..Default::default()
                },
                ..Default::default()
            };

            let mut bits = std::ptr::null_mut();
            let Ok(bmp) = CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0)
            else {
                let _ = DeleteDC(mem_dc);
                let _ = ReleaseDC(None, screen_dc);
                return;
            };
            if bits.is_null() {
                let _ = DeleteObject(bmp.into());
                let _ = DeleteDC(mem_dc);
                let _ = ReleaseDC(None, screen_dc);
                return;
            }

            let old = SelectObject(mem_dc, bmp.into());

            // SAFETY: `bits` is non-null (checked above) and points to
            // `w * h` pixels allocated by CreateDIBSection. The section
            // starts zeroed, which is premultiplied fully-transparent,
            // so only the frame strips need painting.
            let pixel = 0xFF00_0000
                | (u32::from(color.r) << 16)
                | (u32::from(color.g) << 8)
                | u32::from(color.b);
            let buf = std::slice::from_raw_parts_mut(bits as *mut u32, (w * h) as usize);
            for strip in &strips {
                for py in strip.y..strip.bottom() {
                    let row = py * w;
                    for px in strip.x..strip.right() {
                        buf[(row + px) as usize] = pixel;
                    }
                }
            }

            let pt_dst = windows::Win32::Foundation::POINT { x, y };
            let size = windows::Win32::Foundation::SIZE { cx: w, cy: h };
            let pt_src = windows::Win32::Foundation::POINT::default();
            let blend = windows::Win32::Graphics::Gdi::BLENDFUNCTION {
                BlendOp: 0,               // AC_SRC_OVER
                SourceConstantAlpha: 255, // frame opacity comes from per-pixel alpha
                AlphaFormat: 1,           // AC_SRC_ALPHA
                ..Default::default()
            };

            let _ = UpdateLayeredWindow(
                self.hwnd,
                Some(screen_dc),
                Some(&pt_dst),
                Some(&size),
                Some(mem_dc),
                Some(&pt_src),
                windows::Win32::Foundation::COLORREF(0),
                Some(&blend),
                ULW_ALPHA,
            );

            SelectObject(mem_dc, old);
            let _ = DeleteObject(bmp.into());
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(None, screen_dc);
        }
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyWindow(self.hwnd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color() {
        // Assert
        assert_eq!(
            Color::from_hex("#000000"),
            Some(Color { r: 0, g: 0, b: 0 })
        );
        assert_eq!(
            Color::from_hex("1a2b3c"),
            Some(Color {
                r: 0x1A,
                g: 0x2B,
                b: 0x3C
            })
        );
        assert_eq!(Color::from_hex("bad"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
    }

    #[test]
    fn frame_strips_stay_inside_the_bitmap() {
        // Arrange: pads larger than the rect must not index out of bounds
        let local = Rect::new(0, 0, 100, 60);

        for pad in [0, 8, 30, 100] {
            // Act
            let strips = frame_strips(&local, &local.inset(&Insets::uniform(pad)));

            // Assert
            for strip in &strips {
                assert!(strip.x >= 0 && strip.y >= 0, "strip {strip:?} pad {pad}");
                assert!(
                    strip.right() <= 100 && strip.bottom() <= 60,
                    "strip {strip:?} pad {pad}"
                );
            }
        }
    }
}
