//! Interactive Win32 host
//!
//! Opens a resizable top-level window, measures the bands from the client
//! area on every resize, forwards left-button drags to the controller and
//! presents each rendered frame with `SetDIBitsToDevice`.

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BeginPaint, DIB_RGB_COLORS, EndPaint, InvalidateRect,
    PAINTSTRUCT, SetDIBitsToDevice, UpdateWindow,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};
use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture};
use windows::Win32::UI::WindowsAndMessaging::{
    CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DispatchMessageW,
    GWLP_USERDATA, GetClientRect, GetMessageW, GetWindowLongPtrW, IDC_ARROW, LoadCursorW, MSG,
    PostQuitMessage, RegisterClassW, SW_SHOW, SetWindowLongPtrW, ShowWindow, TranslateMessage,
    WINDOW_EX_STYLE, WM_CAPTURECHANGED, WM_DESTROY, WM_ERASEBKGND, WM_LBUTTONDOWN, WM_LBUTTONUP,
    WM_MOUSEMOVE, WM_PAINT, WM_SIZE, WNDCLASSW, WS_OVERLAPPEDWINDOW,
};
use windows::core::w;

use crate::app::controller::SceneController;
use crate::domain::core::{Point, Size};
use crate::platform::PlatformError;
use crate::ui::renderer::pixmap_to_bgra;
use crate::util::logging::{RENDER, WINDOW};

/// Opens the scene window and runs its message loop until it is closed
pub fn run(controller: SceneController) -> Result<(), PlatformError> {
    // Per-monitor awareness keeps the client area in real pixels
    let _ = unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) };

    let class_name = w!("BandLensSceneWindow");
    let hinstance = unsafe { GetModuleHandleW(None) }.map_err(|_| PlatformError::ModuleHandleFailed)?;

    let wc = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(scene_window_proc),
        hInstance: hinstance.into(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default(),
        lpszClassName: class_name,
        ..Default::default()
    };

    if unsafe { RegisterClassW(&wc) } == 0 {
        return Err(PlatformError::WindowClassRegistrationFailed);
    }

    let surface = controller.surface();
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Band Lens"),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            surface.width as i32,
            surface.height as i32,
            None,
            None,
            hinstance,
            None,
        )
    };

    if hwnd.0 == 0 {
        return Err(PlatformError::WindowCreationFailed);
    }

    // The window procedure borrows the controller through the user data slot
    // until the message loop ends.
    let controller = Box::into_raw(Box::new(controller));
    unsafe {
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, controller as isize);
    }

    // WM_SIZE messages sent during creation arrived before the controller
    // was attached, so measure the initial client area explicitly.
    if let Some(size) = client_size(hwnd) {
        unsafe { (*controller).measure(size) };
    }

    unsafe {
        ShowWindow(hwnd, SW_SHOW);
        UpdateWindow(hwnd);
    }
    crate::blog!(WINDOW, "Scene window opened");

    let mut msg = MSG::default();
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    // The window is destroyed by now; nothing can reach the pointer anymore
    drop(unsafe { Box::from_raw(controller) });
    crate::blog!(WINDOW, "Scene window closed");

    Ok(())
}

unsafe extern "system" fn scene_window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let controller_ptr = unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *mut SceneController;
    if controller_ptr.is_null() {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }
    let controller = unsafe { &mut *controller_ptr };

    match msg {
        WM_SIZE => {
            let size = Size::new(loword(lparam) as f64, hiword(lparam) as f64);
            controller.measure(size);
            invalidate(hwnd);
            LRESULT(0)
        }

        WM_LBUTTONDOWN => {
            controller.pointer_pressed(pointer_position(lparam));
            if controller.is_tracking_pointer() {
                unsafe {
                    SetCapture(hwnd);
                }
            }
            LRESULT(0)
        }

        WM_MOUSEMOVE => {
            if controller.pointer_moved(pointer_position(lparam)) {
                invalidate(hwnd);
            }
            LRESULT(0)
        }

        WM_LBUTTONUP => {
            controller.pointer_released(pointer_position(lparam));
            invalidate(hwnd);
            let _ = unsafe { ReleaseCapture() };
            LRESULT(0)
        }

        WM_CAPTURECHANGED => {
            // Capture taken by another window mid-drag
            controller.pointer_cancelled();
            LRESULT(0)
        }

        WM_PAINT => {
            paint(hwnd, controller);
            LRESULT(0)
        }

        // Every frame covers the full client area
        WM_ERASEBKGND => LRESULT(1),

        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }

        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/// Renders the current frame and copies it to the window
fn paint(hwnd: HWND, controller: &mut SceneController) {
    let mut ps = PAINTSTRUCT::default();
    let hdc = unsafe { BeginPaint(hwnd, &mut ps) };

    match controller.render() {
        Ok(pixmap) => {
            let (width, height) = (pixmap.width(), pixmap.height());
            let pixels = pixmap_to_bgra(&pixmap);

            let bitmap_info = BITMAPINFO {
                bmiHeader: BITMAPINFOHEADER {
                    biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                    biWidth: width as i32,
                    biHeight: -(height as i32), // top-down rows, same as the pixmap
                    biPlanes: 1,
                    biBitCount: 32,
                    biCompression: BI_RGB.0,
                    ..Default::default()
                },
                ..Default::default()
            };

            unsafe {
                SetDIBitsToDevice(
                    hdc,
                    0,
                    0,
                    width,
                    height,
                    0,
                    0,
                    0,
                    height,
                    pixels.as_ptr() as *const c_void,
                    &bitmap_info,
                    DIB_RGB_COLORS,
                );
            }
        }
        Err(err) => crate::blog!(RENDER, "Frame rendering failed: {}", err),
    }

    unsafe {
        let _ = EndPaint(hwnd, &ps);
    }
}

fn invalidate(hwnd: HWND) {
    unsafe {
        InvalidateRect(hwnd, None, false);
    }
}

fn client_size(hwnd: HWND) -> Option<Size> {
    let mut rect = RECT::default();
    unsafe { GetClientRect(hwnd, &mut rect) }.ok()?;
    Some(Size::new(
        (rect.right - rect.left) as f64,
        (rect.bottom - rect.top) as f64,
    ))
}

/// Signed client coordinates packed into a mouse message
fn pointer_position(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xFFFF) as u16 as i16;
    let y = ((lparam.0 >> 16) & 0xFFFF) as u16 as i16;
    Point::new(x as f64, y as f64)
}

fn loword(lparam: LPARAM) -> u16 {
    (lparam.0 & 0xFFFF) as u16
}

fn hiword(lparam: LPARAM) -> u16 {
    ((lparam.0 >> 16) & 0xFFFF) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_position_keeps_sign() {
        // x = -5, y = 300
        let packed = ((300_isize) << 16) | (0xFFFB_isize);
        assert_eq!(pointer_position(LPARAM(packed)), Point::new(-5.0, 300.0));
    }

    #[test]
    fn size_words_are_unsigned() {
        let packed = ((844_isize) << 16) | 390_isize;
        assert_eq!(loword(LPARAM(packed)), 390);
        assert_eq!(hiword(LPARAM(packed)), 844);
    }
}
