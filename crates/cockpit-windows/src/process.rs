use windows::Win32::Foundation::CloseHandle;
use windows::Win32::System::ProcessStatus::K32GetModuleFileNameExW;
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ,
};

/// Returns the lowercased executable stem for a process ID
/// (e.g. "prepar3d" for `C:\...\Prepar3D.exe`).
///
/// Layout records store this rather than the full path: install
/// locations differ between machines, but the binary name doesn't.
pub fn exe_stem(pid: u32) -> Option<String> {
    let path = exe_path(pid)?;
    let stem = std::path::Path::new(&path).file_stem()?.to_str()?;
    Some(stem.to_ascii_lowercase())
}

/// Returns the full executable path for a process ID.
pub fn exe_path(pid: u32) -> Option<String> {
    // SAFETY: OpenProcess/K32GetModuleFileNameExW only read process
    // metadata; the handle is closed before returning. Access can be
    // denied for elevated processes, in which case we return None.
    unsafe {
        let handle = OpenProcess(PROCESS_QUERY_INFORMATION | PROCESS_VM_READ, false, pid).ok()?;
        let mut buf = [0u16; 1024];
        let len = K32GetModuleFileNameExW(Some(handle), None, &mut buf);
        let _ = CloseHandle(handle);
        if len == 0 {
            return None;
        }
        String::from_utf16(&buf[..len as usize]).ok()
    }
}
