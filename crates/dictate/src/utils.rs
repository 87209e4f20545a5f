use std::ffi::{c_char, CStr, CString};

pub fn cstring_from_str(s: &str) -> CString {
    CString::new(s).unwrap_or_default()
}

/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated C string.
pub unsafe fn cstr_to_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}
