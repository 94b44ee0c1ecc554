//! numeralib — digit chunking and historical numeral glyph rendering.
//!
//! Free text is cut into bounded numbers, and each number is drawn as a
//! Cistercian (0–9999) or Basingstoke (0–99) numeral in a self-contained SVG.
//!
//! # Example
//! ```
//! use numeralib::{chunk_digits, render_glyph_svg, SystemId};
//!
//! assert_eq!(chunk_digits("12345678", SystemId::Cistercian), vec![1234, 5678]);
//! let svg = render_glyph_svg(SystemId::Basingstoke, 42).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod chunker;
pub mod error;
pub mod model;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use chunker::{chunk_digits, chunk_text};
pub use error::{NumeralError, NumeralResult};
pub use model::*;
pub use renderer::{encode_glyph, render_glyph, render_glyph_svg, render_text_to_svgs};

/// Convert a chunk list to a JSON string.
/// Useful for passing chunk spans across FFI boundaries.
pub fn chunks_to_json(chunks: &[Chunk]) -> NumeralResult<String> {
    Ok(serde_json::to_string(chunks)?)
}

/// Render one numeral given its system tag, as received from an outer layer.
pub fn render_tagged_glyph_svg(system: &str, value: i64) -> NumeralResult<String> {
    render_glyph_svg(system.parse()?, value)
}

/// Chunk text for a system given by tag and return the chunks as JSON.
pub fn chunk_tagged_text_json(text: &str, system: &str) -> NumeralResult<String> {
    chunks_to_json(&chunk_text(text, system.parse()?))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Borrow a C string as `&str`, or `None` for null / invalid UTF-8.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn borrow_c_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(result: NumeralResult<String>) -> *mut c_char {
    match result {
        Ok(s) => CString::new(s).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render one numeral and return its SVG as a C string, or null if the
/// system tag is unknown or the value is out of range.
/// The caller must free the returned string with `numeralib_free_string`.
///
/// # Safety
/// `system` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn numeralib_render_glyph(system: *const c_char, value: i64) -> *mut c_char {
    match unsafe { borrow_c_str(system) } {
        Some(tag) => into_c_string(render_tagged_glyph_svg(tag, value)),
        None => std::ptr::null_mut(),
    }
}

/// Chunk text and return the chunks (value, origin, byte span) as a JSON
/// C string, or null on an unknown system tag.
/// The caller must free the returned string with `numeralib_free_string`.
///
/// # Safety
/// `text` and `system` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn numeralib_chunk_text(
    text: *const c_char,
    system: *const c_char,
) -> *mut c_char {
    let (Some(text), Some(tag)) = (unsafe { borrow_c_str(text) }, unsafe { borrow_c_str(system) })
    else {
        return std::ptr::null_mut();
    };
    into_c_string(chunk_tagged_text_json(text, tag))
}

/// Free a string previously returned by numeralib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a numeralib function, or null.
#[no_mangle]
pub unsafe extern "C" fn numeralib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
