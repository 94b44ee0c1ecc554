//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jlong, jstring};
use jni::JNIEnv;

use crate::{chunk_tagged_text_json, render_tagged_glyph_svg, NumeralResult};

fn to_jstring(env: &mut JNIEnv, result: NumeralResult<String>) -> jstring {
    match result {
        Ok(s) => match env.new_string(&s) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render one numeral to SVG; null for an unknown system or out-of-range value.
///
/// Called from Kotlin as:
///   external fun renderGlyph(system: String, value: Long): String?
#[no_mangle]
pub extern "system" fn Java_com_numeralib_app_NumeralLib_renderGlyph(
    mut env: JNIEnv,
    _class: JClass,
    system: JString,
    value: jlong,
) -> jstring {
    let tag: String = match env.get_string(&system) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let result = render_tagged_glyph_svg(&tag, value);
    to_jstring(&mut env, result)
}

/// Chunk text and return the chunks as JSON.
///
/// Called from Kotlin as:
///   external fun chunkText(text: String, system: String): String?
#[no_mangle]
pub extern "system" fn Java_com_numeralib_app_NumeralLib_chunkText(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
    system: JString,
) -> jstring {
    let text: String = match env.get_string(&text) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let tag: String = match env.get_string(&system) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let result = chunk_tagged_text_json(&text, &tag);
    to_jstring(&mut env, result)
}
