//! Keyboard handling for the draft input.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Whether a key-down should send the draft instead of editing it.
///
/// Plain `Enter` submits; `Shift+Enter` keeps the default line-break
/// behavior.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
