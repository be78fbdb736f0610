//! Panic Handling and Recovery
//!
//! wgpu reports validation failures by panicking; pipeline creation runs
//! through here so such a failure becomes an error message instead of a crash.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// Result type for operations that might panic
pub type PanicResult<T> = Result<T, String>;

fn panic_payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic occurred".to_string()
    }
}

/// Catch panics from a closure that borrows mutable state.
///
/// Only use this when the borrowed state can't be left half-updated.
pub fn catch_panic_mut<F, T>(f: F) -> PanicResult<T>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_payload_message(payload.as_ref());
        log::error!("Caught panic: {}", message);
        message
    })
}

/// Format a panic message for the error window
pub fn format_panic_message(panic_msg: &str) -> String {
    if let Some(start) = panic_msg.find("wgpu error:") {
        return format!("GPU Error\n\n{}", &panic_msg[start..]);
    }

    if panic_msg.contains("Validation Error") {
        return format!("Shader Validation Error\n\n{}", panic_msg);
    }

    format!("Internal Error\n\n{}", panic_msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_panic_mut_success() {
        let mut x = 10;
        let result = catch_panic_mut(|| {
            x += 5;
            x
        });
        assert_eq!(result, Ok(15));
    }

    #[test]
    fn test_catch_panic_mut_failure() {
        let result: PanicResult<()> = catch_panic_mut(|| panic!("Test panic"));
        assert!(result.unwrap_err().contains("Test panic"));
    }

    #[test]
    fn test_formatted_panic_payload() {
        let n = 3;
        let result: PanicResult<()> = catch_panic_mut(|| panic!("lost {} buffers", n));
        assert_eq!(result, Err("lost 3 buffers".to_string()));
    }

    #[test]
    fn test_format_wgpu_error() {
        let msg = "thread panicked with wgpu error: Validation Error in pipeline";
        let formatted = format_panic_message(msg);
        assert!(formatted.starts_with("GPU Error"));
        assert!(formatted.contains("wgpu error: Validation Error"));
    }

    #[test]
    fn test_format_generic_panic() {
        assert_eq!(format_panic_message("boom"), "Internal Error\n\nboom");
    }
}
