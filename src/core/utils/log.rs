//! Engine diagnostics
//!
//! On wasm32 messages go to the browser console. Native builds print to
//! stderr in debug builds and stay silent in release.

/// `format!`-style diagnostic line
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
        {
            eprintln!("[sandfall] {}", format!($($arg)*));
        }
        #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
