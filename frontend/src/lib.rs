//! WebAssembly entry point for the marketing site.
//!
//! Hydrates the server-rendered HTML so the header's scroll shading and
//! mobile menu become interactive, and installs client-side logging.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client side.
///
/// Initializes `console_log` and `console_error_panic_hook` for debugging,
/// then mounts the main Leptos component to hydrate the DOM.
pub fn hydrate() {
    use app::component;
    // Initialize console logging for client-side debugging.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}

#[cfg(test)]
mod tests {
    #[test]
    /// Smoke-test that `console_log` initialization is callable in tests.
    ///
    /// This may return `Err` if a logger was already installed by another
    /// test; we only require that the call does not panic.
    fn test_console_log_initialization() {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
