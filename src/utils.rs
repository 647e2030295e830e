use web_sys::console;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn init_logging(level: log::Level) {
    // A second call finds the logger already installed; that is fine.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(level);
    #[cfg(not(feature = "console_log"))]
    let _ = level;
}

// Scoped console.time/console.timeEnd pair, for profiling in the browser devtools
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
