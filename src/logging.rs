//! JSON-line logging into the browser console.

use tracing::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConsoleMethod {
    Log,
    Warn,
    Error,
}

fn console_method(level: &Level) -> ConsoleMethod {
    if *level == Level::ERROR {
        ConsoleMethod::Error
    } else if *level == Level::WARN {
        ConsoleMethod::Warn
    } else {
        ConsoleMethod::Log
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::init;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{console_method, ConsoleMethod};
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    struct ConsoleMakeWriter;

    pub(super) struct ConsoleWriter {
        method: ConsoleMethod,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(line.trim_end());
            match self.method {
                ConsoleMethod::Log => web_sys::console::log_1(&line),
                ConsoleMethod::Warn => web_sys::console::warn_1(&line),
                ConsoleMethod::Error => web_sys::console::error_1(&line),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                method: ConsoleMethod::Log,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                method: console_method(meta.level()),
                buffer: Vec::new(),
            }
        }
    }

    /// Installs the global subscriber. Safe to call twice; the second call is
    /// ignored.
    pub fn init(max_level: Level) {
        // No timer: `SystemTime::now` panics on wasm32-unknown-unknown.
        let installed = tracing_subscriber::fmt()
            .json()
            .without_time()
            .with_max_level(max_level)
            .with_writer(ConsoleMakeWriter)
            .try_init();

        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_and_errors_use_dedicated_console_methods() {
        assert_eq!(console_method(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(console_method(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(console_method(&Level::INFO), ConsoleMethod::Log);
        assert_eq!(console_method(&Level::DEBUG), ConsoleMethod::Log);
        assert_eq!(console_method(&Level::TRACE), ConsoleMethod::Log);
    }
}
