//! Browser launcher
//!
//! Opens the served page once at startup when a path argument is given.
//! Launching is best-effort: a missing browser never stops the server.

use crate::config::ServerConfig;
use crate::logger;

/// Something that can open a URL, normally the desktop's default browser
pub trait BrowserOpener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Opens URLs through the OS handler (`xdg-open`, `open`, `start`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that_detached(url)
    }
}

/// URL for a path argument: `http://{host}:{port}/{path}`
///
/// # Examples
/// ```
/// use serve_wasm::config::ServerConfig;
/// use serve_wasm::launcher::launch_url;
///
/// let url = launch_url(&ServerConfig::default(), "index.html");
/// assert_eq!(url, "http://localhost:8888/index.html");
/// ```
pub fn launch_url(config: &ServerConfig, target: &str) -> String {
    format!("{}/{}", config.base_url(), target.trim_start_matches('/'))
}

/// Open the browser on `target` if one was given
///
/// Returns the URL that was attempted, or `None` when there was nothing to do.
/// Failures are logged and swallowed.
pub fn launch(
    target: Option<&str>,
    config: &ServerConfig,
    opener: &impl BrowserOpener,
) -> Option<String> {
    let url = launch_url(config, target?);
    match opener.open(&url) {
        Ok(()) => logger::log_browser_opened(&url),
        Err(e) => logger::log_browser_failed(&url, &e),
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records URLs instead of launching anything
    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl BrowserOpener for RecordingOpener {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_no_argument_does_nothing() {
        let opener = RecordingOpener::default();
        assert_eq!(launch(None, &ServerConfig::default(), &opener), None);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_argument_opens_url_once() {
        let opener = RecordingOpener::default();
        let url = launch(Some("index.html"), &ServerConfig::default(), &opener);
        assert_eq!(url.as_deref(), Some("http://localhost:8888/index.html"));
        assert_eq!(*opener.opened.borrow(), vec!["http://localhost:8888/index.html"]);
    }

    #[test]
    fn test_failure_is_swallowed() {
        let opener = RecordingOpener {
            fail: true,
            ..RecordingOpener::default()
        };
        let url = launch(Some("demo/"), &ServerConfig::default(), &opener);
        assert_eq!(url.as_deref(), Some("http://localhost:8888/demo/"));
    }

    #[test]
    fn test_leading_slash_is_trimmed() {
        let url = launch_url(&ServerConfig::default(), "/pkg/index.html");
        assert_eq!(url, "http://localhost:8888/pkg/index.html");
    }
}
