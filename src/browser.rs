use std::io;

use tracing::{debug, warn};

pub trait Launcher {
    fn open(&self, url: &str);
}

// Hands the URL to the platform's default browser. Fire and forget.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn open(&self, url: &str) {
        launch_with(url, |target| open::that_detached(target));
    }
}

// failures are logged, never surfaced.
fn launch_with<F>(url: &str, opener: F) -> bool
where
    F: FnOnce(&str) -> io::Result<()>,
{
    match opener(url) {
        Ok(()) => {
            debug!(%url, "browser launched");
            true
        }
        Err(e) => {
            warn!(error = %e, %url, "failed to launch browser");
            false
        }
    }
}
