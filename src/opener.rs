//! Opening result links with the operating system's URL handler.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenLinkError {
    #[error("result has no external link")]
    MissingLink,

    #[error("failed to launch the system URL handler: {0}")]
    Launch(#[source] io::Error),
}

/// Something that can hand a URL to a browser.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), OpenLinkError>;
}

/// Fire-and-forget launch of the platform URL handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenLinkError> {
        open_with(url, |url| open::that_detached(url))
    }
}

fn open_with<F>(url: &str, launch: F) -> Result<(), OpenLinkError>
where
    F: FnOnce(&str) -> io::Result<()>,
{
    if url.trim().is_empty() {
        return Err(OpenLinkError::MissingLink);
    }

    launch(url).map_err(OpenLinkError::Launch)?;
    tracing::debug!(url, "Handed link to the system URL handler");
    Ok(())
}
