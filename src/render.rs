//! Browser rendering collaborator.
//!
//! Some sites only serve real content to a full browser. Rendering is done
//! by an external automation backend; this crate only defines the seam it
//! plugs into.

use async_trait::async_trait;

/// Renders a page in a real browser and reports its title.
///
/// Implementations own their browser session and must release it on every
/// exit path, including errors and cancellation of the returned future.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Runs the renderer's navigation and returns the resulting page title.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser could not be started or the page did
    /// not load.
    async fn render_page_title(&self) -> anyhow::Result<String>;
}
