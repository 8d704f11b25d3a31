//! Application state for the search plugin's routes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fundation_search::{Search, SearchEngine};

use crate::view::ViewRenderer;

/// Shared state available to the plugin's handlers.
///
/// Holds the search model handed to the plugin, the renderer, and the
/// resolved view path.
///
/// # Type Parameters
///
/// * `E` - The search engine type (must implement [`SearchEngine`])
pub struct AppState<E> {
    /// The search model.
    search: Arc<Search<E>>,

    /// Renders the search page.
    renderer: Arc<dyn ViewRenderer>,

    /// View rendered by the search page.
    view: Arc<PathBuf>,
}

// Manually implement Clone since E is wrapped in Arc and doesn't need to be Clone
impl<E> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            search: Arc::clone(&self.search),
            renderer: Arc::clone(&self.renderer),
            view: Arc::clone(&self.view),
        }
    }
}

impl<E: SearchEngine> AppState<E> {
    /// Creates a new AppState.
    pub fn new(search: Arc<Search<E>>, renderer: Arc<dyn ViewRenderer>, view: PathBuf) -> Self {
        Self {
            search,
            renderer,
            view: Arc::new(view),
        }
    }

    /// Returns the search model.
    pub fn search(&self) -> &Search<E> {
        &self.search
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &dyn ViewRenderer {
        self.renderer.as_ref()
    }

    /// Returns the view rendered by the search page.
    pub fn view(&self) -> &Path {
        &self.view
    }
}
