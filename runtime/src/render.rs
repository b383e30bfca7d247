//! Renderers observe the store after every render effect.
//!
//! A renderer receives the whole state and recomputes its output from
//! scratch. Nothing is diffed and nothing is carried between calls.

/// Error a renderer may report back to the store
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// A view notified with the current state on every render effect
///
/// Closures taking `&S` and returning `Result<(), RenderError>` are renderers:
///
/// ```
/// use tasklist_runtime::render::{RenderError, Renderer};
///
/// let mut seen = Vec::new();
/// let mut renderer = |count: &u32| -> Result<(), RenderError> {
///     seen.push(*count);
///     Ok(())
/// };
/// renderer.render(&3).unwrap();
/// drop(renderer);
/// assert_eq!(seen, vec![3]);
/// ```
pub trait Renderer<S> {
    /// Project `state` onto the rendering target
    ///
    /// # Errors
    ///
    /// Returns an error if the rendering target cannot be written.
    fn render(&mut self, state: &S) -> Result<(), RenderError>;
}

impl<S, F> Renderer<S> for F
where
    F: FnMut(&S) -> Result<(), RenderError>,
{
    fn render(&mut self, state: &S) -> Result<(), RenderError> {
        self(state)
    }
}
