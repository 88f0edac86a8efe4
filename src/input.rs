//! Pointer events consumed by the tilt controller.

/// Platform-agnostic pointer events.
///
/// These are fed into a [`TiltController`](crate::controller::TiltController)
/// which turns them into orientation updates on its visual.
///
/// # Example
///
/// ```ignore
/// let state = controller.handle_event(PointerEvent::Moved { x: 150.0, y: 25.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved while over the container.
    Moved {
        /// Horizontal client-space position in CSS pixels.
        x: f32,
        /// Vertical client-space position in CSS pixels.
        y: f32,
    },
    /// Pointer left the container.
    Left,
}

#[cfg(feature = "web")]
impl From<&web_sys::MouseEvent> for PointerEvent {
    fn from(event: &web_sys::MouseEvent) -> Self {
        // `client_x`/`client_y` are whole CSS pixels; sub-pixel positions
        // are already truncated by the DOM.
        Self::Moved {
            x: event.client_x() as f32,
            y: event.client_y() as f32,
        }
    }
}
