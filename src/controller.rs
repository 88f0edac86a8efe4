//! Binds one container and one visual and drives the visual's orientation
//! from pointer events.
//!
//! The controller never looks anything up on its own: both handles are
//! injected at construction through the [`Container`] and [`Visual`]
//! traits, so the same logic runs against DOM elements (feature `web`) or
//! test doubles.

use glam::Vec2;

use crate::geometry::Rect;
use crate::input::PointerEvent;
use crate::tilt::{compute_tilt, Tilt};

/// Source of the container's current bounding geometry.
///
/// Queried on every move event; implementations must not cache, since
/// layout can change between events.
pub trait Container {
    /// Current on-screen rectangle, in the same space as pointer events.
    fn bounding_rect(&self) -> Rect;
}

/// Sink for the visual's orientation.
pub trait Visual {
    /// Replace the visual's orientation transform.
    fn set_orientation(&mut self, tilt: Tilt);
}

/// Last orientation the controller wrote to its visual.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TiltState {
    /// Zero rotation on both axes.
    #[default]
    Neutral,
    /// Rotated by the contained amount.
    Tilted(Tilt),
}

impl TiltState {
    /// Orientation this state corresponds to.
    #[must_use]
    pub fn tilt(&self) -> Tilt {
        match *self {
            Self::Neutral => Tilt::NEUTRAL,
            Self::Tilted(tilt) => tilt,
        }
    }
}

/// Maps pointer position over a container to a two-axis rotation of a
/// visual, and resets the rotation when the pointer leaves.
pub struct TiltController<C, V> {
    container: C,
    visual: V,
    /// Rotation in degrees at full offset from center.
    max_tilt: f32,
    state: TiltState,
}

impl<C: Container, V: Visual> TiltController<C, V> {
    /// Bind `container` and `visual` with tilt magnitude `max_tilt`
    /// (degrees).
    #[must_use]
    pub fn new(container: C, visual: V, max_tilt: f32) -> Self {
        Self {
            container,
            visual,
            max_tilt,
            state: TiltState::Neutral,
        }
    }

    /// Tilt magnitude in degrees.
    #[must_use]
    pub fn max_tilt(&self) -> f32 {
        self.max_tilt
    }

    /// Last orientation written to the visual.
    #[must_use]
    pub fn state(&self) -> TiltState {
        self.state
    }

    /// The bound container.
    #[must_use]
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Dispatch a pointer event to [`pointer_moved`](Self::pointer_moved)
    /// or [`pointer_left`](Self::pointer_left).
    pub fn handle_event(&mut self, event: PointerEvent) -> TiltState {
        match event {
            PointerEvent::Moved { x, y } => self.pointer_moved(x, y),
            PointerEvent::Left => self.pointer_left(),
        }
    }

    /// Re-query the container geometry, compute the tilt for the pointer
    /// at client position `(x, y)` and apply it.
    ///
    /// A degenerate container (zero or negative width or height) has no
    /// meaningful center; the visual is reset to neutral instead.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> TiltState {
        let rect = self.container.bounding_rect();
        let tilt = compute_tilt(Vec2::new(x, y), &rect, self.max_tilt);
        if rect.is_degenerate() || !tilt.is_finite() {
            log::warn!(
                "degenerate container {}x{}, resetting tilt",
                rect.width,
                rect.height
            );
            return self.apply(TiltState::Neutral);
        }
        log::debug!("tilt {tilt}");
        self.apply(TiltState::Tilted(tilt))
    }

    /// Reset the visual to zero rotation, whatever it was before.
    pub fn pointer_left(&mut self) -> TiltState {
        self.apply(TiltState::Neutral)
    }

    fn apply(&mut self, state: TiltState) -> TiltState {
        self.visual.set_orientation(state.tilt());
        self.state = state;
        state
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    /// Container whose geometry can be changed between events.
    #[derive(Clone)]
    struct MockContainer {
        rect: Rc<Cell<Rect>>,
        queries: Rc<Cell<u32>>,
    }

    impl MockContainer {
        fn new(rect: Rect) -> Self {
            Self {
                rect: Rc::new(Cell::new(rect)),
                queries: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Container for MockContainer {
        fn bounding_rect(&self) -> Rect {
            self.queries.set(self.queries.get() + 1);
            self.rect.get()
        }
    }

    /// Visual that records every orientation it receives.
    #[derive(Clone, Default)]
    struct RecordingVisual {
        applied: Rc<RefCell<Vec<Tilt>>>,
    }

    impl RecordingVisual {
        fn last(&self) -> Option<Tilt> {
            self.applied.borrow().last().copied()
        }
    }

    impl Visual for RecordingVisual {
        fn set_orientation(&mut self, tilt: Tilt) {
            self.applied.borrow_mut().push(tilt);
        }
    }

    fn card() -> (
        TiltController<MockContainer, RecordingVisual>,
        MockContainer,
        RecordingVisual,
    ) {
        let container = MockContainer::new(Rect::new(0.0, 0.0, 200.0, 100.0));
        let visual = RecordingVisual::default();
        let controller =
            TiltController::new(container.clone(), visual.clone(), 10.0);
        (controller, container, visual)
    }

    #[test]
    fn starts_neutral_without_writing() {
        let (controller, _, visual) = card();
        assert_eq!(controller.state(), TiltState::Neutral);
        assert!(visual.last().is_none());
    }

    #[test]
    fn move_applies_mapped_tilt() {
        let (mut controller, _, visual) = card();
        let state = controller.pointer_moved(150.0, 25.0);
        assert_eq!(state, TiltState::Tilted(Tilt::new(-5.0, -5.0)));
        assert_eq!(visual.last(), Some(Tilt::new(-5.0, -5.0)));
    }

    #[test]
    fn center_move_writes_zero_rotation() {
        let (mut controller, _, visual) = card();
        let _ = controller.pointer_moved(100.0, 50.0);
        assert!(visual.last().is_some_and(Tilt::is_neutral));
    }

    #[test]
    fn repeated_position_is_idempotent() {
        let (mut controller, _, visual) = card();
        let first = controller.pointer_moved(42.0, 77.0);
        let second = controller.pointer_moved(42.0, 77.0);
        assert_eq!(first, second);
        let applied = visual.applied.borrow();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0], applied[1]);
    }

    #[test]
    fn leave_always_resets() {
        let (mut controller, _, visual) = card();
        assert_eq!(controller.pointer_left(), TiltState::Neutral);
        assert_eq!(visual.last(), Some(Tilt::NEUTRAL));

        let _ = controller.pointer_moved(0.0, 0.0);
        assert_eq!(visual.last(), Some(Tilt::new(-10.0, 10.0)));
        assert_eq!(controller.pointer_left(), TiltState::Neutral);
        assert_eq!(visual.last(), Some(Tilt::NEUTRAL));
    }

    #[test]
    fn geometry_is_requeried_every_move() {
        let (mut controller, container, visual) = card();
        let _ = controller.pointer_moved(150.0, 25.0);
        // Container scrolled 100px to the right.
        container.rect.set(Rect::new(100.0, 0.0, 200.0, 100.0));
        let _ = controller.pointer_moved(150.0, 25.0);
        assert_eq!(container.queries.get(), 2);
        assert_eq!(visual.last(), Some(Tilt::new(-5.0, 5.0)));
    }

    #[test]
    fn leave_does_not_query_geometry() {
        let (mut controller, container, _) = card();
        let _ = controller.pointer_left();
        assert_eq!(container.queries.get(), 0);
    }

    #[test]
    fn degenerate_container_resets_instead_of_propagating() {
        let (mut controller, container, visual) = card();
        let _ = controller.pointer_moved(150.0, 25.0);
        container.rect.set(Rect::new(0.0, 0.0, 0.0, 100.0));
        let state = controller.pointer_moved(10.0, 10.0);
        assert_eq!(state, TiltState::Neutral);
        let last = visual.last();
        assert_eq!(last, Some(Tilt::NEUTRAL));
        assert!(last.is_some_and(Tilt::is_finite));
    }

    #[test]
    fn negative_width_container_resets() {
        let container = MockContainer::new(Rect::new(0.0, 0.0, -200.0, 100.0));
        let visual = RecordingVisual::default();
        let mut controller =
            TiltController::new(container, visual.clone(), 10.0);
        // The raw mapping is finite but 2.5x the magnitude.
        let raw = compute_tilt(
            Vec2::new(150.0, 25.0),
            &Rect::new(0.0, 0.0, -200.0, 100.0),
            10.0,
        );
        assert!(raw.is_finite());
        assert_eq!(raw.rotate_y, 25.0);

        let state = controller.pointer_moved(150.0, 25.0);
        assert_eq!(state, TiltState::Neutral);
        assert_eq!(visual.last(), Some(Tilt::NEUTRAL));
    }

    #[test]
    fn negative_height_container_resets() {
        let (mut controller, container, visual) = card();
        let _ = controller.pointer_moved(150.0, 25.0);
        container.rect.set(Rect::new(0.0, 0.0, 200.0, -100.0));
        assert_eq!(controller.pointer_moved(150.0, 25.0), TiltState::Neutral);
        assert_eq!(visual.last(), Some(Tilt::NEUTRAL));
    }

    #[test]
    fn handle_event_dispatches() {
        let (mut controller, _, visual) = card();
        let state =
            controller.handle_event(PointerEvent::Moved { x: 150.0, y: 25.0 });
        assert_eq!(state.tilt(), Tilt::new(-5.0, -5.0));
        let state = controller.handle_event(PointerEvent::Left);
        assert_eq!(state, TiltState::Neutral);
        assert_eq!(visual.applied.borrow().len(), 2);
    }

    #[test]
    fn magnitude_scales_linearly() {
        let container = MockContainer::new(Rect::new(0.0, 0.0, 200.0, 100.0));
        let mut controller =
            TiltController::new(container, RecordingVisual::default(), 20.0);
        let state = controller.pointer_moved(150.0, 25.0);
        assert_eq!(state.tilt(), Tilt::new(-10.0, -10.0));
        assert_eq!(controller.max_tilt(), 20.0);
    }
}
