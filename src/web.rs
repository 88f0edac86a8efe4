//! Browser binding: DOM-backed handles, listener wiring and wasm exports.
//!
//! The container listens for `mousemove` and `mouseleave`; both closures
//! share one [`TiltController`] through `Rc<RefCell<_>>`. Events on the
//! page's main thread run to completion one at a time, so the borrow is
//! never contended.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::controller::{Container, TiltController, Visual};
use crate::error::TiltError;
use crate::geometry::Rect;
use crate::input::PointerEvent;
use crate::options::TiltOptions;
use crate::tilt::Tilt;

const MOVE_EVENT: &str = "mousemove";
const LEAVE_EVENT: &str = "mouseleave";

/// Container backed by a DOM element's bounding client rect.
pub struct DomContainer {
    element: Element,
}

impl DomContainer {
    /// Wrap a DOM element.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The wrapped element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Container for DomContainer {
    fn bounding_rect(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }
}

/// Visual whose inline `transform` style receives the tilt.
pub struct DomVisual {
    element: HtmlElement,
}

impl DomVisual {
    /// Wrap an HTML element.
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl Visual for DomVisual {
    fn set_orientation(&mut self, tilt: Tilt) {
        if let Err(e) = self
            .element
            .style()
            .set_property("transform", &tilt.to_css_transform())
        {
            log::warn!("failed to set transform: {e:?}");
        }
    }
}

type DomController = TiltController<DomContainer, DomVisual>;
type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// A controller wired to its container's pointer events.
///
/// Dropping the binding removes both listeners and resets the visual.
pub struct TiltBinding {
    controller: Rc<RefCell<DomController>>,
    target: Element,
    on_move: MouseClosure,
    on_leave: MouseClosure,
    attached: bool,
}

impl TiltBinding {
    /// Wire `controller` to `mousemove` / `mouseleave` on its container.
    pub fn attach(controller: DomController) -> Result<Self, TiltError> {
        let target = controller.container().element().clone();
        let controller = Rc::new(RefCell::new(controller));

        let move_ctrl = Rc::clone(&controller);
        let on_move =
            Closure::<dyn FnMut(MouseEvent)>::new(move |evt: MouseEvent| {
                if let Ok(mut ctrl) = move_ctrl.try_borrow_mut() {
                    let _ = ctrl.handle_event(PointerEvent::from(&evt));
                }
            });

        let leave_ctrl = Rc::clone(&controller);
        let on_leave =
            Closure::<dyn FnMut(MouseEvent)>::new(move |_evt: MouseEvent| {
                if let Ok(mut ctrl) = leave_ctrl.try_borrow_mut() {
                    let _ = ctrl.handle_event(PointerEvent::Left);
                }
            });

        target
            .add_event_listener_with_callback(
                MOVE_EVENT,
                on_move.as_ref().unchecked_ref(),
            )
            .map_err(|e| TiltError::Listener(format!("{e:?}")))?;
        if let Err(e) = target.add_event_listener_with_callback(
            LEAVE_EVENT,
            on_leave.as_ref().unchecked_ref(),
        ) {
            let _ = target.remove_event_listener_with_callback(
                MOVE_EVENT,
                on_move.as_ref().unchecked_ref(),
            );
            return Err(TiltError::Listener(format!("{e:?}")));
        }

        Ok(Self {
            controller,
            target,
            on_move,
            on_leave,
            attached: true,
        })
    }

    /// Remove both listeners and reset the visual to neutral.
    pub fn detach(mut self) -> Result<(), TiltError> {
        self.unlisten()
    }

    /// Keep the listeners for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    fn unlisten(&mut self) -> Result<(), TiltError> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;
        let moved = self.target.remove_event_listener_with_callback(
            MOVE_EVENT,
            self.on_move.as_ref().unchecked_ref(),
        );
        let left = self.target.remove_event_listener_with_callback(
            LEAVE_EVENT,
            self.on_leave.as_ref().unchecked_ref(),
        );
        if let Ok(mut ctrl) = self.controller.try_borrow_mut() {
            let _ = ctrl.pointer_left();
        }
        log::info!("tilt detached");
        moved
            .and(left)
            .map_err(|e| TiltError::Listener(format!("{e:?}")))
    }
}

impl Drop for TiltBinding {
    fn drop(&mut self) {
        if let Err(e) = self.unlisten() {
            log::warn!("{e}");
        }
    }
}

/// Resolve both selectors in `document` and attach a controller.
///
/// The visual is looked up inside the container first so that several
/// cards on one page can share a visual selector.
pub fn bind(
    document: &Document,
    options: &TiltOptions,
) -> Result<TiltBinding, TiltError> {
    options.validate()?;

    let container_sel = options.container_selector.as_str();
    let container = document
        .query_selector(container_sel)
        .map_err(|e| invalid_selector(container_sel, &e))?
        .ok_or_else(|| TiltError::ContainerNotFound {
            selector: container_sel.to_owned(),
        })?;

    let visual_sel = options.visual_selector.as_str();
    let scoped = container
        .query_selector(visual_sel)
        .map_err(|e| invalid_selector(visual_sel, &e))?;
    let visual = match scoped {
        Some(el) => el,
        None => document
            .query_selector(visual_sel)
            .map_err(|e| invalid_selector(visual_sel, &e))?
            .ok_or_else(|| TiltError::VisualNotFound {
                selector: visual_sel.to_owned(),
            })?,
    };
    let visual = visual.dyn_into::<HtmlElement>().map_err(|_| {
        TiltError::NotHtmlElement {
            selector: visual_sel.to_owned(),
        }
    })?;

    let controller = TiltController::new(
        DomContainer::new(container),
        DomVisual::new(visual),
        options.max_tilt_deg,
    );
    let binding = TiltBinding::attach(controller)?;
    log::info!(
        "tilt bound: `{container_sel}` -> `{visual_sel}` ({} deg)",
        options.max_tilt_deg
    );
    Ok(binding)
}

fn invalid_selector(selector: &str, err: &JsValue) -> TiltError {
    TiltError::InvalidSelector {
        selector: selector.to_owned(),
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

fn current_document() -> Result<Document, TiltError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(TiltError::NoDocument)
}

fn to_js(err: &TiltError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

// ── wasm exports ─────────────────────────────────────────────────────────

/// Module start: panic hook, console logger, startup diagnostic.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (module instantiated twice) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("viso-tilt {} loaded", env!("CARGO_PKG_VERSION"));
}

/// JS handle for a live binding.
#[wasm_bindgen]
pub struct TiltHandle {
    binding: Option<TiltBinding>,
}

#[wasm_bindgen]
impl TiltHandle {
    /// Remove the listeners and reset the visual. Further calls are
    /// no-ops.
    pub fn detach(&mut self) -> Result<(), JsValue> {
        self.binding
            .take()
            .map_or(Ok(()), |binding| binding.detach().map_err(|e| to_js(&e)))
    }

    /// Keep the listeners for the lifetime of the page, independent of
    /// this handle. The handle is detached afterwards.
    #[wasm_bindgen(js_name = keepForPage)]
    pub fn keep_for_page(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.forget();
        }
    }

    /// Whether this handle still owns the listeners.
    #[wasm_bindgen(getter, js_name = isAttached)]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }
}

/// Bind a tilt effect using JSON-encoded [`TiltOptions`] (defaults when
/// omitted).
#[wasm_bindgen(js_name = attachTilt)]
pub fn attach_tilt(options_json: Option<String>) -> Result<TiltHandle, JsValue> {
    let options = options_json
        .as_deref()
        .map_or_else(|| Ok(TiltOptions::default()), TiltOptions::from_json_str)
        .map_err(|e| to_js(&e))?;
    let document = current_document().map_err(|e| to_js(&e))?;
    let binding = bind(&document, &options).map_err(|e| to_js(&e))?;
    Ok(TiltHandle {
        binding: Some(binding),
    })
}

/// JSON schema of [`TiltOptions`], for option editors.
#[wasm_bindgen(js_name = tiltOptionsSchema)]
pub fn tilt_options_schema() -> Result<String, JsValue> {
    serde_json::to_string(&TiltOptions::json_schema())
        .map_err(|e| to_js(&TiltError::OptionsParse(e.to_string())))
}
