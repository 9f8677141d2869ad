//! Document-level pointer-down listener scoped to a widget's lifetime.
//!
//! The listener is held by a [`ListenerGuard`]; dropping the guard detaches
//! it. Each dropdown owns its own guard and checks containment against its
//! own root only, so several dropdowns on one page never interfere.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

/// Event used for outside-click detection
pub const POINTER_DOWN_EVENT: &str = "mousedown";

/// Something event listeners can be attached to and detached from.
pub trait ListenerHost {
    type Listener;

    fn attach(&self, event: &'static str, listener: &Self::Listener);
    fn detach(&self, event: &'static str, listener: &Self::Listener);
}

/// Keeps `listener` attached to `host` until dropped.
pub struct ListenerGuard<H: ListenerHost> {
    host: H,
    event: &'static str,
    listener: H::Listener,
}

impl<H: ListenerHost> ListenerGuard<H> {
    pub fn register(host: H, event: &'static str, listener: H::Listener) -> Self {
        host.attach(event, &listener);
        Self {
            host,
            event,
            listener,
        }
    }
}

impl<H: ListenerHost> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        self.host.detach(self.event, &self.listener);
    }
}

impl ListenerHost for Document {
    type Listener = Closure<dyn FnMut(Event)>;

    fn attach(&self, event: &'static str, listener: &Self::Listener) {
        if let Err(err) =
            self.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach '{}' listener: {:?}", event, err);
        }
    }

    fn detach(&self, event: &'static str, listener: &Self::Listener) {
        if let Err(err) =
            self.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to detach '{}' listener: {:?}", event, err);
        }
    }
}

pub type DocumentListener = ListenerGuard<Document>;

/// Pointer-down handler: `on_press` gets whether `contains` holds for the target.
pub fn press_handler<T>(
    contains: impl Fn(&T) -> bool,
    on_press: impl Fn(bool),
) -> impl Fn(T) {
    move |target| on_press(contains(&target))
}

/// Listen for pointer-down anywhere in the document.
///
/// `on_press` receives `true` when the press landed inside `root`.
/// Returns `None` outside a browser.
pub fn watch_pointer_down(
    root: Element,
    on_press: impl Fn(bool) + 'static,
) -> Option<DocumentListener> {
    let document = web_sys::window()?.document()?;

    let handler = press_handler(
        move |ev: &Event| {
            let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
            root.contains(target.as_ref())
        },
        on_press,
    );
    let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    Some(ListenerGuard::register(document, POINTER_DOWN_EVENT, listener))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::ui::select::state::SelectState;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Handler = Rc<dyn Fn(u32)>;

    /// In-memory document: targets are plain node ids.
    #[derive(Clone, Default)]
    struct FakeDocument {
        listeners: Rc<RefCell<Vec<(&'static str, usize, Handler)>>>,
        next_id: Rc<Cell<usize>>,
    }

    struct FakeListener {
        id: usize,
        handler: Handler,
    }

    impl ListenerHost for FakeDocument {
        type Listener = FakeListener;

        fn attach(&self, event: &'static str, listener: &FakeListener) {
            self.listeners
                .borrow_mut()
                .push((event, listener.id, listener.handler.clone()));
        }

        fn detach(&self, event: &'static str, listener: &FakeListener) {
            let mut listeners = self.listeners.borrow_mut();
            if let Some(pos) = listeners
                .iter()
                .position(|(e, id, _)| *e == event && *id == listener.id)
            {
                listeners.remove(pos);
            }
        }
    }

    impl FakeDocument {
        /// Each listener gets its own identity, like distinct JS closures.
        fn listener(&self, handler: Handler) -> FakeListener {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            FakeListener { id, handler }
        }

        fn dispatch(&self, event: &'static str, target: u32) {
            let handlers: Vec<Handler> = self
                .listeners
                .borrow()
                .iter()
                .filter(|(e, _, _)| *e == event)
                .map(|(_, _, h)| h.clone())
                .collect();
            for handler in handlers {
                handler(target);
            }
        }

        fn count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    struct MountedSelect {
        state: Rc<Cell<SelectState>>,
        guard: Option<ListenerGuard<FakeDocument>>,
    }

    impl MountedSelect {
        fn open(&self) {
            self.state.set(SelectState::Open);
        }

        fn is_open(&self) -> bool {
            self.state.get().is_open()
        }

        fn unmount(&mut self) {
            self.guard = None;
        }
    }

    fn mount(doc: &FakeDocument, nodes: Vec<u32>) -> MountedSelect {
        let state = Rc::new(Cell::new(SelectState::default()));
        let handler_state = state.clone();
        let handler: Handler = Rc::new(press_handler(
            move |target: &u32| nodes.contains(target),
            move |inside| {
                let mut next = handler_state.get();
                next.pointer_down(inside);
                handler_state.set(next);
            },
        ));
        let guard = ListenerGuard::register(doc.clone(), POINTER_DOWN_EVENT, doc.listener(handler));
        MountedSelect {
            state,
            guard: Some(guard),
        }
    }

    // node ids: 1 = root, 2 = trigger, 3 = content panel, 4 = item
    const WIDGET_A: [u32; 4] = [1, 2, 3, 4];
    const WIDGET_B: [u32; 4] = [11, 12, 13, 14];
    const PAGE_BODY: u32 = 99;

    #[test]
    fn test_guard_detaches_on_drop() {
        let doc = FakeDocument::default();
        let mut select = mount(&doc, WIDGET_A.to_vec());
        assert_eq!(doc.count(), 1);

        select.unmount();
        assert_eq!(doc.count(), 0);
    }

    #[test]
    fn test_reregistering_replaces_previous_listener() {
        let doc = FakeDocument::default();
        let mut slot = Some(mount(&doc, WIDGET_A.to_vec()));
        for _ in 0..5 {
            slot = Some(mount(&doc, WIDGET_A.to_vec()));
        }
        assert_eq!(doc.count(), 1);
        drop(slot);
        assert_eq!(doc.count(), 0);
    }

    #[test]
    fn test_detach_removes_only_its_own_listener() {
        let doc = FakeDocument::default();
        let first = mount(&doc, WIDGET_A.to_vec());
        let second = mount(&doc, WIDGET_A.to_vec());
        second.open();

        drop(first);
        doc.dispatch(POINTER_DOWN_EVENT, PAGE_BODY);

        assert_eq!(doc.count(), 1);
        assert!(!second.is_open());
    }

    #[test]
    fn test_press_handler_reports_containment() {
        let presses = RefCell::new(Vec::new());
        let handle = press_handler(
            |target: &u32| WIDGET_A.contains(target),
            |inside| presses.borrow_mut().push(inside),
        );

        handle(4);
        handle(PAGE_BODY);
        handle(12);

        assert_eq!(*presses.borrow(), vec![true, false, false]);
    }

    #[test]
    fn test_outside_press_closes() {
        let doc = FakeDocument::default();
        let select = mount(&doc, WIDGET_A.to_vec());
        select.open();

        doc.dispatch(POINTER_DOWN_EVENT, PAGE_BODY);

        assert!(!select.is_open());
    }

    #[test]
    fn test_press_on_content_panel_keeps_open() {
        let doc = FakeDocument::default();
        let select = mount(&doc, WIDGET_A.to_vec());
        select.open();

        doc.dispatch(POINTER_DOWN_EVENT, 3);

        assert!(select.is_open());
    }

    #[test]
    fn test_other_events_ignored() {
        let doc = FakeDocument::default();
        let select = mount(&doc, WIDGET_A.to_vec());
        select.open();

        doc.dispatch("keydown", PAGE_BODY);

        assert!(select.is_open());
    }

    #[test]
    fn test_each_instance_checks_its_own_root() {
        let doc = FakeDocument::default();
        let a = mount(&doc, WIDGET_A.to_vec());
        let b = mount(&doc, WIDGET_B.to_vec());
        a.open();
        b.open();

        doc.dispatch(POINTER_DOWN_EVENT, 2);

        assert!(a.is_open());
        assert!(!b.is_open());
    }

    #[test]
    fn test_unmounted_instance_leaves_others_working() {
        let doc = FakeDocument::default();
        let mut a = mount(&doc, WIDGET_A.to_vec());
        let b = mount(&doc, WIDGET_B.to_vec());
        a.open();
        b.open();

        a.unmount();
        doc.dispatch(POINTER_DOWN_EVENT, PAGE_BODY);

        assert_eq!(doc.count(), 1);
        assert!(!b.is_open());
        // no listener left, so the unmounted state was never touched
        assert!(a.is_open());
    }
}
