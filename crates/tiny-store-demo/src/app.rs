use crate::actions::Action;
use crate::reducer::reduce;
use crate::render::Renderer;
use crate::state::AppState;
use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tiny_store::Store;

pub type PageStore = Store<AppState, Action>;

/// Build the page store
pub fn create_store() -> Result<PageStore> {
    Ok(Store::new(reduce)?)
}

/// Run the demo: first render, subscribe the renderer, replay `actions`
///
/// Returns the renderer once the store is gone, so callers can inspect what
/// was written.
pub fn run<W: Write + 'static>(actions: &[Action], out: W) -> Result<Renderer<W>> {
    let store = create_store()?;
    let renderer = Rc::new(RefCell::new(Renderer::new(out)));

    renderer.borrow_mut().render(&store.get_state())?;

    {
        let weak = store.downgrade();
        let renderer = Rc::clone(&renderer);
        store.subscribe(move || {
            let Some(store) = weak.upgrade() else {
                return;
            };
            if let Err(e) = renderer.borrow_mut().render(&store.get_state()) {
                log::error!("Render failed: {}", e);
            }
        });
    }

    for action in actions {
        log::debug!("Action: {:?}", action);
        store.dispatch(action.clone())?;
    }
    log::info!(
        "Dispatched {} action(s), rendered {} time(s)",
        store.dispatch_count(),
        renderer.borrow().renders()
    );

    drop(store);
    Rc::try_unwrap(renderer)
        .map(RefCell::into_inner)
        .map_err(|_| anyhow!("renderer still referenced after the store was dropped"))
}
