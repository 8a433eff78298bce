use crate::actions::Action;
use crate::state::{AppState, Section};
use std::convert::Infallible;
use std::rc::Rc;
use tiny_store::shared;

/// Reducer - pure function that produces new state from current state + action
///
/// Only the section an action targets gets a new `Rc`; the other one is
/// carried over as is.
pub fn reduce(state: Option<Rc<AppState>>, action: &Action) -> Result<Rc<AppState>, Infallible> {
    let Some(state) = state else {
        log::debug!("Building initial page state");
        return Ok(Rc::new(AppState::default()));
    };

    let next = match action {
        Action::UpdateTitleText { text } => shared::with(&state, |page| {
            page.title = update_section(&page.title, |title| title.text = text.clone());
        }),
        Action::UpdateTitleColor { color } => shared::with(&state, |page| {
            page.title = update_section(&page.title, |title| title.color = color.clone());
        }),
        Action::UpdateContentText { text } => shared::with(&state, |page| {
            page.content = update_section(&page.content, |content| content.text = text.clone());
        }),
        Action::UpdateContentColor { color } => shared::with(&state, |page| {
            page.content = update_section(&page.content, |content| content.color = color.clone());
        }),
        Action::Init => state,
    };

    Ok(next)
}

fn update_section(section: &Rc<Section>, update: impl FnOnce(&mut Section)) -> Rc<Section> {
    shared::with(section, update)
}
