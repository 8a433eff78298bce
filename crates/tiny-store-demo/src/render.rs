//! Page renderer
//!
//! Keeps the last rendered state and compares references level by level:
//! identical page → nothing to do; otherwise only sections whose `Rc`
//! changed are written out.

use crate::state::{AppState, Section};
use std::io::{self, Write};
use std::rc::Rc;
use tiny_store::shared;

/// Parts of the page written by one render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    App,
    Title,
    Content,
}

pub struct Renderer<W> {
    out: W,
    previous: Option<Rc<AppState>>,
    renders: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous: None,
            renders: 0,
        }
    }

    /// Render `state`, skipping everything that has not changed since last time
    pub fn render(&mut self, state: &Rc<AppState>) -> io::Result<Vec<Part>> {
        let mut rendered = Vec::new();
        if !shared::changed(self.previous.as_ref(), state) {
            log::trace!("Page unchanged, skipping render");
            return Ok(rendered);
        }

        log::debug!("render app...");
        rendered.push(Part::App);

        let old = self.previous.as_deref();
        if shared::changed(old.map(|page| &page.title), &state.title) {
            log::debug!("render title...");
            write_section(&mut self.out, "title", &state.title)?;
            rendered.push(Part::Title);
        }
        if shared::changed(old.map(|page| &page.content), &state.content) {
            log::debug!("render content...");
            write_section(&mut self.out, "content", &state.content)?;
            rendered.push(Part::Content);
        }
        self.out.flush()?;

        self.previous = Some(Rc::clone(state));
        self.renders += 1;
        Ok(rendered)
    }

    /// Number of render calls that wrote anything
    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_section<W: Write>(out: &mut W, id: &str, section: &Section) -> io::Result<()> {
    writeln!(out, "[{}] {} ({})", id, section.text, section.color)
}
