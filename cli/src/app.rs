//! Interactive session: reads commands, drives the view, prints frames.

use std::io::{self, BufRead, Write};

use todo_core::{render, Locale, Outcome, RecordClient, RecordId, TodoView, Transport};
use tracing::debug;

use crate::command::{Command, HELP};

pub struct Session<T> {
    view: TodoView,
    transport: T,
}

impl<T: Transport> Session<T> {
    /// Mount the view and run its initial load.
    pub fn start(client: RecordClient, locale: Locale, transport: T) -> (Self, Outcome) {
        let (mut view, ticket) = TodoView::mount(client, locale);
        let response = transport.execute(ticket.request().clone());
        let outcome = view.complete_load(ticket, response);
        (Self { view, transport }, outcome)
    }

    pub fn view(&self) -> &TodoView {
        &self.view
    }

    /// Apply a view command. Returns the outcome of network-bound commands.
    pub fn apply(&mut self, command: Command) -> Option<Outcome> {
        match command {
            Command::Set(field, value) => {
                self.view.set_field(field, value);
                None
            }
            Command::Create => Some(self.view.submit_with(&self.transport)),
            Command::Delete(text) => {
                // Ids not on screen are still sent; the server decides.
                let id = self
                    .view
                    .find_record(&text)
                    .map(|record| record.id.clone())
                    .unwrap_or_else(|| RecordId::from(text));
                Some(self.view.remove_with(&self.transport, id))
            }
            Command::Close => {
                self.view.dismiss_modal();
                None
            }
            Command::Reload => Some(self.view.load_with(&self.transport)),
            Command::Help | Command::Quit => None,
        }
    }

    /// Read commands until `quit` or end of input, then unmount the view.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
        initial: Outcome,
    ) -> io::Result<()> {
        self.report(&mut out, Some(&initial))?;
        for line in input.lines() {
            let line = line?;
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    write!(out, "> ")?;
                    out.flush()?;
                    continue;
                }
            };
            debug!(?command, "command");
            match command {
                Command::Quit => break,
                Command::Help => {
                    writeln!(out, "{HELP}")?;
                    write!(out, "> ")?;
                    out.flush()?;
                }
                command => {
                    let outcome = self.apply(command);
                    self.report(&mut out, outcome.as_ref())?;
                }
            }
        }
        self.view.unmount();
        writeln!(out)?;
        out.flush()
    }

    fn report<W: Write>(&self, out: &mut W, outcome: Option<&Outcome>) -> io::Result<()> {
        if let Some(notice) = outcome.and_then(Outcome::notice) {
            writeln!(out, "! {}", notice.text(self.view.locale()))?;
        }
        writeln!(out, "{}", render(&self.view))?;
        write!(out, "> ")?;
        out.flush()
    }
}
