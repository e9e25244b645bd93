//! The records view: form draft, record list and confirmation modal.
//!
//! # Design
//! The view never performs I/O. Every network-bound operation is split in
//! two: `begin_*` validates and hands back a `Ticket` carrying the
//! `HttpRequest`, and `complete_*` takes the ticket back together with the
//! host's response and applies it. Hosts that are happy to block can use the
//! `*_with` helpers, which run both halves through a `Transport`.
//!
//! Tickets may be completed in any order. Each completion applies to the
//! list as it is at that moment, so nothing is coordinated between requests
//! in flight: a list response that lands after a create simply replaces the
//! list with whatever the server returned.
//!
//! `unmount` bumps a generation counter. A ticket issued under an older
//! generation is discarded on completion, so responses that arrive after
//! teardown never touch state.

use tracing::{debug, info, warn};

use crate::client::RecordClient;
use crate::draft::{Draft, Field};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::locale::{Locale, Message};
use crate::modal::Modal;
use crate::outcome::{Notice, Outcome, Rejection};
use crate::types::{Record, RecordId};
use crate::validation::validate_draft;

/// State of the record list as the view knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Record>),
    /// The initial read failed; holds the error text.
    Failed(String),
}

impl LoadState {
    /// Records currently shown. Empty unless loaded.
    pub fn records(&self) -> &[Record] {
        match self {
            LoadState::Loaded(records) => records,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    /// Append an acknowledged record. A list that never loaded starts over
    /// from this record.
    fn push(&mut self, record: Record) {
        match self {
            LoadState::Loaded(records) => records.push(record),
            LoadState::Loading | LoadState::Failed(_) => *self = LoadState::Loaded(vec![record]),
        }
    }

    fn remove(&mut self, id: &RecordId) {
        if let LoadState::Loaded(records) = self {
            records.retain(|record| &record.id != id);
        }
    }
}

/// Marker for a pending list request.
#[derive(Debug)]
pub struct Load;

/// Marker for a pending create request.
#[derive(Debug)]
pub struct Create;

/// A pending delete request and the record it targets.
#[derive(Debug)]
pub struct Delete {
    id: RecordId,
}

/// A request issued by the view that still awaits its response.
#[derive(Debug)]
#[must_use = "a ticket must be completed for the view to see the response"]
pub struct Ticket<Op> {
    generation: u64,
    request: HttpRequest,
    op: Op,
}

impl<Op> Ticket<Op> {
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }
}

impl Ticket<Delete> {
    pub fn id(&self) -> &RecordId {
        &self.op.id
    }
}

#[derive(Debug)]
pub struct TodoView {
    client: RecordClient,
    locale: Locale,
    draft: Draft,
    email_error: Option<String>,
    records: LoadState,
    modal: Modal,
    generation: u64,
    mounted: bool,
}

impl TodoView {
    /// Create the view and issue the initial list request.
    pub fn mount(client: RecordClient, locale: Locale) -> (Self, Ticket<Load>) {
        let mut view = Self {
            client,
            locale,
            draft: Draft::default(),
            email_error: None,
            records: LoadState::Loading,
            modal: Modal::Closed,
            generation: 0,
            mounted: true,
        };
        let ticket = view.begin_load();
        (view, ticket)
    }

    /// Tear the view down. Outstanding tickets are discarded on completion.
    pub fn unmount(&mut self) {
        if self.mounted {
            debug!("view unmounted");
        }
        self.mounted = false;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.records
    }

    pub fn records(&self) -> &[Record] {
        self.records.records()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Look up a shown record by the text form of its id.
    pub fn find_record(&self, id: &str) -> Option<&Record> {
        self.records()
            .iter()
            .find(|record| record.id.to_string() == id)
    }

    /// Replace one draft field verbatim. The email error is left alone; only
    /// a successful create clears it.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    pub fn dismiss_modal(&mut self) {
        self.modal.dismiss();
    }

    pub fn begin_load(&mut self) -> Ticket<Load> {
        if !matches!(self.records, LoadState::Loaded(_)) {
            self.records = LoadState::Loading;
        }
        let request = self.client.build_list_records();
        self.issue(request, Load)
    }

    pub fn complete_load(
        &mut self,
        ticket: Ticket<Load>,
        response: Result<HttpResponse, ApiError>,
    ) -> Outcome {
        if !self.accepts(&ticket) {
            return discard(&ticket);
        }
        match response.and_then(|r| self.client.parse_list_records(r)) {
            Ok(records) => {
                let count = records.len();
                debug!(count, "records loaded");
                self.records = LoadState::Loaded(records);
                Outcome::Loaded { count }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch records");
                // A reload failure keeps the list that is already on screen.
                if !matches!(self.records, LoadState::Loaded(_)) {
                    self.records = LoadState::Failed(err.to_string());
                }
                Outcome::Failed(Notice::LoadFailed)
            }
        }
    }

    /// Validate the draft and build the create request.
    ///
    /// On `Err` the returned outcome is what the host should report: a
    /// rejection when validation failed (an invalid email also sets the
    /// inline error), or `CreateFailed` if the payload could not be encoded.
    /// No request exists in either case.
    pub fn begin_submit(&mut self) -> Result<Ticket<Create>, Outcome> {
        let input = match validate_draft(&self.draft) {
            Ok(input) => input,
            Err(rejection) => {
                debug!(?rejection, "submit rejected");
                if rejection == Rejection::InvalidEmail {
                    self.email_error = Some(self.locale.text(Message::InvalidEmail).to_string());
                }
                return Err(Outcome::Rejected(rejection));
            }
        };
        match self.client.build_create_record(&input) {
            Ok(request) => Ok(self.issue(request, Create)),
            Err(err) => {
                warn!(error = %err, "failed to encode record");
                Err(Outcome::Failed(Notice::CreateFailed))
            }
        }
    }

    pub fn complete_submit(
        &mut self,
        ticket: Ticket<Create>,
        response: Result<HttpResponse, ApiError>,
    ) -> Outcome {
        if !self.accepts(&ticket) {
            return discard(&ticket);
        }
        match response.and_then(|r| self.client.parse_create_record(r)) {
            Ok(record) => {
                info!(id = %record.id, "record created");
                self.records.push(record.clone());
                self.draft.clear();
                self.email_error = None;
                self.modal.open(self.locale.text(Message::CreatedTitle));
                Outcome::Created(record)
            }
            Err(err) => {
                warn!(error = %err, "failed to add record");
                Outcome::Failed(Notice::CreateFailed)
            }
        }
    }

    /// Build the delete request. The id does not have to be in the list.
    ///
    /// `Err` carries `DeleteFailed` when no URL can be formed for the id;
    /// nothing is sent in that case.
    pub fn begin_remove(&self, id: RecordId) -> Result<Ticket<Delete>, Outcome> {
        match self.client.build_delete_record(&id) {
            Ok(request) => Ok(self.issue(request, Delete { id })),
            Err(err) => {
                warn!(%id, error = %err, "failed to build delete request");
                Err(Outcome::Failed(Notice::DeleteFailed))
            }
        }
    }

    pub fn complete_remove(
        &mut self,
        ticket: Ticket<Delete>,
        response: Result<HttpResponse, ApiError>,
    ) -> Outcome {
        if !self.accepts(&ticket) {
            return discard(&ticket);
        }
        match response.and_then(|r| self.client.parse_delete_record(r)) {
            Ok(()) => {
                let id = ticket.op.id;
                info!(%id, "record deleted");
                self.records.remove(&id);
                self.modal.open(self.locale.text(Message::DeletedTitle));
                Outcome::Deleted(id)
            }
            Err(err) => {
                warn!(id = %ticket.op.id, error = %err, "failed to delete record");
                Outcome::Failed(Notice::DeleteFailed)
            }
        }
    }

    /// Reload the list through `transport`, blocking until it answers.
    pub fn load_with<T: Transport + ?Sized>(&mut self, transport: &T) -> Outcome {
        if !self.mounted {
            return Outcome::Discarded;
        }
        let ticket = self.begin_load();
        let response = transport.execute(ticket.request().clone());
        self.complete_load(ticket, response)
    }

    pub fn submit_with<T: Transport + ?Sized>(&mut self, transport: &T) -> Outcome {
        if !self.mounted {
            return Outcome::Discarded;
        }
        match self.begin_submit() {
            Ok(ticket) => {
                let response = transport.execute(ticket.request().clone());
                self.complete_submit(ticket, response)
            }
            Err(outcome) => outcome,
        }
    }

    pub fn remove_with<T: Transport + ?Sized>(&mut self, transport: &T, id: RecordId) -> Outcome {
        if !self.mounted {
            return Outcome::Discarded;
        }
        match self.begin_remove(id) {
            Ok(ticket) => {
                let response = transport.execute(ticket.request().clone());
                self.complete_remove(ticket, response)
            }
            Err(outcome) => outcome,
        }
    }

    fn issue<Op>(&self, request: HttpRequest, op: Op) -> Ticket<Op> {
        debug!(method = request.method.as_str(), url = %request.url, "issuing request");
        Ticket {
            generation: self.generation,
            request,
            op,
        }
    }

    fn accepts<Op>(&self, ticket: &Ticket<Op>) -> bool {
        self.mounted && ticket.generation == self.generation
    }
}

fn discard<Op>(ticket: &Ticket<Op>) -> Outcome {
    warn!(
        method = ticket.request.method.as_str(),
        url = %ticket.request.url,
        "response arrived after teardown, discarded"
    );
    Outcome::Discarded
}
