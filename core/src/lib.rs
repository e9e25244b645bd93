//! Sans-IO core of the todo records view.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the stateless
//! `RecordClient` sits `TodoView`, which owns the create form, the record
//! list and the confirmation modal, and reports every operation as an
//! `Outcome` the host can inspect.
//!
//! # Design
//! - `RecordClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` / `parse_*` on the client and
//!   `begin_*` / `complete_*` on the view, so the I/O boundary is explicit.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod draft;
pub mod error;
pub mod http;
pub mod locale;
pub mod modal;
pub mod outcome;
pub mod render;
pub mod types;
pub mod validation;
pub mod view;

pub use client::RecordClient;
pub use draft::{Draft, Field};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use locale::{Locale, Message};
pub use modal::Modal;
pub use outcome::{Notice, Outcome, Rejection};
pub use render::render;
pub use types::{NewRecord, Record, RecordId};
pub use view::{LoadState, Ticket, TodoView};
