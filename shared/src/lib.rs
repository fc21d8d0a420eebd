//! Types and pure logic behind the Qiita advent calendar widget.
//!
//! Everything here compiles for both the browser and the host so the
//! calendar rules can be unit-tested without a WebAssembly runtime.

pub mod api;
pub mod calendar;
pub mod config;
pub mod decor;
pub mod error;
pub mod models;
pub mod sequence;

pub use calendar::{cell_for, filter_window, CellState, Day, Glyph};
pub use config::{CalendarConfig, CalendarWindow};
pub use error::FetchError;
pub use models::{Article, QiitaItem};
pub use sequence::{RequestSequence, RequestTicket};
