//! Asynchronously loaded record views.
//!
//! Both dashboard panels follow the same pattern: when the selected
//! repository changes they fetch a fresh record list from a
//! [`ports::RecordSource`] and expose a [`state::LoadState`] that is either
//! loading, loaded, or failed. [`RecordView`] implements that pattern once,
//! including cancellation of loads superseded by a newer one.

pub mod adapters;
pub mod ports;
mod record_view;
pub mod state;

pub use record_view::RecordView;
