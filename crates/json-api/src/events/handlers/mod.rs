//! Event Handlers

pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod send;
