//! Types and logic shared by the penguin catalog server and the browser app.
//!
//! `model` and `responses` define what travels over the wire; `catalog` holds
//! the record-store contract and the controller that drives the catalog page.

pub mod catalog;
pub mod model;
pub mod responses;
