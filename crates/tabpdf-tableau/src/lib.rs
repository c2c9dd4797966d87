//! tabpdf-tableau
//!
//! Tableau REST API session: sign in, list views and workbooks, download
//! PDFs, sign out.

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::TableauClient;
pub use session::{Connector, DashboardSession, TableauSession};
