//! Unit entry points. Each takes the raw invocation event and always
//! answers with a [`UnitResponse`](crate::response::UnitResponse).

pub mod export;
pub mod link;
pub mod notify;

pub use export::ExportUnit;
pub use link::LinkUnit;
pub use notify::NotifyUnit;
