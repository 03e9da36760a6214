//! Operations coordinating a whole run
//!
//! - [`install`]: single package, always submitted
//! - [`repair`]: baseline every target, attempt the incomplete ones
//! - [`check`]: on-disk validation only
//!
//! `install` and `repair` share [`flow::InstallFlow`], which ties the
//! installer invoker, the state poller and the on-disk check together.

pub mod check;
pub mod flow;
pub mod install;
pub mod repair;


pub use flow::InstallFlow;
pub use install::InstallOperation;
pub use repair::{RepairOperation, RepairOptions};
