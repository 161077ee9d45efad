//! Pending responses: dodge requests and duel challenges.
//!
//! - `PendingAction`: The single open response window, if any
//! - `ResponseProtocol`: Opens, answers and settles windows
//!
//! While a window is open the play and discard loops are suspended and
//! only the responding side may act.

mod pending;
mod protocol;

pub use pending::{PendingAction, ResponseKind};
pub use protocol::ResponseProtocol;
