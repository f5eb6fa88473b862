mod create_member;
mod delete_member;
mod get_member;
mod list_members;
mod update_member;

pub use create_member::*;
pub use delete_member::*;
pub use get_member::*;
pub use list_members::*;
pub use update_member::*;

use tracing::Level;

use crate::{domain::MemberAPIError, utils::tracing::log_error_chain};

/// Logs an operation failure with its source chain before handing it back.
/// Caller mistakes go to `DEBUG`, anything unexpected to `ERROR`.
fn report<E: Into<MemberAPIError>>(e: E) -> MemberAPIError {
    let e = e.into();
    let level = match &e {
        MemberAPIError::UnexpectedError(_) => Level::ERROR,
        _ => Level::DEBUG,
    };
    log_error_chain(&e, level);
    e
}
