mod balance;
mod data_stores;
mod email;
mod error;
mod member;
mod member_id;
mod member_name;
mod phone_number;

pub use balance::*;
pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use member::*;
pub use member_id::*;
pub use member_name::*;
pub use phone_number::*;
