//! Value objects - immutable types that represent domain concepts

mod connection_status;
mod member_pair;
mod request_status;

pub use connection_status::ConnectionStatus;
pub use member_pair::MemberPair;
pub use request_status::{RequestStatus, RequestStatusParseError};
