mod batch;
mod list;
mod member;
mod security;

pub use batch::{BatchError, BatchResult};
pub use list::{ListMember, MailingList};
pub use member::{EmailType, MemberClient, MemberGeo, MemberInfo, MemberStatus, MergeVars, StaticSegment};
pub use security::ApiKey;
