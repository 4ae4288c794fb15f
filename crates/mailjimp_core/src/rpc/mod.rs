mod date;
mod dom;
mod envelope;
mod error;
mod hint;
mod key;
mod mapper;
mod request;
mod response;
mod schema;
mod value;

/// Fixed timestamp format and helpers.
pub use date::{TIMESTAMP_FORMAT, format_timestamp, parse_timestamp};
/// Domain objects populated from response records.
pub use dom::{ApiKey, BatchError, BatchResult, EmailType, ListMember, MailingList, MemberClient, MemberGeo, MemberInfo, MemberStatus, MergeVars, StaticSegment};
/// API 1.2 / 1.3 response envelope detection.
pub use envelope::Envelope;
/// Error and result aliases.
pub use error::{ErrorKind, MappingError, Result};
/// Per-type fallback lookup paths.
pub use hint::{Hint, HintTable, hint_for};
/// Field-name to wire-key normalization.
pub use key::normalize_key;
/// Generic record-to-object mapping entry points and options.
pub use mapper::{MapContext, MapOptions, map_into, map_into_with, map_record};
/// Outbound request shapes.
pub use request::{
	ApiKeyAddRequest, ApiKeyExpireRequest, ApiKeysRequest, ListBatchSubscribeRequest, ListBatchUnsubscribeRequest, ListInterestGroupingDelRequest,
	ListMemberInfoRequest, ListMembersRequest, ListSubscribeRequest, ListUnsubscribeRequest, ListUpdateMemberRequest, ListsRequest, RpcRequest,
};
/// Per-operation response parsers.
pub use response::ResponseParser;
/// Static field descriptors and coercion traits.
pub use schema::{DeclaredType, Field, FromRpcValue, Parsable, RpcEnum, assign, enum_from_value, object_from_value};
/// Dynamic value tree handed over by the transport.
pub use value::{FieldValue, StructValue, Value};
