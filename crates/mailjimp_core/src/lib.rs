//! Typed mapping layer for MailChimp XML-RPC responses and requests.

/// Dynamic value tree, field schemas, the generic mapper, and per-operation parsers.
pub mod rpc;
