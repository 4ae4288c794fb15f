/// Envelope detection command.
pub mod envelope;
/// Response parser command.
pub mod parse;
/// Domain type schema command.
pub mod schema;

mod load;

#[cfg(test)]
mod test_support;

/// Boxed error for command failures (IO, JSON, and mapping errors).
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Command result type.
pub type Result<T> = std::result::Result<T, DynError>;
