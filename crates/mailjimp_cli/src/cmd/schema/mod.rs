use clap::ValueEnum;
use mailjimp::rpc::{ApiKey, BatchError, BatchResult, ListMember, MailingList, MemberClient, MemberGeo, MemberInfo, MergeVars, Parsable, StaticSegment, hint_for};

/// Domain type whose descriptor table is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
	/// [`ApiKey`]
	ApiKey,
	/// [`MailingList`]
	MailingList,
	/// [`ListMember`]
	ListMember,
	/// [`MemberInfo`]
	MemberInfo,
	/// [`MergeVars`]
	MergeVars,
	/// [`MemberGeo`]
	MemberGeo,
	/// [`MemberClient`]
	MemberClient,
	/// [`StaticSegment`]
	StaticSegment,
	/// [`BatchResult`]
	BatchResult,
	/// [`BatchError`]
	BatchError,
}

/// Print field names, wire keys, declared types, and hints of one domain type.
pub fn run(target: Target) -> super::Result<()> {
	print!("{}", render_target(target));
	Ok(())
}

pub(crate) fn render_target(target: Target) -> String {
	match target {
		Target::ApiKey => render::<ApiKey>(),
		Target::MailingList => render::<MailingList>(),
		Target::ListMember => render::<ListMember>(),
		Target::MemberInfo => render::<MemberInfo>(),
		Target::MergeVars => render::<MergeVars>(),
		Target::MemberGeo => render::<MemberGeo>(),
		Target::MemberClient => render::<MemberClient>(),
		Target::StaticSegment => render::<StaticSegment>(),
		Target::BatchResult => render::<BatchResult>(),
		Target::BatchError => render::<BatchError>(),
	}
}

fn render<T: Parsable>() -> String {
	let mut out = format!("type: {} ({} fields, {} hints)\n", T::TYPE_NAME, T::FIELDS.len(), T::HINTS.len());
	for field in T::FIELDS {
		out.push_str(&format!("  {} <- {}: {}", field.name, field.key(), field.declared_type()));
		if let Some(hint) = hint_for::<T>(field.name) {
			out.push_str(&format!(" (hint: {hint})"));
		}
		out.push('\n');
	}
	out
}
