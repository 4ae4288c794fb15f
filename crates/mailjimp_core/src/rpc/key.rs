/// Derive the wire key of a logical field name.
///
/// camelCase and PascalCase words are split with `_` and lowercased; names that are
/// already snake_case pass through unchanged. Acronym runs stay together
/// (`iconURL` -> `icon_url`, `HTMLBody` -> `html_body`).
pub fn normalize_key(name: &str) -> String {
	let chars: Vec<char> = name.chars().collect();
	let mut out = String::with_capacity(name.len() + 4);

	for (idx, &ch) in chars.iter().enumerate() {
		if ch.is_uppercase() {
			let prev = idx.checked_sub(1).map(|at| chars[at]);
			let next = chars.get(idx + 1).copied();
			let boundary = match prev {
				None | Some('_') => false,
				Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
				Some(p) => p.is_uppercase() && next.is_some_and(char::is_lowercase),
			};
			if boundary {
				out.push('_');
			}
			out.extend(ch.to_lowercase());
		} else {
			out.push(ch);
		}
	}

	out
}
