use std::borrow::Cow;

/// Escapes text for embedding into HTML as text content.
///
/// `&`, `>`, `<`, `"` and `'` are replaced by entities, everything else is passed through.
/// The input is returned as-is if it contains none of them.
#[must_use]
pub fn escape_text_content(text: &str) -> Cow<'_, str> {
	let first = match text.find(|c| matches!(c, '&' | '>' | '<' | '"' | '\'')) {
		Some(first) => first,
		None => return Cow::Borrowed(text),
	};

	let mut escaped = String::with_capacity(text.len() + 8);
	escaped.push_str(&text[..first]);
	for c in text[first..].chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'>' => escaped.push_str("&gt;"),
			'<' => escaped.push_str("&lt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			c => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
	use super::escape_text_content;
	use std::borrow::Cow;

	#[test]
	fn escapes_all_five() {
		assert_eq!(escape_text_content("<a>&\"'"), "&lt;a&gt;&amp;&quot;&#x27;");
	}

	#[test]
	fn borrows_clean_text() {
		assert!(matches!(escape_text_content("plain text 42"), Cow::Borrowed("plain text 42")));
	}

	#[test]
	fn keeps_surrounding_text() {
		assert_eq!(escape_text_content("Tom & Jerry's"), "Tom &amp; Jerry&#x27;s");
		assert_eq!(escape_text_content("ü < ß"), "ü &lt; ß");
	}

	#[test]
	fn does_not_double_escape_intentionally() {
		assert_eq!(escape_text_content("&amp;"), "&amp;amp;");
	}
}
