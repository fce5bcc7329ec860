//! Field validation rules for the contact form.
//!
//! Checks run on the trimmed value in a fixed order: required first, then
//! length bounds, then charset or format. The first failing rule wins, so a
//! one-letter name reports "too short" rather than complaining about its
//! characters.

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 1000;

/// Why a field value was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invalid {
	/// Empty after trimming.
	Required,
	/// Fewer characters than the carried minimum.
	TooShort(usize),
	/// More characters than the carried maximum.
	TooLong(usize),
	/// Contains something other than letters and spaces.
	Charset,
	/// Not shaped like an email address.
	Format,
}

impl Invalid {
	/// User-facing description of the failure.
	pub fn message(self) -> String {
		match self {
			Invalid::Required => "This field is required.".to_string(),
			Invalid::TooShort(min) => format!("Must be at least {} characters.", min),
			Invalid::TooLong(max) => format!("Must be {} characters or fewer.", max),
			Invalid::Charset => "Only letters and spaces are allowed.".to_string(),
			Invalid::Format => "Enter a valid email address.".to_string(),
		}
	}
}

/// Name: 2 to 50 characters, letters and spaces only.
pub fn check_name(value: &str) -> Result<(), Invalid> {
	let value = value.trim();
	if value.is_empty() {
		return Err(Invalid::Required);
	}
	let length = value.chars().count();
	if length < NAME_MIN {
		return Err(Invalid::TooShort(NAME_MIN));
	}
	if length > NAME_MAX {
		return Err(Invalid::TooLong(NAME_MAX));
	}
	if !value.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
		return Err(Invalid::Charset);
	}
	Ok(())
}

/// Email: `local@domain.tld` with no whitespace, a single `@`, and a dot
/// inside the domain with something on both sides of it.
pub fn check_email(value: &str) -> Result<(), Invalid> {
	let value = value.trim();
	if value.is_empty() {
		return Err(Invalid::Required);
	}
	if valid_email(value) {
		Ok(())
	} else {
		Err(Invalid::Format)
	}
}

/// Message: 10 to 1000 characters, any content.
pub fn check_message(value: &str) -> Result<(), Invalid> {
	let value = value.trim();
	if value.is_empty() {
		return Err(Invalid::Required);
	}
	let length = value.chars().count();
	if length < MESSAGE_MIN {
		return Err(Invalid::TooShort(MESSAGE_MIN));
	}
	if length > MESSAGE_MAX {
		return Err(Invalid::TooLong(MESSAGE_MAX));
	}
	Ok(())
}

fn valid_email(value: &str) -> bool {
	if value.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = value.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	let Some((host, tld)) = domain.rsplit_once('.') else {
		return false;
	};
	!host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_name_rules() {
		assert_eq!(check_name(""), Err(Invalid::Required));
		assert_eq!(check_name("   "), Err(Invalid::Required));
		assert_eq!(check_name("A"), Err(Invalid::TooShort(2)));
		assert_eq!(check_name(&"a".repeat(51)), Err(Invalid::TooLong(50)));
		assert_eq!(check_name("R2D2"), Err(Invalid::Charset));
		assert_eq!(check_name("Anna-Lena"), Err(Invalid::Charset));

		assert_eq!(check_name("Jo"), Ok(()));
		assert_eq!(check_name(&"a".repeat(50)), Ok(()));
		assert_eq!(check_name("Ada Lovelace"), Ok(()));
		assert_eq!(check_name("Ángel Muñoz"), Ok(()));
	}

	#[test]
	fn test_name_length_is_checked_before_charset() {
		// A single digit fails on length, not on the character class.
		assert_eq!(check_name("1"), Err(Invalid::TooShort(2)));
	}

	#[test]
	fn test_partial_input_resolves_as_typing_continues() {
		// Fields are checked on every input event, so each prefix of a value
		// produces a definite outcome and the error clears the moment the
		// value becomes valid.
		assert_eq!(check_name("J"), Err(Invalid::TooShort(2)));
		assert_eq!(check_name("Jo"), Ok(()));

		assert_eq!(check_email("user@"), Err(Invalid::Format));
		assert_eq!(check_email("user@example"), Err(Invalid::Format));
		assert_eq!(check_email("user@example."), Err(Invalid::Format));
		assert_eq!(check_email("user@example.com"), Ok(()));
	}

	#[test]
	fn test_email_rules() {
		assert_eq!(check_email(""), Err(Invalid::Required));
		assert_eq!(check_email("  "), Err(Invalid::Required));
		assert_eq!(check_email("ab.c"), Err(Invalid::Format));
		assert_eq!(check_email("a@b"), Err(Invalid::Format));
		assert_eq!(check_email("a@b."), Err(Invalid::Format));
		assert_eq!(check_email("a@.b"), Err(Invalid::Format));
		assert_eq!(check_email("@b.c"), Err(Invalid::Format));
		assert_eq!(check_email("a@@b.c"), Err(Invalid::Format));
		assert_eq!(check_email("a b@c.d"), Err(Invalid::Format));

		assert_eq!(check_email("a@b.c"), Ok(()));
		assert_eq!(check_email("user.name@example.co.uk"), Ok(()));
		assert_eq!(check_email("  padded@mail.net  "), Ok(()));
	}

	#[test]
	fn test_message_rules() {
		assert_eq!(check_message(""), Err(Invalid::Required));
		assert_eq!(check_message("too short"), Err(Invalid::TooShort(10)));
		assert_eq!(check_message(&"x".repeat(1001)), Err(Invalid::TooLong(1000)));

		assert_eq!(check_message("just right"), Ok(()));
		assert_eq!(check_message(&"x".repeat(1000)), Ok(()));
	}

	#[test]
	fn test_messages_carry_the_limits() {
		assert_eq!(
			Invalid::TooShort(10).message(),
			"Must be at least 10 characters."
		);
		assert_eq!(
			Invalid::TooLong(50).message(),
			"Must be 50 characters or fewer."
		);
	}
}
