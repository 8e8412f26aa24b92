/*!
# Tartan: Errors.

Every failure the engine can produce is a [`ParseError`]: one of the
[`ParseErrorKind`] variants plus, once the dispatcher decides to give up, the
identity of the argument that was being worked on at the time.

Only [`ParseErrorKind::UnknownArg`] is recoverable; it means "nothing matched
here", and is how candidates and dispatchers hand off to one another. The
rest abort the parse outright.
*/

use crate::{
	ArgId,
	Cursor,
};



/// # Parse Result.
pub type ParseResult<T> = Result<T, ParseError>;



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Error Kinds.
pub enum ParseErrorKind {
	#[error("unknown argument: {token}")]
	/// # No Candidate Matched.
	///
	/// This holds the token and byte offset at which matching failed.
	UnknownArg {
		/// # Offending Token.
		token: String,

		/// # Offset Within the Token.
		offset: usize,
	},

	#[error("<internal>: bound check failed in {0}")]
	/// # Cursor Out of Range.
	///
	/// This indicates a cursor was read past the end of the stream or the
	/// token. The string is the name of the method that tripped.
	BoundError(&'static str),

	#[error("could not parse '{given}': {msg}")]
	/// # Decoding Failed.
	InvalidParam {
		/// # Explanation.
		msg: String,

		/// # The Offending Text.
		given: String,
	},

	#[error("parameter requested inside short option list '{0}'")]
	/// # Parameter Mid-Bundle.
	///
	/// A value decoder was asked to run while the cursor was partway through
	/// a bundle of short options. This holds the whole bundle token.
	InvalidShortoptList(String),

	#[error("{0}")]
	/// # Condition Rejected.
	CondFailed(String),
}



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("{kind}")]
/// # Parse Error.
///
/// This pairs a [`ParseErrorKind`] with the (optional) identity of the
/// offending argument. Use [`Parser::report`](crate::Parser::report) for a
/// rendering that includes the argument's name.
pub struct ParseError {
	/// # Kind.
	kind: ParseErrorKind,

	/// # Offending Argument.
	arg: Option<ArgId>,
}

impl From<ParseErrorKind> for ParseError {
	#[inline]
	fn from(kind: ParseErrorKind) -> Self { Self { kind, arg: None } }
}

/// ## Constructors.
impl ParseError {
	#[must_use]
	/// # Unknown Argument.
	///
	/// Nothing matched at the cursor's position.
	pub fn unknown(cursor: &Cursor<'_>) -> Self {
		ParseErrorKind::UnknownArg {
			token: cursor.token().unwrap_or_default().to_owned(),
			offset: cursor.offset(),
		}.into()
	}

	#[must_use]
	/// # Bound Error.
	pub const fn bound(method: &'static str) -> Self {
		Self {
			kind: ParseErrorKind::BoundError(method),
			arg: None,
		}
	}

	#[must_use]
	/// # Invalid Parameter.
	pub fn invalid_param<S, G>(msg: S, given: G) -> Self
	where S: Into<String>, G: Into<String> {
		ParseErrorKind::InvalidParam {
			msg: msg.into(),
			given: given.into(),
		}.into()
	}

	#[must_use]
	/// # Invalid Shortopt List.
	pub fn shortopt_list<S: Into<String>>(token: S) -> Self {
		ParseErrorKind::InvalidShortoptList(token.into()).into()
	}

	#[must_use]
	/// # Condition Failed.
	pub fn cond_failed<S: Into<String>>(msg: S) -> Self {
		ParseErrorKind::CondFailed(msg.into()).into()
	}

	#[must_use]
	/// # With Argument.
	///
	/// Attach the offending argument, replacing any previous attachment.
	///
	/// Unknown-argument errors are about the token, not any one candidate, so
	/// are returned unchanged.
	pub fn with_arg(mut self, id: ArgId) -> Self {
		if ! matches!(self.kind, ParseErrorKind::UnknownArg { .. }) {
			self.arg = Some(id);
		}
		self
	}
}

/// ## Getters.
impl ParseError {
	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> &ParseErrorKind { &self.kind }

	#[must_use]
	/// # Into Kind.
	pub fn into_kind(self) -> ParseErrorKind { self.kind }

	#[must_use]
	/// # Offending Argument.
	pub const fn arg(&self) -> Option<ArgId> { self.arg }

	#[must_use]
	/// # Is Unknown Argument?
	pub const fn is_unknown(&self) -> bool {
		matches!(self.kind, ParseErrorKind::UnknownArg { .. })
	}

	#[must_use]
	/// # Is Condition Failure?
	pub const fn is_cond_failed(&self) -> bool {
		matches!(self.kind, ParseErrorKind::CondFailed(_))
	}

	#[must_use]
	/// # Is Bound Error?
	///
	/// These indicate a bug, usually a misbehaving custom argument, rather
	/// than bad user input.
	pub const fn is_bound(&self) -> bool {
		matches!(self.kind, ParseErrorKind::BoundError(_))
	}

	#[must_use]
	/// # Message.
	///
	/// Return the kind-specific message, without any argument details.
	pub fn message(&self) -> String { self.kind.to_string() }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_with_arg() {
		let id = ArgId::new(3);

		let err = ParseError::cond_failed("nope").with_arg(id);
		assert_eq!(err.arg(), Some(id));
		assert!(err.is_cond_failed());

		// The last attachment wins.
		let err = err.with_arg(ArgId::new(5));
		assert_eq!(err.arg(), Some(ArgId::new(5)));

		// Unknowns never get one.
		let raw = vec!["-z".to_owned()];
		let err = ParseError::unknown(&Cursor::new(&raw)).with_arg(id);
		assert!(err.is_unknown());
		assert_eq!(err.arg(), None);
	}

	#[test]
	fn t_display() {
		assert_eq!(
			ParseError::invalid_param("could not parse i32", "abc").to_string(),
			"could not parse 'abc': could not parse i32",
		);
		assert_eq!(
			ParseError::bound("Flag::attempt").to_string(),
			"<internal>: bound check failed in Flag::attempt",
		);
		assert_eq!(ParseError::cond_failed("Max 0").message(), "Max 0");

		let raw = vec!["--nope".to_owned()];
		assert_eq!(
			ParseError::unknown(&Cursor::new(&raw)).to_string(),
			"unknown argument: --nope",
		);
	}
}
