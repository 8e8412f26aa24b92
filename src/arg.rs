/*!
# Tartan: Arguments.

Everything a [`Parser`](crate::Parser) can match implements [`Argument`]:
a way to attempt a match at the cursor, a display string, and a set of
[`Rules`] gating when it may match and what must hold once the stream has
been consumed.

The crate ships three implementations: [`Flag`](crate::Flag),
[`Lookup`](crate::Lookup), and [`Custom`].
*/

use crate::{
	Cond,
	Cursor,
	ParseResult,
};
use std::{
	fmt,
	marker::PhantomData,
};



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Argument Identity.
///
/// Each argument registered with a [`Parser`](crate::Parser) gets one of
/// these. It is stable for the life of the parser, and is what the match
/// history and conditions like [`Cond::Requires`] refer to.
pub struct ArgId(usize);

impl fmt::Display for ArgId {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

impl ArgId {
	#[must_use]
	/// # New.
	pub(crate) const fn new(idx: usize) -> Self { Self(idx) }

	#[must_use]
	/// # Declaration Index.
	pub const fn index(self) -> usize { self.0 }
}



/// # Typed Argument Handle.
///
/// This is returned when an argument is registered. It identifies the
/// argument just like [`ArgId`] does, but also remembers the value type so
/// results can be retrieved without any casting on your end.
pub struct Arg<T> {
	/// # Identity.
	id: ArgId,

	/// # Value Type.
	_value: PhantomData<fn() -> T>,
}

impl<T> Clone for Arg<T> {
	#[inline]
	fn clone(&self) -> Self { *self }
}

impl<T> Copy for Arg<T> {}

impl<T> fmt::Debug for Arg<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Arg").field(&self.id).finish()
	}
}

impl<T> Eq for Arg<T> {}

impl<T> PartialEq for Arg<T> {
	#[inline]
	fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl<T> From<Arg<T>> for ArgId {
	#[inline]
	fn from(src: Arg<T>) -> Self { src.id }
}

impl<T> Arg<T> {
	#[must_use]
	/// # New.
	pub(crate) const fn new(id: ArgId) -> Self {
		Self { id, _value: PhantomData }
	}

	#[must_use]
	/// # Identity.
	pub const fn id(self) -> ArgId { self.id }
}



#[derive(Debug, Clone, Default)]
/// # Argument Rules.
///
/// The precondition is checked before every match attempt; a
/// [`ParseErrorKind::CondFailed`](crate::ParseErrorKind::CondFailed) there
/// simply makes the argument ineligible for that step. The postcondition is
/// checked once, after all tokens have been consumed.
///
/// Both default to [`Cond::True`].
pub struct Rules {
	/// # Precondition.
	pub precondition: Cond,

	/// # Postcondition.
	pub postcondition: Cond,

	/// # Description (for Help).
	pub description: String,
}



/// # Matchable Argument.
///
/// This is the contract shared by flags, positionals, and anything else you
/// might want a [`Parser`](crate::Parser) to match.
///
/// Implementations should leave the cursor wherever their match ended. The
/// parser works on a copy and throws it away unless the attempt succeeds,
/// so there is no need to restore anything on failure.
///
/// Return a [`ParseErrorKind::UnknownArg`](crate::ParseErrorKind::UnknownArg)
/// to say "not mine", letting the parser move on to the next candidate. Any
/// other error aborts the parse.
pub trait Argument: 'static {
	/// # Value Type.
	///
	/// One of these is collected per successful match.
	type Value: 'static;

	/// # Attempt Match.
	///
	/// ## Errors
	///
	/// See the trait docs.
	fn attempt(&self, cursor: &mut Cursor<'_>) -> ParseResult<Self::Value>;

	/// # Display.
	///
	/// Return a short human-readable name, e.g. `-h, --help`.
	fn display(&self) -> String;

	/// # Rules.
	fn rules(&self) -> &Rules;

	/// # Rules (Mutable).
	fn rules_mut(&mut self) -> &mut Rules;

	#[must_use]
	/// # With Precondition.
	fn precondition(mut self, cond: Cond) -> Self
	where Self: Sized {
		self.rules_mut().precondition = cond;
		self
	}

	#[must_use]
	/// # With Postcondition.
	fn postcondition(mut self, cond: Cond) -> Self
	where Self: Sized {
		self.rules_mut().postcondition = cond;
		self
	}

	#[must_use]
	/// # With Description.
	fn description<S: Into<String>>(mut self, desc: S) -> Self
	where Self: Sized {
		self.rules_mut().description = desc.into();
		self
	}
}



/// # Custom Argument.
///
/// A positional (or anything else) backed by your own matching logic. The
/// callback gets the speculative cursor and can use any of its methods, like
/// [`Cursor::take_param`].
///
/// ## Examples
///
/// ```
/// use tartan::{Argument, Custom, Cursor, ParseError, Parser};
///
/// let mut parser = Parser::new();
/// let path = parser.positional(
///     Custom::new(|c: &mut Cursor<'_>| c.take_param().map(str::to_owned))
///         .named("PATH")
///         .description("the file to read"),
/// );
///
/// parser.parse(["/tmp/file"]).unwrap();
/// assert_eq!(parser.results(path), ["/tmp/file".to_owned()]);
/// ```
pub struct Custom<T, F> {
	/// # Callback.
	cb: F,

	/// # Display Name.
	name: String,

	/// # Rules.
	rules: Rules,

	/// # Value Type.
	_value: PhantomData<fn() -> T>,
}

impl<T, F> fmt::Debug for Custom<T, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Custom")
			.field("name", &self.name)
			.field("rules", &self.rules)
			.finish_non_exhaustive()
	}
}

impl<T, F> Custom<T, F>
where F: Fn(&mut Cursor<'_>) -> ParseResult<T> {
	#[must_use]
	/// # New.
	pub fn new(cb: F) -> Self {
		Self {
			cb,
			name: "(custom)".to_owned(),
			rules: Rules::default(),
			_value: PhantomData,
		}
	}

	#[must_use]
	/// # With Display Name.
	pub fn named<S: Into<String>>(mut self, name: S) -> Self {
		self.name = name.into();
		self
	}
}

impl<T, F> Argument for Custom<T, F>
where T: 'static, F: Fn(&mut Cursor<'_>) -> ParseResult<T> + 'static {
	type Value = T;

	fn attempt(&self, cursor: &mut Cursor<'_>) -> ParseResult<T> {
		(self.cb)(cursor)
	}

	fn display(&self) -> String { self.name.clone() }

	fn rules(&self) -> &Rules { &self.rules }

	fn rules_mut(&mut self) -> &mut Rules { &mut self.rules }
}
