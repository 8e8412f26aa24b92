/*!
# Tartan: Value Decoding.

Parameters and positionals are always read as whole tokens. The traits here
turn those tokens into real values:

* [`FromToken`] is the plain string-to-type conversion, implemented for
  `bool`, the numeric primitives, [`String`], and [`PathBuf`];
* [`Param`] is a value-level decoder that pulls the token from the cursor,
  either via [`Of`] (any `FromToken` type) or a [`Lookup`] table;
* [`Params`] strings zero or more of those together for a
  [`Flag`](crate::Flag).
*/

use crate::{
	Argument,
	Cursor,
	ParseError,
	ParseResult,
	Rules,
};
use std::{
	fmt,
	marker::PhantomData,
	path::PathBuf,
};



/// # From Token.
///
/// Convert a single token into a value.
pub trait FromToken: Sized + 'static {
	/// # From Token.
	///
	/// ## Errors
	///
	/// On failure, return a short explanation; the parser pairs it with the
	/// offending text.
	fn from_token(token: &str) -> Result<Self, String>;
}

impl FromToken for bool {
	fn from_token(token: &str) -> Result<Self, String> {
		match token {
			"true" => Ok(true),
			"false" => Ok(false),
			_ => Err("expected 'true' or 'false'".to_owned()),
		}
	}
}

impl FromToken for String {
	#[inline]
	fn from_token(token: &str) -> Result<Self, String> { Ok(token.to_owned()) }
}

impl FromToken for PathBuf {
	#[inline]
	fn from_token(token: &str) -> Result<Self, String> { Ok(Self::from(token)) }
}

/// # Helper: Numeric `FromToken`.
macro_rules! from_token_num {
	($($ty:ty),+ $(,)?) => ($(
		impl FromToken for $ty {
			fn from_token(token: &str) -> Result<Self, String> {
				token.parse::<Self>()
					.map_err(|_| concat!("could not parse ", stringify!($ty)).to_owned())
			}
		}
	)+);
}

from_token_num!(
	u8, u16, u32, u64, u128, usize,
	i8, i16, i32, i64, i128, isize,
	f32, f64,
);



/// # Parameter Decoder.
///
/// Read a value from the cursor. Implementations should go through
/// [`Cursor::take_param`] so that alignment is enforced.
pub trait Param: 'static {
	/// # Value Type.
	type Value: 'static;

	/// # Decode.
	///
	/// ## Errors
	///
	/// Bound, shortopt list, and invalid parameter errors are all possible.
	fn decode(&self, cursor: &mut Cursor<'_>) -> ParseResult<Self::Value>;
}



/// # Typed Parameter.
///
/// This decodes a single token via [`FromToken`]. Use [`of`] to create one
/// without the turbofish noise.
pub struct Of<T>(PhantomData<fn() -> T>);

impl<T> Clone for Of<T> {
	#[inline]
	fn clone(&self) -> Self { *self }
}

impl<T> Copy for Of<T> {}

impl<T> Default for Of<T> {
	#[inline]
	fn default() -> Self { Self(PhantomData) }
}

impl<T> fmt::Debug for Of<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Of<{}>", std::any::type_name::<T>())
	}
}

impl<T: FromToken> Param for Of<T> {
	type Value = T;

	fn decode(&self, cursor: &mut Cursor<'_>) -> ParseResult<T> {
		let token = cursor.take_param()?;
		T::from_token(token).map_err(|msg| ParseError::invalid_param(msg, token))
	}
}

#[must_use]
/// # Typed Parameter.
///
/// ## Examples
///
/// ```
/// use tartan::{Flag, of};
///
/// // -j <threads>
/// let flag = Flag::new('j', "--jobs", (of::<usize>(),));
/// ```
pub const fn of<T: FromToken>() -> Of<T> { Of(PhantomData) }



#[derive(Debug, Clone)]
/// # Lookup Table.
///
/// This maps exact, case-sensitive token strings to values. It works both as
/// a flag parameter and as a positional argument.
///
/// ## Examples
///
/// ```
/// use tartan::{Lookup, Parser};
///
/// #[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// enum Cmd { Build, Run }
///
/// let mut parser = Parser::new();
/// let cmd = parser.positional(Lookup::new([("build", Cmd::Build), ("run", Cmd::Run)]));
///
/// parser.parse(["run"]).unwrap();
/// assert_eq!(parser.results(cmd), [Cmd::Run]);
///
/// // Anything else is an error.
/// assert!(parser.parse(["walk"]).is_err());
/// ```
pub struct Lookup<T> {
	/// # Keys and Values (In Order).
	table: Vec<(String, T)>,

	/// # Rules (When Used as a Positional).
	rules: Rules,
}

impl<T: Clone + 'static> Lookup<T> {
	#[must_use]
	/// # New.
	///
	/// If a key is repeated, the first occurrence wins.
	pub fn new<I, K>(table: I) -> Self
	where I: IntoIterator<Item=(K, T)>, K: Into<String> {
		let mut out: Vec<(String, T)> = Vec::new();
		for (k, v) in table {
			let k: String = k.into();
			if ! out.iter().any(|(old, _)| *old == k) { out.push((k, v)); }
		}

		Self {
			table: out,
			rules: Rules::default(),
		}
	}

	#[must_use]
	/// # Get.
	///
	/// Return the value associated with `key`, if any.
	pub fn get(&self, key: &str) -> Option<&T> {
		self.table.iter().find_map(|(k, v)| if k == key { Some(v) } else { None })
	}

	/// # Keys.
	pub fn keys(&self) -> impl Iterator<Item=&str> {
		self.table.iter().map(|(k, _)| k.as_str())
	}

	#[must_use]
	/// # Joined Keys.
	fn joined(&self) -> String {
		self.keys().collect::<Vec<_>>().join(", ")
	}
}

impl<T: Clone + 'static> Param for Lookup<T> {
	type Value = T;

	fn decode(&self, cursor: &mut Cursor<'_>) -> ParseResult<T> {
		let token = cursor.take_param()?;
		self.get(token).cloned().ok_or_else(|| ParseError::invalid_param(
			format!("expected one of ({})", self.joined()),
			token,
		))
	}
}

impl<T: Clone + 'static> Argument for Lookup<T> {
	type Value = T;

	#[inline]
	fn attempt(&self, cursor: &mut Cursor<'_>) -> ParseResult<T> {
		self.decode(cursor)
	}

	#[inline]
	fn display(&self) -> String { self.joined() }

	#[inline]
	fn rules(&self) -> &Rules { &self.rules }

	#[inline]
	fn rules_mut(&mut self) -> &mut Rules { &mut self.rules }
}



/// # Parameter List.
///
/// This is implemented for tuples of up to six [`Param`]s, including the
/// empty tuple for switches. Decoding runs strictly left to right and stops
/// at the first failure.
pub trait Params: 'static {
	/// # Decoded Values.
	type Values: 'static;

	/// # Decode All.
	///
	/// ## Errors
	///
	/// The first decoding error, if any, is returned.
	fn decode_all(&self, cursor: &mut Cursor<'_>) -> ParseResult<Self::Values>;
}

impl Params for () {
	type Values = ();

	#[inline]
	fn decode_all(&self, _cursor: &mut Cursor<'_>) -> ParseResult<()> { Ok(()) }
}

/// # Helper: Tuple `Params`.
macro_rules! params {
	($($ty:ident $idx:tt),+) => (
		impl<$($ty: Param),+> Params for ($($ty,)+) {
			type Values = ($($ty::Value,)+);

			fn decode_all(&self, cursor: &mut Cursor<'_>) -> ParseResult<Self::Values> {
				Ok(($(self.$idx.decode(cursor)?,)+))
			}
		}
	);
}

params!(A 0);
params!(A 0, B 1);
params!(A 0, B 1, C 2);
params!(A 0, B 1, C 2, D 3);
params!(A 0, B 1, C 2, D 3, E 4);
params!(A 0, B 1, C 2, D 3, E 4, F 5);



#[cfg(test)]
mod test {
	use super::*;
	use crate::ParseErrorKind;

	fn argv(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn t_bool() {
		assert_eq!(bool::from_token("true"), Ok(true));
		assert_eq!(bool::from_token("false"), Ok(false));

		// Case matters.
		for bad in ["True", "FALSE", "1", "yes", ""] {
			assert!(bool::from_token(bad).is_err(), "Bug: {bad:?} parsed as a bool.");
		}
	}

	#[test]
	fn t_num() {
		assert_eq!(i32::from_token("42"), Ok(42));
		assert_eq!(i32::from_token("-42"), Ok(-42));
		assert_eq!(u8::from_token("256"), Err("could not parse u8".to_owned()));
		assert_eq!(i32::from_token("4x2"), Err("could not parse i32".to_owned()));
		assert_eq!(i32::from_token(" 42"), Err("could not parse i32".to_owned()));
		assert_eq!(f64::from_token("2.5"), Ok(2.5));
	}

	#[test]
	fn t_of() {
		let raw = argv(&["42", "abc"]);
		let mut cur = Cursor::new(&raw);
		assert_eq!(of::<i32>().decode(&mut cur).ok(), Some(42));
		assert_eq!(
			of::<i32>().decode(&mut cur).map_err(ParseError::into_kind),
			Err(ParseErrorKind::InvalidParam {
				msg: "could not parse i32".to_owned(),
				given: "abc".to_owned(),
			}),
		);

		// The token is consumed either way; the parser is responsible for
		// throwing away failed cursors.
		assert!(cur.is_done());
		assert!(of::<i32>().decode(&mut cur).expect_err("Bug: decoded nothing.").is_bound());
	}

	#[test]
	fn t_lookup() {
		let table = Lookup::new([("all", 1_u8), ("none", 0), ("all", 2)]);
		assert_eq!(table.get("all"), Some(&1));
		assert_eq!(table.get("All"), None);
		assert_eq!(table.display(), "all, none");

		let raw = argv(&["none", "some"]);
		let mut cur = Cursor::new(&raw);
		assert_eq!(table.decode(&mut cur).ok(), Some(0));
		assert_eq!(
			table.decode(&mut cur).map_err(ParseError::into_kind),
			Err(ParseErrorKind::InvalidParam {
				msg: "expected one of (all, none)".to_owned(),
				given: "some".to_owned(),
			}),
		);
	}

	#[test]
	fn t_params() {
		let params = (of::<bool>(), of::<i32>(), of::<String>());

		let raw = argv(&["true", "42", "x"]);
		let mut cur = Cursor::new(&raw);
		assert_eq!(params.decode_all(&mut cur).ok(), Some((true, 42, "x".to_owned())));

		// The first failure wins, and nothing after it is read.
		let raw = argv(&["yes", "abc", "x"]);
		let mut cur = Cursor::new(&raw);
		let err = params.decode_all(&mut cur).expect_err("Bug: yes is not a bool.");
		assert!(matches!(
			err.kind(),
			ParseErrorKind::InvalidParam { given, .. } if given == "yes"
		));
		assert_eq!(cur.pos(), 1);
	}
}
