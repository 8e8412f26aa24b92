/*!
# Tartan: Flags.
*/

use crate::{
	Argument,
	Cursor,
	ParseError,
	ParseResult,
	Params,
	Rules,
};
use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Flag Matcher.
///
/// This recognizes the short (`-x`) and/or long (`--xylophone`) forms of a
/// flag at the cursor.
///
/// Long names are stored and matched in full, dashes and all. Short letters
/// are matched one character at a time; the dispatcher takes care of skipping
/// the leading dash of a bundle like `-abc` before any matcher gets a look.
pub struct FlagMatcher {
	/// # Short Letter.
	short: Option<char>,

	/// # Long Name.
	long: Option<String>,
}

impl FlagMatcher {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(short: Option<char>, long: Option<S>) -> Self {
		Self {
			short,
			long: long.map(Into::into),
		}
	}

	#[must_use]
	/// # Short Letter.
	pub const fn short(&self) -> Option<char> { self.short }

	#[must_use]
	/// # Long Name.
	pub fn long(&self) -> Option<&str> { self.long.as_deref() }

	/// # Match Short.
	///
	/// Returns the letter if it is under the cursor.
	fn match_short(&self, cursor: &Cursor<'_>) -> ParseResult<Option<char>> {
		let ch = cursor.current_char()?;
		Ok(self.short.filter(|s| *s == ch))
	}

	/// # Match Long.
	///
	/// Long names must occupy the whole token, so can never match mid-bundle.
	fn match_long(&self, cursor: &Cursor<'_>) -> ParseResult<bool> {
		if cursor.is_aligned() {
			if let Some(long) = self.long.as_deref() {
				return Ok(cursor.token()? == long);
			}
		}
		Ok(false)
	}

	/// # Match.
	///
	/// If the flag is under the cursor, move past it and return `true`.
	/// Short matches advance one character, rolling over to the next token
	/// at the end of a bundle; long matches skip the whole token.
	///
	/// ## Errors
	///
	/// Returns a bound error if the cursor is out of range.
	pub fn matches(&self, cursor: &mut Cursor<'_>) -> ParseResult<bool> {
		if let Some(ch) = self.match_short(cursor)? {
			cursor.advance(ch.len_utf8())?;
			Ok(true)
		}
		else if self.match_long(cursor)? {
			cursor.next_token();
			Ok(true)
		}
		else { Ok(false) }
	}
}



/// # Flag.
///
/// A flag is matched by name and then decodes zero or more parameters from
/// the tokens that follow, in order. Each successful match collects a
/// [`Params::Values`] tuple; for plain switches, that's just `()`.
///
/// ## Examples
///
/// ```
/// use tartan::{Argument, Cond, Flag, Parser, of};
///
/// let mut parser = Parser::new();
/// let verbose = parser.flag(Flag::switch('v', "--verbose"));
/// let level = parser.flag(
///     Flag::new('l', "--level", (of::<u8>(),))
///         .metavars("NUM")
///         .postcondition(Cond::Max(1)),
/// );
///
/// parser.parse(["-vv", "--level", "3"]).unwrap();
/// assert_eq!(parser.multiplicity(verbose), 2);
/// assert_eq!(parser.results(level), [(3,)]);
/// ```
pub struct Flag<P> {
	/// # Matcher.
	matcher: FlagMatcher,

	/// # Parameters.
	params: P,

	/// # Metavariables (for Help).
	metavars: String,

	/// # Rules.
	rules: Rules,
}

impl<P> fmt::Debug for Flag<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Flag")
			.field("matcher", &self.matcher)
			.field("metavars", &self.metavars)
			.field("rules", &self.rules)
			.finish_non_exhaustive()
	}
}

impl Flag<()> {
	#[must_use]
	/// # New Switch.
	///
	/// Create a short/long flag that takes no parameters.
	pub fn switch<S: Into<String>>(short: char, long: S) -> Self {
		Self::new(short, long, ())
	}
}

impl<P: Params> Flag<P> {
	#[must_use]
	/// # New.
	///
	/// Create a flag with both a short letter and a long name. The long name
	/// should include its dashes, e.g. `--help`.
	pub fn new<S: Into<String>>(short: char, long: S, params: P) -> Self {
		Self::from_matcher(FlagMatcher::new(Some(short), Some(long)), params)
	}

	#[must_use]
	/// # New (Long Only).
	pub fn long<S: Into<String>>(long: S, params: P) -> Self {
		Self::from_matcher(FlagMatcher::new(None, Some(long)), params)
	}

	#[must_use]
	/// # New (Short Only).
	pub fn short(short: char, params: P) -> Self {
		Self::from_matcher(FlagMatcher::new::<String>(Some(short), None), params)
	}

	#[must_use]
	/// # From Matcher.
	pub fn from_matcher(matcher: FlagMatcher, params: P) -> Self {
		Self {
			matcher,
			params,
			metavars: String::new(),
			rules: Rules::default(),
		}
	}

	#[must_use]
	/// # With Metavariables.
	///
	/// Set the parameter hint shown alongside the flag names, e.g.
	/// `-i INT, --int INT`.
	pub fn metavars<S: Into<String>>(mut self, metavars: S) -> Self {
		self.metavars = metavars.into();
		self
	}

	#[must_use]
	/// # Matcher.
	pub const fn matcher(&self) -> &FlagMatcher { &self.matcher }
}

impl<P: Params> Argument for Flag<P> {
	type Value = P::Values;

	fn attempt(&self, cursor: &mut Cursor<'_>) -> ParseResult<P::Values> {
		if cursor.is_done() || cursor.rest()?.is_empty() {
			return Err(ParseError::bound("Flag::attempt"));
		}

		if self.matcher.matches(cursor)? { self.params.decode_all(cursor) }
		else { Err(ParseError::unknown(cursor)) }
	}

	fn display(&self) -> String {
		let mut out = String::new();
		if let Some(short) = self.matcher.short {
			out.push('-');
			out.push(short);
			self.push_metavars(&mut out);
		}
		if let Some(long) = self.matcher.long.as_deref() {
			if ! out.is_empty() { out.push_str(", "); }
			out.push_str(long);
			self.push_metavars(&mut out);
		}
		out
	}

	#[inline]
	fn rules(&self) -> &Rules { &self.rules }

	#[inline]
	fn rules_mut(&mut self) -> &mut Rules { &mut self.rules }
}

impl<P> Flag<P> {
	/// # Push Metavars.
	fn push_metavars(&self, out: &mut String) {
		if ! self.metavars.is_empty() {
			out.push(' ');
			out.push_str(&self.metavars);
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		ParseErrorKind,
		of,
	};

	fn argv(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn t_matcher_short() {
		let m = FlagMatcher::new(Some('a'), Some("--apple"));
		let raw = argv(&["-ab", "-a"]);
		let mut cur = Cursor::new(&raw);

		// The leading dash is the dispatcher's problem.
		assert_eq!(m.matches(&mut cur).ok(), Some(false));
		assert!(cur.advance(1).is_ok());

		assert_eq!(m.matches(&mut cur).ok(), Some(true));
		assert_eq!((cur.pos(), cur.offset()), (0, 2));

		// B isn't ours.
		assert_eq!(m.matches(&mut cur).ok(), Some(false));
		assert_eq!((cur.pos(), cur.offset()), (0, 2));
	}

	#[test]
	fn t_matcher_long() {
		let m = FlagMatcher::new(Some('a'), Some("--apple"));
		let raw = argv(&["--apple", "--apples", "x--apple"]);
		let mut cur = Cursor::new(&raw);

		assert_eq!(m.matches(&mut cur).ok(), Some(true));
		assert_eq!((cur.pos(), cur.offset()), (1, 0));

		// Exact matches only.
		assert_eq!(m.matches(&mut cur).ok(), Some(false));
		cur.next_token();

		// And never mid-token.
		assert!(cur.advance(1).is_ok());
		assert_eq!(m.matches(&mut cur).ok(), Some(false));
	}

	#[test]
	fn t_matcher_none() {
		// No long name shouldn't mean "matches the empty string".
		let m = FlagMatcher::new::<String>(Some('x'), None);
		let raw = argv(&["x", ""]);
		let mut cur = Cursor::new(&raw);
		assert_eq!(m.matches(&mut cur).ok(), Some(true));
		assert!(m.matches(&mut cur).is_err(), "Bug: matched an empty token.");
	}

	#[test]
	fn t_display() {
		assert_eq!(Flag::switch('h', "--help").display(), "-h, --help");
		assert_eq!(
			Flag::new('m', "--multi", (of::<bool>(), of::<i32>()))
				.metavars("BOOL INT")
				.display(),
			"-m BOOL INT, --multi BOOL INT",
		);
		assert_eq!(Flag::long("--quiet", ()).display(), "--quiet");
		assert_eq!(Flag::short('q', ()).display(), "-q");
	}

	#[test]
	fn t_attempt() {
		let flag = Flag::new('n', "--num", (of::<i32>(),));

		let raw = argv(&["--num", "42"]);
		let mut cur = Cursor::new(&raw);
		assert_eq!(flag.attempt(&mut cur).ok(), Some((42,)));
		assert!(cur.is_done());

		// Not ours.
		let raw = argv(&["--nope"]);
		let mut cur = Cursor::new(&raw);
		assert!(flag.attempt(&mut cur).expect_err("Bug: matched --nope.").is_unknown());

		// Parameters can't be read mid-bundle.
		let raw = argv(&["-nx", "42"]);
		let mut cur = Cursor::new(&raw);
		assert!(cur.advance(1).is_ok());
		assert_eq!(
			flag.attempt(&mut cur).map_err(ParseError::into_kind),
			Err(ParseErrorKind::InvalidShortoptList("-nx".to_owned())),
		);

		// Running out of road is a bound error.
		let raw = argv(&["-n"]);
		let mut cur = Cursor::new(&raw);
		assert!(cur.advance(1).is_ok());
		assert!(flag.attempt(&mut cur).expect_err("Bug: decoded nothing.").is_bound());
	}
}
