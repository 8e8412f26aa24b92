/*!
# Tartan: Parser.

The [`Parser`] holds the argument definitions and drives the matching:

1. Flags get first dibs on the token under the cursor;
2. Positionals get the next look if no flag wanted it;
3. Repeat until the tokens run out;
4. Check every postcondition.

Within each group, candidates are tried in declaration order against a copy
of the cursor. The first to succeed has its copy committed; the rest are
never consulted for that step.
*/

use crate::{
	Arg,
	ArgId,
	Argument,
	Cursor,
	Flag,
	ParseError,
	ParseErrorKind,
	ParseResult,
	Params,
	Rules,
};
use std::{
	any::Any,
	fmt,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Dispatch Group.
pub enum Group {
	/// # Flags.
	///
	/// These are only offered tokens that look like flags.
	Flag,

	/// # Positionals.
	///
	/// These are offered whatever the flags passed on.
	Positional,
}



/// # Type-Erased Argument.
///
/// This lets arguments with different value types share one table.
trait Slot {
	/// # Display.
	fn display(&self) -> String;

	/// # Rules.
	fn rules(&self) -> &Rules;

	/// # Attempt and Collect.
	///
	/// Run the argument's attempt, keeping the value if it succeeds.
	fn consume(&mut self, cursor: &mut Cursor<'_>) -> ParseResult<()>;

	/// # Results (As `Vec<Value>`).
	fn results(&self) -> &dyn Any;

	/// # Clear Results.
	fn clear(&mut self);
}

/// # Argument and Results.
struct Store<A: Argument> {
	/// # Argument.
	arg: A,

	/// # Collected Values.
	results: Vec<A::Value>,
}

impl<A: Argument> Slot for Store<A> {
	fn display(&self) -> String { self.arg.display() }

	fn rules(&self) -> &Rules { self.arg.rules() }

	fn consume(&mut self, cursor: &mut Cursor<'_>) -> ParseResult<()> {
		let value = self.arg.attempt(cursor)?;
		self.results.push(value);
		Ok(())
	}

	fn results(&self) -> &dyn Any { &self.results }

	fn clear(&mut self) { self.results.clear(); }
}

/// # Registered Argument.
struct Entry {
	/// # Group.
	group: Group,

	/// # Multiplicity.
	multiplicity: usize,

	/// # Argument.
	slot: Box<dyn Slot>,
}



#[derive(Clone, Copy)]
/// # Parse State.
///
/// This is the read-only view handed to [`Cond::check`](crate::Cond::check):
/// the match history plus each argument's multiplicity and display name.
pub struct State<'p> {
	/// # Arguments.
	entries: &'p [Entry],

	/// # Match History.
	history: &'p [ArgId],
}

impl fmt::Debug for State<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("State")
			.field("history", &self.history)
			.finish_non_exhaustive()
	}
}

impl<'p> State<'p> {
	#[must_use]
	/// # Match History.
	///
	/// The identities of every successful match, in the order they happened.
	pub const fn history(&self) -> &'p [ArgId] { self.history }

	#[must_use]
	/// # Multiplicity.
	///
	/// Return the number of times `id` has matched so far.
	pub fn multiplicity(&self, id: ArgId) -> usize {
		self.entries.get(id.index()).map_or(0, |e| e.multiplicity)
	}

	#[must_use]
	/// # Display.
	pub fn display(&self, id: ArgId) -> String {
		self.entries.get(id.index())
			.map_or_else(|| format!("(unknown {id})"), |e| e.slot.display())
	}
}



#[derive(Default)]
/// # Argument Parser.
///
/// Register flags and positionals, parse, then pull the results back out
/// through the typed handles returned at registration.
///
/// A parse resets all counters and results first, so a parser can be reused;
/// the state from the last parse remains available until the next.
///
/// ## Examples
///
/// ```
/// use tartan::{Argument, Cond, Flag, Lookup, Parser, of};
///
/// let mut parser = Parser::new();
/// let force = parser.flag(Flag::switch('f', "--force"));
/// let jobs = parser.flag(Flag::new('j', "--jobs", (of::<usize>(),)));
/// let cmd = parser.positional(
///     Lookup::new([("build", 0_u8), ("clean", 1)])
///         .postcondition(Cond::exactly(1)),
/// );
///
/// parser.parse(["-fj", "4", "build"]).unwrap();
/// assert!(parser.matched(force));
/// assert_eq!(parser.results(jobs), [(4,)]);
/// assert_eq!(parser.results(cmd), [0]);
///
/// // The command is required.
/// let err = parser.parse(["-f"]).unwrap_err();
/// assert_eq!(err.arg(), Some(cmd.id()));
/// ```
pub struct Parser {
	/// # Arguments (In Declaration Order).
	entries: Vec<Entry>,

	/// # Match History.
	history: Vec<ArgId>,

	/// # End of Options Seen?
	ended: bool,
}

impl fmt::Debug for Parser {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let args: Vec<(String, usize)> = self.entries.iter()
			.map(|e| (e.slot.display(), e.multiplicity))
			.collect();

		f.debug_struct("Parser")
			.field("args", &args)
			.field("history", &self.history)
			.field("ended", &self.ended)
			.finish()
	}
}

/// ## Setup.
impl Parser {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	/// # Add Flag.
	///
	/// Flags are offered flag-like tokens before any positional is.
	pub fn flag<P: Params>(&mut self, flag: Flag<P>) -> Arg<P::Values> {
		self.push(Group::Flag, flag)
	}

	/// # Add Positional.
	///
	/// Positionals are offered whatever tokens the flags turn down.
	pub fn positional<A: Argument>(&mut self, arg: A) -> Arg<A::Value> {
		self.push(Group::Positional, arg)
	}

	/// # Push Argument.
	fn push<A: Argument>(&mut self, group: Group, arg: A) -> Arg<A::Value> {
		let id = ArgId::new(self.entries.len());
		self.entries.push(Entry {
			group,
			multiplicity: 0,
			slot: Box::new(Store { arg, results: Vec::new() }),
		});
		Arg::new(id)
	}
}

/// ## Parsing.
impl Parser {
	/// # Parse.
	///
	/// Match `args` against the registered arguments. `args` should not
	/// include the program name.
	///
	/// ## Errors
	///
	/// Returns the first fatal error encountered while matching, an unknown
	/// argument error if some token matched nothing, or the first failed
	/// postcondition.
	pub fn parse<I, S>(&mut self, args: I) -> ParseResult<()>
	where I: IntoIterator<Item=S>, S: Into<String> {
		let argv: Vec<String> = args.into_iter().map(Into::into).collect();
		self.reset();

		let res = self.run(&argv);
		tracing::debug!(
			tokens = argv.len(),
			matches = self.history.len(),
			ok = res.is_ok(),
			"parse finished",
		);
		res
	}

	/// # Parse Environment.
	///
	/// Parse [`std::env::args_os`], minus the program name. Invalid UTF-8 is
	/// replaced lossily.
	///
	/// ## Errors
	///
	/// See [`Parser::parse`].
	pub fn parse_env(&mut self) -> ParseResult<()> {
		self.parse(
			std::env::args_os()
				.skip(1)
				.map(|a| a.to_string_lossy().into_owned())
		)
	}

	/// # Reset.
	fn reset(&mut self) {
		for e in &mut self.entries {
			e.multiplicity = 0;
			e.slot.clear();
		}
		self.history.clear();
		self.ended = false;
	}

	/// # Run.
	///
	/// This is the main loop.
	fn run(&mut self, argv: &[String]) -> ParseResult<()> {
		let mut cursor = Cursor::new(argv);
		while ! cursor.is_done() {
			let before = cursor;
			match self.dispatch_flags(&mut cursor) {
				Ok(()) => {},
				Err(e) if e.is_unknown() => match self.dispatch(Group::Positional, &mut cursor) {
					Ok(()) => {},
					Err(e) if e.is_unknown() => return Err(ParseError::unknown(&cursor)),
					Err(e) => return Err(e),
				},
				Err(e) => return Err(e),
			}

			// Something matched without consuming anything. That would loop
			// forever.
			if cursor.same_position(&before) {
				let err = ParseError::bound("Parser::parse");
				return Err(match self.history.last() {
					Some(id) => err.with_arg(*id),
					None => err,
				});
			}
		}

		self.check_postconditions()
	}

	/// # Dispatch Flags.
	///
	/// This handles the flag-specific business: the end-of-options marker,
	/// filtering out tokens that can't be flags, and skipping the leading
	/// dash of a short option run.
	fn dispatch_flags(&mut self, cursor: &mut Cursor<'_>) -> ParseResult<()> {
		let token = cursor.token()?;

		// The marker itself is consumed here; everything after it belongs to
		// the positionals.
		if ! self.ended && cursor.is_aligned() && token == "--" {
			tracing::trace!(pos = cursor.pos(), "end of options");
			self.ended = true;
			cursor.next_token();
			return Ok(());
		}

		if self.ended || token == "-" || ! token.starts_with('-') {
			return Err(ParseError::unknown(cursor));
		}

		let mut local = *cursor;
		if local.is_aligned() && ! token.starts_with("--") { local.advance(1)?; }

		self.dispatch(Group::Flag, &mut local)?;
		*cursor = local;
		Ok(())
	}

	/// # Dispatch.
	///
	/// Try each candidate in the group, in order, committing the first match.
	///
	/// A failed precondition just takes the candidate out of the running, as
	/// does an unknown argument error from the attempt. Anything else is
	/// fatal.
	fn dispatch(&mut self, group: Group, cursor: &mut Cursor<'_>) -> ParseResult<()> {
		for idx in 0..self.entries.len() {
			if self.entries[idx].group != group { continue; }
			let id = ArgId::new(idx);

			if let Err(e) = self.entries[idx].slot.rules().precondition.check(id, &self.state()) {
				if e.is_cond_failed() {
					tracing::trace!(arg = %id, reason = %e, "precondition unmet");
					continue;
				}
				return Err(e.with_arg(id));
			}

			let mut copy = *cursor;
			let entry = &mut self.entries[idx];
			match entry.slot.consume(&mut copy) {
				Ok(()) => {
					entry.multiplicity += 1;
					self.history.push(id);
					*cursor = copy;
					tracing::trace!(arg = %id, pos = cursor.pos(), offset = cursor.offset(), "matched");
					return Ok(());
				},
				Err(e) if e.is_unknown() => {},
				Err(e) => {
					tracing::trace!(arg = %id, error = %e, "attempt failed");
					return Err(e.with_arg(id));
				},
			}
		}

		Err(ParseError::unknown(cursor))
	}

	/// # Check Postconditions.
	fn check_postconditions(&self) -> ParseResult<()> {
		let state = self.state();
		self.entries.iter().enumerate().try_for_each(|(idx, e)| {
			let id = ArgId::new(idx);
			e.slot.rules().postcondition.check(id, &state).map_err(|err| err.with_arg(id))
		})
	}
}

/// ## Results.
impl Parser {
	#[must_use]
	/// # State.
	///
	/// Return a view of the current match state, e.g. for evaluating a
	/// [`Cond`](crate::Cond) by hand.
	pub fn state(&self) -> State<'_> {
		State {
			entries: &self.entries,
			history: &self.history,
		}
	}

	#[must_use]
	/// # Results.
	///
	/// Return the values collected by an argument, one per match, in match
	/// order.
	///
	/// Handles are only meaningful for the parser that issued them. They are
	/// just declaration indices, so a foreign handle either comes back empty
	/// (out of range or a different value type) or reads whichever of this
	/// parser's arguments shares its index.
	pub fn results<T: 'static>(&self, arg: Arg<T>) -> &[T] {
		self.entries.get(arg.id().index())
			.and_then(|e| e.slot.results().downcast_ref::<Vec<T>>())
			.map_or(&[], Vec::as_slice)
	}

	#[must_use]
	/// # Multiplicity.
	pub fn multiplicity<A: Into<ArgId>>(&self, arg: A) -> usize {
		self.state().multiplicity(arg.into())
	}

	#[must_use]
	/// # Matched?
	///
	/// Returns `true` if the argument matched at least once.
	pub fn matched<A: Into<ArgId>>(&self, arg: A) -> bool {
		0 < self.multiplicity(arg)
	}

	#[must_use]
	/// # Display.
	pub fn display<A: Into<ArgId>>(&self, arg: A) -> String {
		self.state().display(arg.into())
	}

	#[must_use]
	/// # Description.
	pub fn description<A: Into<ArgId>>(&self, arg: A) -> Option<&str> {
		self.entries.get(arg.into().index())
			.map(|e| e.slot.rules().description.as_str())
	}

	#[must_use]
	/// # Match History.
	pub fn history(&self) -> &[ArgId] { &self.history }

	#[must_use]
	/// # Number of Arguments.
	pub fn len(&self) -> usize { self.entries.len() }

	#[must_use]
	/// # No Arguments?
	pub fn is_empty(&self) -> bool { self.entries.is_empty() }

	#[must_use]
	/// # Help Rows.
	///
	/// Return the usage and description of each argument in the group, in
	/// declaration order. Layout is up to you.
	pub fn help(&self, group: Group) -> Vec<HelpRow<'_>> {
		self.entries.iter()
			.filter(|e| e.group == group)
			.map(|e| HelpRow {
				usage: e.slot.display(),
				description: e.slot.rules().description.as_str(),
			})
			.collect()
	}

	#[must_use]
	/// # Report.
	///
	/// Return a [`Display`](fmt::Display)able rendering of an error that
	/// names the offending argument along with its multiplicity.
	pub const fn report<'p>(&'p self, err: &'p ParseError) -> Report<'p> {
		Report { parser: self, err }
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Help Row.
pub struct HelpRow<'p> {
	/// # Usage, e.g. `-h, --help`.
	pub usage: String,

	/// # Description.
	pub description: &'p str,
}



#[derive(Debug, Clone, Copy)]
/// # Error Report.
///
/// See [`Parser::report`].
pub struct Report<'p> {
	/// # Parser.
	parser: &'p Parser,

	/// # Error.
	err: &'p ParseError,
}

impl fmt::Display for Report<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let arg = self.err.arg().map_or_else(
			|| "(none)".to_owned(),
			|id| format!("{} ({})", self.parser.display(id), self.parser.multiplicity(id)),
		);

		match self.err.kind() {
			ParseErrorKind::UnknownArg { token, .. } => write!(f, "unknown argument: {token}"),
			ParseErrorKind::BoundError(method) => write!(
				f,
				"<internal>: bound check failed in {method}:\n  while parsing {arg}",
			),
			ParseErrorKind::InvalidParam { msg, given } => write!(
				f,
				"invalid parameter for {arg}:\n  could not parse '{given}':\n    {msg}",
			),
			ParseErrorKind::InvalidShortoptList(list) => write!(
				f,
				"shortopt list contains {arg}:\n  list: '{list}'",
			),
			ParseErrorKind::CondFailed(msg) => {
				write!(f, "condition failed for {arg}:")?;
				for line in msg.lines() { write!(f, "\n  {line}")?; }
				Ok(())
			},
		}
	}
}
