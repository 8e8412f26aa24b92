/*!
# Tartan: Conditions.
*/

use crate::{
	ArgId,
	ParseError,
	ParseResult,
	State,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Condition.
///
/// Conditions gate an argument's eligibility (as a precondition) or validate
/// the final state of a parse (as a postcondition). They are evaluated on
/// behalf of a particular argument (called "me" below), against the match
/// history and multiplicity counters.
///
/// A failure is always a
/// [`ParseErrorKind::CondFailed`](crate::ParseErrorKind::CondFailed).
///
/// ## Multiplicity Timing
///
/// [`Cond::Min`] and [`Cond::Max`] read the counter as it stands at the
/// moment of evaluation. As a precondition that is the count _before_ the
/// attempt in question; as a postcondition it is the final count. Mixing the
/// two is legal, but `Max(1)` as a precondition allows two matches, not one.
pub enum Cond {
	#[default]
	/// # Always Pass.
	True,

	/// # Always Fail.
	False,

	/// # Logical AND.
	///
	/// The first failure is returned as-is. An empty list passes.
	All(Vec<Self>),

	/// # Logical OR.
	///
	/// Passes as soon as any member does. If all of them fail, the messages
	/// are merged into one error. An empty list fails.
	Any(Vec<Self>),

	/// # Requires.
	///
	/// The argument must have matched at least once already.
	Requires(ArgId),

	/// # Conflicts.
	///
	/// The argument must not have matched.
	Conflicts(ArgId),

	/// # Before.
	///
	/// Fails if the argument appears in the history before me. (If I haven't
	/// matched yet, any appearance at all counts.)
	Before(ArgId),

	/// # After.
	///
	/// Fails unless the argument appears in the history, and does so before
	/// my own first appearance.
	///
	/// Take care using this as a postcondition on an optional argument: if
	/// neither _it_ nor I ever matched, this still fails. Wrap it, e.g.
	/// `Cond::any([Cond::Max(0), Cond::after(x)])`, or use it as a
	/// precondition instead.
	After(ArgId),

	/// # Minimum Multiplicity.
	Min(usize),

	/// # Maximum Multiplicity.
	Max(usize),
}

/// ## Constructors.
impl Cond {
	#[must_use]
	/// # All.
	pub fn all<I: IntoIterator<Item=Self>>(conds: I) -> Self {
		Self::All(conds.into_iter().collect())
	}

	#[must_use]
	/// # Any.
	pub fn any<I: IntoIterator<Item=Self>>(conds: I) -> Self {
		Self::Any(conds.into_iter().collect())
	}

	#[must_use]
	/// # Requires.
	pub fn requires<A: Into<ArgId>>(arg: A) -> Self { Self::Requires(arg.into()) }

	#[must_use]
	/// # Conflicts.
	pub fn conflicts<A: Into<ArgId>>(arg: A) -> Self { Self::Conflicts(arg.into()) }

	#[must_use]
	/// # Before.
	pub fn before<A: Into<ArgId>>(arg: A) -> Self { Self::Before(arg.into()) }

	#[must_use]
	/// # After.
	pub fn after<A: Into<ArgId>>(arg: A) -> Self { Self::After(arg.into()) }

	#[must_use]
	/// # Between.
	///
	/// Shorthand for `Min(min)` and `Max(max)`.
	pub fn between(min: usize, max: usize) -> Self {
		Self::All(vec![Self::Min(min), Self::Max(max)])
	}

	#[must_use]
	/// # Exactly.
	pub fn exactly(n: usize) -> Self { Self::between(n, n) }
}

impl Cond {
	/// # Check.
	///
	/// Evaluate the condition on behalf of `me`.
	///
	/// ## Errors
	///
	/// Returns a condition failure describing the first (or, for
	/// [`Cond::Any`], every) unmet requirement.
	pub fn check(&self, me: ArgId, state: &State<'_>) -> ParseResult<()> {
		match self {
			Self::True => Ok(()),
			Self::False => Err(ParseError::cond_failed("False")),
			Self::All(conds) => conds.iter().try_for_each(|c| c.check(me, state)),
			Self::Any(conds) => check_any(conds, me, state),

			Self::Requires(other) =>
				if state.history().contains(other) { Ok(()) }
				else { Err(ParseError::cond_failed(format!("Requires {}", state.display(*other)))) },
			Self::Conflicts(other) =>
				if state.history().contains(other) {
					Err(ParseError::cond_failed(format!("Conflicts with {}", state.display(*other))))
				}
				else { Ok(()) },

			Self::Before(other) => {
				for id in state.history() {
					if id == other {
						return Err(ParseError::cond_failed(format!("Before {}", state.display(*other))));
					}
					if *id == me { break; }
				}
				Ok(())
			},
			Self::After(other) => {
				for id in state.history() {
					if id == other { return Ok(()); }
					if *id == me { break; }
				}
				Err(ParseError::cond_failed(format!("After {}", state.display(*other))))
			},

			Self::Min(n) => {
				let m = state.multiplicity(me);
				if *n <= m { Ok(()) }
				else { Err(ParseError::cond_failed(format!("Min {n} (found {m})"))) }
			},
			Self::Max(n) => {
				let m = state.multiplicity(me);
				if m <= *n { Ok(()) }
				else { Err(ParseError::cond_failed(format!("Max {n} (found {m})"))) }
			},
		}
	}
}



/// # Check Any.
///
/// Return the first success, or merge all the failure messages if nothing
/// passes.
fn check_any(conds: &[Cond], me: ArgId, state: &State<'_>) -> ParseResult<()> {
	let mut msg = format!("Failed all conditions on {}:", state.display(me));
	for c in conds {
		match c.check(me, state) {
			Ok(()) => return Ok(()),
			Err(e) => {
				for line in e.message().lines() {
					msg.push_str("\n  ");
					msg.push_str(line);
				}
			},
		}
	}

	Err(ParseError::cond_failed(msg))
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		Flag,
		ParseErrorKind,
		Parser,
	};

	/// # Three Switches.
	fn parser() -> (Parser, ArgId, ArgId, ArgId) {
		let mut p = Parser::new();
		let a = p.flag(Flag::switch('a', "--apple")).id();
		let b = p.flag(Flag::switch('b', "--banana")).id();
		let c = p.flag(Flag::switch('c', "--cherry")).id();
		(p, a, b, c)
	}

	fn msg(res: ParseResult<()>) -> String {
		match res.map_err(ParseError::into_kind) {
			Err(ParseErrorKind::CondFailed(m)) => m,
			other => panic!("Expected a condition failure, got {other:?}."),
		}
	}

	#[test]
	fn t_requires_conflicts() {
		let (mut p, a, b, c) = parser();
		assert!(p.parse(["-ab"]).is_ok());
		let state = p.state();

		assert!(Cond::requires(a).check(c, &state).is_ok());
		assert!(Cond::requires(c).check(a, &state).is_err());
		assert!(Cond::conflicts(c).check(a, &state).is_ok());
		assert_eq!(
			msg(Cond::conflicts(b).check(a, &state)),
			"Conflicts with -b, --banana",
		);
	}

	#[test]
	fn t_before_after() {
		let (mut p, a, b, c) = parser();
		assert!(p.parse(["-a", "-b"]).is_ok());
		let state = p.state();

		// A came before B.
		assert!(Cond::before(b).check(a, &state).is_ok());
		assert!(Cond::after(a).check(b, &state).is_ok());

		// Not the other way around.
		assert!(Cond::before(a).check(b, &state).is_err());
		assert!(Cond::after(b).check(a, &state).is_err());

		// C hasn't matched, so it comes before nothing that already has…
		assert!(Cond::before(a).check(c, &state).is_err());
		// …and is after whatever has.
		assert!(Cond::after(a).check(c, &state).is_ok());

		// Nobody is after C since it never turned up.
		assert_eq!(msg(Cond::after(c).check(a, &state)), "After -c, --cherry");

		// Not even C itself, which is why optional arguments need a guard.
		assert!(Cond::after(c).check(c, &state).is_err());
		assert!(Cond::any([Cond::Max(0), Cond::after(c)]).check(c, &state).is_ok());
	}

	#[test]
	fn t_min_max() {
		let (mut p, a, b, c) = parser();
		assert!(p.parse(["-aa", "-b"]).is_ok());
		let state = p.state();

		assert!(Cond::Min(2).check(a, &state).is_ok());
		assert!(Cond::Max(2).check(a, &state).is_ok());
		assert_eq!(msg(Cond::Max(1).check(a, &state)), "Max 1 (found 2)");
		assert!(Cond::exactly(1).check(b, &state).is_ok());
		assert!(Cond::exactly(1).check(c, &state).is_err());
		assert!(Cond::between(0, 1).check(c, &state).is_ok());
	}

	#[test]
	fn t_all_any() {
		let (mut p, a, _, _) = parser();
		assert!(p.parse(["-a"]).is_ok());
		let state = p.state();

		// All returns the first failure verbatim.
		assert_eq!(
			msg(Cond::all([Cond::True, Cond::Max(0), Cond::False]).check(a, &state)),
			"Max 0 (found 1)",
		);
		assert!(Cond::all([]).check(a, &state).is_ok());

		// Any passes if anything does.
		assert!(Cond::any([Cond::False, Cond::Min(1), Cond::Max(0)]).check(a, &state).is_ok());

		// And merges everything otherwise.
		let m = msg(Cond::any([Cond::False, Cond::Max(0)]).check(a, &state));
		assert!(m.starts_with("Failed all conditions on -a, --apple:"), "Bug: bad header {m:?}.");
		assert!(m.contains("False"), "Bug: missing first failure in {m:?}.");
		assert!(m.contains("Max 0"), "Bug: missing second failure in {m:?}.");

		assert!(Cond::any([]).check(a, &state).is_err());
	}

	#[test]
	fn t_any_nested() {
		let (mut p, a, b, c) = parser();
		assert!(p.parse(["-c"]).is_ok());
		let state = p.state();

		// A nested Any keeps its lines indented under the outer header.
		let inner = Cond::any([Cond::requires(a), Cond::requires(b)]);
		let m = msg(Cond::any([inner, Cond::Max(0)]).check(c, &state));
		let lines: Vec<&str> = m.lines().collect();
		assert_eq!(lines, [
			"Failed all conditions on -c, --cherry:",
			"  Failed all conditions on -c, --cherry:",
			"    Requires -a, --apple",
			"    Requires -b, --banana",
			"  Max 0 (found 1)",
		]);
	}
}
