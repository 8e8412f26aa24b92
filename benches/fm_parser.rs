/*!
# Benchmark: `tartan::Parser`
*/

use brunch::{
	Bench,
	benches,
};
use tartan::{
	Argument,
	Cond,
	Flag,
	Lookup,
	Parser,
	of,
};

/// # Parser.
///
/// This registers the usual suspects: a few switches, a couple of flags with
/// parameters, and a lookup positional.
fn parser() -> Parser {
	let mut p = Parser::new();
	p.flag(Flag::switch('h', "--help").postcondition(Cond::Max(0)));
	p.flag(Flag::switch('q', "--quiet"));
	let verbose = p.flag(Flag::switch('v', "--verbose"));
	p.flag(Flag::new('j', "--jobs", (of::<usize>(),)).precondition(Cond::conflicts(verbose)));
	p.flag(Flag::new('m', "--multi", (of::<bool>(), of::<i32>())));
	p.positional(
		Lookup::new([("build", 0_u8), ("run", 1), ("clean", 2)])
			.postcondition(Cond::exactly(1))
	);
	p
}

benches!(
	Bench::new("tartan::Parser::parse(build)")
		.run_seeded_with(parser, |mut p| p.parse(["build"]).is_ok()),

	Bench::new("tartan::Parser::parse(-qj 4 build)")
		.run_seeded_with(parser, |mut p| p.parse(["-qj", "4", "build"]).is_ok()),

	Bench::new("tartan::Parser::parse(-vvv --multi true 42 run)")
		.run_seeded_with(parser, |mut p| p.parse(["-vvv", "--multi", "true", "42", "run"]).is_ok()),

	Bench::spacer(),

	Bench::new("tartan::Parser::parse(--nope)")
		.run_seeded_with(parser, |mut p| p.parse(["--nope"]).is_err()),
);
