/*!
# Tartan: Demo

Try something like:

```bash
cargo run --example demo -- -b false build --int 314 -fm true 42 all -fb true
```

Set `RUST_LOG=tartan=trace` to watch the matching as it happens.
*/

use std::process::ExitCode;
use tartan::{
	Argument,
	Cond,
	Flag,
	Group,
	Lookup,
	Parser,
	of,
};
use tracing_subscriber::EnvFilter;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Command.
enum Cmd {
	/// # Build.
	Build,

	/// # Run.
	Run,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Command Subject.
enum Subject {
	/// # All.
	All,

	/// # None.
	None,
}



fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let mut parser = Parser::new();

	let help = parser.flag(
		Flag::switch('h', "--help")
			.postcondition(Cond::Max(0))
			.description("print this message and exit")
	);
	let plain = parser.flag(
		Flag::switch('f', "--flag")
			.description("this doesn't do anything at all, just a fancy flag")
	);
	let boolean = parser.flag(
		Flag::new('b', "--bool", (of::<bool>(),))
			.metavars("BOOL")
			.description("pass a boolean")
	);
	let int = parser.flag(
		Flag::new('i', "--int", (of::<i32>(),))
			.metavars("INT")
			.postcondition(Cond::Min(1))
			.description("pass an integer")
	);
	let multi = parser.flag(
		Flag::new('m', "--multi", (of::<bool>(), of::<i32>()))
			.metavars("BOOL INT")
			.postcondition(Cond::all([Cond::exactly(1), Cond::after(boolean)]))
			.description("pass both a boolean and an integer")
	);

	let cmd = parser.positional(
		Lookup::new([("build", Cmd::Build), ("run", Cmd::Run)])
			.precondition(Cond::Max(0))
			.postcondition(Cond::Min(1))
			.description("command to execute")
	);
	let subject = parser.positional(
		Lookup::new([("all", Subject::All), ("none", Subject::None)])
			.precondition(Cond::after(cmd))
			.postcondition(Cond::exactly(1))
			.description("subject to execute the command on")
	);

	match parser.parse_env() {
		Ok(()) => {
			println!("success!");

			println!("\n{} summary:\n  multiplicity: {}", parser.display(plain), parser.multiplicity(plain));

			println!("\n{} summary:\n  multiplicity: {}", parser.display(boolean), parser.multiplicity(boolean));
			for (b,) in parser.results(boolean) { println!("  > {b}"); }

			println!("\n{} summary:\n  multiplicity: {}", parser.display(int), parser.multiplicity(int));
			for (i,) in parser.results(int) { println!("  > {i}"); }

			println!("\n{} summary:\n  multiplicity: {}", parser.display(multi), parser.multiplicity(multi));
			for (b, i) in parser.results(multi) { println!("  > {b} {i}"); }

			println!();
			println!("command: {:?}", parser.results(cmd).first());
			println!("subject: {:?}", parser.results(subject).first());
			ExitCode::SUCCESS
		},
		Err(_) if parser.matched(help) => {
			println!("Arguments:");
			print_help(&parser, Group::Positional);
			println!("\nFlags:");
			print_help(&parser, Group::Flag);
			ExitCode::SUCCESS
		},
		Err(e) => {
			eprintln!("{}", parser.report(&e));
			ExitCode::FAILURE
		},
	}
}

/// # Print Help Rows.
///
/// Usages are indented two spaces, with descriptions lined up four spaces
/// past the longest one.
fn print_help(parser: &Parser, group: Group) {
	let rows = parser.help(group);
	let width = rows.iter().map(|r| r.usage.chars().count()).max().unwrap_or(0);
	for row in rows {
		println!("  {:<width$}    {}", row.usage, row.description);
	}
}
