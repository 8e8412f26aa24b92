/*!
# Tartan

[![license](https://img.shields.io/badge/license-wtfpl-ff1493?style=flat-square)](https://en.wikipedia.org/wiki/WTFPL)

This crate provides a declarative, backtracking CLI argument matcher called [`Parser`].

You register the flags and positionals your app accepts, each with optional pre- and postconditions like "at most once", "only after `--bool`", or "conflicts with `--quiet`". [`Parser::parse`] then walks the argument stream, offering each token to the candidates in the order they were declared, and collects fully typed results for each match.

Short options can be bundled (`-abc`), the last letter of a bundle can take parameters (`-fm true 42`), and `--` ends option handling for the rest of the stream.

Errors are precise. Each [`ParseError`] says what went wrong and which argument it went wrong for, and [`Parser::report`] will render it with that argument's name.



## Example

```
use tartan::{Argument, Cond, Flag, Lookup, Parser, of};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Cmd { Build, Run }

let mut parser = Parser::new();

// -h, --help (Never "succeeds", but lets you know it was asked for.)
let help = parser.flag(
    Flag::switch('h', "--help")
        .postcondition(Cond::Max(0))
        .description("print this message and exit"),
);

// -j, --jobs <NUM>
let jobs = parser.flag(
    Flag::new('j', "--jobs", (of::<usize>(),))
        .metavars("NUM")
        .postcondition(Cond::Max(1)),
);

// build | run
let cmd = parser.positional(
    Lookup::new([("build", Cmd::Build), ("run", Cmd::Run)])
        .precondition(Cond::Max(0))
        .postcondition(Cond::Min(1)),
);

match parser.parse(["-j", "4", "build"]) {
    Ok(()) => {
        assert_eq!(parser.results(jobs), [(4,)]);
        assert_eq!(parser.results(cmd), [Cmd::Build]);
    },
    Err(_) if parser.matched(help) => { /* Print help. */ },
    Err(e) => panic!("{}", parser.report(&e)),
}
```



## Logging

The parser emits [`tracing`](https://crates.io/crates/tracing) events as it goes: `TRACE` for each candidate match, skip, and failure, and a `DEBUG` summary at the end of each parse. Nothing is printed unless your app installs a subscriber.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod arg;
mod cond;
mod cursor;
mod decode;
mod error;
mod flag;
mod parser;

pub use arg::{
	Arg,
	ArgId,
	Argument,
	Custom,
	Rules,
};
pub use cond::Cond;
pub use cursor::Cursor;
pub use decode::{
	FromToken,
	Lookup,
	Of,
	Param,
	Params,
	of,
};
pub use error::{
	ParseError,
	ParseErrorKind,
	ParseResult,
};
pub use flag::{
	Flag,
	FlagMatcher,
};
pub use parser::{
	Group,
	HelpRow,
	Parser,
	Report,
	State,
};

// Used by the demo and benchmarks.
#[cfg(test)] use brunch as _;
#[cfg(test)] use tracing_subscriber as _;
