/*!
# Tartan: Token Cursor.

The cursor tracks a read position within the token stream: the index of the
current token plus a byte offset into it. The offset is only ever non-zero
while working through a bundle of short options like `-abc`.
*/

use crate::ParseError;



#[derive(Debug, Clone, Copy)]
/// # Token Cursor.
///
/// This is a cheap, copyable view over the token stream. The dispatcher
/// copies it before every speculative match attempt and writes the copy back
/// only if the attempt succeeds, so a cursor must never own anything.
///
/// ## Invariants
///
/// * `pos <= argv.len()`;
/// * `off <= argv[pos].len()` while `pos` is in range;
/// * `off` always sits on a `char` boundary;
pub struct Cursor<'a> {
	/// # Tokens.
	argv: &'a [String],

	/// # Token Index.
	pos: usize,

	/// # Byte Offset Within the Current Token.
	off: usize,
}

impl<'a> Cursor<'a> {
	#[must_use]
	/// # New.
	///
	/// Start a new cursor at the very beginning of `argv`.
	pub const fn new(argv: &'a [String]) -> Self {
		Self { argv, pos: 0, off: 0 }
	}

	#[must_use]
	/// # Done?
	///
	/// Returns `true` once every token has been consumed.
	pub const fn is_done(&self) -> bool { self.argv.len() <= self.pos }

	#[must_use]
	/// # Token Index.
	pub const fn pos(&self) -> usize { self.pos }

	#[must_use]
	/// # Offset.
	///
	/// Return the byte offset into the current token.
	pub const fn offset(&self) -> usize { self.off }

	#[must_use]
	/// # Aligned?
	///
	/// Returns `true` if the cursor sits at the start of a token.
	pub const fn is_aligned(&self) -> bool { self.off == 0 }

	/// # Current Token.
	///
	/// Return the current token in its entirety, regardless of offset.
	///
	/// ## Errors
	///
	/// Returns a bound error if the stream has been exhausted.
	pub fn token(&self) -> Result<&'a str, ParseError> {
		self.argv.get(self.pos)
			.map(String::as_str)
			.ok_or_else(|| ParseError::bound("Cursor::token"))
	}

	/// # Remainder.
	///
	/// Return the unread part of the current token.
	///
	/// ## Errors
	///
	/// Returns a bound error if the stream has been exhausted or the offset
	/// is out of range.
	pub fn rest(&self) -> Result<&'a str, ParseError> {
		self.token()?
			.get(self.off..)
			.ok_or_else(|| ParseError::bound("Cursor::rest"))
	}

	/// # Current Character.
	///
	/// Return the character at the current position.
	///
	/// ## Errors
	///
	/// Returns a bound error if the stream has been exhausted or there is
	/// nothing left of the current token.
	pub fn current_char(&self) -> Result<char, ParseError> {
		self.rest()?
			.chars()
			.next()
			.ok_or_else(|| ParseError::bound("Cursor::current_char"))
	}

	/// # Take Token.
	///
	/// Return the current token whole and move to the start of the next one.
	///
	/// ## Errors
	///
	/// Returns a bound error if the stream has been exhausted.
	pub fn take_token(&mut self) -> Result<&'a str, ParseError> {
		let out = self.token()?;
		self.next_token();
		Ok(out)
	}

	/// # Take Parameter.
	///
	/// This is [`Cursor::take_token`] for value decoders: parameters always
	/// occupy whole tokens, so this refuses to work mid-bundle.
	///
	/// ## Errors
	///
	/// Returns a bound error if the stream has been exhausted, or an invalid
	/// shortopt list error if the cursor is not aligned to a token boundary.
	pub fn take_param(&mut self) -> Result<&'a str, ParseError> {
		let token = self.token()?;
		if self.off == 0 {
			self.next_token();
			Ok(token)
		}
		else { Err(ParseError::shortopt_list(token)) }
	}

	/// # Advance Within Token.
	///
	/// Move the offset forward by `n` bytes. If that reaches the end of the
	/// token, the cursor rolls over to the start of the next one.
	///
	/// Moving past the end of the token, or landing in the middle of a
	/// character, is a bound error; the cursor is left untouched.
	///
	/// ## Errors
	///
	/// Returns a bound error if the stream has been exhausted or `n` is out
	/// of range.
	pub fn advance(&mut self, n: usize) -> Result<(), ParseError> {
		let token = self.token()?;
		let off = self.off.checked_add(n)
			.filter(|off| *off <= token.len() && token.is_char_boundary(*off))
			.ok_or_else(|| ParseError::bound("Cursor::advance"))?;

		if off == token.len() { self.next_token(); }
		else { self.off = off; }
		Ok(())
	}

	/// # Skip to Next Token.
	///
	/// Jump to the start of the next token, ignoring whatever is left of the
	/// current one. This is a no-op once the stream is exhausted.
	pub fn next_token(&mut self) {
		if self.pos < self.argv.len() {
			self.pos += 1;
			self.off = 0;
		}
	}

	#[must_use]
	/// # Same Position?
	///
	/// This is used by the parser to make sure every committed step actually
	/// made progress.
	pub(crate) const fn same_position(&self, other: &Self) -> bool {
		self.pos == other.pos && self.off == other.off
	}
}
