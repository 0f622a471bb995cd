//! Line-at-a-time input for the character stream.
//!
//! The character stream never looks at the whole input. Each time its
//! current line runs dry it asks its [`LineSource`] for the next one. This
//! is the only seam a new input backend has to fill in.

/// Produces the input one physical line at a time.
///
/// A line includes its trailing `'\n'` when one is present. An empty view
/// means the input is exhausted, and every later call must also return an
/// empty view.
pub trait LineSource<'a> {
    fn next_line(&mut self) -> &'a str;
}

/// Closures work as line sources, which keeps ad-hoc inputs cheap to build.
impl<'a, F> LineSource<'a> for F
where
    F: FnMut() -> &'a str,
{
    #[inline]
    fn next_line(&mut self) -> &'a str {
        self()
    }
}

/// [`LineSource`] over an in-memory buffer.
///
/// A NUL byte terminates the input: characters after the first `'\0'` are
/// never produced, matching a C-string backed reader.
#[derive(Clone, Debug)]
pub struct BufferLines<'a> {
    rest: &'a str,
}

impl<'a> BufferLines<'a> {
    pub fn new(buffer: &'a str) -> Self {
        // NUL is ASCII, so its byte offset is always a char boundary.
        let rest = match memchr::memchr(0, buffer.as_bytes()) {
            Some(nul) => &buffer[..nul],
            None => buffer,
        };
        BufferLines { rest }
    }

    /// The input not yet handed out.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }
}

impl<'a> LineSource<'a> for BufferLines<'a> {
    fn next_line(&mut self) -> &'a str {
        let split = match memchr::memchr(b'\n', self.rest.as_bytes()) {
            Some(newline) => newline + 1,
            None => self.rest.len(),
        };
        let (line, rest) = self.rest.split_at(split);
        self.rest = rest;
        line
    }
}
