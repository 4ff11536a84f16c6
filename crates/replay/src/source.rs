//! Line framing over a log file or standard input

use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Argument value that selects standard input
pub const STDIN_ARG: &str = "-";

/// Longest line handed to the decoder; the rest of an overlong line is dropped.
pub const DEFAULT_LINE_CAPACITY: usize = 4096;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Could not open {path}")]
    CannotOpen {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Underlying stream. Only `Owned` is released by the source; a borrowed
/// stream (stdin, caller readers) belongs to someone else.
enum Handle {
    Owned(BufReader<File>),
    Borrowed(Box<dyn BufRead>),
}

pub struct LineSource {
    handle: Handle,
    origin: String,
    capacity: usize,
    buffer: Vec<u8>,
}

impl LineSource {
    /// Open `path`, or bind to stdin when it is `-`
    pub fn open(path: &str) -> Result<Self, SourceError> {
        if path == STDIN_ARG {
            let stdin = Box::new(io::stdin().lock());
            return Ok(Self::new(Handle::Borrowed(stdin), path));
        }

        let file = File::open(path).map_err(|source| SourceError::CannotOpen {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::new(Handle::Owned(BufReader::new(file)), path))
    }

    /// Borrowed source over an arbitrary reader
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self::new(Handle::Borrowed(Box::new(reader)), "<reader>")
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    fn new(handle: Handle, origin: &str) -> Self {
        Self {
            handle,
            origin: origin.to_string(),
            capacity: DEFAULT_LINE_CAPACITY,
            buffer: Vec::with_capacity(DEFAULT_LINE_CAPACITY),
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self.handle, Handle::Owned(_))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Read the next line without its `\n` / `\r\n` terminator.
    ///
    /// Returns `None` at end of stream. Lines longer than the capacity are
    /// truncated and the remainder is skipped, so the next call starts on the
    /// following line.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        let Self {
            handle,
            capacity,
            buffer,
            ..
        } = self;
        let reader: &mut dyn BufRead = match handle {
            Handle::Owned(reader) => reader,
            Handle::Borrowed(reader) => reader.as_mut(),
        };

        buffer.clear();
        let mut read_any = false;
        let mut truncated = false;

        loop {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            read_any = true;

            let (chunk, used, done) = match available.iter().position(|b| *b == b'\n') {
                Some(i) => (&available[..i], i + 1, true),
                None => (available, available.len(), false),
            };
            let room = capacity.saturating_sub(buffer.len());
            if chunk.len() > room {
                truncated = true;
            }
            buffer.extend_from_slice(&chunk[..chunk.len().min(room)]);
            reader.consume(used);

            if done {
                break;
            }
        }

        if !read_any {
            return Ok(None);
        }
        if !truncated && buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
        Ok(Some(buffer.as_slice()))
    }
}
