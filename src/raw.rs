//! Raw token streams: one `Category<TAB>"json string"` pair per line.
//!
//! ```text
//! Token.Keyword	"def"
//! Token.Text	" "
//! Token.Name.Function	"main"
//! ```

use std::io::{self, BufRead, Write};

use crate::category::Category;
use crate::error::{Error, Result};

/// Lazily reads `(category, text)` pairs from a raw token stream.
pub struct RawTokenReader<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> RawTokenReader<R> {
    pub fn new(reader: R) -> Self {
        RawTokenReader {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    fn parse_line(&self, line: &str) -> Result<(Category, String)> {
        let (name, literal) = line
            .split_once('\t')
            .ok_or_else(|| Error::raw_token(self.line, "expected <category>\\t<string>"))?;
        let category =
            Category::parse(name).map_err(|e| Error::raw_token(self.line, e.to_string()))?;
        let text: String = serde_json::from_str(literal)
            .map_err(|e| Error::raw_token(self.line, format!("bad token text: {}", e)))?;
        Ok((category, text))
    }
}

impl<R: BufRead> Iterator for RawTokenReader<R> {
    type Item = Result<(Category, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line += 1;
            let line = self.buf.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line(line));
        }
    }
}

/// Write one token in raw stream format.
pub fn write_raw_token<W: Write + ?Sized>(out: &mut W, category: &Category, text: &str) -> io::Result<()> {
    let literal = serde_json::to_string(text).map_err(io::Error::other)?;
    writeln!(out, "{}\t{}", category, literal)
}
