use crate::libs::error::TaskError;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Field separator shared by every store file.
pub const DELIMITER: u8 = b';';

/// One record read from a store together with its 1-based line number.
pub struct Line {
    pub number: usize,
    pub fields: StringRecord,
}

/// A delimited text file holding one record per line.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every non-empty record. A file that does not exist yet reads as
    /// empty.
    ///
    /// A record is taken as quoted only when it is byte-for-byte what
    /// [`Store::overwrite`] would write for its fields. Any other line is
    /// split on the delimiter as is, so quotes in hand-written or legacy
    /// files are kept verbatim.
    pub fn read(&self) -> Result<Vec<Line>, TaskError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(TaskError::unavailable(&self.path, e)),
        };
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|&&byte| byte == b'\n').count() + 1;
            self.format_error(line, "invalid UTF-8")
        })?;

        let physical: Vec<&str> = content.split('\n').collect();
        let mut lines = Vec::new();
        let mut index = 0;
        while index < physical.len() {
            let first = physical[index];
            if first.trim_end_matches('\r').is_empty() {
                index += 1;
                continue;
            }

            // A quoted field may span lines; gather them while a quote is open
            let mut last = index;
            let mut raw = first.to_string();
            let mut quotes = first.matches('"').count();
            while quotes % 2 == 1 && last + 1 < physical.len() {
                last += 1;
                raw.push('\n');
                raw.push_str(physical[last]);
                quotes += physical[last].matches('"').count();
            }

            let number = index + 1;
            match decode_canonical(&raw) {
                Some(fields) => {
                    lines.push(Line { number, fields });
                    index = last + 1;
                }
                None => {
                    let fields: Vec<&str> = first.trim_end_matches('\r').split(DELIMITER as char).collect();
                    lines.push(Line { number, fields: StringRecord::from(fields) });
                    index += 1;
                }
            }
        }

        tracing::debug!(path = %self.path.display(), records = lines.len(), "store loaded");
        Ok(lines)
    }

    /// Replaces the whole file with `records`.
    ///
    /// The content goes to a sibling temporary file first and is renamed over
    /// the destination, so a failed write leaves the previous file intact.
    pub fn overwrite<I, R>(&self, records: I) -> Result<(), TaskError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        let bytes = encode(records).map_err(|e| self.csv_error(e))?;
        write_atomically(&self.path, &bytes)
    }

    /// Appends one record at the end of the file, creating it if needed.
    pub fn append<R>(&self, record: R) -> Result<(), TaskError>
    where
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        self.ensure_parent()?;
        let needs_newline = match fs::read(&self.path) {
            Ok(content) => content.last().is_some_and(|&byte| byte != b'\n'),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(TaskError::unavailable(&self.path, e)),
        };

        let mut bytes = if needs_newline { b"\n".to_vec() } else { Vec::new() };
        bytes.extend(encode([record]).map_err(|e| self.csv_error(e))?);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TaskError::unavailable(&self.path, e))?;
        file.write_all(&bytes).map_err(|e| TaskError::unavailable(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "record appended");
        Ok(())
    }

    /// Builds a format error pointing at `line` of this store.
    pub fn format_error(&self, line: usize, reason: impl Into<String>) -> TaskError {
        TaskError::StoreFormat {
            path: self.path.clone(),
            line,
            reason: reason.into(),
        }
    }

    fn ensure_parent(&self) -> Result<(), TaskError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| TaskError::unavailable(parent, e))
            }
            _ => Ok(()),
        }
    }

    fn csv_error(&self, err: csv::Error) -> TaskError {
        let line = err.position().map_or(0, |p| p.line() as usize);
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => TaskError::unavailable(&self.path, source),
            _ => self.format_error(line, reason),
        }
    }
}

/// Decodes `raw` as one quoted record, accepting it only if encoding the
/// result reproduces `raw` exactly.
fn decode_canonical(raw: &str) -> Option<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(raw.as_bytes());

    let mut records = reader.records();
    let record = records.next()?.ok()?;
    if records.next().is_some() {
        return None;
    }

    let encoded = encode([&record]).ok()?;
    let expected = [raw.as_bytes(), b"\n"].concat();
    (encoded == expected).then_some(record)
}

/// Serializes records as `;`-delimited lines, quoting only the fields that
/// need it.
fn encode<I, R>(records: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer.write_record(record)?;
    }

    writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

/// Writes `bytes` to a temporary sibling of `path` and renames it into place.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), TaskError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TaskError::unavailable(parent, e))?;
    }

    let file_name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let write = || -> io::Result<()> {
        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    };

    write().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TaskError::unavailable(path, e)
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}
