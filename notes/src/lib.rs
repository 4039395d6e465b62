//! Flat-file note library: timestamped one-line notes addressed by their 1-based
//! line number. Storage, rendering and command routing live in separate modules so
//! the binary stays a thin shell around `dispatch::run`.

pub mod core {
    use chrono::{NaiveDateTime, Timelike, Utc};
    use serde::{Deserialize, Serialize};
    use std::{fmt, path::PathBuf};

    /// Timestamp layout used inside the `[...]` prefix of every note-line.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /* ------------------------------- Notes ------------------------------- */

    /// A single stored line. `raw` is exactly what sits in the file; the parsed
    /// fields are best-effort and fall back to the raw text.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct NoteLine {
        pub timestamp: Option<NaiveDateTime>,
        pub content: String,
        pub raw: String,
    }

    impl NoteLine {
        /// Build a fresh note-line stamped with `at`.
        pub fn stamped(at: NaiveDateTime, content: &str) -> Self {
            Self {
                timestamp: Some(at),
                content: content.to_string(),
                raw: render_line(at, content),
            }
        }
    }

    /// A note paired with its position at the time of the read.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct NumberedNote {
        pub number: usize,
        #[serde(flatten)]
        pub note: NoteLine,
    }

    impl fmt::Display for NumberedNote {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}. {}", self.number, self.note.raw)
        }
    }

    pub fn format_timestamp(at: NaiveDateTime) -> String {
        at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn render_line(at: NaiveDateTime, content: &str) -> String {
        format!("[{}] {}", format_timestamp(at), content)
    }

    /// Note text must stay on one line, otherwise it would split into several
    /// notes on the next rewrite.
    pub fn validate_content(content: &str) -> NoteResult<()> {
        if content.contains(['\n', '\r']) {
            return Err(NoteError::MultilineContent);
        }
        Ok(())
    }

    /* ------------------------------- Clock ------------------------------- */

    pub trait Clock {
        fn now(&self) -> NaiveDateTime;
    }

    /// UTC wall clock truncated to whole seconds.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> NaiveDateTime {
            let now = Utc::now().naive_utc();
            now.with_nanosecond(0).unwrap_or(now)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FixedClock(pub NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    /* ---------------------------- Errors (domain) ---------------------------- */

    #[derive(Debug, thiserror::Error)]
    pub enum NoteError {
        #[error("failed to {action} {path:?}")]
        Io {
            action: &'static str,
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("note number {number} is out of range (1..={count})")]
        InvalidNumber { number: i64, count: usize },
        #[error("note content must be a single line")]
        MultilineContent,
    }

    pub type NoteResult<T> = Result<T, NoteError>;
}

pub mod parser {
    //! Note-line and store-buffer parsing.
    //!
    //! A note-line is `[YYYY-MM-DD HH:MM:SS] <content>`; the prefix is parsed with
    //! `nom` combinators. Lines that do not match (hand edits, foreign text) are
    //! still valid notes, they just carry no timestamp.

    use crate::core::NoteLine;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use nom::{
        IResult,
        bytes::complete::take_while_m_n,
        character::complete::char,
        combinator::{map, map_res, opt, rest},
        sequence::{delimited, separated_pair, terminated, tuple},
    };

    type PResult<'a, T> = IResult<&'a str, T>;

    /// Parse one stored line. Never fails: unparseable lines keep their raw text
    /// as content.
    pub fn parse_note_line(line: &str) -> NoteLine {
        match note_line(line) {
            Ok((_, (timestamp, content))) => NoteLine {
                timestamp: Some(timestamp),
                content: content.to_string(),
                raw: line.to_string(),
            },
            Err(_) => NoteLine {
                timestamp: None,
                content: line.to_string(),
                raw: line.to_string(),
            },
        }
    }

    /// Split a whole file buffer into note-lines. Surrounding whitespace is trimmed
    /// first; a buffer with nothing but whitespace holds zero notes.
    pub fn split_store(buffer: &str) -> Vec<String> {
        let trimmed = buffer.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        trimmed.split('\n').map(str::to_string).collect()
    }

    pub fn join_store(lines: &[String], trailing_newline: bool) -> String {
        let mut out = lines.join("\n");
        if trailing_newline {
            out.push('\n');
        }
        out
    }

    fn note_line(i: &str) -> PResult<'_, (NaiveDateTime, &str)> {
        tuple((
            terminated(delimited(char('['), parse_datetime, char(']')), opt(char(' '))),
            rest,
        ))(i)
    }

    fn parse_datetime(i: &str) -> PResult<'_, NaiveDateTime> {
        map(
            separated_pair(parse_date, char(' '), parse_time),
            |(date, time)| date.and_time(time),
        )(i)
    }

    fn parse_date(i: &str) -> PResult<'_, NaiveDate> {
        map_res(
            tuple((digits(4), char('-'), digits(2), char('-'), digits(2))),
            |(y, _, m, _, d)| NaiveDate::from_ymd_opt(y as i32, m, d).ok_or("invalid date"),
        )(i)
    }

    fn parse_time(i: &str) -> PResult<'_, NaiveTime> {
        map_res(
            tuple((digits(2), char(':'), digits(2), char(':'), digits(2))),
            |(h, _, m, _, s)| NaiveTime::from_hms_opt(h, m, s).ok_or("invalid time"),
        )(i)
    }

    fn digits<'a>(n: usize) -> impl FnMut(&'a str) -> PResult<'a, u32> {
        map_res(
            take_while_m_n(n, n, |c: char| c.is_ascii_digit()),
            |s: &str| s.parse::<u32>(),
        )
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_stamped_line() {
            let note = parse_note_line("[2026-02-12 14:33:20] buy milk");
            let expected = NaiveDate::from_ymd_opt(2026, 2, 12)
                .unwrap()
                .and_hms_opt(14, 33, 20)
                .unwrap();
            assert_eq!(note.timestamp, Some(expected));
            assert_eq!(note.content, "buy milk");
            assert_eq!(note.raw, "[2026-02-12 14:33:20] buy milk");
        }

        #[test]
        fn keeps_brackets_inside_content() {
            let note = parse_note_line("[2026-02-12 14:33:20] [draft] plan ] trip");
            assert_eq!(note.content, "[draft] plan ] trip");
        }

        #[test]
        fn stamp_without_content_parses() {
            let note = parse_note_line("[2026-02-12 14:33:20]");
            assert!(note.timestamp.is_some());
            assert_eq!(note.content, "");
        }

        #[test]
        fn foreign_lines_fall_back_to_raw() {
            for line in [
                "just some text",
                "[2026-13-40 10:00:00] bad date",
                "[2026-02-12] missing time",
                "[2026-02-12 9:00:00] short hour",
            ] {
                let note = parse_note_line(line);
                assert_eq!(note.timestamp, None, "{line}");
                assert_eq!(note.content, line);
            }
        }

        #[test]
        fn split_trims_buffer_and_drops_trailing_newline() {
            let lines = split_store("[a] one\n[b] two\n\n\n");
            assert_eq!(lines, vec!["[a] one".to_string(), "[b] two".to_string()]);
        }

        #[test]
        fn whitespace_only_buffer_has_no_notes() {
            assert!(split_store("").is_empty());
            assert!(split_store(" \n\t\n").is_empty());
        }

        #[test]
        fn join_respects_trailing_flag() {
            let lines = vec!["a".to_string(), "b".to_string()];
            assert_eq!(join_store(&lines, true), "a\nb\n");
            assert_eq!(join_store(&lines, false), "a\nb");
            assert_eq!(join_store(&[], false), "");
        }
    }
}

pub mod storage {
    //! Whole-file note store. Every operation reads the complete file, works on the
    //! in-memory line sequence and, when mutating, rewrites the complete file.

    use crate::core::*;
    use crate::parser::{join_store, parse_note_line, split_store};
    use log::debug;
    use std::{
        fs, io,
        path::{Path, PathBuf},
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Listing {
        /// No store file on disk.
        Missing,
        Notes(Vec<NumberedNote>),
    }

    impl Listing {
        pub fn notes(&self) -> &[NumberedNote] {
            match self {
                Listing::Missing => &[],
                Listing::Notes(notes) => notes,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum UpdateOutcome {
        Missing,
        Updated(NumberedNote),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DeleteOutcome {
        Missing,
        Deleted(NumberedNote),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SearchOutcome {
        Missing,
        NoMatches,
        Matches(Vec<NumberedNote>),
    }

    /// Line-addressed CRUD over a note store. Line numbers are 1-based and only
    /// valid until the next mutation.
    pub trait NoteRepository {
        fn add(&self, content: &str) -> NoteResult<NoteLine>;
        fn list(&self) -> NoteResult<Listing>;
        /// No-op (`UpdateOutcome::Missing`) when the store does not exist yet.
        fn update(&self, number: i64, content: &str) -> NoteResult<UpdateOutcome>;
        /// No-op (`DeleteOutcome::Missing`) when the store does not exist yet.
        fn delete(&self, number: i64) -> NoteResult<DeleteOutcome>;
        /// Case-insensitive substring search; matches keep their original numbers.
        fn search(&self, keyword: &str) -> NoteResult<SearchOutcome>;
    }

    /// Plain-text store backed by a single file.
    #[derive(Debug, Clone)]
    pub struct FileNoteStore<C = SystemClock> {
        path: PathBuf,
        clock: C,
    }

    impl FileNoteStore<SystemClock> {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self::with_clock(path, SystemClock)
        }
    }

    impl<C: Clock> FileNoteStore<C> {
        pub fn with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
            Self {
                path: path.into(),
                clock,
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_raw(&self) -> NoteResult<Option<String>> {
            match fs::read_to_string(&self.path) {
                Ok(text) => Ok(Some(text)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(source) => Err(NoteError::Io {
                    action: "read",
                    path: self.path.clone(),
                    source,
                }),
            }
        }

        fn read_lines(&self) -> NoteResult<Option<Vec<String>>> {
            Ok(self.read_raw()?.map(|text| split_store(&text)))
        }

        fn write(&self, contents: &str) -> NoteResult<()> {
            debug!("writing {} bytes to {:?}", contents.len(), self.path);
            fs::write(&self.path, contents).map_err(|source| NoteError::Io {
                action: "write",
                path: self.path.clone(),
                source,
            })
        }
    }

    impl<C: Clock> NoteRepository for FileNoteStore<C> {
        fn add(&self, content: &str) -> NoteResult<NoteLine> {
            validate_content(content)?;
            let mut buffer = self.read_raw()?.unwrap_or_default();
            let note = NoteLine::stamped(self.clock.now(), content);
            buffer.push_str(&note.raw);
            buffer.push('\n');
            self.write(&buffer)?;
            debug!("appended note to {:?}", self.path);
            Ok(note)
        }

        fn list(&self) -> NoteResult<Listing> {
            let Some(lines) = self.read_lines()? else {
                debug!("no store at {:?}", self.path);
                return Ok(Listing::Missing);
            };
            Ok(Listing::Notes(numbered(&lines)))
        }

        fn update(&self, number: i64, content: &str) -> NoteResult<UpdateOutcome> {
            validate_content(content)?;
            let Some(mut lines) = self.read_lines()? else {
                return Ok(UpdateOutcome::Missing);
            };
            let idx = position(number, lines.len())?;
            let note = NoteLine::stamped(self.clock.now(), content);
            lines[idx] = note.raw.clone();
            self.write(&join_store(&lines, true))?;
            debug!("updated note {number} in {:?}", self.path);
            Ok(UpdateOutcome::Updated(NumberedNote {
                number: idx + 1,
                note,
            }))
        }

        fn delete(&self, number: i64) -> NoteResult<DeleteOutcome> {
            let Some(mut lines) = self.read_lines()? else {
                return Ok(DeleteOutcome::Missing);
            };
            let idx = position(number, lines.len())?;
            let removed = lines.remove(idx);
            self.write(&join_store(&lines, !lines.is_empty()))?;
            debug!("deleted note {number} from {:?}", self.path);
            Ok(DeleteOutcome::Deleted(NumberedNote {
                number: idx + 1,
                note: parse_note_line(&removed),
            }))
        }

        fn search(&self, keyword: &str) -> NoteResult<SearchOutcome> {
            let Some(lines) = self.read_lines()? else {
                return Ok(SearchOutcome::Missing);
            };
            let needle = keyword.to_lowercase();
            let matches: Vec<NumberedNote> = numbered(&lines)
                .into_iter()
                .filter(|entry| entry.note.raw.to_lowercase().contains(&needle))
                .collect();
            debug!("search {keyword:?} matched {} of {}", matches.len(), lines.len());
            if matches.is_empty() {
                Ok(SearchOutcome::NoMatches)
            } else {
                Ok(SearchOutcome::Matches(matches))
            }
        }
    }

    fn numbered(lines: &[String]) -> Vec<NumberedNote> {
        lines
            .iter()
            .enumerate()
            .map(|(idx, line)| NumberedNote {
                number: idx + 1,
                note: parse_note_line(line),
            })
            .collect()
    }

    /// Map a 1-based line number onto an index, rejecting anything outside `1..=count`.
    fn position(number: i64, count: usize) -> NoteResult<usize> {
        usize::try_from(number)
            .ok()
            .filter(|n| (1..=count).contains(n))
            .map(|n| n - 1)
            .ok_or(NoteError::InvalidNumber { number, count })
    }

}

pub mod format {
    use crate::core::{NumberedNote, format_timestamp};
    use crate::storage::{Listing, SearchOutcome};
    use serde::Serialize;

    pub const LIST_HEADER: &str = "--- NOTES ---";
    pub const EMPTY_MESSAGE: &str = "No notes stored yet.";
    pub const INVALID_NUMBER_MESSAGE: &str = "Invalid note number!";
    pub const NOT_A_NUMBER_MESSAGE: &str = "Error: please enter a number.";

    pub fn render_listing(listing: &Listing) -> String {
        let notes = listing.notes();
        if notes.is_empty() {
            return format!("\n{EMPTY_MESSAGE}\n");
        }
        let mut out = format!("\n{LIST_HEADER}\n");
        push_notes(&mut out, notes);
        out
    }

    pub fn render_search(keyword: &str, outcome: &SearchOutcome) -> String {
        match outcome {
            SearchOutcome::Missing => format!("\n{EMPTY_MESSAGE}\n"),
            SearchOutcome::NoMatches => {
                format!("\n{}\nNo notes contain {keyword:?}.\n", search_header(keyword))
            }
            SearchOutcome::Matches(found) => {
                let mut out = format!("\n{}\n", search_header(keyword));
                push_notes(&mut out, found);
                out
            }
        }
    }

    fn search_header(keyword: &str) -> String {
        format!("--- SEARCH RESULTS: {keyword:?} ---")
    }

    fn push_notes(out: &mut String, notes: &[NumberedNote]) {
        for note in notes {
            out.push_str(&note.to_string());
            out.push('\n');
        }
    }

    #[derive(Serialize)]
    struct JsonNote<'a> {
        number: usize,
        timestamp: Option<String>,
        content: &'a str,
        raw: &'a str,
    }

    /// Pretty JSON array of notes, timestamps in the on-disk layout.
    pub fn render_json(notes: &[NumberedNote]) -> serde_json::Result<String> {
        let payload: Vec<JsonNote<'_>> = notes
            .iter()
            .map(|n| JsonNote {
                number: n.number,
                timestamp: n.note.timestamp.map(format_timestamp),
                content: &n.note.content,
                raw: &n.note.raw,
            })
            .collect();
        serde_json::to_string_pretty(&payload)
    }

    pub fn help_banner() -> String {
        "\
Usage:
  List all : notes list
  Add      : notes \"note text\"
  Edit     : notes update <number> \"new text\"
  Delete   : notes delete <number>
  Search   : notes search <keyword>

Options:
  --file <PATH>   Note file (env NOTES_FILE, default notes.txt)
  --json          Print lists and search results as JSON
  --verbose       Debug logging on stderr
"
        .to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::parser::parse_note_line;

        fn numbered(number: usize, line: &str) -> NumberedNote {
            NumberedNote {
                number,
                note: parse_note_line(line),
            }
        }

        #[test]
        fn listing_prefixes_line_numbers() {
            let listing = Listing::Notes(vec![
                numbered(1, "[2026-02-12 10:00:00] a"),
                numbered(2, "[2026-02-12 10:00:01] b"),
            ]);
            assert_eq!(
                render_listing(&listing),
                "\n--- NOTES ---\n1. [2026-02-12 10:00:00] a\n2. [2026-02-12 10:00:01] b\n"
            );
        }

        #[test]
        fn missing_and_empty_listings_share_message() {
            assert_eq!(
                render_listing(&Listing::Missing),
                render_listing(&Listing::Notes(Vec::new()))
            );
        }

        #[test]
        fn no_match_message_names_keyword() {
            let text = render_search("milk", &SearchOutcome::NoMatches);
            assert!(text.contains("No notes contain \"milk\"."));
            assert!(!text.contains(EMPTY_MESSAGE));
        }

        #[test]
        fn json_uses_on_disk_timestamp_layout() {
            let notes = vec![numbered(3, "[2026-02-12 10:00:00] a"), numbered(4, "loose")];
            let value: serde_json::Value =
                serde_json::from_str(&render_json(&notes).expect("json")).expect("parse");
            assert_eq!(value[0]["number"], 3);
            assert_eq!(value[0]["timestamp"], "2026-02-12 10:00:00");
            assert_eq!(value[0]["content"], "a");
            assert!(value[1]["timestamp"].is_null());
            assert_eq!(value[1]["raw"], "loose");
        }
    }
}

pub mod dispatch {
    //! Routes the three positional inputs (`command`, `primary`, `secondary`) onto
    //! store operations and renders the results.

    use crate::core::NoteError;
    use crate::format::{
        INVALID_NUMBER_MESSAGE, NOT_A_NUMBER_MESSAGE, help_banner, render_json, render_listing,
        render_search,
    };
    use crate::storage::{DeleteOutcome, NoteRepository, SearchOutcome, UpdateOutcome};
    use anyhow::{Context, Result};
    use log::debug;
    use std::io::Write;
    use std::num::ParseIntError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Command {
        Help,
        List,
        Add(String),
        Update { number: i64, content: String },
        Delete { number: i64 },
        Search { keyword: String },
        /// A required argument was missing.
        Usage(UsageHint),
        NotANumber(String),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum UsageHint {
        Delete,
        Update,
        Search,
    }

    impl UsageHint {
        pub fn message(self) -> &'static str {
            match self {
                UsageHint::Delete => "Enter a note number. Example: notes delete 1",
                UsageHint::Update => "Wrong format. Example: notes update 1 \"new note text\"",
                UsageHint::Search => "Enter a keyword. Example: notes search coding",
            }
        }
    }

    impl Command {
        /// Empty strings count as absent, like missing arguments.
        pub fn parse(command: Option<&str>, primary: Option<&str>, secondary: Option<&str>) -> Self {
            match present(command) {
                None => Command::Help,
                Some("delete") => match present(primary) {
                    Some(raw) => match parse_number(raw) {
                        Ok(number) => Command::Delete { number },
                        Err(_) => Command::NotANumber(raw.to_string()),
                    },
                    None => Command::Usage(UsageHint::Delete),
                },
                Some("update") => match (present(primary), present(secondary)) {
                    (Some(raw), Some(text)) => match parse_number(raw) {
                        Ok(number) => Command::Update {
                            number,
                            content: text.to_string(),
                        },
                        Err(_) => Command::NotANumber(raw.to_string()),
                    },
                    _ => Command::Usage(UsageHint::Update),
                },
                Some("search") => match present(primary) {
                    Some(keyword) => Command::Search {
                        keyword: keyword.to_string(),
                    },
                    None => Command::Usage(UsageHint::Search),
                },
                Some("list" | "view") => Command::List,
                Some(text) => Command::Add(text.to_string()),
            }
        }
    }

    fn present(value: Option<&str>) -> Option<&str> {
        value.filter(|s| !s.is_empty())
    }

    /// Strict integer parse; `"3abc"` and `"1.5"` are not numbers.
    pub fn parse_number(raw: &str) -> Result<i64, ParseIntError> {
        raw.trim().parse::<i64>()
    }

    /// Execute one command against `store`, writing user-facing output to `out`.
    ///
    /// Validation failures are printed and treated as handled; I/O failures are
    /// returned. With `json` set, confirmations are suppressed and lists/search
    /// results are printed as JSON arrays.
    pub fn run<R, W>(command: &Command, store: &R, out: &mut W, json: bool) -> Result<()>
    where
        R: NoteRepository,
        W: Write,
    {
        debug!("dispatching {:?}", command);
        match command {
            Command::Help => write!(out, "{}", help_banner())?,
            Command::Usage(hint) => writeln!(out, "{}", hint.message())?,
            Command::NotANumber(_) => writeln!(out, "{NOT_A_NUMBER_MESSAGE}")?,
            Command::List => print_list(store, out, json)?,
            Command::Add(content) => {
                match store.add(content) {
                    Ok(_) if !json => writeln!(out, "Note saved.")?,
                    Ok(_) => {}
                    Err(err) => return report_or_fail(err, out),
                }
                print_list(store, out, json)?;
            }
            Command::Update { number, content } => {
                match store.update(*number, content) {
                    Ok(UpdateOutcome::Updated(note)) if !json => {
                        writeln!(out, "Updated note {}.", note.number)?
                    }
                    Ok(_) => {}
                    Err(err) => report_or_fail(err, out)?,
                }
                print_list(store, out, json)?;
            }
            Command::Delete { number } => {
                match store.delete(*number) {
                    Ok(DeleteOutcome::Deleted(note)) if !json => {
                        writeln!(out, "Deleted: {}", note.note.raw)?
                    }
                    Ok(_) => {}
                    Err(err) => report_or_fail(err, out)?,
                }
                print_list(store, out, json)?;
            }
            Command::Search { keyword } => {
                let outcome = store
                    .search(keyword)
                    .with_context(|| format!("searching notes for {keyword:?}"))?;
                if json {
                    let found = match &outcome {
                        SearchOutcome::Matches(found) => found.as_slice(),
                        _ => &[][..],
                    };
                    writeln!(out, "{}", render_json(found)?)?;
                } else {
                    write!(out, "{}", render_search(keyword, &outcome))?;
                }
            }
        }
        Ok(())
    }

    fn print_list<R: NoteRepository, W: Write>(store: &R, out: &mut W, json: bool) -> Result<()> {
        let listing = store.list().context("listing notes")?;
        if json {
            writeln!(out, "{}", render_json(listing.notes())?)?;
        } else {
            write!(out, "{}", render_listing(&listing))?;
        }
        Ok(())
    }

    fn report_or_fail<W: Write>(err: NoteError, out: &mut W) -> Result<()> {
        match err {
            NoteError::InvalidNumber { number, count } => {
                debug!("note {number} outside 1..={count}");
                writeln!(out, "{INVALID_NUMBER_MESSAGE}")?;
            }
            NoteError::MultilineContent => writeln!(out, "Error: {err}.")?,
            NoteError::Io { .. } => return Err(err.into()),
        }
        Ok(())
    }

}
