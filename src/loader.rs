use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::DictError;
use crate::Result;
use crate::StringTable;

/// Separates a key from its value on each line.
pub const SEPARATOR: &str = "; ";

/// Split a `KEY; VALUE` line at its first separator.
///
/// Returns `None` if the line has no separator. The value keeps any later
/// separators verbatim.
pub fn parse_record(line: &str) -> Option<(&str, &str)> {
    line.split_once(SEPARATOR)
}

/// Add one line to `table`. Returns `false` for a skipped empty line.
pub(crate) fn load_line(table: &mut StringTable, number: usize, line: &str) -> Result<bool> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Ok(false);
    }
    match parse_record(line) {
        Some((key, value)) => {
            table.add(key.to_owned(), value.to_owned());
            Ok(true)
        }
        None => Err(DictError::MalformedRecord {
            line: number,
            record: line.to_owned(),
        }),
    }
}

/// Add every record read from `reader`. Returns the number of records added.
pub fn load_from_reader(table: &mut StringTable, reader: impl BufRead) -> Result<usize> {
    let mut added = 0;
    for (number, line) in reader.lines().enumerate() {
        if load_line(table, number + 1, &line?)? {
            added += 1;
        }
    }
    Ok(added)
}

/// Add every record of the file at `path`. Returns the number of records added.
pub fn load_from_file(table: &mut StringTable, path: impl AsRef<Path>) -> Result<usize> {
    let file = File::open(path)?;
    load_from_reader(table, BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_at_first_separator() {
        assert_eq!(parse_record("CAT; a cat"), Some(("CAT", "a cat")));
        assert_eq!(
            parse_record("USA; US; United States"),
            Some(("USA", "US; United States"))
        );
        assert_eq!(parse_record("EMPTY; "), Some(("EMPTY", "")));
        assert_eq!(parse_record("CAT;a cat"), None);
        assert_eq!(parse_record("CAT"), None);
    }

    #[test]
    fn loads_from_reader() {
        let mut table = StringTable::new();
        let input = "CAT; a cat\r\nDOG; a dog\n\nUSA; US; United States\n";
        let added = load_from_reader(&mut table, Cursor::new(input)).unwrap();
        assert_eq!(added, 3);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("CAT"), Some("a cat"));
        assert_eq!(table.get("USA"), Some("US; United States"));
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let mut table = StringTable::new();
        let input = "CAT; a cat\nDOG a dog\nUSA; US\n";
        match load_from_reader(&mut table, Cursor::new(input)) {
            Err(DictError::MalformedRecord { line, record }) => {
                assert_eq!(line, 2);
                assert_eq!(record, "DOG a dog");
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        assert_eq!(table.get("CAT"), Some("a cat"));
        assert_eq!(table.get("USA"), None);
    }

    #[test]
    fn load_from_source_takes_lines() {
        let mut table = StringTable::new();
        let added = table
            .load_from_source(vec!["A; 1", "", "B; 2"])
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(table.get("B"), Some("2"));

        let err = table.load_from_source(["C; 3", "D"]).unwrap_err();
        assert!(matches!(err, DictError::MalformedRecord { line: 2, .. }));
    }
}
