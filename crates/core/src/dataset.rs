//! CSV ingestion for the award dataset.
//!
//! The source file is semicolon-separated with a required header row
//! (`year;title;studios;producers;winner`, any column order). Fields may be
//! double-quoted, in which case embedded semicolons are literal and `""` is
//! an escaped quote -- this is how multi-producer credits like
//! `"Joe Roth; Jeff Kirschenbaum; and Susan Downey"` reach the credit
//! parser with their semicolons intact. Quoted fields do not span lines.

use std::path::Path;

use crate::record::MovieRecord;

/// Errors surfaced while loading or parsing a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The header row is missing a required column.
    #[error("dataset header is missing required column '{name}'")]
    MissingColumn { name: String },

    /// A data row's year field is not an integer.
    #[error("invalid year '{value}' on line {line}")]
    InvalidYear { line: usize, value: String },
}

/// Column positions resolved from the header row.
struct Header {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: usize,
}

impl Header {
    fn resolve(fields: &[String]) -> Result<Header, DatasetError> {
        let position = |name: &str| -> Result<usize, DatasetError> {
            fields
                .iter()
                .position(|f| f == name)
                .ok_or_else(|| DatasetError::MissingColumn {
                    name: name.to_string(),
                })
        };
        Ok(Header {
            year: position("year")?,
            title: position("title")?,
            studios: position("studios")?,
            producers: position("producers")?,
            winner: position("winner")?,
        })
    }
}

/// Split one CSV line into trimmed fields on unquoted semicolons.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut pos = 0usize;
    let mut in_quotes = false;

    while pos < chars.len() {
        let c = chars[pos];
        if in_quotes {
            if c == '"' {
                // "" inside quotes is a literal quote
                if pos + 1 < chars.len() && chars[pos + 1] == '"' {
                    field.push('"');
                    pos += 2;
                    continue;
                }
                in_quotes = false;
            } else {
                field.push(c);
            }
        } else if c == '"' && field.trim().is_empty() {
            field.clear();
            in_quotes = true;
        } else if c == ';' {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(c);
        }
        pos += 1;
    }
    fields.push(field.trim().to_string());
    fields
}

/// The winner flag is true iff the field is "true" or "yes", case-insensitive.
fn parse_winner(value: &str) -> bool {
    let lowered = value.to_lowercase();
    lowered == "true" || lowered == "yes"
}

/// Parse dataset text into records.
///
/// Blank lines are skipped. Rows shorter than the header treat the missing
/// trailing fields as empty; extra columns are ignored.
pub fn parse_csv(text: &str) -> Result<Vec<MovieRecord>, DatasetError> {
    let mut lines = text.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break Header::resolve(&split_line(line))?,
            None => {
                return Err(DatasetError::MissingColumn {
                    name: "year".to_string(),
                })
            }
        }
    };

    let mut records = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_line(line);
        let field = |pos: usize| fields.get(pos).map(String::as_str).unwrap_or("");

        let year_raw = field(header.year);
        let year = year_raw
            .parse::<i32>()
            .map_err(|_| DatasetError::InvalidYear {
                line: idx + 1,
                value: year_raw.to_string(),
            })?;

        records.push(MovieRecord {
            year,
            title: field(header.title).to_string(),
            studios: field(header.studios).to_string(),
            producers: field(header.producers).to_string(),
            winner: parse_winner(field(header.winner)),
        });
    }
    Ok(records)
}

/// Read and parse a dataset file.
pub fn load_csv(path: &Path) -> Result<Vec<MovieRecord>, DatasetError> {
    let text = std::fs::read_to_string(path)?;
    parse_csv(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::record::WinInterval;

    const FIXTURE: &str = "\
year;title;studios;producers;winner
1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;true
1981;Mommy Dearest;Paramount;Frank Yablans;true
1998;An Alan Smithee Film;Hollywood Pictures;Ben Myron;true
1998;The Avengers;Warner Bros.;Jerry Weintraub;true
2019;Cats;Universal Pictures;\"Debra Hayward; Tim Bevan; Eric Fellner; and Tom Hooper\";true
2019;Rambo: Last Blood;Lionsgate;Avi Lerner and Kevin King Templeton;true
2020;Dolittle;Universal Pictures;\"Joe Roth; Jeff Kirschenbaum; and Susan Downey\";true
2020;Dolittle 2;Universal Pictures;\"Joe Roth; Jeff Kirschenbaum; and Susan Downey\";true
2021;Music;Vertical Entertainment;Sia;true
2022;Morbius;Columbia Pictures;\"Avi Arad; Matt Tolmach; and Lucas Foster\";true
";

    #[test]
    fn parses_the_reference_fixture() {
        let records = parse_csv(FIXTURE).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].year, 1980);
        assert_eq!(records[0].title, "Can't Stop the Music");
        assert!(records[0].winner);
        // Quoted field keeps its semicolons
        assert_eq!(
            records[6].producers,
            "Joe Roth; Jeff Kirschenbaum; and Susan Downey"
        );
    }

    #[test]
    fn reference_fixture_extrema_match_the_pinned_behavior() {
        let records = parse_csv(FIXTURE).unwrap();
        let summary = analyze(&records);
        assert_eq!(
            summary.min.first(),
            Some(&WinInterval {
                producer: "Joe Roth; Jeff Kirschenbaum;".to_string(),
                interval: 0,
                previous_win: 2020,
                following_win: 2020,
            })
        );
        assert_eq!(summary.max.first(), summary.min.first());
    }

    #[test]
    fn header_columns_may_be_reordered() {
        let text = "winner;producers;year;studios;title\nyes;Alice;1990;S;T\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records[0].year, 1990);
        assert_eq!(records[0].producers, "Alice");
        assert!(records[0].winner);
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse_csv("year;title;studios;winner\n").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn { ref name } if name == "producers"
        ));
    }

    #[test]
    fn invalid_year_is_reported_with_line_number() {
        let text = "year;title;studios;producers;winner\nMCMXC;T;S;Alice;true\n";
        let err = parse_csv(text).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidYear { line: 2, ref value } if value == "MCMXC"
        ));
    }

    #[test]
    fn non_winner_values_are_false() {
        let text = "year;title;studios;producers;winner\n\
                    1990;T;S;Alice;\n\
                    1991;T;S;Bob;no\n\
                    1992;T;S;Carol;YES\n";
        let records = parse_csv(text).unwrap();
        assert!(!records[0].winner);
        assert!(!records[1].winner);
        assert!(records[2].winner);
    }

    #[test]
    fn short_rows_pad_with_empty_fields() {
        let text = "year;title;studios;producers;winner\n1990;Title Only\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records[0].producers, "");
        assert!(!records[0].winner);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "\nyear;title;studios;producers;winner\n\n1990;T;S;Alice;true\n\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn escaped_quotes_inside_quoted_fields() {
        let text = "year;title;studios;producers;winner\n\
                    1990;\"The \"\"Best\"\" Movie\";S;Alice;true\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(records[0].title, "The \"Best\" Movie");
    }

    #[test]
    fn empty_input_is_a_missing_header() {
        assert!(matches!(
            parse_csv("").unwrap_err(),
            DatasetError::MissingColumn { .. }
        ));
    }
}
