use indexmap::IndexMap;

use crate::error::{SplashError, SplashResult};

/// Parsed CSV document: ordered headers and row-order-preserving records.
///
/// Header lookup is exact and case-sensitive. Every stored row has exactly
/// one field per header; arity is enforced at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    headers: IndexMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.keys().map(String::as_str)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Ordered values of one column across all rows, preserving row order.
    pub fn column(&self, name: &str) -> SplashResult<Vec<&str>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Like [`CsvTable::column`], with each value parsed as a finite `f64`.
    pub fn numeric_column(&self, name: &str) -> SplashResult<Vec<f64>> {
        let index = self.column_index(name)?;
        let mut values = Vec::with_capacity(self.rows.len());
        for (ordinal, row) in self.rows.iter().enumerate() {
            let raw = row[index].trim();
            let parsed: f64 = raw.parse().map_err(|_| {
                SplashError::InvalidData(format!(
                    "csv column `{name}` row {}: invalid number `{raw}`",
                    ordinal + 1
                ))
            })?;
            if !parsed.is_finite() {
                return Err(SplashError::InvalidData(format!(
                    "csv column `{name}` row {}: number must be finite",
                    ordinal + 1
                )));
            }
            values.push(parsed);
        }
        Ok(values)
    }

    fn column_index(&self, name: &str) -> SplashResult<usize> {
        self.headers
            .get(name)
            .copied()
            .ok_or_else(|| SplashError::InvalidData(format!("csv column `{name}` not found")))
    }
}

/// Parses CSV text into a [`CsvTable`].
///
/// The first record is the header. Quoted fields may contain commas,
/// newlines, and doubled quotes. Blank lines are ignored; every data record
/// must match the header arity. Record numbers in errors are 1-based and
/// count the header.
pub fn parse_csv(input: &str) -> SplashResult<CsvTable> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let records = split_records(input)?;

    let mut iter = records.into_iter();
    let Some((_, header_fields)) = iter.next() else {
        return Err(SplashError::CsvParse {
            record: 1,
            message: "missing header record".to_owned(),
        });
    };

    let mut headers = IndexMap::with_capacity(header_fields.len());
    for (index, name) in header_fields.into_iter().enumerate() {
        if name.is_empty() {
            return Err(SplashError::CsvParse {
                record: 1,
                message: format!("header {} is empty", index + 1),
            });
        }
        if headers.insert(name.clone(), index).is_some() {
            return Err(SplashError::CsvParse {
                record: 1,
                message: format!("duplicate header `{name}`"),
            });
        }
    }

    let mut rows = Vec::new();
    for (record, fields) in iter {
        if fields.len() != headers.len() {
            return Err(SplashError::CsvParse {
                record,
                message: format!(
                    "expected {} fields, found {}",
                    headers.len(),
                    fields.len()
                ),
            });
        }
        rows.push(fields);
    }

    Ok(CsvTable { headers, rows })
}

/// Splits raw text into (record number, fields) pairs, skipping blank lines.
fn split_records(input: &str) -> SplashResult<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut record_number = 1;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                finish_record(&mut records, &mut fields, &mut field, &mut record_number);
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(SplashError::CsvParse {
            record: record_number,
            message: "unterminated quoted field".to_owned(),
        });
    }
    finish_record(&mut records, &mut fields, &mut field, &mut record_number);

    Ok(records)
}

fn finish_record(
    records: &mut Vec<(usize, Vec<String>)>,
    fields: &mut Vec<String>,
    field: &mut String,
    record_number: &mut usize,
) {
    // A lone empty field is a blank line, not a one-column record.
    if fields.is_empty() && field.is_empty() {
        return;
    }
    fields.push(std::mem::take(field));
    records.push((*record_number, std::mem::take(fields)));
    *record_number += 1;
}
