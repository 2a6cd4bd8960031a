//! CSV to JSON and CSV to SQL.
//!
//! The CSV dialect is deliberately minimal: records are lines, fields are
//! split on every `,` and trimmed, and there is no quoting or escaping. The
//! first non-blank line is the header row.
//!
//! ```rust
//! use convkit::{tabular, ConvertOptions, CsvTarget};
//!
//! let csv = "name,age\nAlice,30\n";
//! let json = tabular::convert(csv, CsvTarget::Json, &ConvertOptions::default()).unwrap();
//! assert_eq!(json, "[\n  {\n    \"name\": \"Alice\",\n    \"age\": 30\n  }\n]");
//! ```

use crate::ser::Serializer;
use crate::{ConvertOptions, CsvTarget, Error, Map, Number, Result, Value};

/// A parsed CSV document: one header row followed by data rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Splits `csv` into trimmed fields.
    ///
    /// Blank lines are skipped anywhere in the input. Rows are not required to
    /// have as many fields as the header.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if no non-blank line remains.
    pub fn parse(csv: &str) -> Result<Table> {
        let mut lines = csv.split('\n').filter(|line| !line.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| Error::empty_input("No CSV data entered"))?;

        Ok(Table {
            headers: split_fields(header),
            rows: lines.map(split_fields).collect(),
        })
    }

    /// Zips each row against the headers into an object.
    ///
    /// Fields that read as decimal numbers become numbers; anything else,
    /// including an empty field, stays a string. A header with no field in
    /// the row maps to `null`. When a header repeats, the key keeps its first
    /// position and takes the last value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let records = self
            .rows
            .iter()
            .map(|row| {
                let mut record = Map::with_capacity(self.headers.len());
                for (i, header) in self.headers.iter().enumerate() {
                    let field = match row.get(i) {
                        Some(text) => coerce(text),
                        None => Value::Null,
                    };
                    record.insert(header.clone(), field);
                }
                Value::Object(record)
            })
            .collect();
        Value::Array(records)
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}

fn coerce(text: &str) -> Value {
    match Number::parse(text) {
        Some(n) => Value::Number(n),
        None => Value::String(text.to_string()),
    }
}

/// Converts CSV text to an indented JSON array of objects.
pub fn to_json(csv: &str, options: &ConvertOptions) -> Result<String> {
    let table = Table::parse(csv)?;
    let mut ser = Serializer::new(options);
    ser.write_value(&table.to_value());
    log::debug!(
        "converted {} CSV rows with {} columns to JSON",
        table.rows.len(),
        table.headers.len()
    );
    Ok(ser.into_inner())
}

/// Converts CSV text to a `CREATE TABLE` statement followed by one `INSERT`
/// per data row.
///
/// Every column gets `options.column_type`. Values are single-quoted as-is;
/// embedded quotes are not escaped, so the output is only suitable for
/// trusted data.
///
/// # Examples
///
/// ```rust
/// use convkit::{tabular, ConvertOptions};
///
/// let sql = tabular::to_sql("id,name\n1,Ann", &ConvertOptions::new().with_table_name("people")).unwrap();
/// assert_eq!(
///     sql,
///     "CREATE TABLE people (\n  id VARCHAR(255),\n  name VARCHAR(255)\n);\n\n\
///      INSERT INTO people (id, name) VALUES ('1', 'Ann');"
/// );
/// ```
pub fn to_sql(csv: &str, options: &ConvertOptions) -> Result<String> {
    let table = Table::parse(csv)?;
    let name = &options.table_name;

    let columns = table
        .headers
        .iter()
        .map(|header| format!("  {} {}", header, options.column_type))
        .collect::<Vec<_>>()
        .join(",\n");
    let mut sql = format!("CREATE TABLE {} (\n{}\n);\n\n", name, columns);

    let column_list = table.headers.join(", ");
    let inserts = table
        .rows
        .iter()
        .map(|row| {
            let values = row
                .iter()
                .map(|field| format!("'{}'", field))
                .collect::<Vec<_>>()
                .join(", ");
            format!("INSERT INTO {} ({}) VALUES ({});", name, column_list, values)
        })
        .collect::<Vec<_>>()
        .join("\n");
    sql.push_str(&inserts);

    log::debug!("generated SQL for {} CSV rows", table.rows.len());
    Ok(sql)
}

/// Converts CSV text to `target`.
pub fn convert(csv: &str, target: CsvTarget, options: &ConvertOptions) -> Result<String> {
    match target {
        CsvTarget::Json => to_json(csv, options),
        CsvTarget::Sql => to_sql(csv, options),
    }
}
