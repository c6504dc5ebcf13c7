use crate::error::{LqError, Result};
use crate::input::{Field, InputRow};
use crate::types::record::NormalizedRecord;
use crate::types::variable::Variable;
use std::io::{Read, Write};

pub const ERROR_COLUMN: &str = "error";

/// A parsed CSV batch: pass-through cells plus the field values extracted from each row.
#[derive(Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub input: Result<InputRow>,
}

fn is_output_column(name: &str) -> bool {
    let name = name.trim();
    if name == "composite" || name == "LQ" || name == ERROR_COLUMN {
        return true;
    }
    name.strip_prefix("N_")
        .is_some_and(|id| Variable::ORDER.iter().any(|variable| variable.id() == id))
}

fn field_id(field: Field) -> &'static str {
    match field {
        Field::Variable(variable) => variable.id(),
        Field::Helper(helper) => helper.id(),
    }
}

/// Rejects headers where two columns feed the same field.
fn duplicate_field(headers: &[String], fields: &[Option<Field>]) -> Option<String> {
    for (position, field) in fields.iter().enumerate() {
        let Some(field) = field else {
            continue;
        };
        if let Some(earlier) = fields[..position]
            .iter()
            .position(|other| *other == Some(*field))
        {
            return Some(format!(
                "columns '{}' and '{}' both map to {}",
                headers[earlier],
                headers[position],
                field_id(*field)
            ));
        }
    }
    None
}

pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    // Score columns from a previous run are dropped so output files can be rescored.
    let raw_headers = reader.headers()?.clone();
    let kept = raw_headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !is_output_column(name))
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    let headers = kept
        .iter()
        .map(|index| raw_headers[*index].to_string())
        .collect::<Vec<_>>();
    let fields = headers
        .iter()
        .map(|name| Field::parse(name))
        .collect::<Vec<_>>();
    let duplicate = duplicate_field(&headers, &fields);

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let mut cells = Vec::with_capacity(kept.len());
        let mut undecodable = None;
        for (position, index) in kept.iter().enumerate() {
            let bytes = record.get(*index).unwrap_or_default();
            match std::str::from_utf8(bytes) {
                Ok(text) => cells.push(text.to_string()),
                Err(_) => {
                    if fields[position].is_some() && undecodable.is_none() {
                        undecodable = Some(LqError::InvalidInput(format!(
                            "{}: cell is not valid UTF-8",
                            headers[position]
                        )));
                    }
                    cells.push(String::from_utf8_lossy(bytes).into_owned());
                }
            }
        }

        let input = match (&duplicate, undecodable) {
            (Some(message), _) => Err(LqError::InvalidInput(message.clone())),
            (None, Some(err)) => Err(err),
            (None, None) => parse_row(&headers, &fields, &cells),
        };
        rows.push(TableRow { cells, input });
    }

    Ok(Table { headers, rows })
}

fn parse_row(headers: &[String], fields: &[Option<Field>], cells: &[String]) -> Result<InputRow> {
    let mut row = InputRow::default();
    for ((header, field), cell) in headers.iter().zip(fields).zip(cells) {
        let Some(field) = field else {
            continue;
        };
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        let value = cell.parse::<f64>().map_err(|_| {
            LqError::InvalidInput(format!("{header}: cannot parse '{cell}' as a number"))
        })?;
        row.set_field(*field, value);
    }
    Ok(row)
}

pub fn output_headers(input_headers: &[String]) -> Vec<String> {
    let mut headers = input_headers.to_vec();
    headers.extend(Variable::ORDER.iter().map(|variable| variable.score_column()));
    headers.push("composite".to_string());
    headers.push("LQ".to_string());
    headers.push(ERROR_COLUMN.to_string());
    headers
}

pub fn write_table<W: Write>(
    writer: W,
    table: &Table,
    outcomes: &[Result<NormalizedRecord>],
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(output_headers(&table.headers))?;

    for (row, outcome) in table.rows.iter().zip(outcomes) {
        let mut cells = row.cells.clone();
        match outcome {
            Ok(record) => {
                cells.extend(record.iter().map(|(_, score)| score.to_string()));
                cells.push(record.composite().to_string());
                cells.push(record.lq().to_string());
                cells.push(String::new());
            }
            Err(err) => {
                cells.extend(std::iter::repeat(String::new()).take(Variable::ORDER.len() + 2));
                cells.push(err.to_string());
            }
        }
        writer.write_record(&cells)?;
    }

    writer.flush()?;
    Ok(())
}
