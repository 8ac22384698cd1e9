use crate::core::error::ExportError;
use crate::core::field::display_or_empty;
use crate::core::record::Record;
use chrono::{Local, NaiveDate};

/// UTF-8 byte order mark, so spreadsheet tools detect the encoding
pub const BOM: &str = "\u{feff}";

/// Render `records` as CSV.
///
/// `headers` are the column labels and `fields` the record keys read for
/// each column, in the same order. Values are stringified the same way the
/// table search sees them and quoted only when they contain a comma, a quote
/// or a line break. Rows are joined with `\n` and the output starts with
/// [`BOM`].
///
/// # Example
///
/// ```rust,ignore
/// let csv = to_csv(&job_seekers, &["Nom", "Pays"], &["nomComplet", "pays"])?;
/// std::fs::write(format!("{}.csv", filename_with_date("candidats", today)), csv)?;
/// ```
pub fn to_csv<R: Record>(
    records: &[R],
    headers: &[&str],
    fields: &[&str],
) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoData);
    }
    if headers.len() != fields.len() {
        return Err(ExportError::HeaderMismatch {
            headers: headers.len(),
            fields: fields.len(),
        });
    }

    let mut wtr = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .quote_style(::csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    wtr.write_record(headers)?;
    for record in records {
        let row: Vec<String> = fields
            .iter()
            .map(|field| display_or_empty(record.field_value(field).as_ref()))
            .collect();
        wtr.write_record(&row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    let mut body = String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))?;
    // rows are joined, not terminated
    if body.ends_with('\n') {
        body.pop();
    }

    tracing::debug!(rows = records.len(), columns = fields.len(), "exported csv");
    Ok(format!("{BOM}{body}"))
}

/// `"{base}-YYYY-MM-DD"`, without extension
pub fn filename_with_date(base: &str, date: NaiveDate) -> String {
    format!("{}-{}", base, date.format("%Y-%m-%d"))
}

/// [`filename_with_date`] for the local calendar date
pub fn filename_for_today(base: &str) -> String {
    filename_with_date(base, Local::now().date_naive())
}
