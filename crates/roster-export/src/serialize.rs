//! CSV and XLSX serializers with the fixed person column schema.
//!
//! Column order and header text are a compatibility contract; changing them
//! breaks downstream consumers of the exported files.

use chrono::NaiveDate;
use roster_core::person::PersonView;
use rust_xlsxwriter::{Color, Format, Workbook};

use crate::{Error, Result};

/// CSV columns. The XLSX export inserts `Country` between `Gender` and
/// `Address`; the CSV deliberately omits it.
const CSV_HEADER: [&str; 7] = [
  "PersonName",
  "Email",
  "DateOfBirth",
  "Age",
  "Gender",
  "Address",
  "ReceiveNewsLetters",
];

const XLSX_HEADER: [&str; 8] = [
  "PersonName",
  "Email",
  "DateOfBirth",
  "Age",
  "Gender",
  "Country",
  "Address",
  "ReceiveNewsLetters",
];

const WORKSHEET_NAME: &str = "Persons";

fn date_cell(d: Option<NaiveDate>) -> String {
  d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn age_cell(age: Option<u32>) -> String {
  age.map(|a| a.to_string()).unwrap_or_default()
}

fn gender_cell(view: &PersonView) -> &str {
  view.gender.map(|g| g.label()).unwrap_or_default()
}

// ─── CSV ─────────────────────────────────────────────────────────────────────

/// Encode `views` as a complete CSV byte buffer, one row per view in input
/// order. Fields containing commas, quotes, or newlines are quoted by the
/// writer.
pub fn to_csv(views: &[PersonView]) -> Result<Vec<u8>> {
  let mut writer = csv::Writer::from_writer(Vec::new());
  writer.write_record(CSV_HEADER)?;

  for view in views {
    let dob = date_cell(view.date_of_birth);
    let age = age_cell(view.age);
    writer.write_record([
      view.name.as_str(),
      view.email.as_str(),
      dob.as_str(),
      age.as_str(),
      gender_cell(view),
      view.address.as_deref().unwrap_or_default(),
      if view.receive_newsletter { "true" } else { "false" },
    ])?;
  }

  writer
    .into_inner()
    .map_err(|e| Error::CsvBuffer(e.to_string()))
}

// ─── XLSX ────────────────────────────────────────────────────────────────────

/// Encode `views` as a complete XLSX workbook buffer: one `Persons`
/// worksheet, bold shaded header row, auto-fitted column widths.
pub fn to_xlsx(views: &[PersonView]) -> Result<Vec<u8>> {
  let mut workbook = Workbook::new();
  let header_format = Format::new()
    .set_bold()
    .set_background_color(Color::RGB(0xD9D9D9));

  let worksheet = workbook.add_worksheet();
  worksheet.set_name(WORKSHEET_NAME)?;

  for (col, title) in XLSX_HEADER.iter().enumerate() {
    worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
  }

  for (i, view) in views.iter().enumerate() {
    let row = (i + 1) as u32;
    worksheet.write_string(row, 0, &view.name)?;
    worksheet.write_string(row, 1, &view.email)?;
    worksheet.write_string(row, 2, &date_cell(view.date_of_birth))?;
    match view.age {
      Some(age) => {
        worksheet.write_number(row, 3, age as f64)?;
      }
      None => {
        worksheet.write_string(row, 3, "")?;
      }
    }
    worksheet.write_string(row, 4, gender_cell(view))?;
    worksheet.write_string(row, 5, view.country_name.as_deref().unwrap_or_default())?;
    worksheet.write_string(row, 6, view.address.as_deref().unwrap_or_default())?;
    worksheet.write_string(
      row,
      7,
      if view.receive_newsletter { "true" } else { "false" },
    )?;
  }

  worksheet.autofit();

  Ok(workbook.save_to_buffer()?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use roster_core::person::Gender;
  use uuid::Uuid;

  use super::*;

  fn view(name: &str, email: &str) -> PersonView {
    PersonView {
      person_id:          Uuid::new_v4(),
      name:               name.into(),
      email:              email.into(),
      date_of_birth:      NaiveDate::from_ymd_opt(1995, 11, 29),
      age:                Some(28),
      gender:             Some(Gender::Male),
      country_id:         None,
      country_name:       Some("Ghana".into()),
      address:            Some("1660 Topping Ave".into()),
      receive_newsletter: true,
    }
  }

  #[test]
  fn csv_round_trip_one_record() {
    let bytes = to_csv(&[view("Kweku", "kweku@x.com")]).unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    assert_eq!(
      reader.headers().unwrap(),
      &csv::StringRecord::from(CSV_HEADER.as_slice())
    );

    let records: Vec<csv::StringRecord> =
      reader.records().collect::<std::result::Result<_, _>>().unwrap();
    assert_eq!(records.len(), 1);
    let row = &records[0];
    assert_eq!(&row[0], "Kweku");
    assert_eq!(&row[1], "kweku@x.com");
    assert_eq!(&row[2], "1995-11-29");
    assert_eq!(&row[3], "28");
    assert_eq!(&row[4], "Male");
    assert_eq!(&row[5], "1660 Topping Ave");
    assert_eq!(&row[6], "true");
  }

  #[test]
  fn csv_quotes_embedded_commas_and_newlines() {
    let mut v = view("Nimo, Koo", "koonimo@x.com");
    v.address = Some("Line one\nLine two".into());
    let bytes = to_csv(&[v]).unwrap();

    // Parsing back must reproduce the raw values despite the quoting.
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[0], "Nimo, Koo");
    assert_eq!(&row[5], "Line one\nLine two");
  }

  #[test]
  fn csv_blank_cells_for_absent_dob_and_age() {
    let mut v = view("Kweku", "kweku@x.com");
    v.date_of_birth = None;
    v.age = None;
    let bytes = to_csv(&[v]).unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[2], "");
    assert_eq!(&row[3], "");
  }

  #[test]
  fn csv_preserves_input_order() {
    let bytes =
      to_csv(&[view("B", "b@x.com"), view("A", "a@x.com")]).unwrap();
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let names: Vec<String> = reader
      .records()
      .map(|r| r.unwrap()[0].to_string())
      .collect();
    assert_eq!(names, ["B", "A"]);
  }

  #[test]
  fn xlsx_produces_a_zip_container() {
    let bytes = to_xlsx(&[view("Kweku", "kweku@x.com")]).unwrap();
    // An XLSX file is a ZIP archive; check the magic bytes.
    assert_eq!(&bytes[..2], b"PK");
  }

  #[test]
  fn xlsx_of_empty_sequence_is_still_a_workbook() {
    let bytes = to_xlsx(&[]).unwrap();
    assert_eq!(&bytes[..2], b"PK");
  }
}
