use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use indoc::indoc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use tokio_stream::StreamExt;

use library_fees::processors::fees_report;

#[derive(Debug, Deserialize)]
struct FeesRow {
  patron_id: String,
  late_fees: String,
}

async fn read_fees(path: &Path) -> HashMap<String, Decimal> {
  let file = tokio::fs::File::open(path).await.unwrap();
  let mut deserializer = csv_async::AsyncDeserializer::from_reader(file);
  let rows = deserializer
    .deserialize::<FeesRow>()
    .collect::<Vec<_>>()
    .await;
  rows
    .into_iter()
    .map(|row| {
      let row = row.unwrap();
      (row.patron_id, Decimal::from_str(&row.late_fees).unwrap())
    })
    .collect()
}

#[tokio::test]
async fn two_late_returns_of_the_same_patron() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("log.csv");
  let output = dir.path().join("fees.csv");
  std::fs::write(
    &input,
    indoc! { "
      book_uid,isbn_13,patron_id,date_checkout,date_due,date_returned
      b-1,978-3-16-148410-0,P1,12/18/2020,01/01/2021,01/03/2021
      b-2,978-3-16-148410-0,P1,12/18/2020,01/01/2021,01/04/2021
    " },
  )
  .unwrap();

  fees_report(&input, &output).await.unwrap();

  assert_eq!(
    std::fs::read_to_string(&output).unwrap(),
    "patron_id,late_fees\nP1,1.25\n"
  );
}

#[tokio::test]
async fn on_time_returns_are_reported_without_fees() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("log.csv");
  let output = dir.path().join("fees.csv");
  std::fs::write(
    &input,
    indoc! { "
      book_uid,isbn_13,patron_id,date_checkout,date_due,date_returned
      b-1,978-3-16-148410-0,P1,12/18/2020,01/01/2021,01/05/2021
      b-2,978-3-16-148410-0,P2,12/18/2020,01/01/2021,01/01/2021
      b-3,978-3-16-148410-0,P3,12/18/2020,01/01/2021,12/20/2020
    " },
  )
  .unwrap();

  fees_report(&input, &output).await.unwrap();

  assert_eq!(
    std::fs::read_to_string(&output).unwrap(),
    "patron_id,late_fees\nP1,1.00\nP2,0.00\nP3,0.00\n"
  );
}

#[tokio::test]
async fn empty_log_produces_an_empty_report() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("log.csv");
  let output = dir.path().join("fees.csv");
  std::fs::write(
    &input,
    "book_uid,isbn_13,patron_id,date_checkout,date_due,date_returned\n",
  )
  .unwrap();

  fees_report(&input, &output).await.unwrap();

  assert_eq!(
    std::fs::read_to_string(&output).unwrap(),
    "patron_id,late_fees\n"
  );
}

#[tokio::test]
async fn sample_checkout_log() {
  let dir = tempfile::tempdir().unwrap();
  let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/book_returns_short.csv");
  let output = dir.path().join("book_fees.csv");

  fees_report(&input, &output).await.unwrap();

  let fees = read_fees(&output).await;
  let expected = vec![
    ("17-873-8783".to_string(), dec!(1.50)),
    ("01-112-9271".to_string(), dec!(0)),
    ("32-554-1908".to_string(), dec!(3.75)),
  ]
  .into_iter()
  .collect::<HashMap<String, Decimal>>();
  assert_eq!(fees, expected);
}

#[tokio::test]
async fn overwrites_previous_report() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("log.csv");
  let output = dir.path().join("fees.csv");
  std::fs::write(
    &input,
    "b-1,978-3-16-148410-0,P9,12/18/2020,01/01/2021,01/02/2021\n",
  )
  .unwrap();
  std::fs::write(&output, "patron_id,late_fees\nP1,100.00\nP2,3.00\n").unwrap();

  fees_report(&input, &output).await.unwrap();

  let fees = read_fees(&output).await;
  assert_eq!(fees.len(), 1);
  assert_eq!(fees.get("P9"), Some(&dec!(0.25)));
}
