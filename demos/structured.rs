//! JSON to XML and YAML, CSV to JSON and SQL.
//!
//! Run with: cargo run --example structured

use convkit::{from_json_str, tabular, to_xml, to_yaml, ConvertOptions, CsvTarget};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let json = r#"{
        "service": "billing",
        "replicas": 3,
        "ports": [8080, 9090],
        "owner": { "team": "payments", "oncall": null }
    }"#;

    let value = from_json_str(json)?;
    let options = ConvertOptions::default();

    println!("XML:\n{}", to_xml(&value, &options)?);
    println!("YAML:\n{}", to_yaml(&value, &options));

    let csv = "name,role,age\nAlice,admin,30\nBob,dev,25\n";
    println!("{}\n", tabular::convert(csv, CsvTarget::Json, &options)?);

    let sql_options = ConvertOptions::new()
        .with_table_name("staff")
        .with_column_type("TEXT");
    println!("{}", tabular::convert(csv, CsvTarget::Sql, &sql_options)?);

    Ok(())
}
