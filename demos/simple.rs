//! Building a model, writing it out and reading it back.
//!
//! Run with: cargo run --example simple

use csv_model::{from_str, Model};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut model = Model::new(["name", "city", "visits"]);
    model.add_row().set("name", "Alice")?.set("city", "Berlin")?.set("visits", 3)?;
    model.add_row().set("name", "Bob")?.set("city", "Paris; France")?.set("visits", 12)?;

    let csv = model.to_csv_string();
    println!("Serialized:\n{}", csv);

    let parsed = from_str(&csv)?;
    for row in parsed.rows() {
        println!(
            "{} lives in {}",
            row.get_cell_value("name")?.unwrap_or("?"),
            row.get_cell_value("city")?.unwrap_or("?")
        );
    }

    Ok(())
}
