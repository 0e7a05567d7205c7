//! Parsing with a custom delimiter, line ending and trimming.
//!
//! Run with: cargo run --example custom_options

use csv_model::{LineEnding, Parser, ParserOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let csv = "alpha, beta, gamma\r\n a0,  b0,  c0\r\n\r\n a1,  b1,  c1\r\n";

    let options = ParserOptions::new()
        .with_delimiter(',')
        .with_line_ending(LineEnding::Windows);
    let model = Parser::with_options(options).parse(csv, true)?;

    println!("Columns: {:?}", model.column_names());
    println!("Rows: {}", model.row_count());
    println!("gamma in row 1: {:?}", model.get_cell_value("gamma", 1)?);

    // Headerless input gets synthetic column names
    let mut parser = Parser::new();
    parser.set_cell_auto_trimming_enabled(false);
    let model = parser.parse("x;y\nz;w\n", false)?;
    println!("Synthetic columns: {:?}", model.column_names());

    // Written back with the parser's settings
    print!("{}", model);

    Ok(())
}
