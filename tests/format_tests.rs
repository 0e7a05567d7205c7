use csv_model::tokenizer::split_line;
use csv_model::{escape_cell, from_str, LineEnding, LineSplitter, Model, Serializer};

#[test]
fn test_unquoted_simple_split() {
    assert_eq!(split_line(';', "Hello;World"), vec!["Hello", "World"]);
}

#[test]
fn test_fully_quoted_field() {
    let cells = split_line(';', "\"Hello;World\"");
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0], "Hello;World");
}

#[test]
fn test_mixed_quoted_and_unquoted() {
    assert_eq!(
        split_line(';', "\"Hello;World\";we are here"),
        vec!["Hello;World", "we are here"]
    );
}

#[test]
fn test_doubled_quote_decoding() {
    let cells = split_line(';', "\"\"Hello\"\";World;we are here");
    assert_eq!(cells.len(), 3);
    assert_eq!(cells, vec!["\"Hello\"", "World", "we are here"]);
}

#[test]
fn test_four_quotes() {
    // open, close with a literal quote, open, close with a literal quote
    assert_eq!(split_line(';', "\"\"\"\""), vec!["\"\""]);
}

#[test]
fn test_quotes_inside_unquoted_text() {
    assert_eq!(split_line(';', "say \"a;b\" now"), vec!["say a;b now"]);
}

#[test]
fn test_splitter_is_reusable() {
    let splitter = LineSplitter::new(',');
    assert_eq!(splitter.split_line("a,b"), vec!["a", "b"]);
    assert_eq!(splitter.split_line("\"c,d\",e"), vec!["c,d", "e"]);
}

#[test]
fn test_escaper_policy() {
    assert_eq!(escape_cell("a;b", ';'), "\"a;b\"");
    assert_eq!(escape_cell("a;b", ','), "a;b");
    assert_eq!(escape_cell("\"quoted\"", ';'), "\"quoted\"");
    assert_eq!(escape_cell("  spaces  ", ';'), "  spaces  ");
}

#[test]
fn test_escaped_cell_tokenizes_back() {
    let cells = ["x;y", "plain", "a;b;c"];
    let mut serializer = Serializer::new(';', LineEnding::Unix);
    serializer.write_record(cells);
    let text = serializer.into_inner();

    assert_eq!(split_line(';', text.trim_end()), cells);
}

#[test]
fn test_line_ending_bytes() {
    assert_eq!(LineEnding::Unix.as_str().as_bytes(), [0x0A]);
    assert_eq!(LineEnding::Mac.as_str().as_bytes(), [0x0A]);
    assert_eq!(LineEnding::MacPreOsx.as_str().as_bytes(), [0x0D]);
    assert_eq!(LineEnding::Windows.as_str().as_bytes(), [0x0D, 0x0A]);
}

#[test]
fn test_header_only_model() {
    let model = Model::new(["c1", "c2"]);
    assert_eq!(model.to_csv_string(), "c1;c2\n");
}

#[test]
fn test_header_names_are_escaped() {
    let model = Model::new(["a;b", "c"]);
    assert_eq!(model.to_csv_string(), "\"a;b\";c\n");

    let parsed = from_str(&model.to_csv_string()).unwrap();
    assert_eq!(parsed.column_names(), ["a;b", "c"]);
}

#[test]
fn test_trailing_empty_cell_is_dropped_when_reading() {
    assert_eq!(split_line(';', "a;"), vec!["a"]);
    assert_eq!(split_line(';', ";"), vec![""]);
}
