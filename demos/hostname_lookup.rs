use hexcamp_h3::{
  cell_to_hostname, cell_to_token, decode_token, extract_base_cell, extract_digits, get_resolution, h3_to_string,
  hostname_to_cell, is_pentagon, is_valid_cell, token_to_cell, token_url, CodecError, SplitIndex,
};

fn main() -> Result<(), CodecError> {
  println!("--- Token Lookup Example ---");

  // 1. Decode a token from a hex.camp URL
  let token = "2kgrugszem7q";
  let cell_hex = decode_token(token)?;
  println!("Token {} decodes to cell string {}", token, cell_hex);

  // 2. Parse it and validate the cell
  let cell = token_to_cell(token)?;
  if !is_valid_cell(cell) {
    println!("Cell {} is NOT valid.", h3_to_string(cell));
    return Ok(());
  }
  println!("Cell Resolution: {}", get_resolution(cell));
  println!("Is Pentagon: {}", is_pentagon(cell));

  // 3. Read the digits from the two-word form
  let split = SplitIndex::from(cell);
  println!("Words: upper {:#010x}, lower {:#010x}", split.upper, split.lower);
  println!("Base Cell Number: {}", extract_base_cell(split));
  let digits = extract_digits(split, get_resolution(cell))?;
  let rendered: Vec<String> = digits.iter().map(ToString::to_string).collect();
  println!("Digits (res 1 first): {}", rendered.join(" "));

  println!("\n--- Hostname Example ---");
  // 4. Build the hostname and parse it back
  let hostname = cell_to_hostname(cell)?;
  println!("Hostname: {}", hostname);
  let parsed = hostname_to_cell(&hostname)?;
  println!("Parsed back: {} (matches: {})", h3_to_string(parsed), parsed == cell);

  // 5. Re-encode the cell for a URL
  let reencoded = cell_to_token(cell)?;
  println!("URL: {}", token_url(&reencoded));

  Ok(())
}
