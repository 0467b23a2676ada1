//! bytepair CLI
//! Usage:
//!   bytepair <file>        encode <file> into <file>.bpe
//!   bytepair <file>.bpe    decode <file>.bpe into decoded-<file>

use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: bytepair <filename>");
        eprintln!("  <filename>      encode into <filename>.bpe");
        eprintln!("  <filename>.bpe  decode into decoded-<filename>");
        process::exit(1);
    }

    let filename = &args[1];

    let result = if bytepair::is_encoded_name(filename) {
        bytepair::decode_file(Path::new(filename))
    } else {
        bytepair::encode_file(Path::new(filename))
    };

    match result {
        Ok(output) => println!("Wrote {}", output.display()),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
