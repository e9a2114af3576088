//! # Lanyard CLI
//!
//! Usage:
//!   lanyard project.json -o sheet.html
//!   echo '{ ... }' | lanyard -o sheet.html
//!   lanyard --example > project.json

use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_project_json());
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).expect("Failed to read input file")
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).expect("Failed to read stdin");
        buf
    };

    // Parse output path
    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "sheet.html".to_string());

    // Render
    match lanyard::render_sheet_json(&input) {
        Ok(html) => {
            fs::write(&output_path, &html).expect("Failed to write sheet");
            eprintln!("✓ Written {} bytes to {}", html.len(), output_path);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn example_project_json() -> &'static str {
    r##"{
  "metadata": {
    "title": "RustConf 2026 — Badges",
    "author": "Lanyard"
  },
  "pageSettings": {
    "paperSize": "A4",
    "orientation": "portrait",
    "marginTopMm": 10,
    "marginRightMm": 10,
    "marginBottomMm": 10,
    "marginLeftMm": 10
  },
  "badgeSettings": {
    "sizePreset": "90x55",
    "orientation": "landscape",
    "gapXmm": 4,
    "gapYmm": 4,
    "autoGrid": true
  },
  "participants": [
    {
      "id": "p-001",
      "displayName": "Ada Lovelace",
      "role": "Speaker",
      "company": "Analytical Engines Ltd",
      "qrValue": "https://example.org/attendees/p-001"
    },
    {
      "id": "p-002",
      "displayName": "Grace Hopper",
      "role": "Keynote",
      "company": "COBOL Heritage Society",
      "qrValue": "https://example.org/attendees/p-002"
    },
    {
      "id": "p-003",
      "displayName": "Hedy Lamarr",
      "role": "Attendee",
      "company": "Frequency Hopping Inc"
    }
  ]
}
"##
}
