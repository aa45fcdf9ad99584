//! Fixture generator for stress testing vmgpack.
//!
//! Writes a directory of synthetic `.vmg` files in the layout Nokia phones
//! export: UTF-16LE, CRLF line endings. A share of the files is deliberately
//! broken (no contact, no body, bad date) to exercise the skip and fallback
//! paths.
//!
//! Usage: cargo run --features gen-test --bin gen_vmg -- [count] [output_dir]
//! Example: cargo run --features gen-test --bin gen_vmg -- 5000 fixtures/inbox

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs;
use std::io;
use std::path::Path;

const CONTACTS: &[&str] = &[
    "+19995550123",
    "+441632960961",
    "0049301234567",
    "5550100",
    "Mum",
    "Voicemail",
    "Käthe",
];

const BODIES: &[&str] = &[
    "Hello there!",
    "See you at 8, ok?",
    "Line one\nLine two\nLine three",
    "Price: 5 ¤ per unit",
    "Käse & Brot <morgen>",
    "He said \"call me\"",
    "   ",
    "Привет, как дела?",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1_000);
    let output = args.get(2).map_or("vmg_fixtures", String::as_str);

    println!("🧪 VMG Fixture Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Files:    {}", count);
    println!("   Output:   {}", output);
    println!();

    let dir = Path::new(output);
    fs::create_dir_all(dir)?;

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;
    let mut broken = 0usize;

    for i in 0..count {
        let (text, is_broken) = generate_message(&mut rng, i);
        let encoded = utf16le(&text);
        bytes_written += encoded.len();
        if is_broken {
            broken += 1;
        }
        fs::write(dir.join(format!("msg_{i:06}.vmg")), encoded)?;
    }

    println!("✅ Done in {:.2}s", start.elapsed().as_secs_f64());
    println!("   Bytes:    {}", bytes_written);
    println!("   Broken:   {} (missing contact/body or bad date)", broken);
    Ok(())
}

fn generate_message(rng: &mut impl Rng, index: usize) -> (String, bool) {
    let contact = CONTACTS.choose(rng).copied().unwrap_or("5550100");
    let body = BODIES.choose(rng).copied().unwrap_or("Hello");

    // 2008-01-01 plus up to ~two years, second resolution
    let offset = rng.gen_range(0..63_072_000i64);
    let ts = chrono::DateTime::from_timestamp(1_199_145_600 + offset, 0)
        .unwrap_or_default()
        .naive_utc();

    let roll: u8 = rng.gen_range(0..100);
    let is_broken = roll < 15;

    let tel_line = if roll < 5 {
        "TEL:".to_string()
    } else {
        format!("TEL:{contact}")
    };
    let dt_line = if (5..10).contains(&roll) {
        format!("X-NOK-DT:{}", ts.format("%Y%m%d"))
    } else {
        format!("X-NOK-DT:{}", ts.format("%Y%m%dT%H%M%SZ"))
    };
    let body_block = if (10..15).contains(&roll) {
        String::new()
    } else {
        format!(
            "Date:{}\r\n{}\r\nEND:VBODY\r\n",
            ts.format("%d.%m.%Y %H:%M:%S"),
            body.replace('\n', "\r\n")
        )
    };

    let text = format!(
        "BEGIN:VMSG\r\n\
         VERSION:1.1\r\n\
         X-IRMC-STATUS:READ\r\n\
         X-IRMC-BOX:INBOX\r\n\
         {dt_line}\r\n\
         BEGIN:VCARD\r\n\
         VERSION:3.0\r\n\
         N:\r\n\
         {tel_line}\r\n\
         END:VCARD\r\n\
         BEGIN:VENV\r\n\
         BEGIN:VBODY\r\n\
         {body_block}\
         END:VENV\r\n\
         END:VMSG\r\n\
         X-INDEX:{index}\r\n"
    );

    (text, is_broken)
}

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}
