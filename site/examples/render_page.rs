//! Landing page generation example.
//!
//! Run with: `cargo run --example render_page`

use seagro_site::{PageOptions, render_page};

fn main() {
    let html = render_page(&PageOptions::default());

    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
