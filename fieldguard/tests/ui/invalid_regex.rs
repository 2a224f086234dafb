//! Compile-fail test: text regex that does not compile.

use fieldguard::record;

#[record]
pub struct Account {
    // ERROR: unclosed group
    #[field(text(regex = "^(unclosed"))]
    pub code: String,
}

fn main() {}
