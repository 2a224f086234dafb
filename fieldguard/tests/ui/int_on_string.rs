//! Compile-fail test: `int` kind on a String field.

use fieldguard::record;

#[record]
pub struct Account {
    // ERROR: integers cannot be stored in a String
    #[field(int)]
    pub name: String,
}

fn main() {}
