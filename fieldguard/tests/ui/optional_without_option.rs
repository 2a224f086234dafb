//! Compile-fail test: `optional` on a field with no Option<T> type and no default.

use fieldguard::record;

#[record]
pub struct Account {
    #[field(text, optional)]
    pub nickname: String,
}

fn main() {}
