//! Compile-fail test: ordering limit on a complex field.

use fieldguard::record;

#[record]
pub struct Signal {
    #[field(complex(gt = 1))]
    pub z: fieldguard::num_complex::Complex64,
}

fn main() {}
