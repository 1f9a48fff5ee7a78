use std::fmt::{self, Display};

use weird64::Weird64;

struct DisplayAdapter<'w, 'b> {
    bits: &'b [bool],
    weird: &'w Weird64,
}

impl<'w, 'b> DisplayAdapter<'w, 'b> {
    fn new(bits: &'b [bool], weird: &'w Weird64) -> Self {
        Self { bits, weird }
    }
}

impl Display for DisplayAdapter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.weird.encode_into(self.bits, f)
    }
}

fn main() {
    let weird = Weird64::salted("<insert funny salt here>");
    let bits = [true, false, false, true, true, true, false, true, false];
    let encoded = weird.encode(&bits);
    let adapter = DisplayAdapter::new(&bits, &weird);
    let other = format!("{}", adapter);
    println!("{} / {}", encoded, other);
}
