use weird64::*;

fn main() {
    let salt_a = b"In the beginning, God created the heavens and the earth.";
    let salt_b = b"And the earth was without form, and void; and darkness was upon the face of the waters.";

    let weird_a = Weird64::salted(salt_a);
    let weird_b = Weird64::salted(salt_b);

    println!("{}", weird_a.charset);
    println!("{}", weird_b.charset);
    println!();

    for n in 10u8..21 {
        let a = weird_a.encode_bytes([n]);
        let b = weird_b.encode_bytes([n]);

        if weird_a.decode_bytes(&a).unwrap() == [n] && weird_b.decode_bytes(&b).unwrap() == [n] {
            println!("{:>3}  {}  {}", n, a, b);
        } else {
            println!("{:>3}  {}  {}  MISMATCH", n, a, b);
        }
    }
}
