use weird64::*;

fn main() {
    let weird = Weird64::default();

    for binary in &["", "0", "1", "00101001010", "101010101010", "000000"] {
        let encoded = weird.encode_binary_str(binary);
        let decoded = weird.decode_binary_str(&encoded).unwrap();
        println!("{:>14} -> {:<4} -> {}", format!("{:?}", binary), encoded, decoded);
    }

    let text = "In the beginning, God created the heavens and the earth.";
    let encoded = weird.encode_bytes(text);
    let blob = weird.decode_blob(&encoded, Some("text/plain")).unwrap();
    println!();
    println!("{}", encoded);
    println!("{} ({} bytes) -> {}", blob.mime, blob.len(), String::from_utf8_lossy(&blob.data));

    for broken in &["", "0000", "!?"] {
        match weird.decode(broken) {
            Ok(bits) => println!("{:?} -> {:?}", broken, bits),
            Err(e) => println!("{:?} -> {} ({:?})", broken, e, e.kind()),
        }
    }
}
