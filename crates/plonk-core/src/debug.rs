//! Hex formatting for log lines and CLI output

extern crate alloc;

use crate::types::Fq;
use alloc::format;
use alloc::string::String;

/// Format Fq as a 0x-prefixed hex string
pub fn fq_to_hex(fq: &Fq) -> String {
    let mut s = String::from("0x");
    for byte in fq.iter() {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fq_from_u64;

    #[test]
    fn test_fq_to_hex() {
        let s = fq_to_hex(&fq_from_u64(0xab));
        assert_eq!(s.len(), 66);
        assert!(s.starts_with("0x00"));
        assert!(s.ends_with("ab"));
    }
}
