//! Property tests for share headers and the human share format

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use tss::codec::{self, HEADER_LEN, ShareHeader};
use tss::domain::ShareIndex;

const IDENTIFIER_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Identifier of 0..=16 characters from the allowed set
#[derive(Clone, Debug)]
struct ValidIdentifier(String);

impl Arbitrary for ValidIdentifier {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::from(u8::arbitrary(g) % 17);
        let id = (0..len)
            .map(|_| char::from(*g.choose(IDENTIFIER_CHARS).unwrap()))
            .collect();
        ValidIdentifier(id)
    }
}

#[quickcheck]
fn prop_header_survives_binary_encoding(
    id: ValidIdentifier,
    hash_code: u8,
    threshold: u8,
    share_len: u16,
) -> bool {
    let header = ShareHeader::new(id.0.as_bytes(), hash_code, threshold, share_len).unwrap();
    let encoded = header.encode();
    encoded.len() == HEADER_LEN && ShareHeader::decode(&encoded) == Ok(header)
}

#[quickcheck]
fn prop_human_share_unwraps_to_binary(id: ValidIdentifier, index: u8, payload: Vec<u8>) -> bool {
    let Ok(index) = ShareIndex::new(index) else {
        return true;
    };
    let header = ShareHeader::new(id.0.as_bytes(), 2, 3, 1).unwrap();
    let binary = codec::encode_binary(&header, index, &payload);
    let human = codec::encode_human(&header, &binary);

    codec::is_human(human.as_bytes())
        && codec::decode_human(&human) == Ok(binary.clone())
        && codec::decode_human(human.trim_end_matches('=')) == Ok(binary)
}

/// Arbitrary text never panics the human share parser
#[quickcheck]
fn prop_decode_human_total(text: String) -> bool {
    let parsed = codec::decode_human(&text);
    codec::is_human(text.as_bytes()) || parsed.is_err()
}
