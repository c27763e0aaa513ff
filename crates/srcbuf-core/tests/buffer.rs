use proptest::prelude::*;
use srcbuf_core::{INITIAL_CAPACITY, SourceBuffer};

#[test]
fn accumulate_lines_then_finalize() {
    // A producer feeds content chunk by chunk before a single handoff.
    let lines: [&[u8]; 3] = [b"local x = 1\n", b"local y = 2\n", b"print(x + y)\n"];

    let mut buf = SourceBuffer::new().expect("buffer creation should succeed");
    for line in lines {
        buf.append(line).expect("append should succeed");
    }

    let expected: Vec<u8> = lines.concat();
    assert_eq!(buf.as_bytes(), &expected[..]);

    let out = buf.finalize().expect("finalize should succeed");
    assert_eq!(out.len(), expected.len() + 1);
    assert_eq!(&out[..expected.len()], &expected[..]);
    assert_eq!(out[expected.len()], 0);
}

proptest! {
    #[test]
    fn finalize_is_content_plus_terminator(
        bytes in proptest::collection::vec(any::<u8>(), 0..2048)
    ) {
        let mut buf = SourceBuffer::new().unwrap();
        buf.append(&bytes).unwrap();
        let out = buf.finalize().unwrap();
        prop_assert_eq!(out.len(), bytes.len() + 1);
        prop_assert_eq!(&out[..bytes.len()], &bytes[..]);
        prop_assert_eq!(out[bytes.len()], 0);
    }

    #[test]
    fn append_matches_per_byte_push(
        bytes in proptest::collection::vec(any::<u8>(), 0..2048)
    ) {
        let mut bulk = SourceBuffer::new().unwrap();
        bulk.append(&bytes).unwrap();

        let mut single = SourceBuffer::new().unwrap();
        for &b in &bytes {
            single.push(b).unwrap();
        }

        prop_assert_eq!(bulk.as_bytes(), single.as_bytes());
        prop_assert_eq!(bulk.capacity(), single.capacity());
        prop_assert_eq!(bulk.finalize().unwrap(), single.finalize().unwrap());
    }

    #[test]
    fn capacity_is_smallest_doubling_that_fits(
        bytes in proptest::collection::vec(any::<u8>(), 0..2048)
    ) {
        let mut buf = SourceBuffer::new().unwrap();
        buf.append(&bytes).unwrap();
        let expected = bytes.len().next_power_of_two().max(INITIAL_CAPACITY);
        prop_assert_eq!(buf.capacity(), expected);
        prop_assert!(buf.len() <= buf.capacity());
    }
}
