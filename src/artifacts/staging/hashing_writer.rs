use crate::artifacts::objects::object_id::ObjectId;
use sha1::{Digest, Sha1};
use std::io::{self, Write};

/// Writer that hashes everything passing through it
///
/// Used to copy a file into the staging directory and compute its digest in a
/// single streaming pass.
#[derive(Debug)]
pub struct HashingWriter<W> {
    inner: W,
    digest: Sha1,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        HashingWriter {
            inner,
            digest: Sha1::new(),
        }
    }

    /// Return the wrapped writer together with the digest of all written bytes
    pub fn finish(self) -> (W, ObjectId) {
        (self.inner, ObjectId::from_hasher(self.digest))
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.digest.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    proptest! {
        #[test]
        fn digest_matches_one_shot_hash(
            data in proptest::collection::vec(proptest::num::u8::ANY, 0..4096)
        ) {
            let mut writer = HashingWriter::new(Vec::new());
            io::copy(&mut data.as_slice(), &mut writer).unwrap();
            let (copied, oid) = writer.finish();

            assert_eq!(copied, data.clone());
            assert_eq!(oid, ObjectId::hash_bytes(&data));
        }
    }

    #[test]
    fn chunked_writes_hash_like_a_single_write() {
        let mut writer = HashingWriter::new(io::sink());
        writer.write_all(b"hel").unwrap();
        writer.write_all(b"lo").unwrap();
        let (_, oid) = writer.finish();

        assert_eq!(oid, ObjectId::hash_bytes("hello"));
    }
}
