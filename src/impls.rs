// SPDX-License-Identifier: CC0-1.0

//! `std` impls.
//!
//! Implementations of traits defined in `std` and not in `core`. Engines are
//! exposed as `Write` sinks so data can be piped into them, e.g. with
//! `std::io::copy`. Writing to an engine never fails.

use std::io;

use crate::{hmac, ripemd160, HashEngine};

impl io::Write for ripemd160::HashEngine {
    fn flush(&mut self) -> io::Result<()> { Ok(()) }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.input(buf);
        Ok(buf.len())
    }
}

impl<E: HashEngine> io::Write for hmac::HmacEngine<E> {
    fn flush(&mut self) -> io::Result<()> { Ok(()) }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.input(buf);
        Ok(buf.len())
    }
}
