// SPDX-License-Identifier: CC0-1.0

use super::HashEngine;

/// Message word selection order, left line.
#[rustfmt::skip]
const ZL: [usize; 80] = [
     0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15,
     7,  4, 13,  1, 10,  6, 15,  3, 12,  0,  9,  5,  2, 14, 11,  8,
     3, 10, 14,  4,  9, 15,  8,  1,  2,  7,  0,  6, 13, 11,  5, 12,
     1,  9, 11, 10,  0,  8, 12,  4, 13,  3,  7, 15, 14,  5,  6,  2,
     4,  0,  5,  9,  7, 12,  2, 10, 14,  1,  3,  8, 11,  6, 15, 13,
];

/// Message word selection order, right line.
#[rustfmt::skip]
const ZR: [usize; 80] = [
     5, 14,  7,  0,  9,  2, 11,  4, 13,  6, 15,  8,  1, 10,  3, 12,
     6, 11,  3,  7,  0, 13,  5, 10, 14, 15,  8, 12,  4,  9,  1,  2,
    15,  5,  1,  3,  7, 14,  6,  9, 11,  8, 12,  2, 10,  0,  4, 13,
     8,  6,  4,  1,  3, 11, 15,  0,  5, 12,  2, 13,  9,  7, 10, 14,
    12, 15, 10,  4,  1,  5,  8,  7,  6,  2, 13, 14,  0,  3,  9, 11,
];

/// Per-round rotation amounts, left line.
#[rustfmt::skip]
const SL: [u32; 80] = [
    11, 14, 15, 12,  5,  8,  7,  9, 11, 13, 14, 15,  6,  7,  9,  8,
     7,  6,  8, 13, 11,  9,  7, 15,  7, 12, 15,  9, 11,  7, 13, 12,
    11, 13,  6,  7, 14,  9, 13, 15, 14,  8, 13,  6,  5, 12,  7,  5,
    11, 12, 14, 15, 14, 15,  9,  8,  9, 14,  5,  6,  8,  6,  5, 12,
     9, 15,  5, 11,  6,  8, 13, 12,  5, 12, 13, 14, 11,  8,  5,  6,
];

/// Per-round rotation amounts, right line.
#[rustfmt::skip]
const SR: [u32; 80] = [
     8,  9,  9, 11, 13, 15, 15,  5,  7,  7,  8, 11, 14, 14, 12,  6,
     9, 13, 15,  7, 12,  8,  9, 11,  7,  7, 12,  7,  6, 15, 13, 11,
     9,  7, 15, 11,  8,  6,  6, 14, 12, 13,  5, 14, 13, 13,  7,  5,
    15,  5,  8, 11, 14, 14,  6, 14,  6,  9, 12,  9, 12,  5, 15,  8,
     8,  5, 12,  9, 12,  5, 14,  6,  8, 13,  6,  5, 15, 13, 11, 11,
];

const fn f1(x: u32, y: u32, z: u32) -> u32 { x ^ y ^ z }
const fn f2(x: u32, y: u32, z: u32) -> u32 { (x & y) | (!x & z) }
const fn f3(x: u32, y: u32, z: u32) -> u32 { (x | !y) ^ z }
const fn f4(x: u32, y: u32, z: u32) -> u32 { (x & z) | (y & !z) }
const fn f5(x: u32, y: u32, z: u32) -> u32 { x ^ (y | !z) }

impl HashEngine {
    // Basic unoptimized algorithm from the RIPEMD-160 paper.
    pub(crate) fn process_block(&mut self) {
        let mut w = [0u32; 16];
        for (w_val, buff_bytes) in w.iter_mut().zip(self.buffer.chunks_exact(4)) {
            *w_val = u32::from_le_bytes(buff_bytes.try_into().expect("4 byte slice"));
        }

        let mut al = self.h[0];
        let mut bl = self.h[1];
        let mut cl = self.h[2];
        let mut dl = self.h[3];
        let mut el = self.h[4];

        let mut ar = self.h[0];
        let mut br = self.h[1];
        let mut cr = self.h[2];
        let mut dr = self.h[3];
        let mut er = self.h[4];

        for i in 0..80 {
            // The right line runs the nonlinear functions in reverse order.
            let (fl, fr, kl, kr) = match i {
                0..=15 => (f1(bl, cl, dl), f5(br, cr, dr), 0x0000_0000, 0x50a2_8be6),
                16..=31 => (f2(bl, cl, dl), f4(br, cr, dr), 0x5a82_7999, 0x5c4d_d124),
                32..=47 => (f3(bl, cl, dl), f3(br, cr, dr), 0x6ed9_eba1, 0x6d70_3ef3),
                48..=63 => (f4(bl, cl, dl), f2(br, cr, dr), 0x8f1b_bcdc, 0x7a6d_76e9),
                _ => (f5(bl, cl, dl), f1(br, cr, dr), 0xa953_fd4e, 0x0000_0000),
            };

            let t = al
                .wrapping_add(fl)
                .wrapping_add(w[ZL[i]])
                .wrapping_add(kl)
                .rotate_left(SL[i])
                .wrapping_add(el);
            al = el;
            el = dl;
            dl = cl.rotate_left(10);
            cl = bl;
            bl = t;

            let t = ar
                .wrapping_add(fr)
                .wrapping_add(w[ZR[i]])
                .wrapping_add(kr)
                .rotate_left(SR[i])
                .wrapping_add(er);
            ar = er;
            er = dr;
            dr = cr.rotate_left(10);
            cr = br;
            br = t;
        }

        let t = self.h[1].wrapping_add(cl).wrapping_add(dr);
        self.h[1] = self.h[2].wrapping_add(dl).wrapping_add(er);
        self.h[2] = self.h[3].wrapping_add(el).wrapping_add(ar);
        self.h[3] = self.h[4].wrapping_add(al).wrapping_add(br);
        self.h[4] = self.h[0].wrapping_add(bl).wrapping_add(cr);
        self.h[0] = t;
    }
}
