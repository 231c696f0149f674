/*
 * Copyright (c) Radzivon Bartoshyk, 11/2024. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Per-pixel kernels addressed by output coordinate.
//!
//! Every function here is a pure function of the source and `(x, y)`, so callers are
//! free to run them in any order and from any number of threads.
//!
//! # Panics
//!
//! All kernels panic if `(x, y)` is outside of the source luma plane.
use crate::kernel::sample_and_convert;
use crate::yuv_support::YuvSourceChannels;
use crate::{Bt601FixedPoint, Bt601Normalized, YuvSource};

/// 8-bit RGBA pixel at `(x, y)`
#[inline]
pub fn yuv_to_rgba_pixel<S: YuvSource + ?Sized>(source: &S, x: u32, y: u32) -> [u8; 4] {
    sample_and_convert::<S, Bt601FixedPoint, { YuvSourceChannels::Rgba as u8 }, false>(
        source, x, y,
    )
    .pixel
}

/// 8-bit RGBA pixel and its luminance at `(x, y)`
#[inline]
pub fn yuv_to_rgba_grey_pixel<S: YuvSource + ?Sized>(source: &S, x: u32, y: u32) -> ([u8; 4], u8) {
    let output = sample_and_convert::<
        S,
        Bt601FixedPoint,
        { YuvSourceChannels::Rgba as u8 },
        true,
    >(source, x, y);
    (output.pixel, output.grey.unwrap_or_default())
}

/// 8-bit BGRA pixel at `(x, y)`
#[inline]
pub fn yuv_to_bgra_pixel<S: YuvSource + ?Sized>(source: &S, x: u32, y: u32) -> [u8; 4] {
    sample_and_convert::<S, Bt601FixedPoint, { YuvSourceChannels::Bgra as u8 }, false>(
        source, x, y,
    )
    .pixel
}

/// 8-bit BGRA pixel and its luminance at `(x, y)`, luminance matches the RGBA kernel
#[inline]
pub fn yuv_to_bgra_grey_pixel<S: YuvSource + ?Sized>(source: &S, x: u32, y: u32) -> ([u8; 4], u8) {
    let output = sample_and_convert::<
        S,
        Bt601FixedPoint,
        { YuvSourceChannels::Bgra as u8 },
        true,
    >(source, x, y);
    (output.pixel, output.grey.unwrap_or_default())
}

/// Normalized RGBA pixel at `(x, y)`
#[inline]
pub fn yuv_to_rgba_f32_pixel<S: YuvSource + ?Sized>(source: &S, x: u32, y: u32) -> [f32; 4] {
    sample_and_convert::<S, Bt601Normalized, { YuvSourceChannels::Rgba as u8 }, false>(
        source, x, y,
    )
    .pixel
}

/// Normalized RGBA pixel and raw luma at `(x, y)`
#[inline]
pub fn yuv_to_rgba_grey_f32_pixel<S: YuvSource + ?Sized>(
    source: &S,
    x: u32,
    y: u32,
) -> ([f32; 4], u8) {
    let output = sample_and_convert::<
        S,
        Bt601Normalized,
        { YuvSourceChannels::Rgba as u8 },
        true,
    >(source, x, y);
    (output.pixel, output.grey.unwrap_or_default())
}

/// Normalized BGRA pixel at `(x, y)`
#[inline]
pub fn yuv_to_bgra_f32_pixel<S: YuvSource + ?Sized>(source: &S, x: u32, y: u32) -> [f32; 4] {
    sample_and_convert::<S, Bt601Normalized, { YuvSourceChannels::Bgra as u8 }, false>(
        source, x, y,
    )
    .pixel
}

/// Normalized BGRA pixel and raw luma at `(x, y)`
#[inline]
pub fn yuv_to_bgra_grey_f32_pixel<S: YuvSource + ?Sized>(
    source: &S,
    x: u32,
    y: u32,
) -> ([f32; 4], u8) {
    let output = sample_and_convert::<
        S,
        Bt601Normalized,
        { YuvSourceChannels::Bgra as u8 },
        true,
    >(source, x, y);
    (output.pixel, output.grey.unwrap_or_default())
}

/// Raw luma at `(x, y)`, chroma is never read
#[inline]
pub fn yuv_to_grey_pixel<S: YuvSource + ?Sized>(source: &S, x: u32, y: u32) -> u8 {
    source.luma_row(y)[x as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{YuvBiPlanarImageMut, YuvNvSource, YuvPlanarImage};

    /// Luma plane carries x + y * 16 + 16, chroma planes are constant
    fn planar_parts(width: u32, height: u32, u: u8, v: u8) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let mut y_plane = vec![0u8; (width * height) as usize];
        for (i, dst) in y_plane.iter_mut().enumerate() {
            let x = i as u32 % width;
            let y = i as u32 / width;
            *dst = (x + y * 16 + 16) as u8;
        }
        let chroma = (width.div_ceil(2) * height.div_ceil(2)) as usize;
        (y_plane, vec![u; chroma], vec![v; chroma])
    }

    #[test]
    fn test_integer_kernels_agree_on_grey() {
        let (y_plane, u_plane, v_plane) = planar_parts(6, 5, 90, 200);
        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: 6,
            u_plane: &u_plane,
            u_stride: 3,
            v_plane: &v_plane,
            v_stride: 3,
            width: 6,
            height: 5,
        };
        for y in 0..5 {
            for x in 0..6 {
                let rgba = yuv_to_rgba_pixel(&image, x, y);
                let bgra = yuv_to_bgra_pixel(&image, x, y);
                let (rgba_g, grey_rgba) = yuv_to_rgba_grey_pixel(&image, x, y);
                let (bgra_g, grey_bgra) = yuv_to_bgra_grey_pixel(&image, x, y);
                assert_eq!(rgba, rgba_g);
                assert_eq!(bgra, bgra_g);
                assert_eq!([rgba[2], rgba[1], rgba[0], rgba[3]], bgra);
                assert_eq!(grey_rgba, grey_bgra);
            }
        }
    }

    #[test]
    fn test_float_grey_kernels_hand_out_raw_luma() {
        let (y_plane, u_plane, v_plane) = planar_parts(4, 4, 10, 240);
        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: 4,
            u_plane: &u_plane,
            u_stride: 2,
            v_plane: &v_plane,
            v_stride: 2,
            width: 4,
            height: 4,
        };
        for y in 0..4 {
            for x in 0..4 {
                let raw = y_plane[(y * 4 + x) as usize];
                let (rgba, grey) = yuv_to_rgba_grey_f32_pixel(&image, x, y);
                let (bgra, grey_bgra) = yuv_to_bgra_grey_f32_pixel(&image, x, y);
                assert_eq!(grey, raw);
                assert_eq!(grey_bgra, raw);
                assert_eq!(rgba, yuv_to_rgba_f32_pixel(&image, x, y));
                assert_eq!(bgra, yuv_to_bgra_f32_pixel(&image, x, y));
                assert_eq!(yuv_to_grey_pixel(&image, x, y), raw);
            }
        }
    }

    #[test]
    fn test_nv21_kernel_reads_swapped_chroma() {
        let mut image = YuvBiPlanarImageMut::<u8>::alloc(2, 2);
        image.y_plane.borrow_mut().fill(81);
        // NV21 stores V first
        image.uv_plane.borrow_mut().copy_from_slice(&[255, 0]);
        let fixed = image.to_fixed();
        let source = YuvNvSource::nv21(fixed);
        assert_eq!(yuv_to_rgba_pixel(&source, 1, 1), [255, 22, 0, 255]);
        assert_eq!(yuv_to_bgra_pixel(&source, 0, 1), [0, 22, 255, 255]);
    }
}
