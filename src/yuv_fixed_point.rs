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
use crate::kernel::{reorder_rgb, YuvPixelKernel};
use crate::numerics::{luma_601, shr_to_u8};
use crate::yuv_support::YuvSourceChannels;

/// Rec.601 limited range inverse transform in 8.8 fixed point
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Bt601FixedPoint;

const PRECISION: i32 = 8;
const ROUNDING: i32 = 1 << (PRECISION - 1);
const BIAS_Y: i32 = 16;
const BIAS_UV: i32 = 128;

const Y_COEF: i32 = 298;
const CR_COEF: i32 = 409;
const CB_COEF: i32 = 516;
const G_COEF_1: i32 = 208;
const G_COEF_2: i32 = 100;

impl YuvPixelKernel for Bt601FixedPoint {
    type Channel = u8;
    const ALPHA: u8 = 255;

    #[inline(always)]
    fn to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
        let y_value = (y as i32 - BIAS_Y) * Y_COEF;
        let cb_value = u as i32 - BIAS_UV;
        let cr_value = v as i32 - BIAS_UV;
        let r = shr_to_u8::<PRECISION>(y_value + CR_COEF * cr_value + ROUNDING);
        let g = shr_to_u8::<PRECISION>(
            y_value - G_COEF_2 * cb_value - G_COEF_1 * cr_value + ROUNDING,
        );
        let b = shr_to_u8::<PRECISION>(y_value + CB_COEF * cb_value + ROUNDING);
        [r, g, b]
    }

    #[inline(always)]
    fn to_grey(_: u8, rgb: [u8; 3]) -> u8 {
        luma_601(rgb[0], rgb[1], rgb[2])
    }
}

/// Converts one YUV triple into 8-bit RGBA or BGRA pixel with opaque alpha.
#[inline]
pub fn yuv_to_rgba8(y: u8, u: u8, v: u8, channels: YuvSourceChannels) -> [u8; 4] {
    reorder_rgb::<Bt601FixedPoint>(Bt601FixedPoint::to_rgb(y, u, v), channels)
}

/// Greyscale of the converted pixel, identical for both channel orders.
#[inline]
pub fn yuv_to_grey8(y: u8, u: u8, v: u8) -> u8 {
    Bt601FixedPoint::to_grey(y, Bt601FixedPoint::to_rgb(y, u, v))
}
