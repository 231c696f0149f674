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
use crate::numerics::clamp_unit;
use crate::yuv_support::YuvSourceChannels;

/// Rec.601 inverse transform over normalized floats.
///
/// Luma is normalized to [0; 1], chroma keeps its 8-bit offset and the matrix
/// coefficients carry the `1 / 255` scale instead.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Bt601Normalized;

const SCALE: f32 = 1f32 / 255f32;
const BIAS_UV: f32 = 128f32;

const CR_R: f32 = 1.603f32 * SCALE;
const CB_G: f32 = -0.392f32 * SCALE;
const CR_G: f32 = -0.815f32 * SCALE;
const CB_B: f32 = 2.02f32 * SCALE;

impl YuvPixelKernel for Bt601Normalized {
    type Channel = f32;
    const ALPHA: f32 = 1f32;

    #[inline(always)]
    fn to_rgb(y: u8, u: u8, v: u8) -> [f32; 3] {
        let y_value = y as f32 / 255f32;
        let cb_value = u as f32 - BIAS_UV;
        let cr_value = v as f32 - BIAS_UV;
        let r = clamp_unit(y_value + cr_value * CR_R);
        let g = clamp_unit(y_value + cb_value * CB_G + cr_value * CR_G);
        let b = clamp_unit(y_value + cb_value * CB_B);
        [r, g, b]
    }

    /// Float path hands out raw luma, conversion result is not consulted.
    #[inline(always)]
    fn to_grey(y: u8, _: [f32; 3]) -> u8 {
        y
    }
}

/// Converts one YUV triple into normalized RGBA or BGRA pixel with alpha 1.0.
#[inline]
pub fn yuv_to_rgba_f32(y: u8, u: u8, v: u8, channels: YuvSourceChannels) -> [f32; 4] {
    reorder_rgb::<Bt601Normalized>(Bt601Normalized::to_rgb(y, u, v), channels)
}
