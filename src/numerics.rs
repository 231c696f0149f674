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
#![forbid(unsafe_code)]
use num_traits::clamp;

#[inline(always)]
/// Shift right without rounding, then saturate to 8 bit.
///
/// Rounding bias, if any, must be already added to `val`.
pub(crate) fn shr_to_u8<const PRECISION: i32>(val: i32) -> u8 {
    clamp(val >> PRECISION, 0, 255) as u8
}

#[inline(always)]
/// Saturates normalized value into [0; 1]
pub(crate) fn clamp_unit(val: f32) -> f32 {
    clamp(val, 0f32, 1f32)
}

#[inline(always)]
/// Rec.601 luma weights scaled by 1000, truncating division gives exact floor of
/// `0.299 * r + 0.587 * g + 0.114 * b`.
pub(crate) fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299u32 * r as u32 + 587u32 * g as u32 + 114u32 * b as u32;
    (weighted / 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shr_to_u8_saturates_after_shift() {
        assert_eq!(shr_to_u8::<8>(-1), 0);
        assert_eq!(shr_to_u8::<8>(-256 * 40), 0);
        assert_eq!(shr_to_u8::<8>(255 * 256 + 255), 255);
        assert_eq!(shr_to_u8::<8>(256 * 256), 255);
        assert_eq!(shr_to_u8::<8>(33504), 130);
    }

    #[test]
    fn test_luma_is_exact_on_neutral() {
        for v in 0..=255u8 {
            assert_eq!(luma_601(v, v, v), v);
        }
        assert_eq!(luma_601(255, 0, 0), 76);
        assert_eq!(luma_601(0, 255, 0), 149);
        assert_eq!(luma_601(0, 0, 255), 29);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.25), 0.);
        assert_eq!(clamp_unit(1.25), 1.);
        assert_eq!(clamp_unit(0.5), 0.5);
    }
}
