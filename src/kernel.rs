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
use crate::yuv_support::YuvSourceChannels;
use crate::YuvSource;
use std::fmt::Debug;

/// Numeric domain of a YUV to RGB conversion.
///
/// `to_rgb` always returns channels in R, G, B order, reordering into destination
/// layout happens afterwards so greyscale never depends on the channel order.
pub trait YuvPixelKernel {
    type Channel: Copy + Default + Debug + Send + Sync + 'static;

    /// Fully opaque alpha in this domain
    const ALPHA: Self::Channel;

    /// Converts one sample triple into clamped R, G, B.
    fn to_rgb(y: u8, u: u8, v: u8) -> [Self::Channel; 3];

    /// Greyscale side output of a converted pixel, `rgb` is the result of `to_rgb`.
    fn to_grey(y: u8, rgb: [Self::Channel; 3]) -> u8;
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// Converted pixel in destination layout with optional greyscale sample
pub struct YuvKernelOutput<T> {
    pub pixel: [T; 4],
    pub grey: Option<u8>,
}

#[inline(always)]
/// Single parameterized conversion behind every colour kernel.
pub(crate) fn convert_pixel<K: YuvPixelKernel, const DESTINATION_CHANNELS: u8, const GREY: bool>(
    y: u8,
    u: u8,
    v: u8,
) -> YuvKernelOutput<K::Channel> {
    let rgb = K::to_rgb(y, u, v);
    let grey = if GREY { Some(K::to_grey(y, rgb)) } else { None };
    let pixel = reorder_rgb::<K>(rgb, DESTINATION_CHANNELS.into());
    YuvKernelOutput { pixel, grey }
}

#[inline(always)]
/// Places R, G, B and opaque alpha at the offsets of `channels`.
pub(crate) fn reorder_rgb<K: YuvPixelKernel>(
    rgb: [K::Channel; 3],
    channels: YuvSourceChannels,
) -> [K::Channel; 4] {
    let mut pixel = [K::ALPHA; 4];
    pixel[channels.get_r_channel_offset()] = rgb[0];
    pixel[channels.get_g_channel_offset()] = rgb[1];
    pixel[channels.get_b_channel_offset()] = rgb[2];
    pixel[channels.get_a_channel_offset()] = K::ALPHA;
    pixel
}

#[inline(always)]
pub(crate) fn sample_and_convert<
    S: YuvSource + ?Sized,
    K: YuvPixelKernel,
    const DESTINATION_CHANNELS: u8,
    const GREY: bool,
>(
    source: &S,
    x: u32,
    y: u32,
) -> YuvKernelOutput<K::Channel> {
    let (luma, u, v) = source.sample(x, y);
    convert_pixel::<K, DESTINATION_CHANNELS, GREY>(luma, u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl YuvPixelKernel for Identity {
        type Channel = u8;
        const ALPHA: u8 = 255;

        fn to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
            [y, u, v]
        }

        fn to_grey(_: u8, rgb: [u8; 3]) -> u8 {
            rgb[0]
        }
    }

    #[test]
    fn test_layout_follows_destination_channels() {
        let rgba =
            convert_pixel::<Identity, { YuvSourceChannels::Rgba as u8 }, false>(1, 2, 3);
        assert_eq!(rgba.pixel, [1, 2, 3, 255]);
        assert_eq!(rgba.grey, None);
        let bgra = convert_pixel::<Identity, { YuvSourceChannels::Bgra as u8 }, true>(1, 2, 3);
        assert_eq!(bgra.pixel, [3, 2, 1, 255]);
        assert_eq!(bgra.grey, Some(1));
    }

    #[test]
    fn test_runtime_layout_matches_const_layout() {
        use crate::{yuv_to_rgba8, yuv_to_rgba_f32, Bt601FixedPoint, Bt601Normalized};
        for &(y, u, v) in &[(16u8, 128u8, 128u8), (81, 90, 240), (210, 16, 146), (41, 240, 110)] {
            let rgba =
                convert_pixel::<Bt601FixedPoint, { YuvSourceChannels::Rgba as u8 }, false>(y, u, v);
            let bgra =
                convert_pixel::<Bt601FixedPoint, { YuvSourceChannels::Bgra as u8 }, false>(y, u, v);
            assert_eq!(yuv_to_rgba8(y, u, v, YuvSourceChannels::Rgba), rgba.pixel);
            assert_eq!(yuv_to_rgba8(y, u, v, YuvSourceChannels::Bgra), bgra.pixel);
            let rgba =
                convert_pixel::<Bt601Normalized, { YuvSourceChannels::Rgba as u8 }, false>(y, u, v);
            let bgra =
                convert_pixel::<Bt601Normalized, { YuvSourceChannels::Bgra as u8 }, false>(y, u, v);
            assert_eq!(yuv_to_rgba_f32(y, u, v, YuvSourceChannels::Rgba), rgba.pixel);
            assert_eq!(yuv_to_rgba_f32(y, u, v, YuvSourceChannels::Bgra), bgra.pixel);
        }
    }
}
