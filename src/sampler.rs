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
use crate::yuv_support::{chroma_coordinate, YuvNVOrder};
use crate::{YuvBiPlanarImage, YuvError, YuvPlanarImage};

/// Read-only 4:2:0 source addressed by luma coordinates.
///
/// Implementors expose luma rows and chroma pairs at chroma plane coordinates, the
/// mapping between the two is always `(x >> 1, y >> 1)`.
pub trait YuvSource: Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Verifies that planes and strides describe a valid image of `width` x `height`.
    fn check_constraints(&self) -> Result<(), YuvError>;

    /// Luma row `y`, exactly `width` samples long.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not less than `height`.
    fn luma_row(&self, y: u32) -> &[u8];

    /// Returns `(U, V)` at chroma plane coordinate `(cx, cy)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside of chroma plane.
    fn chroma(&self, cx: u32, cy: u32) -> (u8, u8);

    /// Fetches `(Y, U, V)` for the luma coordinate `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside of luma plane.
    #[inline(always)]
    fn sample(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let luma = self.luma_row(y)[x as usize];
        let (cx, cy) = chroma_coordinate(x, y);
        let (u, v) = self.chroma(cx, cy);
        (luma, u, v)
    }
}

impl YuvSource for YuvPlanarImage<'_, u8> {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    fn check_constraints(&self) -> Result<(), YuvError> {
        YuvPlanarImage::check_constraints(self)
    }

    #[inline(always)]
    fn luma_row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.y_stride as usize;
        &self.y_plane[start..start + self.width as usize]
    }

    #[inline(always)]
    fn chroma(&self, cx: u32, cy: u32) -> (u8, u8) {
        let u = self.u_plane[cy as usize * self.u_stride as usize + cx as usize];
        let v = self.v_plane[cy as usize * self.v_stride as usize + cx as usize];
        (u, v)
    }
}

/// Semi-planar source, single chroma plane holds interleaved pairs in `order`.
#[derive(Debug, Clone)]
pub struct YuvNvSource<'a> {
    pub image: YuvBiPlanarImage<'a, u8>,
    pub order: YuvNVOrder,
}

impl<'a> YuvNvSource<'a> {
    pub fn new(image: YuvBiPlanarImage<'a, u8>, order: YuvNVOrder) -> Self {
        Self { image, order }
    }

    /// NV12: interleaved plane stores U then V
    pub fn nv12(image: YuvBiPlanarImage<'a, u8>) -> Self {
        Self::new(image, YuvNVOrder::UV)
    }

    /// NV21: interleaved plane stores V then U, the Android camera default
    pub fn nv21(image: YuvBiPlanarImage<'a, u8>) -> Self {
        Self::new(image, YuvNVOrder::VU)
    }
}

impl YuvSource for YuvNvSource<'_> {
    #[inline]
    fn width(&self) -> u32 {
        self.image.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.image.height
    }

    fn check_constraints(&self) -> Result<(), YuvError> {
        self.image.check_constraints()
    }

    #[inline(always)]
    fn luma_row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.image.y_stride as usize;
        &self.image.y_plane[start..start + self.image.width as usize]
    }

    #[inline(always)]
    fn chroma(&self, cx: u32, cy: u32) -> (u8, u8) {
        let offset = cy as usize * self.image.uv_stride as usize + cx as usize * 2;
        let pair = &self.image.uv_plane[offset..offset + 2];
        (
            pair[self.order.get_u_position()],
            pair[self.order.get_v_position()],
        )
    }
}
