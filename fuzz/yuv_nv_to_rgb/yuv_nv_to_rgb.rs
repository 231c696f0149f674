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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv2rgba::{
    YuvBiPlanarImage, YuvColorFormat, YuvFrameConverter, YuvFrameOptions, YuvGreyMode,
    YuvNVOrder, YuvNvSource,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    fuzz_yuv_nv(data.0, data.1, data.2, data.3, data.4, data.5);
});

fn fuzz_yuv_nv(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8, mode: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let uv_stride = width.div_ceil(2) * 2;
    let y_plane = vec![y_value; width as usize * height as usize];
    let mut uv_plane = vec![0u8; uv_stride as usize * height.div_ceil(2) as usize];
    for pair in uv_plane.chunks_exact_mut(2) {
        pair[0] = u_value;
        pair[1] = v_value;
    }

    let image = YuvBiPlanarImage {
        y_plane: &y_plane,
        y_stride: width,
        uv_plane: &uv_plane,
        uv_stride,
        width,
        height,
    };
    let order = if mode & 1 == 0 {
        YuvNVOrder::UV
    } else {
        YuvNVOrder::VU
    };
    let source = YuvNvSource::new(image, order);

    let color_format = if mode & 2 == 0 {
        YuvColorFormat::Rgba
    } else {
        YuvColorFormat::Bgra
    };
    let grey = match (mode >> 2) % 3 {
        0 => YuvGreyMode::Disabled,
        1 => YuvGreyMode::Fused,
        _ => YuvGreyMode::Separate,
    };
    let converter = YuvFrameConverter::new(
        width,
        height,
        YuvFrameOptions {
            color_format,
            grey,
        },
    )
    .unwrap();

    let mut rgba = converter.alloc_rgba::<u8>();
    let mut grey_image = converter.alloc_grey();
    converter
        .convert(&source, &mut rgba, grey_image.as_mut())
        .unwrap();
    assert!(rgba.chunks_exact(4).all(|px| px[3] == 255));

    let mut rgba_f32 = converter.alloc_rgba::<f32>();
    converter
        .convert_f32(&source, &mut rgba_f32, grey_image.as_mut())
        .unwrap();
    if let Some(grey_image) = grey_image {
        assert!(grey_image.y_plane.borrow().iter().all(|&v| v == y_value));
    }
}
