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
    yuv420_to_bgra, yuv420_to_bgra_f32, yuv420_to_bgra_f32_with_grey, yuv420_to_bgra_with_grey,
    yuv420_to_grey, yuv420_to_rgba, yuv420_to_rgba_f32, yuv420_to_rgba_f32_with_grey,
    yuv420_to_rgba_with_grey, yuv_to_grey8, yuv_to_rgba8, YuvGrayImageMut, YuvPlanarImage,
    YuvSourceChannels,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    fuzz_yuv_420(data.0, data.1, data.2, data.3, data.4, data.5);
});

fn fuzz_yuv_420(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8, pad: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let y_stride = width + (pad % 8) as u32;
    let chroma_width = width.div_ceil(2);
    let chroma_height = height.div_ceil(2);
    let y_plane = vec![y_value; y_stride as usize * height as usize];
    let u_plane = vec![u_value; chroma_width as usize * chroma_height as usize];
    let v_plane = vec![v_value; chroma_width as usize * chroma_height as usize];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride,
        u_plane: &u_plane,
        u_stride: chroma_width,
        v_plane: &v_plane,
        v_stride: chroma_width,
        width,
        height,
    };

    let mut target_rgba = vec![0u8; width as usize * height as usize * 4];
    let mut grey = YuvGrayImageMut::<u8>::alloc(width, height);

    yuv420_to_rgba(&planar_image, &mut target_rgba, width * 4).unwrap();
    let expected = yuv_to_rgba8(y_value, u_value, v_value, YuvSourceChannels::Rgba);
    assert!(target_rgba.chunks_exact(4).all(|px| px == expected));

    yuv420_to_bgra(&planar_image, &mut target_rgba, width * 4).unwrap();
    yuv420_to_rgba_with_grey(&planar_image, &mut target_rgba, width * 4, &mut grey).unwrap();
    let luminance = yuv_to_grey8(y_value, u_value, v_value);
    assert!(grey.y_plane.borrow().iter().all(|&v| v == luminance));
    yuv420_to_bgra_with_grey(&planar_image, &mut target_rgba, width * 4, &mut grey).unwrap();
    assert!(grey.y_plane.borrow().iter().all(|&v| v == luminance));

    let mut target_f32 = vec![0f32; width as usize * height as usize * 4];
    yuv420_to_rgba_f32(&planar_image, &mut target_f32, width * 4).unwrap();
    yuv420_to_bgra_f32(&planar_image, &mut target_f32, width * 4).unwrap();
    assert!(target_f32.iter().all(|c| (0f32..=1f32).contains(c)));
    yuv420_to_rgba_f32_with_grey(&planar_image, &mut target_f32, width * 4, &mut grey).unwrap();
    yuv420_to_bgra_f32_with_grey(&planar_image, &mut target_f32, width * 4, &mut grey).unwrap();
    assert!(grey.y_plane.borrow().iter().all(|&v| v == y_value));

    grey.y_plane.borrow_mut().fill(0);
    yuv420_to_grey(&planar_image, &mut grey).unwrap();
    assert!(grey.y_plane.borrow().iter().all(|&v| v == y_value));
}
