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
use image::{DynamicImage, GrayImage, ImageBuffer, Rgba, RgbaImage};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yuv2rgba::{
    YuvBiPlanarImageMut, YuvColorFormat, YuvFrameConverter, YuvFrameOptions, YuvGreyMode,
    YuvNvSource,
};

/// Builds NV21 frame with luma ramp over X and chroma sweeps over both axes
fn synthesize_nv21(width: u32, height: u32) -> YuvBiPlanarImageMut<'static, u8> {
    let mut frame = YuvBiPlanarImageMut::<u8>::alloc(width, height);
    let y_stride = frame.y_stride as usize;
    for (y, row) in frame
        .y_plane
        .borrow_mut()
        .chunks_exact_mut(y_stride)
        .enumerate()
    {
        for (x, dst) in row.iter_mut().enumerate() {
            *dst = (16 + (x * 219) / width as usize + y % 2) as u8;
        }
    }
    let uv_stride = frame.uv_stride as usize;
    let chroma_height = height.div_ceil(2) as usize;
    for (cy, row) in frame
        .uv_plane
        .borrow_mut()
        .chunks_exact_mut(uv_stride)
        .enumerate()
    {
        for (cx, pair) in row.chunks_exact_mut(2).enumerate() {
            pair[0] = ((cy * 255) / chroma_height) as u8;
            pair[1] = ((cx * 2 * 255) / width as usize) as u8;
        }
    }
    frame
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let width = 1280u32;
    let height = 721u32;
    let frame = synthesize_nv21(width, height);
    let source = YuvNvSource::nv21(frame.to_fixed());

    let converter = YuvFrameConverter::new(
        width,
        height,
        YuvFrameOptions {
            color_format: YuvColorFormat::Rgba,
            grey: YuvGreyMode::Fused,
        },
    )
    .unwrap();

    let mut rgba = converter.alloc_rgba::<u8>();
    let mut grey = converter.alloc_grey().unwrap();

    let start_time = Instant::now();
    converter
        .convert(&source, &mut rgba, Some(&mut grey))
        .unwrap();
    info!(elapsed = ?start_time.elapsed(), "NV21 -> RGBA with luminance");

    GrayImage::from_raw(width, height, grey.y_plane.borrow().to_vec())
        .unwrap()
        .save("converted_luminance.png")
        .unwrap();

    let mut rgba_f32 = converter.alloc_rgba::<f32>();
    let start_time = Instant::now();
    converter
        .convert_f32(&source, &mut rgba_f32, Some(&mut grey))
        .unwrap();
    info!(elapsed = ?start_time.elapsed(), "NV21 -> RGBA f32 with raw luma");

    RgbaImage::from_raw(width, height, rgba)
        .unwrap()
        .save("converted_rgba.png")
        .unwrap();
    GrayImage::from_raw(width, height, grey.y_plane.borrow().to_vec())
        .unwrap()
        .save("converted_luma.png")
        .unwrap();
    let float_image: ImageBuffer<Rgba<f32>, Vec<f32>> =
        ImageBuffer::from_raw(width, height, rgba_f32).unwrap();
    DynamicImage::ImageRgba32F(float_image)
        .to_rgba8()
        .save("converted_rgba_f32.png")
        .unwrap();
}
