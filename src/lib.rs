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
//! Conversion of YUV 4:2:0 images, planar or NV12/NV21, into RGBA, BGRA and greyscale.
//!
//! 8-bit output uses Rec.601 limited range 8.8 fixed point transform, float output uses
//! normalized Rec.601 matrix. Both are available per pixel ([yuv_to_rgba_pixel] and friends)
//! and per frame ([yuv420_to_rgba] and friends, rows run in parallel with `rayon` feature).
mod frame_converter;
mod images;
mod kernel;
mod numerics;
mod sampler;
mod writer;
mod yuv_error;
mod yuv_fixed_point;
mod yuv_normalized;
mod yuv_pixel;
mod yuv_support;
mod yuv_to_rgba;

pub use yuv_error::{MismatchedDimensions, MismatchedSize, YuvError};

pub use yuv_support::chroma_coordinate;
pub use yuv_support::YuvNVOrder;
pub use yuv_support::YuvSourceChannels;

pub use images::{
    BufferStoreMut, YuvBiPlanarImage, YuvBiPlanarImageMut, YuvGrayImage, YuvGrayImageMut,
    YuvPlanarImage, YuvPlanarImageMut,
};

pub use sampler::{YuvNvSource, YuvSource};

pub use kernel::{YuvKernelOutput, YuvPixelKernel};
pub use yuv_fixed_point::{yuv_to_grey8, yuv_to_rgba8, Bt601FixedPoint};
pub use yuv_normalized::{yuv_to_rgba_f32, Bt601Normalized};

pub use yuv_pixel::yuv_to_bgra_f32_pixel;
pub use yuv_pixel::yuv_to_bgra_grey_f32_pixel;
pub use yuv_pixel::yuv_to_bgra_grey_pixel;
pub use yuv_pixel::yuv_to_bgra_pixel;
pub use yuv_pixel::yuv_to_grey_pixel;
pub use yuv_pixel::yuv_to_rgba_f32_pixel;
pub use yuv_pixel::yuv_to_rgba_grey_f32_pixel;
pub use yuv_pixel::yuv_to_rgba_grey_pixel;
pub use yuv_pixel::yuv_to_rgba_pixel;

pub use yuv_to_rgba::yuv420_to_bgra;
pub use yuv_to_rgba::yuv420_to_bgra_f32;
pub use yuv_to_rgba::yuv420_to_bgra_f32_with_grey;
pub use yuv_to_rgba::yuv420_to_bgra_with_grey;
pub use yuv_to_rgba::yuv420_to_grey;
pub use yuv_to_rgba::yuv420_to_rgba;
pub use yuv_to_rgba::yuv420_to_rgba_f32;
pub use yuv_to_rgba::yuv420_to_rgba_f32_with_grey;
pub use yuv_to_rgba::yuv420_to_rgba_with_grey;

pub use frame_converter::{YuvColorFormat, YuvFrameConverter, YuvFrameOptions, YuvGreyMode};
