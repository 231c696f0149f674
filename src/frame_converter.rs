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
use crate::yuv_error::{check_dimensions, check_image_size, check_overflow_v3};
use crate::{
    yuv420_to_bgra, yuv420_to_bgra_f32, yuv420_to_bgra_f32_with_grey, yuv420_to_bgra_with_grey,
    yuv420_to_grey, yuv420_to_rgba, yuv420_to_rgba_f32, yuv420_to_rgba_f32_with_grey,
    yuv420_to_rgba_with_grey, YuvError, YuvGrayImageMut, YuvSource,
};
use tracing::{debug, trace};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
/// Channel order of converted frames
pub enum YuvColorFormat {
    #[default]
    Rgba,
    Bgra,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
/// How the greyscale side output of a frame is produced
pub enum YuvGreyMode {
    /// Only colour output is written
    #[default]
    Disabled,
    /// Colour and grey are written by the same pass.
    /// 8-bit frames get luminance of converted pixels, float frames get raw luma.
    Fused,
    /// Colour pass followed by luma copy, grey is always raw luma
    Separate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct YuvFrameOptions {
    pub color_format: YuvColorFormat,
    pub grey: YuvGreyMode,
}

/// Converts camera frames of fixed size according to [YuvFrameOptions].
#[derive(Debug, Clone)]
pub struct YuvFrameConverter {
    width: u32,
    height: u32,
    options: YuvFrameOptions,
}

impl YuvFrameConverter {
    pub fn new(width: u32, height: u32, options: YuvFrameOptions) -> Result<Self, YuvError> {
        check_image_size(width, height)?;
        check_overflow_v3(width as usize, height as usize, 4)?;
        width.checked_mul(4).ok_or(YuvError::PointerOverflow)?;
        Ok(Self {
            width,
            height,
            options,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn options(&self) -> YuvFrameOptions {
        self.options
    }

    /// Elements per row of tightly packed colour output
    pub fn rgba_stride(&self) -> u32 {
        self.width * 4
    }

    /// Elements in tightly packed colour output
    pub fn rgba_size(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Samples in grey output, zero when grey is disabled
    pub fn grey_size(&self) -> usize {
        match self.options.grey {
            YuvGreyMode::Disabled => 0,
            YuvGreyMode::Fused | YuvGreyMode::Separate => {
                self.width as usize * self.height as usize
            }
        }
    }

    /// Allocates tightly packed colour output for this frame size
    pub fn alloc_rgba<T: Copy + Default>(&self) -> Vec<T> {
        vec![T::default(); self.rgba_size()]
    }

    /// Allocates grey output, `None` when grey is disabled
    pub fn alloc_grey(&self) -> Option<YuvGrayImageMut<'static, u8>> {
        match self.options.grey {
            YuvGreyMode::Disabled => None,
            YuvGreyMode::Fused | YuvGreyMode::Separate => {
                Some(YuvGrayImageMut::alloc(self.width, self.height))
            }
        }
    }

    fn prepare<'a, 'b, S: YuvSource + ?Sized>(
        &self,
        source: &S,
        grey: Option<&'a mut YuvGrayImageMut<'b, u8>>,
    ) -> Result<Option<&'a mut YuvGrayImageMut<'b, u8>>, YuvError> {
        trace!(
            width = self.width,
            height = self.height,
            color_format = ?self.options.color_format,
            grey = ?self.options.grey,
            "Converting YUV 4:2:0 frame"
        );
        check_dimensions((self.width, self.height), (source.width(), source.height()))?;
        match self.options.grey {
            YuvGreyMode::Disabled => {
                if grey.is_some() {
                    trace!("Grey output provided while grey is disabled, leaving it untouched");
                }
                Ok(None)
            }
            YuvGreyMode::Fused | YuvGreyMode::Separate => {
                let grey = grey.ok_or(YuvError::MissingGreyOutput)?;
                // Separate mode writes colour before the grey pass runs
                grey.check_constraints()?;
                check_dimensions((self.width, self.height), (grey.width, grey.height))?;
                Ok(Some(grey))
            }
        }
    }

    /// Converts frame into 8-bit colour output and, when enabled, grey output.
    ///
    /// `rgba` must hold [rgba_size](Self::rgba_size) elements with stride
    /// [rgba_stride](Self::rgba_stride).
    pub fn convert<S: YuvSource + ?Sized>(
        &self,
        source: &S,
        rgba: &mut [u8],
        grey: Option<&mut YuvGrayImageMut<u8>>,
    ) -> Result<(), YuvError> {
        let stride = self.rgba_stride();
        let color_format = self.options.color_format;
        let result = self.prepare(source, grey).and_then(|grey| match grey {
            None => match color_format {
                YuvColorFormat::Rgba => yuv420_to_rgba(source, rgba, stride),
                YuvColorFormat::Bgra => yuv420_to_bgra(source, rgba, stride),
            },
            Some(grey) if self.options.grey == YuvGreyMode::Fused => match color_format {
                YuvColorFormat::Rgba => yuv420_to_rgba_with_grey(source, rgba, stride, grey),
                YuvColorFormat::Bgra => yuv420_to_bgra_with_grey(source, rgba, stride, grey),
            },
            Some(grey) => {
                match color_format {
                    YuvColorFormat::Rgba => yuv420_to_rgba(source, rgba, stride)?,
                    YuvColorFormat::Bgra => yuv420_to_bgra(source, rgba, stride)?,
                }
                yuv420_to_grey(source, grey)
            }
        });
        result.inspect_err(|e| debug!(error = %e, "YUV frame rejected"))
    }

    /// Converts frame into normalized float colour output and, when enabled, grey output.
    ///
    /// Grey output of float frames is always raw luma.
    pub fn convert_f32<S: YuvSource + ?Sized>(
        &self,
        source: &S,
        rgba: &mut [f32],
        grey: Option<&mut YuvGrayImageMut<u8>>,
    ) -> Result<(), YuvError> {
        let stride = self.rgba_stride();
        let color_format = self.options.color_format;
        let result = self.prepare(source, grey).and_then(|grey| match grey {
            None => match color_format {
                YuvColorFormat::Rgba => yuv420_to_rgba_f32(source, rgba, stride),
                YuvColorFormat::Bgra => yuv420_to_bgra_f32(source, rgba, stride),
            },
            Some(grey) if self.options.grey == YuvGreyMode::Fused => match color_format {
                YuvColorFormat::Rgba => yuv420_to_rgba_f32_with_grey(source, rgba, stride, grey),
                YuvColorFormat::Bgra => yuv420_to_bgra_f32_with_grey(source, rgba, stride, grey),
            },
            Some(grey) => {
                match color_format {
                    YuvColorFormat::Rgba => yuv420_to_rgba_f32(source, rgba, stride)?,
                    YuvColorFormat::Bgra => yuv420_to_bgra_f32(source, rgba, stride)?,
                }
                yuv420_to_grey(source, grey)
            }
        });
        result.inspect_err(|e| debug!(error = %e, "YUV frame rejected"))
    }
}
