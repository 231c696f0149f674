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
use crate::kernel::{sample_and_convert, YuvPixelKernel};
use crate::writer::YuvRowWriter;
use crate::yuv_error::{check_dimensions, check_rgba_destination};
use crate::yuv_support::YuvSourceChannels;
use crate::{Bt601FixedPoint, Bt601Normalized, YuvError, YuvGrayImageMut, YuvSource};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

fn yuv_to_rgbx<
    S: YuvSource + ?Sized,
    K: YuvPixelKernel,
    const DESTINATION_CHANNELS: u8,
    const GREY: bool,
>(
    source: &S,
    rgba: &mut [K::Channel],
    rgba_stride: u32,
    grey: Option<&mut YuvGrayImageMut<u8>>,
) -> Result<(), YuvError> {
    let dst_chans: YuvSourceChannels = DESTINATION_CHANNELS.into();
    let channels = dst_chans.get_channels_count();
    let width = source.width();
    let height = source.height();

    source.check_constraints()?;
    check_rgba_destination(rgba, rgba_stride, width, height, channels)?;
    if let Some(grey) = grey.as_ref() {
        grey.check_constraints()?;
        check_dimensions((width, height), (grey.width, grey.height))?;
    }

    let process_row = |y: usize, rgba: &mut [K::Channel], grey: Option<&mut [u8]>| {
        let rgba = &mut rgba[..channels * width as usize];
        let grey = grey.map(|grey| &mut grey[..width as usize]);
        let mut writer = YuvRowWriter::new(rgba, grey);
        for x in 0..width {
            let output =
                sample_and_convert::<S, K, DESTINATION_CHANNELS, GREY>(source, x, y as u32);
            writer.write(x as usize, output);
        }
    };

    match grey {
        Some(grey) => {
            let grey_stride = grey.y_stride as usize;
            let grey_plane = grey.y_plane.borrow_mut();
            let iter;
            #[cfg(feature = "rayon")]
            {
                iter = rgba
                    .par_chunks_exact_mut(rgba_stride as usize)
                    .zip(grey_plane.par_chunks_exact_mut(grey_stride));
            }
            #[cfg(not(feature = "rayon"))]
            {
                iter = rgba
                    .chunks_exact_mut(rgba_stride as usize)
                    .zip(grey_plane.chunks_exact_mut(grey_stride));
            }
            iter.enumerate()
                .for_each(|(y, (rgba, grey))| process_row(y, rgba, Some(grey)));
        }
        None => {
            let iter;
            #[cfg(feature = "rayon")]
            {
                iter = rgba.par_chunks_exact_mut(rgba_stride as usize);
            }
            #[cfg(not(feature = "rayon"))]
            {
                iter = rgba.chunks_exact_mut(rgba_stride as usize);
            }
            iter.enumerate()
                .for_each(|(y, rgba)| process_row(y, rgba, None));
        }
    }

    Ok(())
}

/// Convert YUV 4:2:0 source to RGBA format.
///
/// This function takes YUV 4:2:0 data with 8-bit precision, planar or semi-planar,
/// and converts it to RGBA format with 8-bit per channel precision using Rec.601
/// limited range fixed point transform. Alpha is always 255.
///
/// # Arguments
///
/// * `source` - Source planar image or NV12/NV21 source.
/// * `rgba` - A mutable slice to store the converted RGBA data.
/// * `rgba_stride` - Elements per RGBA row.
///
/// # Errors
///
/// Returns [YuvError] if the lengths of the planes or the destination are not valid based
/// on the specified width, height, and strides.
///
pub fn yuv420_to_rgba<S: YuvSource + ?Sized>(
    source: &S,
    rgba: &mut [u8],
    rgba_stride: u32,
) -> Result<(), YuvError> {
    yuv_to_rgbx::<S, Bt601FixedPoint, { YuvSourceChannels::Rgba as u8 }, false>(
        source,
        rgba,
        rgba_stride,
        None,
    )
}

/// Convert YUV 4:2:0 source to BGRA format.
///
/// Same transform as [yuv420_to_rgba], red and blue channels are swapped in the destination.
///
/// # Arguments
///
/// * `source` - Source planar image or NV12/NV21 source.
/// * `bgra` - A mutable slice to store the converted BGRA data.
/// * `bgra_stride` - Elements per BGRA row.
///
/// # Errors
///
/// Returns [YuvError] if the lengths of the planes or the destination are not valid based
/// on the specified width, height, and strides.
///
pub fn yuv420_to_bgra<S: YuvSource + ?Sized>(
    source: &S,
    bgra: &mut [u8],
    bgra_stride: u32,
) -> Result<(), YuvError> {
    yuv_to_rgbx::<S, Bt601FixedPoint, { YuvSourceChannels::Bgra as u8 }, false>(
        source,
        bgra,
        bgra_stride,
        None,
    )
}

/// Convert YUV 4:2:0 source to RGBA format and greyscale in one pass.
///
/// Grey sample is the Rec.601 luminance of the converted, clamped pixel,
/// truncated toward zero.
///
/// # Arguments
///
/// * `source` - Source planar image or NV12/NV21 source.
/// * `rgba` - A mutable slice to store the converted RGBA data.
/// * `rgba_stride` - Elements per RGBA row.
/// * `grey` - Greyscale target, must have the same dimensions as the source.
///
/// # Errors
///
/// Returns [YuvError] if any plane, the destination or the grey image does not match
/// the source layout.
///
pub fn yuv420_to_rgba_with_grey<S: YuvSource + ?Sized>(
    source: &S,
    rgba: &mut [u8],
    rgba_stride: u32,
    grey: &mut YuvGrayImageMut<u8>,
) -> Result<(), YuvError> {
    yuv_to_rgbx::<S, Bt601FixedPoint, { YuvSourceChannels::Rgba as u8 }, true>(
        source,
        rgba,
        rgba_stride,
        Some(grey),
    )
}

/// Convert YUV 4:2:0 source to BGRA format and greyscale in one pass.
///
/// Greyscale is computed before channels are reordered, so it is identical
/// to [yuv420_to_rgba_with_grey] output.
///
/// # Errors
///
/// Returns [YuvError] if any plane, the destination or the grey image does not match
/// the source layout.
///
pub fn yuv420_to_bgra_with_grey<S: YuvSource + ?Sized>(
    source: &S,
    bgra: &mut [u8],
    bgra_stride: u32,
    grey: &mut YuvGrayImageMut<u8>,
) -> Result<(), YuvError> {
    yuv_to_rgbx::<S, Bt601FixedPoint, { YuvSourceChannels::Bgra as u8 }, true>(
        source,
        bgra,
        bgra_stride,
        Some(grey),
    )
}

/// Convert YUV 4:2:0 source to normalized RGBA format.
///
/// Channels are `f32` clamped into [0; 1], alpha is always 1.0.
///
/// # Arguments
///
/// * `source` - Source planar image or NV12/NV21 source.
/// * `rgba` - A mutable slice to store the converted RGBA data.
/// * `rgba_stride` - Elements per RGBA row.
///
/// # Errors
///
/// Returns [YuvError] if the lengths of the planes or the destination are not valid based
/// on the specified width, height, and strides.
///
pub fn yuv420_to_rgba_f32<S: YuvSource + ?Sized>(
    source: &S,
    rgba: &mut [f32],
    rgba_stride: u32,
) -> Result<(), YuvError> {
    yuv_to_rgbx::<S, Bt601Normalized, { YuvSourceChannels::Rgba as u8 }, false>(
        source,
        rgba,
        rgba_stride,
        None,
    )
}

/// Convert YUV 4:2:0 source to normalized BGRA format.
///
/// # Errors
///
/// Returns [YuvError] if the lengths of the planes or the destination are not valid based
/// on the specified width, height, and strides.
///
pub fn yuv420_to_bgra_f32<S: YuvSource + ?Sized>(
    source: &S,
    bgra: &mut [f32],
    bgra_stride: u32,
) -> Result<(), YuvError> {
    yuv_to_rgbx::<S, Bt601Normalized, { YuvSourceChannels::Bgra as u8 }, false>(
        source,
        bgra,
        bgra_stride,
        None,
    )
}

/// Convert YUV 4:2:0 source to normalized RGBA format and greyscale in one pass.
///
/// Unlike the 8-bit path, grey output receives the raw luma sample.
///
/// # Errors
///
/// Returns [YuvError] if any plane, the destination or the grey image does not match
/// the source layout.
///
pub fn yuv420_to_rgba_f32_with_grey<S: YuvSource + ?Sized>(
    source: &S,
    rgba: &mut [f32],
    rgba_stride: u32,
    grey: &mut YuvGrayImageMut<u8>,
) -> Result<(), YuvError> {
    yuv_to_rgbx::<S, Bt601Normalized, { YuvSourceChannels::Rgba as u8 }, true>(
        source,
        rgba,
        rgba_stride,
        Some(grey),
    )
}

/// Convert YUV 4:2:0 source to normalized BGRA format and greyscale in one pass.
///
/// Grey output receives the raw luma sample.
///
/// # Errors
///
/// Returns [YuvError] if any plane, the destination or the grey image does not match
/// the source layout.
///
pub fn yuv420_to_bgra_f32_with_grey<S: YuvSource + ?Sized>(
    source: &S,
    bgra: &mut [f32],
    bgra_stride: u32,
    grey: &mut YuvGrayImageMut<u8>,
) -> Result<(), YuvError> {
    yuv_to_rgbx::<S, Bt601Normalized, { YuvSourceChannels::Bgra as u8 }, true>(
        source,
        bgra,
        bgra_stride,
        Some(grey),
    )
}

/// Copies luma plane of YUV 4:2:0 source into greyscale image.
///
/// No colour conversion is performed and chroma planes are never read.
///
/// # Errors
///
/// Returns [YuvError] if the source layout is invalid or the grey image dimensions differ.
///
pub fn yuv420_to_grey<S: YuvSource + ?Sized>(
    source: &S,
    grey: &mut YuvGrayImageMut<u8>,
) -> Result<(), YuvError> {
    let width = source.width();
    source.check_constraints()?;
    grey.check_constraints()?;
    check_dimensions((width, source.height()), (grey.width, grey.height))?;

    let grey_stride = grey.y_stride as usize;
    let grey_plane = grey.y_plane.borrow_mut();
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = grey_plane.par_chunks_exact_mut(grey_stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = grey_plane.chunks_exact_mut(grey_stride);
    }
    iter.enumerate().for_each(|(y, dst)| {
        dst[..width as usize].copy_from_slice(source.luma_row(y as u32));
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv_pixel::*;
    use crate::{BufferStoreMut, YuvBiPlanarImageMut, YuvNvSource, YuvPlanarImageMut};
    use rand::Rng;

    fn random_planar(width: u32, height: u32) -> YuvPlanarImageMut<'static, u8> {
        let mut rng = rand::rng();
        let mut image = YuvPlanarImageMut::<u8>::alloc(width, height);
        rng.fill(image.y_plane.borrow_mut());
        rng.fill(image.u_plane.borrow_mut());
        rng.fill(image.v_plane.borrow_mut());
        image
    }

    /// Repacks planar chroma into interleaved plane with requested order
    fn to_bi_planar(
        planar: &YuvPlanarImageMut<u8>,
        order: crate::YuvNVOrder,
    ) -> YuvBiPlanarImageMut<'static, u8> {
        let mut bi_planar = YuvBiPlanarImageMut::<u8>::alloc(planar.width, planar.height);
        bi_planar
            .y_plane
            .borrow_mut()
            .copy_from_slice(planar.y_plane.borrow());
        let u = planar.u_plane.borrow();
        let v = planar.v_plane.borrow();
        for (i, pair) in bi_planar.uv_plane.borrow_mut().chunks_exact_mut(2).enumerate() {
            pair[order.get_u_position()] = u[i];
            pair[order.get_v_position()] = v[i];
        }
        bi_planar
    }

    #[test]
    fn test_frame_matches_pixel_kernels_on_odd_size() {
        let width = 37u32;
        let height = 21u32;
        let planar = random_planar(width, height);
        let source = planar.to_fixed();

        let mut rgba = vec![0u8; (width * height * 4) as usize];
        let mut bgra = vec![0u8; (width * height * 4) as usize];
        let mut grey = YuvGrayImageMut::<u8>::alloc(width, height);
        let mut bgra_grey = YuvGrayImageMut::<u8>::alloc(width, height);
        yuv420_to_rgba_with_grey(&source, &mut rgba, width * 4, &mut grey).unwrap();
        yuv420_to_bgra_with_grey(&source, &mut bgra, width * 4, &mut bgra_grey).unwrap();

        let mut plain_rgba = vec![0u8; rgba.len()];
        yuv420_to_rgba(&source, &mut plain_rgba, width * 4).unwrap();
        assert_eq!(plain_rgba, rgba);
        let mut plain_bgra = vec![0u8; bgra.len()];
        yuv420_to_bgra(&source, &mut plain_bgra, width * 4).unwrap();
        assert_eq!(plain_bgra, bgra);

        assert_eq!(grey.y_plane.borrow(), bgra_grey.y_plane.borrow());

        for y in 0..height {
            for x in 0..width {
                let offset = ((y * width + x) * 4) as usize;
                let (pixel, grey_value) = yuv_to_rgba_grey_pixel(&source, x, y);
                assert_eq!(&rgba[offset..offset + 4], &pixel);
                assert_eq!(&bgra[offset..offset + 4], &yuv_to_bgra_pixel(&source, x, y));
                assert_eq!(grey.y_plane.borrow()[(y * width + x) as usize], grey_value);
            }
        }
    }

    #[test]
    fn test_float_frame_with_grey_writes_raw_luma() {
        let width = 16u32;
        let height = 9u32;
        let planar = random_planar(width, height);
        let source = planar.to_fixed();

        let mut rgba = vec![0f32; (width * height * 4) as usize];
        let mut bgra = vec![0f32; (width * height * 4) as usize];
        let mut grey = YuvGrayImageMut::<u8>::alloc(width, height);
        let mut bgra_grey = YuvGrayImageMut::<u8>::alloc(width, height);
        yuv420_to_rgba_f32_with_grey(&source, &mut rgba, width * 4, &mut grey).unwrap();
        yuv420_to_bgra_f32_with_grey(&source, &mut bgra, width * 4, &mut bgra_grey).unwrap();

        assert_eq!(grey.y_plane.borrow(), planar.y_plane.borrow());
        assert_eq!(bgra_grey.y_plane.borrow(), planar.y_plane.borrow());

        let mut plain = vec![0f32; rgba.len()];
        yuv420_to_rgba_f32(&source, &mut plain, width * 4).unwrap();
        assert_eq!(plain, rgba);
        yuv420_to_bgra_f32(&source, &mut plain, width * 4).unwrap();
        assert_eq!(plain, bgra);

        for (rgba, bgra) in rgba.chunks_exact(4).zip(bgra.chunks_exact(4)) {
            assert_eq!([rgba[2], rgba[1], rgba[0], rgba[3]], bgra);
            assert!(rgba.iter().all(|c| (0f32..=1f32).contains(c)));
            assert_eq!(rgba[3], 1.);
        }
        assert_eq!(&rgba[4..8], &yuv_to_rgba_f32_pixel(&source, 1, 0));
    }

    #[test]
    fn test_strided_destination_keeps_padding() {
        let width = 5u32;
        let height = 3u32;
        let stride = width * 4 + 3;
        let planar = random_planar(width, height);
        let source = planar.to_fixed();

        let mut rgba = vec![7u8; (stride * height) as usize];
        yuv420_to_rgba(&source, &mut rgba, stride).unwrap();
        for row in rgba.chunks_exact(stride as usize) {
            assert_eq!(&row[(width * 4) as usize..], &[7, 7, 7]);
            assert!(row[..(width * 4) as usize]
                .chunks_exact(4)
                .all(|px| px[3] == 255));
        }
    }

    #[test]
    fn test_semi_planar_matches_planar() {
        let width = 12u32;
        let height = 7u32;
        let planar = random_planar(width, height);
        let nv12 = to_bi_planar(&planar, crate::YuvNVOrder::UV);
        let nv21 = to_bi_planar(&planar, crate::YuvNVOrder::VU);

        let mut expected = vec![0u8; (width * height * 4) as usize];
        yuv420_to_bgra(&planar.to_fixed(), &mut expected, width * 4).unwrap();

        let mut received = vec![0u8; expected.len()];
        yuv420_to_bgra(&YuvNvSource::nv12(nv12.to_fixed()), &mut received, width * 4).unwrap();
        assert_eq!(expected, received);
        received.fill(0);
        yuv420_to_bgra(&YuvNvSource::nv21(nv21.to_fixed()), &mut received, width * 4).unwrap();
        assert_eq!(expected, received);
    }

    #[test]
    fn test_grey_pass_copies_luma() {
        let width = 9u32;
        let height = 4u32;
        let planar = random_planar(width, height);
        let mut storage = vec![0u8; (12 * height) as usize];
        {
            let mut grey = YuvGrayImageMut {
                y_plane: BufferStoreMut::Borrowed(&mut storage),
                y_stride: 12,
                width,
                height,
            };
            yuv420_to_grey(&planar.to_fixed(), &mut grey).unwrap();
        }
        for (dst, src) in storage
            .chunks_exact(12)
            .zip(planar.y_plane.borrow().chunks_exact(width as usize))
        {
            assert_eq!(&dst[..width as usize], src);
            assert_eq!(&dst[width as usize..], &[0, 0, 0]);
        }
    }

    #[test]
    fn test_layout_errors() {
        let planar = random_planar(8, 8);
        let source = planar.to_fixed();

        let mut short = vec![0u8; 8 * 4 * 7];
        assert!(matches!(
            yuv420_to_rgba(&source, &mut short, 8 * 4),
            Err(YuvError::DestinationSizeMismatch(_))
        ));

        let mut rgba = vec![0u8; 8 * 4 * 8];
        let mut grey = YuvGrayImageMut::<u8>::alloc(4, 16);
        assert!(matches!(
            yuv420_to_rgba_with_grey(&source, &mut rgba, 8 * 4, &mut grey),
            Err(YuvError::ImageDimensionsMismatch(_))
        ));
        assert!(matches!(
            yuv420_to_grey(&source, &mut grey),
            Err(YuvError::ImageDimensionsMismatch(_))
        ));

        let broken = crate::YuvPlanarImage {
            u_plane: &planar.u_plane.borrow()[..8],
            ..planar.to_fixed()
        };
        assert!(matches!(
            yuv420_to_rgba(&broken, &mut rgba, 8 * 4),
            Err(YuvError::ChromaPlaneSizeMismatch(_))
        ));
    }
}
