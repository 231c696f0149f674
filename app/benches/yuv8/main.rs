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
use criterion::{criterion_group, criterion_main, Criterion};
use yuv2rgba::{
    yuv420_to_bgra, yuv420_to_grey, yuv420_to_rgba, yuv420_to_rgba_f32,
    yuv420_to_rgba_with_grey, YuvBiPlanarImageMut, YuvGrayImageMut, YuvNvSource,
    YuvPlanarImageMut,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;

    let mut planar_image = YuvPlanarImageMut::<u8>::alloc(width, height);
    for (i, dst) in planar_image.y_plane.borrow_mut().iter_mut().enumerate() {
        *dst = (i % 220 + 16) as u8;
    }
    for (i, dst) in planar_image.u_plane.borrow_mut().iter_mut().enumerate() {
        *dst = (i % 255) as u8;
    }
    for (i, dst) in planar_image.v_plane.borrow_mut().iter_mut().enumerate() {
        *dst = 255 - (i % 255) as u8;
    }

    let mut bi_planar_image = YuvBiPlanarImageMut::<u8>::alloc(width, height);
    bi_planar_image
        .y_plane
        .borrow_mut()
        .copy_from_slice(planar_image.y_plane.borrow());
    for (i, pair) in bi_planar_image
        .uv_plane
        .borrow_mut()
        .chunks_exact_mut(2)
        .enumerate()
    {
        pair[0] = planar_image.v_plane.borrow()[i];
        pair[1] = planar_image.u_plane.borrow()[i];
    }

    let fixed_planar = planar_image.to_fixed();
    let nv21 = YuvNvSource::nv21(bi_planar_image.to_fixed());

    c.bench_function("yuv2rgba YUV 4:2:0 -> RGBA", |b| {
        let mut rgba = vec![0u8; width as usize * height as usize * 4];
        b.iter(|| {
            yuv420_to_rgba(&fixed_planar, &mut rgba, width * 4).unwrap();
        })
    });

    c.bench_function("yuv2rgba NV21 -> BGRA", |b| {
        let mut bgra = vec![0u8; width as usize * height as usize * 4];
        b.iter(|| {
            yuv420_to_bgra(&nv21, &mut bgra, width * 4).unwrap();
        })
    });

    c.bench_function("yuv2rgba NV21 -> RGBA + Grey", |b| {
        let mut rgba = vec![0u8; width as usize * height as usize * 4];
        let mut grey = YuvGrayImageMut::<u8>::alloc(width, height);
        b.iter(|| {
            yuv420_to_rgba_with_grey(&nv21, &mut rgba, width * 4, &mut grey).unwrap();
        })
    });

    c.bench_function("yuv2rgba NV21 -> RGBA f32", |b| {
        let mut rgba = vec![0f32; width as usize * height as usize * 4];
        b.iter(|| {
            yuv420_to_rgba_f32(&nv21, &mut rgba, width * 4).unwrap();
        })
    });

    c.bench_function("yuv2rgba NV21 -> Grey", |b| {
        let mut grey = YuvGrayImageMut::<u8>::alloc(width, height);
        b.iter(|| {
            yuv420_to_grey(&nv21, &mut grey).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
