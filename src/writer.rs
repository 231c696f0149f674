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
use crate::kernel::YuvKernelOutput;

/// Writes converted pixels of a single output row.
///
/// Colour row holds `width * 4` channels starting at the row origin, grey row,
/// when present, holds `width` samples. Each coordinate is written exactly once.
pub(crate) struct YuvRowWriter<'a, T> {
    rgba: &'a mut [T],
    grey: Option<&'a mut [u8]>,
}

impl<'a, T: Copy> YuvRowWriter<'a, T> {
    #[inline(always)]
    pub(crate) fn new(rgba: &'a mut [T], grey: Option<&'a mut [u8]>) -> Self {
        Self { rgba, grey }
    }

    #[inline(always)]
    pub(crate) fn write(&mut self, x: usize, output: YuvKernelOutput<T>) {
        let dst = &mut self.rgba[x * 4..x * 4 + 4];
        dst.copy_from_slice(&output.pixel);
        if let (Some(grey_row), Some(grey)) = (self.grey.as_deref_mut(), output.grey) {
            grey_row[x] = grey;
        }
    }
}
