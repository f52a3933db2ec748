// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transform stages — each stateless, taking the original or grayscale buffer
// and returning a new buffer. All heavy lifting delegates to `imageproc`.

pub mod blur;
pub mod channels;
pub mod contrast;
pub mod edges;
pub mod histogram;
