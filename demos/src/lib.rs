// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable Bracken demos. See the `examples/` directory of this package.
