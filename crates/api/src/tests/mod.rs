// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod authorization_tests;
mod helpers;
mod visibility_tests;
mod workflow_tests;
