// Srcbuf
// Copyright (C) 2026 Srcbuf contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! srcbuf-core: growable byte storage for accumulating source text.
//!
//! The main type is [`SourceBuffer`], which owns a contiguous byte store,
//! doubles its capacity as content is appended, and is finalized exactly
//! once into a terminated, exact-sized array for a downstream consumer.

mod buffer;
mod error;

pub use buffer::*;
pub use error::*;
