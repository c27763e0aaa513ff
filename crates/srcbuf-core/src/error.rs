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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BufferError {
    #[error("failed to allocate buffer storage: requested {requested} bytes")]
    AllocationFailed { requested: usize },

    #[error("buffer capacity overflow: cannot double {current} bytes")]
    CapacityOverflow { current: usize },
}

impl BufferError {
    /// Process status an embedder should exit with when the failure goes
    /// unhandled. 71 is the BSD `EX_OSERR` convention for resource errors.
    pub fn exit_code(&self) -> i32 {
        71
    }
}

pub type BufferResult<T> = Result<T, BufferError>;
