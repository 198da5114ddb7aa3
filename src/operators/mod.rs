//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Pkz.
//! The Pkz project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Operators Module
//!
//! The checks applied to every segment, each implementing [`PkzOperator`].
//!
//! ## Operator Categories
//!
//! - **email**: reduces the `Email` column to its first address
//! - **address**: splits `ZipCity` and classifies address quality
//! - **matrix**: validates the `DataMatrix` code against member and device id
//! - **employee**: lists members whose status marks them as staff
//! - **deletion**: merges the exclusion sets and filters the segment
//!
//! The first four run independently on the same segment; only the deletion
//! step changes which members survive.
//!
//! [`PkzOperator`]: crate::operator::PkzOperator

pub mod address;
pub mod deletion;
pub mod email;
pub mod employee;
pub mod matrix;

pub use address::{PkzAddress, PkzAddressClass, PkzAddressClassifier};
pub use deletion::{PkzDeletionResolver, PkzExclusionSet};
pub use email::PkzEmailSanitizer;
pub use employee::PkzEmployeeTagger;
pub use matrix::PkzMatrixValidator;
