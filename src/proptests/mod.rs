// SPDX-License-Identifier: AGPL-3.0-or-later

mod payloads;
mod reordering;
mod sorting;
pub mod strategies;
